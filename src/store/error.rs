use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The underlying file could not be read or written.
    Io { path: String, message: String },
    /// The document could not be encoded or decoded.
    Format(String),
    LockPoisoned(&'static str),
}

impl PersistenceError {
    pub(crate) fn io(path: impl fmt::Display, err: std::io::Error) -> Self {
        PersistenceError::Io {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Io { path, message } => {
                write!(f, "i/o error on {}: {}", path, message)
            }
            PersistenceError::Format(message) => write!(f, "format error: {}", message),
            PersistenceError::LockPoisoned(operation) => {
                write!(f, "roster store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        PersistenceError::Format(err.to_string())
    }
}
