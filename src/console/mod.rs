//! Console - Prompted input and the numbered menu that drives a roster.
//!
//! Everything here is generic over `BufRead`/`Write`, so the same loop runs
//! on stdin/stdout in the binary and on in-memory buffers in tests.

mod input;
mod menu;

pub use input::Console;
pub use menu::run_menu;
