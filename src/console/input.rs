use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::player::Position;

/// A prompt/answer wrapper around an input and an output stream.
///
/// Every `read_*` method returns `Ok(None)` once the input is exhausted.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line.
    pub fn say(&mut self, line: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Print `prompt` and read one line, trimmed.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Keep prompting until the answer parses as `T`.
    pub fn read_parsed<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say(format!("Invalid input: {:?}", line))?,
            }
        }
    }

    pub fn read_int(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        self.read_parsed(prompt)
    }

    /// Unparsable input counts as `0.0`; negative amounts are asked again.
    pub fn read_cost(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            let cost = line.parse::<f64>().unwrap_or(0.0);
            if cost.is_finite() && cost >= 0.0 {
                return Ok(Some(cost));
            }
            self.say("Cost cannot be negative.")?;
        }
    }

    pub fn read_position(&mut self, prompt: &str) -> io::Result<Option<Position>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<Position>() {
                Ok(position) => return Ok(Some(position)),
                Err(_) => {
                    let allowed: Vec<&str> = Position::ALL.iter().map(|p| p.as_str()).collect();
                    self.say(format!(
                        "Invalid position. Please enter one of: {}",
                        allowed.join(", ")
                    ))?;
                }
            }
        }
    }

    /// `y`/`Y` is yes, anything else is no.
    pub fn read_yes_no(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        Ok(self
            .read_line(prompt)?
            .map(|answer| answer.eq_ignore_ascii_case("y")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn read_line_trims_and_echoes_prompt() {
        let mut console = console("  John Doe  \n");
        assert_eq!(console.read_line("Name: ").unwrap(), Some("John Doe".into()));
        assert_eq!(printed(console), "Name: ");
    }

    #[test]
    fn end_of_input_is_none() {
        let mut console = console("");
        assert_eq!(console.read_line("> ").unwrap(), None);
        assert_eq!(console.read_int("> ").unwrap(), None);
    }

    #[test]
    fn read_int_reprompts_until_valid() {
        let mut console = console("abc\n-3\n");
        assert_eq!(console.read_int("n: ").unwrap(), Some(-3));
        assert!(printed(console).contains("Invalid input: \"abc\""));
    }

    #[test]
    fn read_parsed_works_for_non_numeric_types() {
        let mut console = console("striker\npunter\n");
        assert_eq!(
            console.read_parsed::<Position>("pos: ").unwrap(),
            Some(Position::Punter)
        );
        let out = printed(console);
        assert!(out.contains("Invalid input: \"striker\""));
        assert!(!out.contains("number"));
    }

    #[test]
    fn read_cost_defaults_garbage_to_zero() {
        let mut console = console("lots\n");
        assert_eq!(console.read_cost("cost: ").unwrap(), Some(0.0));
    }

    #[test]
    fn read_cost_rejects_negative() {
        let mut console = console("-5\n12.5\n");
        assert_eq!(console.read_cost("cost: ").unwrap(), Some(12.5));
        assert!(printed(console).contains("Cost cannot be negative."));
    }

    #[test]
    fn read_position_lists_allowed_values_on_error() {
        let mut console = console("striker\nwide receiver\n");
        assert_eq!(
            console.read_position("pos: ").unwrap(),
            Some(Position::WideReceiver)
        );
        let out = printed(console);
        assert!(out.contains("Invalid position."));
        assert!(out.contains("QUARTERBACK"));
    }

    #[test]
    fn yes_no() {
        let mut console = console("Y\nnope\n");
        assert_eq!(console.read_yes_no("? ").unwrap(), Some(true));
        assert_eq!(console.read_yes_no("? ").unwrap(), Some(false));
    }
}
