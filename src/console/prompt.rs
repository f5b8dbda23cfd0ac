//! Line-oriented prompting over any reader and writer.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::warn;

use crate::error::{PayrollError, PayrollResult};

/// Parses a number entered for `field`.
///
/// Surrounding whitespace is ignored. Anything else that does not parse is
/// reported as [`PayrollError::MalformedInput`].
///
/// ```
/// use payroll_manager::console::parse_number;
///
/// assert_eq!(parse_number::<u32>("Hours Worked", " 8 ").unwrap(), 8);
/// assert!(parse_number::<u32>("Hours Worked", "eight").is_err());
/// ```
pub fn parse_number<T: FromStr>(field: &str, raw: &str) -> PayrollResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| PayrollError::MalformedInput {
            field: field.to_string(),
            input: raw.trim().to_string(),
        })
}

/// Reads answers from `input` and writes prompts and messages to `output`.
///
/// End of input is reported as `Ok(None)` so callers can wind down cleanly.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a full line of output.
    pub fn say(&mut self, line: impl fmt::Display) -> PayrollResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Writes `prompt` and reads one line, without its line terminator.
    pub fn ask(&mut self, prompt: &str) -> PayrollResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Asks for a number, repeating the prompt until the answer parses.
    pub fn ask_number<T: FromStr>(&mut self, prompt: &str, field: &str) -> PayrollResult<Option<T>> {
        loop {
            let Some(raw) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse_number(field, &raw) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    warn!(error = %err, "Rejected numeric input");
                    self.say(format!("{}. Please try again.", err))?;
                }
            }
        }
    }

    /// Consumes the prompter, returning its streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
