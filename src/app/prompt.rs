use crate::utils::error::{BudgetError, Result};
use std::io::{BufRead, Write};

/// Line-oriented prompt over any reader/writer pair.
///
/// Every question is a parser returning `Err(message)` for unacceptable answers; the
/// message is printed and the question asked again until a valid answer arrives or the
/// input ends.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prints `message` and returns the raw line without its line ending.
    pub fn read_line(&mut self, message: &str) -> Result<String> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(BudgetError::InputClosed {
                prompt: message.trim().to_string(),
            });
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn read_validated<T, F>(&mut self, message: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> std::result::Result<T, String>,
    {
        loop {
            let line = self.read_line(message)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(reason) => {
                    tracing::debug!("rejected answer {:?}: {}", line, reason);
                    writeln!(self.writer, "{}", reason)?;
                }
            }
        }
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
