//! Line-based input for the CLI client.
//!
//! This module owns prompt parsing and re-prompting so the scene handlers only
//! ever see validated values. End of input is reported as `None`; callers
//! treat it as the player walking away.

use std::io::{self, BufRead, Write};

/// Reads validated answers from a line source, echoing prompts to a sink.
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the prompt and returns the output sink.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Read one trimmed line. Returns `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask for a number in `[min, max]` until one is given.
    ///
    /// Non-numeric and out-of-range answers print an error and re-prompt.
    pub fn choose(&mut self, min: u32, max: u32) -> io::Result<Option<u32>> {
        loop {
            write!(self.writer, "\nEnter a number ({min}-{max}).\n>> ")?;
            self.writer.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_choice(&line, min, max) {
                Some(choice) => return Ok(Some(choice)),
                None => {
                    tracing::debug!("Rejected menu input {:?} for range {}-{}", line, min, max);
                    writeln!(self.writer, "Invalid input. Please try again.")?;
                }
            }
        }
    }

    /// Ask a free-form question. Blank answers are returned as empty strings.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{label}\n>> ")?;
        self.writer.flush()?;
        self.read_line()
    }

    /// Ask for a non-empty line, re-prompting on blank answers.
    pub fn read_required(&mut self, label: &str) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.ask(label)? else {
                return Ok(None);
            };
            if !line.is_empty() {
                return Ok(Some(line));
            }
            writeln!(self.writer, "This cannot be empty.")?;
        }
    }
}

/// Parses a menu answer, accepting only integers within `[min, max]`.
pub fn parse_choice(input: &str, min: u32, max: u32) -> Option<u32> {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|choice| (min..=max).contains(choice))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompt: Prompt<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompt.into_writer()).unwrap()
    }

    #[test]
    fn parses_in_range_numbers() {
        assert_eq!(parse_choice(" 3 ", 0, 4), Some(3));
        assert_eq!(parse_choice("0", 0, 4), Some(0));
        assert_eq!(parse_choice("5", 0, 4), None);
        assert_eq!(parse_choice("-1", 0, 4), None);
        assert_eq!(parse_choice("two", 0, 4), None);
        assert_eq!(parse_choice("", 0, 4), None);
    }

    #[test]
    fn reprompts_until_valid() {
        let mut p = prompt("abc\n9\n2\n");
        assert_eq!(p.choose(1, 3).unwrap(), Some(2));
        let text = output(p);
        assert_eq!(text.matches("Invalid input").count(), 2);
        assert_eq!(text.matches("Enter a number (1-3)").count(), 3);
    }

    #[test]
    fn end_of_input_yields_none() {
        let mut p = prompt("x\n");
        assert_eq!(p.choose(0, 1).unwrap(), None);
    }

    #[test]
    fn required_line_skips_blanks() {
        let mut p = prompt("\n   \nAria\n");
        assert_eq!(p.read_required("Name?").unwrap(), Some("Aria".to_string()));
        assert_eq!(output(p).matches("cannot be empty").count(), 2);
    }

    #[test]
    fn line_without_newline_is_read() {
        let mut p = prompt("4");
        assert_eq!(p.choose(0, 4).unwrap(), Some(4));
        assert_eq!(p.read_line().unwrap(), None);
    }
}
