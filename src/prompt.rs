use std::io::{BufRead, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed")]
    Eof,
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a whole number.";

/// Line-oriented request/response console over any reader and writer.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a full line.
    pub fn say(&mut self, message: &str) -> PromptResult<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Writes pre-formatted text as is.
    pub fn print(&mut self, text: &str) -> PromptResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Shows `label` and reads one line without its line ending.
    pub fn ask(&mut self, label: &str) -> PromptResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Eof);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Re-asks until the answer parses as an integer.
    pub fn ask_int(&mut self, label: &str) -> PromptResult<i32> {
        loop {
            let answer = self.ask(label)?;
            match answer.trim().parse::<i32>() {
                Ok(n) => return Ok(n),
                Err(_) => self.say(INVALID_NUMBER_MESSAGE)?,
            }
        }
    }

    /// Reads a menu selection; `None` when the answer is not a number.
    pub fn ask_choice(&mut self, label: &str) -> PromptResult<Option<u32>> {
        let answer = self.ask(label)?;
        Ok(answer.trim().parse::<u32>().ok())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompt<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).expect("output should be utf-8")
    }

    #[test]
    fn ask_strips_line_endings_but_keeps_inner_spaces() {
        let mut p = prompt("Buy  milk \r\nnext\n");
        assert_eq!(p.ask("Title: ").expect("line"), "Buy  milk ");
        assert_eq!(p.ask("Other: ").expect("line"), "next");
        assert_eq!(output(p), "Title: Other: ");
    }

    #[test]
    fn ask_reports_eof() {
        let mut p = prompt("");
        assert!(matches!(p.ask("x"), Err(PromptError::Eof)));
    }

    #[test]
    fn ask_accepts_last_line_without_newline() {
        let mut p = prompt("tail");
        assert_eq!(p.ask("").expect("line"), "tail");
        assert!(matches!(p.ask(""), Err(PromptError::Eof)));
    }

    #[test]
    fn ask_int_retries_until_valid() {
        let mut p = prompt("high\n\n -3 \n");
        assert_eq!(p.ask_int("Priority: ").expect("int"), -3);
        let out = output(p);
        assert_eq!(out.matches(INVALID_NUMBER_MESSAGE).count(), 2);
    }

    #[test]
    fn ask_choice_maps_non_numeric_to_none() {
        let mut p = prompt("2\nabc\n-1\n");
        assert_eq!(p.ask_choice("> ").expect("choice"), Some(2));
        assert_eq!(p.ask_choice("> ").expect("choice"), None);
        assert_eq!(p.ask_choice("> ").expect("choice"), None);
    }
}
