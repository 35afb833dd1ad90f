//! The reader for delimited text (TSV and CSV spreadsheet exports).

use crate::core::error::{Error, Result};
use std::str::FromStr;

/// The character that separates the fields of a row. The caller picks it; it
/// is never guessed from the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Comma,
    Other(char),
}

impl Delimiter {
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Tab => '\t',
            Delimiter::Comma => ',',
            Delimiter::Other(ch) => *ch,
        }
    }
}

impl FromStr for Delimiter {
    type Err = String;

    /// Accepts "tab", "comma", an escaped "\t", or any single character.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "tab" | "\\t" | "\t" => return Ok(Delimiter::Tab),
            "comma" | "," => return Ok(Delimiter::Comma),
            _ => {}
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch != '"' && ch != '\n' && ch != '\r' => {
                Ok(Delimiter::Other(ch))
            }
            _ => Err(format!("invalid delimiter: {s:?}")),
        }
    }
}

/// Splits text into records of fields. Fields may be wrapped in double
/// quotes, in which case delimiters and line breaks inside them are literal
/// and a doubled quote stands for one quote character.
pub struct DelimitedReader {
    input: Vec<char>,
    pos: usize,
    delimiter: char,
    // The 1-based line of the char at 'pos'.
    line: usize,
}

impl DelimitedReader {
    pub fn new(input: &str, delimiter: Delimiter) -> Self {
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        Self {
            input: input.chars().collect(),
            pos: 0,
            delimiter: delimiter.as_char(),
            line: 1,
        }
    }

    fn has_next(&self) -> bool {
        self.pos < self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn read_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    /// Consumes a line break ("\n", "\r\n" or a lone "\r"), if there is one.
    fn eat_line_break(&mut self) -> bool {
        match self.peek() {
            Some('\n') => {
                self.read_char();
                true
            }
            Some('\r') => {
                self.read_char();
                if self.peek() == Some('\n') {
                    self.read_char();
                }
                true
            }
            _ => false,
        }
    }

    /// Reads the body of a quoted field. The opening quote was consumed.
    fn read_quoted(&mut self, field: &mut String) -> Result<()> {
        let start_line = self.line;
        loop {
            match self.read_char() {
                None => {
                    return Err(Error::UnterminatedQuote { line: start_line });
                }
                Some('"') => {
                    // A doubled quote is an escaped quote.
                    if self.peek() == Some('"') {
                        self.read_char();
                        field.push('"');
                    } else {
                        return Ok(());
                    }
                }
                Some(ch) => field.push(ch),
            }
        }
    }

    /// Reads one record. Returns the fields, untrimmed.
    fn read_record(&mut self) -> Result<Vec<String>> {
        let mut record = Vec::new();
        let mut field = String::new();
        loop {
            if self.eat_line_break() || !self.has_next() {
                record.push(field);
                return Ok(record);
            }

            match self.peek() {
                Some(ch) if ch == self.delimiter => {
                    self.read_char();
                    record.push(std::mem::take(&mut field));
                }
                Some('"') if field.trim().is_empty() => {
                    self.read_char();
                    field.clear();
                    self.read_quoted(&mut field)?;
                }
                Some(_) => {
                    if let Some(ch) = self.read_char() {
                        field.push(ch);
                    }
                }
                None => {}
            }
        }
    }

    /// Reads all of the records in the input. Blank lines are skipped and
    /// every field is trimmed.
    pub fn read_all(&mut self) -> Result<Vec<Vec<String>>> {
        let mut records = Vec::new();
        while self.has_next() {
            let record = self.read_record()?;
            let blank = record.len() == 1 && record[0].trim().is_empty();
            if blank {
                continue;
            }
            records.push(
                record
                    .into_iter()
                    .map(|f| f.trim().to_string())
                    .collect(),
            );
        }
        Ok(records)
    }
}
