//! Single-pass CSV tokenizer
//!
//! Splits raw text into rows of raw field strings. Quoting follows the usual
//! CSV conventions: a field that starts with the quote character may contain
//! delimiters and line breaks, and a doubled quote inside it stands for one
//! literal quote. `\n`, `\r\n` and a lone `\r` all terminate a row.
//!
//! The tokenizer never fails. Malformed quoting is recovered leniently (an
//! unterminated quoted field simply ends at end of input) and content
//! validation is left to later stages.

use crate::constants::{BYTE_ORDER_MARK, DEFAULT_DELIMITER, DEFAULT_QUOTE};

/// Position of the scanner relative to the current field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing consumed for the current field yet
    FieldStart,
    /// Inside a field that did not start with a quote
    Unquoted,
    /// Inside a quoted field
    Quoted,
    /// Saw a quote while inside a quoted field: either an escape or the close
    QuoteInQuoted,
}

/// Character-level CSV tokenizer
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    delimiter: char,
    quote: char,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER, DEFAULT_QUOTE)
    }
}

/// Accumulates fields and rows while the scanner walks the input
#[derive(Debug, Default)]
struct RowBuffer {
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    field: String,
    /// Whether anything other than a line terminator was consumed for this row
    has_content: bool,
}

impl RowBuffer {
    fn push_char(&mut self, ch: char) {
        self.field.push(ch);
        self.has_content = true;
    }

    fn end_field(&mut self) {
        self.row.push(std::mem::take(&mut self.field));
        self.has_content = true;
    }

    fn end_row(&mut self) {
        if self.has_content {
            self.row.push(std::mem::take(&mut self.field));
            self.rows.push(std::mem::take(&mut self.row));
        } else {
            // blank line
            self.row.clear();
            self.field.clear();
        }
        self.has_content = false;
    }

    fn finish(mut self) -> Vec<Vec<String>> {
        self.end_row();
        self.rows
    }
}

impl Tokenizer {
    /// Create a tokenizer for the given delimiter and quote characters
    pub fn new(delimiter: char, quote: char) -> Self {
        Self { delimiter, quote }
    }

    /// Split text into rows of raw fields
    ///
    /// A leading byte-order mark is discarded. Empty input yields no rows and
    /// blank lines are not reported as rows. A final row without a line
    /// terminator is still returned.
    pub fn tokenize(&self, text: &str) -> Vec<Vec<String>> {
        let text = strip_bom(text);
        let mut buffer = RowBuffer::default();
        let mut state = State::FieldStart;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == '\r' || ch == '\n' {
                if matches!(state, State::Quoted) {
                    buffer.push_char(ch);
                    continue;
                }
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                buffer.end_row();
                state = State::FieldStart;
                continue;
            }

            state = match state {
                State::FieldStart | State::Unquoted if ch == self.delimiter => {
                    buffer.end_field();
                    State::FieldStart
                }
                State::FieldStart if ch == self.quote => {
                    buffer.has_content = true;
                    State::Quoted
                }
                State::FieldStart | State::Unquoted => {
                    buffer.push_char(ch);
                    State::Unquoted
                }
                State::Quoted if ch == self.quote => State::QuoteInQuoted,
                State::Quoted => {
                    buffer.push_char(ch);
                    State::Quoted
                }
                State::QuoteInQuoted if ch == self.quote => {
                    buffer.push_char(ch);
                    State::Quoted
                }
                State::QuoteInQuoted if ch == self.delimiter => {
                    buffer.end_field();
                    State::FieldStart
                }
                // Stray text after a closing quote is kept as-is
                State::QuoteInQuoted => {
                    buffer.push_char(ch);
                    State::Unquoted
                }
            };
        }

        buffer.finish()
    }
}

/// Tokenize text with the default comma delimiter and double-quote character
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    Tokenizer::default().tokenize(text)
}

/// Remove a byte-order mark from the very start of the text
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text)
}
