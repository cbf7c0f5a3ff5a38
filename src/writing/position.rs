//! Line and column bookkeeping for emitted text

use std::fmt;

/// The 1-based line and column of the next character to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Position {
        Position { line: 1, column: 1 }
    }

    /// Move right by the given number of display columns.
    pub(crate) fn advance(&mut self, width: usize) {
        self.column += width;
    }

    /// Move to the start of the next line.
    pub(crate) fn break_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// Re-derive the position after text has been emitted verbatim, for
    /// content that may itself contain line breaks. Each of `\r\n`, `\r`,
    /// and `\n` counts as exactly one break, `\r\n` as a single unit; a
    /// break resets the column to 0 before the per-character increment, so
    /// afterwards the column reflects the length of the final line.
    pub(crate) fn advance_through(&mut self, content: &str) {
        let mut chars = content
            .chars()
            .peekable();

        while let Some(c) = chars.next() {
            match c {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    self.line += 1;
                    self.column = 0;
                }
                '\n' => {
                    self.line += 1;
                    self.column = 0;
                }
                _ => {}
            }
            self.column += 1;
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
