use crate::character_sets::{is_alphanumeric, to_upper};

/// Read position over the cleaned input.
///
/// Every delimiter the scanner looks ahead for is ASCII, so lookahead works on
/// bytes; only the character under the cursor is decoded.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Character under the cursor
    pub fn current(&self) -> Option<char> {
        self.input.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    /// Byte `ahead` positions past the cursor
    pub fn peek(&self, ahead: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + ahead).copied()
    }

    /// Move past the character under the cursor
    pub fn bump(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Move past `n` ASCII bytes
    pub fn skip(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Go back to the start of the input
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    /// The two characters after a '%' under the cursor, upper-cased, if both
    /// exist and are alphanumeric
    pub fn escape_digits(&self) -> Option<(char, char)> {
        let hi = char::from(self.peek(1)?);
        let lo = char::from(self.peek(2)?);
        (is_alphanumeric(hi) && is_alphanumeric(lo)).then(|| (to_upper(hi), to_upper(lo)))
    }
}
