use crate::compat::String;
use crate::segments::Span;

/// Fixed-capacity text buffer that is reused across calls.
///
/// Capacity is measured in UTF-8 bytes. Writes that do not fit are dropped
/// instead of growing the allocation, so callers see a truncated but
/// well-formed result once the buffer is full.
#[derive(Debug, Clone)]
pub struct BoundedBuffer {
    buf: String,
    capacity: usize,
}

impl BoundedBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Reset the write cursor to zero
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Rewind the write cursor to `len`
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    /// Append a character if it fits. Returns false when it was dropped.
    pub fn push(&mut self, c: char) -> bool {
        if self.buf.len() + c.len_utf8() > self.capacity {
            return false;
        }
        self.buf.push(c);
        true
    }

    /// Append as much of `s` as fits, stopping at a character boundary
    pub fn push_str(&mut self, s: &str) {
        let room = self.capacity.saturating_sub(self.buf.len());
        if s.len() <= room {
            self.buf.push_str(s);
            return;
        }
        let mut end = room;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.buf.push_str(&s[..end]);
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Text covered by a span, or "" if the span is out of range
    pub fn slice(&self, span: Span) -> &str {
        self.buf.get(span.start()..span.end()).unwrap_or("")
    }

    pub fn last_byte(&self) -> Option<u8> {
        self.buf.as_bytes().last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_stops_at_capacity() {
        let mut buffer = BoundedBuffer::with_capacity(3);
        assert!(buffer.push('a'));
        assert!(buffer.push('b'));
        assert!(buffer.push('c'));
        assert!(!buffer.push('d'));
        assert_eq!(buffer.as_str(), "abc");
    }

    #[test]
    fn test_push_str_truncates_on_char_boundary() {
        let mut buffer = BoundedBuffer::with_capacity(4);
        buffer.push_str("ab");
        buffer.push_str("éé");
        assert_eq!(buffer.as_str(), "abé");
        assert_eq!(buffer.len(), 4);

        let mut buffer = BoundedBuffer::with_capacity(3);
        buffer.push_str("aéb");
        assert_eq!(buffer.as_str(), "aé");
    }

    #[test]
    fn test_wide_char_is_dropped_when_it_does_not_fit() {
        let mut buffer = BoundedBuffer::with_capacity(2);
        buffer.push('a');
        assert!(!buffer.push('é'));
        assert!(buffer.push('b'));
        assert_eq!(buffer.as_str(), "ab");
    }

    #[test]
    fn test_clear_and_slice() {
        let mut buffer = BoundedBuffer::with_capacity(16);
        buffer.push_str("example.com");
        assert_eq!(buffer.slice(Span::new(8, 3)), "com");
        assert_eq!(buffer.slice(Span::new(8, 30)), "");
        buffer.truncate(7);
        assert_eq!(buffer.as_str(), "example");
        buffer.clear();
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 16);
    }
}
