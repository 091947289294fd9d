use super::cursor::Cursor;
use super::state::{Flow, State};
use crate::buffer::BoundedBuffer;
use crate::character_sets::{is_alphanumeric, is_numeric, to_lower};
use crate::compat::ToString;
use crate::error::{ParseError, Result};
use crate::segments::{Segment, SegmentTable, Span};

/// Segment the cleaned `input` into `table`, copying captured characters into
/// `buffer`.
///
/// At most `limit` bytes are captured. Running out of input or room is not an
/// error: the segment in progress keeps what it has and later segments stay
/// not visited. On error the table and buffer are reset.
///
/// # Errors
///
/// Returns [`ParseError::UnexpectedCharacter`] if the query or anchor segment
/// is entered at a character other than its delimiter.
pub fn scan_segments(
    input: &str,
    buffer: &mut BoundedBuffer,
    table: &mut SegmentTable,
    limit: usize,
) -> Result<()> {
    table.reset();
    buffer.clear();

    let result = Scanner {
        cursor: Cursor::new(input),
        state: State::new(),
        buffer: &mut *buffer,
        table: &mut *table,
        limit,
        overflowed: false,
    }
    .run();

    if let Err(ParseError::UnexpectedCharacter { segment, found, .. }) = &result {
        tracing::debug!(input, %segment, %found, "url scan failed");
        table.reset();
        buffer.clear();
    }
    result
}

struct Scanner<'a> {
    cursor: Cursor<'a>,
    state: State,
    buffer: &'a mut BoundedBuffer,
    table: &'a mut SegmentTable,
    limit: usize,
    overflowed: bool,
}

impl Scanner<'_> {
    fn run(&mut self) -> Result<()> {
        while let Some(c) = self.cursor.current() {
            let stepped = self.state.segment;
            let flow = match stepped {
                Segment::Scheme => self.scheme(c),
                Segment::Hostname => self.hostname(c),
                Segment::Port => self.port(c),
                Segment::Path => self.path(c),
                Segment::Query => self.query(c)?,
                Segment::Anchor => self.anchor(c)?,
            };
            if flow == Flow::Stop {
                break;
            }

            let full = self.is_full();
            if full || self.cursor.is_exhausted() {
                if full {
                    tracing::trace!(limit = self.limit, "working buffer full, scan truncated");
                }
                self.finish(stepped);
                break;
            }
        }
        Ok(())
    }

    fn is_full(&self) -> bool {
        self.overflowed || self.buffer.len() >= self.limit
    }

    /// Copy a character into the working buffer if there is room
    fn emit(&mut self, c: char) {
        if self.buffer.len() + c.len_utf8() > self.limit || !self.buffer.push(c) {
            self.overflowed = true;
        }
    }

    fn begin(&mut self) {
        self.state.start = Some(self.buffer.len());
    }

    /// Record the current segment's capture in the table
    fn close(&mut self) {
        if let Some(start) = self.state.start {
            self.table
                .set(self.state.segment, Span::new(start, self.buffer.len() - start));
        }
    }

    fn mark_empty(&mut self, segment: Segment) {
        self.table.set(segment, Span::empty_at(self.buffer.len()));
    }

    /// Alphanumerics are buffered as a candidate scheme until a delimiter
    /// decides: "://" confirms it, anything else means it was a hostname.
    fn scheme(&mut self, c: char) -> Flow {
        if is_alphanumeric(c) {
            if self.state.start.is_none() {
                self.begin();
            }
            self.emit(to_lower(c));
            self.cursor.bump();
            return Flow::Continue;
        }

        let Some(start) = self.state.start else {
            // Nothing that could be a scheme
            self.table.set(Segment::Scheme, Span::empty_at(0));
            self.state.enter(Segment::Hostname);
            return Flow::Continue;
        };

        if c != ':' {
            self.table.set(Segment::Scheme, Span::empty_at(0));
            self.restart_as_hostname();
            return Flow::Continue;
        }

        match (self.cursor.peek(1), self.cursor.peek(2)) {
            (Some(b'/'), Some(b'/')) => {
                self.table
                    .set(Segment::Scheme, Span::new(start, self.buffer.len() - start));
                self.cursor.skip(3);
                self.state.enter(Segment::Hostname);
                Flow::Continue
            }
            _ => {
                // "host:port" rather than "scheme://", or too short for either
                self.table.clear(Segment::Scheme);
                self.restart_as_hostname();
                Flow::Continue
            }
        }
    }

    /// Discard the candidate scheme and scan again from the first character
    fn restart_as_hostname(&mut self) {
        self.buffer.clear();
        self.overflowed = false;
        self.cursor.rewind();
        self.table.clear(Segment::Hostname);
        self.state.enter(Segment::Hostname);
    }

    fn hostname(&mut self, c: char) -> Flow {
        let Some(start) = self.state.start else {
            if is_alphanumeric(c) {
                self.begin();
                self.emit(to_lower(c));
                self.cursor.bump();
            } else if c == '/' {
                // "file:///x" has no host
                self.mark_empty(Segment::Hostname);
                self.state.enter(Segment::Path);
            } else if c == '.' {
                self.cursor.bump();
            } else {
                return Flow::Stop;
            }
            return Flow::Continue;
        };

        // '_' shows up in some log formats
        if is_alphanumeric(c) || matches!(c, '.' | '-' | '_') {
            self.emit(to_lower(c));
            self.cursor.bump();
        } else {
            self.close_hostname(start);
            self.state.enter(Segment::Port);
        }
        Flow::Continue
    }

    /// Record the hostname without trailing '.' characters
    fn close_hostname(&mut self, start: usize) {
        while self.buffer.len() > start && self.buffer.last_byte() == Some(b'.') {
            self.buffer.truncate(self.buffer.len() - 1);
        }
        self.overflowed = false;
        self.table
            .set(Segment::Hostname, Span::new(start, self.buffer.len() - start));
    }

    fn port(&mut self, c: char) -> Flow {
        if self.state.start.is_none() {
            if c != ':' {
                self.mark_empty(Segment::Port);
                self.state.enter(Segment::Path);
                return Flow::Continue;
            }
            match self.cursor.peek(1) {
                None => return Flow::Stop,
                Some(next) if is_numeric(char::from(next)) => {
                    self.cursor.skip(1);
                    self.begin();
                }
                Some(_) => {
                    self.cursor.skip(1);
                    self.state.enter(Segment::Path);
                }
            }
            return Flow::Continue;
        }

        if is_numeric(c) {
            self.emit(c);
            self.cursor.bump();
        } else {
            self.close();
            self.state.enter(Segment::Path);
        }
        Flow::Continue
    }

    fn path(&mut self, c: char) -> Flow {
        if self.state.start.is_none() {
            match c {
                '/' => {
                    // The leading '/' is implied and added back on assembly
                    self.begin();
                    self.cursor.bump();
                }
                '?' | '&' | '#' => {
                    self.mark_empty(Segment::Path);
                    self.state.enter(Segment::Query);
                }
                _ => return Flow::Stop,
            }
            return Flow::Continue;
        }

        match c {
            '?' | '&' | '#' => {
                self.close();
                self.state.enter(Segment::Query);
            }
            '%' => self.escape(true),
            '/' if self.cursor.peek(1) == Some(b'/') => self.cursor.skip(1),
            _ => {
                self.emit(c);
                self.cursor.bump();
            }
        }
        Flow::Continue
    }

    fn query(&mut self, c: char) -> Result<Flow> {
        if self.state.start.is_none() {
            match c {
                '?' | '&' => {
                    self.begin();
                    self.cursor.bump();
                }
                '#' => {
                    self.mark_empty(Segment::Query);
                    self.state.enter(Segment::Anchor);
                }
                _ => return Err(self.unexpected(c)),
            }
            return Ok(Flow::Continue);
        }

        match c {
            '#' => {
                self.close();
                self.state.enter(Segment::Anchor);
            }
            '%' => self.escape(true),
            _ => {
                self.emit(c);
                self.cursor.bump();
            }
        }
        Ok(Flow::Continue)
    }

    fn anchor(&mut self, c: char) -> Result<Flow> {
        if self.state.start.is_none() {
            if c != '#' {
                return Err(self.unexpected(c));
            }
            self.begin();
            self.cursor.bump();
            return Ok(Flow::Continue);
        }

        if c == '%' {
            self.escape(false);
        } else {
            self.emit(c);
            self.cursor.bump();
        }
        Ok(Flow::Continue)
    }

    /// Copy a percent-escape with its two characters upper-cased. A '%' that
    /// is not followed by two alphanumerics is copied alone, or dropped when
    /// `keep_lone_percent` is false.
    ///
    /// An escape is copied whole or not at all.
    fn escape(&mut self, keep_lone_percent: bool) {
        if let Some((hi, lo)) = self.cursor.escape_digits() {
            if self.buffer.len() + 3 > self.limit {
                self.overflowed = true;
                return;
            }
            self.emit('%');
            self.emit(hi);
            self.emit(lo);
            self.cursor.skip(3);
        } else {
            if keep_lone_percent {
                self.emit('%');
            }
            self.cursor.skip(1);
        }
    }

    fn unexpected(&self, found: char) -> ParseError {
        ParseError::UnexpectedCharacter {
            segment: self.state.segment,
            found,
            input: self.cursor.input().to_string(),
        }
    }

    /// Input or room ran out during a step taken in `stepped`
    fn finish(&mut self, stepped: Segment) {
        match stepped {
            Segment::Scheme => {
                // A bare run like "localhost" is the hostname
                if let Some(start) = self.state.start_of(Segment::Scheme) {
                    let len = self.buffer.len();
                    self.table.set(Segment::Hostname, Span::new(start, len - start));
                    self.table.set(Segment::Scheme, Span::empty_at(0));
                    self.mark_empty(Segment::Path);
                }
            }
            Segment::Hostname => {
                if let Some(start) = self.state.start_of(Segment::Hostname) {
                    self.close_hostname(start);
                }
                self.mark_empty(Segment::Path);
            }
            Segment::Port => {
                if self.state.start_of(Segment::Port).is_some() {
                    self.close();
                }
                self.mark_empty(Segment::Path);
            }
            Segment::Path | Segment::Query | Segment::Anchor => {
                if self.state.start_of(stepped).is_some() {
                    self.close();
                }
            }
        }
    }
}
