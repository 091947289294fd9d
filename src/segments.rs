/// One structural part of a URL, in the order the scanner visits them
///
/// For `http://example.com:8080/somedir/index.html?abc=def#top`:
/// - Scheme: `http`
/// - Hostname: `example.com`
/// - Port: `8080`
/// - Path: `somedir/index.html` (leading '/' implied)
/// - Query: `abc=def` (leading '?' implied)
/// - Anchor: `top` (leading '#' implied)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    Scheme,
    Hostname,
    Port,
    Path,
    Query,
    Anchor,
}

impl Segment {
    /// All segments in scan order
    pub const ALL: [Self; 6] = [
        Self::Scheme,
        Self::Hostname,
        Self::Port,
        Self::Path,
        Self::Query,
        Self::Anchor,
    ];

    /// Position of this segment in scan order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Segment that follows this one, if any
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Lowercase name, as used in error messages
    pub fn name(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::Hostname => "hostname",
            Self::Port => "port",
            Self::Path => "path",
            Self::Query => "query",
            Self::Anchor => "anchor",
        }
    }
}

impl core::fmt::Display for Segment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Offset and length of a captured segment inside the working buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub offset: u32,
    pub len: u32,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self {
            offset: offset as u32,
            len: len as u32,
        }
    }

    /// Empty span at `offset` ("detected but empty")
    pub fn empty_at(offset: usize) -> Self {
        Self::new(offset, 0)
    }

    pub fn start(self) -> usize {
        self.offset as usize
    }

    pub fn end(self) -> usize {
        (self.offset + self.len) as usize
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// Where each segment landed in the working buffer.
///
/// `None` means the scanner never reached the segment ("not visited").
/// `Some` with an empty span means it was detected but holds nothing, e.g.
/// the path of `abc.com?q=1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentTable {
    spans: [Option<Span>; 6],
}

impl SegmentTable {
    /// Create a table with every segment not visited
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every segment as not visited
    pub fn reset(&mut self) {
        self.spans = [None; 6];
    }

    /// Span recorded for a segment
    pub fn get(&self, segment: Segment) -> Option<Span> {
        self.spans[segment.index()]
    }

    pub fn set(&mut self, segment: Segment, span: Span) {
        self.spans[segment.index()] = Some(span);
    }

    pub fn clear(&mut self, segment: Segment) {
        self.spans[segment.index()] = None;
    }

    /// Check if a segment was visited at all, even if empty
    pub fn is_visited(&self, segment: Segment) -> bool {
        self.get(segment).is_some()
    }

    /// Check if a segment was visited and captured at least one character
    pub fn has_data(&self, segment: Segment) -> bool {
        self.get(segment).is_some_and(|span| !span.is_empty())
    }

    /// Span of a segment that holds data
    pub fn data_span(&self, segment: Segment) -> Option<Span> {
        self.get(segment).filter(|span| !span.is_empty())
    }

    /// Check that no segment was visited
    pub fn is_blank(&self) -> bool {
        self.spans.iter().all(Option::is_none)
    }
}
