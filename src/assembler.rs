use crate::buffer::BoundedBuffer;
use crate::checkers::www_prefix_len;
use crate::hostname::reverse_hostname;
use crate::segments::{Segment, SegmentTable};

/// Documents that a server serves for a bare directory path
const DEFAULT_DOCUMENTS: [&str; 2] = ["index.html", "default.asp"];

/// What to do with the last path segment when re-emitting the path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPolicy {
    /// Copy the path as captured
    KeepDocument,
    /// Remove a trailing "index.html" or "default.asp"
    DropDefaultDocument,
    /// Keep everything up to and including the last '/'
    DropLastSegment,
}

/// Writes normalized building blocks into the assembly buffer.
///
/// Reads the segment table and the working buffer, and only ever writes to
/// the assembly buffer. Creating an assembler clears the assembly buffer.
pub struct Assembler<'a> {
    table: &'a SegmentTable,
    working: &'a BoundedBuffer,
    out: &'a mut BoundedBuffer,
}

impl<'a> Assembler<'a> {
    pub fn new(
        table: &'a SegmentTable,
        working: &'a BoundedBuffer,
        out: &'a mut BoundedBuffer,
    ) -> Self {
        out.clear();
        Self {
            table,
            working,
            out,
        }
    }

    /// Captured text of a segment that holds data
    fn data(&self, segment: Segment) -> Option<&'a str> {
        let working: &'a BoundedBuffer = self.working;
        self.table
            .data_span(segment)
            .map(|span| working.slice(span))
    }

    /// Scheme followed by "://", "http" when none was captured
    pub fn scheme(&mut self) -> &mut Self {
        let scheme = self.data(Segment::Scheme).unwrap_or("http");
        self.out.push_str(scheme);
        self.out.push_str("://");
        self
    }

    pub fn hostname(&mut self, drop_www: bool) -> &mut Self {
        if let Some(host) = self.data(Segment::Hostname) {
            let skip = if drop_www { www_prefix_len(host) } else { 0 };
            self.out.push_str(&host[skip..]);
        }
        self
    }

    /// Hostname without a "www" label, labels in reverse order.
    ///
    /// Only the right-most half of the assembly capacity is reversed.
    pub fn reversed_hostname(&mut self) -> &mut Self {
        if let Some(host) = self.data(Segment::Hostname) {
            let host = &host[www_prefix_len(host)..];
            let reversed = reverse_hostname(host, self.out.capacity());
            self.out.push_str(&reversed);
        }
        self
    }

    /// ":" and the port, unless it is missing or the default "80"
    pub fn port(&mut self) -> &mut Self {
        if let Some(port) = self.data(Segment::Port).filter(|port| *port != "80") {
            self.out.push(':');
            self.out.push_str(port);
        }
        self
    }

    /// The path with its leading '/'.
    ///
    /// A path that is missing or reduced to nothing becomes a single '/', but
    /// only when a hostname was found and no query follows.
    pub fn path(&mut self, policy: PathPolicy) -> &mut Self {
        let mut trailing_slash = false;

        match self.data(Segment::Path) {
            Some(path) => {
                let keep = match policy {
                    PathPolicy::KeepDocument => path.len(),
                    PathPolicy::DropLastSegment => path.rfind('/').map_or(0, |slash| slash + 1),
                    PathPolicy::DropDefaultDocument => match default_document_start(path) {
                        Some(0) => {
                            trailing_slash = true;
                            0
                        }
                        Some(start) => start,
                        None => path.len(),
                    },
                };
                if keep > 0 {
                    self.out.push('/');
                    self.out.push_str(&path[..keep]);
                }
            }
            None => trailing_slash = true,
        }

        if trailing_slash
            && self.table.has_data(Segment::Hostname)
            && !self.table.has_data(Segment::Query)
        {
            self.out.push('/');
        }
        self
    }

    /// The query behind a single '?', with each run of '?'/'&' reduced to
    /// its first character and trailing runs dropped
    pub fn query(&mut self) -> &mut Self {
        let Some(query) = self.data(Segment::Query) else {
            return self;
        };
        let query = query.trim_matches(is_query_separator);
        if query.is_empty() {
            return self;
        }

        self.out.push('?');
        let mut in_run = false;
        for c in query.chars() {
            if is_query_separator(c) {
                if !in_run {
                    self.out.push(c);
                    in_run = true;
                }
            } else {
                self.out.push(c);
                in_run = false;
            }
        }
        self
    }

    pub fn anchor(&mut self) -> &mut Self {
        if let Some(anchor) = self.data(Segment::Anchor) {
            self.out.push('#');
            self.out.push_str(anchor);
        }
        self
    }

    /// Everything written so far
    pub fn into_str(self) -> &'a str {
        let out: &'a BoundedBuffer = self.out;
        out.as_str()
    }
}

fn is_query_separator(c: char) -> bool {
    c == '?' || c == '&'
}

/// Where a trailing default document starts, if the path ends in one that is
/// the whole path or follows a '/'
fn default_document_start(path: &str) -> Option<usize> {
    DEFAULT_DOCUMENTS.iter().find_map(|document| {
        let start = path.strip_suffix(document)?.len();
        (start == 0 || path.as_bytes()[start - 1] == b'/').then_some(start)
    })
}
