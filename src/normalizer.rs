use crate::assembler::{Assembler, PathPolicy};
use crate::buffer::BoundedBuffer;
use crate::checkers::{hostname_is_ip_like, hostname_seems_valid};
use crate::compat::{String, ToString};
use crate::discard::{DiscardInput, DiscardRules};
use crate::error::Result;
use crate::finisher::{Rfc3986Normalizer, UriSyntaxNormalizer};
use crate::helpers::{fold_whitespace_into, strip_whitespace_into};
use crate::parser::scan_segments;
use crate::segments::{Segment, SegmentTable};

/// Default working buffer capacity in bytes
pub const DEFAULT_WORKING_CAPACITY: usize = 2048;

/// Default assembly buffer capacity in bytes
pub const DEFAULT_ASSEMBLY_CAPACITY: usize = 2048;

/// Per-scan options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Keep spaces instead of removing all whitespace. Tabs, CR and LF are
    /// turned into spaces.
    pub keep_spaces: bool,
}

impl ScanOptions {
    #[must_use]
    pub const fn keep_spaces(mut self, keep_spaces: bool) -> Self {
        self.keep_spaces = keep_spaces;
        self
    }
}

/// Scans URL-like strings from logs and rebuilds them in normalized forms.
///
/// One instance owns its buffers and is meant to be reused for many URLs on
/// one thread: every [`scan`](Self::scan) replaces the previous result, and
/// every form or accessor overwrites the assembly buffer.
///
/// # Examples
///
/// ```
/// use logurl::Normalizer;
///
/// let mut normalizer = Normalizer::new();
/// normalizer.scan("HTTP://www.Example.com/a/../b/index.html?&x=1#top").unwrap();
///
/// assert_eq!(normalizer.grouping_form(), "example.com/b/?x=1");
/// assert_eq!(normalizer.raw_form(), "http://www.example.com/b/index.html?x=1#top");
/// assert_eq!(normalizer.hostname(), "www.example.com");
/// assert!(!normalizer.should_discard());
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer<F = Rfc3986Normalizer> {
    original: String,
    working: BoundedBuffer,
    assembly: BoundedBuffer,
    segments: SegmentTable,
    finisher: F,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_WORKING_CAPACITY, DEFAULT_ASSEMBLY_CAPACITY)
    }

    /// Create a normalizer with the given buffer capacities in bytes.
    ///
    /// A scan captures at most the smaller of the two, and a reversed
    /// hostname keeps at most half of `assembly`.
    pub fn with_capacity(working: usize, assembly: usize) -> Self {
        Self::with_capacity_and_finisher(working, assembly, Rfc3986Normalizer)
    }
}

impl<F: UriSyntaxNormalizer> Normalizer<F> {
    /// Create a normalizer that runs `finisher` as the last step of every
    /// normalized form
    pub fn with_finisher(finisher: F) -> Self {
        Self::with_capacity_and_finisher(DEFAULT_WORKING_CAPACITY, DEFAULT_ASSEMBLY_CAPACITY, finisher)
    }

    pub fn with_capacity_and_finisher(working: usize, assembly: usize, finisher: F) -> Self {
        Self {
            original: String::new(),
            working: BoundedBuffer::with_capacity(working),
            assembly: BoundedBuffer::with_capacity(assembly),
            segments: SegmentTable::new(),
            finisher,
        }
    }

    /// Scan a URL with all whitespace removed.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`](crate::ParseError) if the scanner reaches the
    /// query or anchor without its delimiter. Every segment is then not
    /// visited.
    pub fn scan(&mut self, raw: &str) -> Result<&mut Self> {
        self.scan_with(raw, ScanOptions::default())
    }

    /// Scan a URL.
    ///
    /// # Errors
    ///
    /// See [`scan`](Self::scan).
    pub fn scan_with(&mut self, raw: &str, options: ScanOptions) -> Result<&mut Self> {
        if options.keep_spaces {
            fold_whitespace_into(raw, &mut self.original);
        } else {
            strip_whitespace_into(raw, &mut self.original);
        }

        let limit = self.working.capacity().min(self.assembly.capacity());
        scan_segments(&self.original, &mut self.working, &mut self.segments, limit)?;
        Ok(self)
    }

    /// Last scanned input after whitespace handling
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn segments(&self) -> &SegmentTable {
        &self.segments
    }

    /// Text captured for a segment, `None` if it was not visited
    pub fn segment_str(&self, segment: Segment) -> Option<&str> {
        self.segments
            .get(segment)
            .map(|span| self.working.slice(span))
    }

    /// Compare a captured segment with `s`. A segment that was not visited
    /// only equals "".
    pub fn segment_equals(&self, segment: Segment, s: &str) -> bool {
        self.segment_str(segment).unwrap_or("") == s
    }

    /// Position of `token` in the working buffer, searching only the `len`
    /// bytes from `offset`
    pub fn find_token(&self, token: &str, offset: usize, len: usize) -> Option<usize> {
        let captured = self.working.as_str().as_bytes();
        let end = offset.saturating_add(len).min(captured.len());
        let window = captured.get(offset..end)?;
        memchr::memmem::find(window, token.as_bytes()).map(|i| offset + i)
    }

    fn assembler(&mut self) -> Assembler<'_> {
        Assembler::new(&self.segments, &self.working, &mut self.assembly)
    }

    /// Hostname without "www", path without a default document, and query.
    ///
    /// Suited as a key for counting pages: scheme, port and anchor are left
    /// out.
    pub fn grouping_form(&mut self) -> String {
        let mut assembler = Assembler::new(&self.segments, &self.working, &mut self.assembly);
        assembler
            .hostname(true)
            .path(PathPolicy::DropDefaultDocument)
            .query();
        self.finisher.normalize_uri_syntax(assembler.into_str())
    }

    /// Like [`grouping_form`](Self::grouping_form) with the hostname labels
    /// reversed, so that sites sort and join by their top-level domain
    pub fn reversed_grouping_form(&mut self) -> String {
        let mut assembler = Assembler::new(&self.segments, &self.working, &mut self.assembly);
        assembler
            .reversed_hostname()
            .path(PathPolicy::DropDefaultDocument)
            .query();
        self.finisher.normalize_uri_syntax(assembler.into_str())
    }

    /// Hostname without "www" and the path up to its last '/'
    pub fn path_grouping_form(&mut self) -> String {
        let mut assembler = Assembler::new(&self.segments, &self.working, &mut self.assembly);
        assembler.hostname(true).path(PathPolicy::DropLastSegment);
        self.finisher.normalize_uri_syntax(assembler.into_str())
    }

    /// Every segment, changed only by case folding, slash and escape
    /// cleanup, dropping port 80, and the final syntax pass
    pub fn raw_form(&mut self) -> String {
        let mut assembler = Assembler::new(&self.segments, &self.working, &mut self.assembly);
        assembler
            .scheme()
            .hostname(false)
            .port()
            .path(PathPolicy::KeepDocument)
            .query()
            .anchor();
        self.finisher.normalize_uri_syntax(assembler.into_str())
    }

    /// [`raw_form`](Self::raw_form) without the anchor
    pub fn linkable_form(&mut self) -> String {
        let mut assembler = Assembler::new(&self.segments, &self.working, &mut self.assembly);
        assembler
            .scheme()
            .hostname(false)
            .port()
            .path(PathPolicy::KeepDocument)
            .query();
        self.finisher.normalize_uri_syntax(assembler.into_str())
    }

    /// Scheme with "://", "http://" when only the scheme is missing, and ""
    /// when neither a hostname nor a path was found
    pub fn scheme(&mut self) -> &str {
        if !self.segments.has_data(Segment::Hostname) && !self.segments.has_data(Segment::Path) {
            self.assembly.clear();
            return self.assembly.as_str();
        }
        let mut assembler = self.assembler();
        assembler.scheme();
        assembler.into_str()
    }

    pub fn hostname(&mut self) -> &str {
        let mut assembler = self.assembler();
        assembler.hostname(false);
        assembler.into_str()
    }

    pub fn hostname_without_www(&mut self) -> &str {
        let mut assembler = self.assembler();
        assembler.hostname(true);
        assembler.into_str()
    }

    /// Hostname without "www" with its labels reversed, e.g. "com.def.abc"
    pub fn hostname_reversed(&mut self) -> String {
        let mut assembler = self.assembler();
        assembler.reversed_hostname();
        assembler.into_str().to_string()
    }

    /// ":" and the port, "" if there is none or it is 80
    pub fn port(&mut self) -> &str {
        let mut assembler = self.assembler();
        assembler.port();
        assembler.into_str()
    }

    /// Path with a leading '/', default document removed
    pub fn path(&mut self) -> &str {
        let mut assembler = self.assembler();
        assembler.path(PathPolicy::DropDefaultDocument);
        assembler.into_str()
    }

    /// Path up to and including its last '/'
    pub fn path_without_document(&mut self) -> &str {
        let mut assembler = self.assembler();
        assembler.path(PathPolicy::DropLastSegment);
        assembler.into_str()
    }

    /// Last path segment, e.g. "blah.html"
    pub fn document(&mut self) -> &str {
        let mut assembler = self.assembler();
        assembler.path(PathPolicy::KeepDocument);
        let path = assembler.into_str();
        path.rfind('/').map_or(path, |slash| &path[slash + 1..])
    }

    /// "?" and the cleaned up query
    pub fn query(&mut self) -> &str {
        let mut assembler = self.assembler();
        assembler.query();
        assembler.into_str()
    }

    /// "#" and the anchor
    pub fn anchor(&mut self) -> &str {
        let mut assembler = self.assembler();
        assembler.anchor();
        assembler.into_str()
    }

    /// Check if the hostname is at least four characters long and has a '.'
    pub fn hostname_seems_valid(&self) -> bool {
        self.segment_str(Segment::Hostname)
            .is_some_and(hostname_seems_valid)
    }

    /// Check if the hostname is made of digits and dots only, like an IPv4
    /// address
    pub fn hostname_is_ip_address(&self) -> bool {
        self.segment_str(Segment::Hostname)
            .is_some_and(hostname_is_ip_like)
    }

    /// Check if the last scanned URL is not worth keeping, using every
    /// [`DiscardRules`] check
    pub fn should_discard(&self) -> bool {
        self.should_discard_with(DiscardRules::default())
    }

    pub fn should_discard_with(&self, rules: DiscardRules) -> bool {
        rules.matches(&DiscardInput {
            original: &self.original,
            scheme: self.segment_str(Segment::Scheme),
            hostname: self.segment_str(Segment::Hostname),
        })
    }
}
