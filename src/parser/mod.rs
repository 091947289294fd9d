//! Single-pass segmentation of a cleaned URL-like string.
//!
//! The scanner walks the input once, moving forward through the segments in
//! [`Segment`](crate::Segment) order. Each captured segment is copied into the
//! working buffer, lower-cased where case does not matter and with slashes and
//! escapes tidied, and its position is recorded in a
//! [`SegmentTable`](crate::SegmentTable).

mod cursor;
mod scanner;
mod state;

pub use scanner::scan_segments;
