#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod assembler;
mod buffer;
mod character_sets;
mod checkers;
mod discard;
mod error;
mod finisher;
mod helpers;
mod hostname;
mod normalizer;
mod parser;
mod segments;

// Public API
pub use discard::DiscardRules;
pub use error::ParseError;
pub use finisher::{Rfc3986Normalizer, UriSyntaxNormalizer};
pub use hostname::reverse_labels;
pub use normalizer::{DEFAULT_ASSEMBLY_CAPACITY, DEFAULT_WORKING_CAPACITY, Normalizer, ScanOptions};
pub use segments::{Segment, SegmentTable, Span};

pub type Result<T> = core::result::Result<T, ParseError>;
