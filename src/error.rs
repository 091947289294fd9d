use crate::compat::String;
use crate::segments::Segment;

/// Errors that can occur while scanning a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The scanner entered the query or anchor segment at a character that
    /// cannot start it. The segment table is reset before this is returned.
    UnexpectedCharacter {
        /// Segment the scanner was entering
        segment: Segment,
        /// Character found where the segment delimiter was expected
        found: char,
        /// Input as it was handed to the scanner
        input: String,
    },
}

impl ParseError {
    /// Input that failed to scan
    pub fn input(&self) -> &str {
        match self {
            Self::UnexpectedCharacter { input, .. } => input,
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnexpectedCharacter {
                segment,
                found,
                input,
            } => write!(
                f,
                "Failed to scan url [{input}]: {segment} segment started with '{found}'"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL scanning operations
pub type Result<T> = core::result::Result<T, ParseError>;
