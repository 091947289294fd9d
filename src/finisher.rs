//! Final syntax pass applied to every assembled form.

use fluent_uri::{Uri, UriRef};
use percent_encoding::{CONTROLS, utf8_percent_encode};

use crate::compat::{Cow, String, ToString};

/// Last step of every normalized form.
///
/// Takes an assembled URL string and returns it in canonical syntax, or an
/// empty string if it cannot be read as a URI reference.
pub trait UriSyntaxNormalizer {
    fn normalize_uri_syntax(&self, input: &str) -> String;
}

/// Validates a URI reference and normalizes it per RFC 3986 section 6.
///
/// Relative references get their dot segments removed like absolute ones.
/// A ".." with nothing left to remove is dropped. Non-ASCII characters are
/// percent-encoded as UTF-8.
///
/// # Examples
///
/// ```
/// use logurl::{Rfc3986Normalizer, UriSyntaxNormalizer};
///
/// let finisher = Rfc3986Normalizer;
/// assert_eq!(finisher.normalize_uri_syntax("http://a.com/x/../y/./z"), "http://a.com/y/z");
/// assert_eq!(finisher.normalize_uri_syntax("a.com/x y"), "");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rfc3986Normalizer;

impl UriSyntaxNormalizer for Rfc3986Normalizer {
    fn normalize_uri_syntax(&self, input: &str) -> String {
        normalize(input).unwrap_or_else(|| {
            tracing::trace!(input, "assembled url is not a valid uri reference");
            String::new()
        })
    }
}

impl<F: Fn(&str) -> String> UriSyntaxNormalizer for F {
    fn normalize_uri_syntax(&self, input: &str) -> String {
        self(input)
    }
}

/// Scheme lent to a relative reference so that its path is treated as
/// hierarchical and its dot segments are removed
const RELATIVE_SCHEME: &str = "relative:";

fn normalize(input: &str) -> Option<String> {
    if input.chars().any(char::is_control) {
        return None;
    }
    // Non-ASCII text is kept as UTF-8 escapes
    let encoded: Cow<'_, str> = utf8_percent_encode(input, CONTROLS).into();

    if let Ok(uri) = Uri::<&str>::parse(&*encoded) {
        let normalized = uri.normalize();
        // "http://" names nothing
        if normalized.as_str().ends_with("://") {
            return None;
        }
        return Some(normalized.as_str().to_string());
    }

    UriRef::<&str>::parse(&*encoded).ok()?;
    let mut anchored = String::with_capacity(RELATIVE_SCHEME.len() + 1 + encoded.len());
    anchored.push_str(RELATIVE_SCHEME);
    let prefix_len = if encoded.starts_with('/') {
        anchored.len()
    } else {
        anchored.push('/');
        anchored.len()
    };
    anchored.push_str(&encoded);

    let normalized = Uri::<&str>::parse(anchored.as_str()).ok()?.normalize();
    normalized.as_str().get(prefix_len..).map(ToString::to_string)
}
