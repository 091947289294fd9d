/// Which checks [`Normalizer::should_discard_with`](crate::Normalizer::should_discard_with)
/// applies. Every check is on by default.
///
/// # Examples
///
/// ```
/// use logurl::{DiscardRules, Normalizer};
///
/// let mut normalizer = Normalizer::new();
/// normalizer.scan("http://123.45.12.6/index.html").unwrap();
/// assert!(normalizer.should_discard());
/// assert!(!normalizer.should_discard_with(DiscardRules::default().without_ip_hostname()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct DiscardRules {
    /// Discard when the input was empty
    pub empty: bool,
    /// Discard when the input starts with '-', the usual "no referrer" marker
    pub leading_dash: bool,
    /// Discard `file:` URLs
    pub file_scheme: bool,
    /// Discard when the hostname is missing, shorter than four characters or
    /// has no '.'
    pub implausible_hostname: bool,
    /// Discard when the hostname looks like a dotted IPv4 address
    pub ip_hostname: bool,
}

impl Default for DiscardRules {
    fn default() -> Self {
        Self::all()
    }
}

impl DiscardRules {
    /// Every check enabled
    pub const fn all() -> Self {
        Self {
            empty: true,
            leading_dash: true,
            file_scheme: true,
            implausible_hostname: true,
            ip_hostname: true,
        }
    }

    /// Every check disabled
    pub const fn none() -> Self {
        Self {
            empty: false,
            leading_dash: false,
            file_scheme: false,
            implausible_hostname: false,
            ip_hostname: false,
        }
    }

    #[must_use]
    pub const fn without_empty(mut self) -> Self {
        self.empty = false;
        self
    }

    #[must_use]
    pub const fn without_leading_dash(mut self) -> Self {
        self.leading_dash = false;
        self
    }

    #[must_use]
    pub const fn without_file_scheme(mut self) -> Self {
        self.file_scheme = false;
        self
    }

    #[must_use]
    pub const fn without_implausible_hostname(mut self) -> Self {
        self.implausible_hostname = false;
        self
    }

    #[must_use]
    pub const fn without_ip_hostname(mut self) -> Self {
        self.ip_hostname = false;
        self
    }
}

/// What the discard checks look at, taken from the last scan
pub(crate) struct DiscardInput<'a> {
    pub original: &'a str,
    pub scheme: Option<&'a str>,
    pub hostname: Option<&'a str>,
}

impl DiscardRules {
    pub(crate) fn matches(self, input: &DiscardInput<'_>) -> bool {
        if self.empty && input.original.is_empty() {
            return true;
        }
        if self.leading_dash && input.original.starts_with('-') {
            return true;
        }
        if self.file_scheme && input.scheme == Some("file") {
            return true;
        }
        if self.implausible_hostname
            && !input.hostname.is_some_and(crate::checkers::hostname_seems_valid)
        {
            return true;
        }
        self.ip_hostname && input.hostname.is_some_and(crate::checkers::hostname_is_ip_like)
    }
}
