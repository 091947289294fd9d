/// Shortest hostname worth keeping, e.g. "a.ly"
const MIN_PLAUSIBLE_HOSTNAME_LEN: usize = 4;

/// Shortest dotted-quad, "1.2.3.4"
const MIN_IPV4_LEN: usize = 7;

/// Check if a scanned hostname is plausible: at least four characters and
/// at least one '.'.
pub fn hostname_seems_valid(hostname: &str) -> bool {
    hostname.len() >= MIN_PLAUSIBLE_HOSTNAME_LEN && memchr::memchr(b'.', hostname.as_bytes()).is_some()
}

/// Check if a hostname looks like an IPv4 literal: seven or more characters,
/// all digits or '.'. Octet ranges are not validated.
pub fn hostname_is_ip_like(hostname: &str) -> bool {
    hostname.len() >= MIN_IPV4_LEN
        && hostname
            .bytes()
            .all(|b| b.is_ascii_digit() || b == b'.')
}

/// Number of leading characters to skip to drop a "www" label.
///
/// Only applies to hostnames with three or more labels. The first label must
/// start with "www" ("www2", "www45" also match) and is skipped together with
/// the '.' after it. "www.co.uk" therefore becomes "co.uk".
pub fn www_prefix_len(hostname: &str) -> usize {
    let bytes = hostname.as_bytes();
    if memchr::memchr_iter(b'.', bytes).nth(1).is_none() {
        return 0;
    }

    let first_label_len = memchr::memchr(b'.', bytes).unwrap_or(bytes.len());
    if first_label_len >= 3 && bytes.starts_with(b"www") {
        first_label_len + 1
    } else {
        0
    }
}
