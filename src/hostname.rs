use crate::compat::String;

/// Reverse the dot-separated labels of a hostname.
///
/// `"abc.def.com"` becomes `"com.def.abc"`. Empty labels are kept in place,
/// so reversing twice gives back the input.
pub fn reverse_labels(hostname: &str) -> String {
    let mut reversed = String::with_capacity(hostname.len());
    for (i, label) in hostname.rsplit('.').enumerate() {
        if i > 0 {
            reversed.push('.');
        }
        reversed.push_str(label);
    }
    reversed
}

/// Keep only the right-most `max_len` bytes of a hostname.
///
/// Reversed hostnames are limited to half of the assembly buffer. The
/// left-most labels are the least significant, so they are the ones dropped.
pub fn keep_rightmost(hostname: &str, max_len: usize) -> &str {
    if hostname.len() <= max_len {
        return hostname;
    }
    let mut start = hostname.len() - max_len;
    while !hostname.is_char_boundary(start) {
        start += 1;
    }
    &hostname[start..]
}

/// Reverse a hostname for use as a join key, limited to half of an assembly
/// buffer of `assembly_capacity` bytes.
pub fn reverse_hostname(hostname: &str, assembly_capacity: usize) -> String {
    reverse_labels(keep_rightmost(hostname, assembly_capacity >> 1))
}
