use crate::character_sets::{is_ascii_tab_or_newline, is_scan_whitespace};
use crate::compat::String;

/// Fast check if string contains tabs or newlines
pub fn has_tabs_or_newline(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Fast check if string contains any whitespace the scanner skips
pub fn has_scan_whitespace(input: &str) -> bool {
    memchr::memchr(b' ', input.as_bytes()).is_some() || has_tabs_or_newline(input)
}

/// Copy `input` into `out` with every space, tab, CR and LF removed.
/// `out` is cleared first so its allocation can be reused across calls.
pub fn strip_whitespace_into(input: &str, out: &mut String) {
    out.clear();
    if !has_scan_whitespace(input) {
        out.push_str(input);
        return;
    }
    out.extend(input.chars().filter(|&c| !is_scan_whitespace(c)));
}

/// Copy `input` into `out` with tabs, CR and LF folded to a space each.
/// Spaces are kept and nothing is trimmed.
pub fn fold_whitespace_into(input: &str, out: &mut String) {
    out.clear();
    if !has_tabs_or_newline(input) {
        out.push_str(input);
        return;
    }
    out.extend(input.chars().map(|c| if is_ascii_tab_or_newline(c) { ' ' } else { c }));
}
