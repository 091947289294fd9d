/// Check if a character is an ASCII letter
pub fn is_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check if a character is an ASCII digit
pub fn is_numeric(c: char) -> bool {
    c.is_ascii_digit()
}

/// Check if a character is an ASCII letter or digit
pub fn is_alphanumeric(c: char) -> bool {
    is_alphabetic(c) || is_numeric(c)
}

/// Fold an ASCII uppercase letter to lowercase, anything else unchanged
pub fn to_lower(c: char) -> char {
    c.to_ascii_lowercase()
}

/// Fold an ASCII lowercase letter to uppercase, anything else unchanged
pub fn to_upper(c: char) -> char {
    c.to_ascii_uppercase()
}

/// Whitespace removed from input before scanning
pub fn is_scan_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Check if a character is an ASCII tab or newline
pub fn is_ascii_tab_or_newline(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}
