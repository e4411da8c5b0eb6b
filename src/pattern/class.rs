//! Rune classifiers shared by every scanner.

#[must_use]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[must_use]
pub const fn is_hex(c: char) -> bool {
    c.is_ascii_hexdigit()
}

#[must_use]
pub const fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Names (process, user, group, host labels) are letters, digits, `-` and `_`.
#[must_use]
pub const fn is_alpha(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

#[must_use]
pub const fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

#[must_use]
pub const fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

/// End of input is the absence of a rune.
#[must_use]
pub const fn is_eol(c: Option<char>) -> bool {
    c.is_none()
}
