//! Core character classes from RFC 2234 (ABNF).

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
///
/// Both cases are accepted, percent escapes in the wild use either.
pub const fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}
