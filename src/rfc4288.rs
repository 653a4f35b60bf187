//! Media type registration names from RFC 4288 §4.2.

use crate::parsing::{Parser, Slice, take_while};

/// `reg-name = 1*127reg-name-chars`
/// `reg-name-chars = ALPHA / DIGIT / "!" / "#" / "$" / "&" / "." / "+" / "-" / "^" / "_"`
pub const fn is_reg_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '!' | '#' | '$' | '&' | '.' | '+' | '-' | '^' | '_')
}

pub fn reg_name<'a>() -> impl Parser<'a, Slice<'a>> {
    take_while(1, 127, is_reg_name_char)
}
