//! Basic rules from RFC 2616 §2: linear whitespace, quoted strings and the
//! `#rule` comma-separated list.

use crate::parsing::{
    ParseError, ParseResult, Parser, Slice, UNBOUNDED, concat, optional, or, surrounded_by, take,
    take_if, take_str, take_while,
};

pub const CR: char = '\r';
pub const LF: char = '\n';
pub const SP: char = ' ';
pub const HT: char = '\t';
pub const CRLF: &str = "\r\n";

// ===== Character classes =====

/// `LOALPHA = <any US-ASCII lowercase letter "a".."z">`
pub const fn is_lowercase_alpha(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// `UPALPHA = <any US-ASCII uppercase letter "A".."Z">`
pub const fn is_uppercase_alpha(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// `ALPHA = UPALPHA | LOALPHA`
pub const fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// `DIGIT = <any US-ASCII digit "0".."9">`
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// `CTL = <any US-ASCII control character (octets 0 - 31)>`
pub const fn is_ctl(c: char) -> bool {
    (c as u32) <= 31
}

/// `CHAR = <any US-ASCII character (octets 0 - 127)>`
pub const fn is_char(c: char) -> bool {
    (c as u32) <= 127
}

/// `OCTET = <any 8-bit sequence of data>`
pub const fn is_octet(c: char) -> bool {
    (c as u32) <= 255
}

// ===== Linear whitespace =====

/// `LWS = [CRLF] 1*( SP | HT )`
pub fn lws<'a>() -> impl Parser<'a, Slice<'a>> {
    concat(
        optional(take_str(CRLF)),
        take_while(1, UNBOUNDED, |c| c == SP || c == HT),
    )
}

/// Implied `*LWS`: zero or more LWS runs, tolerated around structural
/// delimiters so folded header values parse.
pub fn implied_lws<'a>(input: Slice<'a>) -> ParseResult<'a, ()> {
    let mut rest = input;
    while let Ok((_, next)) = lws().parse(rest) {
        rest = next;
    }
    Ok(((), rest))
}

/// Match `c` with implied LWS on both sides.
pub fn take_with_lws<'a>(c: char) -> impl Parser<'a, Slice<'a>> {
    surrounded_by(take(c), implied_lws, implied_lws)
}

/// `TEXT = <any OCTET except CTLs, but including LWS>`, further restricted
/// by `extra`.
pub fn text<'a>(extra: impl Fn(char) -> bool) -> impl Parser<'a, Slice<'a>> {
    or(lws(), take_if(move |c| is_octet(c) && !is_ctl(c) && extra(c)))
}

// ===== Quoted strings =====

/// `qdtext = <any TEXT except <">>`
fn qdtext<'a>() -> impl Parser<'a, Slice<'a>> {
    text(|c| c != '"')
}

/// `quoted-pair = "\" CHAR`
fn quoted_pair<'a>(input: Slice<'a>) -> ParseResult<'a, char> {
    let (_, rest) = take('\\').parse(input)?;
    match rest.first() {
        Some(c) if is_char(c) => Ok((c, rest.slice_from(c.len_utf8()))),
        _ => Err(ParseError::new("expected an escaped CHAR", input)),
    }
}

/// `quoted-string = ( <"> *(qdtext | quoted-pair ) <"> )`
///
/// Unescaping materializes a new string; LWS inside the quotes is kept
/// verbatim.
pub fn quoted_string<'a>(input: Slice<'a>) -> ParseResult<'a, String> {
    let (_, mut rest) = take('"').parse(input)?;
    let mut value = String::new();
    loop {
        if let Ok((c, next)) = quoted_pair(rest) {
            value.push(c);
            rest = next;
            continue;
        }
        if let Ok((text, next)) = qdtext().parse(rest) {
            value.push_str(text.as_str());
            rest = next;
            continue;
        }
        break;
    }
    match take('"').parse(rest) {
        Ok((_, rest)) => Ok((value, rest)),
        Err(err) => Err(err.anchored(input)),
    }
}

// ===== Lists =====

/// `#rule` list: comma-separated elements with implied LWS around the
/// commas, where empty elements are allowed and skipped (`a,,b` is two
/// elements), including dangling commas.
pub fn comma_separated_list<'a, T>(
    min: usize,
    max: usize,
    parser: impl Parser<'a, T>,
) -> impl Parser<'a, Vec<T>> {
    let element = optional(parser);
    let comma = take_with_lws(',');
    move |input: Slice<'a>| {
        debug_assert!(min <= max);
        if max == 0 {
            return Ok((Vec::new(), input));
        }
        let mut output = Vec::new();
        let mut rest = input;
        if let Ok((value, next)) = element.parse(input) {
            if let Some(value) = value {
                output.push(value);
            }
            rest = next;
        }
        while output.len() != max {
            let Ok((_, next)) = comma.parse(rest) else {
                break;
            };
            rest = next;
            let Ok((value, next)) = element.parse(rest) else {
                break;
            };
            if let Some(value) = value {
                output.push(value);
            }
            rest = next;
        }
        if output.len() < min {
            let message = format!("only matched {} times, {min} required", output.len());
            return Err(ParseError::new(message, input));
        }
        Ok((output, rest))
    }
}

// ===== Tests =====

#[cfg(test)]
mod test {
    use super::*;
    use crate::parsing::{UNBOUNDED, take_while};

    #[test]
    fn lws_folding() {
        let (matched, rest) = lws().parse_str("\r\n   x").unwrap();
        assert_eq!(matched, "\r\n   ");
        assert_eq!(rest, "x");

        let (matched, rest) = lws().parse_str("  \tx").unwrap();
        assert_eq!(matched, "  \t");
        assert_eq!(rest, "x");

        // a bare CRLF without SP / HT is not LWS
        assert!(lws().parse_str("\r\nx").is_err());
    }

    #[test]
    fn implied_lws_is_greedy_and_infallible() {
        let ((), rest) = implied_lws.parse_str(" \t\r\n  x").unwrap();
        assert_eq!(rest, "x");

        let ((), rest) = implied_lws.parse_str("x").unwrap();
        assert_eq!(rest, "x");
    }

    #[test]
    fn take_with_lws_around_delimiter() {
        let (matched, rest) = take_with_lws(';').parse_str("  ;\r\n  rel").unwrap();
        assert_eq!(matched, ";");
        assert_eq!(rest, "rel");
    }

    #[test]
    fn quoted_string_plain() {
        let (value, rest) = quoted_string.parse_str("\"previous chapter\";").unwrap();
        assert_eq!(value, "previous chapter");
        assert_eq!(rest, ";");
    }

    #[test]
    fn quoted_string_unescapes_pairs() {
        let (value, rest) = quoted_string.parse_str(r#""a \"quote\" and a \\""#).unwrap();
        assert_eq!(value, r#"a "quote" and a \"#);
        assert!(rest.is_empty());
    }

    #[test]
    fn quoted_string_keeps_folded_lws() {
        let (value, _) = quoted_string.parse_str("\"a\r\n b\"").unwrap();
        assert_eq!(value, "a\r\n b");
    }

    #[test]
    fn quoted_string_requires_closing_quote() {
        let err = quoted_string.parse_str("\"unterminated").unwrap_err();
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn comma_list_allows_empty_elements() {
        let letters = take_while(1, UNBOUNDED, |c: char| c.is_ascii_alphabetic());
        let parser = comma_separated_list(0, UNBOUNDED, letters);

        let (values, rest) = parser.parse_str("a,,b").unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], "a");
        assert_eq!(values[1], "b");
        assert!(rest.is_empty());

        // dangling comma is part of the list
        let (values, rest) = parser.parse_str("a, b,").unwrap();
        assert_eq!(values.len(), 2);
        assert!(rest.is_empty());

        let (values, rest) = parser.parse_str("").unwrap();
        assert!(values.is_empty());
        assert!(rest.is_empty());
    }
}
