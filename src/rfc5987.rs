//! Extended parameter values from RFC 5987 §3.2.
//!
//! An extended value is `charset "'" [ language ] "'" value-chars`. The
//! value is scanned byte-wise: `%XX` triples and attr-chars accumulate
//! into one byte buffer that is decoded through the declared charset only
//! after scanning completes, so a multi-byte code point split across
//! several triples reassembles correctly.

use std::fmt;

use encoding_rs::Encoding;

use crate::parsing::{
    ParseError, ParseResult, Parser, Slice, UNBOUNDED, concat, optional, take, take_if, take_while,
    traced,
};
use crate::rfc2234::is_hex_digit;
use crate::rfc5646::{LanguageTag, language_tag};

// ===== Character classes =====

/// `attr-char = ALPHA / DIGIT / "!" / "#" / "$" / "+" / "-" / "." / "^"
///            / "_" / "`" / "|" / "~"`
pub const fn is_attr_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '!' | '#' | '$' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~')
}

/// `mime-charset = 1*mime-charsetc`
/// `mime-charsetc = ALPHA / DIGIT / "!" / "#" / "$" / "%" / "&" / "+"
///               / "-" / "^" / "_" / "`" / "{" / "}" / "~"`
pub const fn is_mime_charset_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '!' | '#' | '$' | '%' | '&' | '+' | '-' | '^' | '_' | '`' | '{' | '}' | '~')
}

// ===== Model =====

/// A decoded `charset'language'value` parameter payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtValue {
    pub charset: &'static Encoding,
    pub language: Option<LanguageTag>,
    /// The percent-decoded text, materialized through `charset`.
    pub value: String,
}

impl fmt::Display for ExtValue {
    /// Re-encodes through the charset, escaping every byte outside the
    /// attr-char set as an upper-hex `%XX` triple.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.charset.name())?;
        f.write_str("'")?;
        if let Some(language) = &self.language {
            write!(f, "{language}")?;
        }
        f.write_str("'")?;
        let (bytes, _, _) = self.charset.encode(&self.value);
        for &byte in bytes.iter() {
            if byte.is_ascii() && is_attr_char(byte as char) {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "%{byte:02X}")?;
            }
        }
        Ok(())
    }
}

// ===== Grammar =====

/// `parmname = 1*attr-char`
pub fn param_name<'a>() -> impl Parser<'a, Slice<'a>> {
    take_while(1, UNBOUNDED, is_attr_char)
}

/// `charset`, resolved through the runtime encoding registry. An unknown
/// label is a parse failure.
fn charset<'a>(input: Slice<'a>) -> ParseResult<'a, &'static Encoding> {
    let (label, rest) = take_while(1, UNBOUNDED, is_mime_charset_char).parse(input)?;
    match Encoding::for_label(label.as_str().as_bytes()) {
        Some(encoding) => Ok((encoding, rest)),
        None => Err(ParseError::new(
            format!("unknown charset {:?}", label.as_str()),
            input,
        )),
    }
}

/// `pct-encoded = "%" HEXDIG HEXDIG`, decoded to the raw byte.
fn pct_encoded<'a>(input: Slice<'a>) -> ParseResult<'a, u8> {
    let (_, rest) = take('%').parse(input)?;
    let (digits, rest) = match concat(take_if(is_hex_digit), take_if(is_hex_digit)).parse(rest) {
        Ok(ok) => ok,
        Err(err) => return Err(err.anchored(input)),
    };
    match u8::from_str_radix(digits.as_str(), 16) {
        Ok(byte) => Ok((byte, rest)),
        Err(_) => Err(ParseError::new("expected two hex digits", input)),
    }
}

/// `value-chars = *( pct-encoded / attr-char )`, accumulated as raw bytes.
fn value_chars<'a>(input: Slice<'a>) -> ParseResult<'a, Vec<u8>> {
    let mut bytes = Vec::new();
    let mut rest = input;
    loop {
        if let Ok((byte, next)) = pct_encoded(rest) {
            bytes.push(byte);
            rest = next;
            continue;
        }
        match rest.first() {
            Some(c) if is_attr_char(c) => {
                bytes.push(c as u8);
                rest = rest.slice_from(c.len_utf8());
            }
            _ => break,
        }
    }
    Ok((bytes, rest))
}

/// `ext-value = charset "'" [ language ] "'" value-chars`
pub fn extended_value<'a>(input: Slice<'a>) -> ParseResult<'a, ExtValue> {
    traced("ext-value", |input: Slice<'a>| {
        let (charset, rest) = charset(input)?;
        let (_, rest) = match take('\'').parse(rest) {
            Ok(ok) => ok,
            Err(err) => return Err(err.anchored(input)),
        };
        let (language, rest) = optional(language_tag).parse(rest)?;
        let (_, rest) = match take('\'').parse(rest) {
            Ok(ok) => ok,
            Err(err) => return Err(err.anchored(input)),
        };
        let (bytes, rest) = value_chars(rest)?;
        let (value, _, _) = charset.decode(&bytes);
        Ok((
            ExtValue {
                charset,
                language,
                value: value.into_owned(),
            },
            rest,
        ))
    })
    .parse(input)
}

// ===== Tests =====

#[cfg(test)]
mod test {
    use super::*;
    use crate::rfc5646::{Language, SimpleTag};

    #[test]
    fn decodes_plain_attr_chars() {
        let (value, rest) = extended_value.parse_str("UTF-8''hello").unwrap();
        assert_eq!(value.charset, encoding_rs::UTF_8);
        assert_eq!(value.language, None);
        assert_eq!(value.value, "hello");
        assert!(rest.is_empty());
    }

    #[test]
    fn reassembles_multi_byte_sequences() {
        // three triples forming one UTF-8 code point
        let (value, _) = extended_value.parse_str("UTF-8''%e2%82%ac").unwrap();
        assert_eq!(value.value, "€");
    }

    #[test]
    fn carries_the_language_tag() {
        let (value, _) = extended_value
            .parse_str("UTF-8'de'n%c3%a4chstes%20Kapitel")
            .unwrap();
        assert_eq!(
            value.language,
            Some(LanguageTag::Simple(SimpleTag::new(Language::new("de"))))
        );
        assert_eq!(value.value, "nächstes Kapitel");
    }

    #[test]
    fn decodes_through_the_declared_charset() {
        let (value, _) = extended_value.parse_str("iso-8859-1'en'%A3%20rates").unwrap();
        assert_eq!(value.charset, encoding_rs::WINDOWS_1252);
        assert_eq!(value.value, "£ rates");
    }

    #[test]
    fn unknown_charset_fails() {
        let err = extended_value.parse_str("no-such-charset''abc").unwrap_err();
        assert_eq!(err.offset(), 0);
        assert!(err.message().contains("charset"));
    }

    #[test]
    fn value_stops_at_non_attr_char() {
        let (value, rest) = extended_value.parse_str("UTF-8''abc, next").unwrap();
        assert_eq!(value.value, "abc");
        assert_eq!(rest, ", next");
    }

    #[test]
    fn display_uses_upper_hex_and_round_trips() {
        let (value, _) = extended_value
            .parse_str("UTF-8'de'n%c3%a4chstes%20Kapitel")
            .unwrap();
        let serialized = value.to_string();
        assert_eq!(serialized, "UTF-8'de'n%C3%A4chstes%20Kapitel");

        let (reparsed, _) = extended_value.parse_str(&serialized).unwrap();
        assert_eq!(reparsed, value);
    }
}
