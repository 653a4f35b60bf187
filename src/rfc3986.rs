//! Opaque URI capture in the spirit of RFC 3986.
//!
//! No structural validation is performed: a URI or URI-reference is a run
//! of one or more characters bounded by a caller-supplied stop set (plus
//! SP). The surrounding delimiter grammar (`<`/`>`, quotes, `;`, `,`) is
//! the only boundary the `Link` field needs, so a syntactically valid URI
//! is never mis-parsed even though some invalid ones are accepted.

use crate::parsing::{Parser, Slice, UNBOUNDED, take_until, traced};
use crate::rfc2616::SP;

fn opaque<'a>(stop: &'static [char]) -> impl Parser<'a, Slice<'a>> {
    take_until(1, UNBOUNDED, move |c| c == SP || stop.contains(&c))
}

/// `URI`, scanned up to the stop set.
pub fn uri<'a>(stop: &'static [char]) -> impl Parser<'a, Slice<'a>> {
    traced("URI", opaque(stop))
}

/// `URI-reference`, scanned up to the stop set.
pub fn uri_reference<'a>(stop: &'static [char]) -> impl Parser<'a, Slice<'a>> {
    traced("URI-reference", opaque(stop))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scans_up_to_stop_set() {
        let (value, rest) = uri_reference(&['>']).parse_str("http://example.com/a?b=c>; rel").unwrap();
        assert_eq!(value, "http://example.com/a?b=c");
        assert_eq!(rest, ">; rel");
    }

    #[test]
    fn space_always_terminates() {
        let (value, rest) = uri(&[';', ',', '"']).parse_str("start next").unwrap();
        assert_eq!(value, "start");
        assert_eq!(rest, " next");
    }

    #[test]
    fn at_least_one_character() {
        assert!(uri_reference(&['>']).parse_str(">").is_err());
        assert!(uri_reference(&['>']).parse_str("").is_err());
    }
}
