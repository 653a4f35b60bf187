//! Language tags from RFC 5646 §2.1.
//!
//! Grandfathered tags are matched verbatim ahead of the generic grammar,
//! then the whole-tag private-use form, then `langtag`. Syntactic success
//! is followed by one semantic check: an extension singleton may appear at
//! most once across the tag.

mod tag;

pub use tag::{Extension, Grandfathered, Language, LanguageTag, SimpleTag};

#[cfg(test)]
mod test;

use crate::parsing::{
    ParseError, ParseResult, Parser, Slice, UNBOUNDED, and_then_ignore, and_then_take, concat,
    entire_slice_of, map, optional, or, repeated, separated_list, take, take_any, take_first,
    take_if, take_while, traced,
};
use crate::rfc2616::{is_alpha, is_digit};

const fn is_alphanum(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// `singleton = DIGIT / ALPHA` except `x` and `X`.
const fn is_singleton(c: char) -> bool {
    is_alphanum(c) && !matches!(c, 'x' | 'X')
}

// Longer literals sit ahead of their prefixes so the first match is the
// longest one.
const IRREGULAR: &[&str] = &[
    "en-GB-oed",
    "i-ami",
    "i-bnn",
    "i-default",
    "i-enochian",
    "i-hak",
    "i-klingon",
    "i-lux",
    "i-mingo",
    "i-navajo",
    "i-pwn",
    "i-tao",
    "i-tay",
    "i-tsu",
    "sgn-BE-FR",
    "sgn-BE-NL",
    "sgn-CH-DE",
];

const REGULAR: &[&str] = &[
    "art-lojban",
    "cel-gaulish",
    "no-bok",
    "no-nyn",
    "zh-guoyu",
    "zh-hakka",
    "zh-min-nan",
    "zh-min",
    "zh-xiang",
];

fn grandfathered<'a>() -> impl Parser<'a, LanguageTag> {
    let literal = or(
        map(take_any(IRREGULAR), |name| {
            LanguageTag::Grandfathered(Grandfathered::Irregular(name.as_str().to_owned()))
        }),
        map(take_any(REGULAR), |name| {
            LanguageTag::Grandfathered(Grandfathered::Regular(name.as_str().to_owned()))
        }),
    );
    // A grandfathered tag is always a complete tag; a subtag continuation
    // after the literal (as in "no-nynorsk") belongs to the generic
    // grammar instead.
    move |input: Slice<'a>| {
        let (tag, rest) = literal.parse(input)?;
        match rest.first() {
            Some(c) if is_alphanum(c) || c == '-' => {
                Err(ParseError::new("a grandfathered tag takes no subtags", input))
            }
            _ => Ok((tag, rest)),
        }
    }
}

/// `"-"` followed by `parser`.
fn dashed<'a, T>(parser: impl Parser<'a, T>) -> impl Parser<'a, T> {
    and_then_take(take('-'), parser)
}

/// `privateuse = "x" 1*("-" (1*8alphanum))`
fn private_use_subtags<'a>() -> impl Parser<'a, Slice<'a>> {
    entire_slice_of(and_then_ignore(
        take('x'),
        repeated(concat(take('-'), take_while(1, 8, is_alphanum)), 1, UNBOUNDED),
    ))
}

/// `extlang = 3ALPHA *2("-" 3ALPHA)`
fn extlang<'a>() -> impl Parser<'a, Slice<'a>> {
    entire_slice_of(and_then_ignore(
        take_while(3, 3, is_alpha),
        repeated(concat(take('-'), take_while(3, 3, is_alpha)), 0, 2),
    ))
}

fn language<'a>(input: Slice<'a>) -> ParseResult<'a, Language> {
    let (primary, rest) = take_while(2, 3, is_alpha).parse(input)?;
    let (extended, rest) = optional(dashed(extlang())).parse(rest)?;
    Ok((
        Language {
            primary: primary.as_str().to_owned(),
            extended: extended.map(|s| s.as_str().to_owned()),
        },
        rest,
    ))
}

/// `variant = 5*8alphanum / (DIGIT 3alphanum)`
fn variant<'a>() -> impl Parser<'a, Slice<'a>> {
    or(
        take_while(5, 8, is_alphanum),
        concat(take_if(is_digit), take_while(3, 3, is_alphanum)),
    )
}

fn extension<'a>(input: Slice<'a>) -> ParseResult<'a, Extension> {
    let (singleton, rest) = match input.first() {
        Some(c) if is_singleton(c) => (c, input.slice_from(c.len_utf8())),
        _ => return Err(ParseError::new("expected an extension singleton", input)),
    };
    let (_, rest) = match take('-').parse(rest) {
        Ok(ok) => ok,
        Err(err) => return Err(err.anchored(input)),
    };
    let parts = separated_list(take_while(2, 8, is_alphanum), take('-'), 1, UNBOUNDED);
    match parts.parse(rest) {
        Ok((parts, rest)) => Ok((
            Extension {
                singleton,
                parts: parts.into_iter().map(|s| s.as_str().to_owned()).collect(),
            },
            rest,
        )),
        Err(err) => Err(err.anchored(input)),
    }
}

fn simple_tag<'a>(input: Slice<'a>) -> ParseResult<'a, LanguageTag> {
    let (language, rest) = language(input)?;
    let (script, rest) = optional(dashed(take_while(4, 4, is_alpha))).parse(rest)?;
    let (region, rest) = optional(dashed(or(
        take_while(2, 2, is_alpha),
        take_while(3, 3, is_digit),
    )))
    .parse(rest)?;
    let (variants, rest) = repeated(dashed(variant()), 0, UNBOUNDED).parse(rest)?;
    let (extensions, rest) = repeated(dashed(extension), 0, UNBOUNDED).parse(rest)?;
    let (private_use, rest) = optional(dashed(private_use_subtags())).parse(rest)?;

    // Semantic check after the syntax matched: singletons are unique
    // across the whole tag.
    for (i, extension) in extensions.iter().enumerate() {
        if extensions[..i].iter().any(|prior| prior.singleton == extension.singleton) {
            let message = format!("duplicated extension singleton '{}'", extension.singleton);
            return Err(ParseError::new(message, input));
        }
    }

    Ok((
        LanguageTag::Simple(SimpleTag {
            language,
            script: script.map(|s| s.as_str().to_owned()),
            region: region.map(|s| s.as_str().to_owned()),
            variants: variants.into_iter().map(|s| s.as_str().to_owned()).collect(),
            extensions,
            private_use: private_use.map(|s| s.as_str().to_owned()),
        }),
        rest,
    ))
}

/// `Language-Tag = langtag / privateuse / grandfathered`
pub fn language_tag<'a>(input: Slice<'a>) -> ParseResult<'a, LanguageTag> {
    traced(
        "language-tag",
        take_first!(
            grandfathered(),
            map(private_use_subtags(), |name| {
                LanguageTag::PrivateUse(name.as_str().to_owned())
            }),
            simple_tag,
        ),
    )
    .parse(input)
}
