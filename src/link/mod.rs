//! The `Link` header field grammar from RFC 5988 §5.
//!
//! A field value is an HTTP comma-list of link-values; each link-value is
//! a `<URI-reference>` target followed by `;`-prefixed parameters with
//! implied LWS around the structural delimiters. Parameter dispatch is
//! ordered alternation, most specific name first, with the two generic
//! extension forms last.

mod model;

pub use model::{Link, MediaType, Parameter};


use crate::parsing::{
    ParseError, ParseResult, Parser, Slice, UNBOUNDED, and_then_ignore, and_then_take,
    entire_slice_of, map, optional, or, parse_entirely, repeated, separated_list, separated_pair,
    surrounded_by, take, take_first, take_if, take_str, take_until, take_while, traced,
};
use crate::rfc2616::{
    SP, comma_separated_list, implied_lws, is_digit, is_lowercase_alpha, quoted_string,
    take_with_lws,
};
use crate::rfc3986::uri_reference;
use crate::rfc4288::reg_name;
use crate::rfc5646::language_tag;
use crate::rfc5987::{extended_value, param_name};

// ===== Relation types =====

/// `reg-rel-type = LOALPHA *( LOALPHA | DIGIT | "." | "-" )`
fn reg_rel_type<'a>() -> impl Parser<'a, Slice<'a>> {
    entire_slice_of(and_then_ignore(
        take_if(is_lowercase_alpha),
        take_while(0, UNBOUNDED, |c| {
            is_lowercase_alpha(c) || is_digit(c) || matches!(c, '.' | '-')
        }),
    ))
}

/// `relation-type = reg-rel-type | ext-rel-type`
///
/// The extended form is an opaque URI scan bounded by the parameter
/// follow-set, tried first; it subsumes every registered token, so the
/// distinction never changes the captured text.
fn relation_type<'a>() -> impl Parser<'a, String> {
    map(
        or(uri_reference(&[';', ',', '"']), reg_rel_type()),
        |name| name.as_str().to_owned(),
    )
}

/// `relation-types = relation-type | <"> relation-type *( 1*SP relation-type ) <">`
fn relation_types<'a>() -> impl Parser<'a, Vec<String>> {
    or(
        surrounded_by(
            separated_list(
                relation_type(),
                take_while(1, UNBOUNDED, |c| c == SP),
                1,
                UNBOUNDED,
            ),
            take('"'),
            take('"'),
        ),
        map(relation_type(), |name| vec![name]),
    )
}

// ===== Parameter value grammars =====

fn quoted_uri_reference<'a>() -> impl Parser<'a, String> {
    map(
        surrounded_by(uri_reference(&['"']), take('"'), take('"')),
        |reference| reference.as_str().to_owned(),
    )
}

/// `media-desc`: a quoted string, or an unquoted run up to the parameter
/// follow-set.
fn media_desc<'a>() -> impl Parser<'a, String> {
    or(
        quoted_string,
        map(
            take_until(1, UNBOUNDED, |c| matches!(c, ';' | ',' | '"')),
            |descriptor| descriptor.as_str().to_owned(),
        ),
    )
}

fn media_type<'a>(input: Slice<'a>) -> ParseResult<'a, MediaType> {
    let ((type_name, subtype_name), rest) =
        separated_pair(reg_name(), take('/'), reg_name()).parse(input)?;
    Ok((
        MediaType {
            type_name: type_name.as_str().to_owned(),
            subtype_name: subtype_name.as_str().to_owned(),
        },
        rest,
    ))
}

/// A media-type, bare or wrapped in quotes.
fn media_type_value<'a>() -> impl Parser<'a, MediaType> {
    or(
        surrounded_by(media_type, take('"'), take('"')),
        media_type,
    )
}

// ===== Parameters =====

/// `ptokenchar`: the unquoted extension value alphabet, much wider than
/// the attr-chars a parameter name is limited to.
const fn is_param_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#'
                | '$'
                | '%'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | '-'
                | '.'
                | '/'
                | ':'
                | '<'
                | '='
                | '>'
                | '?'
                | '@'
                | '['
                | ']'
                | '^'
                | '_'
                | '`'
                | '{'
                | '|'
                | '}'
                | '~'
        )
}

/// `ptoken = 1*ptokenchar`
fn param_token<'a>() -> impl Parser<'a, Slice<'a>> {
    take_while(1, UNBOUNDED, is_param_token_char)
}

/// `name "=" value` with implied LWS around the `=`.
fn param<'a, T>(name: &'static str, value: impl Parser<'a, T>) -> impl Parser<'a, T> {
    and_then_take(and_then_ignore(take_str(name), take_with_lws('=')), value)
}

/// `parmname "*" "=" ext-value`
fn extension_star_param<'a>() -> impl Parser<'a, Parameter> {
    map(
        separated_pair(
            and_then_ignore(param_name(), take('*')),
            take_with_lws('='),
            extended_value,
        ),
        |(name, value)| Parameter::ExtensionStar {
            name: name.as_str().to_owned(),
            value,
        },
    )
}

/// `parmname [ "=" ( ptoken | quoted-string ) ]`
fn extension_param<'a>(input: Slice<'a>) -> ParseResult<'a, Parameter> {
    let (name, rest) = param_name().parse(input)?;
    let value = or(quoted_string, map(param_token(), |v| v.as_str().to_owned()));
    let (value, rest) = optional(and_then_take(take_with_lws('='), value)).parse(rest)?;
    Ok((
        Parameter::Extension {
            name: name.as_str().to_owned(),
            value,
        },
        rest,
    ))
}

/// `link-param`, dispatched over the named parameters in fixed priority
/// with the generic extension forms as the fallback.
fn link_param<'a>(input: Slice<'a>) -> ParseResult<'a, Parameter> {
    take_first!(
        map(param(Parameter::REL, relation_types()), Parameter::Relation),
        map(param(Parameter::ANCHOR, quoted_uri_reference()), Parameter::Anchor),
        map(param(Parameter::REV, relation_types()), Parameter::ReverseRelation),
        map(param(Parameter::HREFLANG, language_tag), Parameter::HrefLanguage),
        map(param(Parameter::MEDIA, media_desc()), Parameter::Media),
        map(param(Parameter::TITLE, quoted_string), Parameter::Title),
        map(param(Parameter::TITLE_STAR, extended_value), Parameter::TitleStar),
        map(param(Parameter::TYPE, media_type_value()), Parameter::Type),
        extension_star_param(),
        extension_param,
    )
    .parse(input)
}

// ===== Link values =====

fn is_singleton(parameter: &Parameter) -> bool {
    matches!(
        parameter,
        Parameter::Relation(_)
            | Parameter::Title(_)
            | Parameter::TitleStar(_)
            | Parameter::Media(_)
            | Parameter::Type(_)
    )
}

/// Singleton parameter kinds keep only their first occurrence; every
/// other kind keeps all occurrences in encounter order.
fn retain_by_policy(parameters: Vec<Parameter>) -> Vec<Parameter> {
    let mut output: Vec<Parameter> = Vec::with_capacity(parameters.len());
    for parameter in parameters {
        let duplicate = is_singleton(&parameter)
            && output.iter().any(|kept| kept.name() == parameter.name());
        if !duplicate {
            output.push(parameter);
        }
    }
    output
}

/// `link-value = "<" URI-Reference ">" *( ";" link-param )`
fn link_value<'a>(input: Slice<'a>) -> ParseResult<'a, Link> {
    let (target, rest) = surrounded_by(
        uri_reference(&['>']),
        take_with_lws('<'),
        take_with_lws('>'),
    )
    .parse(input)?;
    let params = and_then_take(take_with_lws(';'), link_param);
    let (parameters, rest) = repeated(params, 0, UNBOUNDED).parse(rest)?;
    Ok((
        Link {
            target: target.as_str().to_owned(),
            parameters: retain_by_policy(parameters),
        },
        rest,
    ))
}

/// `Link = #link-value`
pub fn link_header<'a>() -> impl Parser<'a, Vec<Link>> {
    traced("Link", comma_separated_list(0, UNBOUNDED, link_value))
}

/// Parse a complete `Link` field value into its link-values.
///
/// The whole input must be consumed; any link-value that violates the
/// grammar fails the entire parse.
pub fn parse(input: &str) -> Result<Vec<Link>, ParseError<'_>> {
    crate::log::debug!("parsing a {} byte Link field", input.len());
    let (links, _) =
        parse_entirely(and_then_ignore(link_header(), implied_lws)).parse_str(input)?;
    Ok(links)
}
