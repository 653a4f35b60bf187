//! Backtracking parser combinators over borrowed string slices.
//!
//! A parser is any `Fn(Slice) -> ParseResult`; combinators are plain
//! functions that compose parsers into new ones. No parser consumes input
//! before succeeding, so every alternative and every `optional` can retry
//! from the position it was handed.
mod error;
mod slice;

pub use error::ParseError;
pub use slice::Slice;


pub type ParseResult<'a, T> = Result<(T, Slice<'a>), ParseError<'a>>;

/// Sentinel for an unbounded repetition or run length.
pub const UNBOUNDED: usize = usize::MAX;

/// A pure function from a [`Slice`] to a [`ParseResult`].
///
/// Blanket-implemented for closures and functions, so plain `fn` grammar
/// productions are parsers.
pub trait Parser<'a, T> {
    fn parse(&self, input: Slice<'a>) -> ParseResult<'a, T>;

    /// Run the parser over the whole of `input`.
    fn parse_str(&self, input: &'a str) -> ParseResult<'a, T> {
        self.parse(Slice::new(input))
    }
}

impl<'a, T, F> Parser<'a, T> for F
where
    F: Fn(Slice<'a>) -> ParseResult<'a, T>,
{
    #[inline]
    fn parse(&self, input: Slice<'a>) -> ParseResult<'a, T> {
        self(input)
    }
}

// ===== Sequencing =====

/// Transform the success value; failures pass through unchanged.
pub fn map<'a, T, U>(parser: impl Parser<'a, T>, f: impl Fn(T) -> U) -> impl Parser<'a, U> {
    move |input: Slice<'a>| {
        let (value, rest) = parser.parse(input)?;
        Ok((f(value), rest))
    }
}

/// Feed the success value into `f` to obtain the parser for the remaining
/// input; failures short-circuit.
pub fn flat_map<'a, T, U, P>(parser: impl Parser<'a, T>, f: impl Fn(T) -> P) -> impl Parser<'a, U>
where
    P: Parser<'a, U>,
{
    move |input: Slice<'a>| {
        let (value, rest) = parser.parse(input)?;
        f(value).parse(rest)
    }
}

/// Run both parsers, keep the first value. A failure of `next` is anchored
/// at the original input position.
pub fn and_then_ignore<'a, T, U>(
    parser: impl Parser<'a, T>,
    next: impl Parser<'a, U>,
) -> impl Parser<'a, T> {
    move |input: Slice<'a>| {
        let (value, rest) = parser.parse(input)?;
        match next.parse(rest) {
            Ok((_, rest)) => Ok((value, rest)),
            Err(err) => Err(err.anchored(input)),
        }
    }
}

/// Run both parsers, keep the second value. A failure of `trailer` is
/// anchored at the original input position.
pub fn and_then_take<'a, T, U>(
    parser: impl Parser<'a, T>,
    trailer: impl Parser<'a, U>,
) -> impl Parser<'a, U> {
    move |input: Slice<'a>| {
        let (_, rest) = parser.parse(input)?;
        match trailer.parse(rest) {
            Ok(ok) => Ok(ok),
            Err(err) => Err(err.anchored(input)),
        }
    }
}

/// `first`, `separator`, `second` in sequence, keeping the outer two values.
pub fn separated_pair<'a, A, S, B>(
    first: impl Parser<'a, A>,
    separator: impl Parser<'a, S>,
    second: impl Parser<'a, B>,
) -> impl Parser<'a, (A, B)> {
    move |input: Slice<'a>| {
        let (a, rest) = first.parse(input)?;
        let (_, rest) = match separator.parse(rest) {
            Ok(ok) => ok,
            Err(err) => return Err(err.anchored(input)),
        };
        match second.parse(rest) {
            Ok((b, rest)) => Ok(((a, b), rest)),
            Err(err) => Err(err.anchored(input)),
        }
    }
}

/// `prefix`, `parser`, `suffix` in sequence, keeping the inner value; any
/// stage's failure is anchored at the original input position.
pub fn surrounded_by<'a, T, P, S>(
    parser: impl Parser<'a, T>,
    prefix: impl Parser<'a, P>,
    suffix: impl Parser<'a, S>,
) -> impl Parser<'a, T> {
    move |input: Slice<'a>| {
        let (_, rest) = prefix.parse(input)?;
        let (value, rest) = match parser.parse(rest) {
            Ok(ok) => ok,
            Err(err) => return Err(err.anchored(input)),
        };
        match suffix.parse(rest) {
            Ok((_, rest)) => Ok((value, rest)),
            Err(err) => Err(err.anchored(input)),
        }
    }
}

/// Run two parsers back to back and return the contiguous slice spanning
/// both matches, without allocating.
pub fn concat<'a, T, U>(
    first: impl Parser<'a, T>,
    second: impl Parser<'a, U>,
) -> impl Parser<'a, Slice<'a>> {
    move |input: Slice<'a>| {
        let (_, rest) = first.parse(input)?;
        match second.parse(rest) {
            Ok((_, rest)) => Ok((input.slice_to(input.len() - rest.len()), rest)),
            Err(err) => Err(err.anchored(input)),
        }
    }
}

/// Run the parser, discard its value, and return the exact consumed
/// sub-slice of the input.
pub fn entire_slice_of<'a, T>(parser: impl Parser<'a, T>) -> impl Parser<'a, Slice<'a>> {
    move |input: Slice<'a>| {
        let (_, rest) = parser.parse(input)?;
        Ok((input.slice_to(input.len() - rest.len()), rest))
    }
}

// ===== Alternation =====

/// Ordered alternation: `a` first, `b` against the same input if `a` fails.
///
/// When both fail, the reported message is the last branch's, anchored at
/// the original input position.
pub fn or<'a, T>(a: impl Parser<'a, T>, b: impl Parser<'a, T>) -> impl Parser<'a, T> {
    move |input: Slice<'a>| match a.parse(input) {
        Ok(ok) => Ok(ok),
        Err(_) => match b.parse(input) {
            Ok(ok) => Ok(ok),
            Err(err) => Err(err.anchored(input)),
        },
    }
}

/// Ordered alternation over any number of parsers; the first success wins
/// and later branches are never evaluated.
///
/// Branches must be ordered most-specific first, a generic branch shadows
/// every specific one behind it.
macro_rules! take_first {
    ($only:expr $(,)?) => { $only };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::parsing::or($first, $crate::parsing::take_first!($($rest),+))
    };
}

pub(crate) use take_first;

/// Success with the parser's value, or a non-consuming success with `None`.
pub fn optional<'a, T>(parser: impl Parser<'a, T>) -> impl Parser<'a, Option<T>> {
    move |input: Slice<'a>| match parser.parse(input) {
        Ok((value, rest)) => Ok((Some(value), rest)),
        Err(_) => Ok((None, input)),
    }
}

// ===== Repetition =====

/// Greedily consume the maximal run of characters matching `predicate`;
/// succeed only if the run's length is within `min..=max`.
pub fn take_while<'a>(
    min: usize,
    max: usize,
    predicate: impl Fn(char) -> bool,
) -> impl Parser<'a, Slice<'a>> {
    move |input: Slice<'a>| {
        let mut count = 0usize;
        let mut len = 0usize;
        for c in input.as_str().chars() {
            if !predicate(c) {
                break;
            }
            count += 1;
            len += c.len_utf8();
        }
        if count < min {
            let message = format!("{count} characters matched, at least {min} required");
            return Err(ParseError::new(message, input));
        }
        if count > max {
            let message = format!("{count} characters matched, at most {max} allowed");
            return Err(ParseError::new(message, input));
        }
        Ok((input.slice_to(len), input.slice_from(len)))
    }
}

/// [`take_while`] with the predicate inverted: consume up to the first
/// character matching `predicate`.
pub fn take_until<'a>(
    min: usize,
    max: usize,
    predicate: impl Fn(char) -> bool,
) -> impl Parser<'a, Slice<'a>> {
    take_while(min, max, move |c| !predicate(c))
}

/// Repeat until failure or `max` matches; succeed iff at least `min`
/// matches were made. A zero-width match terminates the loop, repetition
/// always makes forward progress.
pub fn repeated<'a, T>(
    parser: impl Parser<'a, T>,
    min: usize,
    max: usize,
) -> impl Parser<'a, Vec<T>> {
    move |input: Slice<'a>| {
        debug_assert!(min <= max);
        let mut output = Vec::new();
        let mut rest = input;
        while output.len() < max {
            let Ok((value, next)) = parser.parse(rest) else {
                break;
            };
            output.push(value);
            let stalled = next.offset() == rest.offset();
            rest = next;
            if stalled {
                break;
            }
        }
        if output.len() < min {
            let message = format!("only matched {} times, {min} required", output.len());
            return Err(ParseError::new(message, input));
        }
        Ok((output, rest))
    }
}

/// One-or-more elements separated by `separator`. A trailing separator
/// without a following element is not consumed.
pub fn separated_list<'a, T, S>(
    parser: impl Parser<'a, T>,
    separator: impl Parser<'a, S>,
    min: usize,
    max: usize,
) -> impl Parser<'a, Vec<T>> {
    move |input: Slice<'a>| {
        debug_assert!(min <= max);
        if max == 0 {
            return Ok((Vec::new(), input));
        }
        let (first, mut rest) = match parser.parse(input) {
            Ok(ok) => ok,
            Err(_) if min == 0 => return Ok((Vec::new(), input)),
            Err(err) => return Err(err),
        };
        let mut output = vec![first];
        while output.len() < max {
            let Ok((_, after_separator)) = separator.parse(rest) else {
                break;
            };
            let Ok((value, next)) = parser.parse(after_separator) else {
                break;
            };
            output.push(value);
            let stalled = next.offset() == rest.offset();
            rest = next;
            if stalled {
                break;
            }
        }
        if output.len() < min {
            let message = format!("only matched {} times, {min} required", output.len());
            return Err(ParseError::new(message, input));
        }
        Ok((output, rest))
    }
}

// ===== Matchers =====

/// Match exactly the character `c`.
pub fn take<'a>(c: char) -> impl Parser<'a, Slice<'a>> {
    take_if(move |other| other == c)
}

/// Match a single character satisfying `predicate`.
pub fn take_if<'a>(predicate: impl Fn(char) -> bool) -> impl Parser<'a, Slice<'a>> {
    move |input: Slice<'a>| match input.first() {
        Some(c) if predicate(c) => Ok((input.slice_to(c.len_utf8()), input.slice_from(c.len_utf8()))),
        Some(_) => Err(ParseError::new("unexpected character", input)),
        None => Err(ParseError::new("no input left", input)),
    }
}

/// Match exactly the literal string.
pub fn take_str<'a>(literal: &'static str) -> impl Parser<'a, Slice<'a>> {
    move |input: Slice<'a>| {
        if input.starts_with(literal) {
            Ok((input.slice_to(literal.len()), input.slice_from(literal.len())))
        } else {
            Err(ParseError::new(format!("expected {literal:?}"), input))
        }
    }
}

/// Match the first literal, in listed order, that is a prefix of the
/// remaining input.
pub fn take_any<'a>(literals: &'static [&'static str]) -> impl Parser<'a, Slice<'a>> {
    move |input: Slice<'a>| {
        for literal in literals {
            if input.starts_with(literal) {
                return Ok((input.slice_to(literal.len()), input.slice_from(literal.len())));
            }
        }
        Err(ParseError::new("no literal matched", input))
    }
}

// ===== Wrappers =====

/// Require the parser to consume the entire input; any leftover is a
/// failure anchored at the start of the unconsumed text.
pub fn parse_entirely<'a, T>(parser: impl Parser<'a, T>) -> impl Parser<'a, T> {
    move |input: Slice<'a>| {
        let (value, rest) = parser.parse(input)?;
        if rest.is_empty() {
            Ok((value, rest))
        } else {
            Err(ParseError::new("trailing input left unconsumed", rest))
        }
    }
}

/// Tag a parser for trace logging.
#[cfg(feature = "log")]
pub fn traced<'a, T>(name: &'static str, parser: impl Parser<'a, T>) -> impl Parser<'a, T> {
    move |input: Slice<'a>| {
        crate::log::trace!("{name} @{}", input.offset());
        let result = parser.parse(input);
        match &result {
            Ok((_, rest)) => {
                crate::log::trace!("{name} @{}: ok, {} bytes", input.offset(), input.len() - rest.len());
            }
            Err(err) => {
                crate::log::trace!("{name} @{}: {}", input.offset(), err.message());
            }
        }
        result
    }
}

/// Tag a parser for trace logging; without the `log` feature this is the
/// identity and disappears from parser call paths.
#[cfg(not(feature = "log"))]
pub fn traced<'a, T>(_name: &'static str, parser: impl Parser<'a, T>) -> impl Parser<'a, T> {
    parser
}
