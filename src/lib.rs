//! RFC 5988 `Link` header field parser.
//!
//! The grammar stack is built bottom-up from a small combinator engine
//! over borrowed [`Slice`]s: RFC 2616 basic rules, the RFC 3986 opaque
//! URI scanner, RFC 4288 reg-names, RFC 5646 language tags and RFC 5987
//! extended values, composed by the RFC 5988 grammar in [`link`].
//!
//! ```
//! use link_header::{Parameter, parse};
//!
//! let links = parse("<http://example.com/TheBook/chapter2>; rel=\"previous\"")?;
//! assert_eq!(links[0].target, "http://example.com/TheBook/chapter2");
//! assert_eq!(links[0].parameters[0], Parameter::Relation(vec!["previous".into()]));
//! # Ok::<_, link_header::ParseError<'_>>(())
//! ```
#![warn(missing_debug_implementations)]

mod log;

pub mod parsing;
pub mod rfc2234;
pub mod rfc2616;
pub mod rfc3986;
pub mod rfc4288;
pub mod rfc5646;
pub mod rfc5987;
pub mod link;

pub use link::{Link, MediaType, Parameter, parse};
pub use parsing::{ParseError, ParseResult, Parser, Slice};
pub use rfc5646::LanguageTag;
pub use rfc5987::ExtValue;
