use std::borrow::Cow;

use super::Slice;

// ===== Error =====

/// Parser failure: a diagnostic message plus the slice at which the failing
/// attempt began.
///
/// The position is the start of the outermost failing attempt, not the
/// innermost mismatching character.
#[derive(Clone)]
pub struct ParseError<'a> {
    message: Cow<'static, str>,
    at: Slice<'a>,
}

impl<'a> ParseError<'a> {
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>, at: Slice<'a>) -> Self {
        Self {
            message: message.into(),
            at,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The input slice at which the failing attempt began.
    #[inline]
    pub const fn at(&self) -> Slice<'a> {
        self.at
    }

    /// Byte offset of the failure into the original input.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.at.offset()
    }

    /// Re-anchor the failure at the start of an enclosing attempt.
    #[inline]
    pub fn anchored(mut self, at: Slice<'a>) -> Self {
        self.at = at;
        self
    }
}

impl std::error::Error for ParseError<'_> {}

impl std::fmt::Display for ParseError<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error at offset {}: {}", self.offset(), self.message)
    }
}

impl std::fmt::Debug for ParseError<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}
