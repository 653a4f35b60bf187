/// Zero-copy view over a window of an immutable input string.
///
/// Owns no characters; sub-slicing never copies. Offsets are byte offsets
/// into the original source and always sit on `char` boundaries.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Slice<'a> {
    source: &'a str,
    offset: usize,
    length: usize,
}

impl<'a> Slice<'a> {
    /// View over the whole of `source`.
    #[inline]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            length: source.len(),
        }
    }

    /// Byte offset of this window into the original input.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Window length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Borrowed view of the window; materializes no copy.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        &self.source[self.offset..self.offset + self.length]
    }

    /// First character of the window, if any.
    #[inline]
    pub fn first(&self) -> Option<char> {
        self.as_str().chars().next()
    }

    /// Character at the given character index.
    pub fn get(&self, index: usize) -> Option<char> {
        self.as_str().chars().nth(index)
    }

    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.as_str().starts_with(prefix)
    }

    /// Sub-slice from byte `index` to the end of the window.
    #[inline]
    pub fn slice_from(&self, index: usize) -> Slice<'a> {
        Slice {
            source: self.source,
            offset: self.offset + index,
            length: self.length - index,
        }
    }

    /// Sub-slice of the first `length` bytes of the window.
    #[inline]
    pub fn slice_to(&self, length: usize) -> Slice<'a> {
        Slice {
            source: self.source,
            offset: self.offset,
            length,
        }
    }

    /// Sub-slice of `length` bytes starting at byte `index`.
    #[inline]
    pub fn slice(&self, index: usize, length: usize) -> Slice<'a> {
        Slice {
            source: self.source,
            offset: self.offset + index,
            length,
        }
    }
}

// ===== Traits =====

impl std::fmt::Display for Slice<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for Slice<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slice({:?} @{})", self.as_str(), self.offset)
    }
}

impl PartialEq<str> for Slice<'_> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Slice<'_> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<'a> From<&'a str> for Slice<'a> {
    #[inline]
    fn from(source: &'a str) -> Self {
        Slice::new(source)
    }
}
