use std::fmt;

/// `language = 2*3ALPHA ["-" extlang]`
///
/// The extended language subtags are collapsed into a single string,
/// `zh-cmn-Hans` keeps `cmn` as one extended value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub primary: String,
    pub extended: Option<String>,
}

impl Language {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            extended: None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.primary)?;
        if let Some(extended) = &self.extended {
            write!(f, "-{extended}")?;
        }
        Ok(())
    }
}

/// `extension = singleton 1*("-" (2*8alphanum))`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    pub singleton: char,
    pub parts: Vec<String>,
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.singleton)?;
        for part in &self.parts {
            write!(f, "-{part}")?;
        }
        Ok(())
    }
}

/// A tag matching the generic `langtag` production.
///
/// Extensions are kept in the order they appeared; singletons are unique
/// across the tag, enforced at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleTag {
    pub language: Language,
    pub script: Option<String>,
    pub region: Option<String>,
    pub variants: Vec<String>,
    pub extensions: Vec<Extension>,
    pub private_use: Option<String>,
}

impl SimpleTag {
    /// A tag carrying only the language subtags.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            script: None,
            region: None,
            variants: Vec::new(),
            extensions: Vec::new(),
            private_use: None,
        }
    }
}

impl fmt::Display for SimpleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        for variant in &self.variants {
            write!(f, "-{variant}")?;
        }
        for extension in &self.extensions {
            write!(f, "-{extension}")?;
        }
        if let Some(private_use) = &self.private_use {
            write!(f, "-{private_use}")?;
        }
        Ok(())
    }
}

/// A historical tag predating the generic grammar, matched verbatim from
/// the two fixed lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grandfathered {
    Irregular(String),
    Regular(String),
}

impl Grandfathered {
    pub fn as_str(&self) -> &str {
        match self {
            Grandfathered::Irregular(name) => name,
            Grandfathered::Regular(name) => name,
        }
    }
}

impl fmt::Display for Grandfathered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Language-Tag = langtag / privateuse / grandfathered` (RFC 5646 §2.1).
///
/// `Display` is the canonical serialization: re-joining the subtags with
/// single `-` separators reproduces the parsed text byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageTag {
    Simple(SimpleTag),
    /// A whole tag of the `x-...` private-use form.
    PrivateUse(String),
    Grandfathered(Grandfathered),
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageTag::Simple(tag) => tag.fmt(f),
            LanguageTag::PrivateUse(name) => f.write_str(name),
            LanguageTag::Grandfathered(tag) => tag.fmt(f),
        }
    }
}
