use std::fmt;

use crate::rfc2616::is_ctl;
use crate::rfc5646::LanguageTag;
use crate::rfc5987::ExtValue;

/// One link-value: a target plus its parameters, in encounter order.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub target: String,
    pub parameters: Vec<Parameter>,
}

impl Link {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            parameters: Vec::new(),
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.target)?;
        for parameter in &self.parameters {
            write!(f, "; {parameter}")?;
        }
        Ok(())
    }
}

/// `media-type = type-name "/" subtype-name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    pub type_name: String,
    pub subtype_name: String,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.type_name, self.subtype_name)
    }
}

/// A single `link-param`, one case per named parameter of RFC 5988 §5
/// plus the two generic extension forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    Relation(Vec<String>),
    Anchor(String),
    ReverseRelation(Vec<String>),
    HrefLanguage(LanguageTag),
    Media(String),
    Title(String),
    TitleStar(ExtValue),
    Type(MediaType),
    Extension {
        name: String,
        value: Option<String>,
    },
    /// `name*=ext-value`; `name` is stored without the trailing `*`.
    ExtensionStar {
        name: String,
        value: ExtValue,
    },
}

impl Parameter {
    pub const REL: &'static str = "rel";
    pub const ANCHOR: &'static str = "anchor";
    pub const REV: &'static str = "rev";
    pub const HREFLANG: &'static str = "hreflang";
    pub const MEDIA: &'static str = "media";
    pub const TITLE: &'static str = "title";
    pub const TITLE_STAR: &'static str = "title*";
    pub const TYPE: &'static str = "type";

    pub fn name(&self) -> &str {
        match self {
            Parameter::Relation(_) => Self::REL,
            Parameter::Anchor(_) => Self::ANCHOR,
            Parameter::ReverseRelation(_) => Self::REV,
            Parameter::HrefLanguage(_) => Self::HREFLANG,
            Parameter::Media(_) => Self::MEDIA,
            Parameter::Title(_) => Self::TITLE,
            Parameter::TitleStar(_) => Self::TITLE_STAR,
            Parameter::Type(_) => Self::TYPE,
            Parameter::Extension { name, .. } => name,
            Parameter::ExtensionStar { name, .. } => name,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Relation(names) => write_name_list(f, Self::REL, names),
            Parameter::Anchor(reference) => write!(f, "{}=\"{reference}\"", Self::ANCHOR),
            Parameter::ReverseRelation(names) => write_name_list(f, Self::REV, names),
            Parameter::HrefLanguage(tag) => write!(f, "{}={tag}", Self::HREFLANG),
            Parameter::Media(descriptor) => {
                write!(f, "{}=", Self::MEDIA)?;
                write_quoted(f, descriptor)
            }
            Parameter::Title(text) => {
                write!(f, "{}=", Self::TITLE)?;
                write_quoted(f, text)
            }
            Parameter::TitleStar(value) => write!(f, "{}={value}", Self::TITLE_STAR),
            Parameter::Type(media_type) => write!(f, "{}={media_type}", Self::TYPE),
            Parameter::Extension { name, value } => {
                f.write_str(name)?;
                if let Some(value) = value {
                    f.write_str("=")?;
                    write_quoted(f, value)?;
                }
                Ok(())
            }
            Parameter::ExtensionStar { name, value } => write!(f, "{name}*={value}"),
        }
    }
}

/// Relation lists always serialize quoted, single-token or not.
fn write_name_list(f: &mut fmt::Formatter<'_>, name: &str, values: &[String]) -> fmt::Result {
    write!(f, "{name}=\"")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        f.write_str(value)?;
    }
    f.write_str("\"")
}

/// A quoted-string with `"`, `\` and control characters escaped as
/// quoted-pairs.
fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        if matches!(c, '"' | '\\') || is_ctl(c) {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("\"")
}
