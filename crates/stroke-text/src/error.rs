use stroke_text_core::GlyphError;

use crate::attributes::Attribute;

/// Errors raised while resolving a style or laying text out.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("attribute `{attribute}` expects {expected}, got {found}")]
    InvalidAttributeType {
        attribute: Attribute,
        expected: &'static str,
        found: &'static str,
    },

    #[error("attribute `{attribute}` cannot be {value}")]
    InvalidAttributeValue { attribute: Attribute, value: String },

    #[error("unknown style attribute `{0}`")]
    UnknownAttribute(String),

    #[error("no font named `{0}` is registered")]
    UnknownFont(String),

    #[error("character {character:?} at position {position} has no glyph in font `{font}`")]
    UnencodableCharacter {
        character: char,
        position: usize,
        font: String,
    },

    #[error("malformed glyph table: {0}")]
    MalformedGlyphTable(#[from] GlyphError),
}

pub type Result<T> = std::result::Result<T, Error>;
