//! Style attributes: the configuration record a [FontStyle](crate::FontStyle)
//! is resolved from.
//!
//! Values are coerced and checked when they are set, so a record that
//! exists is always safe to apply.

use std::{fmt, str::FromStr, sync::Arc};

use crate::{
    Error, Font, Result,
    style::{HorizontalAlignment, MAX_FONT_SIZE, MAX_STROKE_WIDTH, VerticalAlignment},
};

/// A recognized style attribute key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Attribute {
    Font,
    Italic,
    /// Rotation, in radians.
    Angle,
    Colour,
    HorizontalAlignment,
    VerticalAlignment,
    /// Font size, in pixels.
    FontSize,
    WidthScale,
    HeightScale,
    StrokeWidth,
    ItalicSlant,
}

impl Attribute {
    pub const ALL: [Attribute; 11] = [
        Self::Font,
        Self::Italic,
        Self::Angle,
        Self::Colour,
        Self::HorizontalAlignment,
        Self::VerticalAlignment,
        Self::FontSize,
        Self::WidthScale,
        Self::HeightScale,
        Self::StrokeWidth,
        Self::ItalicSlant,
    ];

    /// Name of this attribute in textual configuration.
    pub fn name(self) -> &'static str {
        match self {
            Self::Font => "font",
            Self::Italic => "italic",
            Self::Angle => "angle",
            Self::Colour => "colour",
            Self::HorizontalAlignment => "horizontalAlignment",
            Self::VerticalAlignment => "verticalAlignment",
            Self::FontSize => "fontSize",
            Self::WidthScale => "widthScale",
            Self::HeightScale => "heightScale",
            Self::StrokeWidth => "strokeWidth",
            Self::ItalicSlant => "italicSlant",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|attr| attr.name() == s)
            .ok_or_else(|| Error::UnknownAttribute(s.to_owned()))
    }
}

/// An untyped attribute value, as handed over by a configuration source.
#[derive(Debug, Clone)]
pub enum AttributeValue<P> {
    Font(Arc<Font>),
    Bool(bool),
    Number(f64),
    Colour(P),
    Horizontal(HorizontalAlignment),
    Vertical(VerticalAlignment),
    Text(String),
}

impl<P> AttributeValue<P> {
    fn kind(&self) -> &'static str {
        match self {
            Self::Font(_) => "a font",
            Self::Bool(_) => "a boolean",
            Self::Number(_) => "a number",
            Self::Colour(_) => "a colour",
            Self::Horizontal(_) => "a horizontal alignment",
            Self::Vertical(_) => "a vertical alignment",
            Self::Text(_) => "text",
        }
    }
}

/// One optional value per style attribute. Unset attributes leave the
/// corresponding style field alone when applied.
#[derive(Debug, Clone)]
pub struct StyleAttributes<P> {
    pub(crate) font: Option<Arc<Font>>,
    pub(crate) italic: Option<bool>,
    pub(crate) angle: Option<f32>,
    pub(crate) colour: Option<P>,
    pub(crate) horizontal_alignment: Option<HorizontalAlignment>,
    pub(crate) vertical_alignment: Option<VerticalAlignment>,
    pub(crate) font_size: Option<u32>,
    pub(crate) width_scale: Option<f32>,
    pub(crate) height_scale: Option<f32>,
    pub(crate) stroke_width: Option<u32>,
    pub(crate) italic_slant: Option<f32>,
}

impl<P> Default for StyleAttributes<P> {
    fn default() -> Self {
        Self {
            font: None,
            italic: None,
            angle: None,
            colour: None,
            horizontal_alignment: None,
            vertical_alignment: None,
            font_size: None,
            width_scale: None,
            height_scale: None,
            stroke_width: None,
            italic_slant: None,
        }
    }
}

impl<P> StyleAttributes<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(mut self, font: Arc<Font>) -> Self {
        self.font = Some(font);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn angle(mut self, radians: f32) -> Self {
        self.angle = Some(radians);
        self
    }

    pub fn colour(mut self, colour: P) -> Self {
        self.colour = Some(colour);
        self
    }

    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = Some(alignment);
        self
    }

    pub fn vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = Some(alignment);
        self
    }

    pub fn font_size(mut self, pixels: u32) -> Self {
        self.font_size = Some(pixels);
        self
    }

    pub fn width_scale(mut self, scale: f32) -> Self {
        self.width_scale = Some(scale);
        self
    }

    pub fn height_scale(mut self, scale: f32) -> Self {
        self.height_scale = Some(scale);
        self
    }

    pub fn stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn italic_slant(mut self, slant: f32) -> Self {
        self.italic_slant = Some(slant);
        self
    }

    /// The font selected by these attributes, if any.
    pub fn selected_font(&self) -> Option<&Arc<Font>> {
        self.font.as_ref()
    }

    /// Set `attribute` from an untyped value, coercing it to the type the
    /// attribute expects.
    pub fn set(&mut self, attribute: Attribute, value: AttributeValue<P>) -> Result<&mut Self> {
        match attribute {
            Attribute::Font => match value {
                AttributeValue::Font(font) => self.font = Some(font),
                other => return Err(mismatch(attribute, "a font", &other)),
            },
            Attribute::Italic => self.italic = Some(to_bool(attribute, value)?),
            Attribute::Angle => {
                let angle = to_number(attribute, value)?;
                self.angle = Some(check(attribute, angle, angle.is_finite())? as f32);
            }
            Attribute::Colour => match value {
                AttributeValue::Colour(colour) => self.colour = Some(colour),
                other => return Err(mismatch(attribute, "a colour", &other)),
            },
            Attribute::HorizontalAlignment => {
                self.horizontal_alignment = Some(match value {
                    AttributeValue::Horizontal(alignment) => alignment,
                    AttributeValue::Text(text) => text.parse()?,
                    other => return Err(mismatch(attribute, "a horizontal alignment", &other)),
                })
            }
            Attribute::VerticalAlignment => {
                self.vertical_alignment = Some(match value {
                    AttributeValue::Vertical(alignment) => alignment,
                    AttributeValue::Text(text) => text.parse()?,
                    other => return Err(mismatch(attribute, "a vertical alignment", &other)),
                })
            }
            Attribute::FontSize => {
                self.font_size = Some(to_pixels(attribute, value, 1, MAX_FONT_SIZE)?);
            }
            Attribute::WidthScale => {
                let scale = to_number(attribute, value)?;
                let ok = scale.is_finite() && scale > 0.0;
                self.width_scale = Some(check(attribute, scale, ok)? as f32);
            }
            Attribute::HeightScale => {
                let scale = to_number(attribute, value)?;
                let ok = scale.is_finite() && scale > 0.0;
                self.height_scale = Some(check(attribute, scale, ok)? as f32);
            }
            Attribute::StrokeWidth => {
                self.stroke_width = Some(to_pixels(attribute, value, 0, MAX_STROKE_WIDTH)?);
            }
            Attribute::ItalicSlant => {
                let slant = to_number(attribute, value)?;
                self.italic_slant = Some(check(attribute, slant, slant.is_finite())? as f32);
            }
        }

        Ok(self)
    }
}

fn mismatch<P>(attribute: Attribute, expected: &'static str, found: &AttributeValue<P>) -> Error {
    Error::InvalidAttributeType {
        attribute,
        expected,
        found: found.kind(),
    }
}

fn text_mismatch(attribute: Attribute, expected: &'static str) -> Error {
    Error::InvalidAttributeType {
        attribute,
        expected,
        found: "text",
    }
}

fn to_bool<P>(attribute: Attribute, value: AttributeValue<P>) -> Result<bool> {
    match value {
        AttributeValue::Bool(b) => Ok(b),
        AttributeValue::Text(text) => match text.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(text_mismatch(attribute, "a boolean")),
        },
        other => Err(mismatch(attribute, "a boolean", &other)),
    }
}

fn to_number<P>(attribute: Attribute, value: AttributeValue<P>) -> Result<f64> {
    match value {
        AttributeValue::Number(n) => Ok(n),
        AttributeValue::Text(text) => match text.trim().parse::<f64>() {
            Ok(n) => Ok(n),
            Err(_) => Err(text_mismatch(attribute, "a number")),
        },
        other => Err(mismatch(attribute, "a number", &other)),
    }
}

/// A whole number of pixels in `min..=max`.
fn to_pixels<P>(attribute: Attribute, value: AttributeValue<P>, min: u32, max: u32) -> Result<u32> {
    let n = to_number(attribute, value)?;
    let ok = n.fract() == 0.0 && n >= f64::from(min) && n <= f64::from(max);

    Ok(check(attribute, n, ok)? as u32)
}

fn check(attribute: Attribute, value: f64, ok: bool) -> Result<f64> {
    if ok {
        Ok(value)
    } else {
        Err(Error::InvalidAttributeValue {
            attribute,
            value: value.to_string(),
        })
    }
}
