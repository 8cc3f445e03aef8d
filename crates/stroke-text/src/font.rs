//! Font resources and the registry styles are resolved against.

use std::{collections::HashMap, sync::Arc};

use stroke_text_core::{Glyph, GlyphTable};

use crate::{
    Canvas, Error, FontStyle, Result, StyleAttributes,
    attributes::{Attribute, AttributeValue},
};

/// Stroke-specific style defaults carried by a font.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeMetrics {
    pub width_scale: f32,
    pub height_scale: f32,
    /// Line width in pixels.
    pub stroke_width: u32,
    /// Horizontal shear per unit of height applied to italic text.
    pub italic_slant: f32,
}

impl Default for StrokeMetrics {
    fn default() -> Self {
        Self {
            width_scale: 1.0,
            height_scale: 1.0,
            stroke_width: 1,
            italic_slant: 0.75,
        }
    }
}

/// A named stroke font. Fonts are immutable once built and shared between
/// styles (and threads) through [Arc].
#[derive(Debug)]
pub struct Font {
    name: String,
    glyphs: GlyphTable,
    metrics: StrokeMetrics,
}

impl Font {
    pub fn new(name: impl Into<String>, glyphs: GlyphTable) -> Self {
        Self {
            name: name.into(),
            glyphs,
            metrics: StrokeMetrics::default(),
        }
    }

    /// Build a font straight from `(character, glyph)` pairs, validating
    /// the resulting table.
    pub fn from_chars<I>(name: impl Into<String>, chars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, Glyph)>,
    {
        Ok(Self::new(name, GlyphTable::from_chars(chars)?))
    }

    pub fn with_metrics(mut self, metrics: StrokeMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    pub fn metrics(&self) -> &StrokeMetrics {
        &self.metrics
    }

    /// The default style for this font when drawing onto `canvas`.
    pub fn create_style<C: Canvas + ?Sized>(self: Arc<Self>, canvas: &C) -> FontStyle<C::Pixel> {
        FontStyle::new(self, canvas.default_foreground())
    }
}

/// Named fonts plus the font used when a style does not pick one.
#[derive(Debug, Clone)]
pub struct FontRegistry {
    default: Arc<Font>,
    fonts: HashMap<String, Arc<Font>>,
}

impl FontRegistry {
    /// A registry holding just `default`, which is also registered by name.
    pub fn new(default: Arc<Font>) -> Self {
        let mut fonts = HashMap::new();
        fonts.insert(default.name().to_owned(), Arc::clone(&default));

        Self { default, fonts }
    }

    /// Register `font` under its name, returning any font it replaces.
    pub fn register(&mut self, font: Arc<Font>) -> Option<Arc<Font>> {
        log::debug!(
            "registering font `{}` ({} glyphs)",
            font.name(),
            font.glyphs().iter().count()
        );
        self.fonts.insert(font.name().to_owned(), font)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Font>> {
        self.fonts.get(name)
    }

    pub fn default_font(&self) -> &Arc<Font> {
        &self.default
    }

    /// Resolve a style for drawing onto `canvas`: start from the default
    /// style of the selected font (or the registry default), then apply
    /// every attribute that is set.
    pub fn resolve_style<C: Canvas + ?Sized>(
        &self,
        attrs: &StyleAttributes<C::Pixel>,
        canvas: &C,
    ) -> FontStyle<C::Pixel> {
        let font = attrs.selected_font().unwrap_or(&self.default);

        let mut style = Arc::clone(font).create_style(canvas);
        style.apply(attrs);
        style
    }

    /// Set an attribute from textual configuration. Fonts are looked up
    /// by name in this registry.
    pub fn set_attribute<P>(
        &self,
        attrs: &mut StyleAttributes<P>,
        key: &str,
        value: &str,
    ) -> Result<()> {
        let attribute: Attribute = key.parse()?;

        let value = match attribute {
            Attribute::Font => {
                let font = self
                    .get(value.trim())
                    .ok_or_else(|| Error::UnknownFont(value.trim().to_owned()))?;
                AttributeValue::Font(Arc::clone(font))
            }
            _ => AttributeValue::Text(value.to_owned()),
        };

        attrs.set(attribute, value)?;
        Ok(())
    }

    /// Build attributes from `key = value` pairs of textual configuration.
    pub fn parse_attributes<'a, P, I>(&self, pairs: I) -> Result<StyleAttributes<P>>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut attrs = StyleAttributes::new();

        for (key, value) in pairs {
            self.set_attribute(&mut attrs, key, value)?;
        }

        Ok(attrs)
    }
}
