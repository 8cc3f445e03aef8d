//! Resolved rendering parameters for a piece of text.

use std::{str::FromStr, sync::Arc};

use crate::{Error, Font, Result, StyleAttributes, attributes::Attribute};

/// Font size used when none is configured, in pixels.
pub const DEFAULT_FONT_SIZE: u32 = 24;

/// Largest font size accepted from attributes, in pixels.
pub const MAX_FONT_SIZE: u32 = 1 << 16;

/// Largest stroke width accepted from attributes, in pixels.
pub const MAX_STROKE_WIDTH: u32 = 1 << 16;

/// Where the anchor point sits horizontally relative to the text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    /// Text starts at the anchor
    #[default]
    Left,
    /// Text is centered on the anchor
    Center,
    /// Text ends at the anchor
    Right,
}

impl FromStr for HorizontalAlignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" | "centre" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(Error::InvalidAttributeValue {
                attribute: Attribute::HorizontalAlignment,
                value: s.to_owned(),
            }),
        }
    }
}

/// Where the anchor point sits vertically relative to the text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    Top,
    Half,
    Cap,
    /// Anchor on the lowest point of the font
    #[default]
    Bottom,
}

impl VerticalAlignment {
    /// Fraction of the font height the text is raised by.
    pub fn offset_factor(self) -> f32 {
        match self {
            Self::Top => 0.0,
            Self::Half => 0.5,
            Self::Cap => 0.25,
            Self::Bottom => 1.0,
        }
    }
}

impl FromStr for VerticalAlignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "half" => Ok(Self::Half),
            "cap" => Ok(Self::Cap),
            "bottom" => Ok(Self::Bottom),
            _ => Err(Error::InvalidAttributeValue {
                attribute: Attribute::VerticalAlignment,
                value: s.to_owned(),
            }),
        }
    }
}

/// Everything needed to lay out and draw a string: the font, its size and
/// placement, and the stroke colour of pixel type `P`.
///
/// The scales actually used for layout are derived from the font size and
/// the font's height every time they are read, so changing either never
/// leaves stale values behind.
#[derive(Debug, Clone)]
pub struct FontStyle<P> {
    font: Arc<Font>,
    italic: bool,
    angle: f32,
    colour: P,
    horizontal_alignment: HorizontalAlignment,
    vertical_alignment: VerticalAlignment,
    font_size: u32,
    width_scale: f32,
    height_scale: f32,
    stroke_width: u32,
    italic_slant: f32,
}

impl<P> FontStyle<P> {
    /// A style with the font's own stroke metrics and every other field at
    /// its default.
    pub fn new(font: Arc<Font>, colour: P) -> Self {
        let metrics = font.metrics().clone();

        Self {
            font,
            italic: false,
            angle: 0.0,
            colour,
            horizontal_alignment: HorizontalAlignment::default(),
            vertical_alignment: VerticalAlignment::default(),
            font_size: DEFAULT_FONT_SIZE,
            width_scale: metrics.width_scale,
            height_scale: metrics.height_scale,
            stroke_width: metrics.stroke_width,
            italic_slant: metrics.italic_slant,
        }
    }

    /// Override every field that `attrs` sets.
    pub fn apply(&mut self, attrs: &StyleAttributes<P>)
    where
        P: Clone,
    {
        if let Some(font) = &attrs.font {
            self.font = Arc::clone(font);
        }
        if let Some(italic) = attrs.italic {
            self.italic = italic;
        }
        if let Some(angle) = attrs.angle {
            self.angle = angle;
        }
        if let Some(colour) = &attrs.colour {
            self.colour = colour.clone();
        }
        if let Some(alignment) = attrs.horizontal_alignment {
            self.horizontal_alignment = alignment;
        }
        if let Some(alignment) = attrs.vertical_alignment {
            self.vertical_alignment = alignment;
        }
        if let Some(size) = attrs.font_size {
            self.font_size = size;
        }

        // Stroke metrics; a font change above keeps the current values.
        if let Some(scale) = attrs.width_scale {
            self.width_scale = scale;
        }
        if let Some(scale) = attrs.height_scale {
            self.height_scale = scale;
        }
        if let Some(width) = attrs.stroke_width {
            self.stroke_width = width;
        }
        if let Some(slant) = attrs.italic_slant {
            self.italic_slant = slant;
        }
    }

    pub fn font(&self) -> &Arc<Font> {
        &self.font
    }

    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Rotation in radians; zero draws unrotated text.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn colour(&self) -> &P {
        &self.colour
    }

    pub fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.horizontal_alignment
    }

    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.vertical_alignment
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Extra horizontal stretch on top of the font size.
    pub fn width_scale(&self) -> f32 {
        self.width_scale
    }

    /// Extra vertical stretch on top of the font size.
    pub fn height_scale(&self) -> f32 {
        self.height_scale
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    /// Horizontal shear per unit of height used for italics.
    pub fn italic_slant(&self) -> f32 {
        self.italic_slant
    }

    /// Pixels per font unit horizontally.
    pub fn actual_width_scale(&self) -> f32 {
        self.width_scale * (self.font_size as f32 / self.font_height())
    }

    /// Pixels per font unit vertically.
    pub fn actual_height_scale(&self) -> f32 {
        self.height_scale * (self.font_size as f32 / self.font_height())
    }

    fn font_height(&self) -> f32 {
        self.font.glyphs().vertical_extent() as f32
    }

    pub fn set_font(&mut self, font: Arc<Font>) {
        self.font = font;
    }

    pub fn set_italic(&mut self, italic: bool) {
        self.italic = italic;
    }

    pub fn set_angle(&mut self, radians: f32) {
        self.angle = radians;
    }

    pub fn set_colour(&mut self, colour: P) {
        self.colour = colour;
    }

    pub fn set_horizontal_alignment(&mut self, alignment: HorizontalAlignment) {
        self.horizontal_alignment = alignment;
    }

    pub fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) {
        self.vertical_alignment = alignment;
    }

    pub fn set_font_size(&mut self, pixels: u32) {
        self.font_size = pixels;
    }

    pub fn set_width_scale(&mut self, scale: f32) {
        self.width_scale = scale;
    }

    pub fn set_height_scale(&mut self, scale: f32) {
        self.height_scale = scale;
    }

    pub fn set_stroke_width(&mut self, width: u32) {
        self.stroke_width = width;
    }

    pub fn set_italic_slant(&mut self, slant: f32) {
        self.italic_slant = slant;
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_angle(mut self, radians: f32) -> Self {
        self.angle = radians;
        self
    }

    pub fn with_horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    pub fn with_vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    pub fn with_font_size(mut self, pixels: u32) -> Self {
        self.font_size = pixels;
        self
    }

    pub fn with_stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_italic_slant(mut self, slant: f32) -> Self {
        self.italic_slant = slant;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Font, StrokeMetrics};
    use stroke_text_core::{Glyph, GlyphTable, PackedPoint};

    fn font(name: &str, height: i8) -> Arc<Font> {
        let bar = Glyph::new(
            0,
            4,
            vec![PackedPoint::move_to(0, 0), PackedPoint::line_to(0, height)],
        );
        let table = GlyphTable::from_chars([('A', bar)]).unwrap();
        Arc::new(Font::new(name, table))
    }

    #[test]
    fn fresh_style_uses_defaults() {
        let style = FontStyle::new(font("bar", 10), 255u8);

        assert!(!style.is_italic());
        assert_eq!(style.angle(), 0.0);
        assert_eq!(*style.colour(), 255);
        assert_eq!(style.horizontal_alignment(), HorizontalAlignment::Left);
        assert_eq!(style.vertical_alignment(), VerticalAlignment::Bottom);
        assert_eq!(style.font_size(), DEFAULT_FONT_SIZE);
        assert_eq!(style.stroke_width(), 1);
        assert_eq!(style.italic_slant(), 0.75);
    }

    #[test]
    fn scales_follow_font_size_and_font() {
        let mut style = FontStyle::new(font("bar", 10), 0u8).with_font_size(10);
        assert_eq!(style.actual_width_scale(), 1.0);
        assert_eq!(style.actual_height_scale(), 1.0);

        style.set_font_size(30);
        assert_eq!(style.actual_height_scale(), 3.0);

        style.set_font(font("tall", 20));
        assert_eq!(style.actual_height_scale(), 1.5);

        style.set_width_scale(2.0);
        assert_eq!(style.actual_width_scale(), 3.0);
        assert_eq!(style.actual_height_scale(), 1.5);
    }

    #[test]
    fn font_metrics_seed_the_style() {
        let table = font("bar", 10).glyphs().clone();
        let wide = Arc::new(Font::new("wide", table).with_metrics(StrokeMetrics {
            width_scale: 2.0,
            stroke_width: 3,
            ..StrokeMetrics::default()
        }));

        let style = FontStyle::new(wide, 0u8);
        assert_eq!(style.width_scale(), 2.0);
        assert_eq!(style.height_scale(), 1.0);
        assert_eq!(style.stroke_width(), 3);
    }

    #[test]
    fn apply_only_touches_set_fields() {
        let mut style = FontStyle::new(font("bar", 10), 0u8)
            .with_italic(true)
            .with_stroke_width(4);

        let other = font("other", 10);
        style.apply(
            &StyleAttributes::new()
                .font(Arc::clone(&other))
                .font_size(12)
                .colour(9),
        );

        assert!(Arc::ptr_eq(style.font(), &other));
        assert_eq!(style.font_size(), 12);
        assert_eq!(*style.colour(), 9);
        assert!(style.is_italic());
        assert_eq!(style.stroke_width(), 4);
        assert_eq!(style.vertical_alignment(), VerticalAlignment::Bottom);
    }

    #[test]
    fn alignments_parse_from_names() {
        assert_eq!("Centre".parse::<HorizontalAlignment>(), Ok(HorizontalAlignment::Center));
        assert_eq!("right".parse::<HorizontalAlignment>(), Ok(HorizontalAlignment::Right));
        assert_eq!("half".parse::<VerticalAlignment>(), Ok(VerticalAlignment::Half));
        assert!("middle".parse::<VerticalAlignment>().is_err());
    }
}
