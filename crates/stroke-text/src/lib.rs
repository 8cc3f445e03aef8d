//! `stroke-text` lays out and draws text using stroke (vector) fonts such
//! as the Hershey fonts.
//!
//! A [FontStyle] picks the font, size, alignment, rotation, italic slant
//! and stroke colour. With a style in hand you can measure a string with
//! [get_bounds], draw it onto any [Canvas] with [render_text], or get the
//! raw stroke points with [render_points]. All three share one traversal,
//! so a measured rectangle predicts exactly where drawing will land.
//!
//! ```
//! use std::sync::Arc;
//! use stroke_text::{Font, FontStyle, Glyph, PackedPoint, get_bounds};
//!
//! let bar = Glyph::new(0, 4, vec![PackedPoint::move_to(0, 0), PackedPoint::line_to(0, 10)]);
//! let font = Arc::new(Font::from_chars("bars", [('I', bar)])?);
//!
//! let style = FontStyle::new(font, ()).with_font_size(10);
//! let bounds = get_bounds("II", &style)?;
//!
//! assert_eq!((bounds.min_x, bounds.max_x), (0, 4));
//! assert_eq!((bounds.min_y, bounds.max_y), (-10, 0));
//! # Ok::<(), stroke_text::Error>(())
//! ```
//!
//! Styles can also be resolved from configuration through a
//! [FontRegistry], which supplies the default font when none is named.

pub mod attributes;
mod canvas;
mod error;
mod font;
pub mod layout;
mod render;
mod style;

pub use attributes::{Attribute, AttributeValue, StyleAttributes};
pub use canvas::Canvas;
pub use error::{Error, Result};
pub use font::{Font, FontRegistry, StrokeMetrics};
pub use render::{get_bounds, render_points, render_text};
pub use stroke_text_core::{Bounds, Glyph, GlyphError, GlyphTable, PackedPoint, Point};
pub use style::{
    DEFAULT_FONT_SIZE, FontStyle, HorizontalAlignment, MAX_FONT_SIZE, MAX_STROKE_WIDTH,
    VerticalAlignment,
};
