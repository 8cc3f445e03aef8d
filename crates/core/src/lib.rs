#![no_std]

//! `stroke-text-core` provides the data model for the `stroke-text` crate:
//! glyph stroke tables, the points produced by laying text out, and the
//! bounding rectangle used when measuring.

extern crate alloc;

mod bounds;
mod glyph;
mod table;

pub use bounds::Bounds;
pub use glyph::{Glyph, PackedPoint};
pub use table::{FIRST_CHAR, GlyphError, GlyphTable, MAX_GLYPHS};

/// A laid-out vertex, in output (pixel) coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    /// Is a line drawn from the previous point to this one?
    pub pen: bool,
}
