use alloc::vec::Vec;

/// A point, in compact representation.
/// Used to store the points which make up an individual glyph.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PackedPoint {
    /// X coordinate of this point
    pub x: i8,
    /// Y coordinate of this point
    pub y: i8,
    /// Should a line be drawn (i.e., "pen down") when moving to this point?
    pub pen: bool,
}

impl PackedPoint {
    /// Move to this point with the pen lifted, starting a new stroke.
    pub const fn move_to(x: i8, y: i8) -> Self {
        Self { x, y, pen: false }
    }

    /// Draw a line from the previous point to this one.
    pub const fn line_to(x: i8, y: i8) -> Self {
        Self { x, y, pen: true }
    }
}

/// A single glyph (character) contained within a font.
///
/// A glyph without strokes is blank: it draws nothing but still advances
/// the pen by its width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// Left coordinate boundary of this glyph
    pub left: i8,
    /// Right coordinate boundary of this glyph
    pub right: i8,
    /// Series of points which make up this glyph
    pub strokes: Vec<PackedPoint>,
}

impl Glyph {
    pub fn new(left: i8, right: i8, strokes: Vec<PackedPoint>) -> Self {
        Self {
            left,
            right,
            strokes,
        }
    }

    /// A glyph with no strokes, `width` units wide.
    pub fn blank(width: i8) -> Self {
        Self::new(0, width, Vec::new())
    }

    /// Horizontal distance the pen moves after this glyph, in font units.
    pub fn advance(&self) -> i32 {
        self.right as i32 - self.left as i32
    }

    /// Vertical range covered by the strokes, if there are any.
    pub fn vertical_extent(&self) -> Option<(i8, i8)> {
        self.strokes.iter().fold(None, |acc, p| match acc {
            None => Some((p.y, p.y)),
            Some((lo, hi)) => Some((lo.min(p.y), hi.max(p.y))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn advance_is_independent_of_strokes() {
        let glyph = Glyph::new(-5, 5, vec![PackedPoint::move_to(0, 0)]);
        assert_eq!(glyph.advance(), 10);
        assert_eq!(Glyph::blank(16).advance(), 16);
    }

    #[test]
    fn vertical_extent_covers_every_point() {
        let glyph = Glyph::new(
            0,
            4,
            vec![
                PackedPoint::move_to(0, 3),
                PackedPoint::line_to(2, -9),
                PackedPoint::line_to(4, 7),
            ],
        );
        assert_eq!(glyph.vertical_extent(), Some((-9, 7)));
        assert_eq!(Glyph::blank(4).vertical_extent(), None);
    }
}
