use alloc::vec::Vec;

use crate::Glyph;

/// First encodable character; glyph indices are offsets from it.
pub const FIRST_CHAR: char = ' ';

/// Number of glyph slots in a table (`' '` through `'\u{FF}'`).
pub const MAX_GLYPHS: usize = 256 - FIRST_CHAR as usize;

/// A glyph table that cannot be used for layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlyphError {
    #[error("glyph {character:?} has left extent {left} past its right extent {right}")]
    InvertedExtents { character: char, left: i8, right: i8 },

    #[error("vertical extents {min}..{max} do not span any height")]
    EmptyVerticalRange { min: i16, max: i16 },

    #[error("table has {0} glyph slots, at most {max} are encodable", max = MAX_GLYPHS)]
    TooManyGlyphs(usize),

    #[error("character {0:?} is outside the single-byte glyph index space")]
    Unencodable(char),

    #[error("character {0:?} is given more than one glyph")]
    DuplicateCharacter(char),

    #[error("table contains no glyphs")]
    Empty,
}

/// Immutable stroke data for every encodable character of one font, plus
/// the font-wide vertical extents used for alignment and scaling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: Vec<Option<Glyph>>,
    vertical_min: i16,
    vertical_max: i16,
}

impl GlyphTable {
    /// Build a table from glyphs indexed by `char - ' '`, with explicit
    /// font-wide vertical extents.
    pub fn new(
        glyphs: Vec<Option<Glyph>>,
        vertical_min: i16,
        vertical_max: i16,
    ) -> Result<Self, GlyphError> {
        if glyphs.len() > MAX_GLYPHS {
            return Err(GlyphError::TooManyGlyphs(glyphs.len()));
        }

        if vertical_max <= vertical_min {
            return Err(GlyphError::EmptyVerticalRange {
                min: vertical_min,
                max: vertical_max,
            });
        }

        let mut populated = 0;

        for (idx, glyph) in glyphs.iter().enumerate() {
            let Some(glyph) = glyph else { continue };

            if glyph.left > glyph.right {
                return Err(GlyphError::InvertedExtents {
                    character: char_at(idx),
                    left: glyph.left,
                    right: glyph.right,
                });
            }

            populated += 1;
        }

        if populated == 0 {
            return Err(GlyphError::Empty);
        }

        log::debug!(
            "built glyph table with {} glyphs, vertical extents {}..{}",
            populated,
            vertical_min,
            vertical_max
        );

        Ok(Self {
            glyphs,
            vertical_min,
            vertical_max,
        })
    }

    /// Build a table from `(character, glyph)` pairs. The vertical extents
    /// are the lowest and highest point of any glyph. Each character may
    /// appear only once.
    pub fn from_chars<I>(chars: I) -> Result<Self, GlyphError>
    where
        I: IntoIterator<Item = (char, Glyph)>,
    {
        let mut glyphs: Vec<Option<Glyph>> = Vec::new();
        let mut extent: Option<(i8, i8)> = None;

        for (character, glyph) in chars {
            let idx = Self::index_of(character).ok_or(GlyphError::Unencodable(character))?;

            if glyphs.get(idx).is_some_and(Option::is_some) {
                return Err(GlyphError::DuplicateCharacter(character));
            }

            if let Some((lo, hi)) = glyph.vertical_extent() {
                extent = Some(match extent {
                    None => (lo, hi),
                    Some((min, max)) => (min.min(lo), max.max(hi)),
                });
            }

            if glyphs.len() <= idx {
                glyphs.resize(idx + 1, None);
            }
            glyphs[idx] = Some(glyph);
        }

        if glyphs.is_empty() {
            return Err(GlyphError::Empty);
        }

        let (min, max) = extent.unwrap_or((0, 0));
        Self::new(glyphs, min as i16, max as i16)
    }

    /// Slot of `character` in any table, if it lies in the index space.
    pub fn index_of(character: char) -> Option<usize> {
        let idx = (character as u32).checked_sub(FIRST_CHAR as u32)? as usize;
        (idx < MAX_GLYPHS).then_some(idx)
    }

    /// The glyph drawn for `character`, if this font defines one.
    pub fn glyph(&self, character: char) -> Option<&Glyph> {
        self.glyphs.get(Self::index_of(character)?)?.as_ref()
    }

    pub fn vertical_min(&self) -> i16 {
        self.vertical_min
    }

    pub fn vertical_max(&self) -> i16 {
        self.vertical_max
    }

    /// Height of the font in font units; always positive.
    pub fn vertical_extent(&self) -> i32 {
        self.vertical_max as i32 - self.vertical_min as i32
    }

    /// Iterate the defined glyphs with their characters.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Glyph)> {
        self.glyphs
            .iter()
            .enumerate()
            .filter_map(|(idx, glyph)| glyph.as_ref().map(|g| (char_at(idx), g)))
    }
}

fn char_at(idx: usize) -> char {
    // Slots never exceed the single-byte range, which is all valid chars.
    char::from(FIRST_CHAR as u8 + idx as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PackedPoint;
    use alloc::vec;

    fn bar() -> Glyph {
        Glyph::new(
            0,
            4,
            vec![PackedPoint::move_to(0, 0), PackedPoint::line_to(0, 10)],
        )
    }

    #[test]
    fn index_space_starts_at_space() {
        assert_eq!(GlyphTable::index_of(' '), Some(0));
        assert_eq!(GlyphTable::index_of('A'), Some(33));
        assert_eq!(GlyphTable::index_of('\u{FF}'), Some(MAX_GLYPHS - 1));
        assert_eq!(GlyphTable::index_of('\u{100}'), None);
        assert_eq!(GlyphTable::index_of('\n'), None);
    }

    #[test]
    fn from_chars_places_glyphs_and_measures_height() {
        let table = GlyphTable::from_chars([('A', bar()), (' ', Glyph::blank(8))]).unwrap();

        assert_eq!(table.glyph('A'), Some(&bar()));
        assert_eq!(table.glyph(' ').map(Glyph::advance), Some(8));
        assert_eq!(table.glyph('B'), None);
        assert_eq!(table.glyph('é'), None);
        assert_eq!(table.vertical_min(), 0);
        assert_eq!(table.vertical_max(), 10);
        assert_eq!(table.vertical_extent(), 10);

        let chars: Vec<char> = table.iter().map(|(c, _)| c).collect();
        assert_eq!(chars, vec![' ', 'A']);
    }

    #[test]
    fn rejects_inverted_extents() {
        let glyph = Glyph::new(5, -5, vec![PackedPoint::move_to(0, 0)]);
        let err = GlyphTable::from_chars([('A', bar()), ('x', glyph)]).unwrap_err();

        assert_eq!(
            err,
            GlyphError::InvertedExtents {
                character: 'x',
                left: 5,
                right: -5
            }
        );
    }

    #[test]
    fn rejects_duplicate_characters() {
        let tall = Glyph::new(
            0,
            4,
            vec![PackedPoint::move_to(0, -20), PackedPoint::line_to(0, 30)],
        );

        assert_eq!(
            GlyphTable::from_chars([('A', tall), ('B', bar()), ('A', bar())]).unwrap_err(),
            GlyphError::DuplicateCharacter('A')
        );
    }

    #[test]
    fn rejects_flat_fonts() {
        assert_eq!(
            GlyphTable::from_chars([(' ', Glyph::blank(8))]).unwrap_err(),
            GlyphError::EmptyVerticalRange { min: 0, max: 0 }
        );
        assert_eq!(
            GlyphTable::new(vec![Some(bar())], 3, -3).unwrap_err(),
            GlyphError::EmptyVerticalRange { min: 3, max: -3 }
        );
    }

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!(
            GlyphTable::from_chars([('\u{2603}', bar())]).unwrap_err(),
            GlyphError::Unencodable('\u{2603}')
        );
        assert_eq!(
            GlyphTable::from_chars(core::iter::empty::<(char, Glyph)>()).unwrap_err(),
            GlyphError::Empty
        );
        assert_eq!(
            GlyphTable::new(vec![None, None], 0, 10).unwrap_err(),
            GlyphError::Empty
        );
        assert_eq!(
            GlyphTable::new(vec![None; MAX_GLYPHS + 1], 0, 10).unwrap_err(),
            GlyphError::TooManyGlyphs(MAX_GLYPHS + 1)
        );
    }
}
