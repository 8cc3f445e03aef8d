//! The glyph traversal shared by measuring, drawing and point output.
//!
//! All three walk the string with exactly the same arithmetic and differ
//! only in the [StrokeSink] the transformed vertices are handed to, so a
//! measured rectangle always matches what gets drawn.

use stroke_text_core::{Bounds, Glyph, Point};

use crate::{Canvas, Error, FontStyle, HorizontalAlignment, Result};

/// Receives the transformed vertices of laid-out text.
pub trait StrokeSink {
    /// Called for every vertex, in order. `from` is the previous vertex
    /// when a line runs from it to `at`, and `None` at the start of a stroke.
    fn vertex(&mut self, at: Point, from: Option<Point>);
}

/// Accumulates the bounding rectangle of every vertex.
#[derive(Debug, Clone)]
pub struct Measure {
    bounds: Bounds,
}

impl Measure {
    /// Start measuring from the anchor point, which is always covered.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            bounds: Bounds::at(x, y),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl StrokeSink for Measure {
    fn vertex(&mut self, at: Point, _from: Option<Point>) {
        self.bounds.include(at.x, at.y);
    }
}

/// Draws every pen-down segment onto a [Canvas].
pub struct Draw<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
    width: u32,
    colour: &'a C::Pixel,
}

impl<'a, C: Canvas + ?Sized> Draw<'a, C> {
    pub fn new(canvas: &'a mut C, width: u32, colour: &'a C::Pixel) -> Self {
        Self {
            canvas,
            width,
            colour,
        }
    }
}

impl<C: Canvas + ?Sized> StrokeSink for Draw<'_, C> {
    fn vertex(&mut self, at: Point, from: Option<Point>) {
        if let Some(from) = from {
            self.canvas
                .draw_line(from.x, from.y, at.x, at.y, self.width, self.colour);
        }
    }
}

/// Collects the vertices as a flat point list, with `pen` set on points
/// reached by drawing a line.
#[derive(Debug, Clone, Default)]
pub struct Collect {
    points: Vec<Point>,
}

impl Collect {
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl StrokeSink for Collect {
    fn vertex(&mut self, at: Point, _from: Option<Point>) {
        self.points.push(at);
    }
}

/// Rotation about a fixed pivot.
struct Rotation {
    cos: f32,
    sin: f32,
    pivot_x: i32,
    pivot_y: i32,
}

impl Rotation {
    fn new(angle: f32, pivot_x: i32, pivot_y: i32) -> Option<Self> {
        if angle == 0.0 {
            return None;
        }

        // Screen y grows downwards, so positive angles turn anticlockwise.
        let theta = f64::from(-angle);

        Some(Self {
            cos: theta.cos() as f32,
            sin: theta.sin() as f32,
            pivot_x,
            pivot_y,
        })
    }

    fn apply(&self, x: i32, y: i32) -> (i32, i32) {
        let dx = x.saturating_sub(self.pivot_x) as f32;
        let dy = y.saturating_sub(self.pivot_y) as f32;

        let rx = dx * self.cos - dy * self.sin;
        let ry = dx * self.sin + dy * self.cos;

        (
            ((rx + 0.5) as i32).saturating_add(self.pivot_x),
            ((ry + 0.5) as i32).saturating_add(self.pivot_y),
        )
    }
}

/// Pixels the pen moves after `glyph`.
fn advance(glyph: &Glyph, width_scale: f32) -> i32 {
    (glyph.advance() as f32 * width_scale) as i32
}

/// Look up every glyph before anything is laid out, so an unencodable
/// character rejects the whole string.
fn resolve<'f, P>(text: &str, style: &'f FontStyle<P>) -> Result<Vec<&'f Glyph>> {
    let font = style.font();

    text.chars()
        .enumerate()
        .map(|(position, character)| {
            font.glyphs()
                .glyph(character)
                .ok_or_else(|| Error::UnencodableCharacter {
                    character,
                    position,
                    font: font.name().to_owned(),
                })
        })
        .collect()
}

/// Lay `text` out at anchor `(x, y)` using `style`, handing each
/// transformed vertex to `sink`.
pub fn layout<P, S: StrokeSink + ?Sized>(
    text: &str,
    x: i32,
    y: i32,
    style: &FontStyle<P>,
    sink: &mut S,
) -> Result<()> {
    let glyphs = resolve(text, style)?;
    let table = style.font().glyphs();

    let width_scale = style.actual_width_scale();
    let height_scale = style.actual_height_scale();
    let rotation = Rotation::new(style.angle(), x, y);

    log::trace!(
        "laying out {} glyphs at ({}, {}), scale {}x{}",
        glyphs.len(),
        x,
        y,
        width_scale,
        height_scale
    );

    // Positions clamp at the edge of the i32 plane instead of wrapping.
    let mut pen_x = x;
    let pen_y = y.saturating_sub(
        (style.vertical_alignment().offset_factor()
            * (height_scale * table.vertical_extent() as f32)) as i32,
    );

    if style.horizontal_alignment() != HorizontalAlignment::Left {
        let len = glyphs
            .iter()
            .fold(0i32, |len, g| len.saturating_add(advance(g, width_scale)));

        match style.horizontal_alignment() {
            HorizontalAlignment::Center => pen_x = pen_x.saturating_sub(len / 2),
            _ => pen_x = pen_x.saturating_sub(len),
        }
    }

    let min_y = table.vertical_min() as i32;
    let slant = height_scale * -style.italic_slant();

    for glyph in glyphs {
        let mut previous: Option<Point> = None;

        for point in &glyph.strokes {
            let dy = point.y as i32 - min_y;
            let dx = point.x as i32 - glyph.left as i32;

            let shear = if style.is_italic() {
                (dy as f32 * slant) as i32
            } else {
                0
            };

            // Floored, so moving the anchor moves every vertex by the same amount.
            let mut vx =
                shear.saturating_add((pen_x as f32 + dx as f32 * width_scale).floor() as i32);
            let mut vy = (pen_y as f32 + dy as f32 * height_scale).floor() as i32;

            if let Some(rotation) = &rotation {
                (vx, vy) = rotation.apply(vx, vy);
            }

            // The first vertex of a glyph only positions the pen.
            let from = previous.filter(|_| point.pen);

            let at = Point {
                x: vx,
                y: vy,
                pen: from.is_some(),
            };

            sink.vertex(at, from);
            previous = Some(at);
        }

        pen_x = pen_x.saturating_add(advance(glyph, width_scale));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Font;
    use std::sync::Arc;
    use stroke_text_core::PackedPoint;

    fn style() -> FontStyle<()> {
        // An "L": down the left side, then along the bottom.
        let ell = Glyph::new(
            0,
            6,
            vec![
                PackedPoint::move_to(0, 0),
                PackedPoint::line_to(0, 10),
                PackedPoint::line_to(5, 10),
            ],
        );
        let font = Font::from_chars("ell", [('L', ell), (' ', Glyph::blank(6))]).unwrap();

        FontStyle::new(Arc::new(font), ())
            .with_font_size(10)
            .with_vertical_alignment(crate::VerticalAlignment::Top)
    }

    fn points(text: &str, style: &FontStyle<()>) -> Vec<Point> {
        let mut collect = Collect::default();
        layout(text, 0, 0, style, &mut collect).unwrap();
        collect.into_points()
    }

    #[test]
    fn first_vertex_of_each_glyph_lifts_the_pen() {
        let pts = points("LL", &style());
        let pens: Vec<bool> = pts.iter().map(|p| p.pen).collect();

        assert_eq!(pens, vec![false, true, true, false, true, true]);
        assert_eq!((pts[3].x, pts[3].y), (6, 0));
    }

    #[test]
    fn blank_glyphs_only_advance() {
        let pts = points("L L", &style());

        assert_eq!(pts.len(), 6);
        assert_eq!(pts[3].x, 12);
    }

    #[test]
    fn italic_shears_relative_to_font_bottom() {
        let pts = points("L", &style().with_italic(true));

        // Slant 0.75 at unit scale: a point 10 units up moves 7.5 left.
        assert_eq!((pts[0].x, pts[0].y), (0, 0));
        assert_eq!((pts[1].x, pts[1].y), (-7, 10));
        assert_eq!((pts[2].x, pts[2].y), (-2, 10));
    }

    #[test]
    fn rotation_turns_about_the_anchor() {
        let style = style().with_angle(std::f32::consts::FRAC_PI_2);
        let mut collect = Collect::default();
        layout("L", 100, 100, &style, &mut collect).unwrap();
        let pts = collect.into_points();

        // (0, 10) below the anchor ends up 10 to its right, within rounding.
        assert_eq!(pts[0].x, 100);
        assert_eq!(pts[0].y, 100);
        assert!((pts[1].x - 110).abs() <= 1, "{:?}", pts[1]);
        assert!((pts[1].y - 100).abs() <= 1, "{:?}", pts[1]);
    }

    #[test]
    fn unencodable_characters_reject_the_string() {
        let mut collect = Collect::default();
        let err = layout("L\u{e9}L", 0, 0, &style(), &mut collect).unwrap_err();

        assert_eq!(
            err,
            Error::UnencodableCharacter {
                character: '\u{e9}',
                position: 1,
                font: "ell".into(),
            }
        );
        assert!(collect.into_points().is_empty());
    }
}
