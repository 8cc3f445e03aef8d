use stroke_text_core::{Bounds, Point};

use crate::{
    Canvas, FontStyle, Result,
    layout::{Collect, Draw, Measure, layout},
};

/// Draw `text` onto `canvas` with its anchor at `(x, y)`.
///
/// Nothing is drawn if any character of `text` has no glyph in the style's
/// font.
pub fn render_text<C: Canvas + ?Sized>(
    canvas: &mut C,
    text: &str,
    x: i32,
    y: i32,
    style: &FontStyle<C::Pixel>,
) -> Result<()> {
    let mut sink = Draw::new(canvas, style.stroke_width(), style.colour());
    layout(text, x, y, style, &mut sink)
}

/// Measure `text` as [render_text] would draw it with the anchor at the
/// origin. The anchor itself is always inside the returned rectangle, so
/// an empty string measures as the single point `(0, 0)`.
pub fn get_bounds<P>(text: &str, style: &FontStyle<P>) -> Result<Bounds> {
    let mut sink = Measure::new(0, 0);
    layout(text, 0, 0, style, &mut sink)?;
    Ok(sink.bounds())
}

/// Render the given text string to a series of points, anchored at the
/// origin, for output devices that consume paths rather than pixels.
pub fn render_points<P>(text: &str, style: &FontStyle<P>) -> Result<Vec<Point>> {
    let mut sink = Collect::default();
    layout(text, 0, 0, style, &mut sink)?;
    Ok(sink.into_points())
}
