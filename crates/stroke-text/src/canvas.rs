//! The raster surface text is drawn onto.

/// A surface that can draw stroked line segments.
///
/// How the segment is rasterized (anti-aliasing, blending, caps) is up to
/// the implementor; layout only hands over integer end points.
pub trait Canvas {
    /// Colour representation of this surface.
    type Pixel: Clone;

    /// Draw a segment from `(x0, y0)` to `(x1, y1)`, `width` pixels wide.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, width: u32, colour: &Self::Pixel);

    /// Colour used for text when a style does not name one.
    fn default_foreground(&self) -> Self::Pixel;
}

#[cfg(feature = "tiny-skia")]
impl Canvas for tiny_skia::Pixmap {
    type Pixel = tiny_skia::Color;

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, width: u32, colour: &Self::Pixel) {
        let mut pb = tiny_skia::PathBuilder::new();
        pb.move_to(x0 as f32, y0 as f32);
        pb.line_to(x1 as f32, y1 as f32);

        let Some(path) = pb.finish() else {
            return;
        };

        let mut paint = tiny_skia::Paint::default();
        paint.set_color(*colour);
        paint.anti_alias = false;

        let stroke = tiny_skia::Stroke {
            width: width.max(1) as f32,
            line_cap: tiny_skia::LineCap::Round,
            ..Default::default()
        };

        self.stroke_path(&path, &paint, &stroke, tiny_skia::Transform::identity(), None);
    }

    fn default_foreground(&self) -> Self::Pixel {
        tiny_skia::Color::BLACK
    }
}
