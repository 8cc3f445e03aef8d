#![cfg(feature = "tiny-skia")]

use std::sync::Arc;

use stroke_text::{Font, FontRegistry, Glyph, PackedPoint, StyleAttributes, get_bounds, render_text};
use tiny_skia::{Color, Pixmap};

fn bar_font() -> Arc<Font> {
    let bar = Glyph::new(
        0,
        4,
        vec![PackedPoint::move_to(0, 0), PackedPoint::line_to(0, 10)],
    );
    Arc::new(Font::from_chars("bar", [('I', bar)]).unwrap())
}

#[test]
fn draws_strokes_onto_a_pixmap() {
    let mut pixmap = Pixmap::new(64, 64).unwrap();
    let registry = FontRegistry::new(bar_font());

    let attrs = StyleAttributes::new().font_size(10).stroke_width(3);
    let style = registry.resolve_style(&attrs, &pixmap);
    assert_eq!(*style.colour(), Color::BLACK);

    render_text(&mut pixmap, "I", 10, 40, &style).unwrap();

    let painted = |x, y| pixmap.pixel(x, y).map(|p| p.alpha()).unwrap_or(0) > 0;
    assert!(painted(10, 35));
    assert!(!painted(40, 35));
    assert!(!painted(10, 5));

    let bounds = get_bounds("I", &style).unwrap();
    assert_eq!((bounds.min_y + 40, bounds.max_y + 40), (30, 40));
}
