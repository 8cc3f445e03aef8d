use std::sync::Arc;

use svg::Document;
use svg::node::element::{Line, Rectangle};

use stroke_text::{
    Canvas, Font, FontRegistry, Glyph, HorizontalAlignment, PackedPoint, StyleAttributes,
    VerticalAlignment, get_bounds, render_text,
};

/// Collects drawn segments as SVG line elements.
#[derive(Default)]
struct SvgCanvas {
    lines: Vec<Line>,
}

impl Canvas for SvgCanvas {
    type Pixel = &'static str;

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, width: u32, colour: &Self::Pixel) {
        self.lines.push(
            Line::new()
                .set("x1", x0)
                .set("y1", y0)
                .set("x2", x1)
                .set("y2", y1)
                .set("stroke", *colour)
                .set("stroke-width", width)
                .set("stroke-linecap", "round"),
        );
    }

    fn default_foreground(&self) -> Self::Pixel {
        "black"
    }
}

fn glyph(right: i8, strokes: &[&[(i8, i8)]]) -> Glyph {
    let mut points = Vec::new();

    for stroke in strokes {
        for (i, &(x, y)) in stroke.iter().enumerate() {
            points.push(match i {
                0 => PackedPoint::move_to(x, y),
                _ => PackedPoint::line_to(x, y),
            });
        }
    }

    Glyph::new(0, right, points)
}

/// Block capitals on a 12 unit tall grid, enough for the demo strings.
fn block_font() -> Result<Font, stroke_text::Error> {
    Font::from_chars(
        "block",
        [
            (' ', Glyph::blank(8)),
            ('D', glyph(10, &[&[(1, 0), (1, 12), (6, 12), (8, 10), (8, 2), (6, 0), (1, 0)]])),
            ('E', glyph(10, &[&[(8, 0), (1, 0), (1, 12), (8, 12)], &[(1, 6), (6, 6)]])),
            ('H', glyph(10, &[&[(1, 0), (1, 12)], &[(8, 0), (8, 12)], &[(1, 6), (8, 6)]])),
            ('L', glyph(9, &[&[(1, 0), (1, 12), (7, 12)]])),
            ('O', glyph(10, &[&[(1, 0), (8, 0), (8, 12), (1, 12), (1, 0)]])),
            ('R', glyph(10, &[&[(1, 12), (1, 0), (8, 0), (8, 6), (1, 6), (8, 12)]])),
            ('T', glyph(10, &[&[(1, 0), (8, 0)], &[(4, 0), (4, 12)]])),
            ('W', glyph(12, &[&[(1, 0), (3, 12), (5, 5), (7, 12), (9, 0)]])),
            ('X', glyph(10, &[&[(1, 0), (8, 12)], &[(8, 0), (1, 12)]])),
        ],
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = FontRegistry::new(Arc::new(block_font()?));

    let width = 500;
    let height = 420;
    let mut canvas = SvgCanvas::default();

    let lines: [(&str, StyleAttributes<&'static str>, i32, i32); 5] = [
        ("HELLO WORLD", StyleAttributes::new(), 20, 60),
        ("HELLO WORLD", StyleAttributes::new().italic(true).colour("navy"), 20, 120),
        (
            "TEXT",
            StyleAttributes::new()
                .horizontal_alignment(HorizontalAlignment::Center)
                .vertical_alignment(VerticalAlignment::Half)
                .font_size(48)
                .stroke_width(3),
            250,
            200,
        ),
        (
            "ROTATED",
            StyleAttributes::new().angle(0.3).colour("darkred"),
            40,
            360,
        ),
        (
            "LOWER RIGHT",
            StyleAttributes::new()
                .horizontal_alignment(HorizontalAlignment::Right)
                .font_size(16),
            480,
            400,
        ),
    ];

    for (text, attrs, x, y) in &lines {
        let style = registry.resolve_style(attrs, &canvas);

        let bounds = get_bounds(text, &style)?;
        println!(
            "{text:>12}: {}x{} px at ({}, {})",
            bounds.width(),
            bounds.height(),
            bounds.min_x + x,
            bounds.min_y + y
        );

        render_text(&mut canvas, text, *x, *y, &style)?;
    }

    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", "white");

    let mut document = Document::new().add(background);

    for line in canvas.lines {
        document = document.add(line);
    }

    let document = document
        .set("viewBox", (0, 0, width, height))
        .set("width", format!("{width}px"))
        .set("height", format!("{height}px"));

    svg::save("output_text.svg", &document)?;
    println!("Wrote output_text.svg");

    Ok(())
}
