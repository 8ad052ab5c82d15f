use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Path, Rectangle};

use led_glyphs::{GlyphAlphabet, Line, RenderParams};

fn lines_to_svg_path(lines: &[Line], x_offset: f32, y_offset: f32) -> Data {
    let mut data = Data::new();

    for line in lines {
        data = data
            .move_to((line.x1 + x_offset, line.y1 + y_offset))
            .line_to((line.x2 + x_offset, line.y2 + y_offset));
    }

    data
}

fn draw_alphabet_row(
    alphabet: GlyphAlphabet,
    params: &RenderParams,
    y_offset: f32,
) -> (Vec<Path>, f32) {
    let frame = params.frame();
    let cell_width = params.width as f32;

    let paths = (0..alphabet.glyph_count())
        .map(|index| {
            let lines = alphabet.glyph_lines(index, &frame);
            let data = lines_to_svg_path(&lines, index as f32 * cell_width, y_offset);

            Path::new()
                .set("fill", "none")
                .set("stroke", params.line_color.as_str())
                .set("stroke-width", params.stroke_width())
                .set("d", data)
        })
        .collect();

    (paths, y_offset + params.height as f32)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = RenderParams::default();

    let mut y_offset = 0.0;
    let mut elements: Vec<Path> = Vec::new();

    for alphabet in GlyphAlphabet::ALL {
        let (paths, y) = draw_alphabet_row(alphabet, &params, y_offset);
        elements.extend(paths);
        y_offset = y;
    }

    let height = y_offset;
    let width = params.width as f32 * 20.0;

    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", params.bg_color.as_str());

    let mut document = Document::new().add(background);

    for el in elements {
        document = document.add(el);
    }

    let document = document
        .set("viewBox", (0, 0, width, height))
        .set("width", format!("{width}px"))
        .set("height", format!("{height}px"));

    svg::save("led_glyphs.svg", &document)?;
    println!("Wrote led_glyphs.svg");

    Ok(())
}
