use std::path::Path;

use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::{debug, trace};

use crate::{Error, Frame, GlyphAlphabet, Line, RenderParams, Result};

/// Draws glyphs of one alphabet onto an owned pixel buffer.
///
/// The buffer is created lazily and reused between draws until the configured
/// canvas size changes. Instances share no state, so independent renderers may
/// live on separate threads.
#[derive(Debug)]
pub struct GlyphRenderer {
    alphabet: GlyphAlphabet,
    params: RenderParams,
    pixmap: Option<Pixmap>,
}

impl GlyphRenderer {
    pub fn new(alphabet: GlyphAlphabet) -> Self {
        Self::with_params(alphabet, RenderParams::default())
    }

    pub fn with_params(alphabet: GlyphAlphabet, params: RenderParams) -> Self {
        Self {
            alphabet,
            params: params.sanitized(),
            pixmap: None,
        }
    }

    pub fn alphabet(&self) -> GlyphAlphabet {
        self.alphabet
    }

    /// Switch to another alphabet. The canvas is kept as is.
    pub fn set_alphabet(&mut self, alphabet: GlyphAlphabet) {
        self.alphabet = alphabet;
    }

    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    /// Set new display parameters. Unusable values silently fall back to
    /// their defaults, see [RenderParams::sanitized].
    pub fn configure(&mut self, params: RenderParams) {
        self.params = params.sanitized();
    }

    pub fn glyph_count(&self) -> usize {
        self.alphabet.glyph_count()
    }

    pub fn frame(&self) -> Frame {
        self.params.frame()
    }

    /// Absolute lines of the glyph at `index` for the current parameters.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the active alphabet.
    pub fn glyph_lines(&self, index: usize) -> Vec<Line> {
        self.alphabet.glyph_lines(index, &self.frame())
    }

    /// Make sure the canvas matches the configured size and clear it to the
    /// background color.
    pub fn reset_canvas(&mut self) -> Result<()> {
        let background = self.params.bg_color.resolve()?;
        self.canvas()?.fill(background);
        Ok(())
    }

    /// Stroke the glyph at `index` onto the canvas.
    ///
    /// All lines of the glyph are collected into one path and stroked once.
    /// A missing or wrongly sized canvas is reset first. A zero stroke width
    /// leaves the canvas untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the active alphabet. Use
    /// [GlyphRenderer::glyph_count] to validate untrusted indices.
    pub fn draw_glyph(&mut self, index: usize) -> Result<()> {
        let lines = self.glyph_lines(index);

        if !self.canvas_fits() {
            self.reset_canvas()?;
        }

        let mut paint = Paint::default();
        paint.set_color(self.params.line_color.resolve()?);
        paint.anti_alias = true;

        // tiny-skia strokes a zero width as a hairline.
        let width = self.params.stroke_width();
        if width <= 0.0 {
            trace!(alphabet = %self.alphabet, index, "zero stroke width, nothing to draw");
            return Ok(());
        }

        let stroke = Stroke {
            width,
            ..Stroke::default()
        };

        let mut builder = PathBuilder::new();
        for line in &lines {
            builder.move_to(line.x1, line.y1);
            builder.line_to(line.x2, line.y2);
        }

        trace!(alphabet = %self.alphabet, index, lines = lines.len(), "drawing glyph");

        let Some(path) = builder.finish() else {
            return Ok(());
        };

        self.canvas()?
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);

        Ok(())
    }

    /// Clear the canvas and draw a single glyph on it.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the active alphabet.
    pub fn render(&mut self, index: usize) -> Result<&Pixmap> {
        self.reset_canvas()?;
        self.draw_glyph(index)?;
        self.image().ok_or(Error::EmptyCanvas)
    }

    /// The rendered image, if a canvas exists.
    pub fn image(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    pub fn into_image(self) -> Option<Pixmap> {
        self.pixmap
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.image()
            .ok_or(Error::EmptyCanvas)?
            .encode_png()
            .map_err(|e| Error::Png(e.to_string()))
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let png = self.encode_png()?;
        std::fs::write(path, png)?;
        Ok(())
    }

    fn canvas_fits(&self) -> bool {
        self.pixmap.as_ref().is_some_and(|pixmap| {
            pixmap.width() == self.params.width && pixmap.height() == self.params.height
        })
    }

    fn canvas(&mut self) -> Result<&mut Pixmap> {
        let (width, height) = (self.params.width, self.params.height);

        let pixmap = match self.pixmap.take() {
            Some(pixmap) if pixmap.width() == width && pixmap.height() == height => pixmap,
            previous => {
                if let Some(previous) = previous {
                    debug!(
                        from_width = previous.width(),
                        from_height = previous.height(),
                        width,
                        height,
                        "resizing canvas"
                    );
                } else {
                    debug!(width, height, "allocating canvas");
                }

                Pixmap::new(width, height).ok_or(Error::CanvasAllocation { width, height })?
            }
        };

        Ok(self.pixmap.insert(pixmap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorName;

    fn lit(pixmap: &Pixmap, x: u32, y: u32) -> u8 {
        pixmap.pixel(x, y).unwrap().red()
    }

    #[test]
    fn every_glyph_renders_at_configured_size_in_two_colors() {
        for alphabet in GlyphAlphabet::ALL {
            let mut renderer = GlyphRenderer::new(alphabet);
            renderer.configure(RenderParams {
                width: 96,
                height: 64,
                ..Default::default()
            });

            for index in 0..renderer.glyph_count() {
                let image = renderer.render(index).unwrap();

                assert_eq!((image.width(), image.height()), (96, 64));
                // White over opaque black only ever blends to opaque grays.
                assert!(
                    image.pixels().iter().all(|p| p.alpha() == 255
                        && p.red() == p.green()
                        && p.green() == p.blue()),
                    "{alphabet} glyph {index}"
                );
                assert!(
                    image.pixels().iter().any(|p| p.red() > 0),
                    "{alphabet} glyph {index} drew nothing"
                );
            }
        }
    }

    #[test]
    fn first_digit_is_a_single_centered_vertical_bar() {
        let mut renderer = GlyphRenderer::new(GlyphAlphabet::Digits);
        let image = renderer.render(0).unwrap();

        // Bar runs from (60, 24) to (60, 96) with a 4.8px stroke.
        assert!(lit(image, 60, 60) > 200);
        assert!(lit(image, 60, 30) > 200);
        assert!(lit(image, 60, 90) > 200);
        assert_eq!(lit(image, 60, 20), 0);
        assert_eq!(lit(image, 60, 100), 0);
        assert_eq!(lit(image, 50, 60), 0);
        assert_eq!(lit(image, 70, 60), 0);

        for y in 0..image.height() {
            for x in 0..image.width() {
                if lit(image, x, y) > 0 {
                    assert!((57..=62).contains(&x), "stray pixel at ({x}, {y})");
                    assert!((23..=96).contains(&y), "stray pixel at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn redrawing_is_pixel_identical() {
        let mut renderer = GlyphRenderer::new(GlyphAlphabet::Faces);

        let first = renderer.render(8).unwrap().data().to_vec();
        let second = renderer.render(8).unwrap().data().to_vec();

        assert_eq!(first, second);
    }

    #[test]
    fn independent_renderers_agree() {
        let params = RenderParams {
            width: 150,
            height: 90,
            size: 0.8,
            ..Default::default()
        };
        let mut a = GlyphRenderer::with_params(GlyphAlphabet::Ideograms, params.clone());
        let mut b = GlyphRenderer::with_params(GlyphAlphabet::Ideograms, params);

        // Leave different history behind on one of them.
        a.render(17).unwrap();

        assert_eq!(a.render(2).unwrap().data(), b.render(2).unwrap().data());
    }

    #[test]
    fn resizing_reallocates_without_stale_pixels() {
        let mut renderer = GlyphRenderer::new(GlyphAlphabet::Digits);
        renderer.render(0).unwrap();

        renderer.configure(RenderParams {
            width: 200,
            height: 200,
            ..Default::default()
        });
        renderer.reset_canvas().unwrap();

        let image = renderer.image().unwrap();
        assert_eq!((image.width(), image.height()), (200, 200));
        assert!(image.pixels().iter().all(|p| p.red() == 0));

        renderer.draw_glyph(0).unwrap();
        let image = renderer.image().unwrap();
        assert_eq!(lit(image, 60, 60), 0);
        assert!(lit(image, 100, 100) > 200);
    }

    #[test]
    fn draw_without_reset_creates_the_canvas() {
        let mut renderer = GlyphRenderer::new(GlyphAlphabet::Digits);
        assert!(renderer.image().is_none());

        renderer.draw_glyph(5).unwrap();

        let image = renderer.image().unwrap();
        assert!(lit(image, 60, 60) > 200);
        assert_eq!(lit(image, 5, 5), 0);
    }

    #[test]
    fn colors_come_from_params() {
        let mut renderer = GlyphRenderer::new(GlyphAlphabet::Digits);
        renderer.configure(RenderParams {
            line_color: ColorName::from("red"),
            bg_color: ColorName::from("#0000ff"),
            ..Default::default()
        });

        let image = renderer.render(0).unwrap();
        let stroke = image.pixel(60, 60).unwrap();
        let background = image.pixel(5, 5).unwrap();

        assert!(stroke.red() > 200 && stroke.blue() < 50);
        assert_eq!((background.red(), background.blue()), (0, 255));
    }

    #[test]
    fn unknown_color_is_reported() {
        let mut renderer = GlyphRenderer::new(GlyphAlphabet::Digits);
        renderer.configure(RenderParams {
            bg_color: ColorName::from("nope"),
            ..Default::default()
        });

        assert!(matches!(
            renderer.reset_canvas(),
            Err(Error::UnknownColor(name)) if name == "nope"
        ));
    }

    #[test]
    fn png_export_requires_a_canvas() {
        let mut renderer = GlyphRenderer::new(GlyphAlphabet::Faces);
        assert!(matches!(renderer.encode_png(), Err(Error::EmptyCanvas)));

        renderer.render(0).unwrap();
        let png = renderer.encode_png().unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[test]
    fn zero_stroke_width_leaves_only_background() {
        let mut renderer = GlyphRenderer::new(GlyphAlphabet::Digits);
        renderer.configure(RenderParams {
            line_width: 0.0,
            ..Default::default()
        });

        for index in 0..renderer.glyph_count() {
            let image = renderer.render(index).unwrap();

            assert_eq!((image.width(), image.height()), (120, 120));
            assert!(
                image
                    .pixels()
                    .iter()
                    .all(|p| p.red() == 0 && p.alpha() == 255),
                "glyph {index}"
            );
        }
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_equal_to_table_length_panics() {
        let mut renderer = GlyphRenderer::new(GlyphAlphabet::Faces);
        let count = renderer.glyph_count();
        let _ = renderer.draw_glyph(count);
    }
}
