//! `led-glyphs` is a library for drawing old-school "LED" glyphs to a raster
//! image.
//!
//! Every glyph is a fixed set of straight line segments picked from a small
//! per-alphabet catalog. The lines are placed relative to the canvas center,
//! scaled by the configured size proportion and stroked with
//! [tiny-skia](https://docs.rs/tiny-skia).
//!
//! Supported alphabets:
//! - LED numerals, via [led_glyphs_digits]
//! - Faces showing five expressions, via [led_glyphs_faces]
//! - Ideogram-like marks with a given stroke count, via [led_glyphs_ideograms]
//!
//! Each alphabet holds twenty glyphs: five shapes in four orientations
//! (upward, leftward, downward, rightward).
//!
//! ```
//! use led_glyphs::{GlyphAlphabet, GlyphRenderer, RenderParams};
//!
//! let mut renderer = GlyphRenderer::new(GlyphAlphabet::Faces);
//! renderer.configure(RenderParams::default());
//! let image = renderer.render(3).unwrap();
//! assert_eq!((image.width(), image.height()), (120, 120));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

mod color;
mod error;
mod params;
mod renderer;

pub use color::ColorName;
pub use error::{Error, Result};
pub use led_glyphs_core::{Alphabet, Frame, Line};
pub use led_glyphs_digits::{DigitSegment, Digits};
pub use led_glyphs_faces::{FaceSegment, Faces};
pub use led_glyphs_ideograms::{IdeogramSegment, Ideograms};
pub use params::RenderParams;
pub use renderer::GlyphRenderer;

/// One of the supported glyph alphabets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphAlphabet {
    #[default]
    Digits,
    Faces,
    Ideograms,
}

impl GlyphAlphabet {
    pub const ALL: [GlyphAlphabet; 3] = [Self::Digits, Self::Faces, Self::Ideograms];

    pub fn name(self) -> &'static str {
        match self {
            Self::Digits => Digits::NAME,
            Self::Faces => Faces::NAME,
            Self::Ideograms => Ideograms::NAME,
        }
    }

    /// Number of glyphs in the alphabet. Valid indices are `0..glyph_count()`.
    pub fn glyph_count(self) -> usize {
        match self {
            Self::Digits => Digits::glyph_count(),
            Self::Faces => Faces::glyph_count(),
            Self::Ideograms => Ideograms::glyph_count(),
        }
    }

    /// Resolve the glyph at `index` into absolute lines within `frame`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [GlyphAlphabet::glyph_count].
    pub fn glyph_lines(self, index: usize, frame: &Frame) -> Vec<Line> {
        match self {
            Self::Digits => Digits::glyph_lines(index, frame),
            Self::Faces => Faces::glyph_lines(index, frame),
            Self::Ideograms => Ideograms::glyph_lines(index, frame),
        }
    }
}

impl fmt::Display for GlyphAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GlyphAlphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|alphabet| alphabet.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownAlphabet(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_alphabet_has_twenty_glyphs() {
        for alphabet in GlyphAlphabet::ALL {
            assert_eq!(alphabet.glyph_count(), 20, "{alphabet}");
        }
    }

    #[test]
    fn alphabet_names_round_trip_through_from_str() {
        for alphabet in GlyphAlphabet::ALL {
            assert_eq!(alphabet.name().parse::<GlyphAlphabet>().unwrap(), alphabet);
        }
        assert_eq!("Faces".parse::<GlyphAlphabet>().unwrap(), GlyphAlphabet::Faces);
    }

    #[test]
    fn unknown_alphabet_is_rejected() {
        let err = "hangul".parse::<GlyphAlphabet>().unwrap_err();
        assert_eq!(err.to_string(), "unknown alphabet: hangul");
    }

    #[test]
    fn alphabet_deserializes_from_lowercase_name() {
        let alphabet: GlyphAlphabet = serde_json::from_str("\"ideograms\"").unwrap();
        assert_eq!(alphabet, GlyphAlphabet::Ideograms);
    }
}
