use std::fmt;

use serde::{Deserialize, Serialize};
use tiny_skia::Color;

use crate::{Error, Result};

/// Basic CSS color keywords, plus a few common extras.
static NAMED_COLORS: &[(&str, [u8; 4])] = &[
    ("black", [0, 0, 0, 255]),
    ("white", [255, 255, 255, 255]),
    ("red", [255, 0, 0, 255]),
    ("green", [0, 128, 0, 255]),
    ("blue", [0, 0, 255, 255]),
    ("yellow", [255, 255, 0, 255]),
    ("cyan", [0, 255, 255, 255]),
    ("aqua", [0, 255, 255, 255]),
    ("magenta", [255, 0, 255, 255]),
    ("fuchsia", [255, 0, 255, 255]),
    ("gray", [128, 128, 128, 255]),
    ("grey", [128, 128, 128, 255]),
    ("silver", [192, 192, 192, 255]),
    ("maroon", [128, 0, 0, 255]),
    ("olive", [128, 128, 0, 255]),
    ("lime", [0, 255, 0, 255]),
    ("teal", [0, 128, 128, 255]),
    ("navy", [0, 0, 128, 255]),
    ("purple", [128, 0, 128, 255]),
    ("orange", [255, 165, 0, 255]),
    ("transparent", [0, 0, 0, 0]),
];

/// A color identifier: a color keyword such as `"white"`, or a hex code in
/// `#rgb`, `#rrggbb` or `#rrggbbaa` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorName(String);

impl ColorName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve the identifier to a concrete color.
    pub fn resolve(&self) -> Result<Color> {
        let name = self.0.trim();

        let rgba = match name.strip_prefix('#') {
            Some(hex) => parse_hex(hex),
            None => NAMED_COLORS
                .iter()
                .find(|(known, _)| known.eq_ignore_ascii_case(name))
                .map(|(_, rgba)| *rgba),
        };

        rgba.map(|[r, g, b, a]| Color::from_rgba8(r, g, b, a))
            .ok_or_else(|| Error::UnknownColor(self.0.clone()))
    }
}

fn parse_hex(hex: &str) -> Option<[u8; 4]> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => {
            let mut rgba = [255; 4];
            for (channel, digit) in rgba.iter_mut().zip(hex.chars()) {
                let value = digit.to_digit(16)? as u8;
                *channel = value * 17;
            }
            Some(rgba)
        }
        6 => Some([byte(0)?, byte(2)?, byte(4)?, 255]),
        8 => Some([byte(0)?, byte(2)?, byte(4)?, byte(6)?]),
        _ => None,
    }
}

impl From<&str> for ColorName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ColorName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
