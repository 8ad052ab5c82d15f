use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ColorName, Frame, Result};

/// Display parameters for a [GlyphRenderer](crate::GlyphRenderer).
///
/// Every field is optional when deserializing; missing fields take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Stroke width as a percentage of the smaller canvas dimension
    pub line_width: f32,
    /// Glyph half-extent as a proportion of the canvas half-extent
    pub size: f32,
    /// Stroke color
    pub line_color: ColorName,
    /// Background color
    pub bg_color: ColorName,
}

impl RenderParams {
    pub const DEFAULT_WIDTH: u32 = 120;
    pub const DEFAULT_HEIGHT: u32 = 120;
    pub const DEFAULT_LINE_WIDTH: f32 = 4.0;
    pub const DEFAULT_SIZE: f32 = 0.6;

    /// Parse parameters from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read parameters from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Replace unusable values with their defaults.
    ///
    /// A zero width or height means the canvas size was never set, so both
    /// dimensions fall back together. Negative or non-finite stroke widths and
    /// sizes fall back individually.
    pub fn sanitized(mut self) -> Self {
        if self.width == 0 || self.height == 0 {
            debug!(
                width = self.width,
                height = self.height,
                "canvas size unset, using default"
            );
            self.width = Self::DEFAULT_WIDTH;
            self.height = Self::DEFAULT_HEIGHT;
        }

        if !(self.line_width.is_finite() && self.line_width >= 0.0) {
            debug!(line_width = self.line_width, "invalid line width, using default");
            self.line_width = Self::DEFAULT_LINE_WIDTH;
        }

        if !(self.size.is_finite() && self.size >= 0.0) {
            debug!(size = self.size, "invalid size, using default");
            self.size = Self::DEFAULT_SIZE;
        }

        self
    }

    /// Placement of a glyph on a canvas of the configured size.
    pub fn frame(&self) -> Frame {
        Frame::new(self.width, self.height, self.size)
    }

    /// Stroke width in pixels.
    pub fn stroke_width(&self) -> f32 {
        self.line_width / 100.0 * self.width.min(self.height) as f32
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            line_width: Self::DEFAULT_LINE_WIDTH,
            size: Self::DEFAULT_SIZE,
            line_color: ColorName::from("white"),
            bg_color: ColorName::from("black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_led_look() {
        let params = RenderParams::default();

        assert_eq!((params.width, params.height), (120, 120));
        assert_eq!(params.line_width, 4.0);
        assert_eq!(params.size, 0.6);
        assert_eq!(params.line_color.as_str(), "white");
        assert_eq!(params.bg_color.as_str(), "black");
    }

    #[test]
    fn zero_dimension_falls_back_to_default_size() {
        let params = RenderParams {
            width: 300,
            height: 0,
            line_color: ColorName::from("red"),
            ..Default::default()
        }
        .sanitized();

        assert_eq!((params.width, params.height), (120, 120));
        assert_eq!(params.line_color.as_str(), "red");
    }

    #[test]
    fn invalid_scalars_fall_back_individually() {
        let params = RenderParams {
            line_width: -1.0,
            size: f32::NAN,
            width: 64,
            height: 32,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(params.line_width, RenderParams::DEFAULT_LINE_WIDTH);
        assert_eq!(params.size, RenderParams::DEFAULT_SIZE);
        assert_eq!((params.width, params.height), (64, 32));
    }

    #[test]
    fn stroke_width_scales_with_smaller_side() {
        let params = RenderParams {
            width: 200,
            height: 100,
            line_width: 10.0,
            ..Default::default()
        };

        assert_eq!(params.stroke_width(), 10.0);
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let params =
            RenderParams::from_json(r##"{ "width": 64, "line_color": "#00ff00" }"##).unwrap();

        assert_eq!(params.width, 64);
        assert_eq!(params.height, 120);
        assert_eq!(params.size, 0.6);
        assert_eq!(params.line_color.as_str(), "#00ff00");
        assert_eq!(params.bg_color.as_str(), "black");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = RenderParams::from_json("{ \"width\": -5 }").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
