#![no_std]

//! `led-glyphs-core` provides core primitives for the `led-glyphs` crate.

use alloc::vec::Vec;
use core::fmt::Debug;

extern crate alloc;

/// One coordinate of a segment endpoint, relative to the canvas center.
///
/// The absolute coordinate is `center + unit * scale + px`, where `scale` is the
/// glyph half-extent along the same axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Offset {
    /// Multiple of the glyph half-extent
    pub unit: f32,
    /// Fixed nudge in pixels, independent of the canvas size
    pub px: f32,
}

/// An offset that scales with the glyph.
pub const fn sz(unit: f32) -> Offset {
    Offset { unit, px: 0.0 }
}

/// An offset that scales with the glyph and is then nudged by a fixed pixel amount.
pub const fn sz_px(unit: f32, px: f32) -> Offset {
    Offset { unit, px }
}

/// A straight line making up part of a segment, in center-relative form.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SegmentLine {
    pub x1: Offset,
    pub y1: Offset,
    pub x2: Offset,
    pub y2: Offset,
}

/// Shorthand for building [SegmentLine] tables.
pub const fn line(x1: Offset, y1: Offset, x2: Offset, y2: Offset) -> SegmentLine {
    SegmentLine { x1, y1, x2, y2 }
}

/// Shorthand for lines whose endpoints all scale with the glyph.
pub const fn scaled_line(x1: f32, y1: f32, x2: f32, y2: f32) -> SegmentLine {
    SegmentLine {
        x1: sz(x1),
        y1: sz(y1),
        x2: sz(x2),
        y2: sz(y2),
    }
}

/// A straight line in absolute canvas coordinates (top-left origin, y grows downward).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// The placement of a glyph on a canvas: its center and half-extents.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub center_x: f32,
    pub center_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Frame {
    /// Frame for a glyph centered on a `width` x `height` canvas, whose half-extents
    /// are `size` times the canvas half-extents.
    pub fn new(width: u32, height: u32, size: f32) -> Self {
        let center_x = width as f32 * 0.5;
        let center_y = height as f32 * 0.5;

        Self {
            center_x,
            center_y,
            scale_x: center_x * size,
            scale_y: center_y * size,
        }
    }

    /// Resolve a center-relative line to absolute canvas coordinates.
    pub fn resolve(&self, line: &SegmentLine) -> Line {
        Line {
            x1: self.x(line.x1),
            y1: self.y(line.y1),
            x2: self.x(line.x2),
            y2: self.y(line.y2),
        }
    }

    fn x(&self, offset: Offset) -> f32 {
        self.center_x + offset.unit * self.scale_x + offset.px
    }

    fn y(&self, offset: Offset) -> f32 {
        self.center_y + offset.unit * self.scale_y + offset.px
    }
}

/// A closed catalog of segments together with the table of glyphs built from them.
///
/// Implementors define their own segment enum and map each variant to its lines.
pub trait Alphabet {
    /// Segment identifiers of this alphabet.
    type Segment: Copy + Debug + 'static;

    /// Human readable name of the alphabet.
    const NAME: &'static str;

    /// The glyph table: each entry lists the segments which compose one glyph.
    fn glyphs() -> &'static [&'static [Self::Segment]];

    /// The lines which make up a single segment.
    fn lines(segment: Self::Segment) -> &'static [SegmentLine];

    /// Number of glyphs in this alphabet.
    fn glyph_count() -> usize {
        Self::glyphs().len()
    }

    /// Resolve every line of the glyph at `index` into absolute coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [Alphabet::glyph_count].
    fn glyph_lines(index: usize, frame: &Frame) -> Vec<Line> {
        let glyph = Self::glyphs()[index];

        glyph
            .iter()
            .flat_map(|segment| Self::lines(*segment))
            .map(|line| frame.resolve(line))
            .collect()
    }
}
