#![no_std]

//! `led-glyphs-digits` is a backend for the `led-glyphs` crate that
//! describes old-school LED numerals.
//!
//! Each numeral is drawn from horizontal and vertical bars laid out on a
//! 2x2 unit grid around the glyph center, and comes in four orientations.

use led_glyphs_core::{Alphabet, SegmentLine, scaled_line as l};

/// Segments of the digit alphabet, named after the numeral they draw and the
/// direction the numeral faces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DigitSegment {
    OneUpward,
    ThreeUpward,
    FourUpward,
    SixUpward,
    SevenUpward,
    OneLeftward,
    ThreeLeftward,
    FourLeftward,
    SixLeftward,
    SevenLeftward,
    OneDownward,
    ThreeDownward,
    FourDownward,
    SixDownward,
    SevenDownward,
    OneRightward,
    ThreeRightward,
    FourRightward,
    SixRightward,
    SevenRightward,
}

use DigitSegment::*;

static DIGIT_GLYPHS: [&[DigitSegment]; 20] = [
    &[OneUpward],
    &[ThreeUpward],
    &[FourUpward],
    &[SixUpward],
    &[SevenUpward],
    &[OneLeftward],
    &[ThreeLeftward],
    &[FourLeftward],
    &[SixLeftward],
    &[SevenLeftward],
    &[OneDownward],
    &[ThreeDownward],
    &[FourDownward],
    &[SixDownward],
    &[SevenDownward],
    &[OneRightward],
    &[ThreeRightward],
    &[FourRightward],
    &[SixRightward],
    &[SevenRightward],
];

static ONE_UPWARD: &[SegmentLine] = &[l(0.0, -1.0, 0.0, 1.0)];

static THREE_UPWARD: &[SegmentLine] = &[
    l(0.0, -1.0, 1.0, -1.0),
    l(1.0, -1.0, 1.0, 1.0),
    l(0.0, 0.0, 1.0, 0.0),
    l(0.0, 1.0, 1.0, 1.0),
];

static FOUR_UPWARD: &[SegmentLine] = &[
    l(0.0, 0.0, 1.0, 0.0),
    l(1.0, -1.0, 1.0, 1.0),
    l(0.0, -1.0, 0.0, 0.0),
];

static SIX_UPWARD: &[SegmentLine] = &[
    l(0.0, -1.0, 1.0, -1.0),
    l(0.0, 0.0, 1.0, 0.0),
    l(0.0, 1.0, 1.0, 1.0),
    l(0.0, -1.0, 0.0, 1.0),
    l(1.0, 0.0, 1.0, 1.0),
];

static SEVEN_UPWARD: &[SegmentLine] = &[l(0.0, -1.0, 1.0, -1.0), l(1.0, -1.0, 1.0, 1.0)];

static ONE_LEFTWARD: &[SegmentLine] = &[l(-1.0, 0.0, 1.0, 0.0)];

static THREE_LEFTWARD: &[SegmentLine] = &[
    l(-1.0, 0.0, -1.0, -1.0),
    l(-1.0, -1.0, 1.0, -1.0),
    l(0.0, 0.0, 0.0, -1.0),
    l(1.0, 0.0, 1.0, -1.0),
];

static FOUR_LEFTWARD: &[SegmentLine] = &[
    l(0.0, -1.0, 0.0, 0.0),
    l(-1.0, -1.0, 1.0, -1.0),
    l(-1.0, 0.0, 0.0, 0.0),
];

static SIX_LEFTWARD: &[SegmentLine] = &[
    l(-1.0, 0.0, -1.0, -1.0),
    l(0.0, 0.0, 0.0, -1.0),
    l(1.0, 0.0, 1.0, -1.0),
    l(0.0, -1.0, 1.0, -1.0),
    l(-1.0, 0.0, 1.0, 0.0),
];

static SEVEN_LEFTWARD: &[SegmentLine] = &[l(-1.0, 0.0, -1.0, -1.0), l(-1.0, -1.0, 1.0, -1.0)];

static ONE_DOWNWARD: &[SegmentLine] = &[l(0.0, -1.0, 0.0, 1.0)];

static THREE_DOWNWARD: &[SegmentLine] = &[
    l(0.0, -1.0, 1.0, -1.0),
    l(0.0, -1.0, 0.0, 1.0),
    l(0.0, 0.0, 1.0, 0.0),
    l(0.0, 1.0, 1.0, 1.0),
];

static FOUR_DOWNWARD: &[SegmentLine] = &[
    l(0.0, 0.0, 1.0, 0.0),
    l(0.0, -1.0, 0.0, 1.0),
    l(1.0, 1.0, 1.0, 0.0),
];

static SIX_DOWNWARD: &[SegmentLine] = &[
    l(0.0, -1.0, 1.0, -1.0),
    l(0.0, 0.0, 1.0, 0.0),
    l(0.0, 1.0, 1.0, 1.0),
    l(1.0, -1.0, 1.0, 1.0),
    l(0.0, 0.0, 0.0, -1.0),
];

static SEVEN_DOWNWARD: &[SegmentLine] = &[l(-1.0, 1.0, 0.0, 1.0), l(-1.0, -1.0, -1.0, 1.0)];

static ONE_RIGHTWARD: &[SegmentLine] = &[l(-1.0, 0.0, 1.0, 0.0)];

static THREE_RIGHTWARD: &[SegmentLine] = &[
    l(-1.0, 0.0, -1.0, -1.0),
    l(-1.0, 0.0, 1.0, 0.0),
    l(0.0, 0.0, 0.0, -1.0),
    l(1.0, 0.0, 1.0, -1.0),
];

static FOUR_RIGHTWARD: &[SegmentLine] = &[
    l(0.0, -1.0, 0.0, 0.0),
    l(-1.0, 0.0, 1.0, 0.0),
    l(0.0, -1.0, 1.0, -1.0),
];

static SIX_RIGHTWARD: &[SegmentLine] = &[
    l(-1.0, 0.0, -1.0, -1.0),
    l(0.0, 0.0, 0.0, -1.0),
    l(1.0, 0.0, 1.0, -1.0),
    l(-1.0, 0.0, 0.0, 0.0),
    l(-1.0, -1.0, 1.0, -1.0),
];

static SEVEN_RIGHTWARD: &[SegmentLine] = &[l(1.0, 0.0, 1.0, -1.0), l(-1.0, 0.0, 1.0, 0.0)];

impl DigitSegment {
    /// Lines of this segment, as multiples of the glyph half-extents.
    pub fn lines(self) -> &'static [SegmentLine] {
        match self {
            OneUpward => ONE_UPWARD,
            ThreeUpward => THREE_UPWARD,
            FourUpward => FOUR_UPWARD,
            SixUpward => SIX_UPWARD,
            SevenUpward => SEVEN_UPWARD,
            OneLeftward => ONE_LEFTWARD,
            ThreeLeftward => THREE_LEFTWARD,
            FourLeftward => FOUR_LEFTWARD,
            SixLeftward => SIX_LEFTWARD,
            SevenLeftward => SEVEN_LEFTWARD,
            OneDownward => ONE_DOWNWARD,
            ThreeDownward => THREE_DOWNWARD,
            FourDownward => FOUR_DOWNWARD,
            SixDownward => SIX_DOWNWARD,
            SevenDownward => SEVEN_DOWNWARD,
            OneRightward => ONE_RIGHTWARD,
            ThreeRightward => THREE_RIGHTWARD,
            FourRightward => FOUR_RIGHTWARD,
            SixRightward => SIX_RIGHTWARD,
            SevenRightward => SEVEN_RIGHTWARD,
        }
    }
}

/// An [Alphabet] of LED numerals.
pub struct Digits;

impl Alphabet for Digits {
    type Segment = DigitSegment;

    const NAME: &'static str = "digits";

    fn glyphs() -> &'static [&'static [DigitSegment]] {
        &DIGIT_GLYPHS
    }

    fn lines(segment: DigitSegment) -> &'static [SegmentLine] {
        segment.lines()
    }
}
