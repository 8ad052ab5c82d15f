#![no_std]

//! `led-glyphs-ideograms` is a backend for the `led-glyphs` crate that
//! describes LED marks resembling simple ideograms.
//!
//! The marks are told apart by their brush stroke count (two, three, five,
//! six and eight strokes) and each comes in four orientations.

use led_glyphs_core::{Alphabet, SegmentLine, scaled_line as l};

/// Segments of the ideogram alphabet, named after the stroke count of the mark
/// and the direction it faces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IdeogramSegment {
    TwoUpward,
    ThreeUpward,
    FiveUpward,
    SixUpward,
    EightUpward,
    TwoLeftward,
    ThreeLeftward,
    FiveLeftward,
    SixLeftward,
    EightLeftward,
    TwoDownward,
    ThreeDownward,
    FiveDownward,
    SixDownward,
    EightDownward,
    TwoRightward,
    ThreeRightward,
    FiveRightward,
    SixRightward,
    EightRightward,
}

use IdeogramSegment::*;

static IDEOGRAM_GLYPHS: [&[IdeogramSegment]; 20] = [
    &[TwoUpward],
    &[ThreeUpward],
    &[FiveUpward],
    &[SixUpward],
    &[EightUpward],
    &[TwoLeftward],
    &[ThreeLeftward],
    &[FiveLeftward],
    &[SixLeftward],
    &[EightLeftward],
    &[TwoDownward],
    &[ThreeDownward],
    &[FiveDownward],
    &[SixDownward],
    &[EightDownward],
    &[TwoRightward],
    &[ThreeRightward],
    &[FiveRightward],
    &[SixRightward],
    &[EightRightward],
];

static TWO_UPWARD: &[SegmentLine] = &[l(-0.25, -0.5, 0.25, -0.5), l(-0.5, 0.0, 0.5, 0.0)];

static THREE_UPWARD: &[SegmentLine] = &[
    l(-0.5, -0.5, 0.5, -0.5),
    l(-0.25, 0.0, 0.25, 0.0),
    l(-0.75, 0.5, 0.75, 0.5),
];

static FIVE_UPWARD: &[SegmentLine] = &[
    l(-0.75, -0.6, 0.75, -0.6),
    l(-0.5, 0.0, 0.5, 0.0),
    l(-0.75, 0.6, 0.75, 0.6),
    l(0.0, -0.6, -0.2, 0.6),
    l(0.5, 0.0, 0.5, 0.6),
];

static SIX_UPWARD: &[SegmentLine] = &[
    l(-0.1, -0.5, 0.1, -0.3),
    l(-0.5, 0.0, 0.5, 0.0),
    l(-0.7, 1.0, -0.2, 0.3),
    l(0.2, 0.3, 0.7, 1.0),
];

static EIGHT_UPWARD: &[SegmentLine] = &[l(-0.7, 0.5, -0.2, -0.5), l(0.2, -0.5, 0.7, 0.5)];

static TWO_LEFTWARD: &[SegmentLine] = &[l(-0.5, -0.25, -0.5, 0.25), l(0.0, -0.5, 0.0, 0.5)];

static THREE_LEFTWARD: &[SegmentLine] = &[
    l(-0.5, -0.5, -0.5, 0.5),
    l(0.0, -0.25, 0.0, 0.25),
    l(0.5, -0.75, 0.5, 0.75),
];

static FIVE_LEFTWARD: &[SegmentLine] = &[
    l(-0.6, -0.75, -0.6, 0.75),
    l(0.0, -0.5, 0.0, 0.5),
    l(0.6, -0.75, 0.6, 0.75),
    l(-0.6, 0.0, 0.6, -0.2),
    l(0.0, -0.5, 0.6, -0.5),
];

static SIX_LEFTWARD: &[SegmentLine] = &[
    l(-0.5, -0.1, -0.3, 0.1),
    l(0.0, -0.5, 0.0, 0.5),
    l(1.0, -0.7, 0.3, -0.2),
    l(0.3, 0.2, 1.0, 0.7),
];

static EIGHT_LEFTWARD: &[SegmentLine] = &[l(0.5, -0.7, -0.5, -0.2), l(-0.5, 0.2, 0.5, 0.7)];

static TWO_DOWNWARD: &[SegmentLine] = &[l(-0.25, 0.5, 0.25, 0.5), l(-0.5, 0.0, 0.5, 0.0)];

static THREE_DOWNWARD: &[SegmentLine] = &[
    l(-0.5, 0.5, 0.5, 0.5),
    l(-0.25, 0.0, 0.25, 0.0),
    l(-0.75, -0.5, 0.75, -0.5),
];

static FIVE_DOWNWARD: &[SegmentLine] = &[
    l(-0.75, 0.6, 0.75, 0.6),
    l(-0.5, 0.0, 0.5, 0.0),
    l(-0.75, -0.6, 0.75, -0.6),
    l(0.0, 0.6, 0.2, -0.6),
    l(-0.5, 0.0, -0.5, -0.6),
];

static SIX_DOWNWARD: &[SegmentLine] = &[
    l(-0.1, 0.5, 0.1, 0.3),
    l(-0.5, 0.0, 0.5, 0.0),
    l(-0.7, -1.0, -0.2, -0.3),
    l(0.2, -0.3, 0.7, -1.0),
];

static EIGHT_DOWNWARD: &[SegmentLine] = &[l(-0.7, -0.5, -0.2, 0.5), l(0.2, 0.5, 0.7, -0.5)];

static TWO_RIGHTWARD: &[SegmentLine] = &[l(0.5, -0.25, 0.5, 0.25), l(0.0, -0.5, 0.0, 0.5)];

static THREE_RIGHTWARD: &[SegmentLine] = &[
    l(0.5, -0.5, 0.5, 0.5),
    l(0.0, -0.25, 0.0, 0.25),
    l(-0.5, -0.75, -0.5, 0.75),
];

static FIVE_RIGHTWARD: &[SegmentLine] = &[
    l(0.6, -0.75, 0.6, 0.75),
    l(0.0, -0.5, 0.0, 0.5),
    l(-0.6, -0.75, -0.6, 0.75),
    l(0.6, 0.0, -0.6, -0.2),
    l(0.0, 0.5, -0.6, 0.5),
];

static SIX_RIGHTWARD: &[SegmentLine] = &[
    l(0.5, -0.1, 0.3, 0.1),
    l(0.0, -0.5, 0.0, 0.5),
    l(-1.0, -0.7, -0.3, -0.2),
    l(-0.3, 0.2, -1.0, 0.7),
];

static EIGHT_RIGHTWARD: &[SegmentLine] = &[l(-0.5, -0.7, 0.5, -0.2), l(0.5, 0.2, -0.5, 0.7)];

impl IdeogramSegment {
    /// Lines of this segment, as multiples of the glyph half-extents.
    pub fn lines(self) -> &'static [SegmentLine] {
        match self {
            TwoUpward => TWO_UPWARD,
            ThreeUpward => THREE_UPWARD,
            FiveUpward => FIVE_UPWARD,
            SixUpward => SIX_UPWARD,
            EightUpward => EIGHT_UPWARD,
            TwoLeftward => TWO_LEFTWARD,
            ThreeLeftward => THREE_LEFTWARD,
            FiveLeftward => FIVE_LEFTWARD,
            SixLeftward => SIX_LEFTWARD,
            EightLeftward => EIGHT_LEFTWARD,
            TwoDownward => TWO_DOWNWARD,
            ThreeDownward => THREE_DOWNWARD,
            FiveDownward => FIVE_DOWNWARD,
            SixDownward => SIX_DOWNWARD,
            EightDownward => EIGHT_DOWNWARD,
            TwoRightward => TWO_RIGHTWARD,
            ThreeRightward => THREE_RIGHTWARD,
            FiveRightward => FIVE_RIGHTWARD,
            SixRightward => SIX_RIGHTWARD,
            EightRightward => EIGHT_RIGHTWARD,
        }
    }
}

/// An [Alphabet] of LED ideograms.
pub struct Ideograms;

impl Alphabet for Ideograms {
    type Segment = IdeogramSegment;

    const NAME: &'static str = "ideograms";

    fn glyphs() -> &'static [&'static [IdeogramSegment]] {
        &IDEOGRAM_GLYPHS
    }

    fn lines(segment: IdeogramSegment) -> &'static [SegmentLine] {
        segment.lines()
    }
}
