#![no_std]

//! `led-glyphs-faces` is a backend for the `led-glyphs` crate that
//! describes simple LED faces.
//!
//! Five expressions (happy, unhappy, surprise, angry, sad) are drawn in four
//! orientations. Eyes and brows sit a fixed number of pixels inside the glyph
//! corners, so unlike the other alphabets some endpoints do not scale with the
//! canvas.

use led_glyphs_core::{Alphabet, SegmentLine, line, scaled_line, sz, sz_px};

/// Segments of the face alphabet, named after the expression and the direction
/// the face looks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FaceSegment {
    HappyUpward,
    UnhappyUpward,
    SurpriseUpward,
    AngryUpward,
    SadUpward,
    HappyLeftward,
    UnhappyLeftward,
    SurpriseLeftward,
    AngryLeftward,
    SadLeftward,
    HappyDownward,
    UnhappyDownward,
    SurpriseDownward,
    AngryDownward,
    SadDownward,
    HappyRightward,
    UnhappyRightward,
    SurpriseRightward,
    AngryRightward,
    SadRightward,
}

use FaceSegment::*;

static FACE_GLYPHS: [&[FaceSegment]; 20] = [
    &[HappyUpward],
    &[UnhappyUpward],
    &[SurpriseUpward],
    &[AngryUpward],
    &[SadUpward],
    &[HappyLeftward],
    &[UnhappyLeftward],
    &[SurpriseLeftward],
    &[AngryLeftward],
    &[SadLeftward],
    &[HappyDownward],
    &[UnhappyDownward],
    &[SurpriseDownward],
    &[AngryDownward],
    &[SadDownward],
    &[HappyRightward],
    &[UnhappyRightward],
    &[SurpriseRightward],
    &[AngryRightward],
    &[SadRightward],
];

// Eyes shared by expressions facing the same way. Each is a short diagonal dash.
const EYE_TOP_LEFT: SegmentLine = line(
    sz_px(-1.0, 8.0),
    sz_px(-1.0, 8.0),
    sz_px(-1.0, 10.0),
    sz_px(-1.0, 10.0),
);
const EYE_TOP_RIGHT: SegmentLine = line(
    sz_px(1.0, -10.0),
    sz_px(-1.0, 8.0),
    sz_px(1.0, -8.0),
    sz_px(-1.0, 10.0),
);
const EYE_BOTTOM_LEFT: SegmentLine = line(
    sz_px(-1.0, 8.0),
    sz_px(1.0, -8.0),
    sz_px(-1.0, 10.0),
    sz_px(1.0, -10.0),
);
const EYE_BOTTOM_RIGHT: SegmentLine = line(
    sz_px(1.0, -10.0),
    sz_px(1.0, -8.0),
    sz_px(1.0, -8.0),
    sz_px(1.0, -10.0),
);
const EYE_LEFT_LOWER: SegmentLine = line(
    sz_px(-1.0, 8.0),
    sz_px(1.0, -10.0),
    sz_px(-1.0, 10.0),
    sz_px(1.0, -8.0),
);
const EYE_RIGHT_UPPER: SegmentLine = line(
    sz_px(1.0, -8.0),
    sz_px(-1.0, 8.0),
    sz_px(1.0, -10.0),
    sz_px(-1.0, 10.0),
);
const EYE_RIGHT_LOWER: SegmentLine = line(
    sz_px(1.0, -8.0),
    sz_px(1.0, -10.0),
    sz_px(1.0, -10.0),
    sz_px(1.0, -8.0),
);

static HAPPY_UPWARD: &[SegmentLine] = &[
    EYE_TOP_LEFT,
    EYE_TOP_RIGHT,
    scaled_line(-0.5, 0.5, 0.0, 1.0),
    scaled_line(0.0, 1.0, 0.5, 0.5),
];

static UNHAPPY_UPWARD: &[SegmentLine] = &[
    EYE_TOP_LEFT,
    EYE_TOP_RIGHT,
    scaled_line(-0.5, 1.0, 0.0, 0.5),
    scaled_line(0.0, 0.5, 0.5, 1.0),
];

static SURPRISE_UPWARD: &[SegmentLine] = &[
    EYE_TOP_LEFT,
    EYE_TOP_RIGHT,
    scaled_line(-0.25, 0.5, 0.25, 0.5),
    scaled_line(-0.25, 1.0, 0.25, 1.0),
    scaled_line(0.25, 0.5, 0.25, 1.0),
    scaled_line(-0.25, 0.5, -0.25, 1.0),
];

static ANGRY_UPWARD: &[SegmentLine] = &[
    EYE_TOP_LEFT,
    EYE_TOP_RIGHT,
    scaled_line(-0.5, 0.5, 0.5, 0.5),
    line(sz_px(1.0, -20.0), sz(-1.0), sz(1.0), sz_px(-1.0, -20.0)),
    line(sz(-1.0), sz_px(-1.0, -20.0), sz_px(-1.0, 20.0), sz(-1.0)),
];

static SAD_UPWARD: &[SegmentLine] = &[
    line(sz(-1.0), sz_px(-1.0, 4.0), sz_px(-1.0, 20.0), sz_px(-1.0, 4.0)),
    line(sz_px(1.0, -20.0), sz_px(-1.0, 4.0), sz(1.0), sz_px(-1.0, 4.0)),
    line(
        sz_px(-1.0, 10.0),
        sz_px(-1.0, 4.0),
        sz_px(-1.0, 10.0),
        sz_px(-1.0, 24.0),
    ),
    line(
        sz_px(1.0, -10.0),
        sz_px(-1.0, 4.0),
        sz_px(1.0, -10.0),
        sz_px(-1.0, 24.0),
    ),
    scaled_line(-0.5, 1.0, 0.0, 0.5),
    scaled_line(0.0, 0.5, 0.5, 1.0),
];

static HAPPY_LEFTWARD: &[SegmentLine] = &[
    EYE_TOP_LEFT,
    EYE_LEFT_LOWER,
    scaled_line(0.5, -0.5, 1.0, 0.0),
    scaled_line(1.0, 0.0, 0.5, 0.5),
];

static UNHAPPY_LEFTWARD: &[SegmentLine] = &[
    EYE_TOP_LEFT,
    EYE_LEFT_LOWER,
    scaled_line(1.0, -0.5, 0.5, 0.0),
    scaled_line(0.5, 0.0, 1.0, 0.5),
];

static SURPRISE_LEFTWARD: &[SegmentLine] = &[
    EYE_TOP_LEFT,
    EYE_LEFT_LOWER,
    scaled_line(0.5, -0.25, 0.5, 0.25),
    scaled_line(1.0, -0.25, 1.0, 0.25),
    scaled_line(0.5, 0.25, 1.0, 0.25),
    scaled_line(0.5, -0.25, 1.0, -0.25),
];

static ANGRY_LEFTWARD: &[SegmentLine] = &[
    EYE_TOP_LEFT,
    EYE_LEFT_LOWER,
    scaled_line(0.5, -0.5, 0.5, 0.5),
    line(sz(-1.0), sz_px(1.0, -20.0), sz_px(-1.0, -20.0), sz(1.0)),
    line(sz_px(-1.0, -20.0), sz(-1.0), sz(-1.0), sz_px(-1.0, 20.0)),
];

static SAD_LEFTWARD: &[SegmentLine] = &[
    line(sz_px(-1.0, 4.0), sz(-1.0), sz_px(-1.0, 4.0), sz_px(-1.0, 20.0)),
    line(sz_px(-1.0, 4.0), sz_px(1.0, -20.0), sz_px(-1.0, 4.0), sz(1.0)),
    line(
        sz_px(-1.0, 4.0),
        sz_px(-1.0, 10.0),
        sz_px(-1.0, 24.0),
        sz_px(-1.0, 10.0),
    ),
    line(
        sz_px(-1.0, 4.0),
        sz_px(1.0, -10.0),
        sz_px(-1.0, 24.0),
        sz_px(1.0, -10.0),
    ),
    scaled_line(1.0, -0.5, 0.5, 0.0),
    scaled_line(0.5, 0.0, 1.0, 0.5),
];

static HAPPY_DOWNWARD: &[SegmentLine] = &[
    EYE_BOTTOM_LEFT,
    EYE_BOTTOM_RIGHT,
    scaled_line(-0.5, -0.5, 0.0, -1.0),
    scaled_line(0.0, -1.0, 0.5, -0.5),
];

static UNHAPPY_DOWNWARD: &[SegmentLine] = &[
    EYE_BOTTOM_LEFT,
    EYE_BOTTOM_RIGHT,
    scaled_line(-0.5, -1.0, 0.0, -0.5),
    scaled_line(0.0, -0.5, 0.5, -1.0),
];

static SURPRISE_DOWNWARD: &[SegmentLine] = &[
    EYE_BOTTOM_LEFT,
    EYE_BOTTOM_RIGHT,
    scaled_line(-0.25, -0.5, 0.25, -0.5),
    scaled_line(-0.25, -1.0, 0.25, -1.0),
    scaled_line(0.25, -0.5, 0.25, -1.0),
    scaled_line(-0.25, -0.5, -0.25, -1.0),
];

static ANGRY_DOWNWARD: &[SegmentLine] = &[
    EYE_BOTTOM_LEFT,
    EYE_BOTTOM_RIGHT,
    scaled_line(-0.5, -0.5, 0.5, -0.5),
    line(sz_px(1.0, -20.0), sz(1.0), sz(1.0), sz_px(1.0, 20.0)),
    line(sz(-1.0), sz_px(1.0, 20.0), sz_px(-1.0, 20.0), sz(1.0)),
];

static SAD_DOWNWARD: &[SegmentLine] = &[
    line(sz(-1.0), sz_px(1.0, -4.0), sz_px(-1.0, 20.0), sz_px(1.0, -4.0)),
    line(sz_px(1.0, -20.0), sz_px(1.0, -4.0), sz(1.0), sz_px(1.0, -4.0)),
    line(
        sz_px(-1.0, 10.0),
        sz_px(1.0, -4.0),
        sz_px(-1.0, 10.0),
        sz_px(1.0, -24.0),
    ),
    line(
        sz_px(1.0, -10.0),
        sz_px(1.0, -4.0),
        sz_px(1.0, -10.0),
        sz_px(1.0, -24.0),
    ),
    scaled_line(-0.5, -1.0, 0.0, -0.5),
    scaled_line(0.0, -0.5, 0.5, -1.0),
];

static HAPPY_RIGHTWARD: &[SegmentLine] = &[
    EYE_RIGHT_UPPER,
    EYE_RIGHT_LOWER,
    scaled_line(-0.5, -0.5, -1.0, 0.0),
    scaled_line(-1.0, 0.0, -0.5, 0.5),
];

static UNHAPPY_RIGHTWARD: &[SegmentLine] = &[
    EYE_RIGHT_UPPER,
    EYE_RIGHT_LOWER,
    scaled_line(-1.0, -0.5, -0.5, 0.0),
    scaled_line(-0.5, 0.0, -1.0, 0.5),
];

static SURPRISE_RIGHTWARD: &[SegmentLine] = &[
    EYE_RIGHT_UPPER,
    EYE_RIGHT_LOWER,
    scaled_line(-0.5, -0.25, -0.5, 0.25),
    scaled_line(-1.0, -0.25, -1.0, 0.25),
    scaled_line(-0.5, 0.25, -1.0, 0.25),
    scaled_line(-0.5, -0.25, -1.0, -0.25),
];

static ANGRY_RIGHTWARD: &[SegmentLine] = &[
    EYE_RIGHT_UPPER,
    EYE_RIGHT_LOWER,
    scaled_line(-0.5, -0.5, -0.5, 0.5),
    line(sz(1.0), sz_px(1.0, -20.0), sz_px(1.0, 20.0), sz(1.0)),
    line(sz_px(1.0, 20.0), sz(-1.0), sz(1.0), sz_px(-1.0, 20.0)),
];

static SAD_RIGHTWARD: &[SegmentLine] = &[
    line(sz_px(1.0, -4.0), sz(-1.0), sz_px(1.0, -4.0), sz_px(-1.0, 20.0)),
    line(sz_px(1.0, -4.0), sz_px(1.0, -20.0), sz_px(1.0, -4.0), sz(1.0)),
    line(
        sz_px(1.0, -4.0),
        sz_px(-1.0, 10.0),
        sz_px(1.0, -24.0),
        sz_px(-1.0, 10.0),
    ),
    line(
        sz_px(1.0, -4.0),
        sz_px(1.0, -10.0),
        sz_px(1.0, -24.0),
        sz_px(1.0, -10.0),
    ),
    scaled_line(-1.0, -0.5, -0.5, 0.0),
    scaled_line(-0.5, 0.0, -1.0, 0.5),
];

impl FaceSegment {
    /// Lines of this segment.
    pub fn lines(self) -> &'static [SegmentLine] {
        match self {
            HappyUpward => HAPPY_UPWARD,
            UnhappyUpward => UNHAPPY_UPWARD,
            SurpriseUpward => SURPRISE_UPWARD,
            AngryUpward => ANGRY_UPWARD,
            SadUpward => SAD_UPWARD,
            HappyLeftward => HAPPY_LEFTWARD,
            UnhappyLeftward => UNHAPPY_LEFTWARD,
            SurpriseLeftward => SURPRISE_LEFTWARD,
            AngryLeftward => ANGRY_LEFTWARD,
            SadLeftward => SAD_LEFTWARD,
            HappyDownward => HAPPY_DOWNWARD,
            UnhappyDownward => UNHAPPY_DOWNWARD,
            SurpriseDownward => SURPRISE_DOWNWARD,
            AngryDownward => ANGRY_DOWNWARD,
            SadDownward => SAD_DOWNWARD,
            HappyRightward => HAPPY_RIGHTWARD,
            UnhappyRightward => UNHAPPY_RIGHTWARD,
            SurpriseRightward => SURPRISE_RIGHTWARD,
            AngryRightward => ANGRY_RIGHTWARD,
            SadRightward => SAD_RIGHTWARD,
        }
    }
}

/// An [Alphabet] of LED faces.
pub struct Faces;

impl Alphabet for Faces {
    type Segment = FaceSegment;

    const NAME: &'static str = "faces";

    fn glyphs() -> &'static [&'static [FaceSegment]] {
        &FACE_GLYPHS
    }

    fn lines(segment: FaceSegment) -> &'static [SegmentLine] {
        segment.lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use led_glyphs_core::{Frame, Line, Offset};

    fn negated(offset: Offset) -> Offset {
        sz_px(-offset.unit, -offset.px)
    }

    const EXPRESSIONS: [[FaceSegment; 4]; 5] = [
        [HappyUpward, HappyLeftward, HappyDownward, HappyRightward],
        [UnhappyUpward, UnhappyLeftward, UnhappyDownward, UnhappyRightward],
        [SurpriseUpward, SurpriseLeftward, SurpriseDownward, SurpriseRightward],
        [AngryUpward, AngryLeftward, AngryDownward, AngryRightward],
        [SadUpward, SadLeftward, SadDownward, SadRightward],
    ];

    #[test]
    fn table_has_five_expressions_per_orientation() {
        assert_eq!(Faces::glyph_count(), 20);
        assert!(Faces::glyphs().iter().all(|glyph| glyph.len() == 1));
    }

    #[test]
    fn eye_nudges_do_not_scale() {
        let small = Faces::glyph_lines(0, &Frame::new(120, 120, 0.6));
        let large = Faces::glyph_lines(0, &Frame::new(240, 240, 0.6));

        // Left eye starts 8px inside the glyph corner at any canvas size.
        assert_eq!(small[0].x1, 60.0 - 36.0 + 8.0);
        assert_eq!(large[0].x1, 120.0 - 72.0 + 8.0);
        assert_eq!(large[0].x2 - large[0].x1, 2.0);
    }

    #[test]
    fn happy_upward_smiles_below_center() {
        let lines = Faces::glyph_lines(0, &Frame::new(120, 120, 0.6));

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[2],
            Line {
                x1: 42.0,
                y1: 78.0,
                x2: 60.0,
                y2: 96.0,
            }
        );
        assert_eq!(
            lines[3],
            Line {
                x1: 60.0,
                y1: 96.0,
                x2: 78.0,
                y2: 78.0,
            }
        );
    }

    #[test]
    fn every_expression_keeps_its_stroke_count() {
        let counts: [usize; 5] = [4, 4, 6, 5, 6];

        for (index, glyph) in Faces::glyphs().iter().enumerate() {
            let total: usize = glyph.iter().map(|segment| segment.lines().len()).sum();
            assert_eq!(total, counts[index % 5], "glyph {index}");
        }
    }

    #[test]
    fn downward_faces_flip_their_upward_counterparts() {
        for [up, _, down, _] in EXPRESSIONS {
            let flipped = up.lines().iter().map(|l| SegmentLine {
                y1: negated(l.y1),
                y2: negated(l.y2),
                ..*l
            });

            assert_eq!(up.lines().len(), down.lines().len(), "{down:?}");
            for (expected, actual) in flipped.zip(down.lines()) {
                assert_eq!(&expected, actual, "{down:?}");
            }
        }
    }

    #[test]
    fn rightward_faces_flip_their_leftward_counterparts() {
        for [_, left, _, right] in EXPRESSIONS {
            let flipped = left.lines().iter().map(|l| SegmentLine {
                x1: negated(l.x1),
                x2: negated(l.x2),
                ..*l
            });

            assert_eq!(left.lines().len(), right.lines().len(), "{right:?}");
            for (expected, actual) in flipped.zip(right.lines()) {
                assert_eq!(&expected, actual, "{right:?}");
            }
        }
    }

    #[test]
    fn mirrored_smile_lands_above_center() {
        let up = Faces::glyph_lines(0, &Frame::new(120, 120, 0.6));
        let down = Faces::glyph_lines(10, &Frame::new(120, 120, 0.6));

        assert_eq!(down[3].y1, 120.0 - up[3].y1);
        assert_eq!(down[3].x2, up[3].x2);
    }

    #[test]
    #[should_panic]
    fn index_past_the_table_panics() {
        Faces::glyph_lines(20, &Frame::new(120, 120, 0.6));
    }
}
