// this_file: crates/banr-core/src/proptests.rs

use crate::{
    compose, decor,
    traits::FontFace,
    types::{BorderStyle, Glyph, RenderOptions},
    Pipeline,
};
use proptest::prelude::*;
use std::sync::Arc;

const PLAIN: BorderStyle = BorderStyle {
    horizontal: '-',
    vertical: '|',
    top_left: '+',
    top_right: '+',
    bottom_left: '+',
    bottom_right: '+',
};

// Deliberately ragged font: letters are 3 rows tall except the 4-row
// 'T', digits are 2 rows, and the space glyph is a 1x1 grid. Exercises
// the per-glyph blank substitution far harder than the uniform shipped
// fonts do.
struct RaggedFont;

impl FontFace for RaggedFont {
    fn name(&self) -> &'static str {
        "ragged"
    }

    fn glyph(&self, ch: char) -> Option<Glyph> {
        match ch {
            'T' => Some(Glyph::new(&["TT", "TT", "TT", "TT"])),
            'A'..='Z' => Some(Glyph::new(&["###", "# #", "###"])),
            '0'..='9' => Some(Glyph::new(&["0000", "0000"])),
            ' ' => Some(Glyph::new(&[" "])),
            _ => None,
        }
    }

    fn blank(&self) -> Glyph {
        Glyph::new(&[" "])
    }
}

// Property: the block is exactly as tall as the tallest resolved glyph
proptest! {
    #[test]
    fn prop_line_count_matches_tallest_glyph(s in "[A-Za-z0-9 ]{0,24}") {
        let font = RaggedFont;
        let glyphs = compose::resolve(&s, &font);
        let tallest = glyphs.iter().map(Glyph::height).max().unwrap_or(0);

        prop_assert_eq!(compose::assemble(&glyphs).len(), tallest);
    }
}

// Property: text the font fully covers never takes the blank fallback
proptest! {
    #[test]
    fn prop_covered_text_never_falls_back(s in "[A-Za-z0-9]{0,24}") {
        let font = RaggedFont;
        let glyphs = compose::resolve(&s, &font);

        for (glyph, ch) in glyphs.iter().zip(s.to_uppercase().chars()) {
            let looked_up = font.glyph(ch);
            prop_assert_eq!(Some(*glyph), looked_up);
        }
    }
}

// Property: an unsupported character contributes exactly what a space does
proptest! {
    #[test]
    fn prop_unsupported_char_acts_as_space(s in "\\PC{0,16}") {
        let font = RaggedFont;
        let upper = s.to_uppercase();
        let spaced: String = upper
            .chars()
            .map(|ch| if font.glyph(ch).is_some() { ch } else { ' ' })
            .collect();

        let pipeline = Pipeline::new();
        let rendered = pipeline
            .process(&s, Arc::new(RaggedFont), RenderOptions::default())
            .unwrap();
        let expected = pipeline
            .process(&spaced, Arc::new(RaggedFont), RenderOptions::default())
            .unwrap();

        prop_assert_eq!(rendered, expected);
    }
}

// Property: the pipeline is total and always yields a rectangular block
proptest! {
    #[test]
    fn prop_pipeline_is_total_and_rectangular(
        s in "\\PC{0,16}",
        shadow: bool,
        center: bool,
        bordered: bool,
    ) {
        let options = RenderOptions {
            border: bordered.then_some(PLAIN),
            shadow,
            center,
        };
        let block = Pipeline::new()
            .process(&s, Arc::new(RaggedFont), options)
            .unwrap();

        let width = block.width();
        prop_assert!(block
            .lines()
            .iter()
            .all(|line| line.chars().count() == width));

        if s.to_uppercase().is_empty() {
            prop_assert!(block.is_empty());
        } else if bordered {
            // Two frame rows on top of the assembled ones
            prop_assert!(block.height() >= 3);
        }
    }
}

// Property: centering after a border changes padding, never line count
proptest! {
    #[test]
    fn prop_centering_preserves_framed_line_count(
        rows in proptest::collection::vec("[a-z ]{0,12}", 0..8)
    ) {
        let framed = decor::frame(&rows, PLAIN);
        prop_assert_eq!(decor::center(&framed).len(), framed.len());
    }
}
