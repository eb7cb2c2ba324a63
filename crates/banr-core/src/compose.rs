//! Glyph resolution and line assembly
//!
//! The first two pipeline stages as plain functions: characters find
//! their glyphs, glyph rows compose into output lines.

use crate::{traits::FontFace, types::Glyph};

/// Map each character of `text` to a glyph from `font`, in input order
///
/// Matching is case-insensitive: the text is uppercased once before
/// lookup. Characters the font does not cover resolve to the font's
/// blank glyph; nothing fails, whatever the input.
pub fn resolve(text: &str, font: &dyn FontFace) -> Vec<Glyph> {
    let glyphs: Vec<Glyph> = text
        .to_uppercase()
        .chars()
        .map(|ch| font.glyph(ch).unwrap_or_else(|| font.blank()))
        .collect();

    log::debug!(
        "resolved {} glyphs with font {}",
        glyphs.len(),
        font.name()
    );
    glyphs
}

/// Compose per-character glyphs into output lines, top row first
///
/// One output line per glyph row, up to the tallest glyph in the
/// sequence. A glyph shorter than that contributes blank space of its
/// own width, so columns stay aligned. Fragments for a row are joined
/// with a single space. An empty sequence assembles into no lines.
pub fn assemble(glyphs: &[Glyph]) -> Vec<String> {
    let height = glyphs.iter().map(Glyph::height).max().unwrap_or(0);

    (0..height)
        .map(|i| {
            let fragments: Vec<String> = glyphs
                .iter()
                .map(|glyph| match glyph.row(i) {
                    Some(row) => row.to_string(),
                    None => " ".repeat(glyph.width()),
                })
                .collect();
            fragments.join(" ")
        })
        .collect()
}
