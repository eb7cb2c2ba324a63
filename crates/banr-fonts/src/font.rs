//! Concrete font type backing the catalog

use std::collections::HashMap;

use banr_core::{traits::FontFace, types::Glyph};

/// A named bitmap font built from an embedded glyph table
///
/// Constructed once when the catalog initializes and shared read-only
/// from then on, so lookups never touch mutable state.
pub struct BitmapFont {
    name: &'static str,
    glyphs: HashMap<char, Glyph>,
}

impl BitmapFont {
    /// Build a font from a static (char, rows) table
    ///
    /// The table must contain a space entry and every glyph's rows must
    /// share one width; both are checked in debug builds.
    pub(crate) fn from_table(
        name: &'static str,
        table: &'static [(char, &'static [&'static str])],
    ) -> Self {
        let glyphs: HashMap<char, Glyph> = table
            .iter()
            .map(|&(ch, rows)| {
                let glyph = Glyph::new(rows);
                debug_assert!(
                    rows.iter().all(|row| row.chars().count() == glyph.width()),
                    "glyph {ch:?} in font {name} has ragged rows"
                );
                (ch, glyph)
            })
            .collect();

        debug_assert!(
            glyphs.contains_key(&' '),
            "font {name} is missing the space glyph"
        );

        Self { name, glyphs }
    }

    /// How many characters this font covers
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}

impl FontFace for BitmapFont {
    fn name(&self) -> &'static str {
        self.name
    }

    fn glyph(&self, ch: char) -> Option<Glyph> {
        self.glyphs.get(&ch).copied()
    }

    fn blank(&self) -> Glyph {
        // The space entry is guaranteed by construction; the empty glyph
        // keeps this total anyway.
        self.glyphs.get(&' ').copied().unwrap_or(Glyph::new(&[]))
    }
}
