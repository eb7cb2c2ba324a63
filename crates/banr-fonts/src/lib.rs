//! Where the glyphs live: embedded font and border catalogs for banr
//!
//! Both catalogs are process-wide immutable data, initialized once on
//! first use and shared read-only by every render after that. Lookup
//! never fails: an unknown font name falls back to the default font and
//! an unknown border name resolves to no border at all, so a bad name
//! degrades the output instead of aborting it.

mod embedded;
mod font;

pub use font::BitmapFont;

use std::collections::BTreeMap;
use std::sync::Arc;

use banr_core::types::BorderStyle;
use once_cell::sync::Lazy;

/// Name of the font used when a requested font is not in the catalog
pub const DEFAULT_FONT: &str = "standard";

static FONTS: Lazy<BTreeMap<&'static str, Arc<BitmapFont>>> = Lazy::new(|| {
    BTreeMap::from([
        (
            "standard",
            Arc::new(BitmapFont::from_table("standard", embedded::STANDARD)),
        ),
        (
            "banner",
            Arc::new(BitmapFont::from_table("banner", embedded::BANNER)),
        ),
        (
            "small",
            Arc::new(BitmapFont::from_table("small", embedded::SMALL)),
        ),
    ])
});

static BORDERS: Lazy<BTreeMap<&'static str, BorderStyle>> =
    Lazy::new(|| embedded::BORDERS.iter().copied().collect());

/// Look up a font by name, if the catalog has it
pub fn try_font(name: &str) -> Option<Arc<BitmapFont>> {
    FONTS.get(name).cloned()
}

/// Look up a font by name, falling back to the default font
///
/// A bad name is not an error; the render proceeds in `standard`.
pub fn font(name: &str) -> Arc<BitmapFont> {
    if let Some(font) = try_font(name) {
        return font;
    }
    log::warn!("unknown font {name:?}, falling back to {DEFAULT_FONT}");
    FONTS[DEFAULT_FONT].clone()
}

/// Look up a border style by name
///
/// An unknown name means "no border requested".
pub fn border(name: &str) -> Option<BorderStyle> {
    let style = BORDERS.get(name).copied();
    if style.is_none() {
        log::warn!("unknown border {name:?}, rendering without one");
    }
    style
}

/// Catalog font names, sorted
pub fn font_names() -> impl Iterator<Item = &'static str> {
    FONTS.keys().copied()
}

/// Catalog border names, sorted
pub fn border_names() -> impl Iterator<Item = &'static str> {
    BORDERS.keys().copied()
}
