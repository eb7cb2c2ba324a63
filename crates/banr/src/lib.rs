//! banr - block ASCII-art text rendering
//!
//! banr turns text into multi-line banner art: each character maps to a
//! fixed-grid glyph from an embedded font, glyph rows compose into
//! output lines, and the block optionally picks up a shadow offset, a
//! rectangular border, and centering - in that order.
//!
//! # Example
//!
//! ```
//! use banr::prelude::*;
//!
//! let block = Pipeline::new().process(
//!     "ab",
//!     font("small"),
//!     RenderOptions {
//!         border: border("round"),
//!         ..Default::default()
//!     },
//! )?;
//!
//! assert_eq!(block.lines().len(), 5); // 3 glyph rows + 2 frame rows
//! # Ok::<(), BanrError>(())
//! ```
//!
//! Bad names never fail a render: an unknown font falls back to
//! `standard`, an unknown border means no border, and characters a font
//! does not cover render as blank space.

pub use banr_core::{
    error, BanrError, BorderStyle, FontFace, Glyph, Pipeline, PipelineBuilder, RenderOptions,
    RenderedBlock, Result, Stage,
};

pub use banr_fonts as fonts;

/// Common imports for typical usage
pub mod prelude {
    pub use banr_core::{
        error::{BanrError, Result},
        traits::{FontFace, Stage},
        types::{BorderStyle, Glyph, RenderOptions, RenderedBlock},
        Pipeline,
    };
    pub use banr_fonts::{border, font, try_font, BitmapFont};
}
