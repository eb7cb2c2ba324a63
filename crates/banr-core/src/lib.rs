//! Banr Core: five stages from text to banner
//!
//! Text enters as characters, exits as a block of ASCII art. This crate
//! holds the pipeline that makes that transformation possible through
//! five distinct stages.
//!
//! ## The Pipeline
//!
//! Every piece of text follows the same journey:
//!
//! 1. **Glyph Resolution** - each character finds its glyph in the font
//! 2. **Line Assembly** - glyph rows compose into output lines
//! 3. **Shadow** - the block shifts one column right (optional)
//! 4. **Border** - a rectangular frame wraps the block (optional)
//! 5. **Centering** - lines pad out to the widest line (optional)
//!
//! The order of the decoration stages is fixed: shadow before border
//! before centering. The border frames the shadow-shifted block, and
//! centering accounts for the border width.
//!
//! ## Never-fail semantics
//!
//! The pipeline is total over all string inputs. Unsupported characters
//! silently resolve to the font's blank glyph, empty text renders to an
//! empty block, and the catalogs resolve unknown font and border names
//! before the pipeline ever sees them. The only failures a render can
//! surface come from custom [`Stage`] implementations.
//!
//! ## The Traits That Power Everything
//!
//! - [`Stage`] - the foundation every pipeline component builds upon
//! - [`FontFace`] - the pipeline's window into a font
//!
//! Data flows through the types in [`types`] - these structures carry
//! the results from one stage to the next.

pub mod compose;
pub mod context;
pub mod decor;
pub mod error;
pub mod pipeline;
pub mod traits;
pub mod types;

pub use context::PipelineContext;
pub use error::{BanrError, Result};
pub use pipeline::{Pipeline, PipelineBuilder};
pub use traits::{FontFace, Stage};
pub use types::{BorderStyle, Glyph, RenderOptions, RenderedBlock};

#[cfg(test)]
mod proptests;
