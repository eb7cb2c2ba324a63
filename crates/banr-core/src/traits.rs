//! The contracts that bind the pipeline together
//!
//! Two traits, two seams. [`Stage`] lets components join the five-stage
//! procession; [`FontFace`] is the pipeline's window into a font, so the
//! catalog owns the tables and the pipeline only ever looks glyphs up.

use crate::{error::Result, types::Glyph, PipelineContext};

/// One step of the render procession
///
/// Implement Stage and your component can join the pipeline that
/// transforms text into a banner.
///
/// ```ignore
/// struct MyStage;
///
/// impl Stage for MyStage {
///     fn name(&self) -> &'static str {
///         "my-stage"
///     }
///
///     fn process(&self, context: PipelineContext) -> Result<PipelineContext> {
///         // Transform the context, pass it forward
///         Ok(context)
///     }
/// }
/// ```
pub trait Stage: Send + Sync {
    /// Who are you? Used for debugging and logging
    fn name(&self) -> &'static str;

    /// Do your work and pass the context forward
    fn process(&self, context: PipelineContext) -> Result<PipelineContext>;
}

/// The pipeline's window into a font
///
/// Fonts are case-insensitive; glyph resolution uppercases the input
/// once, so implementations only see uppercase keys.
pub trait FontFace: Send + Sync {
    /// Catalog name of the font
    fn name(&self) -> &'static str;

    /// The glyph for `ch`, if the font covers it
    fn glyph(&self, ch: char) -> Option<Glyph>;

    /// The space glyph
    ///
    /// Every font carries one; it doubles as the silent fallback for
    /// characters the font does not cover.
    fn blank(&self) -> Glyph;
}
