//! The traveling container that carries data through pipeline stages

use crate::{
    traits::FontFace,
    types::{Glyph, RenderOptions, RenderedBlock},
};
use std::sync::Arc;

/// Everything a stage needs, nothing it doesn't
///
/// The context flows from stage to stage, accumulating the results of
/// each transformation. Characters become glyphs, glyphs become lines,
/// and lines pick up their decorations - all tracked here.
pub struct PipelineContext {
    // What we start with
    text: String,
    font: Arc<dyn FontFace>,
    options: RenderOptions,

    // What emerges along the way
    glyphs: Option<Vec<Glyph>>,
    lines: Option<Vec<String>>,
}

impl PipelineContext {
    /// Start fresh with text, a font, and the render options
    pub fn new(text: impl Into<String>, font: Arc<dyn FontFace>, options: RenderOptions) -> Self {
        Self {
            text: text.into(),
            font,
            options,
            glyphs: None,
            lines: None,
        }
    }

    // Read what's inside

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> Arc<dyn FontFace> {
        self.font.clone()
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn glyphs(&self) -> Option<&[Glyph]> {
        self.glyphs.as_deref()
    }

    pub fn lines(&self) -> Option<&[String]> {
        self.lines.as_deref()
    }

    // Change what's inside

    pub fn set_glyphs(&mut self, glyphs: Vec<Glyph>) {
        self.glyphs = Some(glyphs);
    }

    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = Some(lines);
    }

    /// Hand the accumulated lines over as the final block
    pub fn into_block(self) -> RenderedBlock {
        RenderedBlock::new(self.lines.unwrap_or_default())
    }
}
