//! The engine that drives text through five stages to become a banner

// this_file: crates/banr-core/src/pipeline.rs

use crate::{
    compose,
    context::PipelineContext,
    decor,
    error::Result,
    traits::{FontFace, Stage},
    types::{RenderOptions, RenderedBlock},
};
use std::sync::Arc;

/// Pipeline for text art: Resolve → Assemble → Shadow → Border → Center
///
/// Every render follows the same journey. The first two stages build the
/// block; the last three decorate it, each one optional and driven by
/// [`RenderOptions`]. The order is part of the contract: the border
/// frames the shadow-shifted block, and centering accounts for the
/// border width. Reordering changes the visual output.
///
/// ```
/// use std::sync::Arc;
/// use banr_core::{FontFace, Glyph, Pipeline, RenderOptions};
///
/// struct Dots;
///
/// impl FontFace for Dots {
///     fn name(&self) -> &'static str {
///         "dots"
///     }
///     fn glyph(&self, ch: char) -> Option<Glyph> {
///         match ch {
///             'O' => Some(Glyph::new(&["::", "::"])),
///             ' ' => Some(Glyph::new(&["  ", "  "])),
///             _ => None,
///         }
///     }
///     fn blank(&self) -> Glyph {
///         Glyph::new(&["  ", "  "])
///     }
/// }
///
/// let block = Pipeline::new().process("oo", Arc::new(Dots), RenderOptions::default())?;
/// assert_eq!(block.lines(), [":: ::", ":: ::"]);
/// # Ok::<(), banr_core::BanrError>(())
/// ```
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// The standard five-stage pipeline
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a custom pipeline
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Send text through all five stages and get the final block
    pub fn process(
        &self,
        text: &str,
        font: Arc<dyn FontFace>,
        options: RenderOptions,
    ) -> Result<RenderedBlock> {
        let context = PipelineContext::new(text, font, options);
        Ok(self.execute(context)?.into_block())
    }

    /// Run the full pipeline with a prepared context
    pub fn execute(&self, mut context: PipelineContext) -> Result<PipelineContext> {
        // One stage at a time, each transforms the context
        for stage in &self.stages {
            log::debug!("executing stage: {}", stage.name());
            context = stage.process(context)?;
        }

        Ok(context)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Build pipelines your way, piece by piece
///
/// Add the stages you need; with none given, the standard five are used.
pub struct PipelineBuilder {
    stages: Vec<Box<dyn Stage>>,
}

impl PipelineBuilder {
    /// Start with a clean slate
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add your own stage to the procession
    pub fn stage(mut self, stage: Box<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Create the pipeline, ready to run
    pub fn build(self) -> Pipeline {
        // No custom stages? Use the classic five
        let stages = if self.stages.is_empty() {
            vec![
                Box::new(ResolveStage) as Box<dyn Stage>,
                Box::new(AssembleStage) as Box<dyn Stage>,
                Box::new(ShadowStage) as Box<dyn Stage>,
                Box::new(BorderStage) as Box<dyn Stage>,
                Box::new(CenterStage) as Box<dyn Stage>,
            ]
        } else {
            self.stages
        };

        Pipeline { stages }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// The five stages that make up the default pipeline. The decoration
// stages read their switch from the context options and pass the lines
// through untouched when their switch is off.

struct ResolveStage;
impl Stage for ResolveStage {
    fn name(&self) -> &'static str {
        "GlyphResolution"
    }

    fn process(&self, mut context: PipelineContext) -> Result<PipelineContext> {
        let font = context.font();
        let glyphs = compose::resolve(context.text(), font.as_ref());
        context.set_glyphs(glyphs);
        Ok(context)
    }
}

struct AssembleStage;
impl Stage for AssembleStage {
    fn name(&self) -> &'static str {
        "LineAssembly"
    }

    fn process(&self, mut context: PipelineContext) -> Result<PipelineContext> {
        let lines = compose::assemble(context.glyphs().unwrap_or(&[]));
        context.set_lines(lines);
        Ok(context)
    }
}

struct ShadowStage;
impl Stage for ShadowStage {
    fn name(&self) -> &'static str {
        "Shadow"
    }

    fn process(&self, mut context: PipelineContext) -> Result<PipelineContext> {
        if context.options().shadow {
            let shifted = decor::shadow(context.lines().unwrap_or(&[]));
            context.set_lines(shifted);
        }
        Ok(context)
    }
}

struct BorderStage;
impl Stage for BorderStage {
    fn name(&self) -> &'static str {
        "Border"
    }

    fn process(&self, mut context: PipelineContext) -> Result<PipelineContext> {
        if let Some(style) = context.options().border {
            let framed = decor::frame(context.lines().unwrap_or(&[]), style);
            context.set_lines(framed);
        }
        Ok(context)
    }
}

struct CenterStage;
impl Stage for CenterStage {
    fn name(&self) -> &'static str {
        "Centering"
    }

    fn process(&self, mut context: PipelineContext) -> Result<PipelineContext> {
        if context.options().center {
            let centered = decor::center(context.lines().unwrap_or(&[]));
            context.set_lines(centered);
        }
        Ok(context)
    }
}
