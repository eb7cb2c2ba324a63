//! The data structures that flow through the pipeline

use std::fmt;

/// A fixed grid of characters representing one symbol in a font
///
/// Rows are borrowed from process-static font tables. All rows within a
/// glyph share one length; shorter glyphs are padded against taller ones
/// during line assembly, never inside the glyph itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: &'static [&'static str],
}

impl Glyph {
    /// Wrap a static row grid as a glyph
    pub const fn new(rows: &'static [&'static str]) -> Self {
        Self { rows }
    }

    /// Number of rows in the grid
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width in characters, taken from the first row (0 for an empty glyph)
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.chars().count())
    }

    /// Row `i` of the grid, if the glyph is tall enough
    pub fn row(&self, i: usize) -> Option<&'static str> {
        self.rows.get(i).copied()
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> &'static [&'static str] {
        self.rows
    }
}

/// The six characters that draw a rectangular frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderStyle {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

/// How a single render should be decorated
///
/// The border is already resolved: catalog lookup turns unknown names
/// into `None` before the options reach the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub border: Option<BorderStyle>,
    pub shadow: bool,
    pub center: bool,
}

/// The final multi-line output of a render
///
/// Owned by the caller; nothing in here aliases the font tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedBlock {
    lines: Vec<String>,
}

impl RenderedBlock {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Output lines, top to bottom
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of output lines
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Width in characters of the widest line
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for RenderedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}
