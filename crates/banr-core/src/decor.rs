//! Shadow, border, and centering post-processing
//!
//! Applied strictly in this order: shadow shifts the block, the border
//! frames the shifted block, centering pads against the final width.
//! Every function here is a no-op on an empty block, so empty input
//! stays empty whatever decorations were requested.

use crate::types::BorderStyle;

/// Shift the whole block one column right to fake an offset shadow
pub fn shadow(lines: &[String]) -> Vec<String> {
    lines.iter().map(|line| format!(" {line}")).collect()
}

/// Wrap the block in a rectangular frame drawn with `style`
///
/// Interior lines are left-justified to the widest line so the frame
/// stays rectangular.
pub fn frame(lines: &[String], style: BorderStyle) -> Vec<String> {
    if lines.is_empty() {
        return Vec::new();
    }

    let width = max_width(lines);
    let horizontal: String = std::iter::repeat(style.horizontal).take(width).collect();

    let mut framed = Vec::with_capacity(lines.len() + 2);
    framed.push(format!(
        "{}{}{}",
        style.top_left, horizontal, style.top_right
    ));
    for line in lines {
        let pad = " ".repeat(width - char_width(line));
        framed.push(format!("{}{}{}{}", style.vertical, line, pad, style.vertical));
    }
    framed.push(format!(
        "{}{}{}",
        style.bottom_left, horizontal, style.bottom_right
    ));
    framed
}

/// Pad every line to the widest width with its content centered
///
/// An odd leftover column goes to the right, uniformly for all lines.
pub fn center(lines: &[String]) -> Vec<String> {
    let width = max_width(lines);

    lines
        .iter()
        .map(|line| {
            let slack = width - char_width(line);
            let left = slack / 2;
            format!(
                "{}{}{}",
                " ".repeat(left),
                line,
                " ".repeat(slack - left)
            )
        })
        .collect()
}

// Widths are counted in characters: the fancy and round border sets are
// multi-byte UTF-8.
fn char_width(line: &str) -> usize {
    line.chars().count()
}

fn max_width(lines: &[String]) -> usize {
    lines.iter().map(|line| char_width(line)).max().unwrap_or(0)
}
