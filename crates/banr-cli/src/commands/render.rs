//! Render command implementation
//!
//! Resolves catalog names, runs the pipeline, and writes the block to
//! stdout or a file.

use crate::cli::RenderArgs;
use std::fs::File;
use std::io::{self, Read, Write};

use banr::fonts;
use banr::prelude::*;

pub fn run(args: &RenderArgs) -> Result<()> {
    let text = get_input_text(args)?;

    let font = fonts::font(&args.font);
    let border = args.border.as_deref().and_then(fonts::border);

    let options = RenderOptions {
        border,
        shadow: args.shadow,
        center: args.center,
    };

    log::debug!("rendering {} chars with font {}", text.len(), font.name());
    let block = Pipeline::new().process(&text, font, options)?;

    write_output(args, &block)?;

    if !args.quiet {
        if let Some(ref path) = args.output {
            eprintln!("✓ Saved to {}", path.display());
        }
    }

    Ok(())
}

fn get_input_text(args: &RenderArgs) -> Result<String> {
    if let Some(ref text) = args.text {
        return Ok(text.clone());
    }

    // Read from stdin; the newline a shell pipeline appends is not part
    // of the text.
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text.trim_end_matches(['\n', '\r']).to_string())
}

fn write_output(args: &RenderArgs, block: &RenderedBlock) -> Result<()> {
    if let Some(ref path) = args.output {
        let mut file = File::create(path)?;
        file.write_all(block.to_string().as_bytes())?;
    } else {
        println!("{block}");
    }

    Ok(())
}
