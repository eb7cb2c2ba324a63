//! Demo command implementation
//!
//! Renders the sample text once per catalog font, each inside a plain
//! border, so the fonts can be compared at a glance.

use crate::cli::DemoArgs;

use banr::fonts;
use banr::prelude::*;

pub fn run(args: &DemoArgs) -> Result<()> {
    println!("banr font demo");
    println!();

    let pipeline = Pipeline::new();
    let options = RenderOptions {
        border: fonts::border("plain"),
        ..Default::default()
    };

    for name in fonts::font_names() {
        let block = pipeline.process(&args.text, fonts::font(name), options)?;
        println!("Font: {name}");
        println!("{block}");
        println!();
    }

    Ok(())
}
