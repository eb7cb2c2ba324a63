//! Info command implementation
//!
//! Displays the font and border catalogs.

use crate::cli::InfoArgs;

use banr::fonts;
use banr::prelude::Result;

pub fn run(args: &InfoArgs) -> Result<()> {
    // If no specific flags, show all info
    let show_all = !args.fonts && !args.borders;

    println!("banr v{}", env!("CARGO_PKG_VERSION"));
    println!();

    if show_all || args.fonts {
        print_fonts();
        if show_all {
            println!();
        }
    }

    if show_all || args.borders {
        print_borders();
    }

    Ok(())
}

fn print_fonts() {
    println!("Fonts:");
    for name in fonts::font_names() {
        let font = fonts::font(name);
        let marker = if name == fonts::DEFAULT_FONT {
            " (default)"
        } else {
            ""
        };
        println!("  {:<10} - {} glyphs{}", name, font.glyph_count(), marker);
    }
}

fn print_borders() {
    println!("Borders:");
    for name in fonts::border_names() {
        if let Some(style) = fonts::border(name) {
            println!(
                "  {:<10} - {}{}{}{}{}",
                name,
                style.top_left,
                style.horizontal,
                style.horizontal,
                style.horizontal,
                style.top_right
            );
        }
    }
}
