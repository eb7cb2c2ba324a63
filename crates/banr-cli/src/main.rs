//! banr CLI - block ASCII-art banners for your terminal

mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(&args),
        Commands::Info(args) => commands::info::run(&args),
        Commands::Demo(args) => commands::demo::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
