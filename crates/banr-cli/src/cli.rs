//! CLI argument definitions using Clap v4

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// banr - block ASCII-art banners from the command line
#[derive(Parser, Debug)]
#[command(name = "banr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render text as block ASCII art
    #[command(alias = "r")]
    Render(RenderArgs),

    /// Display the available fonts and borders
    #[command(alias = "i")]
    Info(InfoArgs),

    /// Render a sample text in every font
    Demo(DemoArgs),
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Input text to render (reads from stdin if omitted)
    pub text: Option<String>,

    /// Font name (unknown names fall back to standard)
    #[arg(short = 'f', long = "font", default_value = "standard")]
    pub font: String,

    /// Border name (unknown names render without a border)
    #[arg(short = 'b', long = "border")]
    pub border: Option<String>,

    /// Add a shadow offset
    #[arg(short = 's', long = "shadow")]
    pub shadow: bool,

    /// Center the block
    #[arg(short = 'c', long = "center")]
    pub center: bool,

    /// Output file path (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Silent mode (no progress info)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// List available fonts
    #[arg(long)]
    pub fonts: bool,

    /// List available borders
    #[arg(long)]
    pub borders: bool,
}

/// Arguments for the demo command
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Text rendered in each font
    #[arg(short = 't', long = "text", default_value = "HELLO")]
    pub text: String,
}
