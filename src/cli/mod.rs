pub mod completions;
pub mod fonts;
pub mod render;

use clap::{Parser, Subcommand};

/// blocklogo - Render text as gradient block art in the terminal
#[derive(Parser, Debug)]
#[command(name = "blocklogo")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub render: render::RenderArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List fonts declared in fonts.json
    Fonts(fonts::FontsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
