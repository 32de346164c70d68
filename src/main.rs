use clap::Parser;
use miette::Result;
use blocklogo::cli::{Cli, Commands};
use blocklogo::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Some(Commands::Fonts(args)) => blocklogo::cli::fonts::run(args, &printer)?,
        Some(Commands::Completions(args)) => blocklogo::cli::completions::run(args)?,
        None => blocklogo::cli::render::run(cli.render, &printer)?,
    }

    Ok(())
}
