//! List fonts declared in the catalog.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::font::{FontCatalog, FontSpec};
use crate::output::{plural, Printer};

/// List fonts from fonts.json
#[derive(Args, Debug, Default)]
pub struct FontsArgs {
    /// Directory containing fonts.json
    #[arg(long, value_name = "DIR")]
    pub fonts_dir: Option<PathBuf>,

    /// Config file (default: ./logo.yaml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: FontsArgs, printer: &Printer) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::discover(args.config.as_deref(), &cwd)?;
    let fonts_dir = args.fonts_dir.unwrap_or(config.fonts_dir);

    let catalog = FontCatalog::load(&fonts_dir)?;
    for spec in catalog.fonts() {
        println!("{}", format_font(spec, printer));
    }
    printer.info("Found", &plural(catalog.fonts().len(), "font", "fonts"));
    Ok(())
}

/// `name  WxH @ size  path`, with the path dimmed.
fn format_font(spec: &FontSpec, printer: &Printer) -> String {
    format!(
        "{:<12} {}x{} @ {}px  {}",
        spec.name,
        spec.grid_width,
        spec.grid_height,
        spec.font_size,
        printer.dim(&spec.path.display().to_string())
    )
}
