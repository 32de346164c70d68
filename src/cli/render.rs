//! Render command implementation.
//!
//! Rasterizes the text with a catalog font and prints it as coloured block art.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::{LogoError, Result};
use crate::font::{compose_text, FontCatalog, FontFace, GlyphRasterizer};
use crate::output::{display_path, Printer};
use crate::render::terminal::{self, ColorChoice};
use crate::render::{render_gallery, render_grid, AxisMap, RenderOptions, RenderRequest};
use crate::types::{ColorSpace, Direction, PaletteTable, PixelGrid, PixelWidthMode, StyleMode};

/// Letter spacing used when neither the command line nor the config sets one.
const DEFAULT_LETTER_SPACING: usize = 1;

/// Render text as gradient block art
#[derive(Args, Debug, Default, Clone)]
pub struct RenderArgs {
    /// Text to render, e.g. "你好世界"
    pub text: Option<String>,

    /// Font name from fonts.json, e.g. 12px
    pub font: Option<String>,

    /// Palette name, e.g. grad-blue
    pub palette: Option<String>,

    /// Pixel width mode: h (half), f (full), hf (half-width pair)
    #[arg(short = 'p', long, value_name = "MODE")]
    pub pixel_width: Option<PixelWidthMode>,

    /// Gradient direction: vertical, horizontal, diagonal
    #[arg(short, long)]
    pub direction: Option<Direction>,

    /// Blank columns between characters
    #[arg(long, value_name = "N")]
    pub letter_spacing: Option<usize>,

    /// Style: none, simpleBlock (sb), shade, block
    #[arg(short, long)]
    pub style: Option<StyleMode>,

    /// Reverse the gradient's colour order
    #[arg(long)]
    pub reverse_gradient: bool,

    /// Interpolation colour space: rgb or oklab
    #[arg(long)]
    pub color_space: Option<ColorSpace>,

    /// Always emit colour
    #[arg(long, overrides_with = "no_color")]
    pub color: bool,

    /// Never emit colour
    #[arg(long, overrides_with = "color")]
    pub no_color: bool,

    /// Terminal width to wrap at (default: detected)
    #[arg(long, value_name = "N")]
    pub columns: Option<usize>,

    /// Show all available colour palettes
    #[arg(short = 'l', long)]
    pub list_palettes: bool,

    /// Render the text in every palette
    #[arg(long)]
    pub gallery: bool,

    /// Directory containing fonts.json
    #[arg(long, value_name = "DIR")]
    pub fonts_dir: Option<PathBuf>,

    /// Config file (default: ./logo.yaml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print gradient bounding box and filled-axis stats to stderr
    #[arg(long)]
    pub debug_gradient: bool,

    /// Print character layout to stderr
    #[arg(long)]
    pub debug_layout: bool,

    /// Print progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Effective options after merging flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub fonts_dir: PathBuf,
    pub font: Option<String>,
    pub palette: Option<String>,
    pub pixel_width: PixelWidthMode,
    pub direction: Direction,
    pub letter_spacing: usize,
    pub style: StyleMode,
    pub reverse_gradient: bool,
    pub color_space: ColorSpace,
    pub color: ColorChoice,
    pub columns: Option<usize>,
}

impl RenderArgs {
    /// Merge with config: command line first, then config, then defaults.
    pub fn settings(&self, config: &Config) -> Settings {
        Settings {
            fonts_dir: self
                .fonts_dir
                .clone()
                .unwrap_or_else(|| config.fonts_dir.clone()),
            font: self.font.clone().or_else(|| config.font.clone()),
            palette: self.palette.clone().or_else(|| config.palette.clone()),
            pixel_width: self.pixel_width.or(config.pixel_width).unwrap_or_default(),
            direction: self.direction.or(config.direction).unwrap_or_default(),
            letter_spacing: self
                .letter_spacing
                .or(config.letter_spacing)
                .unwrap_or(DEFAULT_LETTER_SPACING),
            style: self.style.or(config.style).unwrap_or_default(),
            reverse_gradient: self.reverse_gradient || config.reverse_gradient,
            color_space: self.color_space.or(config.color_space).unwrap_or_default(),
            color: ColorChoice::from_flags(self.color, self.no_color),
            columns: self.columns.or(config.columns),
        }
    }
}

impl Settings {
    /// Build the render request, probing the terminal for width and colour support.
    pub fn request(&self) -> RenderRequest<'_> {
        RenderRequest {
            palette: self.palette.as_deref(),
            reverse_gradient: self.reverse_gradient,
            color_space: self.color_space,
            options: RenderOptions {
                direction: self.direction,
                pixel_width: self.pixel_width,
                style: self.style,
                color: self.color.enabled(),
                columns: terminal::terminal_columns(self.columns),
            },
        }
    }
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    terminal::init_console();

    let cwd = std::env::current_dir()?;
    let config = Config::discover(args.config.as_deref(), &cwd)?;
    let palettes = config.palette_table()?;

    if args.list_palettes {
        print!("{}", format_palette_list(&palettes));
        return Ok(());
    }

    let text = args.text.as_deref().ok_or_else(|| LogoError::Config {
        message: "missing <TEXT>".to_string(),
        help: Some("Usage: blocklogo \"你好世界\" [FONT] [PALETTE] [OPTIONS]".to_string()),
    })?;

    let settings = args.settings(&config);
    let catalog = FontCatalog::load(&settings.fonts_dir)?;
    let spec = catalog.get(settings.font.as_deref())?;
    let font_path = catalog.resolve_path(spec)?;

    if args.verbose {
        printer.status(
            "Loading",
            &format!("{} {}", spec.name, printer.dim(&format!("({})", display_path(&font_path)))),
        );
    }
    let face = FontFace::load(&font_path, spec.font_size)?;
    let rasterizer = GlyphRasterizer::for_spec(&face, spec);
    let composition = compose_text(text, &rasterizer, settings.letter_spacing)?;

    if args.debug_layout {
        printer.info("Layout", &composition.layout.to_string());
    }
    if args.debug_gradient {
        printer.info("Gradient", &gradient_stats(&composition.grid));
    }

    let request = settings.request();
    let output = if args.gallery {
        render_gallery(&composition.grid, &palettes, &request)?
    } else {
        render_grid(&composition.grid, &palettes, &request)?
    };

    if output.is_empty() && !text.is_empty() && args.verbose {
        printer.warning("Empty", "text has no visible pixels in this font");
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    Ok(())
}

/// One line per palette: `- name: #aaaaaa, #bbbbbb`.
pub fn format_palette_list(palettes: &PaletteTable) -> String {
    let mut out = String::from("Available palettes:\n");
    for palette in palettes.iter() {
        let stops: Vec<String> = palette.stops().iter().map(|c| c.to_string()).collect();
        out.push_str(&format!("- {}: {}\n", palette.name, stops.join(", ")));
    }
    out
}

/// Bounding box and filled-axis counts of a canvas.
pub fn gradient_stats(grid: &PixelGrid) -> String {
    match AxisMap::new(grid) {
        Some(map) => {
            let b = map.bounding_box();
            let axes = map.filled_axes();
            format!(
                "bbox=({},{})-({},{}), filled_cols={}, filled_rows={}",
                b.min_x,
                b.min_y,
                b.max_x,
                b.max_y,
                axes.cols.len(),
                axes.rows.len()
            )
        }
        None => "bbox=none, filled_cols=0, filled_rows=0".to_string(),
    }
}
