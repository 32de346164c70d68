//! blocklogo - Render text as gradient block art in the terminal
//!
//! A library for rasterizing text with a pixel font into an on/off canvas
//! and drawing that canvas as coloured block characters, with 3D box-drawing
//! edges, shading, or plain blocks.

pub mod cli;
pub mod config;
pub mod error;
pub mod font;
pub mod output;
pub mod render;
pub mod types;

pub use config::{Config, CONFIG_FILENAME};
pub use error::{LogoError, Result};
pub use font::{compose_text, Composition, FontCatalog, FontFace, FontSpec, GlyphRasterizer, GlyphSource, LayoutMeta};
pub use render::{render_gallery, render_grid, AxisMap, ColorChoice, Gradient, RenderOptions, RenderRequest, StyleRenderer};
pub use types::{
    BoundingBox, ColorSpace, Colour, Direction, Palette, PaletteTable, PixelGrid, PixelWidthMode,
    StyleMode, DEFAULT_PALETTE_NAME,
};
