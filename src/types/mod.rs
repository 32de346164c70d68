//! Core domain types for blocklogo.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - 24-bit RGB colour values
//! - `PixelGrid` - on/off pixel canvases
//! - `Palette` - named gradient stop lists
//! - rendering mode enums (style, pixel width, direction, colour space)

mod colour;
mod grid;
mod mode;
mod palette;

pub use colour::Colour;
pub use grid::{BoundingBox, PixelGrid};
pub use mode::{ColorSpace, Direction, PixelWidthMode, StyleMode};
pub use palette::{Palette, PaletteTable, DEFAULT_PALETTE_NAME};
