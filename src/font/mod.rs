//! Fonts: catalog lookup, glyph rasterization, and text composition.
//!
//! # Example
//!
//! ```ignore
//! use blocklogo::font::{compose_text, FontCatalog, FontFace, GlyphRasterizer};
//!
//! let catalog = FontCatalog::load("fonts")?;
//! let spec = catalog.get(Some("12px"))?;
//! let face = FontFace::load(&catalog.resolve_path(spec)?, spec.font_size)?;
//! let rasterizer = GlyphRasterizer::for_spec(&face, spec);
//! let composition = compose_text("你好", &rasterizer, 1)?;
//! ```

mod catalog;
mod compose;
mod face;
mod raster;

pub use catalog::{FontCatalog, FontSpec, CATALOG_FILENAME};
pub use compose::{compose_text, Composition, LayoutMeta};
pub use face::{FontFace, GlyphBitmap, GlyphSource};
pub use raster::GlyphRasterizer;

#[cfg(test)]
pub(crate) use face::testing;
