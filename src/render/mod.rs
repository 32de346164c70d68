//! Rendering module for blocklogo.
//!
//! This module turns a composed pixel canvas into terminal text: gradient
//! construction, ink-aligned gradient positions, and the styled compositor.

mod axis;
mod gradient;
mod style;
pub mod terminal;

pub use axis::{AxisMap, FilledAxes};
pub use gradient::Gradient;
pub use style::{RenderOptions, StyleRenderer};
pub use terminal::ColorChoice;

use crate::error::Result;
use crate::types::{ColorSpace, PaletteTable, PixelGrid};

/// Palette selection plus render options for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest<'a> {
    /// Palette name; `None` selects the default palette.
    pub palette: Option<&'a str>,
    /// Reverse the palette's stop order.
    pub reverse_gradient: bool,
    pub color_space: ColorSpace,
    pub options: RenderOptions,
}

/// Look up the requested palette and render `grid` with it.
///
/// The palette is resolved before anything is drawn, so an unknown name fails
/// even for a canvas with no ink.
pub fn render_grid(grid: &PixelGrid, palettes: &PaletteTable, request: &RenderRequest<'_>) -> Result<String> {
    let palette = palettes.get(request.palette)?;
    let palette = if request.reverse_gradient {
        palette.reversed()
    } else {
        palette.clone()
    };

    let gradient = Gradient::from_palette(&palette, request.color_space);
    Ok(StyleRenderer::new(&gradient, request.options).render(grid))
}

/// Render `grid` once per palette, each under a `=== name ===` header.
///
/// The requested palette name is ignored; the reverse flag, colour space and
/// options apply to every palette.
pub fn render_gallery(grid: &PixelGrid, palettes: &PaletteTable, request: &RenderRequest<'_>) -> Result<String> {
    let mut sections = Vec::with_capacity(palettes.len());
    for name in palettes.names() {
        let single = RenderRequest {
            palette: Some(name),
            ..*request
        };
        let art = render_grid(grid, palettes, &single)?;
        sections.push(format!("=== {} ===\n{}\n", name, art));
    }
    Ok(sections.join("\n"))
}
