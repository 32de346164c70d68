//! Glyph rasterization into fixed-size pixel grids.

use image::{GrayImage, Luma};

use crate::error::{LogoError, Result};
use crate::types::PixelGrid;

use super::{FontSpec, GlyphSource};

/// Coverage above this value counts as ink.
const INK_THRESHOLD: u8 = 127;

/// Renders single characters into `grid_width`x`grid_height` pixel grids.
#[derive(Debug)]
pub struct GlyphRasterizer<'a, S: GlyphSource + ?Sized> {
    source: &'a S,
    grid_width: usize,
    grid_height: usize,
    extra_offset: (i32, i32),
}

impl<'a, S: GlyphSource + ?Sized> GlyphRasterizer<'a, S> {
    /// Create a rasterizer with an explicit grid size and extra offset.
    pub fn new(source: &'a S, grid_width: usize, grid_height: usize, extra_offset: (i32, i32)) -> Self {
        Self {
            source,
            grid_width,
            grid_height,
            extra_offset,
        }
    }

    /// Create a rasterizer using a catalog font's grid and offset.
    pub fn for_spec(source: &'a S, spec: &FontSpec) -> Self {
        Self::new(
            source,
            spec.grid_width,
            spec.grid_height,
            (spec.offset_x, spec.offset_y),
        )
    }

    pub fn grid_size(&self) -> (usize, usize) {
        (self.grid_width, self.grid_height)
    }

    /// Rasterize one character.
    ///
    /// Whitespace is always blank. A visible character that produces no ink
    /// (missing glyph) comes back as a one-pixel frame around the grid.
    pub fn rasterize(&self, ch: char) -> Result<PixelGrid> {
        let (width, height) = (self.grid_width, self.grid_height);
        if width == 0 || height == 0 {
            return Err(LogoError::Render {
                message: format!("Cannot rasterize '{}' into a {}x{} grid", ch, width, height),
                help: None,
            });
        }

        if ch.is_whitespace() {
            return Ok(PixelGrid::new(width, height));
        }

        let canvas = self.draw(ch)?;
        let mut grid = PixelGrid::new(width, height);
        for (x, y, pixel) in canvas.enumerate_pixels() {
            if pixel.0[0] > INK_THRESHOLD {
                grid.set(x as usize, y as usize, true);
            }
        }

        if grid.count_on() == 0 {
            return Ok(PixelGrid::frame(width, height));
        }
        Ok(grid)
    }

    /// Draw the glyph's coverage onto a greyscale canvas of the grid size.
    fn draw(&self, ch: char) -> Result<GrayImage> {
        let to_u32 = |n: usize| {
            u32::try_from(n).map_err(|_| LogoError::Render {
                message: format!("Grid dimension {} is too large", n),
                help: None,
            })
        };
        let mut canvas = GrayImage::new(to_u32(self.grid_width)?, to_u32(self.grid_height)?);

        let Some(glyph) = self.source.glyph(ch) else {
            return Ok(canvas);
        };

        // The draw origin is shifted back by the glyph's own offset plus the
        // catalog offset, so ink lands at (-extra_x, -extra_y).
        let origin_x = -(glyph.offset_x + self.extra_offset.0);
        let origin_y = -(glyph.offset_y + self.extra_offset.1);

        for gy in 0..glyph.height {
            for gx in 0..glyph.width {
                let value = glyph.coverage_at(gx, gy);
                if value == 0 {
                    continue;
                }
                let x = origin_x + glyph.offset_x + gx as i32;
                let y = origin_y + glyph.offset_y + gy as i32;
                let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
                    continue;
                };
                if x < canvas.width() && y < canvas.height() {
                    let existing = canvas.get_pixel(x, y).0[0];
                    canvas.put_pixel(x, y, Luma([existing.max(value)]));
                }
            }
        }

        Ok(canvas)
    }
}
