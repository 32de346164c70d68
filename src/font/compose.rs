//! Lays rasterized characters out side by side on one canvas.

use std::fmt;

use crate::error::{LogoError, Result};
use crate::types::PixelGrid;

use super::{GlyphRasterizer, GlyphSource};

/// Layout details of a composed canvas (diagnostics only).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutMeta {
    pub char_width: usize,
    pub char_height: usize,
    pub char_count: usize,
    pub letter_spacing: usize,
    /// Starting column of each character.
    pub char_offsets: Vec<usize>,
    /// Distance between the starts of consecutive characters.
    pub stride: usize,
}

impl fmt::Display for LayoutMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} char(s) of {}x{}, spacing={}, stride={}, offsets={:?}",
            self.char_count,
            self.char_width,
            self.char_height,
            self.letter_spacing,
            self.stride,
            self.char_offsets
        )
    }
}

/// A composed canvas and its layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub grid: PixelGrid,
    pub layout: LayoutMeta,
}

/// Rasterize every character of `text` and place them left to right with
/// `letter_spacing` blank columns between neighbours.
///
/// All characters are rasterized before the canvas is built, so a failure
/// never leaves a partial canvas behind. Empty text yields an empty canvas.
pub fn compose_text<S: GlyphSource + ?Sized>(
    text: &str,
    rasterizer: &GlyphRasterizer<'_, S>,
    letter_spacing: usize,
) -> Result<Composition> {
    let (char_width, char_height) = rasterizer.grid_size();

    let glyphs = text
        .chars()
        .map(|ch| rasterizer.rasterize(ch))
        .collect::<Result<Vec<PixelGrid>>>()?;

    if let Some(bad) = glyphs
        .iter()
        .find(|g| g.width() != char_width || g.height() != char_height)
    {
        return Err(LogoError::Render {
            message: format!(
                "Glyph grid is {}x{}, expected {}x{}",
                bad.width(),
                bad.height(),
                char_width,
                char_height
            ),
            help: None,
        });
    }

    let count = glyphs.len();
    let gaps = count.saturating_sub(1);
    let total_width = count
        .checked_mul(char_width)
        .zip(letter_spacing.checked_mul(gaps))
        .and_then(|(ink, spacing)| ink.checked_add(spacing))
        .ok_or_else(|| LogoError::Render {
            message: format!(
                "canvas too wide: {} char(s) of width {} with spacing {}",
                count, char_width, letter_spacing
            ),
            help: Some("Use a smaller --letter-spacing".to_string()),
        })?;

    // Every start column is at most total_width, so only a lone char can saturate.
    let stride = char_width.saturating_add(letter_spacing);
    let mut canvas = PixelGrid::new(total_width, char_height);
    let mut char_offsets = Vec::with_capacity(count);
    for (i, glyph) in glyphs.iter().enumerate() {
        let cursor = i * stride;
        char_offsets.push(cursor);
        canvas.blit(glyph, cursor, 0);
    }

    Ok(Composition {
        grid: canvas,
        layout: LayoutMeta {
            char_width,
            char_height,
            char_count: count,
            letter_spacing,
            char_offsets,
            stride,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::face::testing::AsciiGlyphs;
    use pretty_assertions::assert_eq;

    fn glyphs() -> AsciiGlyphs {
        AsciiGlyphs::default()
            .with('I', "##\n##\n##", (0, 0))
            .with('L', "#.\n#.\n##", (0, 0))
    }

    #[test]
    fn test_compose_with_spacing() {
        let source = glyphs();
        let rasterizer = GlyphRasterizer::new(&source, 2, 3, (0, 0));
        let composition = compose_text("IL", &rasterizer, 1).unwrap();

        assert_eq!(composition.grid.width(), 5);
        assert_eq!(composition.grid.height(), 3);
        assert_eq!(composition.grid.to_string(), "##.#.\n##.#.\n##.##");
        assert_eq!(composition.layout.char_offsets, vec![0, 3]);
        assert_eq!(composition.layout.stride, 3);
        assert_eq!(composition.layout.char_count, 2);
    }

    #[test]
    fn test_compose_without_spacing() {
        let source = glyphs();
        let rasterizer = GlyphRasterizer::new(&source, 2, 3, (0, 0));
        let composition = compose_text("LI", &rasterizer, 0).unwrap();
        assert_eq!(composition.grid.to_string(), "#.##\n#.##\n####");
        assert_eq!(composition.layout.char_offsets, vec![0, 2]);
    }

    #[test]
    fn test_single_char_has_no_spacing() {
        let source = glyphs();
        let rasterizer = GlyphRasterizer::new(&source, 2, 3, (0, 0));
        let composition = compose_text("I", &rasterizer, 4).unwrap();
        assert_eq!(composition.grid.width(), 2);
    }

    #[test]
    fn test_whitespace_and_missing_glyphs() {
        let source = glyphs();
        let rasterizer = GlyphRasterizer::new(&source, 3, 3, (0, 0));
        let composition = compose_text(" ?", &rasterizer, 1).unwrap();
        assert_eq!(composition.grid.to_string(), "....###\n....#.#\n....###");
    }

    #[test]
    fn test_canvas_width_formula() {
        let source = glyphs();
        let rasterizer = GlyphRasterizer::new(&source, 2, 3, (0, 0));
        for (text, spacing) in [("IIII", 2), ("ILIL", 0), ("LL", 5)] {
            let composition = compose_text(text, &rasterizer, spacing).unwrap();
            let n = text.chars().count();
            assert_eq!(composition.grid.width(), n * 2 + spacing * (n - 1));
            assert_eq!(composition.grid.height(), 3);
        }
    }

    #[test]
    fn test_huge_spacing_is_render_error() {
        let source = glyphs();
        let rasterizer = GlyphRasterizer::new(&source, 2, 3, (0, 0));
        let err = compose_text("II", &rasterizer, usize::MAX).unwrap_err();
        assert!(matches!(err, LogoError::Render { .. }));
        assert!(err.to_string().contains("canvas too wide"));

        let lone = compose_text("I", &rasterizer, usize::MAX).unwrap();
        assert_eq!(lone.grid.width(), 2);
        assert_eq!(lone.layout.char_offsets, vec![0]);
    }

    #[test]
    fn test_empty_text() {
        let source = glyphs();
        let rasterizer = GlyphRasterizer::new(&source, 2, 3, (0, 0));
        let composition = compose_text("", &rasterizer, 1).unwrap();
        assert!(composition.grid.is_empty());
        assert_eq!(composition.grid.bounding_box(), None);
        assert_eq!(composition.layout.char_count, 0);
    }

    #[test]
    fn test_layout_display() {
        let layout = LayoutMeta {
            char_width: 2,
            char_height: 3,
            char_count: 2,
            letter_spacing: 1,
            char_offsets: vec![0, 3],
            stride: 3,
        };
        assert_eq!(
            layout.to_string(),
            "2 char(s) of 2x3, spacing=1, stride=3, offsets=[0, 3]"
        );
    }
}
