//! Glyph sources: where the rasterizer gets glyph coverage from.

use std::path::Path;

use fontdue::{Font, FontSettings};

use crate::error::{LogoError, Result};

/// An anti-aliased glyph image and where its ink sits relative to the draw origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    pub width: usize,
    pub height: usize,
    /// Offset of the ink box's top-left corner from the top-left draw origin.
    pub offset_x: i32,
    pub offset_y: i32,
    /// Row-major coverage, 0-255, `width * height` bytes.
    pub coverage: Vec<u8>,
}

impl GlyphBitmap {
    /// Coverage at `(x, y)` inside the bitmap.
    pub fn coverage_at(&self, x: usize, y: usize) -> u8 {
        if x < self.width && y < self.height {
            self.coverage[y * self.width + x]
        } else {
            0
        }
    }
}

/// Anything that can produce glyph bitmaps for characters.
pub trait GlyphSource {
    /// The glyph for `ch`, or `None` if the source has no glyph for it.
    fn glyph(&self, ch: char) -> Option<GlyphBitmap>;
}

/// A font file loaded through `fontdue` at a fixed pixel size.
pub struct FontFace {
    font: Font,
    px: f32,
    ascent: f32,
}

impl FontFace {
    /// Load and parse a font file.
    pub fn load(path: &Path, font_size: u32) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| LogoError::Config {
            message: format!("Failed to read font file {}: {}", path.display(), e),
            help: None,
        })?;

        Self::from_bytes(&bytes, font_size).map_err(|e| match e {
            LogoError::Config { message, help } => LogoError::Config {
                message: format!("{} ({})", message, path.display()),
                help,
            },
            other => other,
        })
    }

    /// Parse font data held in memory.
    pub fn from_bytes(bytes: &[u8], font_size: u32) -> Result<Self> {
        let px = font_size.max(1) as f32;
        let settings = FontSettings {
            scale: px,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(bytes, settings).map_err(|e| LogoError::Config {
            message: format!("Unreadable font: {}", e),
            help: Some("Font files must be TrueType or OpenType".to_string()),
        })?;

        let ascent = font
            .horizontal_line_metrics(px)
            .map(|m| m.ascent)
            .unwrap_or(px);

        Ok(Self { font, px, ascent })
    }
}

impl GlyphSource for FontFace {
    fn glyph(&self, ch: char) -> Option<GlyphBitmap> {
        if self.font.lookup_glyph_index(ch) == 0 {
            return None;
        }

        let (metrics, coverage) = self.font.rasterize(ch, self.px);
        let height = metrics.height as i32;

        // fontdue measures ymin up from the baseline; flip to top-down.
        let top = self.ascent.round() as i32 - (metrics.ymin + height);

        Some(GlyphBitmap {
            width: metrics.width,
            height: metrics.height,
            offset_x: metrics.xmin,
            offset_y: top,
            coverage,
        })
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("px", &self.px)
            .field("ascent", &self.ascent)
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_config_error() {
        let dir = tempdir().unwrap();
        let err = FontFace::load(&dir.path().join("missing.ttf"), 12).unwrap_err();
        assert!(matches!(err, LogoError::Config { .. }));
    }

    #[test]
    fn test_load_garbage_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();

        let err = FontFace::load(&path, 12).unwrap_err();
        match err {
            LogoError::Config { message, .. } => assert!(message.contains("garbage.ttf")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_coverage_at_outside_is_zero() {
        let bitmap = GlyphBitmap {
            width: 1,
            height: 1,
            offset_x: 0,
            offset_y: 0,
            coverage: vec![200],
        };
        assert_eq!(bitmap.coverage_at(0, 0), 200);
        assert_eq!(bitmap.coverage_at(1, 0), 0);
    }
}
