//! Rendering mode enums.
//!
//! Each mode is parsed once from its user-facing spelling (including
//! synonyms) and used as a closed enum from then on.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{LogoError, Result};

/// How the on/off cells of the canvas are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum StyleMode {
    /// Fill glyph for ink, blank otherwise.
    None,
    /// `_|` for ink; always half-full width.
    SimpleBlock,
    /// Ink plus a `░` shade background.
    Shade,
    /// Ink plus box-drawing edges that give a raised look.
    #[default]
    Block3D,
}

/// How many terminal cells one pixel takes, and which glyphs fill it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum PixelWidthMode {
    /// One cell per pixel.
    #[default]
    Half,
    /// Two cells per pixel, full-width space for off pixels.
    Full,
    /// Two cells per pixel, two ordinary spaces for off pixels.
    HalfFull,
}

/// Axis the gradient runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Direction {
    Horizontal,
    #[default]
    Vertical,
    Diagonal,
}

/// Space in which gradient stops are interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ColorSpace {
    #[default]
    Rgb,
    Oklab,
}

impl PixelWidthMode {
    /// Terminal cells per pixel.
    pub fn cell_cols(self) -> usize {
        match self {
            PixelWidthMode::Half => 1,
            PixelWidthMode::Full | PixelWidthMode::HalfFull => 2,
        }
    }

    /// Glyph for a lit pixel.
    pub fn fill(self) -> &'static str {
        match self {
            PixelWidthMode::Half => "█",
            PixelWidthMode::Full | PixelWidthMode::HalfFull => "██",
        }
    }

    /// Glyph for an unlit pixel.
    pub fn empty(self) -> &'static str {
        match self {
            PixelWidthMode::Half => " ",
            PixelWidthMode::Full => "\u{3000}",
            PixelWidthMode::HalfFull => "  ",
        }
    }
}

impl StyleMode {
    /// The pixel width actually used for this style.
    pub fn effective_width(self, requested: PixelWidthMode) -> PixelWidthMode {
        match self {
            StyleMode::SimpleBlock => PixelWidthMode::HalfFull,
            _ => requested,
        }
    }

    /// Every style except `None` renders one synthetic blank row below the canvas.
    pub fn has_trailing_row(self) -> bool {
        !matches!(self, StyleMode::None)
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

fn unknown(kind: &str, value: &str, valid: &str) -> LogoError {
    LogoError::Parse {
        message: format!("Unknown {}: '{}'", kind, value),
        help: Some(format!("Expected one of: {}", valid)),
    }
}

impl FromStr for StyleMode {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "none" | "plain" => Ok(StyleMode::None),
            "simpleblock" | "simple" | "sb" => Ok(StyleMode::SimpleBlock),
            "shade" | "shaded" | "shadow" => Ok(StyleMode::Shade),
            "block" | "block3d" | "3d" | "b" => Ok(StyleMode::Block3D),
            _ => Err(unknown("style", s, "none, simpleBlock, shade, block")),
        }
    }
}

impl FromStr for PixelWidthMode {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "h" | "half" => Ok(PixelWidthMode::Half),
            "f" | "full" => Ok(PixelWidthMode::Full),
            "hf" | "halffull" => Ok(PixelWidthMode::HalfFull),
            _ => Err(unknown("pixel width", s, "h, f, hf")),
        }
    }
}

impl FromStr for Direction {
    type Err = LogoError;

    /// Unrecognised directions blend both axes, like `diagonal`.
    fn from_str(s: &str) -> Result<Self> {
        Ok(match normalize(s).as_str() {
            "horizontal" | "h" => Direction::Horizontal,
            "vertical" | "v" => Direction::Vertical,
            _ => Direction::Diagonal,
        })
    }
}

impl FromStr for ColorSpace {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "rgb" => Ok(ColorSpace::Rgb),
            "oklab" => Ok(ColorSpace::Oklab),
            _ => Err(unknown("color space", s, "rgb, oklab")),
        }
    }
}

macro_rules! string_conversions {
    ($($ty:ty),*) => {$(
        impl TryFrom<String> for $ty {
            type Error = LogoError;

            fn try_from(value: String) -> Result<Self> {
                value.parse()
            }
        }
    )*};
}

string_conversions!(StyleMode, PixelWidthMode, Direction, ColorSpace);

impl fmt::Display for StyleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StyleMode::None => "none",
            StyleMode::SimpleBlock => "simpleBlock",
            StyleMode::Shade => "shade",
            StyleMode::Block3D => "block",
        })
    }
}

impl fmt::Display for PixelWidthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PixelWidthMode::Half => "h",
            PixelWidthMode::Full => "f",
            PixelWidthMode::HalfFull => "hf",
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::Diagonal => "diagonal",
        })
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Oklab => "oklab",
        })
    }
}
