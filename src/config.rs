//! Project configuration (logo.yaml) parsing.
//!
//! The config file supplies defaults for anything not given on the command
//! line, plus extra palettes. It is only ever read.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LogoError, Result};
use crate::types::{ColorSpace, Direction, PaletteTable, PixelWidthMode, StyleMode};

/// The name of the config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "logo.yaml";

/// Defaults loaded from logo.yaml.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding fonts.json and the font files.
    pub fonts_dir: PathBuf,

    /// Default font name.
    pub font: Option<String>,

    /// Default palette name.
    pub palette: Option<String>,

    pub direction: Option<Direction>,
    pub style: Option<StyleMode>,
    pub pixel_width: Option<PixelWidthMode>,
    pub letter_spacing: Option<usize>,
    pub color_space: Option<ColorSpace>,
    pub reverse_gradient: bool,

    /// Fixed terminal width instead of probing.
    pub columns: Option<usize>,

    /// Extra palettes (name -> hex stops); these replace builtins of the same name.
    pub palettes: HashMap<String, Vec<String>>,
}

fn default_fonts_dir() -> PathBuf {
    PathBuf::from("fonts")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fonts_dir: default_fonts_dir(),
            font: None,
            palette: None,
            direction: None,
            style: None,
            pixel_width: None,
            letter_spacing: None,
            color_space: None,
            reverse_gradient: false,
            columns: None,
            palettes: HashMap::new(),
        }
    }
}

impl Config {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LogoError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if given, else `logo.yaml` in `dir` if present, else defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default_path = dir.join(CONFIG_FILENAME);
        if default_path.exists() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| LogoError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Builtin palettes merged with the ones declared here.
    pub fn palette_table(&self) -> Result<PaletteTable> {
        PaletteTable::with_overrides(&self.palettes)
    }
}
