//! Font catalog (`fonts.json`) parsing and lookup.
//!
//! The catalog maps font names to a font file plus the pixel grid every
//! character of that font is rasterized into.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LogoError, Result};

/// The name of the catalog file inside the fonts directory.
pub const CATALOG_FILENAME: &str = "fonts.json";

/// Resolved description of one catalog font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub name: String,
    /// Font file, relative to the fonts directory.
    pub path: PathBuf,
    /// Pixel size the font is rendered at.
    pub font_size: u32,
    pub grid_width: usize,
    pub grid_height: usize,
    /// Extra pixel offset applied on top of the glyph's own origin offset.
    pub offset_x: i32,
    pub offset_y: i32,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    fonts: Vec<RawFont>,
}

#[derive(Debug, Deserialize)]
struct RawFont {
    name: String,
    path: String,
    grid_size: Option<GridSize>,
    font_size: Option<u32>,
    offset: Option<[i32; 2]>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GridSize {
    Square(usize),
    Rect([usize; 2]),
}

impl RawFont {
    fn into_spec(self) -> Result<FontSpec> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(malformed("font entry has an empty name"));
        }

        let (grid_width, grid_height) = match self.grid_size {
            Some(GridSize::Square(n)) => (n, n),
            Some(GridSize::Rect([w, h])) => (w, h),
            None => return Err(malformed(&format!("Missing grid_size for font '{}'", name))),
        };
        if grid_width == 0 || grid_height == 0 {
            return Err(malformed(&format!(
                "grid_size for font '{}' must be positive, got {}x{}",
                name, grid_width, grid_height
            )));
        }

        let [offset_x, offset_y] = self.offset.unwrap_or([0, 0]);

        let font_size = match self.font_size {
            Some(size) => size,
            None => u32::try_from(grid_height).map_err(|_| {
                malformed(&format!(
                    "grid height {} for font '{}' is too large for a font size",
                    grid_height, name
                ))
            })?,
        };

        Ok(FontSpec {
            font_size,
            name,
            path: PathBuf::from(self.path.trim()),
            grid_width,
            grid_height,
            offset_x,
            offset_y,
        })
    }
}

fn malformed(message: &str) -> LogoError {
    LogoError::Config {
        message: message.to_string(),
        help: Some(format!("Check {} syntax", CATALOG_FILENAME)),
    }
}

/// The set of fonts declared in a fonts directory, in declaration order.
#[derive(Debug, Clone)]
pub struct FontCatalog {
    fonts_dir: PathBuf,
    fonts: Vec<FontSpec>,
}

impl FontCatalog {
    /// Load `fonts.json` from a fonts directory.
    pub fn load(fonts_dir: impl AsRef<Path>) -> Result<Self> {
        let fonts_dir = fonts_dir.as_ref().to_path_buf();
        let path = fonts_dir.join(CATALOG_FILENAME);
        if !path.exists() {
            return Err(LogoError::Config {
                message: format!("fonts config not found: {}", path.display()),
                help: Some("Pass --fonts-dir or set fonts_dir in logo.yaml".to_string()),
            });
        }
        let content = std::fs::read_to_string(&path).map_err(|e| LogoError::Io {
            path: path.clone(),
            message: format!("Failed to read font catalog: {}", e),
        })?;

        Self::parse(fonts_dir, &content)
    }

    /// Parse catalog JSON; `fonts_dir` is where font paths are resolved from.
    pub fn parse(fonts_dir: impl Into<PathBuf>, content: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(content)
            .map_err(|e| malformed(&format!("Invalid font catalog: {}", e)))?;

        let mut fonts: Vec<FontSpec> = Vec::with_capacity(raw.fonts.len());
        for entry in raw.fonts {
            let spec = entry.into_spec()?;
            // Later entries with the same name replace earlier ones in place
            match fonts.iter_mut().find(|f| f.name == spec.name) {
                Some(existing) => *existing = spec,
                None => fonts.push(spec),
            }
        }

        Ok(Self {
            fonts_dir: fonts_dir.into(),
            fonts,
        })
    }

    pub fn fonts_dir(&self) -> &Path {
        &self.fonts_dir
    }

    /// Font names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fonts.iter().map(|f| f.name.as_str())
    }

    pub fn fonts(&self) -> &[FontSpec] {
        &self.fonts
    }

    /// Look up a font.
    ///
    /// `None` selects the first declared font. A name that doesn't match
    /// exactly falls back to the first number it contains, matched against
    /// each font's grid width, grid height, then font size (first font wins),
    /// so `"12px"` finds a font with a 12-pixel grid.
    pub fn get(&self, name: Option<&str>) -> Result<&FontSpec> {
        let Some(name) = name else {
            return self.fonts.first().ok_or_else(|| LogoError::Config {
                message: format!("No fonts available in {}", CATALOG_FILENAME),
                help: None,
            });
        };

        if let Some(spec) = self.fonts.iter().find(|f| f.name == name) {
            return Ok(spec);
        }

        self.fallback_by_number(name)
            .ok_or_else(|| LogoError::not_found("Font", name, self.names()))
    }

    fn fallback_by_number(&self, token: &str) -> Option<&FontSpec> {
        let n = first_number(token)?;
        self.fonts.iter().find(|f| {
            f.grid_width as u64 == n || f.grid_height as u64 == n || u64::from(f.font_size) == n
        })
    }

    /// Absolute path of a font's file, checked for existence.
    pub fn resolve_path(&self, spec: &FontSpec) -> Result<PathBuf> {
        let path = self.fonts_dir.join(&spec.path);
        if !path.exists() {
            return Err(LogoError::Config {
                message: format!("Font file not found: {}", path.display()),
                help: Some(format!("Font '{}' is declared in {}", spec.name, CATALOG_FILENAME)),
            });
        }
        Ok(path)
    }
}

/// The first run of ASCII digits in `token`, if any.
fn first_number(token: &str) -> Option<u64> {
    let start = token.find(|c: char| c.is_ascii_digit())?;
    let digits: String = token[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const CATALOG: &str = r#"{
        "fonts": [
            {"name": "7px", "path": "fusion-7.ttf", "grid_size": 7},
            {"name": "12px", "path": "zpix.ttf", "grid_size": [12, 13], "font_size": 12, "offset": [0, 1]},
            {"name": "wide", "path": "wide.ttf", "grid_size": [16, 9], "font_size": 20}
        ]
    }"#;

    fn catalog() -> FontCatalog {
        FontCatalog::parse("fonts", CATALOG).unwrap()
    }

    #[test]
    fn test_parse_catalog() {
        let catalog = catalog();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["7px", "12px", "wide"]);

        let seven = &catalog.fonts()[0];
        assert_eq!(seven.grid_width, 7);
        assert_eq!(seven.grid_height, 7);
        assert_eq!(seven.font_size, 7);
        assert_eq!((seven.offset_x, seven.offset_y), (0, 0));

        let twelve = &catalog.fonts()[1];
        assert_eq!((twelve.grid_width, twelve.grid_height), (12, 13));
        assert_eq!(twelve.offset_y, 1);
    }

    #[test]
    fn test_get_default_is_first() {
        assert_eq!(catalog().get(None).unwrap().name, "7px");
    }

    #[test]
    fn test_get_exact() {
        assert_eq!(catalog().get(Some("wide")).unwrap().name, "wide");
    }

    #[test]
    fn test_get_numeric_fallback() {
        let catalog = catalog();
        // grid height 13 belongs to "12px"
        assert_eq!(catalog.get(Some("size13")).unwrap().name, "12px");
        // font size 20 belongs to "wide"
        assert_eq!(catalog.get(Some("20")).unwrap().name, "wide");
        // grid width 7 wins before anything else
        assert_eq!(catalog.get(Some("font-7-bold")).unwrap().name, "7px");
    }

    #[test]
    fn test_get_unknown_lists_names() {
        let err = catalog().get(Some("comic")).unwrap_err();
        match err {
            LogoError::Lookup { message, help } => {
                assert!(message.contains("comic"));
                assert_eq!(help.as_deref(), Some("Available: 7px, 12px, wide"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(catalog().get(Some("99px")).is_err());
    }

    #[test]
    fn test_missing_grid_size_is_config_error() {
        let err = FontCatalog::parse("fonts", r#"{"fonts":[{"name":"x","path":"x.ttf"}]}"#)
            .unwrap_err();
        assert!(matches!(err, LogoError::Config { .. }));
    }

    #[test]
    fn test_bad_grid_size_is_config_error() {
        let zero = r#"{"fonts":[{"name":"x","path":"x.ttf","grid_size":0}]}"#;
        assert!(matches!(
            FontCatalog::parse("fonts", zero).unwrap_err(),
            LogoError::Config { .. }
        ));

        let triple = r#"{"fonts":[{"name":"x","path":"x.ttf","grid_size":[1,2,3]}]}"#;
        assert!(FontCatalog::parse("fonts", triple).is_err());
    }

    #[test]
    fn test_empty_catalog_default_fails() {
        let catalog = FontCatalog::parse("fonts", r#"{"fonts": []}"#).unwrap();
        assert!(catalog.get(None).is_err());
    }

    #[test]
    fn test_load_missing_catalog() {
        let dir = tempdir().unwrap();
        let err = FontCatalog::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("fonts config not found"));
    }

    #[test]
    fn test_load_and_resolve_path() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CATALOG_FILENAME), CATALOG).unwrap();
        std::fs::write(dir.path().join("fusion-7.ttf"), b"not really a font").unwrap();

        let catalog = FontCatalog::load(dir.path()).unwrap();
        let seven = catalog.get(Some("7px")).unwrap();
        assert_eq!(
            catalog.resolve_path(seven).unwrap(),
            dir.path().join("fusion-7.ttf")
        );

        let twelve = catalog.get(Some("12px")).unwrap();
        let err = catalog.resolve_path(twelve).unwrap_err();
        assert!(err.to_string().contains("Font file not found"));
    }

    #[test]
    fn test_first_number() {
        assert_eq!(first_number("abc12def34"), Some(12));
        assert_eq!(first_number("none"), None);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_oversized_grid_height_is_config_error() {
        let json = r#"{"fonts":[{"name":"huge","path":"h.ttf","grid_size":[1,4294967296]}]}"#;
        let err = FontCatalog::parse("fonts", json).unwrap_err();
        assert!(matches!(err, LogoError::Config { .. }));
        assert!(err.to_string().contains("too large"));

        let json = r#"{"fonts":[{"name":"huge","path":"h.ttf","grid_size":[1,4294967296],"font_size":12}]}"#;
        assert_eq!(FontCatalog::parse("fonts", json).unwrap().fonts()[0].font_size, 12);
    }
}
