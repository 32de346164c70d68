//! Gradient palettes: named, ordered lists of colour stops.

use std::collections::{BTreeMap, HashMap};

use crate::error::{LogoError, Result};

use super::Colour;

/// Name of the palette used when none is requested.
pub const DEFAULT_PALETTE_NAME: &str = "grad-blue";

/// Builtin palette definitions (name, hex stops).
const BUILTIN_PALETTES: &[(&str, &[&str])] = &[
    ("grad-blue", &["#4ea8ff", "#7f88ff"]),
    ("sunset", &["#ff9966", "#ff5e62", "#ffa34e"]),
    ("dawn", &["#00c6ff", "#0072ff"]),
    ("nebula", &["#654ea3", "#eaafc8"]),
    ("ocean", &["#667eea", "#764ba2"]),
    ("fire", &["#ff0844", "#ffb199"]),
    ("forest", &["#134e5e", "#71b280"]),
    ("gold", &["#f7971e", "#ffd200"]),
    ("purple", &["#667db6", "#0082c8", "#0078ff"]),
    ("mint", &["#00d2ff", "#3a7bd5"]),
    ("coral", &["#ff9a9e", "#fecfef"]),
    ("matrix", &["#00ff41", "#008f11"]),
    ("mono", &["#f07178", "#f07178"]),
];

/// A named gradient: at least one colour stop, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Palette name
    pub name: String,

    stops: Vec<Colour>,
}

impl Palette {
    /// Create a palette from decoded stops.
    pub fn new(name: impl Into<String>, stops: Vec<Colour>) -> Result<Self> {
        let name = name.into();
        if stops.is_empty() {
            return Err(LogoError::Config {
                message: format!("Palette '{}' has no colours", name),
                help: Some("A palette needs at least one colour stop".to_string()),
            });
        }
        Ok(Self { name, stops })
    }

    /// Create a palette from hex strings (`#rrggbb` or `#rgb`).
    pub fn from_hex<S: AsRef<str>>(name: impl Into<String>, hex: &[S]) -> Result<Self> {
        let stops = hex
            .iter()
            .map(|h| Colour::from_hex(h.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(name, stops)
    }

    /// The colour stops, first to last.
    pub fn stops(&self) -> &[Colour] {
        &self.stops
    }

    /// The same palette with its stop order reversed.
    pub fn reversed(&self) -> Self {
        let mut stops = self.stops.clone();
        stops.reverse();
        Self {
            name: self.name.clone(),
            stops,
        }
    }
}

/// All palettes available to a render, keyed by name.
#[derive(Debug, Clone)]
pub struct PaletteTable {
    palettes: BTreeMap<String, Palette>,
}

impl PaletteTable {
    /// The builtin palettes only.
    pub fn builtin() -> Self {
        let palettes = BUILTIN_PALETTES
            .iter()
            .map(|(name, hex)| {
                let stops = hex
                    .iter()
                    .filter_map(|h| Colour::from_hex(h).ok())
                    .collect();
                let palette = Palette {
                    name: (*name).to_string(),
                    stops,
                };
                ((*name).to_string(), palette)
            })
            .collect();
        Self { palettes }
    }

    /// Builtins plus user-defined palettes; user entries replace builtins of the same name.
    pub fn with_overrides(extra: &HashMap<String, Vec<String>>) -> Result<Self> {
        let mut table = Self::builtin();
        for (name, hex) in extra {
            table.insert(Palette::from_hex(name.clone(), hex.as_slice())?);
        }
        Ok(table)
    }

    /// Add or replace a palette.
    pub fn insert(&mut self, palette: Palette) {
        self.palettes.insert(palette.name.clone(), palette);
    }

    /// Look up a palette by name (`None` selects the default).
    pub fn get(&self, name: Option<&str>) -> Result<&Palette> {
        let name = name.unwrap_or(DEFAULT_PALETTE_NAME);
        self.palettes
            .get(name)
            .ok_or_else(|| LogoError::not_found("Palette", name, self.names()))
    }

    /// Palette names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(|s| s.as_str())
    }

    /// Palettes in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.values()
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

impl Default for PaletteTable {
    fn default() -> Self {
        Self::builtin()
    }
}
