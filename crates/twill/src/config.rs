//! Theme configuration
//!
//! Mirrors the utility-DSL config shape: color families (single values
//! or shade scales), spacing / font-size / border-radius scales,
//! breakpoint thresholds, and an additive `extend` block. Instances
//! double as patches: `Default` is empty, and [`ThemeConfig::merge`]
//! deep-merges a patch into an active configuration (map-valued keys
//! merge recursively, scalars replace).

use std::path::Path;

use ahash::AHashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::TwillError;
use crate::tables::palette::CHROMATIC_FAMILIES;

/// One color family: either a single value or a shade scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
    Single(String),
    Scale(AHashMap<String, String>),
}

/// The additive `extend` block; consulted before the base scales.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeScales {
    pub colors: AHashMap<String, ColorEntry>,
    pub spacing: AHashMap<String, f64>,
    pub font_size: AHashMap<String, f64>,
    pub border_radius: AHashMap<String, f64>,
    pub breakpoints: AHashMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub colors: AHashMap<String, ColorEntry>,
    pub spacing: AHashMap<String, f64>,
    pub font_size: AHashMap<String, f64>,
    pub border_radius: AHashMap<String, f64>,
    pub breakpoints: AHashMap<String, f64>,
    pub extend: ThemeScales,
}

// --- Built-in defaults ------------------------------------------------------

static DEFAULT_SPACING: &[(&str, f64)] = &[
    ("0", 0.0),
    ("0.5", 2.0),
    ("1", 4.0),
    ("1.5", 6.0),
    ("2", 8.0),
    ("2.5", 10.0),
    ("3", 12.0),
    ("3.5", 14.0),
    ("4", 16.0),
    ("5", 20.0),
    ("6", 24.0),
    ("7", 28.0),
    ("8", 32.0),
    ("9", 36.0),
    ("10", 40.0),
    ("11", 44.0),
    ("12", 48.0),
    ("14", 56.0),
    ("16", 64.0),
    ("20", 80.0),
    ("24", 96.0),
    ("28", 112.0),
    ("32", 128.0),
    ("36", 144.0),
    ("40", 160.0),
    ("44", 176.0),
    ("48", 192.0),
    ("52", 208.0),
    ("56", 224.0),
    ("60", 240.0),
    ("64", 256.0),
    ("72", 288.0),
    ("80", 320.0),
    ("96", 384.0),
    ("px", 1.0),
];

static DEFAULT_FONT_SIZE: &[(&str, f64)] = &[
    ("xs", 12.0),
    ("sm", 14.0),
    ("base", 16.0),
    ("lg", 18.0),
    ("xl", 20.0),
    ("2xl", 24.0),
    ("3xl", 30.0),
    ("4xl", 36.0),
    ("5xl", 48.0),
    ("6xl", 60.0),
    ("7xl", 72.0),
    ("8xl", 96.0),
    ("9xl", 128.0),
];

static DEFAULT_BORDER_RADIUS: &[(&str, f64)] = &[
    ("none", 0.0),
    ("sm", 2.0),
    ("DEFAULT", 4.0),
    ("md", 6.0),
    ("lg", 8.0),
    ("xl", 12.0),
    ("2xl", 16.0),
    ("3xl", 24.0),
    ("full", 9999.0),
];

static DEFAULT_BREAKPOINTS: &[(&str, f64)] = &[
    ("sm", 640.0),
    ("md", 768.0),
    ("lg", 1024.0),
    ("xl", 1280.0),
    ("2xl", 1536.0),
];

fn literal_scale(entries: &[(&str, f64)]) -> AHashMap<String, f64> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

static STANDARD: Lazy<ThemeConfig> = Lazy::new(|| {
    let mut colors = AHashMap::with_capacity(CHROMATIC_FAMILIES.len());
    for (family, shades) in CHROMATIC_FAMILIES {
        let scale = shades
            .iter()
            .map(|(shade, hex)| (shade.to_string(), hex.to_string()))
            .collect();
        colors.insert(family.to_string(), ColorEntry::Scale(scale));
    }
    ThemeConfig {
        colors,
        spacing: literal_scale(DEFAULT_SPACING),
        font_size: literal_scale(DEFAULT_FONT_SIZE),
        border_radius: literal_scale(DEFAULT_BORDER_RADIUS),
        breakpoints: literal_scale(DEFAULT_BREAKPOINTS),
        extend: ThemeScales::default(),
    }
});

fn merge_color_maps(
    base: &mut AHashMap<String, ColorEntry>,
    patch: AHashMap<String, ColorEntry>,
) {
    for (family, patch_entry) in patch {
        let merged = match (base.remove(&family), patch_entry) {
            (Some(ColorEntry::Scale(mut existing)), ColorEntry::Scale(new)) => {
                existing.extend(new);
                ColorEntry::Scale(existing)
            }
            (_, replacement) => replacement,
        };
        base.insert(family, merged);
    }
}

impl ThemeConfig {
    /// The built-in theme: the chromatic palette plus the standard
    /// spacing, font-size, radius, and breakpoint scales.
    #[must_use]
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Deep-merge a patch into this configuration. Color scales merge
    /// shade-by-shade; every other map merges key-by-key with patch
    /// values replacing existing ones.
    pub fn merge(&mut self, patch: ThemeConfig) {
        merge_color_maps(&mut self.colors, patch.colors);
        self.spacing.extend(patch.spacing);
        self.font_size.extend(patch.font_size);
        self.border_radius.extend(patch.border_radius);
        self.breakpoints.extend(patch.breakpoints);

        merge_color_maps(&mut self.extend.colors, patch.extend.colors);
        self.extend.spacing.extend(patch.extend.spacing);
        self.extend.font_size.extend(patch.extend.font_size);
        self.extend.border_radius.extend(patch.extend.border_radius);
        self.extend.breakpoints.extend(patch.extend.breakpoints);
    }

    /// Deep-flatten the palette to `family-shade` keys. Base colors
    /// first, `extend.colors` layered over them.
    #[must_use]
    pub fn flattened_colors(&self) -> AHashMap<String, String> {
        let mut flat = AHashMap::with_capacity(256);
        for colors in [&self.colors, &self.extend.colors] {
            for (family, entry) in colors {
                match entry {
                    ColorEntry::Single(value) => {
                        flat.insert(family.clone(), value.clone());
                    }
                    ColorEntry::Scale(scale) => {
                        for (shade, value) in scale {
                            flat.insert(format!("{family}-{shade}"), value.clone());
                        }
                    }
                }
            }
        }
        flat
    }

    /// Scale lookups consult `extend` first, then the base scale.
    #[must_use]
    pub fn spacing_value(&self, key: &str) -> Option<f64> {
        self.extend.spacing.get(key).or_else(|| self.spacing.get(key)).copied()
    }

    #[must_use]
    pub fn font_size_value(&self, key: &str) -> Option<f64> {
        self.extend.font_size.get(key).or_else(|| self.font_size.get(key)).copied()
    }

    #[must_use]
    pub fn radius_value(&self, key: &str) -> Option<f64> {
        self.extend
            .border_radius
            .get(key)
            .or_else(|| self.border_radius.get(key))
            .copied()
    }

    /// Breakpoints in ascending width order (extend entries override
    /// same-named base entries).
    #[must_use]
    pub fn breakpoints_ascending(&self) -> Vec<(String, f64)> {
        let mut merged = self.breakpoints.clone();
        merged.extend(self.extend.breakpoints.clone());
        let mut ordered: Vec<(String, f64)> = merged.into_iter().collect();
        ordered.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        ordered
    }

    /// Parse a configuration (or patch) from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, TwillError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration (or patch) from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TwillError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| {
            tracing::error!(path = %path.display(), error = %source, "Failed to read theme config");
            TwillError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_palette_includes_blue_500() {
        let config = ThemeConfig::standard();
        let flat = config.flattened_colors();
        assert_eq!(flat.get("blue-500").map(String::as_str), Some("#3b82f6"));
        assert_eq!(flat.get("rose-950").map(String::as_str), Some("#4c0519"));
    }

    #[test]
    fn test_merge_extends_color_scales() {
        let mut config = ThemeConfig::standard();
        let mut shades = AHashMap::new();
        shades.insert("500".to_string(), "#0000ff".to_string());
        let mut patch = ThemeConfig::default();
        patch.colors.insert("blue".to_string(), ColorEntry::Scale(shades));

        config.merge(patch);
        let flat = config.flattened_colors();
        assert_eq!(flat.get("blue-500").map(String::as_str), Some("#0000ff"));
        // Untouched shades of the same family survive the merge.
        assert_eq!(flat.get("blue-100").map(String::as_str), Some("#dbeafe"));
    }

    #[test]
    fn test_merge_replaces_single_colors_and_scalars() {
        let mut config = ThemeConfig::standard();
        let mut patch = ThemeConfig::default();
        patch
            .colors
            .insert("brand".to_string(), ColorEntry::Single("#111111".to_string()));
        patch.spacing.insert("4".to_string(), 20.0);
        config.merge(patch);

        assert_eq!(config.spacing_value("4"), Some(20.0));
        assert_eq!(
            config.flattened_colors().get("brand").map(String::as_str),
            Some("#111111")
        );
    }

    #[test]
    fn test_extend_scale_consulted_first() {
        let mut config = ThemeConfig::standard();
        let mut patch = ThemeConfig::default();
        patch.extend.spacing.insert("4".to_string(), 99.0);
        config.merge(patch);

        assert_eq!(config.spacing_value("4"), Some(99.0));
        assert_eq!(config.spacing_value("8"), Some(32.0));
    }

    #[test]
    fn test_breakpoints_ascending_order() {
        let config = ThemeConfig::standard();
        let ordered = config.breakpoints_ascending();
        let names: Vec<&str> = ordered.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["sm", "md", "lg", "xl", "2xl"]);
    }

    #[test]
    fn test_from_json_patch() {
        let patch = ThemeConfig::from_json(
            r##"{
                "colors": { "brand": "#123456", "ocean": { "500": "#0ea5e9" } },
                "spacing": { "18": 72 }
            }"##,
        )
        .expect("patch should parse");

        assert_eq!(patch.spacing.get("18"), Some(&72.0));
        assert!(matches!(patch.colors.get("brand"), Some(ColorEntry::Single(_))));
        assert!(matches!(patch.colors.get("ocean"), Some(ColorEntry::Scale(_))));
        assert!(patch.font_size.is_empty(), "absent fields should stay empty in a patch");
    }

    #[test]
    fn test_from_json_file_roundtrip() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "extend": {{ "spacing": {{ "18": 72 }} }} }}"#).expect("write");

        let patch = ThemeConfig::from_json_file(file.path()).expect("file should parse");
        assert_eq!(patch.extend.spacing.get("18"), Some(&72.0));

        let missing = ThemeConfig::from_json_file("/nonexistent/twill.json");
        assert!(matches!(missing, Err(TwillError::ConfigRead { .. })));
    }
}
