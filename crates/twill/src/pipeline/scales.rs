//! Configuration-derived utility classes.
//!
//! Tokens whose suffix indexes one of the configured scales: spacing
//! (padding, margin, sizing, gap), font size, and border radius. Scale
//! values are unitless native pixels; lookups consult `extend` before
//! the base scale.

use crate::record::{StyleProp, StyleRecord};

use super::{ResolveCx, Resolver};

// Sorted for binary_search.
const SPACING_PREFIXES: &[(&str, StyleProp)] = &[
    ("gap", StyleProp::Gap),
    ("gap-x", StyleProp::ColumnGap),
    ("gap-y", StyleProp::RowGap),
    ("h", StyleProp::Height),
    ("m", StyleProp::Margin),
    ("max-h", StyleProp::MaxHeight),
    ("max-w", StyleProp::MaxWidth),
    ("mb", StyleProp::MarginBottom),
    ("min-h", StyleProp::MinHeight),
    ("min-w", StyleProp::MinWidth),
    ("ml", StyleProp::MarginLeft),
    ("mr", StyleProp::MarginRight),
    ("mt", StyleProp::MarginTop),
    ("mx", StyleProp::MarginHorizontal),
    ("my", StyleProp::MarginVertical),
    ("p", StyleProp::Padding),
    ("pb", StyleProp::PaddingBottom),
    ("pl", StyleProp::PaddingLeft),
    ("pr", StyleProp::PaddingRight),
    ("pt", StyleProp::PaddingTop),
    ("px", StyleProp::PaddingHorizontal),
    ("py", StyleProp::PaddingVertical),
    ("w", StyleProp::Width),
];

pub(crate) struct ConfigScales;

impl Resolver for ConfigScales {
    fn name(&self) -> &'static str {
        "config-scale"
    }

    fn resolve(&self, token: &str, cx: &ResolveCx<'_>) -> Option<StyleRecord> {
        let config = cx.config;

        // Bare `rounded` reads the scale's DEFAULT entry.
        if token == "rounded" {
            let radius = config.radius_value("DEFAULT")?;
            return Some(StyleRecord::new().with(StyleProp::BorderRadius, radius));
        }
        if let Some(key) = token.strip_prefix("rounded-") {
            // Per-side radius forms fall through to the static tables.
            if let Some(radius) = config.radius_value(key) {
                return Some(StyleRecord::new().with(StyleProp::BorderRadius, radius));
            }
        }
        if let Some(key) = token.strip_prefix("text-") {
            if let Some(size) = config.font_size_value(key) {
                return Some(StyleRecord::new().with(StyleProp::FontSize, size));
            }
        }

        // Spacing keys never contain `-`, so the last segment is the key.
        let (prefix, key) = token.rsplit_once('-')?;
        let idx = SPACING_PREFIXES
            .binary_search_by_key(&prefix, |(name, _)| *name)
            .ok()?;
        let value = config.spacing_value(key)?;
        Some(StyleRecord::new().with(SPACING_PREFIXES[idx].1, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;
    use crate::record::StyleValue;
    use crate::registry::UtilityRegistry;
    use ahash::AHashMap;

    fn resolve_with(config: &ThemeConfig, token: &str) -> Option<StyleRecord> {
        let flat = AHashMap::new();
        let registry = UtilityRegistry::new();
        let cx = ResolveCx {
            config,
            flat_colors: &flat,
            registry: &registry,
            is_dark: false,
            hint: None,
        };
        ConfigScales.resolve(token, &cx)
    }

    fn resolve(token: &str) -> Option<StyleRecord> {
        resolve_with(&ThemeConfig::standard(), token)
    }

    #[test]
    fn test_spacing_prefix_table_sorted() {
        for window in SPACING_PREFIXES.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "SPACING_PREFIXES must stay sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn test_spacing_scale_lookups() {
        let cases = [
            ("p-4", StyleProp::Padding, 16.0),
            ("m-0.5", StyleProp::Margin, 2.0),
            ("mx-2", StyleProp::MarginHorizontal, 8.0),
            ("py-8", StyleProp::PaddingVertical, 32.0),
            ("w-96", StyleProp::Width, 384.0),
            ("max-w-4", StyleProp::MaxWidth, 16.0),
            ("gap-x-2", StyleProp::ColumnGap, 8.0),
            ("h-px", StyleProp::Height, 1.0),
        ];
        for (token, prop, expected) in cases {
            let record = resolve(token).unwrap_or_else(|| panic!("{token} should resolve"));
            assert_eq!(
                record.get(prop),
                Some(&StyleValue::Number(expected)),
                "wrong value for {token}"
            );
        }
    }

    #[test]
    fn test_font_size_scale() {
        let record = resolve("text-sm").expect("text-sm");
        assert_eq!(record.get(StyleProp::FontSize), Some(&StyleValue::Number(14.0)));

        let record = resolve("text-9xl").expect("text-9xl");
        assert_eq!(record.get(StyleProp::FontSize), Some(&StyleValue::Number(128.0)));
    }

    #[test]
    fn test_radius_scale_and_bare_rounded() {
        let record = resolve("rounded").expect("rounded");
        assert_eq!(record.get(StyleProp::BorderRadius), Some(&StyleValue::Number(4.0)));

        let record = resolve("rounded-2xl").expect("rounded-2xl");
        assert_eq!(record.get(StyleProp::BorderRadius), Some(&StyleValue::Number(16.0)));

        let record = resolve("rounded-full").expect("rounded-full");
        assert_eq!(record.get(StyleProp::BorderRadius), Some(&StyleValue::Number(9999.0)));
    }

    #[test]
    fn test_per_side_radius_is_not_a_scale_hit() {
        assert!(resolve("rounded-t").is_none());
        assert!(resolve("rounded-tl-lg").is_none());
    }

    #[test]
    fn test_extended_scale_entries_resolve() {
        let mut config = ThemeConfig::standard();
        let mut patch = ThemeConfig::default();
        patch.extend.spacing.insert("18".to_string(), 72.0);
        config.merge(patch);

        let record = resolve_with(&config, "p-18").expect("p-18 after extend");
        assert_eq!(record.get(StyleProp::Padding), Some(&StyleValue::Number(72.0)));
    }

    #[test]
    fn test_off_scale_keys_miss() {
        assert!(resolve("p-18").is_none(), "18 is not on the standard scale");
        assert!(resolve("text-gigantic").is_none());
        assert!(resolve("flex-4").is_none());
    }
}
