//! Permissive fallback tiers.
//!
//! `Special` absorbs the concepts the flat style model cannot express
//! (gradients, interaction and animation utilities) with a warning and
//! an explicit degraded result, and handles the two literal suffix
//! forms: percentage dimensions (`w-50%`) and slash opacity
//! (`bg-black/50`). `UnitSuffix` converts `prefix-<number><unit>`
//! tokens for the known dimension prefixes.

use crate::color::{apply_opacity, resolve_color};
use crate::record::{StyleProp, StyleRecord};
use crate::tables::palette::{BASIC_NAMED, THEME_AWARE};
use crate::units;

use super::{ResolveCx, Resolver, color_prop, dimension_props};

// Sorted for binary_search.
const PERCENT_PREFIXES: &[(&str, StyleProp)] = &[
    ("h", StyleProp::Height),
    ("max-h", StyleProp::MaxHeight),
    ("max-w", StyleProp::MaxWidth),
    ("min-h", StyleProp::MinHeight),
    ("min-w", StyleProp::MinWidth),
    ("w", StyleProp::Width),
];

fn is_gradient(token: &str) -> bool {
    token.starts_with("bg-gradient")
        || token.starts_with("from-")
        || token.starts_with("via-")
        || token.starts_with("to-")
}

fn is_interactive_or_animated(token: &str) -> bool {
    token.starts_with("hover:")
        || token.starts_with("transition")
        || token.starts_with("duration-")
        || token.starts_with("ease-")
}

/// Degrade a gradient stop to the flat color of the most specific
/// family name found inside the token. Chromatic families use their
/// mid-shade value; white, black, and the gray-like shades follow the
/// active theme.
fn gradient_fallback(token: &str, is_dark: bool) -> StyleRecord {
    let mut flat: Option<&str> = None;
    let mut matched = 0;
    for &(family, hex) in BASIC_NAMED {
        if family.len() > matched && token.contains(family) {
            flat = Some(hex);
            matched = family.len();
        }
    }
    for &(name, light, dark) in THEME_AWARE {
        if name.len() >= matched && token.contains(name) {
            flat = Some(if is_dark { dark } else { light });
            matched = name.len();
        }
    }
    if let Some(hex) = flat {
        tracing::warn!(
            class = token,
            fallback = hex,
            suggestion = "use a flat background color",
            "Gradients are not supported"
        );
        return StyleRecord::new().with(StyleProp::BackgroundColor, hex);
    }
    tracing::warn!(
        class = token,
        suggestion = "use a flat background color",
        "Gradients are not supported"
    );
    StyleRecord::new()
}

fn percentage_dimension(token: &str) -> Option<StyleRecord> {
    let (prefix, raw) = token.rsplit_once('-')?;
    let idx = PERCENT_PREFIXES
        .binary_search_by_key(&prefix, |(name, _)| *name)
        .ok()?;
    let magnitude = raw.strip_suffix('%')?;
    magnitude.parse::<f64>().ok()?;
    Some(StyleRecord::new().with(PERCENT_PREFIXES[idx].1, raw))
}

/// `bg-black/50` → resolve the color token, then compose the opacity.
fn slash_opacity(token: &str, cx: &ResolveCx<'_>) -> Option<StyleRecord> {
    let (color_token, pct_raw) = token.rsplit_once('/')?;
    let pct = pct_raw.parse::<f64>().ok()?;
    let (prefix, remainder) = color_token.split_once('-')?;
    let prop = color_prop(prefix, cx.hint)?;
    let base = resolve_color(cx.flat_colors, remainder, cx.is_dark)?;
    let composed = apply_opacity(&base, pct)?;
    Some(StyleRecord::new().with(prop, composed))
}

pub(crate) struct Special;

impl Resolver for Special {
    fn name(&self) -> &'static str {
        "special-fallback"
    }

    fn resolve(&self, token: &str, cx: &ResolveCx<'_>) -> Option<StyleRecord> {
        if is_gradient(token) {
            return Some(gradient_fallback(token, cx.is_dark));
        }
        if is_interactive_or_animated(token) {
            tracing::warn!(
                class = token,
                suggestion = "drive interaction styles from component state",
                "Interactive and animated utilities are not supported"
            );
            return Some(StyleRecord::new());
        }
        if let Some(record) = percentage_dimension(token) {
            return Some(record);
        }
        slash_opacity(token, cx)
    }
}

/// `prefix-<number><unit>` for the known dimension prefixes:
/// `mt-20px`, `w-2.5rem`, `rounded-10px`. The unit is required; a bare
/// number falls through to the later tiers.
pub(crate) struct UnitSuffix;

impl Resolver for UnitSuffix {
    fn name(&self) -> &'static str {
        "unit-suffix"
    }

    fn resolve(&self, token: &str, _cx: &ResolveCx<'_>) -> Option<StyleRecord> {
        let (prefix, raw) = token.rsplit_once('-')?;
        let props = dimension_props(prefix)?;
        let value = units::to_native_unit(raw)?;
        let mut record = StyleRecord::new();
        for prop in props {
            record.set(*prop, value);
        }
        Some(record)
    }
}
