//! Tiered value resolution pipeline
//!
//! A bare token (variant prefixes already stripped) walks an ordered
//! resolver chain; the first style record wins. Specific forms come
//! first (bracketed literals, theme colors, user registrations), then
//! the configured scales and static tables, then the permissive
//! fallbacks. A token no tier recognizes contributes nothing.
//!
//! Key components:
//! - `ResolveCx`: borrowed engine state a resolver may consult
//! - `Resolver`: the per-tier attempt interface
//! - `resolve_token`: the chain walk plus the unknown-class diagnostic

pub(crate) mod arbitrary;
pub(crate) mod fallback;
pub(crate) mod scales;

use ahash::AHashMap;

use crate::color;
use crate::config::ThemeConfig;
use crate::record::{StyleProp, StyleRecord};
use crate::registry::UtilityRegistry;
use crate::tables;

/// Which native component the resolved record targets. `Image` remaps
/// the text-color family to `tintColor` and enables the object-fit
/// utilities; `Text` keeps the default mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentHint {
    Text,
    Image,
}

/// Engine state borrowed for the duration of one resolution pass.
pub(crate) struct ResolveCx<'a> {
    pub config: &'a ThemeConfig,
    pub flat_colors: &'a AHashMap<String, String>,
    pub registry: &'a UtilityRegistry,
    pub is_dark: bool,
    pub hint: Option<ComponentHint>,
}

pub(crate) trait Resolver {
    fn name(&self) -> &'static str;
    fn resolve(&self, token: &str, cx: &ResolveCx<'_>) -> Option<StyleRecord>;
}

/// The style property a color-bearing prefix writes to.
pub(crate) fn color_prop(prefix: &str, hint: Option<ComponentHint>) -> Option<StyleProp> {
    match prefix {
        "bg" => Some(StyleProp::BackgroundColor),
        "border" => Some(StyleProp::BorderColor),
        "shadow" => Some(StyleProp::ShadowColor),
        "text" if hint == Some(ComponentHint::Image) => Some(StyleProp::TintColor),
        "text" => Some(StyleProp::Color),
        _ => None,
    }
}

/// Dimension-valued prefixes shared by the bracketed-literal and
/// unit-suffix tiers. `inset` expands to all four edges.
// Sorted for binary_search.
pub(crate) const DIMENSION_PREFIXES: &[(&str, &[StyleProp])] = &[
    ("border", &[StyleProp::BorderWidth]),
    ("bottom", &[StyleProp::Bottom]),
    ("gap", &[StyleProp::Gap]),
    ("gap-x", &[StyleProp::ColumnGap]),
    ("gap-y", &[StyleProp::RowGap]),
    ("h", &[StyleProp::Height]),
    (
        "inset",
        &[StyleProp::Top, StyleProp::Right, StyleProp::Bottom, StyleProp::Left],
    ),
    ("leading", &[StyleProp::LineHeight]),
    ("left", &[StyleProp::Left]),
    ("m", &[StyleProp::Margin]),
    ("max-h", &[StyleProp::MaxHeight]),
    ("max-w", &[StyleProp::MaxWidth]),
    ("mb", &[StyleProp::MarginBottom]),
    ("min-h", &[StyleProp::MinHeight]),
    ("min-w", &[StyleProp::MinWidth]),
    ("ml", &[StyleProp::MarginLeft]),
    ("mr", &[StyleProp::MarginRight]),
    ("mt", &[StyleProp::MarginTop]),
    ("mx", &[StyleProp::MarginHorizontal]),
    ("my", &[StyleProp::MarginVertical]),
    ("p", &[StyleProp::Padding]),
    ("pb", &[StyleProp::PaddingBottom]),
    ("pl", &[StyleProp::PaddingLeft]),
    ("pr", &[StyleProp::PaddingRight]),
    ("pt", &[StyleProp::PaddingTop]),
    ("px", &[StyleProp::PaddingHorizontal]),
    ("py", &[StyleProp::PaddingVertical]),
    ("right", &[StyleProp::Right]),
    ("rounded", &[StyleProp::BorderRadius]),
    ("space-x", &[StyleProp::ColumnGap]),
    ("space-y", &[StyleProp::RowGap]),
    ("text", &[StyleProp::FontSize]),
    ("top", &[StyleProp::Top]),
    ("tracking", &[StyleProp::LetterSpacing]),
    ("w", &[StyleProp::Width]),
];

pub(crate) fn dimension_props(prefix: &str) -> Option<&'static [StyleProp]> {
    DIMENSION_PREFIXES
        .binary_search_by_key(&prefix, |(key, _)| *key)
        .ok()
        .map(|idx| DIMENSION_PREFIXES[idx].1)
}

/// Theme-aware color shorthand: `bg-blue-500`, `text-white`,
/// `border-gray-200`, `shadow-black`. Non-color remainders fall
/// through to later tiers.
struct ThemeColors;

impl Resolver for ThemeColors {
    fn name(&self) -> &'static str {
        "theme-color"
    }

    fn resolve(&self, token: &str, cx: &ResolveCx<'_>) -> Option<StyleRecord> {
        let (prefix, remainder) = token.split_once('-')?;
        let prop = color_prop(prefix, cx.hint)?;
        let resolved = color::resolve_color(cx.flat_colors, remainder, cx.is_dark)?;
        Some(StyleRecord::new().with(prop, resolved))
    }
}

/// User registrations overlay everything below them in the chain.
struct CustomRegistry;

impl Resolver for CustomRegistry {
    fn name(&self) -> &'static str {
        "registry"
    }

    fn resolve(&self, token: &str, cx: &ResolveCx<'_>) -> Option<StyleRecord> {
        cx.registry.get(token).cloned()
    }
}

/// The generated utility tables, plus the object-fit section when
/// resolving for an image.
struct StaticTables;

impl Resolver for StaticTables {
    fn name(&self) -> &'static str {
        "static-table"
    }

    fn resolve(&self, token: &str, cx: &ResolveCx<'_>) -> Option<StyleRecord> {
        if cx.hint == Some(ComponentHint::Image) {
            if let Some(record) = tables::lookup_image(token) {
                return Some(record);
            }
        }
        tables::lookup(token)
    }
}

/// The individually enumerated fallback dictionary.
struct Extras;

impl Resolver for Extras {
    fn name(&self) -> &'static str {
        "extras"
    }

    fn resolve(&self, token: &str, _cx: &ResolveCx<'_>) -> Option<StyleRecord> {
        tables::lookup_extras(token)
    }
}

static PIPELINE: &[&(dyn Resolver + Sync)] = &[
    &arbitrary::Arbitrary,
    &ThemeColors,
    &CustomRegistry,
    &scales::ConfigScales,
    &StaticTables,
    &fallback::Special,
    &fallback::UnitSuffix,
    &Extras,
];

/// Walk the resolver chain for one bare token. `None` means no tier
/// recognized it; the token contributes nothing to the final record.
pub(crate) fn resolve_token(token: &str, cx: &ResolveCx<'_>) -> Option<StyleRecord> {
    for resolver in PIPELINE {
        if let Some(record) = resolver.resolve(token, cx) {
            tracing::trace!(class = token, tier = resolver.name(), "Resolved utility class");
            return Some(record);
        }
    }
    if cfg!(debug_assertions) {
        tracing::debug!(class = token, "Unknown utility class");
    }
    None
}
