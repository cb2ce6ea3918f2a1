//! Color resolution and opacity composition
//!
//! Resolution order: flattened theme palette, explicit family-shade
//! retry, theme-aware named colors (light/dark pairs), basic named
//! colors. Returns `None` when nothing matches so the pipeline can
//! keep going.

use ahash::AHashMap;

use crate::tables::palette::{BASIC_NAMED, THEME_AWARE};

/// Resolve a color token to a concrete color string.
///
/// `flat` is the deep-flattened theme palette (`family-shade` keys,
/// `extend.colors` included). Theme-aware entries pick their light or
/// dark value from `is_dark`.
pub fn resolve_color(
    flat: &AHashMap<String, String>,
    token: &str,
    is_dark: bool,
) -> Option<String> {
    if let Some(value) = flat.get(token) {
        return Some(value.clone());
    }

    // Shade-suffixed tokens retry with the normalized family-shade key.
    if let Some((family, shade)) = token.rsplit_once('-') {
        if !shade.is_empty() && shade.bytes().all(|b| b.is_ascii_digit()) {
            let key = format!("{}-{}", family.trim().to_ascii_lowercase(), shade);
            if let Some(value) = flat.get(&key) {
                return Some(value.clone());
            }
        }
    }

    if let Ok(idx) = THEME_AWARE.binary_search_by_key(&token, |(key, _, _)| *key) {
        let (_, light, dark) = THEME_AWARE[idx];
        return Some(if is_dark { dark } else { light }.to_string());
    }

    if let Ok(idx) = BASIC_NAMED.binary_search_by_key(&token, |(key, _)| *key) {
        return Some(BASIC_NAMED[idx].1.to_string());
    }

    None
}

/// Parse a bracketed color literal (`#3b82f6`, `rgb(...)`, `rgba(...)`,
/// or a basic color name). Literals stay literal, so no theming here.
pub fn parse_arbitrary_color(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        let lower = hex.to_ascii_lowercase();
        if matches!(lower.len(), 3 | 4 | 6 | 8) && lower.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Some(format!("#{lower}"));
        }
        return None;
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("rgb(") || lower.starts_with("rgba(") {
        return Some(trimmed.to_string());
    }
    match lower.as_str() {
        "white" => return Some("#ffffff".to_string()),
        "black" => return Some("#000000".to_string()),
        _ => {}
    }
    BASIC_NAMED
        .binary_search_by_key(&lower.as_str(), |(key, _)| *key)
        .ok()
        .map(|idx| BASIC_NAMED[idx].1.to_string())
}

// --- Opacity composition --------------------------------------------------

fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let bytes = hex.as_bytes();
    let component = |pair: &str| u8::from_str_radix(pair, 16).ok();
    match bytes.len() {
        // Short forms expand each digit (f -> ff).
        3 | 4 => {
            let expand = |b: u8| {
                let digit = (b as char).to_digit(16)? as u8;
                Some(digit * 16 + digit)
            };
            Some((expand(bytes[0])?, expand(bytes[1])?, expand(bytes[2])?))
        }
        // Long forms read pairs; a trailing alpha pair is ignored.
        6 | 8 => Some((
            component(hex.get(0..2)?)?,
            component(hex.get(2..4)?)?,
            component(hex.get(4..6)?)?,
        )),
        _ => None,
    }
}

fn format_alpha(alpha: f64) -> String {
    format!("{alpha}")
}

fn split_function_args(color: &str) -> Option<Vec<&str>> {
    let open = color.find('(')?;
    let close = color.rfind(')')?;
    if close <= open + 1 {
        return None;
    }
    Some(color[open + 1..close].split(',').map(str::trim).collect())
}

/// Compose an alpha channel onto a resolved color.
///
/// `pct` is a 0–100 percentage. Hex colors expand to
/// `rgba(r, g, b, alpha)`, existing `rgba(...)` values have their
/// trailing alpha replaced, `rgb(...)` gains an alpha, and
/// `transparent` is returned unchanged. Out-of-range percentages are
/// no match.
pub fn apply_opacity(color: &str, pct: f64) -> Option<String> {
    if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
        return None;
    }
    let alpha = format_alpha(pct / 100.0);
    let trimmed = color.trim();

    if trimmed.eq_ignore_ascii_case("transparent") {
        return Some("transparent".to_string());
    }
    if let Some(hex) = trimmed.strip_prefix('#') {
        let (r, g, b) = parse_hex_rgb(hex)?;
        return Some(format!("rgba({r}, {g}, {b}, {alpha})"));
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("rgba(") {
        let args = split_function_args(trimmed)?;
        if args.len() != 4 {
            return None;
        }
        return Some(format!("rgba({}, {}, {}, {alpha})", args[0], args[1], args[2]));
    }
    if lower.starts_with("rgb(") {
        let args = split_function_args(trimmed)?;
        if args.len() != 3 {
            return None;
        }
        return Some(format!("rgba({}, {}, {}, {alpha})", args[0], args[1], args[2]));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_with(entries: &[(&str, &str)]) -> AHashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_flattened_palette_wins_first() {
        let flat = flat_with(&[("blue-500", "#3b82f6"), ("primary", "#123456")]);
        assert_eq!(resolve_color(&flat, "blue-500", false).as_deref(), Some("#3b82f6"));
        assert_eq!(resolve_color(&flat, "primary", false).as_deref(), Some("#123456"));
    }

    #[test]
    fn test_shade_retry_normalizes_family() {
        let flat = flat_with(&[("blue-500", "#3b82f6")]);
        assert_eq!(resolve_color(&flat, "Blue-500", false).as_deref(), Some("#3b82f6"));
    }

    #[test]
    fn test_theme_aware_grays_flip_with_mode() {
        let flat = AHashMap::new();
        assert_eq!(resolve_color(&flat, "gray-100", false).as_deref(), Some("#f3f4f6"));
        assert_eq!(resolve_color(&flat, "gray-100", true).as_deref(), Some("#1f2937"));
        assert_eq!(resolve_color(&flat, "white", true).as_deref(), Some("#000000"));
    }

    #[test]
    fn test_basic_named_fallback() {
        let flat = AHashMap::new();
        assert_eq!(resolve_color(&flat, "red", false).as_deref(), Some("#ef4444"));
        assert_eq!(resolve_color(&flat, "transparent", false).as_deref(), Some("transparent"));
        assert_eq!(resolve_color(&flat, "not-a-color", false), None);
    }

    #[test]
    fn test_apply_opacity_hex() {
        assert_eq!(
            apply_opacity("#000000", 50.0).as_deref(),
            Some("rgba(0, 0, 0, 0.5)")
        );
        assert_eq!(
            apply_opacity("#3b82f6", 20.0).as_deref(),
            Some("rgba(59, 130, 246, 0.2)")
        );
        // Short form expands per digit.
        assert_eq!(
            apply_opacity("#fff", 100.0).as_deref(),
            Some("rgba(255, 255, 255, 1)")
        );
    }

    #[test]
    fn test_apply_opacity_existing_functions() {
        assert_eq!(
            apply_opacity("rgba(10, 20, 30, 0.9)", 25.0).as_deref(),
            Some("rgba(10, 20, 30, 0.25)")
        );
        assert_eq!(
            apply_opacity("rgb(10, 20, 30)", 75.0).as_deref(),
            Some("rgba(10, 20, 30, 0.75)")
        );
    }

    #[test]
    fn test_apply_opacity_transparent_and_malformed() {
        assert_eq!(apply_opacity("transparent", 50.0).as_deref(), Some("transparent"));
        assert_eq!(apply_opacity("#000000", -1.0), None);
        assert_eq!(apply_opacity("#000000", 101.0), None);
        assert_eq!(apply_opacity("#00", 50.0), None);
        assert_eq!(apply_opacity("red", 50.0), None);
    }

    #[test]
    fn test_parse_arbitrary_color() {
        assert_eq!(parse_arbitrary_color("#1E40AF").as_deref(), Some("#1e40af"));
        assert_eq!(
            parse_arbitrary_color("rgba(0, 0, 0, 0.5)").as_deref(),
            Some("rgba(0, 0, 0, 0.5)")
        );
        assert_eq!(parse_arbitrary_color("blue").as_deref(), Some("#3b82f6"));
        assert_eq!(parse_arbitrary_color("#12345"), None);
        assert_eq!(parse_arbitrary_color("bogus"), None);
    }
}
