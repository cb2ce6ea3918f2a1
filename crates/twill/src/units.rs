//! CSS-unit to native-unit conversion
//!
//! Converts numeric-with-suffix literals (`"16px"`, `"1.5rem"`, `"50vw"`)
//! into native pixel numbers. Percentages pass through unchanged as
//! strings, bare numbers pass through as numbers, and anything else is
//! treated as a keyword and returned unchanged.

use crate::record::StyleValue;

/// Reference viewport for viewport-relative units. Fixed by design so
/// conversion stays pure; layout-time viewport state never feeds in here.
pub const REFERENCE_VIEWPORT_WIDTH: f64 = 375.0;
pub const REFERENCE_VIEWPORT_HEIGHT: f64 = 667.0;

const VW: f64 = REFERENCE_VIEWPORT_WIDTH / 100.0;
const VH: f64 = REFERENCE_VIEWPORT_HEIGHT / 100.0;

// Native pixels per 1 unit. Font-relative units assume the 16px root
// size; container-query units fall back to the viewport ratios.
// Sorted for binary_search.
const UNIT_RATIOS: &[(&str, f64)] = &[
    ("cap", 11.2),
    ("ch", 8.0),
    ("cm", 96.0 / 2.54),
    ("cqb", VH),
    ("cqh", VH),
    ("cqi", VW),
    ("cqmax", VH),
    ("cqmin", VW),
    ("cqw", VW),
    ("em", 16.0),
    ("ex", 8.0),
    ("ic", 16.0),
    ("in", 96.0),
    ("lh", 24.0),
    ("mm", 96.0 / 25.4),
    ("pc", 16.0),
    ("pt", 96.0 / 72.0),
    ("px", 1.0),
    ("q", 96.0 / 101.6),
    ("rem", 16.0),
    ("rlh", 24.0),
    ("vb", VH),
    ("vh", VH),
    ("vi", VW),
    ("vmax", VH),
    ("vmin", VW),
    ("vw", VW),
];

/// Split `"-12.5rem"` into its numeric head and unit tail.
fn split_magnitude(raw: &str) -> Option<(f64, &str)> {
    let trimmed = raw.trim();
    let digits_end = trimmed
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+')))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    let magnitude = trimmed[..digits_end].parse::<f64>().ok()?;
    Some((magnitude, &trimmed[digits_end..]))
}

/// Convert a raw literal into a native style value.
///
/// - `"100%"` → `Str("100%")` (percentages are kept verbatim)
/// - `"16px"` / `"1rem"` / `"1in"` → `Number(16.0)` / `Number(16.0)` / `Number(96.0)`
/// - `"12"` → `Number(12.0)`
/// - `"auto"`, unknown suffixes → `Str` unchanged
#[must_use]
pub fn to_native(raw: &str) -> StyleValue {
    let trimmed = raw.trim();
    if let Some((magnitude, tail)) = split_magnitude(trimmed) {
        if tail == "%" {
            return StyleValue::Str(trimmed.to_string());
        }
        if tail.is_empty() {
            return StyleValue::Number(magnitude);
        }
        let unit = tail.to_ascii_lowercase();
        if let Ok(idx) = UNIT_RATIOS.binary_search_by_key(&unit.as_str(), |(u, _)| u) {
            return StyleValue::Number(magnitude * UNIT_RATIOS[idx].1);
        }
    }
    StyleValue::Str(trimmed.to_string())
}

/// Convert a `<number><unit>` literal into native pixels. Unlike
/// [`to_native`], the unit suffix is required: bare numbers,
/// percentages, and keywords all yield `None`.
#[must_use]
pub fn to_native_unit(raw: &str) -> Option<f64> {
    let (magnitude, tail) = split_magnitude(raw)?;
    let unit = tail.to_ascii_lowercase();
    let idx = UNIT_RATIOS.binary_search_by_key(&unit.as_str(), |(u, _)| u).ok()?;
    Some(magnitude * UNIT_RATIOS[idx].1)
}

/// Like [`to_native`] but always yields a number, for properties that
/// cannot accept strings. Percentages and unknown suffixes fall back to
/// their numeric head; fully unparseable input yields `0`.
#[must_use]
pub fn to_native_number(raw: &str) -> f64 {
    match to_native(raw) {
        StyleValue::Number(n) => n,
        _ => split_magnitude(raw).map(|(m, _)| m).unwrap_or(0.0),
    }
}
