//! Static utility tables and their lookup adapter
//!
//! Table data lives in the category modules as compile-time sorted
//! slices keyed by canonical camelCase class names; lookup is a binary
//! search per category. The adapter probes three key forms: the token
//! as written, its kebab→camel transform, and the `negative` transform
//! for leading-`-` spacing tokens.
//!
//! Key components:
//! - `StaticValue`: const-constructible style values for table entries
//! - `lookup`: the three-probe adapter over all category tables
//! - `to_camel_key`: kebab→camel with the digit+size-suffix rule

pub mod borders;
pub mod effects;
pub mod extras;
pub mod layout;
pub mod palette;
pub mod spacing;
pub mod typography;

use crate::record::{StyleProp, StyleRecord, StyleValue, Transform};

/// Const-constructible value for static table entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StaticValue {
    Num(f64),
    Text(&'static str),
    ScaleTransform(f64),
    RotateTransform(&'static str),
    Offset(f64, f64),
}

impl StaticValue {
    pub(crate) fn to_value(self) -> StyleValue {
        match self {
            StaticValue::Num(n) => StyleValue::Number(n),
            StaticValue::Text(s) => StyleValue::Str(s.to_string()),
            StaticValue::ScaleTransform(factor) => {
                StyleValue::Transforms(vec![Transform::Scale(factor)])
            }
            StaticValue::RotateTransform(angle) => {
                StyleValue::Transforms(vec![Transform::Rotate(angle.to_string())])
            }
            StaticValue::Offset(width, height) => StyleValue::Offset { width, height },
        }
    }
}

/// One utility class: `(canonical key, properties)`.
pub type Entry = (&'static str, &'static [(StyleProp, StaticValue)]);

static CATEGORIES: &[&[Entry]] = &[
    borders::TABLE,
    effects::TABLE,
    layout::TABLE,
    spacing::TABLE,
    typography::TABLE,
];

/// Image-component utilities (object-fit → resizeMode); consulted only
/// under the image hint.
// Sorted for binary_search.
static IMAGE_TABLE: &[Entry] = &[
    ("objectContain", &[(StyleProp::ResizeMode, StaticValue::Text("contain"))]),
    ("objectCover", &[(StyleProp::ResizeMode, StaticValue::Text("cover"))]),
    ("objectFill", &[(StyleProp::ResizeMode, StaticValue::Text("stretch"))]),
    ("objectNone", &[(StyleProp::ResizeMode, StaticValue::Text("center"))]),
    ("objectScaleDown", &[(StyleProp::ResizeMode, StaticValue::Text("contain"))]),
];

fn find_in(table: &'static [Entry], key: &str) -> Option<&'static [(StyleProp, StaticValue)]> {
    table
        .binary_search_by_key(&key, |(entry_key, _)| *entry_key)
        .ok()
        .map(|idx| table[idx].1)
}

fn find(key: &str) -> Option<&'static [(StyleProp, StaticValue)]> {
    CATEGORIES.iter().find_map(|table| find_in(table, key))
}

fn record_for(props: &[(StyleProp, StaticValue)]) -> StyleRecord {
    props.iter().map(|(prop, value)| (*prop, value.to_value())).collect()
}

fn probe(token: &str, search: impl Fn(&str) -> Option<&'static [(StyleProp, StaticValue)]>) -> Option<StyleRecord> {
    if let Some(props) = search(token) {
        return Some(record_for(props));
    }
    let camel = to_camel_key(token);
    if camel != token {
        if let Some(props) = search(&camel) {
            return Some(record_for(props));
        }
    }
    if let Some(negative) = negative_key(token) {
        if let Some(props) = search(&negative) {
            return Some(record_for(props));
        }
    }
    None
}

/// Adapter lookup across all category tables: exact key, then the
/// camel transform, then the negative-spacing transform.
#[must_use]
pub fn lookup(token: &str) -> Option<StyleRecord> {
    probe(token, find)
}

/// Image-hint lookup against the object-fit table.
#[must_use]
pub fn lookup_image(token: &str) -> Option<StyleRecord> {
    probe(token, |key| find_in(IMAGE_TABLE, key))
}

/// The fallback dictionary of individually enumerated tokens, keyed by
/// literal class text.
#[must_use]
pub fn lookup_extras(token: &str) -> Option<StyleRecord> {
    find_in(extras::TABLE, token).map(record_for)
}

fn push_camel_segment(out: &mut String, segment: &str) {
    let bytes = segment.as_bytes();
    if bytes[0].is_ascii_alphabetic() {
        out.push(bytes[0].to_ascii_uppercase() as char);
        out.push_str(&segment[1..]);
        return;
    }
    // Digit-led size suffixes capitalize the letter after the digits
    // (2xl -> 2Xl); any other digit-led segment is appended as-is.
    let digits = segment.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 && matches!(&segment[digits..], "xs" | "sm" | "md" | "lg" | "xl") {
        out.push_str(&segment[..digits]);
        out.push(segment.as_bytes()[digits].to_ascii_uppercase() as char);
        out.push_str(&segment[digits + 1..]);
        return;
    }
    out.push_str(segment);
}

/// kebab → camel key transform: `items-center` → `itemsCenter`,
/// `rounded-2xl` → `rounded2Xl`.
#[must_use]
pub fn to_camel_key(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut first = true;
    for segment in token.split('-') {
        if segment.is_empty() {
            continue;
        }
        if first {
            out.push_str(segment);
            first = false;
        } else {
            push_camel_segment(&mut out, segment);
        }
    }
    out
}

/// Leading-`-` spacing tokens probe under a `negative` prefix:
/// `-m-1` → `negativeM1`.
fn negative_key(token: &str) -> Option<String> {
    let rest = token.strip_prefix('-')?;
    if rest.is_empty() {
        return None;
    }
    Some(to_camel_key(&format!("negative-{rest}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_sorted() {
        let tables: &[(&str, &[Entry])] = &[
            ("borders", borders::TABLE),
            ("effects", effects::TABLE),
            ("extras", extras::TABLE),
            ("layout", layout::TABLE),
            ("spacing", spacing::TABLE),
            ("typography", typography::TABLE),
            ("image", IMAGE_TABLE),
        ];
        for (name, table) in tables {
            for window in table.windows(2) {
                assert!(
                    window[0].0 < window[1].0,
                    "{name} table unsorted: {:?} >= {:?}",
                    window[0].0,
                    window[1].0
                );
            }
        }
    }

    #[test]
    fn test_camel_transform() {
        assert_eq!(to_camel_key("items-center"), "itemsCenter");
        assert_eq!(to_camel_key("flex-row-reverse"), "flexRowReverse");
        assert_eq!(to_camel_key("rounded-2xl"), "rounded2Xl");
        assert_eq!(to_camel_key("text-3xl"), "text3Xl");
        assert_eq!(to_camel_key("z-10"), "z10");
        assert_eq!(to_camel_key("p-0.5"), "p0.5");
        assert_eq!(to_camel_key("flex"), "flex");
    }

    #[test]
    fn test_lookup_probes() {
        // Exact single-word key.
        assert!(lookup("flex").is_some());
        // Camel transform probe.
        let record = lookup("items-center").expect("items-center should resolve");
        assert_eq!(
            record.get(StyleProp::AlignItems),
            Some(&StyleValue::Str("center".to_string()))
        );
        // Negative transform probe.
        let record = lookup("-m-1").expect("-m-1 should resolve");
        assert_eq!(record.get(StyleProp::Margin), Some(&StyleValue::Number(-4.0)));
        // Misses stay misses.
        assert!(lookup("not-a-class").is_none());
    }

    #[test]
    fn test_image_table_gated_lookup() {
        let record = lookup_image("object-cover").expect("object-cover under image hint");
        assert_eq!(
            record.get(StyleProp::ResizeMode),
            Some(&StyleValue::Str("cover".to_string()))
        );
        assert!(lookup("object-cover").is_none(), "object-fit is image-only");
    }

    #[test]
    fn test_extras_literal_keys() {
        let record = lookup_extras("w-1/2").expect("w-1/2 in extras");
        assert_eq!(
            record.get(StyleProp::Width),
            Some(&StyleValue::Str("50%".to_string()))
        );
        assert!(lookup_extras("w-1/7").is_none());
    }

    #[test]
    fn test_multi_property_entries_expand() {
        let record = lookup("inset-0").expect("inset-0 should resolve");
        assert_eq!(record.len(), 4);
        assert_eq!(record.get(StyleProp::Top), Some(&StyleValue::Number(0.0)));
        assert_eq!(record.get(StyleProp::Left), Some(&StyleValue::Number(0.0)));
    }
}
