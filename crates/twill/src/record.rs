//! Flattened native style records
//!
//! A [`StyleRecord`] is the engine's output: an unordered mapping from a
//! fixed vocabulary of native style properties to primitive values.
//! Records are structurally flat except for transform lists and the shadow
//! offset pair.
//!
//! Key components:
//! - `StyleProp`: the closed property vocabulary (camelCase on the wire)
//! - `StyleValue`: number / string / transform list / offset
//! - `StyleRecord`: the mapping plus last-write-wins merging

use ahash::AHashMap;
use serde::Serialize;

/// Native style property names.
///
/// Serialized in camelCase so a record is directly consumable by a
/// rendering layer (`{"backgroundColor": "...", "padding": 16}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleProp {
    // Layout
    Display,
    Position,
    Top,
    Right,
    Bottom,
    Left,
    ZIndex,
    Overflow,
    AspectRatio,
    // Flexbox
    Flex,
    FlexDirection,
    FlexWrap,
    FlexGrow,
    FlexShrink,
    FlexBasis,
    AlignItems,
    AlignSelf,
    AlignContent,
    JustifyContent,
    Gap,
    RowGap,
    ColumnGap,
    // Spacing
    Margin,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    MarginHorizontal,
    MarginVertical,
    Padding,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    PaddingHorizontal,
    PaddingVertical,
    // Sizing
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    // Borders
    BorderWidth,
    BorderTopWidth,
    BorderRightWidth,
    BorderBottomWidth,
    BorderLeftWidth,
    BorderColor,
    BorderStyle,
    BorderRadius,
    BorderTopLeftRadius,
    BorderTopRightRadius,
    BorderBottomLeftRadius,
    BorderBottomRightRadius,
    // Typography
    Color,
    FontSize,
    FontWeight,
    FontStyle,
    FontFamily,
    LineHeight,
    LetterSpacing,
    TextAlign,
    TextDecorationLine,
    TextTransform,
    // Background & effects
    BackgroundColor,
    Opacity,
    ShadowColor,
    ShadowOffset,
    ShadowOpacity,
    ShadowRadius,
    Elevation,
    // Transforms
    Transform,
    // Image
    ResizeMode,
    TintColor,
}

/// One entry of a transform list, serialized as a single-key object
/// (`{"scale": 1.05}`, `{"rotate": "45deg"}`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Transform {
    Scale(f64),
    ScaleX(f64),
    ScaleY(f64),
    Rotate(String),
    TranslateX(f64),
    TranslateY(f64),
    SkewX(String),
    SkewY(String),
}

/// A primitive style value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Str(String),
    Transforms(Vec<Transform>),
    Offset { width: f64, height: f64 },
}

impl StyleValue {
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Str(s)
    }
}

impl From<Vec<Transform>> for StyleValue {
    fn from(list: Vec<Transform>) -> Self {
        StyleValue::Transforms(list)
    }
}

/// Flattened style record: property → value, last write wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleRecord {
    entries: AHashMap<StyleProp, StyleValue>,
}

impl StyleRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion, handy for registration call sites.
    #[must_use]
    pub fn with(mut self, prop: StyleProp, value: impl Into<StyleValue>) -> Self {
        self.set(prop, value);
        self
    }

    pub fn set(&mut self, prop: StyleProp, value: impl Into<StyleValue>) {
        self.entries.insert(prop, value.into());
    }

    #[must_use]
    pub fn get(&self, prop: StyleProp) -> Option<&StyleValue> {
        self.entries.get(&prop)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StyleProp, &StyleValue)> {
        self.entries.iter()
    }

    /// Shallow last-write-wins merge: every entry of `other` overwrites
    /// any entry already present under the same property.
    pub fn merge_from(&mut self, other: &StyleRecord) {
        for (prop, value) in &other.entries {
            self.entries.insert(*prop, value.clone());
        }
    }

    /// Flatten an ordered sequence of partial records into one.
    #[must_use]
    pub fn flatten<'a>(partials: impl IntoIterator<Item = &'a StyleRecord>) -> Self {
        let mut merged = StyleRecord::new();
        for partial in partials {
            merged.merge_from(partial);
        }
        merged
    }
}

impl FromIterator<(StyleProp, StyleValue)> for StyleRecord {
    fn from_iter<I: IntoIterator<Item = (StyleProp, StyleValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
