//! Bracketed arbitrary values: `w-[87px]`, `bg-[#1e40af]`,
//! `rotate-[17deg]`. The prefix decides how the bracket contents are
//! read; unknown prefixes and unparseable contents are no match.

use crate::color::parse_arbitrary_color;
use crate::record::{StyleProp, StyleRecord, StyleValue, Transform};
use crate::units;

use super::{ResolveCx, Resolver, color_prop, dimension_props};

fn split_bracket(token: &str) -> Option<(&str, &str)> {
    let open = token.find("-[")?;
    let raw = token.get(open + 2..)?.strip_suffix(']')?;
    if raw.trim().is_empty() {
        return None;
    }
    Some((&token[..open], raw))
}

fn single(prop: StyleProp, value: impl Into<StyleValue>) -> Option<StyleRecord> {
    Some(StyleRecord::new().with(prop, value))
}

fn dimension_record(props: &[StyleProp], raw: &str) -> Option<StyleRecord> {
    let value = match units::to_native(raw) {
        StyleValue::Number(n) => StyleValue::Number(n),
        StyleValue::Str(s) => StyleValue::Str(s),
        _ => return None,
    };
    let mut record = StyleRecord::new();
    for prop in props {
        record.set(*prop, value.clone());
    }
    Some(record)
}

pub(crate) struct Arbitrary;

impl Resolver for Arbitrary {
    fn name(&self) -> &'static str {
        "arbitrary"
    }

    fn resolve(&self, token: &str, cx: &ResolveCx<'_>) -> Option<StyleRecord> {
        let (prefix, raw) = split_bracket(token)?;
        match prefix {
            // Color-bearing prefixes take a color literal first; `text`
            // and `border` fall back to their dimensional reading.
            "bg" | "shadow" => {
                let prop = color_prop(prefix, cx.hint)?;
                single(prop, parse_arbitrary_color(raw)?)
            }
            "text" => {
                if let Some(color) = parse_arbitrary_color(raw) {
                    return single(color_prop(prefix, cx.hint)?, color);
                }
                match units::to_native(raw) {
                    StyleValue::Number(n) => single(StyleProp::FontSize, n),
                    _ => None,
                }
            }
            "border" => {
                if let Some(color) = parse_arbitrary_color(raw) {
                    return single(StyleProp::BorderColor, color);
                }
                match units::to_native(raw) {
                    StyleValue::Number(n) => single(StyleProp::BorderWidth, n),
                    _ => None,
                }
            }
            "opacity" => single(StyleProp::Opacity, raw.trim().parse::<f64>().ok()?),
            "z" => single(StyleProp::ZIndex, raw.trim().parse::<f64>().ok()?),
            "flex" => single(StyleProp::Flex, raw.trim().parse::<f64>().ok()?),
            "rotate" => single(
                StyleProp::Transform,
                vec![Transform::Rotate(raw.trim().to_string())],
            ),
            "scale" => single(
                StyleProp::Transform,
                vec![Transform::Scale(raw.trim().parse::<f64>().ok()?)],
            ),
            "scale-x" => single(
                StyleProp::Transform,
                vec![Transform::ScaleX(raw.trim().parse::<f64>().ok()?)],
            ),
            "scale-y" => single(
                StyleProp::Transform,
                vec![Transform::ScaleY(raw.trim().parse::<f64>().ok()?)],
            ),
            "translate-x" => single(
                StyleProp::Transform,
                vec![Transform::TranslateX(units::to_native_number(raw))],
            ),
            "translate-y" => single(
                StyleProp::Transform,
                vec![Transform::TranslateY(units::to_native_number(raw))],
            ),
            "skew-x" => single(
                StyleProp::Transform,
                vec![Transform::SkewX(raw.trim().to_string())],
            ),
            "skew-y" => single(
                StyleProp::Transform,
                vec![Transform::SkewY(raw.trim().to_string())],
            ),
            _ => dimension_record(dimension_props(prefix)?, raw),
        }
    }
}
