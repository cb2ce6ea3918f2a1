//! Negative margin utilities.
//!
//! Positive spacing comes from the configured spacing scale; only the
//! negative presets need table entries because the scale holds
//! magnitudes, not signs. Keys carry the `negative` transform applied
//! by the adapter to leading-`-` tokens.

use super::{Entry, StaticValue::*};
use crate::record::StyleProp::*;

// Sorted for binary_search.
pub static TABLE: &[Entry] = &[
    ("negativeM0.5", &[(Margin, Num(-2.0))]),
    ("negativeM1", &[(Margin, Num(-4.0))]),
    ("negativeM10", &[(Margin, Num(-40.0))]),
    ("negativeM12", &[(Margin, Num(-48.0))]),
    ("negativeM2", &[(Margin, Num(-8.0))]),
    ("negativeM3", &[(Margin, Num(-12.0))]),
    ("negativeM4", &[(Margin, Num(-16.0))]),
    ("negativeM6", &[(Margin, Num(-24.0))]),
    ("negativeM8", &[(Margin, Num(-32.0))]),
    ("negativeMPx", &[(Margin, Num(-1.0))]),
    ("negativeMb0.5", &[(MarginBottom, Num(-2.0))]),
    ("negativeMb1", &[(MarginBottom, Num(-4.0))]),
    ("negativeMb10", &[(MarginBottom, Num(-40.0))]),
    ("negativeMb12", &[(MarginBottom, Num(-48.0))]),
    ("negativeMb2", &[(MarginBottom, Num(-8.0))]),
    ("negativeMb3", &[(MarginBottom, Num(-12.0))]),
    ("negativeMb4", &[(MarginBottom, Num(-16.0))]),
    ("negativeMb6", &[(MarginBottom, Num(-24.0))]),
    ("negativeMb8", &[(MarginBottom, Num(-32.0))]),
    ("negativeMbPx", &[(MarginBottom, Num(-1.0))]),
    ("negativeMl0.5", &[(MarginLeft, Num(-2.0))]),
    ("negativeMl1", &[(MarginLeft, Num(-4.0))]),
    ("negativeMl10", &[(MarginLeft, Num(-40.0))]),
    ("negativeMl12", &[(MarginLeft, Num(-48.0))]),
    ("negativeMl2", &[(MarginLeft, Num(-8.0))]),
    ("negativeMl3", &[(MarginLeft, Num(-12.0))]),
    ("negativeMl4", &[(MarginLeft, Num(-16.0))]),
    ("negativeMl6", &[(MarginLeft, Num(-24.0))]),
    ("negativeMl8", &[(MarginLeft, Num(-32.0))]),
    ("negativeMlPx", &[(MarginLeft, Num(-1.0))]),
    ("negativeMr0.5", &[(MarginRight, Num(-2.0))]),
    ("negativeMr1", &[(MarginRight, Num(-4.0))]),
    ("negativeMr10", &[(MarginRight, Num(-40.0))]),
    ("negativeMr12", &[(MarginRight, Num(-48.0))]),
    ("negativeMr2", &[(MarginRight, Num(-8.0))]),
    ("negativeMr3", &[(MarginRight, Num(-12.0))]),
    ("negativeMr4", &[(MarginRight, Num(-16.0))]),
    ("negativeMr6", &[(MarginRight, Num(-24.0))]),
    ("negativeMr8", &[(MarginRight, Num(-32.0))]),
    ("negativeMrPx", &[(MarginRight, Num(-1.0))]),
    ("negativeMt0.5", &[(MarginTop, Num(-2.0))]),
    ("negativeMt1", &[(MarginTop, Num(-4.0))]),
    ("negativeMt10", &[(MarginTop, Num(-40.0))]),
    ("negativeMt12", &[(MarginTop, Num(-48.0))]),
    ("negativeMt2", &[(MarginTop, Num(-8.0))]),
    ("negativeMt3", &[(MarginTop, Num(-12.0))]),
    ("negativeMt4", &[(MarginTop, Num(-16.0))]),
    ("negativeMt6", &[(MarginTop, Num(-24.0))]),
    ("negativeMt8", &[(MarginTop, Num(-32.0))]),
    ("negativeMtPx", &[(MarginTop, Num(-1.0))]),
    ("negativeMx0.5", &[(MarginHorizontal, Num(-2.0))]),
    ("negativeMx1", &[(MarginHorizontal, Num(-4.0))]),
    ("negativeMx10", &[(MarginHorizontal, Num(-40.0))]),
    ("negativeMx12", &[(MarginHorizontal, Num(-48.0))]),
    ("negativeMx2", &[(MarginHorizontal, Num(-8.0))]),
    ("negativeMx3", &[(MarginHorizontal, Num(-12.0))]),
    ("negativeMx4", &[(MarginHorizontal, Num(-16.0))]),
    ("negativeMx6", &[(MarginHorizontal, Num(-24.0))]),
    ("negativeMx8", &[(MarginHorizontal, Num(-32.0))]),
    ("negativeMxPx", &[(MarginHorizontal, Num(-1.0))]),
    ("negativeMy0.5", &[(MarginVertical, Num(-2.0))]),
    ("negativeMy1", &[(MarginVertical, Num(-4.0))]),
    ("negativeMy10", &[(MarginVertical, Num(-40.0))]),
    ("negativeMy12", &[(MarginVertical, Num(-48.0))]),
    ("negativeMy2", &[(MarginVertical, Num(-8.0))]),
    ("negativeMy3", &[(MarginVertical, Num(-12.0))]),
    ("negativeMy4", &[(MarginVertical, Num(-16.0))]),
    ("negativeMy6", &[(MarginVertical, Num(-24.0))]),
    ("negativeMy8", &[(MarginVertical, Num(-32.0))]),
    ("negativeMyPx", &[(MarginVertical, Num(-1.0))]),
];
