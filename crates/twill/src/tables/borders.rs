//! Border width, border style, and per-side corner radius utilities.
//!
//! Whole-element radii (`rounded`, `rounded-lg`, ...) resolve through
//! the configured radius scale; the per-side variants expand to corner
//! pairs here.

use super::{Entry, StaticValue::*};
use crate::record::StyleProp::*;

// Sorted for binary_search.
pub static TABLE: &[Entry] = &[
    ("border", &[(BorderWidth, Num(1.0))]),
    ("border0", &[(BorderWidth, Num(0.0))]),
    ("border2", &[(BorderWidth, Num(2.0))]),
    ("border4", &[(BorderWidth, Num(4.0))]),
    ("border8", &[(BorderWidth, Num(8.0))]),
    ("borderB", &[(BorderBottomWidth, Num(1.0))]),
    ("borderB2", &[(BorderBottomWidth, Num(2.0))]),
    ("borderB4", &[(BorderBottomWidth, Num(4.0))]),
    ("borderDashed", &[(BorderStyle, Text("dashed"))]),
    ("borderDotted", &[(BorderStyle, Text("dotted"))]),
    ("borderL", &[(BorderLeftWidth, Num(1.0))]),
    ("borderL2", &[(BorderLeftWidth, Num(2.0))]),
    ("borderL4", &[(BorderLeftWidth, Num(4.0))]),
    ("borderR", &[(BorderRightWidth, Num(1.0))]),
    ("borderR2", &[(BorderRightWidth, Num(2.0))]),
    ("borderR4", &[(BorderRightWidth, Num(4.0))]),
    ("borderSolid", &[(BorderStyle, Text("solid"))]),
    ("borderT", &[(BorderTopWidth, Num(1.0))]),
    ("borderT2", &[(BorderTopWidth, Num(2.0))]),
    ("borderT4", &[(BorderTopWidth, Num(4.0))]),
    (
        "roundedB",
        &[(BorderBottomLeftRadius, Num(4.0)), (BorderBottomRightRadius, Num(4.0))],
    ),
    (
        "roundedBFull",
        &[(BorderBottomLeftRadius, Num(9999.0)), (BorderBottomRightRadius, Num(9999.0))],
    ),
    (
        "roundedBLg",
        &[(BorderBottomLeftRadius, Num(8.0)), (BorderBottomRightRadius, Num(8.0))],
    ),
    (
        "roundedBMd",
        &[(BorderBottomLeftRadius, Num(6.0)), (BorderBottomRightRadius, Num(6.0))],
    ),
    (
        "roundedBSm",
        &[(BorderBottomLeftRadius, Num(2.0)), (BorderBottomRightRadius, Num(2.0))],
    ),
    (
        "roundedBXl",
        &[(BorderBottomLeftRadius, Num(12.0)), (BorderBottomRightRadius, Num(12.0))],
    ),
    (
        "roundedL",
        &[(BorderTopLeftRadius, Num(4.0)), (BorderBottomLeftRadius, Num(4.0))],
    ),
    (
        "roundedLFull",
        &[(BorderTopLeftRadius, Num(9999.0)), (BorderBottomLeftRadius, Num(9999.0))],
    ),
    (
        "roundedLLg",
        &[(BorderTopLeftRadius, Num(8.0)), (BorderBottomLeftRadius, Num(8.0))],
    ),
    (
        "roundedLMd",
        &[(BorderTopLeftRadius, Num(6.0)), (BorderBottomLeftRadius, Num(6.0))],
    ),
    (
        "roundedLSm",
        &[(BorderTopLeftRadius, Num(2.0)), (BorderBottomLeftRadius, Num(2.0))],
    ),
    (
        "roundedLXl",
        &[(BorderTopLeftRadius, Num(12.0)), (BorderBottomLeftRadius, Num(12.0))],
    ),
    (
        "roundedR",
        &[(BorderTopRightRadius, Num(4.0)), (BorderBottomRightRadius, Num(4.0))],
    ),
    (
        "roundedRFull",
        &[(BorderTopRightRadius, Num(9999.0)), (BorderBottomRightRadius, Num(9999.0))],
    ),
    (
        "roundedRLg",
        &[(BorderTopRightRadius, Num(8.0)), (BorderBottomRightRadius, Num(8.0))],
    ),
    (
        "roundedRMd",
        &[(BorderTopRightRadius, Num(6.0)), (BorderBottomRightRadius, Num(6.0))],
    ),
    (
        "roundedRSm",
        &[(BorderTopRightRadius, Num(2.0)), (BorderBottomRightRadius, Num(2.0))],
    ),
    (
        "roundedRXl",
        &[(BorderTopRightRadius, Num(12.0)), (BorderBottomRightRadius, Num(12.0))],
    ),
    (
        "roundedT",
        &[(BorderTopLeftRadius, Num(4.0)), (BorderTopRightRadius, Num(4.0))],
    ),
    (
        "roundedTFull",
        &[(BorderTopLeftRadius, Num(9999.0)), (BorderTopRightRadius, Num(9999.0))],
    ),
    (
        "roundedTLg",
        &[(BorderTopLeftRadius, Num(8.0)), (BorderTopRightRadius, Num(8.0))],
    ),
    (
        "roundedTMd",
        &[(BorderTopLeftRadius, Num(6.0)), (BorderTopRightRadius, Num(6.0))],
    ),
    (
        "roundedTSm",
        &[(BorderTopLeftRadius, Num(2.0)), (BorderTopRightRadius, Num(2.0))],
    ),
    (
        "roundedTXl",
        &[(BorderTopLeftRadius, Num(12.0)), (BorderTopRightRadius, Num(12.0))],
    ),
];
