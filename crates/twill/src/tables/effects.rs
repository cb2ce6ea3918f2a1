//! Opacity, transform, and shadow preset utilities.
//!
//! Shadow presets carry the full native shadow group (color, offset,
//! opacity, radius) plus an elevation value for platforms that composite
//! shadows from a single number.

use super::{Entry, StaticValue::*};
use crate::record::StyleProp::*;

// Sorted for binary_search.
pub static TABLE: &[Entry] = &[
    ("opacity0", &[(Opacity, Num(0.0))]),
    ("opacity10", &[(Opacity, Num(0.1))]),
    ("opacity100", &[(Opacity, Num(1.0))]),
    ("opacity20", &[(Opacity, Num(0.2))]),
    ("opacity25", &[(Opacity, Num(0.25))]),
    ("opacity30", &[(Opacity, Num(0.3))]),
    ("opacity40", &[(Opacity, Num(0.4))]),
    ("opacity5", &[(Opacity, Num(0.05))]),
    ("opacity50", &[(Opacity, Num(0.5))]),
    ("opacity60", &[(Opacity, Num(0.6))]),
    ("opacity70", &[(Opacity, Num(0.7))]),
    ("opacity75", &[(Opacity, Num(0.75))]),
    ("opacity80", &[(Opacity, Num(0.8))]),
    ("opacity90", &[(Opacity, Num(0.9))]),
    ("opacity95", &[(Opacity, Num(0.95))]),
    ("rotate0", &[(Transform, RotateTransform("0deg"))]),
    ("rotate1", &[(Transform, RotateTransform("1deg"))]),
    ("rotate12", &[(Transform, RotateTransform("12deg"))]),
    ("rotate180", &[(Transform, RotateTransform("180deg"))]),
    ("rotate2", &[(Transform, RotateTransform("2deg"))]),
    ("rotate3", &[(Transform, RotateTransform("3deg"))]),
    ("rotate45", &[(Transform, RotateTransform("45deg"))]),
    ("rotate6", &[(Transform, RotateTransform("6deg"))]),
    ("rotate90", &[(Transform, RotateTransform("90deg"))]),
    ("scale0", &[(Transform, ScaleTransform(0.0))]),
    ("scale100", &[(Transform, ScaleTransform(1.0))]),
    ("scale105", &[(Transform, ScaleTransform(1.05))]),
    ("scale110", &[(Transform, ScaleTransform(1.1))]),
    ("scale125", &[(Transform, ScaleTransform(1.25))]),
    ("scale150", &[(Transform, ScaleTransform(1.5))]),
    ("scale50", &[(Transform, ScaleTransform(0.5))]),
    ("scale75", &[(Transform, ScaleTransform(0.75))]),
    ("scale90", &[(Transform, ScaleTransform(0.9))]),
    ("scale95", &[(Transform, ScaleTransform(0.95))]),
    (
        "shadow",
        &[
            (ShadowColor, Text("#000000")),
            (ShadowOffset, Offset(0.0, 1.0)),
            (ShadowOpacity, Num(0.1)),
            (ShadowRadius, Num(2.0)),
            (Elevation, Num(2.0)),
        ],
    ),
    (
        "shadow2Xl",
        &[
            (ShadowColor, Text("#000000")),
            (ShadowOffset, Offset(0.0, 12.0)),
            (ShadowOpacity, Num(0.15)),
            (ShadowRadius, Num(24.0)),
            (Elevation, Num(16.0)),
        ],
    ),
    (
        "shadowLg",
        &[
            (ShadowColor, Text("#000000")),
            (ShadowOffset, Offset(0.0, 4.0)),
            (ShadowOpacity, Num(0.1)),
            (ShadowRadius, Num(8.0)),
            (Elevation, Num(8.0)),
        ],
    ),
    (
        "shadowMd",
        &[
            (ShadowColor, Text("#000000")),
            (ShadowOffset, Offset(0.0, 2.0)),
            (ShadowOpacity, Num(0.1)),
            (ShadowRadius, Num(4.0)),
            (Elevation, Num(4.0)),
        ],
    ),
    (
        "shadowNone",
        &[
            (ShadowColor, Text("transparent")),
            (ShadowOffset, Offset(0.0, 0.0)),
            (ShadowOpacity, Num(0.0)),
            (ShadowRadius, Num(0.0)),
            (Elevation, Num(0.0)),
        ],
    ),
    (
        "shadowSm",
        &[
            (ShadowColor, Text("#000000")),
            (ShadowOffset, Offset(0.0, 1.0)),
            (ShadowOpacity, Num(0.05)),
            (ShadowRadius, Num(1.0)),
            (Elevation, Num(1.0)),
        ],
    ),
    (
        "shadowXl",
        &[
            (ShadowColor, Text("#000000")),
            (ShadowOffset, Offset(0.0, 8.0)),
            (ShadowOpacity, Num(0.12)),
            (ShadowRadius, Num(16.0)),
            (Elevation, Num(12.0)),
        ],
    ),
];
