//! Individually enumerated fallback utilities.
//!
//! Tokens that fit no scale or transform rule: fractional dimensions,
//! off-scale spacing steps, and preset values outside the regular
//! progressions. Keys are the literal class text, fractions included,
//! so this table is probed without the camel transform.

use super::{Entry, StaticValue::*};
use crate::record::StyleProp::*;

// Sorted for binary_search.
pub static TABLE: &[Entry] = &[
    ("flex-2", &[(Flex, Num(2.0))]),
    ("flex-3", &[(Flex, Num(3.0))]),
    ("h-1/2", &[(Height, Text("50%"))]),
    ("h-1/3", &[(Height, Text("33.333333%"))]),
    ("h-1/4", &[(Height, Text("25%"))]),
    ("h-13", &[(Height, Num(52.0))]),
    ("h-15", &[(Height, Num(60.0))]),
    ("h-18", &[(Height, Num(72.0))]),
    ("h-2/3", &[(Height, Text("66.666667%"))]),
    ("h-3/4", &[(Height, Text("75%"))]),
    ("m-4.5", &[(Margin, Num(18.0))]),
    ("opacity-15", &[(Opacity, Num(0.15))]),
    ("opacity-35", &[(Opacity, Num(0.35))]),
    ("opacity-45", &[(Opacity, Num(0.45))]),
    ("opacity-55", &[(Opacity, Num(0.55))]),
    ("opacity-65", &[(Opacity, Num(0.65))]),
    ("opacity-85", &[(Opacity, Num(0.85))]),
    ("p-4.5", &[(Padding, Num(18.0))]),
    ("rotate-135", &[(Transform, RotateTransform("135deg"))]),
    ("rotate-270", &[(Transform, RotateTransform("270deg"))]),
    ("rotate-360", &[(Transform, RotateTransform("360deg"))]),
    ("rounded-4xl", &[(BorderRadius, Num(32.0))]),
    ("rounded-5xl", &[(BorderRadius, Num(40.0))]),
    ("scale-102", &[(Transform, ScaleTransform(1.02))]),
    ("scale-98", &[(Transform, ScaleTransform(0.98))]),
    ("w-1/2", &[(Width, Text("50%"))]),
    ("w-1/3", &[(Width, Text("33.333333%"))]),
    ("w-1/4", &[(Width, Text("25%"))]),
    ("w-1/5", &[(Width, Text("20%"))]),
    ("w-1/6", &[(Width, Text("16.666667%"))]),
    ("w-13", &[(Width, Num(52.0))]),
    ("w-15", &[(Width, Num(60.0))]),
    ("w-18", &[(Width, Num(72.0))]),
    ("w-2/3", &[(Width, Text("66.666667%"))]),
    ("w-2/5", &[(Width, Text("40%"))]),
    ("w-3/4", &[(Width, Text("75%"))]),
    ("w-3/5", &[(Width, Text("60%"))]),
    ("w-4/5", &[(Width, Text("80%"))]),
    ("w-5/6", &[(Width, Text("83.333333%"))]),
];
