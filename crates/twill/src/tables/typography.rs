//! Typography utilities: weight, style, alignment, decoration,
//! transform, line height, and letter spacing.

use super::{Entry, StaticValue::*};
use crate::record::StyleProp::*;

// Sorted for binary_search.
pub static TABLE: &[Entry] = &[
    ("capitalize", &[(TextTransform, Text("capitalize"))]),
    ("fontBlack", &[(FontWeight, Text("900"))]),
    ("fontBold", &[(FontWeight, Text("700"))]),
    ("fontExtrabold", &[(FontWeight, Text("800"))]),
    ("fontExtralight", &[(FontWeight, Text("200"))]),
    ("fontLight", &[(FontWeight, Text("300"))]),
    ("fontMedium", &[(FontWeight, Text("500"))]),
    ("fontNormal", &[(FontWeight, Text("400"))]),
    ("fontSemibold", &[(FontWeight, Text("600"))]),
    ("fontThin", &[(FontWeight, Text("100"))]),
    ("italic", &[(FontStyle, Text("italic"))]),
    ("leading10", &[(LineHeight, Num(40.0))]),
    ("leading3", &[(LineHeight, Num(12.0))]),
    ("leading4", &[(LineHeight, Num(16.0))]),
    ("leading5", &[(LineHeight, Num(20.0))]),
    ("leading6", &[(LineHeight, Num(24.0))]),
    ("leading7", &[(LineHeight, Num(28.0))]),
    ("leading8", &[(LineHeight, Num(32.0))]),
    ("leading9", &[(LineHeight, Num(36.0))]),
    ("leadingLoose", &[(LineHeight, Num(32.0))]),
    ("leadingNone", &[(LineHeight, Num(16.0))]),
    ("leadingNormal", &[(LineHeight, Num(24.0))]),
    ("leadingRelaxed", &[(LineHeight, Num(26.0))]),
    ("leadingSnug", &[(LineHeight, Num(22.0))]),
    ("leadingTight", &[(LineHeight, Num(20.0))]),
    ("lineThrough", &[(TextDecorationLine, Text("line-through"))]),
    ("lowercase", &[(TextTransform, Text("lowercase"))]),
    ("noUnderline", &[(TextDecorationLine, Text("none"))]),
    ("normalCase", &[(TextTransform, Text("none"))]),
    ("notItalic", &[(FontStyle, Text("normal"))]),
    ("textCenter", &[(TextAlign, Text("center"))]),
    ("textJustify", &[(TextAlign, Text("justify"))]),
    ("textLeft", &[(TextAlign, Text("left"))]),
    ("textRight", &[(TextAlign, Text("right"))]),
    ("trackingNormal", &[(LetterSpacing, Num(0.0))]),
    ("trackingTight", &[(LetterSpacing, Num(-0.4))]),
    ("trackingTighter", &[(LetterSpacing, Num(-0.8))]),
    ("trackingWide", &[(LetterSpacing, Num(0.4))]),
    ("trackingWider", &[(LetterSpacing, Num(0.8))]),
    ("trackingWidest", &[(LetterSpacing, Num(1.6))]),
    ("underline", &[(TextDecorationLine, Text("underline"))]),
    ("uppercase", &[(TextTransform, Text("uppercase"))]),
];
