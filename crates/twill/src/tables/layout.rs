//! Layout, flexbox, positioning, and visibility utilities.

use super::{Entry, StaticValue::*};
use crate::record::StyleProp::*;

// Sorted for binary_search.
pub static TABLE: &[Entry] = &[
    ("absolute", &[(Position, Text("absolute"))]),
    ("aspectSquare", &[(AspectRatio, Num(1.0))]),
    ("aspectVideo", &[(AspectRatio, Num(16.0 / 9.0))]),
    ("bottom0", &[(Bottom, Num(0.0))]),
    ("contentAround", &[(AlignContent, Text("space-around"))]),
    ("contentBetween", &[(AlignContent, Text("space-between"))]),
    ("contentCenter", &[(AlignContent, Text("center"))]),
    ("contentEnd", &[(AlignContent, Text("flex-end"))]),
    ("contentStart", &[(AlignContent, Text("flex-start"))]),
    ("contentStretch", &[(AlignContent, Text("stretch"))]),
    ("flex", &[(Display, Text("flex"))]),
    ("flex1", &[(Flex, Num(1.0))]),
    (
        "flexAuto",
        &[(FlexGrow, Num(1.0)), (FlexShrink, Num(1.0)), (FlexBasis, Text("auto"))],
    ),
    ("flexCol", &[(FlexDirection, Text("column"))]),
    ("flexColReverse", &[(FlexDirection, Text("column-reverse"))]),
    ("flexGrow", &[(FlexGrow, Num(1.0))]),
    ("flexGrow0", &[(FlexGrow, Num(0.0))]),
    (
        "flexInitial",
        &[(FlexGrow, Num(0.0)), (FlexShrink, Num(1.0)), (FlexBasis, Text("auto"))],
    ),
    (
        "flexNone",
        &[(FlexGrow, Num(0.0)), (FlexShrink, Num(0.0)), (FlexBasis, Text("auto"))],
    ),
    ("flexNowrap", &[(FlexWrap, Text("nowrap"))]),
    ("flexRow", &[(FlexDirection, Text("row"))]),
    ("flexRowReverse", &[(FlexDirection, Text("row-reverse"))]),
    ("flexShrink", &[(FlexShrink, Num(1.0))]),
    ("flexShrink0", &[(FlexShrink, Num(0.0))]),
    ("flexWrap", &[(FlexWrap, Text("wrap"))]),
    ("flexWrapReverse", &[(FlexWrap, Text("wrap-reverse"))]),
    ("hFull", &[(Height, Text("100%"))]),
    ("hScreen", &[(Height, Num(667.0))]),
    ("hidden", &[(Display, Text("none"))]),
    (
        "inset0",
        &[(Top, Num(0.0)), (Right, Num(0.0)), (Bottom, Num(0.0)), (Left, Num(0.0))],
    ),
    ("itemsBaseline", &[(AlignItems, Text("baseline"))]),
    ("itemsCenter", &[(AlignItems, Text("center"))]),
    ("itemsEnd", &[(AlignItems, Text("flex-end"))]),
    ("itemsStart", &[(AlignItems, Text("flex-start"))]),
    ("itemsStretch", &[(AlignItems, Text("stretch"))]),
    ("justifyAround", &[(JustifyContent, Text("space-around"))]),
    ("justifyBetween", &[(JustifyContent, Text("space-between"))]),
    ("justifyCenter", &[(JustifyContent, Text("center"))]),
    ("justifyEnd", &[(JustifyContent, Text("flex-end"))]),
    ("justifyEvenly", &[(JustifyContent, Text("space-evenly"))]),
    ("justifyStart", &[(JustifyContent, Text("flex-start"))]),
    ("left0", &[(Left, Num(0.0))]),
    ("overflowHidden", &[(Overflow, Text("hidden"))]),
    ("overflowScroll", &[(Overflow, Text("scroll"))]),
    ("overflowVisible", &[(Overflow, Text("visible"))]),
    ("relative", &[(Position, Text("relative"))]),
    ("right0", &[(Right, Num(0.0))]),
    ("selfAuto", &[(AlignSelf, Text("auto"))]),
    ("selfBaseline", &[(AlignSelf, Text("baseline"))]),
    ("selfCenter", &[(AlignSelf, Text("center"))]),
    ("selfEnd", &[(AlignSelf, Text("flex-end"))]),
    ("selfStart", &[(AlignSelf, Text("flex-start"))]),
    ("selfStretch", &[(AlignSelf, Text("stretch"))]),
    ("top0", &[(Top, Num(0.0))]),
    ("wFull", &[(Width, Text("100%"))]),
    ("wScreen", &[(Width, Num(375.0))]),
    ("z0", &[(ZIndex, Num(0.0))]),
    ("z10", &[(ZIndex, Num(10.0))]),
    ("z20", &[(ZIndex, Num(20.0))]),
    ("z30", &[(ZIndex, Num(30.0))]),
    ("z40", &[(ZIndex, Num(40.0))]),
    ("z50", &[(ZIndex, Num(50.0))]),
];
