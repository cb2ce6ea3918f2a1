//! Integration tests for the full resolution flow.
//!
//! These tests exercise the public API end to end: class strings in,
//! flattened records out, across configuration changes, custom
//! utilities, breakpoints, and composition.

use twill::{
    ComponentHint, StyleEngine, StyleProp, StyleRecord, StyleSource, StyleValue, ThemeConfig,
    apply_opacity, to_native,
};

fn text_value(record: &StyleRecord, prop: StyleProp) -> String {
    record
        .get(prop)
        .and_then(StyleValue::as_str)
        .unwrap_or_else(|| panic!("expected a string for {prop:?} in {record:?}"))
        .to_string()
}

fn number_value(record: &StyleRecord, prop: StyleProp) -> f64 {
    record
        .get(prop)
        .and_then(StyleValue::as_number)
        .unwrap_or_else(|| panic!("expected a number for {prop:?} in {record:?}"))
}

/// A typical layout string resolves every token into one flat record.
#[test]
fn test_layout_string_resolves_completely() {
    let engine = StyleEngine::new();
    let record = engine.resolve("flex-row items-center justify-between p-4 rounded-lg");

    assert_eq!(text_value(&record, StyleProp::FlexDirection), "row");
    assert_eq!(text_value(&record, StyleProp::AlignItems), "center");
    assert_eq!(text_value(&record, StyleProp::JustifyContent), "space-between");
    assert_eq!(number_value(&record, StyleProp::Padding), 16.0);
    assert_eq!(number_value(&record, StyleProp::BorderRadius), 8.0);
}

/// Later tokens overwrite earlier ones property by property.
#[test]
fn test_conflicting_tokens_last_wins() {
    let engine = StyleEngine::new();
    let record = engine.resolve("bg-red-500 bg-blue-500");
    assert_eq!(text_value(&record, StyleProp::BackgroundColor), "#3b82f6");
}

/// Unit conversion anchors for the public converter.
#[test]
fn test_unit_conversion_anchors() {
    assert_eq!(to_native("16px"), StyleValue::Number(16.0));
    assert_eq!(to_native("1rem"), StyleValue::Number(16.0));
    assert_eq!(to_native("1in"), StyleValue::Number(96.0));
    assert_eq!(to_native("100%"), StyleValue::Str("100%".to_string()));
}

/// Opacity composition anchors for the public helper.
#[test]
fn test_opacity_composition_anchors() {
    assert_eq!(apply_opacity("#000000", 50.0).as_deref(), Some("rgba(0, 0, 0, 0.5)"));
    assert_eq!(apply_opacity("transparent", 50.0).as_deref(), Some("transparent"));
    assert_eq!(apply_opacity("#000000", 101.0), None);
}

/// Breakpoint variants activate with the viewport and override plain
/// tokens when active.
#[test]
fn test_breakpoint_resolution_follows_viewport() {
    let engine = StyleEngine::new();

    let narrow = engine.resolve("p-2 md:p-4");
    assert_eq!(number_value(&narrow, StyleProp::Padding), 8.0);

    engine.set_viewport(1024.0, 768.0);
    let wide = engine.resolve("p-2 md:p-4");
    assert_eq!(number_value(&wide, StyleProp::Padding), 16.0);
}

/// A spacing scale extension makes new keys resolvable.
#[test]
fn test_configured_spacing_key_resolves() {
    let engine = StyleEngine::new();

    let patch = ThemeConfig::from_json(r#"{ "spacing": { "18": 72 } }"#).expect("patch");
    engine.configure(patch);

    let record = engine.resolve("p-18");
    assert_eq!(number_value(&record, StyleProp::Padding), 72.0);
}

/// Off-scale sizes ship in the dictionary and resolve to their design
/// values, not their literal magnitudes; numbers outside the dictionary
/// resolve to nothing.
#[test]
fn test_dictionary_sizes_resolve_to_design_values() {
    let engine = StyleEngine::new();

    assert_eq!(number_value(&engine.resolve("w-18"), StyleProp::Width), 72.0);
    assert_eq!(number_value(&engine.resolve("h-13"), StyleProp::Height), 52.0);
    assert_eq!(number_value(&engine.resolve("m-4.5"), StyleProp::Margin), 18.0);
    assert_eq!(number_value(&engine.resolve("p-4.5"), StyleProp::Padding), 18.0);

    assert!(engine.resolve("w-999").is_empty());
    assert!(engine.resolve("text-18").is_empty());
}

/// Custom palette entries resolve through the color shorthand.
#[test]
fn test_configured_color_resolves() {
    let engine = StyleEngine::new();

    let patch = ThemeConfig::from_json(
        r##"{ "colors": { "brand": "#123456", "ocean": { "500": "#0ea5e9" } } }"##,
    )
    .expect("patch");
    engine.configure(patch);

    assert_eq!(
        text_value(&engine.resolve("bg-brand"), StyleProp::BackgroundColor),
        "#123456"
    );
    assert_eq!(
        text_value(&engine.resolve("text-ocean-500"), StyleProp::Color),
        "#0ea5e9"
    );
}

/// Slash opacity resolves the color first, then composes the alpha.
#[test]
fn test_slash_opacity_resolution() {
    let engine = StyleEngine::new();
    let record = engine.resolve("bg-blue-500/20");
    assert_eq!(
        text_value(&record, StyleProp::BackgroundColor),
        "rgba(59, 130, 246, 0.2)"
    );
}

/// Bracketed literals bypass the scales entirely.
#[test]
fn test_arbitrary_values_resolve() {
    let engine = StyleEngine::new();
    let record = engine.resolve("w-[87px] bg-[#1e40af] p-[2.5rem]");

    assert_eq!(number_value(&record, StyleProp::Width), 87.0);
    assert_eq!(text_value(&record, StyleProp::BackgroundColor), "#1e40af");
    assert_eq!(number_value(&record, StyleProp::Padding), 40.0);
}

/// Registered utilities are preferred over built-in scales and combine
/// with regular tokens.
#[test]
fn test_custom_utility_registration() {
    let engine = StyleEngine::new();
    engine.register_utility(
        ".btn",
        StyleRecord::new()
            .with(StyleProp::PaddingHorizontal, 16.0)
            .with(StyleProp::PaddingVertical, 8.0)
            .with(StyleProp::BorderRadius, 6.0),
    );

    let record = engine.resolve("btn bg-blue-500");
    assert_eq!(number_value(&record, StyleProp::PaddingHorizontal), 16.0);
    assert_eq!(text_value(&record, StyleProp::BackgroundColor), "#3b82f6");
}

/// Class strings and literal records compose into one record.
#[test]
fn test_merge_styles_composition() {
    let engine = StyleEngine::new();
    let merged = engine.merge_styles([
        StyleSource::from("p-4"),
        StyleSource::from(StyleRecord::new().with(StyleProp::Margin, 8.0)),
        StyleSource::from("bg-red-500"),
    ]);

    assert_eq!(number_value(&merged, StyleProp::Padding), 16.0);
    assert_eq!(number_value(&merged, StyleProp::Margin), 8.0);
    assert_eq!(text_value(&merged, StyleProp::BackgroundColor), "#ef4444");
    assert_eq!(merged.len(), 3);
}

/// Gradients degrade to a flat background; unsupported interaction
/// utilities degrade to nothing; unknown tokens degrade to nothing.
#[test]
fn test_graceful_degradation() {
    let engine = StyleEngine::new();

    let gradient = engine.resolve("bg-gradient-to-r from-blue-500");
    assert_eq!(text_value(&gradient, StyleProp::BackgroundColor), "#3b82f6");

    let neutral = engine.resolve("from-gray-500");
    assert_eq!(text_value(&neutral, StyleProp::BackgroundColor), "#6b7280");

    assert!(engine.resolve("hover:bg-blue-600 transition-colors duration-150").is_empty());
    assert!(engine.resolve("not-a-real-class").is_empty());
}

/// The image hint switches the text-color target and unlocks
/// object-fit utilities.
#[test]
fn test_image_hint_resolution() {
    let engine = StyleEngine::new();

    let image = engine.resolve_for("w-full object-cover text-white", ComponentHint::Image);
    assert_eq!(text_value(&image, StyleProp::Width), "100%");
    assert_eq!(text_value(&image, StyleProp::ResizeMode), "cover");
    assert_eq!(text_value(&image, StyleProp::TintColor), "#ffffff");

    let text = engine.resolve_for("text-white", ComponentHint::Text);
    assert_eq!(text_value(&text, StyleProp::Color), "#ffffff");
}

/// Records serialize with camelCase keys for direct consumption.
#[test]
fn test_record_serialization_shape() {
    let engine = StyleEngine::new();
    let record = engine.resolve("bg-blue-500 px-4 shadow-md");

    let json = serde_json::to_value(&record).expect("record should serialize");
    assert_eq!(json["backgroundColor"], "#3b82f6");
    assert_eq!(json["paddingHorizontal"], 16.0);
    assert_eq!(json["shadowOffset"]["height"], 2.0);
    assert_eq!(json["elevation"], 4.0);
}

/// Cache statistics reflect hits and misses across repeated calls.
#[test]
fn test_cache_statistics() {
    let engine = StyleEngine::new();
    for _ in 0..3 {
        let _ = engine.resolve("flex-1 p-4");
    }
    let _ = engine.resolve("m-2");

    let stats = engine.cache_stats();
    assert_eq!(stats.entries, 2);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.hits, 2);

    engine.clear_cache();
    assert_eq!(engine.cache_stats().entries, 0);
}
