//! Basic usage of the twill style engine
//!
//! Demonstrates:
//! - Resolving utility class strings into flattened style records
//! - Arbitrary bracket values and slash opacity
//! - Registering custom utilities
//! - Extending the theme configuration at runtime
//! - Merging class strings with literal records
//! - Inspecting cache statistics
//!
//! Run with: `cargo run --example basic_usage`

use twill::{StyleEngine, StyleProp, StyleRecord, StyleSource, ThemeConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("twill=warn")),
        )
        .init();

    let engine = StyleEngine::new();

    resolve_a_component(&engine)?;
    arbitrary_and_opacity(&engine)?;
    custom_utilities(&engine)?;
    extend_the_theme(&engine)?;
    merge_sources(&engine)?;
    cache_statistics(&engine);

    println!("✅ All examples completed");
    Ok(())
}

/// Resolve a typical component class string and print the record.
fn resolve_a_component(engine: &StyleEngine) -> anyhow::Result<()> {
    println!("📦 Example 1: Resolving a component");
    println!("───────────────────────────────────");

    let card = engine.resolve("flex-col items-center bg-white p-4 rounded-lg shadow-md");
    println!("{}", serde_json::to_string_pretty(&card)?);

    assert_eq!(card.get(StyleProp::Padding).and_then(|v| v.as_number()), Some(16.0));
    println!();
    Ok(())
}

/// Bracket literals skip the scales; `/NN` composes an alpha channel.
fn arbitrary_and_opacity(engine: &StyleEngine) -> anyhow::Result<()> {
    println!("🎨 Example 2: Arbitrary values and slash opacity");
    println!("────────────────────────────────────────────────");

    let record = engine.resolve("w-[87px] bg-[#1e40af] text-[22px]");
    println!("arbitrary: {}", serde_json::to_string(&record)?);

    let tinted = engine.resolve("bg-blue-500/20");
    println!("slash opacity: {}", serde_json::to_string(&tinted)?);
    println!();
    Ok(())
}

/// Registered utilities resolve like built-ins and compose with them.
fn custom_utilities(engine: &StyleEngine) -> anyhow::Result<()> {
    println!("🔧 Example 3: Custom utilities");
    println!("──────────────────────────────");

    engine.register_utility(
        ".btn-primary",
        StyleRecord::new()
            .with(StyleProp::PaddingHorizontal, 16.0)
            .with(StyleProp::PaddingVertical, 8.0)
            .with(StyleProp::BackgroundColor, "#2563eb")
            .with(StyleProp::BorderRadius, 6.0),
    );

    let button = engine.resolve("btn-primary shadow-sm");
    println!("{}", serde_json::to_string_pretty(&button)?);
    println!();
    Ok(())
}

/// Theme patches add new scale keys and palette entries.
fn extend_the_theme(engine: &StyleEngine) -> anyhow::Result<()> {
    println!("🛠️  Example 4: Extending the theme");
    println!("──────────────────────────────────");

    let patch = ThemeConfig::from_json(
        r##"{
            "colors": { "brand": { "500": "#7c3aed" } },
            "spacing": { "18": 72 }
        }"##,
    )?;
    engine.configure(patch);

    let record = engine.resolve("bg-brand-500 p-18");
    println!("{}", serde_json::to_string(&record)?);

    assert_eq!(record.get(StyleProp::Padding).and_then(|v| v.as_number()), Some(72.0));
    println!();
    Ok(())
}

/// Class strings and literal records merge left to right.
fn merge_sources(engine: &StyleEngine) -> anyhow::Result<()> {
    println!("🧩 Example 5: Merging style sources");
    println!("───────────────────────────────────");

    let merged = engine.merge_styles([
        StyleSource::from("p-4 bg-red-500"),
        StyleSource::from(StyleRecord::new().with(StyleProp::Margin, 8.0)),
        StyleSource::from("bg-blue-500"),
    ]);
    println!("{}", serde_json::to_string_pretty(&merged)?);
    println!();
    Ok(())
}

/// Repeated resolutions hit the cache; configuration changes clear it.
fn cache_statistics(engine: &StyleEngine) {
    println!("📈 Example 6: Cache statistics");
    println!("──────────────────────────────");

    for _ in 0..5 {
        let _ = engine.resolve("flex-1 items-center p-4");
    }

    let stats = engine.cache_stats();
    println!(
        "entries: {}, hits: {}, misses: {}",
        stats.entries, stats.hits, stats.misses
    );
    println!();
}
