//! Dark mode and responsive styling
//!
//! Demonstrates:
//! - Theme-aware colors that swap with the mode
//! - `dark:` variants and stacked breakpoint prefixes
//! - Subscribing to theme changes
//! - Sharing one theme context across several engines
//! - Viewport-driven breakpoint activation
//!
//! Run with: `cargo run --example theme_demo`

use std::sync::Arc;

use twill::{StyleEngine, StyleProp, StyleValue, ThemeContext};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("twill=warn")),
        )
        .init();

    theme_aware_colors()?;
    dark_variants()?;
    theme_subscriptions();
    shared_context()?;
    responsive_breakpoints()?;

    println!("✅ All examples completed");
    Ok(())
}

fn describe(record: &twill::StyleRecord, prop: StyleProp) -> String {
    match record.get(prop) {
        Some(StyleValue::Str(text)) => text.clone(),
        Some(StyleValue::Number(value)) => value.to_string(),
        Some(other) => format!("{other:?}"),
        None => "(absent)".to_string(),
    }
}

/// `bg-white`, `bg-black`, and the gray ladder swap values in dark mode.
fn theme_aware_colors() -> anyhow::Result<()> {
    println!("🌓 Example 1: Theme-aware colors");
    println!("────────────────────────────────");

    let engine = StyleEngine::new();
    let light = engine.resolve("bg-white text-gray-900");
    println!(
        "light: background {}, text {}",
        describe(&light, StyleProp::BackgroundColor),
        describe(&light, StyleProp::Color)
    );

    engine.set_dark_mode(true);
    let dark = engine.resolve("bg-white text-gray-900");
    println!(
        "dark:  background {}, text {}",
        describe(&dark, StyleProp::BackgroundColor),
        describe(&dark, StyleProp::Color)
    );
    println!();
    Ok(())
}

/// `dark:` tokens only contribute while dark mode is active.
fn dark_variants() -> anyhow::Result<()> {
    println!("🌙 Example 2: Dark variants");
    println!("───────────────────────────");

    let engine = StyleEngine::new();
    let classes = "bg-gray-100 dark:bg-gray-800 p-4";

    println!("light: {}", serde_json::to_string(&engine.resolve(classes))?);
    engine.set_dark_mode(true);
    println!("dark:  {}", serde_json::to_string(&engine.resolve(classes))?);
    println!();
    Ok(())
}

/// Listeners fire on every actual mode change, after the cache clears.
fn theme_subscriptions() {
    println!("🔔 Example 3: Theme subscriptions");
    println!("─────────────────────────────────");

    let engine = Arc::new(StyleEngine::new());
    let watcher = Arc::clone(&engine);
    let id = engine.subscribe(move || {
        println!(
            "  listener: theme changed, dark = {}, cache entries = {}",
            watcher.is_dark(),
            watcher.cache_stats().entries
        );
    });

    engine.set_dark_mode(true);
    engine.set_dark_mode(true); // No change, no notification.
    engine.set_dark_mode(false);

    engine.unsubscribe(id);
    engine.set_dark_mode(true); // Silent: the listener is gone.
    println!();
}

/// Several engines can watch one shared context.
fn shared_context() -> anyhow::Result<()> {
    println!("🤝 Example 4: Shared theme context");
    println!("──────────────────────────────────");

    let context = Arc::new(ThemeContext::new(false));
    let screen = StyleEngine::with_theme_context(Arc::clone(&context));
    let overlay = StyleEngine::with_theme_context(context);

    screen.set_dark_mode(true);
    println!(
        "overlay sees dark = {}, resolves bg-white to {}",
        overlay.is_dark(),
        describe(&overlay.resolve("bg-white"), StyleProp::BackgroundColor)
    );
    println!();
    Ok(())
}

/// Breakpoint variants activate once the viewport reaches their width.
fn responsive_breakpoints() -> anyhow::Result<()> {
    println!("📐 Example 5: Responsive breakpoints");
    println!("────────────────────────────────────");

    let engine = StyleEngine::new();
    let classes = "p-2 md:p-4 lg:p-6";

    for (label, width, height) in [("phone", 375.0, 667.0), ("tablet", 800.0, 1024.0), ("desktop", 1280.0, 800.0)] {
        engine.set_viewport(width, height);
        let record = engine.resolve(classes);
        println!(
            "{label:>8} ({width}x{height}): padding {}",
            describe(&record, StyleProp::Padding)
        );
    }
    println!();
    Ok(())
}
