//! Utility-class strings compiled into flattened native style records
//!
//! `twill` resolves Tailwind-style class strings
//! (`"flex-1 bg-blue-500 dark:bg-gray-900 md:p-4"`) into flat
//! property→value records a native renderer can apply directly.
//! Resolution is cached, theme-aware (dark mode, viewport breakpoints,
//! configurable scales), and infallible: a token nothing recognizes
//! contributes nothing.
//!
//! Key components:
//! - [`StyleEngine`]: cached resolution plus the mutating operations
//! - [`ThemeConfig`]: palette and scale configuration with deep-merge
//! - [`ThemeContext`]: the shared dark-mode flag and its subscribers
//! - [`StyleRecord`]: the flattened output record
//!
//! ```
//! use twill::{StyleEngine, StyleProp};
//!
//! let engine = StyleEngine::new();
//! let record = engine.resolve("flex-1 items-center bg-blue-500 p-4");
//! assert!(record.get(StyleProp::BackgroundColor).is_some());
//! ```

use std::path::PathBuf;

pub mod color;
pub mod config;
pub mod engine;
mod lock;
pub mod pipeline;
pub mod record;
pub mod registry;
pub mod tables;
pub mod theme;
pub mod units;
pub mod variants;

pub use color::apply_opacity;
pub use config::{ColorEntry, ThemeConfig};
pub use engine::{CacheStats, StyleEngine, StyleSource, Viewport};
pub use pipeline::ComponentHint;
pub use record::{StyleProp, StyleRecord, StyleValue, Transform};
pub use registry::UtilityRegistry;
pub use theme::{SubscriberId, ThemeContext};
pub use units::{to_native, to_native_number, to_native_unit};

/// Errors from the fallible configuration surface. Resolution itself
/// never fails.
#[derive(Debug, thiserror::Error)]
pub enum TwillError {
    /// Failed to read a theme configuration file
    #[error("Failed to read theme config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse a theme configuration document
    #[error("Failed to parse theme config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
