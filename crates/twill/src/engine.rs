//! The style engine: cached, theme-aware utility-class resolution
//!
//! An engine owns its configuration, custom-utility registry, viewport,
//! and resolution cache, and shares a [`ThemeContext`]. Resolution is
//! infallible: unknown tokens contribute nothing and the worst outcome
//! is a missing property. Every mutating operation (registration,
//! configuration, theme or viewport change) clears the whole cache.
//!
//! Key components:
//! - `StyleEngine`: the resolution entry points and mutating operations
//! - `StyleSource`: class strings or literal records for composition
//! - `CacheStats`: cache observability counters

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::config::ThemeConfig;
use crate::lock::LockExt;
use crate::pipeline::{self, ComponentHint, ResolveCx};
use crate::record::StyleRecord;
use crate::registry::UtilityRegistry;
use crate::theme::{SubscriberId, ThemeContext};
use crate::units::{REFERENCE_VIEWPORT_HEIGHT, REFERENCE_VIEWPORT_WIDTH};
use crate::variants::{self, Screens};

/// Viewport dimensions; breakpoint activation compares against `width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: REFERENCE_VIEWPORT_WIDTH,
            height: REFERENCE_VIEWPORT_HEIGHT,
        }
    }
}

/// One input to [`StyleEngine::merge_styles`]: a class string to
/// resolve, or an already-built record to splice in as-is.
#[derive(Debug, Clone)]
pub enum StyleSource<'a> {
    Classes(&'a str),
    Record(StyleRecord),
}

impl<'a> From<&'a str> for StyleSource<'a> {
    fn from(classes: &'a str) -> Self {
        StyleSource::Classes(classes)
    }
}

impl From<StyleRecord> for StyleSource<'_> {
    fn from(record: StyleRecord) -> Self {
        StyleSource::Record(record)
    }
}

/// Cache observability counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Cached resolutions are keyed by everything that can change the
/// output between identical calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    tokens: String,
    is_dark: bool,
    hint: Option<ComponentHint>,
}

pub struct StyleEngine {
    config: RwLock<ThemeConfig>,
    flat_colors: RwLock<AHashMap<String, String>>,
    screens: RwLock<Screens>,
    registry: RwLock<UtilityRegistry>,
    viewport: RwLock<Viewport>,
    theme: Arc<ThemeContext>,
    cache: RwLock<AHashMap<CacheKey, Arc<Vec<StyleRecord>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl StyleEngine {
    /// Engine with the standard theme and a private theme context.
    #[must_use]
    pub fn new() -> Self {
        Self::with_theme_context(Arc::new(ThemeContext::default()))
    }

    /// Engine with a configuration patch merged over the standard theme.
    #[must_use]
    pub fn with_config(patch: ThemeConfig) -> Self {
        let engine = Self::new();
        engine.configure(patch);
        engine
    }

    /// Engine sharing an existing theme context, so several engines can
    /// follow one dark-mode flag.
    #[must_use]
    pub fn with_theme_context(theme: Arc<ThemeContext>) -> Self {
        let config = ThemeConfig::standard();
        let flat_colors = config.flattened_colors();
        let screens = Screens::from_config(&config);
        Self {
            config: RwLock::new(config),
            flat_colors: RwLock::new(flat_colors),
            screens: RwLock::new(screens),
            registry: RwLock::new(UtilityRegistry::new()),
            viewport: RwLock::new(Viewport::default()),
            theme,
            cache: RwLock::new(AHashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    // --- Resolution ---------------------------------------------------

    /// Resolve a whitespace-separated utility-class string into one
    /// flattened style record.
    #[must_use]
    pub fn resolve(&self, classes: &str) -> StyleRecord {
        self.resolve_with(classes, None)
    }

    /// Like [`resolve`](Self::resolve), targeting a specific native
    /// component kind.
    #[must_use]
    pub fn resolve_for(&self, classes: &str, hint: ComponentHint) -> StyleRecord {
        self.resolve_with(classes, Some(hint))
    }

    /// Resolve a token list without joining it into a string first.
    #[must_use]
    pub fn resolve_tokens(&self, tokens: &[&str]) -> StyleRecord {
        self.resolve(&tokens.join(" "))
    }

    fn resolve_with(&self, classes: &str, hint: Option<ComponentHint>) -> StyleRecord {
        let is_dark = self.theme.is_dark();
        let key = CacheKey {
            tokens: classes.to_string(),
            is_dark,
            hint,
        };

        if let Some(partials) = self.cache.read_or_recover().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return StyleRecord::flatten(partials.iter());
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let partials = Arc::new(self.resolve_uncached(classes, is_dark, hint));
        let record = StyleRecord::flatten(partials.iter());
        self.cache.write_or_recover().insert(key, partials);
        record
    }

    /// Cache-miss path: classify and resolve every token, keeping
    /// plain/dark partials in written order and appending breakpoint
    /// partials afterwards in ascending threshold order.
    #[tracing::instrument(
        skip_all,
        fields(token_count = classes.split_whitespace().count(), is_dark = is_dark)
    )]
    fn resolve_uncached(
        &self,
        classes: &str,
        is_dark: bool,
        hint: Option<ComponentHint>,
    ) -> Vec<StyleRecord> {
        let config = self.config.read_or_recover();
        let flat_colors = self.flat_colors.read_or_recover();
        let registry = self.registry.read_or_recover();
        let screens = self.screens.read_or_recover();
        let width = self.viewport.read_or_recover().width;

        let cx = ResolveCx {
            config: &config,
            flat_colors: &flat_colors,
            registry: &registry,
            is_dark,
            hint,
        };

        let tokens: SmallVec<[&str; 8]> = classes.split_whitespace().collect();
        let mut plain: Vec<StyleRecord> = Vec::with_capacity(tokens.len());
        let mut by_screen: Vec<Vec<StyleRecord>> = vec![Vec::new(); screens.len()];

        for token in tokens {
            let variant = variants::classify(token, &screens);
            if variant.requires_dark && !is_dark {
                continue;
            }
            match variant.screen {
                Some(rank) => {
                    if !screens.is_active(rank, width) {
                        continue;
                    }
                    if let Some(record) = pipeline::resolve_token(variant.base, &cx) {
                        by_screen[rank].push(record);
                    }
                }
                None => {
                    if let Some(record) = pipeline::resolve_token(variant.base, &cx) {
                        plain.push(record);
                    }
                }
            }
        }

        let mut ordered = plain;
        for bucket in by_screen {
            ordered.extend(bucket);
        }
        ordered
    }

    /// Compose class strings and literal records, last write wins.
    #[must_use]
    pub fn merge_styles<'a>(&self, parts: impl IntoIterator<Item = StyleSource<'a>>) -> StyleRecord {
        let mut merged = StyleRecord::new();
        for part in parts {
            match part {
                StyleSource::Classes(classes) => merged.merge_from(&self.resolve(classes)),
                StyleSource::Record(record) => merged.merge_from(&record),
            }
        }
        merged
    }

    // --- Mutating operations -------------------------------------------

    /// Register a custom utility class (a leading `.` is stripped).
    pub fn register_utility(&self, name: &str, style: StyleRecord) {
        self.registry.write_or_recover().insert(name, style);
        self.clear_cache();
    }

    /// Register several custom utilities in one cache invalidation.
    pub fn register_utilities<'a>(
        &self,
        entries: impl IntoIterator<Item = (&'a str, StyleRecord)>,
    ) {
        {
            let mut registry = self.registry.write_or_recover();
            for (name, style) in entries {
                registry.insert(name, style);
            }
        }
        self.clear_cache();
    }

    /// Deep-merge a configuration patch into the active theme.
    pub fn configure(&self, patch: ThemeConfig) {
        {
            let mut config = self.config.write_or_recover();
            config.merge(patch);
            *self.flat_colors.write_or_recover() = config.flattened_colors();
            *self.screens.write_or_recover() = Screens::from_config(&config);
        }
        self.clear_cache();
    }

    /// Flip the shared dark-mode flag. On an actual change the cache is
    /// cleared before subscribers are notified, so re-entrant
    /// resolutions from listeners see fresh state.
    pub fn set_dark_mode(&self, is_dark: bool) {
        if self.theme.set_dark(is_dark) {
            self.clear_cache();
            self.theme.notify();
        }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Update the viewport used for breakpoint activation. Treated as a
    /// configuration change: the cache is cleared.
    pub fn set_viewport(&self, width: f64, height: f64) {
        *self.viewport.write_or_recover() = Viewport { width, height };
        self.clear_cache();
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        *self.viewport.read_or_recover()
    }

    #[must_use]
    pub fn theme_context(&self) -> &Arc<ThemeContext> {
        &self.theme
    }

    /// Register a theme-change listener on the shared context.
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> SubscriberId {
        self.theme.subscribe(listener)
    }

    /// Remove a theme-change listener; returns whether it was present.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.theme.unsubscribe(id)
    }

    // --- Cache ----------------------------------------------------------

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            entries: self.cache.read_or_recover().len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    pub fn clear_cache(&self) {
        self.cache.write_or_recover().clear();
    }
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StyleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleEngine")
            .field("is_dark", &self.is_dark())
            .field("cached_entries", &self.cache.read_or_recover().len())
            .field("custom_utilities", &self.registry.read_or_recover().len())
            .finish_non_exhaustive()
    }
}
