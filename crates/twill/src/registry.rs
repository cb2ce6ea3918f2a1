//! Custom utility registry
//!
//! User-registered class names overlay the built-in tables: the
//! pipeline consults this registry before any derived or static
//! resolution. Names may be registered with a CSS-style leading dot;
//! lookups succeed with or without it.

use ahash::AHashMap;

use crate::record::StyleRecord;

#[derive(Debug, Clone, Default)]
pub struct UtilityRegistry {
    entries: AHashMap<String, StyleRecord>,
}

impl UtilityRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a utility. A leading `.` is stripped so `.btn` and
    /// `btn` name the same entry.
    pub fn insert(&mut self, name: &str, style: StyleRecord) {
        let canonical = name.strip_prefix('.').unwrap_or(name);
        self.entries.insert(canonical.to_string(), style);
    }

    /// Look a token up, with and without a leading `.`.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&StyleRecord> {
        if let Some(style) = self.entries.get(token) {
            return Some(style);
        }
        token
            .strip_prefix('.')
            .and_then(|stripped| self.entries.get(stripped))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{StyleProp, StyleValue};

    #[test]
    fn test_dot_prefix_is_normalized() {
        let mut registry = UtilityRegistry::new();
        registry.insert(".btn", StyleRecord::new().with(StyleProp::Padding, 12.0));

        assert!(registry.get("btn").is_some());
        assert!(registry.get(".btn").is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_reregistration_overwrites() {
        let mut registry = UtilityRegistry::new();
        registry.insert("btn", StyleRecord::new().with(StyleProp::Padding, 12.0));
        registry.insert(".btn", StyleRecord::new().with(StyleProp::Padding, 20.0));

        let style = registry.get("btn").expect("btn registered");
        assert_eq!(style.get(StyleProp::Padding), Some(&StyleValue::Number(20.0)));
    }

    #[test]
    fn test_unknown_name_misses() {
        let registry = UtilityRegistry::new();
        assert!(registry.get("ghost").is_none());
    }
}
