//! Variant classification
//!
//! Splits `dark:` / breakpoint prefixes off a token and reports the
//! conditions under which the remaining base class applies. Unknown
//! prefixes (`hover:` and friends) are deliberately left on the token
//! so the resolution pipeline can report them as unsupported.

use crate::config::ThemeConfig;

/// Breakpoint thresholds in ascending width order. A token's priority
/// rank is its breakpoint's position in this table.
#[derive(Debug, Clone)]
pub struct Screens {
    ordered: Vec<(String, f64)>,
}

impl Screens {
    #[must_use]
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            ordered: config.breakpoints_ascending(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    fn rank(&self, name: &str) -> Option<usize> {
        self.ordered.iter().position(|(screen, _)| screen == name)
    }

    /// A breakpoint is active when the viewport width has reached its
    /// threshold.
    #[must_use]
    pub fn is_active(&self, rank: usize, width: f64) -> bool {
        self.ordered.get(rank).is_some_and(|(_, min)| width >= *min)
    }
}

/// A classified token: the bare class plus its activation conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenVariant<'a> {
    pub base: &'a str,
    pub requires_dark: bool,
    /// Rank into the ascending breakpoint table, when prefixed.
    pub screen: Option<usize>,
}

#[must_use]
pub fn classify<'a>(token: &'a str, screens: &Screens) -> TokenVariant<'a> {
    let mut base = token;
    let mut requires_dark = false;
    let mut screen = None;

    while let Some((head, tail)) = base.split_once(':') {
        if tail.is_empty() {
            break;
        }
        if !requires_dark && head == "dark" {
            requires_dark = true;
            base = tail;
            continue;
        }
        if screen.is_none() {
            if let Some(rank) = screens.rank(head) {
                screen = Some(rank);
                base = tail;
                continue;
            }
        }
        break;
    }

    TokenVariant {
        base,
        requires_dark,
        screen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_screens() -> Screens {
        Screens::from_config(&ThemeConfig::standard())
    }

    #[test]
    fn test_plain_token() {
        let screens = standard_screens();
        let variant = classify("bg-blue-500", &screens);
        assert_eq!(variant.base, "bg-blue-500");
        assert!(!variant.requires_dark);
        assert_eq!(variant.screen, None);
    }

    #[test]
    fn test_dark_prefix_stripped() {
        let screens = standard_screens();
        let variant = classify("dark:bg-gray-900", &screens);
        assert_eq!(variant.base, "bg-gray-900");
        assert!(variant.requires_dark);
    }

    #[test]
    fn test_breakpoint_rank_ascends() {
        let screens = standard_screens();
        assert_eq!(classify("sm:p-2", &screens).screen, Some(0));
        assert_eq!(classify("md:p-2", &screens).screen, Some(1));
        assert_eq!(classify("2xl:p-2", &screens).screen, Some(4));
    }

    #[test]
    fn test_breakpoint_combined_with_dark() {
        let screens = standard_screens();
        let variant = classify("md:dark:bg-black", &screens);
        assert_eq!(variant.base, "bg-black");
        assert!(variant.requires_dark);
        assert_eq!(variant.screen, Some(1));
    }

    #[test]
    fn test_unknown_prefix_left_for_the_pipeline() {
        let screens = standard_screens();
        let variant = classify("hover:opacity-50", &screens);
        assert_eq!(variant.base, "hover:opacity-50");
        assert!(!variant.requires_dark);
        assert_eq!(variant.screen, None);
    }

    #[test]
    fn test_activation_threshold_is_inclusive() {
        let screens = standard_screens();
        let md = classify("md:p-4", &screens).screen.expect("md rank");
        assert!(!screens.is_active(md, 767.0));
        assert!(screens.is_active(md, 768.0));
        assert!(screens.is_active(md, 1600.0));
    }
}
