//! Built-in color palette data
//!
//! Chromatic families feed the default theme configuration; the
//! theme-aware table carries paired light/dark values for white, black,
//! and the gray-like families (dark values walk the shade ladder in
//! reverse); the basic named table maps bare family names to their
//! mid-shade value.

/// `(family, [(shade, hex)])` for the 17 chromatic families, shades 50–950.
pub static CHROMATIC_FAMILIES: &[(&str, &[(&str, &str)])] = &[
    (
        "amber",
        &[
            ("50", "#fffbeb"),
            ("100", "#fef3c7"),
            ("200", "#fde68a"),
            ("300", "#fcd34d"),
            ("400", "#fbbf24"),
            ("500", "#f59e0b"),
            ("600", "#d97706"),
            ("700", "#b45309"),
            ("800", "#92400e"),
            ("900", "#78350f"),
            ("950", "#451a03"),
        ],
    ),
    (
        "blue",
        &[
            ("50", "#eff6ff"),
            ("100", "#dbeafe"),
            ("200", "#bfdbfe"),
            ("300", "#93c5fd"),
            ("400", "#60a5fa"),
            ("500", "#3b82f6"),
            ("600", "#2563eb"),
            ("700", "#1d4ed8"),
            ("800", "#1e40af"),
            ("900", "#1e3a8a"),
            ("950", "#172554"),
        ],
    ),
    (
        "cyan",
        &[
            ("50", "#ecfeff"),
            ("100", "#cffafe"),
            ("200", "#a5f3fc"),
            ("300", "#67e8f9"),
            ("400", "#22d3ee"),
            ("500", "#06b6d4"),
            ("600", "#0891b2"),
            ("700", "#0e7490"),
            ("800", "#155e75"),
            ("900", "#164e63"),
            ("950", "#083344"),
        ],
    ),
    (
        "emerald",
        &[
            ("50", "#ecfdf5"),
            ("100", "#d1fae5"),
            ("200", "#a7f3d0"),
            ("300", "#6ee7b7"),
            ("400", "#34d399"),
            ("500", "#10b981"),
            ("600", "#059669"),
            ("700", "#047857"),
            ("800", "#065f46"),
            ("900", "#064e3b"),
            ("950", "#022c22"),
        ],
    ),
    (
        "fuchsia",
        &[
            ("50", "#fdf4ff"),
            ("100", "#fae8ff"),
            ("200", "#f5d0fe"),
            ("300", "#f0abfc"),
            ("400", "#e879f9"),
            ("500", "#d946ef"),
            ("600", "#c026d3"),
            ("700", "#a21caf"),
            ("800", "#86198f"),
            ("900", "#701a75"),
            ("950", "#4a044e"),
        ],
    ),
    (
        "green",
        &[
            ("50", "#f0fdf4"),
            ("100", "#dcfce7"),
            ("200", "#bbf7d0"),
            ("300", "#86efac"),
            ("400", "#4ade80"),
            ("500", "#22c55e"),
            ("600", "#16a34a"),
            ("700", "#15803d"),
            ("800", "#166534"),
            ("900", "#14532d"),
            ("950", "#052e16"),
        ],
    ),
    (
        "indigo",
        &[
            ("50", "#eef2ff"),
            ("100", "#e0e7ff"),
            ("200", "#c7d2fe"),
            ("300", "#a5b4fc"),
            ("400", "#818cf8"),
            ("500", "#6366f1"),
            ("600", "#4f46e5"),
            ("700", "#4338ca"),
            ("800", "#3730a3"),
            ("900", "#312e81"),
            ("950", "#1e1b4b"),
        ],
    ),
    (
        "lime",
        &[
            ("50", "#f7fee7"),
            ("100", "#ecfccb"),
            ("200", "#d9f99d"),
            ("300", "#bef264"),
            ("400", "#a3e635"),
            ("500", "#84cc16"),
            ("600", "#65a30d"),
            ("700", "#4d7c0f"),
            ("800", "#3f6212"),
            ("900", "#365314"),
            ("950", "#1a2e05"),
        ],
    ),
    (
        "orange",
        &[
            ("50", "#fff7ed"),
            ("100", "#ffedd5"),
            ("200", "#fed7aa"),
            ("300", "#fdba74"),
            ("400", "#fb923c"),
            ("500", "#f97316"),
            ("600", "#ea580c"),
            ("700", "#c2410c"),
            ("800", "#9a3412"),
            ("900", "#7c2d12"),
            ("950", "#431407"),
        ],
    ),
    (
        "pink",
        &[
            ("50", "#fdf2f8"),
            ("100", "#fce7f3"),
            ("200", "#fbcfe8"),
            ("300", "#f9a8d4"),
            ("400", "#f472b6"),
            ("500", "#ec4899"),
            ("600", "#db2777"),
            ("700", "#be185d"),
            ("800", "#9d174d"),
            ("900", "#831843"),
            ("950", "#500724"),
        ],
    ),
    (
        "purple",
        &[
            ("50", "#faf5ff"),
            ("100", "#f3e8ff"),
            ("200", "#e9d5ff"),
            ("300", "#d8b4fe"),
            ("400", "#c084fc"),
            ("500", "#a855f7"),
            ("600", "#9333ea"),
            ("700", "#7e22ce"),
            ("800", "#6b21a8"),
            ("900", "#581c87"),
            ("950", "#3b0764"),
        ],
    ),
    (
        "red",
        &[
            ("50", "#fef2f2"),
            ("100", "#fee2e2"),
            ("200", "#fecaca"),
            ("300", "#fca5a5"),
            ("400", "#f87171"),
            ("500", "#ef4444"),
            ("600", "#dc2626"),
            ("700", "#b91c1c"),
            ("800", "#991b1b"),
            ("900", "#7f1d1d"),
            ("950", "#450a0a"),
        ],
    ),
    (
        "rose",
        &[
            ("50", "#fff1f2"),
            ("100", "#ffe4e6"),
            ("200", "#fecdd3"),
            ("300", "#fda4af"),
            ("400", "#fb7185"),
            ("500", "#f43f5e"),
            ("600", "#e11d48"),
            ("700", "#be123c"),
            ("800", "#9f1239"),
            ("900", "#881337"),
            ("950", "#4c0519"),
        ],
    ),
    (
        "sky",
        &[
            ("50", "#f0f9ff"),
            ("100", "#e0f2fe"),
            ("200", "#bae6fd"),
            ("300", "#7dd3fc"),
            ("400", "#38bdf8"),
            ("500", "#0ea5e9"),
            ("600", "#0284c7"),
            ("700", "#0369a1"),
            ("800", "#075985"),
            ("900", "#0c4a6e"),
            ("950", "#082f49"),
        ],
    ),
    (
        "teal",
        &[
            ("50", "#f0fdfa"),
            ("100", "#ccfbf1"),
            ("200", "#99f6e4"),
            ("300", "#5eead4"),
            ("400", "#2dd4bf"),
            ("500", "#14b8a6"),
            ("600", "#0d9488"),
            ("700", "#0f766e"),
            ("800", "#115e59"),
            ("900", "#134e4a"),
            ("950", "#042f2e"),
        ],
    ),
    (
        "violet",
        &[
            ("50", "#f5f3ff"),
            ("100", "#ede9fe"),
            ("200", "#ddd6fe"),
            ("300", "#c4b5fd"),
            ("400", "#a78bfa"),
            ("500", "#8b5cf6"),
            ("600", "#7c3aed"),
            ("700", "#6d28d9"),
            ("800", "#5b21b6"),
            ("900", "#4c1d95"),
            ("950", "#2e1065"),
        ],
    ),
    (
        "yellow",
        &[
            ("50", "#fefce8"),
            ("100", "#fef9c3"),
            ("200", "#fef08a"),
            ("300", "#fde047"),
            ("400", "#facc15"),
            ("500", "#eab308"),
            ("600", "#ca8a04"),
            ("700", "#a16207"),
            ("800", "#854d0e"),
            ("900", "#713f12"),
            ("950", "#422006"),
        ],
    ),
];

/// `(key, light, dark)` triples: white/black plus the gray-like families.
// Sorted for binary_search.
pub static THEME_AWARE: &[(&str, &str, &str)] = &[
    ("black", "#000000", "#ffffff"),
    ("gray-100", "#f3f4f6", "#1f2937"),
    ("gray-200", "#e5e7eb", "#374151"),
    ("gray-300", "#d1d5db", "#4b5563"),
    ("gray-400", "#9ca3af", "#6b7280"),
    ("gray-50", "#f9fafb", "#111827"),
    ("gray-500", "#6b7280", "#9ca3af"),
    ("gray-600", "#4b5563", "#d1d5db"),
    ("gray-700", "#374151", "#e5e7eb"),
    ("gray-800", "#1f2937", "#f3f4f6"),
    ("gray-900", "#111827", "#f9fafb"),
    ("neutral-100", "#f5f5f5", "#262626"),
    ("neutral-200", "#e5e5e5", "#404040"),
    ("neutral-300", "#d4d4d4", "#525252"),
    ("neutral-400", "#a3a3a3", "#737373"),
    ("neutral-50", "#fafafa", "#171717"),
    ("neutral-500", "#737373", "#a3a3a3"),
    ("neutral-600", "#525252", "#d4d4d4"),
    ("neutral-700", "#404040", "#e5e5e5"),
    ("neutral-800", "#262626", "#f5f5f5"),
    ("neutral-900", "#171717", "#fafafa"),
    ("slate-100", "#f1f5f9", "#1e293b"),
    ("slate-200", "#e2e8f0", "#334155"),
    ("slate-300", "#cbd5e1", "#475569"),
    ("slate-400", "#94a3b8", "#64748b"),
    ("slate-50", "#f8fafc", "#0f172a"),
    ("slate-500", "#64748b", "#94a3b8"),
    ("slate-600", "#475569", "#cbd5e1"),
    ("slate-700", "#334155", "#e2e8f0"),
    ("slate-800", "#1e293b", "#f1f5f9"),
    ("slate-900", "#0f172a", "#f8fafc"),
    ("stone-100", "#f5f5f4", "#292524"),
    ("stone-200", "#e7e5e4", "#44403c"),
    ("stone-300", "#d6d3d1", "#57534e"),
    ("stone-400", "#a8a29e", "#78716c"),
    ("stone-50", "#fafaf9", "#1c1917"),
    ("stone-500", "#78716c", "#a8a29e"),
    ("stone-600", "#57534e", "#d6d3d1"),
    ("stone-700", "#44403c", "#e7e5e4"),
    ("stone-800", "#292524", "#f5f5f4"),
    ("stone-900", "#1c1917", "#fafaf9"),
    ("white", "#ffffff", "#000000"),
    ("zinc-100", "#f4f4f5", "#27272a"),
    ("zinc-200", "#e4e4e7", "#3f3f46"),
    ("zinc-300", "#d4d4d8", "#52525b"),
    ("zinc-400", "#a1a1aa", "#71717a"),
    ("zinc-50", "#fafafa", "#18181b"),
    ("zinc-500", "#71717a", "#a1a1aa"),
    ("zinc-600", "#52525b", "#d4d4d8"),
    ("zinc-700", "#3f3f46", "#e4e4e7"),
    ("zinc-800", "#27272a", "#f4f4f5"),
    ("zinc-900", "#18181b", "#fafafa"),
];

/// Bare family names resolve to their mid-shade value; `transparent`
/// stays symbolic.
// Sorted for binary_search.
pub static BASIC_NAMED: &[(&str, &str)] = &[
    ("amber", "#f59e0b"),
    ("blue", "#3b82f6"),
    ("cyan", "#06b6d4"),
    ("emerald", "#10b981"),
    ("fuchsia", "#d946ef"),
    ("green", "#22c55e"),
    ("indigo", "#6366f1"),
    ("lime", "#84cc16"),
    ("orange", "#f97316"),
    ("pink", "#ec4899"),
    ("purple", "#a855f7"),
    ("red", "#ef4444"),
    ("rose", "#f43f5e"),
    ("sky", "#0ea5e9"),
    ("teal", "#14b8a6"),
    ("transparent", "transparent"),
    ("violet", "#8b5cf6"),
    ("yellow", "#eab308"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_searched_tables_sorted() {
        for window in THEME_AWARE.windows(2) {
            assert!(window[0].0 < window[1].0, "THEME_AWARE unsorted at {}", window[1].0);
        }
        for window in BASIC_NAMED.windows(2) {
            assert!(window[0].0 < window[1].0, "BASIC_NAMED unsorted at {}", window[1].0);
        }
    }

    #[test]
    fn test_chromatic_families_complete() {
        assert_eq!(CHROMATIC_FAMILIES.len(), 17);
        for (family, shades) in CHROMATIC_FAMILIES {
            assert_eq!(shades.len(), 11, "{family} should carry shades 50-950");
        }
    }

    #[test]
    fn test_dark_values_reverse_the_ladder() {
        let light_900 = THEME_AWARE
            .iter()
            .find(|(k, _, _)| *k == "gray-900")
            .map(|(_, light, _)| *light);
        let dark_50 = THEME_AWARE
            .iter()
            .find(|(k, _, _)| *k == "gray-50")
            .map(|(_, _, dark)| *dark);
        assert_eq!(light_900, dark_50);
    }
}
