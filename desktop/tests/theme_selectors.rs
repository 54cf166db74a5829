#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (chart, brush,
  statistics table, cards) remain present in the unified shared theme:
  ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile-time embed the unified theme using `include_str!` pointing to the
  shared `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "[data-theme=\"dark\"]",
    "body {",
    ".app-shell",
    ".page {",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    // Cards
    ".card {",
    ".card__header",
    ".card__body",
    ".card__range",
    ".card__upload",
    // Chart
    ".chart-plot",
    ".chart-plot--empty",
    ".chart-plot__grid",
    ".chart-plot__tick-label",
    ".chart-plot__tooltip",
    ".chart-plot__legend",
    ".chart-plot__legend-swatch",
    // Brush
    ".chart-brush",
    ".chart-brush__backdrop",
    ".chart-brush__window",
    ".chart-brush__traveller",
    // Statistics table
    ".stats-table",
    ".stats-table__placeholder",
    // Utilities
    ".visually-hidden",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 960px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_500,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn dark_mode_overrides_core_variables() {
    // The toggle is cosmetic, but a dark block without these would render a
    // half-themed page.
    let dark_block = THEME_CSS
        .split("[data-theme=\"dark\"]")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .unwrap_or_default();

    for var in ["--color-bg", "--color-surface", "--color-text"] {
        assert!(
            dark_block.contains(var),
            "Dark theme block is missing `{var}`"
        );
    }
}
