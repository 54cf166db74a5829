//! Shared UI crate for Glucoplot. All cross-platform logic and views live here.

use dioxus::prelude::*;

pub mod chart;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Application navbar with brand, theme toggle and locale switcher.
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    // Light/dark mode button (components/theme_toggle.rs)
    pub mod theme_toggle;
    pub use theme_toggle::ThemeToggle;
}

/// Unified shared theme, linked by the web shell and inlined by desktop builds.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
