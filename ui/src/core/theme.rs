//! Light/dark theme state. Cosmetic only: the preference never affects data.
//!
//! On wasm the chosen theme is remembered in `localStorage`; native builds
//! start light each launch, which is fine for a tool whose data also resets
//! per session.

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "glucoplot.theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value for the shell's `data-theme` attribute; the CSS keys off it.
    pub fn as_attr(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Load the persisted preference, falling back to light.
    pub fn load() -> Self {
        persisted().and_then(|raw| Theme::from_attr(&raw)).unwrap_or_default()
    }

    /// Persist the preference (best effort; ignored where storage is absent).
    pub fn store(self) {
        persist(self.as_attr());
    }
}

#[cfg(target_arch = "wasm32")]
fn persisted() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}

#[cfg(not(target_arch = "wasm32"))]
fn persisted() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn persist(value: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn persist(_value: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_modes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn attr_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_attr(theme.as_attr()), Some(theme));
        }
        assert_eq!(Theme::from_attr("solarized"), None);
    }

    #[test]
    fn load_defaults_to_light_without_storage() {
        // Native test runs have no localStorage backing.
        assert_eq!(Theme::load(), Theme::Light);
    }
}
