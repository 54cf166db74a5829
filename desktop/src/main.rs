#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::theme::Theme;
use ui::views::Home;

// Embedded shared theme (ui/assets/theme/main.css); no separate desktop
// /assets duplicate needed.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Glucoplot – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Mirror the web shell: shared language code + theme signals via context.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    let theme = use_signal(Theme::load);
    use_context_provider(|| theme);

    rsx! {
        // Always inline the embedded CSS (no external file dependency for
        // desktop builds).
        document::Style { "{MAIN_CSS_INLINE}" }

        div { class: "app-shell", "data-theme": theme().as_attr(),
            AppNavbar {}
            Home {}
        }
    }
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
