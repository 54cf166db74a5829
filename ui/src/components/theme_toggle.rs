//! Light/dark mode button. Purely cosmetic; flips the shared theme signal.

use dioxus::prelude::*;

use crate::core::theme::Theme;
use crate::t;

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<Theme>>();
    let current = theme();

    let label = match current {
        Theme::Light => t!("theme-toggle-to-dark"),
        Theme::Dark => t!("theme-toggle-to-light"),
    };
    let glyph = match current {
        Theme::Light => "🌙",
        Theme::Dark => "☀️",
    };

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            title: "{label}",
            aria_label: "{label}",
            onclick: move |_| {
                let next = theme().toggled();
                theme.set(next);
                next.store();
            },
            span { aria_hidden: "true", "{glyph}" }
        }
    }
}
