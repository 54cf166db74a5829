use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::theme::Theme;
use ui::views::Home;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Shared reactive state for the whole shell: the language code (updated
    // by the navbar's locale switcher) and the cosmetic theme preference.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    let theme = use_signal(Theme::load);
    use_context_provider(|| theme);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        div { class: "app-shell", "data-theme": theme().as_attr(),
            AppNavbar {}
            Home {}
        }
    }
}
