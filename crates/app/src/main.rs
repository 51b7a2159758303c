use dioxus::prelude::*;

mod config;
mod documents;

use documents::DocumentListPage;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Load config and pick the widget locale once, before any page renders.
    let ui_config = use_hook(|| {
        let config = config::load_ui_config().clone();
        config::apply_locale(&config);
        config
    });

    use_context_provider(|| ui_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        DocumentListPage {}
    }
}
