use dioxus::prelude::*;

/// Filter bar: lays out filter dropdowns and clear buttons in a row above a list.
#[component]
pub fn FilterBar(#[props(default)] label: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "filter-bar",
            role: "toolbar",
            "aria-label": label,
            {children}
        }
    }
}
