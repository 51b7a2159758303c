use dioxus::prelude::*;

/// A modal popup menu.
///
/// Controlled by the caller: nothing is rendered while `open` is false.
/// When open, clicking the backdrop or pressing Escape asks the caller to
/// close it through `on_close`.
#[component]
pub fn Menu(
    open: bool,
    on_close: EventHandler<()>,
    #[props(default)] label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    let base = vec![
        Attribute::new("class", "menu-panel", None, false),
        Attribute::new("role", "menu", None, false),
        Attribute::new("data-state", "open", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "menu-backdrop",
            onclick: move |_| on_close.call(()),
        }
        div {
            "aria-label": label,
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            ..merged,
            {children}
        }
    }
}

/// A selectable row inside a [`Menu`].
#[component]
pub fn MenuItem(
    #[props(default = false)] selected: bool,
    onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new(
            "class",
            if selected { "menu-item selected" } else { "menu-item" },
            None,
            false,
        ),
        Attribute::new("role", "menuitemradio", None, false),
        Attribute::new(
            "aria-checked",
            if selected { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            tabindex: "-1",
            onclick: move |evt| onclick.call(evt),
            ..merged,
            {children}
        }
    }
}
