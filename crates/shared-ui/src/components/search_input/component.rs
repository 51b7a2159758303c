use dioxus::prelude::*;

/// A search box for narrowing lists.
///
/// Uncontrolled unless `value` is given; callers usually only listen to
/// `on_input` and `on_focus`.
#[component]
pub fn SearchInput(
    #[props(default)] value: Option<String>,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_focus: EventHandler<FocusEvent>,
    #[props(default)] placeholder: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "search-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "search",
            value: value,
            placeholder: placeholder,
            autocomplete: "off",
            oninput: move |evt| on_input.call(evt),
            onfocus: move |evt| on_focus.call(evt),
            ..merged,
        }
    }
}
