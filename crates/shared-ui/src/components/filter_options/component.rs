use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaChevronDown;
use dioxus_free_icons::Icon;
use shared_types::{is_selected, trigger_label, FilterOption};

use super::{use_filter_controller, FilterController};
use crate::components::{Button, ButtonVariant, Menu, MenuItem, SearchInput};
use crate::fl;

#[derive(Props, Clone, PartialEq)]
pub struct FilterOptionsProps {
    /// Choices offered in the menu, in display order.
    pub options: Vec<FilterOption>,
    /// Which list column this dropdown filters. Exposed as `data-column`.
    pub column: String,
    /// Key of the option the caller currently applies, if any.
    #[props(!optional)]
    pub active_key: Option<String>,
    /// Trigger text when nothing is selected; also the menu's accessible name.
    /// Defaults to the translated `filter-options-default` message.
    #[props(default = fl!("filter-options-default"))]
    pub default_label: String,
    /// Prepended to the selected option's label on the trigger.
    #[props(default)]
    pub selected_prefix: String,
    /// Render a search box above the options.
    #[props(default = false)]
    pub searchable: bool,
    /// Whether the menu is already open on first render.
    #[props(default = false)]
    pub default_open: bool,
    /// Extra classes for the trigger button.
    #[props(default)]
    pub class: String,
    /// Called with the key of the row the user picked.
    pub on_select: EventHandler<Option<String>>,
}

/// Dropdown filter for list views.
///
/// A controlled component: the caller owns the active key and receives the
/// user's choice through `on_select`. The only local state is which options
/// the menu lists and whether it is open.
#[component]
pub fn FilterOptions(props: FilterOptionsProps) -> Element {
    let controller = use_filter_controller(&props.options, props.default_open, props.on_select);

    rsx! {
        FilterOptionsView {
            controller,
            options: props.options.clone(),
            column: props.column.clone(),
            active_key: props.active_key.clone(),
            default_label: props.default_label.clone(),
            selected_prefix: props.selected_prefix.clone(),
            searchable: props.searchable,
            class: props.class.clone(),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct FilterOptionsViewProps {
    pub controller: FilterController,
    pub options: Vec<FilterOption>,
    pub column: String,
    #[props(!optional)]
    pub active_key: Option<String>,
    pub default_label: String,
    #[props(default)]
    pub selected_prefix: String,
    #[props(default = false)]
    pub searchable: bool,
    #[props(default)]
    pub class: String,
}

/// Markup of [`FilterOptions`] driven by an existing [`FilterController`].
#[component]
pub fn FilterOptionsView(props: FilterOptionsViewProps) -> Element {
    let controller = props.controller;

    let label = trigger_label(
        &props.options,
        props.active_key.as_deref(),
        &props.default_label,
        &props.selected_prefix,
    );
    let is_open = controller.is_open();
    let visible = controller.visible(&props.options);
    // Duplicate keys mark only their first row.
    let selected_row = visible
        .iter()
        .position(|o| is_selected(o, props.active_key.as_deref()));

    let focus_options = props.options.clone();
    let input_options = props.options.clone();
    let column = props.column.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "filter-options", "data-column": "{props.column}",
            Button {
                variant: ButtonVariant::Ghost,
                expanded: is_open,
                class: "filter-options-trigger {props.class}",
                onclick: move |_| controller.toggle(),
                span { class: "filter-options-label", "{label}" }
                Icon::<FaChevronDown> { icon: FaChevronDown, width: 10, height: 10 }
            }
            Menu {
                open: is_open,
                label: props.default_label.clone(),
                on_close: move |_| controller.close(),
                if props.searchable {
                    div { class: "filter-options-search",
                        SearchInput {
                            placeholder: fl!("filter-placeholder"),
                            on_focus: move |_| controller.focus(&focus_options),
                            on_input: move |evt: FormEvent| {
                                let text = evt.value();
                                if controller.input(&input_options, &text) {
                                    tracing::debug!(column = %column, text = %text, "filter options narrowed");
                                }
                            },
                        }
                    }
                }
                // Keys may repeat in caller data; the position keeps sibling keys unique.
                for (i, option) in visible.into_iter().enumerate() {
                    FilterOptionRow {
                        key: "{i}-{option.key}",
                        selected: selected_row == Some(i),
                        option: option.clone(),
                        on_activate: move |key: String| controller.activate(&key),
                    }
                }
            }
        }
    }
}

#[component]
fn FilterOptionRow(option: FilterOption, selected: bool, on_activate: EventHandler<String>) -> Element {
    let key = option.key.clone();

    rsx! {
        MenuItem {
            selected,
            onclick: move |_| on_activate.call(key.clone()),
            if let Some(note) = &option.note {
                div { class: "filter-options-labelled",
                    "{option.label}"
                    p { class: "filter-options-note", "{note}" }
                }
            } else {
                "{option.label}"
            }
        }
    }
}
