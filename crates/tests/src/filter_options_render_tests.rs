use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_types::FilterOption;
use shared_ui::components::FilterOptions;

use crate::common::{count, people, render, row_texts, HarnessProps, DEFAULT_LABEL};

#[test]
fn test_trigger_shows_prefixed_label_for_active_key() {
    let html = render(HarnessProps::new(people()).active("b").closed());
    assert!(html.contains("Author: Bob"));
    assert!(!html.contains(DEFAULT_LABEL));
}

#[test]
fn test_trigger_shows_default_label_without_active_key() {
    let html = render(HarnessProps::new(people()).closed());
    assert!(html.contains(DEFAULT_LABEL));
    assert!(!html.contains("Author:"));
}

#[test]
fn test_trigger_shows_default_label_for_unknown_key() {
    let html = render(HarnessProps::new(people()).active("zzz").closed());
    assert!(html.contains(DEFAULT_LABEL));
    assert!(!html.contains("Author:"));
}

#[test]
fn test_duplicate_keys_resolve_to_first_option() {
    let options = vec![
        FilterOption::new("x", "First"),
        FilterOption::new("x", "Second"),
    ];
    let html = render(HarnessProps::new(options).active("x").closed());
    assert!(html.contains("Author: First"));
    assert!(!html.contains("Author: Second"));
}

#[test]
fn test_closed_menu_renders_no_rows() {
    let html = render(HarnessProps::new(people()).closed());
    assert!(!html.contains(r#"role="menu""#));
    assert_eq!(count(&html, "menuitemradio"), 0);
    assert!(html.contains(r#"aria-expanded="false""#));
}

#[test]
fn test_open_menu_lists_every_option_in_order() {
    let html = render(HarnessProps::new(people()));
    assert!(html.contains(r#"role="menu""#));
    assert!(html.contains(r#"aria-expanded="true""#));
    assert_eq!(row_texts(&html), vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn test_menu_is_labelled_by_default_label() {
    let html = render(HarnessProps::new(people()));
    assert!(html.contains(r#"aria-label="Any author""#));
}

#[test]
fn test_only_active_row_is_marked_selected() {
    let html = render(HarnessProps::new(people()).active("b"));
    assert_eq!(count(&html, r#"aria-checked="true""#), 1);
    assert_eq!(count(&html, r#"aria-checked="false""#), 2);

    let selected = html.split(r#"aria-checked="true""#).nth(1).unwrap();
    let row_end = selected.find("</div>").unwrap();
    assert!(selected[..row_end].contains("Bob"));
}

#[test]
fn test_no_row_selected_without_active_key() {
    let html = render(HarnessProps::new(people()));
    assert_eq!(count(&html, r#"aria-checked="true""#), 0);
}

#[test]
fn test_note_renders_as_secondary_line() {
    let html = render(HarnessProps::new(people()));
    assert_eq!(count(&html, "filter-options-note"), 1);
    assert!(html.contains("carol@example.com"));

    let note_at = html.find("carol@example.com").unwrap();
    let label_at = html.find("Carol<").unwrap();
    assert!(label_at < note_at);
}

#[test]
fn test_search_input_rendered_when_searchable() {
    let html = render(HarnessProps::new(people()).searchable());
    assert_eq!(count(&html, r#"type="search""#), 1);
    assert!(html.contains(r#"placeholder="Filter…""#));
}

#[test]
fn test_search_input_absent_when_not_searchable() {
    let many: Vec<FilterOption> = (0..50)
        .map(|i| FilterOption::new(format!("k{i}"), format!("Option {i}")))
        .collect();
    let html = render(HarnessProps::new(many).column("status"));
    assert!(!html.contains(r#"type="search""#));
    assert_eq!(count(&html, "menuitemradio"), 50);
}

#[test]
fn test_empty_options_render_empty_menu() {
    let html = render(HarnessProps::new(Vec::new()).active("a"));
    assert!(html.contains(r#"role="menu""#));
    assert_eq!(count(&html, "menuitemradio"), 0);
    assert!(html.contains(DEFAULT_LABEL));
}

#[test]
fn test_column_exposed_as_data_attribute() {
    let html = render(HarnessProps::new(people()).column("collections").closed());
    assert!(html.contains(r#"data-column="collections""#));
}

#[component]
fn UnlabelledFilter() -> Element {
    rsx! {
        FilterOptions {
            options: people(),
            column: "status",
            active_key: None,
            on_select: move |_| {},
        }
    }
}

#[test]
fn test_default_label_comes_from_catalogue() {
    let mut dom = VirtualDom::new(UnlabelledFilter);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Filter options"));
    assert!(html.contains(r#"aria-expanded="false""#));
}
