use pretty_assertions::assert_eq;
use shared_types::{filter_by_label, trigger_label, FilterOption, FilterSession};

use crate::common::{people, DEFAULT_LABEL, PREFIX};

fn labels(session: &FilterSession) -> Vec<&str> {
    session.visible().iter().map(|o| o.label.as_str()).collect()
}

#[test]
fn test_alice_bob_walkthrough() {
    let options = vec![
        FilterOption::new("a", "Alice"),
        FilterOption::new("b", "Bob"),
    ];
    let active = Some("b");
    assert_eq!(trigger_label(&options, active, DEFAULT_LABEL, PREFIX), "Author: Bob");

    let mut session = FilterSession::new(&options, true);
    session.on_filter_text_change(&options, "ali");
    assert_eq!(labels(&session), vec!["Alice"]);

    // Clearing the box keeps the narrowed rows.
    session.on_filter_text_change(&options, "");
    assert_eq!(labels(&session), vec!["Alice"]);

    session.on_focus(&options);
    assert_eq!(labels(&session), vec!["Alice", "Bob"]);
}

#[test]
fn test_trigger_label_for_each_option() {
    let options = people();
    for option in &options {
        assert_eq!(
            trigger_label(&options, Some(option.key.as_str()), DEFAULT_LABEL, PREFIX),
            format!("{PREFIX} {}", option.label)
        );
    }
}

#[test]
fn test_narrowing_matches_case_insensitive_substring_in_order() {
    let options = vec![
        FilterOption::new("1", "Maria"),
        FilterOption::new("2", "mario"),
        FilterOption::new("3", "Zed"),
        FilterOption::new("4", "AMARI"),
    ];
    let mut session = FilterSession::new(&options, true);
    for text in ["mar", "MAR", "ari", "z", "nobody"] {
        session.on_filter_text_change(&options, text);
        let expected: Vec<&str> = options
            .iter()
            .filter(|o| o.label.to_lowercase().contains(&text.to_lowercase()))
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(labels(&session), expected, "text {text:?}");
        assert_eq!(session.visible(), filter_by_label(&options, text).as_slice());
    }
}

#[test]
fn test_focus_resets_after_any_narrowing() {
    let options = people();
    for text in ["a", "bob", "zzz"] {
        let mut session = FilterSession::new(&options, true);
        session.on_filter_text_change(&options, text);
        session.on_focus(&options);
        assert_eq!(session.visible(), options.as_slice());
    }
}

#[test]
fn test_activation_hands_back_key_and_closes() {
    let options = people();
    let mut session = FilterSession::new(&options, true);

    let picked = session.on_option_activate("c");

    assert_eq!(picked, Some("c".to_string()));
    assert!(!session.is_open());
}

#[test]
fn test_new_options_replace_narrowed_rows() {
    let options = people();
    let mut session = FilterSession::new(&options, true);
    session.on_filter_text_change(&options, "car");
    assert_eq!(labels(&session), vec!["Carol"]);

    let mut more = options.clone();
    more.push(FilterOption::new("d", "Dave"));
    session.reset(&more);
    assert_eq!(labels(&session), vec!["Alice", "Bob", "Carol", "Dave"]);
}

#[test]
fn test_visible_rows_are_always_a_subset_of_options() {
    let options = people();
    let mut session = FilterSession::new(&options, true);
    for text in ["o", "", "l", "x"] {
        session.on_filter_text_change(&options, text);
        let mut cursor = options.iter();
        for row in session.visible() {
            assert!(cursor.any(|o| o == row), "{row:?} out of order or missing");
        }
    }
}
