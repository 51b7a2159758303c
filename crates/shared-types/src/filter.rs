use serde::{Deserialize, Serialize};

/// A selectable choice in a filter dropdown.
///
/// `key` identifies the option to the caller and should be unique within a
/// list; `label` is what the user sees. `note` is an optional secondary line
/// shown beneath the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl FilterOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Normalize an active key: an empty string counts as no selection.
fn active(active_key: Option<&str>) -> Option<&str> {
    active_key.filter(|k| !k.is_empty())
}

/// Resolve which option the trigger describes.
///
/// The first option whose key equals `active_key` wins, so duplicate keys
/// resolve to the earliest entry. Without a match this falls back to the
/// first option, and to `None` for an empty list.
pub fn resolve_selected<'a>(
    options: &'a [FilterOption],
    active_key: Option<&str>,
) -> Option<&'a FilterOption> {
    find_active(options, active_key).or_else(|| options.first())
}

/// The first option whose key equals `active_key`, with no fallback.
pub fn find_active<'a>(
    options: &'a [FilterOption],
    active_key: Option<&str>,
) -> Option<&'a FilterOption> {
    let key = active(active_key)?;
    options.iter().find(|o| o.key == key)
}

/// `"{prefix} {label}"` for the resolved option, or an empty string when
/// there is nothing to resolve.
pub fn selected_label(options: &[FilterOption], active_key: Option<&str>, prefix: &str) -> String {
    resolve_selected(options, active_key)
        .map(|o| format!("{prefix} {}", o.label))
        .unwrap_or_default()
}

/// Text shown on the trigger button.
///
/// Only an active key that matches one of `options` produces the selected
/// label; anything else shows `default_label`.
pub fn trigger_label(
    options: &[FilterOption],
    active_key: Option<&str>,
    default_label: &str,
    prefix: &str,
) -> String {
    match find_active(options, active_key) {
        Some(_) => selected_label(options, active_key, prefix),
        None => default_label.to_string(),
    }
}

/// Whether `option` is the one currently applied by the caller.
pub fn is_selected(option: &FilterOption, active_key: Option<&str>) -> bool {
    active(active_key).is_some_and(|k| option.key == k)
}

/// Options whose label contains `text`, ignoring case. Order is preserved.
pub fn filter_by_label(options: &[FilterOption], text: &str) -> Vec<FilterOption> {
    let needle = text.to_lowercase();
    options
        .iter()
        .filter(|o| o.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Local view state of a filter dropdown: which options are visible in the
/// menu and whether the menu is open.
///
/// The active selection is deliberately absent. It belongs to the caller,
/// which learns about user choices through the key returned by
/// [`FilterSession::on_option_activate`].
///
/// The session remembers the option list its visible rows were computed
/// from. Rows computed from a list that no longer equals the caller's are
/// stale, and [`FilterSession::visible_for`] shows the caller's full list
/// instead.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSession {
    source: Vec<FilterOption>,
    visible: Vec<FilterOption>,
    open: bool,
}

impl FilterSession {
    pub fn new(options: &[FilterOption], open: bool) -> Self {
        Self {
            source: options.to_vec(),
            visible: options.to_vec(),
            open,
        }
    }

    /// Options currently listed in the menu.
    pub fn visible(&self) -> &[FilterOption] {
        &self.visible
    }

    /// The option list the visible rows were computed from.
    pub fn source(&self) -> &[FilterOption] {
        &self.source
    }

    /// Rows to list for the caller's current `options`.
    ///
    /// Narrowing survives only while `options` equals the list it was
    /// computed from; any other list is shown in full.
    pub fn visible_for<'a>(&'a self, options: &'a [FilterOption]) -> &'a [FilterOption] {
        if self.source == options {
            &self.visible
        } else {
            options
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// The caller handed over a new option list; show all of it.
    pub fn reset(&mut self, options: &[FilterOption]) {
        self.source = options.to_vec();
        self.visible = options.to_vec();
    }

    /// The search box gained focus. Prior narrowing is discarded.
    pub fn on_focus(&mut self, options: &[FilterOption]) {
        self.reset(options);
    }

    /// The search text changed.
    ///
    /// Empty text leaves the visible list as it was, so clearing the box
    /// keeps showing the last narrowed results until the box is refocused.
    /// Returns whether the visible list was recomputed.
    pub fn on_filter_text_change(&mut self, options: &[FilterOption], text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.source = options.to_vec();
        self.visible = filter_by_label(options, text);
        true
    }

    /// A row was clicked: close the menu and hand back the value the caller's
    /// `on_select` must receive, exactly once.
    ///
    /// Nothing is invoked here; the owner forwards the key after releasing
    /// the session.
    #[must_use]
    pub fn on_option_activate(&mut self, key: &str) -> Option<String> {
        self.open = false;
        Some(key.to_string())
    }
}
