use dioxus::prelude::*;
use shared_types::{FilterOption, FilterSession};

/// The dropdown's session signal together with the caller's `on_select`.
///
/// Every event the dropdown reacts to goes through one of these methods, so
/// the view only decides which method an element's event maps to.
#[derive(Clone, Copy, PartialEq)]
pub struct FilterController {
    session: Signal<FilterSession>,
    on_select: EventHandler<Option<String>>,
}

/// Create the session for a dropdown over `options`.
///
/// When `options` changes by value the session is reset to the full new
/// list; an equal list leaves any narrowing in place.
pub fn use_filter_controller(
    options: &[FilterOption],
    default_open: bool,
    on_select: EventHandler<Option<String>>,
) -> FilterController {
    let mut session = use_signal(|| FilterSession::new(options, default_open));

    let options = options.to_vec();
    use_effect(use_reactive!(|options| {
        if session.peek().source() != options.as_slice() {
            session.write().reset(&options);
        }
    }));

    FilterController { session, on_select }
}

impl FilterController {
    pub fn is_open(&self) -> bool {
        self.session.read().is_open()
    }

    /// Rows to list for the caller's current `options`.
    pub fn visible(&self, options: &[FilterOption]) -> Vec<FilterOption> {
        self.session.read().visible_for(options).to_vec()
    }

    pub fn toggle(&self) {
        let mut session = self.session;
        session.write().toggle();
    }

    pub fn close(&self) {
        let mut session = self.session;
        session.write().close();
    }

    /// Search box focused: list every option again.
    pub fn focus(&self, options: &[FilterOption]) {
        let mut session = self.session;
        session.write().on_focus(options);
    }

    /// Search text changed. Returns whether the rows were narrowed.
    pub fn input(&self, options: &[FilterOption], text: &str) -> bool {
        let mut session = self.session;
        let narrowed = session.write().on_filter_text_change(options, text);
        narrowed
    }

    /// A row was picked. The menu closes and `on_select` runs once, after
    /// the session borrow has ended.
    pub fn activate(&self, key: &str) {
        let mut session = self.session;
        let picked = session.write().on_option_activate(key);
        tracing::debug!(%key, "filter option selected");
        self.on_select.call(picked);
    }
}
