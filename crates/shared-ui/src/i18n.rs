//! Localized strings for the widget library.
//!
//! Catalogues live in `i18n/<lang>/shared_ui.ftl` and are embedded at compile
//! time. English is the fallback and is always loaded.

use i18n_embed::{
    fluent::{fluent_language_loader, FluentLanguageLoader},
    unic_langid::LanguageIdentifier,
    LanguageLoader,
};
use rust_embed::RustEmbed;
use shared_types::UiError;
use std::sync::LazyLock;

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

pub static LANGUAGE_LOADER: LazyLock<FluentLanguageLoader> = LazyLock::new(|| {
    let loader: FluentLanguageLoader = fluent_language_loader!();
    loader
        .load_fallback_language(&Localizations)
        .expect("Error while loading fallback language");
    loader
});

/// Compile-time checked lookup into the widget catalogue.
#[macro_export]
macro_rules! fl {
    ($message_id:literal) => {{
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $message_id)
    }};
    ($message_id:literal, $($args:expr),*) => {{
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $message_id, $($args), *)
    }};
}

/// Look up `message_id` in the active language.
///
/// Unknown ids do not fail; the loader returns its own placeholder text.
pub fn translate(message_id: &str) -> String {
    LANGUAGE_LOADER.get(message_id)
}

/// Switch widget strings to the language named by a BCP-47 `tag`.
///
/// Languages without a catalogue silently keep the fallback; only tags that
/// cannot be parsed are rejected.
pub fn select_locale(tag: &str) -> Result<(), UiError> {
    let language: LanguageIdentifier = tag
        .parse()
        .map_err(|e| UiError::unsupported_locale(format!("{tag}: {e}")))?;

    let selected = i18n_embed::select(&*LANGUAGE_LOADER, &Localizations, &[language])
        .map_err(|e| UiError::unsupported_locale(format!("{tag}: {e}")))?;
    tracing::info!(?selected, "widget locale selected");
    Ok(())
}
