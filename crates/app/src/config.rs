use shared_types::{UiConfig, UiError};
use std::sync::OnceLock;

static CONFIG: OnceLock<UiConfig> = OnceLock::new();

/// Config baked into the binary so web builds, which have no filesystem,
/// behave the same as desktop ones.
const CONFIG_TOML: &str = include_str!("../config.toml");

/// Parse a `config.toml` document.
pub fn parse_ui_config(contents: &str) -> Result<UiConfig, UiError> {
    toml::from_str(contents).map_err(|e| UiError::invalid_config(e.to_string()))
}

/// Parse the embedded config and store it in the global `OnceLock`.
/// Safe to call multiple times; only the first call has effect.
///
/// An unparseable file falls back to defaults.
pub fn load_ui_config() -> &'static UiConfig {
    CONFIG.get_or_init(|| match parse_ui_config(CONFIG_TOML) {
        Ok(config) => {
            tracing::info!(?config, "ui config loaded");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse config.toml, using defaults");
            UiConfig::default()
        }
    })
}

/// Apply the configured locale to widget strings. Bad tags are logged and
/// the fallback language stays active.
pub fn apply_locale(config: &UiConfig) {
    let Some(tag) = config.locale.as_deref() else {
        return;
    };
    if let Err(e) = shared_ui::i18n::select_locale(tag) {
        tracing::warn!(error = %e, "keeping fallback locale");
    }
}
