use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of the few things that can go wrong around the widgets:
/// loading configuration and picking a translation locale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UiErrorKind {
    InvalidConfig,
    UnsupportedLocale,
}

impl fmt::Display for UiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
            UiErrorKind::UnsupportedLocale => write!(f, "UnsupportedLocale"),
        }
    }
}

/// Structured error shared by the widget library and the app.
///
/// Components never return these; they are produced while setting up
/// configuration and localization, where callers log them and fall back
/// to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiError {
    pub kind: UiErrorKind,
    pub message: String,
}

impl UiError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: UiErrorKind::InvalidConfig,
            message: message.into(),
        }
    }

    pub fn unsupported_locale(message: impl Into<String>) -> Self {
        Self {
            kind: UiErrorKind::UnsupportedLocale,
            message: message.into(),
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for UiError {}
