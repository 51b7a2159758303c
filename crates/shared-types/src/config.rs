use serde::{Deserialize, Serialize};

/// Column whose filter gets a search box when nothing else is configured.
pub const DEFAULT_SEARCHABLE_COLUMN: &str = "authors";

fn default_searchable_columns() -> Vec<String> {
    vec![DEFAULT_SEARCHABLE_COLUMN.to_string()]
}

/// Settings shared by every filter dropdown on a list page.
///
/// Every field has a default so a missing or partial `[filters]` table is
/// still a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterConfig {
    /// Trigger text for filters without their own default label. `None`
    /// keeps the translated default.
    #[serde(default)]
    pub default_label: Option<String>,
    /// Columns whose option lists are long enough to warrant a search box.
    #[serde(default = "default_searchable_columns")]
    pub searchable_columns: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            default_label: None,
            searchable_columns: default_searchable_columns(),
        }
    }
}

impl FilterConfig {
    /// Whether the dropdown filtering `column` should render a search box.
    pub fn is_searchable(&self, column: &str) -> bool {
        self.searchable_columns.iter().any(|c| c == column)
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UiConfig {
    /// BCP-47 language tag for widget strings; `None` keeps the fallback.
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub filters: FilterConfig,
}
