mod list;

pub use list::DocumentListPage;

use serde::{Deserialize, Serialize};
use shared_types::FilterOption;

/// Demo data shipped with the app.
const DOCUMENTS_JSON: &str = include_str!("../../assets/documents.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub author_id: String,
    pub author_name: String,
    #[serde(default)]
    pub author_email: Option<String>,
    pub status: String,
}

/// Parse the bundled document list. Bad data yields an empty list.
pub fn load_documents() -> Vec<Document> {
    match serde_json::from_str::<Vec<Document>>(DOCUMENTS_JSON) {
        Ok(docs) => docs,
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse bundled documents");
            Vec::new()
        }
    }
}

/// One option per distinct author, in first-seen order, with the email
/// address as the secondary line when known.
pub fn author_options(docs: &[Document]) -> Vec<FilterOption> {
    let mut options: Vec<FilterOption> = Vec::new();
    for doc in docs {
        if options.iter().any(|o| o.key == doc.author_id) {
            continue;
        }
        let option = FilterOption::new(&doc.author_id, &doc.author_name);
        options.push(match &doc.author_email {
            Some(email) => option.with_note(email),
            None => option,
        });
    }
    options
}

/// Fixed status choices.
pub fn status_options() -> Vec<FilterOption> {
    vec![
        FilterOption::new("draft", "Draft"),
        FilterOption::new("published", "Published"),
        FilterOption::new("archived", "Archived"),
    ]
}

/// Documents matching both the author and status filters. `None` means
/// the filter is not applied.
pub fn filter_documents(
    docs: &[Document],
    author: Option<&str>,
    status: Option<&str>,
) -> Vec<Document> {
    docs.iter()
        .filter(|d| author.is_none_or(|a| d.author_id == a))
        .filter(|d| status.is_none_or(|s| d.status == s))
        .cloned()
        .collect()
}
