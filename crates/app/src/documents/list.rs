use dioxus::prelude::*;
use shared_types::UiConfig;
use shared_ui::i18n::translate;
use shared_ui::components::{Button, ButtonVariant, FilterBar, FilterOptions};

use super::{author_options, filter_documents, load_documents, status_options, Document};

#[component]
pub fn DocumentListPage() -> Element {
    let config = use_context::<UiConfig>();

    let documents = use_hook(load_documents);
    let authors = author_options(&documents);
    let statuses = status_options();
    let status_label = config
        .filters
        .default_label
        .clone()
        .unwrap_or_else(|| translate("filter-options-default"));

    let mut filter_author = use_signal(|| None::<String>);
    let mut filter_status = use_signal(|| None::<String>);

    let shown = filter_documents(
        &documents,
        filter_author.read().as_deref(),
        filter_status.read().as_deref(),
    );

    let has_filters = filter_author.read().is_some() || filter_status.read().is_some();

    let handle_clear = move |_| {
        filter_author.set(None);
        filter_status.set(None);
    };

    rsx! {
        div { class: "container",
            h1 { "Documents" }

            FilterBar { label: "Document filters",
                FilterOptions {
                    options: authors,
                    column: "authors",
                    active_key: filter_author.read().clone(),
                    default_label: "Any author",
                    selected_prefix: "Author:",
                    searchable: config.filters.is_searchable("authors"),
                    on_select: move |key: Option<String>| {
                        tracing::info!(?key, "author filter changed");
                        filter_author.set(key);
                    },
                }
                FilterOptions {
                    options: statuses,
                    column: "status",
                    active_key: filter_status.read().clone(),
                    default_label: status_label,
                    selected_prefix: "Status:",
                    searchable: config.filters.is_searchable("status"),
                    on_select: move |key: Option<String>| {
                        tracing::info!(?key, "status filter changed");
                        filter_status.set(key);
                    },
                }
                if has_filters {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: handle_clear,
                        "Clear Filters"
                    }
                }
            }

            DocumentList { documents: shown }
        }
    }
}

#[component]
fn DocumentList(documents: Vec<Document>) -> Element {
    if documents.is_empty() {
        return rsx! {
            p { class: "document-empty", "No documents match these filters." }
        };
    }

    rsx! {
        ul { class: "document-list",
            for doc in documents {
                li { key: "{doc.id}", class: "document-row",
                    span { class: "document-title", "{doc.title}" }
                    span { class: "document-meta", "{doc.author_name} · {doc.status}" }
                }
            }
        }
    }
}
