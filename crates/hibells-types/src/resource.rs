use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Portal,
    Pdf,
    Video,
    Link,
    Document,
}

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Portal => "PORTAL",
            ResourceKind::Pdf => "PDF",
            ResourceKind::Video => "VIDEO",
            ResourceKind::Link => "LINK",
            ResourceKind::Document => "DOCUMENT",
        }
    }
}

/// A persisted reference to a saved page or document.
///
/// Serialized field names match what earlier builds wrote under
/// [`keys::SAVED_PAGES`](crate::keys::SAVED_PAGES).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedResource {
    pub id: String,
    pub url: String,
    pub title: String,
    /// RFC 3339
    #[serde(rename = "savedAt")]
    pub saved_at: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
}

impl SavedResource {
    /// A snapshot of the portal page at `url`.
    ///
    /// `id` is chosen by the caller so it can be made unique against the
    /// list the record is appended to.
    pub fn portal_page(id: String, url: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            url: url.into(),
            title: format!("Bells Portal - {}", now.format("%-m/%-d/%Y")),
            saved_at: now.to_rfc3339(),
            kind: ResourceKind::Portal,
        }
    }
}

/// A static entry in the academic resource catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogResource {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ResourceKind,
    pub category: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub downloadable: bool,
    pub size: Option<&'static str>,
}

impl CatalogResource {
    /// Case-insensitive match on title, category, or description.
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&q)
            || self.category.to_lowercase().contains(&q)
            || self.description.to_lowercase().contains(&q)
    }

    pub fn action_label(&self) -> &'static str {
        match (self.kind, self.downloadable) {
            (ResourceKind::Link, _) => "Open Link",
            (_, true) => "Download",
            _ => "View",
        }
    }
}
