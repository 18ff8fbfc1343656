use serde::{Deserialize, Serialize};

/// One of the five top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Portal,
    Assistant,
    Resources,
    Community,
}

impl Tab {
    /// Bottom navigation order
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Home,
            Tab::Portal,
            Tab::Assistant,
            Tab::Resources,
            Tab::Community,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Portal => "portal",
            Tab::Assistant => "assistant",
            Tab::Resources => "resources",
            Tab::Community => "community",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Portal => "Portal",
            Tab::Assistant => "Assistant",
            Tab::Resources => "Resources",
            Tab::Community => "Community",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::all().iter().copied().find(|t| t.id() == id)
    }
}
