//! Persisted key names. These are read by existing installs and must not change.

/// JSON array of [`SavedResource`](crate::resource::SavedResource)
pub const SAVED_PAGES: &str = "savedPages";

/// JSON array of starred catalog resource ids
pub const FAVORITE_RESOURCES: &str = "favoriteResources";

/// JSON array of bookmarked news item ids
pub const SAVED_ARTICLES: &str = "savedArticles";

/// `"seen"` once onboarding finished, absent otherwise
pub const ONBOARDING_SEEN: &str = "hasSeenOnboarding";

/// Serialized [`AppConfig`](crate::config::AppConfig)
pub const CONFIG: &str = "hibells:config";

pub const ONBOARDING_SEEN_VALUE: &str = "seen";
