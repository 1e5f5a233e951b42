use crate::domain::model::{OrderBy, OrderDirection, Preferences};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// On-disk preferences document.
///
/// Every field except `content_type` is optional; absent fields fall back to
/// the same defaults `Preferences` itself carries, so a minimal file is just
/// `[request]` with a content type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefsFile {
    pub request: RequestConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    pub content_type: String,
    pub max_results: Option<usize>,
    pub manual_selections: Option<Vec<i64>>,
    pub taxonomy_priority: Option<Vec<String>>,
    pub term_overrides: Option<HashMap<String, Vec<String>>>,
    pub fallback: Option<FallbackConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    pub order_by: Option<OrderBy>,
    pub order_direction: Option<OrderDirection>,
    pub category_filter: Option<Vec<i64>>,
}

impl PrefsFile {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn into_preferences(self) -> Preferences {
        let request = self.request;
        let mut prefs = Preferences::new(request.content_type);
        if let Some(max_results) = request.max_results {
            prefs.max_results = max_results;
        }
        if let Some(manual) = request.manual_selections {
            prefs.manual_selections = manual;
        }
        if let Some(priority) = request.taxonomy_priority {
            prefs.taxonomy_priority = priority;
        }
        prefs.source_term_overrides = request.term_overrides;
        if let Some(fallback) = request.fallback {
            prefs.order_by = fallback.order_by.unwrap_or_default();
            prefs.order_direction = fallback.order_direction.unwrap_or_default();
            prefs.category_filter = fallback.category_filter.unwrap_or_default();
        }
        prefs
    }
}
