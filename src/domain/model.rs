use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Identifiers are positive; anything below 1 is treated as absent and
/// filtered at the boundary.
pub type ItemId = i64;

/// Hard ceiling on how many related items one request may ask for.
pub const MAX_RESULTS_CEILING: usize = 10;

/// Over-fetch multiplier for the any-match taxonomy query, so the matcher has
/// enough candidates left to score after exclusions.
pub const ANY_MATCH_OVER_FETCH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Published,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    pub content_type: String,
    pub status: PublishStatus,
    pub title: String,
    pub published_at: DateTime<Utc>,
    /// Taxonomy name -> term slugs the item carries in that taxonomy.
    #[serde(default)]
    pub terms: HashMap<String, BTreeSet<String>>,
    /// Category term ids, consumed only by the legacy query's allow-list.
    #[serde(default)]
    pub category_ids: Vec<i64>,
}

impl ContentItem {
    pub fn is_published(&self) -> bool {
        self.status == PublishStatus::Published
    }

    /// Term slugs for one taxonomy; empty set when the item has none there.
    pub fn term_slugs(&self, taxonomy: &str) -> BTreeSet<String> {
        self.terms.get(taxonomy).cloned().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    #[default]
    Date,
    Title,
    Id,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    #[default]
    Desc,
}

/// Caller-supplied selection preferences, immutable per request.
///
/// Every collection defaults to empty so a missing or malformed field in the
/// serialized form degrades to "no preference" instead of erroring.
/// `max_results` is clamped inside the selector rather than here, so the
/// clamp holds no matter how the struct was constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    pub content_type: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Editor-picked ids, highest priority, order preserved.
    #[serde(default)]
    pub manual_selections: Vec<ItemId>,
    /// Taxonomies to try, first entry first.
    #[serde(default)]
    pub taxonomy_priority: Vec<String>,
    /// In-progress (unsaved) term selections; overrides persisted terms for
    /// the taxonomies it names.
    #[serde(default)]
    pub source_term_overrides: Option<HashMap<String, Vec<String>>>,
    #[serde(default)]
    pub order_by: OrderBy,
    #[serde(default)]
    pub order_direction: OrderDirection,
    #[serde(default)]
    pub category_filter: Vec<i64>,
}

fn default_max_results() -> usize {
    3
}

impl Preferences {
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            max_results: default_max_results(),
            manual_selections: Vec::new(),
            taxonomy_priority: Vec::new(),
            source_term_overrides: None,
            order_by: OrderBy::default(),
            order_direction: OrderDirection::default(),
            category_filter: Vec::new(),
        }
    }

    /// Override terms for one taxonomy, if the caller supplied any.
    pub fn override_terms(&self, taxonomy: &str) -> Option<BTreeSet<String>> {
        self.source_term_overrides
            .as_ref()
            .and_then(|map| map.get(taxonomy))
            .map(|slugs| slugs.iter().cloned().collect())
    }
}

/// Matcher-internal candidate with its shared-term count for one taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub id: ItemId,
    pub score: usize,
}
