use crate::core::{fallback, matcher};
use crate::domain::model::{ContentItem, ItemId, Preferences};
use crate::domain::ports::ContentStore;
use crate::utils::error::Result;
use crate::utils::validation;
use std::collections::HashSet;

/// Runs the four-tier cascade and enforces the global invariants: result
/// capped at the clamped slot budget, no duplicates, never the source item
/// itself, and never an error just because nothing was found.
pub struct Selector<S: ContentStore> {
    store: S,
}

impl<S: ContentStore> Selector<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Produce a ranked list of related item ids for `source`.
    ///
    /// `source` may be absent (e.g. a preview with no originating content);
    /// tiers 2 and 3 are skipped in that case. Store failures propagate
    /// untouched; an empty result is a normal outcome, not an error.
    pub async fn select_related(
        &self,
        source: Option<&ContentItem>,
        prefs: &Preferences,
    ) -> Result<Vec<ItemId>> {
        let budget = validation::clamp_slot_count(prefs.max_results);
        let mut used: HashSet<ItemId> = HashSet::new();
        if let Some(item) = source {
            used.insert(item.id);
        }

        tracing::debug!(
            source = source.map(|item| item.id),
            budget,
            content_type = %prefs.content_type,
            "selecting related items"
        );

        let mut result: Vec<ItemId> = Vec::new();

        // Tier 1: manual picks always run; the editor's explicit choices are
        // never gated behind any algorithm mode.
        for id in validation::sanitize_ids(&prefs.manual_selections) {
            if result.len() >= budget {
                break;
            }
            if used.contains(&id) {
                continue;
            }
            // An unpublished or unknown pick is dropped and its slot stays
            // open for the later tiers.
            if self.store.find_published_by_id(id).await?.is_some() {
                used.insert(id);
                result.push(id);
            }
        }
        tracing::debug!(count = result.len(), "tier 1 (manual) done");

        if let Some(src) = source {
            // Tier 2: taxonomy matcher.
            if result.len() < budget {
                let ids = matcher::match_by_taxonomy(
                    &self.store,
                    src,
                    prefs,
                    budget - result.len(),
                    &used,
                )
                .await?;
                for id in ids {
                    if used.insert(id) {
                        result.push(id);
                    }
                }
                tracing::debug!(count = result.len(), "tier 2 (taxonomy match) done");
            }

            // Tier 3: any item carrying a term in the first-priority taxonomy.
            if result.len() < budget {
                if let Some(taxonomy) = prefs.taxonomy_priority.first() {
                    let ids = fallback::by_taxonomy_existence(
                        &self.store,
                        taxonomy,
                        &prefs.content_type,
                        budget - result.len(),
                        &used,
                    )
                    .await?;
                    for id in ids {
                        if used.insert(id) {
                            result.push(id);
                        }
                    }
                    tracing::debug!(count = result.len(), "tier 3 (taxonomy exists) done");
                }
            }
        }

        // Tier 4: recency.
        if result.len() < budget {
            let ids = fallback::by_recency(
                &self.store,
                &prefs.content_type,
                budget - result.len(),
                &used,
            )
            .await?;
            for id in ids {
                if used.insert(id) {
                    result.push(id);
                }
            }
            tracing::debug!(count = result.len(), "tier 4 (recency) done");
        }

        // The legacy query only fires when the cascade found nothing at all.
        if result.is_empty() {
            result = fallback::by_legacy_query(&self.store, prefs, budget).await?;
            tracing::debug!(count = result.len(), "legacy fallback done");
        }

        Ok(result)
    }
}
