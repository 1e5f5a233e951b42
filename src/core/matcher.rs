use crate::domain::model::{
    ContentItem, ItemId, Preferences, ScoredCandidate, ANY_MATCH_OVER_FETCH,
};
use crate::domain::ports::ContentStore;
use crate::utils::error::Result;
use std::collections::{BTreeSet, HashSet};

/// Find the best same-taxonomy matches for `source`, walking the caller's
/// taxonomy priority list in order until `slot_count` ids are collected.
///
/// Per taxonomy: with two or more source terms an exact (AND) query runs
/// first, and any hit settles that taxonomy outright. Only when the exact
/// query finds nothing (or a single term makes AND meaningless) does the
/// any-match (OR) query run, with candidates ranked by shared-term count and
/// ties broken by ascending id.
///
/// The caller's exclusion set is cloned, never mutated; the return value is
/// the list of new ids for the selector to register.
pub async fn match_by_taxonomy<S: ContentStore>(
    store: &S,
    source: &ContentItem,
    prefs: &Preferences,
    slot_count: usize,
    exclusion: &HashSet<ItemId>,
) -> Result<Vec<ItemId>> {
    let mut picked: Vec<ItemId> = Vec::new();
    let mut seen = exclusion.clone();

    for taxonomy in &prefs.taxonomy_priority {
        if picked.len() >= slot_count {
            break;
        }
        let remaining = slot_count - picked.len();

        let source_terms = resolve_source_terms(store, source, prefs, taxonomy).await?;
        if source_terms.is_empty() {
            tracing::debug!(taxonomy = %taxonomy, "source has no terms here, skipping");
            continue;
        }

        let mut accepted: Vec<ItemId> = Vec::new();
        if source_terms.len() > 1 {
            let exact = store
                .find_by_taxonomy_all_terms(
                    taxonomy,
                    &source_terms,
                    &prefs.content_type,
                    remaining,
                    &seen,
                )
                .await?;
            accepted = exact.into_iter().map(|item| item.id).take(remaining).collect();
            tracing::debug!(taxonomy = %taxonomy, hits = accepted.len(), "exact-match query");
        }

        if accepted.is_empty() {
            accepted =
                any_match(store, taxonomy, &source_terms, prefs, remaining, &seen).await?;
            tracing::debug!(taxonomy = %taxonomy, hits = accepted.len(), "any-match query");
        }

        for id in accepted {
            if seen.insert(id) {
                picked.push(id);
            }
        }
    }

    Ok(picked)
}

/// The editor's unsaved term selections win over what the store has persisted.
async fn resolve_source_terms<S: ContentStore>(
    store: &S,
    source: &ContentItem,
    prefs: &Preferences,
    taxonomy: &str,
) -> Result<BTreeSet<String>> {
    let raw = match prefs.override_terms(taxonomy) {
        Some(terms) => terms,
        None => store.term_slugs(source.id, taxonomy).await?,
    };
    Ok(raw
        .into_iter()
        .filter(|slug| !slug.trim().is_empty())
        .collect())
}

/// OR query over the source's terms, over-fetched so scoring has enough
/// candidates after exclusions, ranked by overlap then ascending id.
async fn any_match<S: ContentStore>(
    store: &S,
    taxonomy: &str,
    source_terms: &BTreeSet<String>,
    prefs: &Preferences,
    remaining: usize,
    seen: &HashSet<ItemId>,
) -> Result<Vec<ItemId>> {
    let over_fetch = remaining * ANY_MATCH_OVER_FETCH;
    let candidates = store
        .find_by_taxonomy_any_terms(
            taxonomy,
            source_terms,
            &prefs.content_type,
            over_fetch,
            seen,
        )
        .await?;

    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|item| ScoredCandidate {
            id: item.id,
            score: item
                .term_slugs(taxonomy)
                .intersection(source_terms)
                .count(),
        })
        .filter(|candidate| candidate.score > 0)
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));

    Ok(scored
        .into_iter()
        .take(remaining)
        .map(|candidate| candidate.id)
        .collect())
}
