use crate::domain::model::{ItemId, Preferences};
use crate::domain::ports::ContentStore;
use crate::utils::error::Result;
use crate::utils::validation;
use std::collections::HashSet;

/// Items that merely have some term assigned in `taxonomy` — an existence
/// check, not a match against the source. Title ascending.
pub async fn by_taxonomy_existence<S: ContentStore>(
    store: &S,
    taxonomy: &str,
    content_type: &str,
    limit: usize,
    exclude: &HashSet<ItemId>,
) -> Result<Vec<ItemId>> {
    let items = store
        .find_by_taxonomy_exists(taxonomy, content_type, limit, exclude)
        .await?;
    Ok(items.into_iter().map(|item| item.id).take(limit).collect())
}

/// Most recently published items of `content_type`, newest first.
pub async fn by_recency<S: ContentStore>(
    store: &S,
    content_type: &str,
    limit: usize,
    exclude: &HashSet<ItemId>,
) -> Result<Vec<ItemId>> {
    let items = store.find_recent(content_type, limit, exclude).await?;
    Ok(items.into_iter().map(|item| item.id).take(limit).collect())
}

/// Last resort when the whole cascade came up empty: one query ordered per the
/// caller's legacy parameters. Deliberately applies no exclusions, not even
/// the source id.
pub async fn by_legacy_query<S: ContentStore>(
    store: &S,
    prefs: &Preferences,
    limit: usize,
) -> Result<Vec<ItemId>> {
    let categories = validation::sanitize_ids(&prefs.category_filter);
    let items = store
        .find_legacy(
            &prefs.content_type,
            prefs.order_by,
            prefs.order_direction,
            &categories,
            limit,
        )
        .await?;
    Ok(items.into_iter().map(|item| item.id).take(limit).collect())
}
