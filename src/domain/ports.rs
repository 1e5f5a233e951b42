use crate::domain::model::{ContentItem, ItemId, OrderBy, OrderDirection};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::{BTreeSet, HashSet};

/// Read-only view of the content management system's data.
///
/// Every query returns published items only. Implementations must order
/// deterministically: title-sorted queries break equal titles by ascending id,
/// `find_recent` returns newest `published_at` first. Store-level failures
/// propagate to the caller untouched; the selector never interprets them.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Single lookup; `None` when the id is unknown or the item is not
    /// published.
    async fn find_published_by_id(&self, id: ItemId) -> Result<Option<ContentItem>>;

    /// Batch lookup that keeps the caller's id order, dropping unknown,
    /// unpublished, and wrong-type ids.
    async fn find_by_ids_preserving_order(
        &self,
        ids: &[ItemId],
        content_type: &str,
    ) -> Result<Vec<ContentItem>>;

    /// Items carrying ALL of `terms` in `taxonomy`, title ascending.
    async fn find_by_taxonomy_all_terms(
        &self,
        taxonomy: &str,
        terms: &BTreeSet<String>,
        content_type: &str,
        limit: usize,
        exclude: &HashSet<ItemId>,
    ) -> Result<Vec<ContentItem>>;

    /// Items sharing AT LEAST ONE of `terms` in `taxonomy`. Returned items
    /// carry their term sets so the caller can score overlap.
    async fn find_by_taxonomy_any_terms(
        &self,
        taxonomy: &str,
        terms: &BTreeSet<String>,
        content_type: &str,
        over_fetch_limit: usize,
        exclude: &HashSet<ItemId>,
    ) -> Result<Vec<ContentItem>>;

    /// Items with any term at all assigned in `taxonomy`, title ascending.
    async fn find_by_taxonomy_exists(
        &self,
        taxonomy: &str,
        content_type: &str,
        limit: usize,
        exclude: &HashSet<ItemId>,
    ) -> Result<Vec<ContentItem>>;

    /// Most recently published items of `content_type`, newest first.
    async fn find_recent(
        &self,
        content_type: &str,
        limit: usize,
        exclude: &HashSet<ItemId>,
    ) -> Result<Vec<ContentItem>>;

    /// Last-resort query ordered per the caller's legacy parameters,
    /// optionally restricted to a category allow-list. Applies no exclusions.
    async fn find_legacy(
        &self,
        content_type: &str,
        order_by: OrderBy,
        order_direction: OrderDirection,
        category_ids: &[i64],
        limit: usize,
    ) -> Result<Vec<ContentItem>>;

    /// Persisted term slugs of one item in one taxonomy; empty set when the
    /// item is unknown or has none.
    async fn term_slugs(&self, item_id: ItemId, taxonomy: &str) -> Result<BTreeSet<String>>;
}
