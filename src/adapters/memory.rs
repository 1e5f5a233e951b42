use crate::domain::model::{ContentItem, ItemId, OrderBy, OrderDirection};
use crate::domain::ports::ContentStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

/// Reference `ContentStore` over a plain item list, loadable from a JSON
/// fixture. Used by the CLI and the test suite; ordering matches the port's
/// determinism contract (title ties broken by ascending id).
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    items: Vec<ContentItem>,
}

impl InMemoryStore {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<ContentItem> = serde_json::from_str(json)?;
        Ok(Self::new(items))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn published_of_type<'a>(
        &'a self,
        content_type: &'a str,
        exclude: &'a HashSet<ItemId>,
    ) -> impl Iterator<Item = &'a ContentItem> {
        self.items.iter().filter(move |item| {
            item.is_published()
                && item.content_type == content_type
                && !exclude.contains(&item.id)
        })
    }
}

fn sort_by_title(items: &mut [ContentItem]) {
    items.sort_by(|a, b| {
        a.title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then(a.id.cmp(&b.id))
    });
}

#[async_trait]
impl ContentStore for InMemoryStore {
    async fn find_published_by_id(&self, id: ItemId) -> Result<Option<ContentItem>> {
        Ok(self
            .items
            .iter()
            .find(|item| item.id == id && item.is_published())
            .cloned())
    }

    async fn find_by_ids_preserving_order(
        &self,
        ids: &[ItemId],
        content_type: &str,
    ) -> Result<Vec<ContentItem>> {
        let mut found = Vec::new();
        for id in ids {
            if let Some(item) = self.items.iter().find(|item| {
                item.id == *id && item.is_published() && item.content_type == content_type
            }) {
                found.push(item.clone());
            }
        }
        Ok(found)
    }

    async fn find_by_taxonomy_all_terms(
        &self,
        taxonomy: &str,
        terms: &BTreeSet<String>,
        content_type: &str,
        limit: usize,
        exclude: &HashSet<ItemId>,
    ) -> Result<Vec<ContentItem>> {
        let mut matches: Vec<ContentItem> = self
            .published_of_type(content_type, exclude)
            .filter(|item| {
                let item_terms = item.term_slugs(taxonomy);
                terms.iter().all(|term| item_terms.contains(term))
            })
            .cloned()
            .collect();
        sort_by_title(&mut matches);
        matches.truncate(limit);
        Ok(matches)
    }

    async fn find_by_taxonomy_any_terms(
        &self,
        taxonomy: &str,
        terms: &BTreeSet<String>,
        content_type: &str,
        over_fetch_limit: usize,
        exclude: &HashSet<ItemId>,
    ) -> Result<Vec<ContentItem>> {
        let mut matches: Vec<ContentItem> = self
            .published_of_type(content_type, exclude)
            .filter(|item| {
                let item_terms = item.term_slugs(taxonomy);
                terms.iter().any(|term| item_terms.contains(term))
            })
            .cloned()
            .collect();
        sort_by_title(&mut matches);
        matches.truncate(over_fetch_limit);
        Ok(matches)
    }

    async fn find_by_taxonomy_exists(
        &self,
        taxonomy: &str,
        content_type: &str,
        limit: usize,
        exclude: &HashSet<ItemId>,
    ) -> Result<Vec<ContentItem>> {
        let mut matches: Vec<ContentItem> = self
            .published_of_type(content_type, exclude)
            .filter(|item| !item.term_slugs(taxonomy).is_empty())
            .cloned()
            .collect();
        sort_by_title(&mut matches);
        matches.truncate(limit);
        Ok(matches)
    }

    async fn find_recent(
        &self,
        content_type: &str,
        limit: usize,
        exclude: &HashSet<ItemId>,
    ) -> Result<Vec<ContentItem>> {
        let mut matches: Vec<ContentItem> = self
            .published_of_type(content_type, exclude)
            .cloned()
            .collect();
        matches.sort_by_key(|item| (Reverse(item.published_at), item.id));
        matches.truncate(limit);
        Ok(matches)
    }

    async fn find_legacy(
        &self,
        content_type: &str,
        order_by: OrderBy,
        order_direction: OrderDirection,
        category_ids: &[i64],
        limit: usize,
    ) -> Result<Vec<ContentItem>> {
        let no_exclusions = HashSet::new();
        let mut matches: Vec<ContentItem> = self
            .published_of_type(content_type, &no_exclusions)
            .filter(|item| {
                category_ids.is_empty()
                    || item
                        .category_ids
                        .iter()
                        .any(|cat| category_ids.contains(cat))
            })
            .cloned()
            .collect();

        match order_by {
            OrderBy::Date => matches.sort_by_key(|item| (item.published_at, item.id)),
            OrderBy::Title => sort_by_title(&mut matches),
            OrderBy::Id => matches.sort_by_key(|item| item.id),
        }
        if order_direction == OrderDirection::Desc {
            matches.reverse();
        }
        matches.truncate(limit);
        Ok(matches)
    }

    async fn term_slugs(&self, item_id: ItemId, taxonomy: &str) -> Result<BTreeSet<String>> {
        Ok(self
            .items
            .iter()
            .find(|item| item.id == item_id)
            .map(|item| item.term_slugs(taxonomy))
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PublishStatus;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;

    fn item(id: ItemId, title: &str, day: u32) -> ContentItem {
        ContentItem {
            id,
            content_type: "post".to_string(),
            status: PublishStatus::Published,
            title: title.to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
            terms: HashMap::new(),
            category_ids: vec![],
        }
    }

    #[tokio::test]
    async fn recent_is_newest_first() {
        let store = InMemoryStore::new(vec![
            item(1, "Old", 1),
            item(2, "New", 20),
            item(3, "Middle", 10),
        ]);
        let recent = store
            .find_recent("post", 10, &HashSet::new())
            .await
            .unwrap();
        let ids: Vec<ItemId> = recent.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn unpublished_items_are_invisible() {
        let mut draft = item(5, "Draft", 5);
        draft.status = PublishStatus::Other;
        let store = InMemoryStore::new(vec![draft, item(6, "Live", 6)]);

        assert!(store.find_published_by_id(5).await.unwrap().is_none());
        assert!(store.find_published_by_id(6).await.unwrap().is_some());
        let recent = store
            .find_recent("post", 10, &HashSet::new())
            .await
            .unwrap();
        assert_eq!(recent.len(), 1);
    }

    #[tokio::test]
    async fn legacy_category_allow_list() {
        let mut a = item(1, "A", 1);
        a.category_ids = vec![7];
        let mut b = item(2, "B", 2);
        b.category_ids = vec![9];
        let store = InMemoryStore::new(vec![a, b]);

        let hits = store
            .find_legacy("post", OrderBy::Title, OrderDirection::Asc, &[7], 10)
            .await
            .unwrap();
        let ids: Vec<ItemId> = hits.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[tokio::test]
    async fn fixture_round_trip() {
        let json = serde_json::to_string(&vec![item(3, "Fixture", 3)]).unwrap();
        let store = InMemoryStore::from_json_str(&json).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.find_published_by_id(3).await.unwrap().is_some());
    }
}
