use related_posts::{ContentStore, InMemoryStore, PrefsFile, Selector};
use std::io::Write;
use tempfile::TempDir;

#[tokio::test]
async fn test_end_to_end_from_fixture_files() {
    let temp_dir = TempDir::new().unwrap();

    let items_path = temp_dir.path().join("items.json");
    let mut items_file = std::fs::File::create(&items_path).unwrap();
    let fixture = serde_json::json!([
        {
            "id": 42,
            "content_type": "post",
            "status": "published",
            "title": "Source post",
            "published_at": "2024-06-01T09:00:00Z",
            "terms": {"topic": ["security", "privacy"]}
        },
        {
            "id": 10,
            "content_type": "post",
            "status": "published",
            "title": "Both terms",
            "published_at": "2024-06-02T09:00:00Z",
            "terms": {"topic": ["security", "privacy"]}
        },
        {
            "id": 11,
            "content_type": "post",
            "status": "published",
            "title": "Security only",
            "published_at": "2024-06-03T09:00:00Z",
            "terms": {"topic": ["security"]}
        }
    ]);
    write!(items_file, "{}", fixture).unwrap();

    let prefs_path = temp_dir.path().join("prefs.toml");
    let mut prefs_file = std::fs::File::create(&prefs_path).unwrap();
    write!(
        prefs_file,
        "[request]\ncontent_type = \"post\"\nmax_results = 2\ntaxonomy_priority = [\"topic\"]\n"
    )
    .unwrap();

    let store = InMemoryStore::from_json_file(&items_path).unwrap();
    assert_eq!(store.len(), 3);
    let prefs = PrefsFile::from_file(&prefs_path).unwrap().into_preferences();

    let selector = Selector::new(store);
    let source = selector
        .store()
        .find_published_by_id(42)
        .await
        .unwrap()
        .unwrap();

    let result = selector.select_related(Some(&source), &prefs).await.unwrap();
    // Exact match settles the topic taxonomy at item 10; the existence
    // fallback then pulls item 11.
    assert_eq!(result, vec![10, 11]);
}

#[tokio::test]
async fn test_missing_fixture_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.json");
    assert!(InMemoryStore::from_json_file(&missing).is_err());
    assert!(PrefsFile::from_file(temp_dir.path().join("nope.toml")).is_err());
}

#[tokio::test]
async fn test_malformed_fixture_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("items.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(InMemoryStore::from_json_file(&path).is_err());
}
