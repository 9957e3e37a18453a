//! Repository Integration Tests
//!
//! Tests for JsonListStore against a temporary directory.

#[cfg(test)]
mod tests {
    use crate::domain::{sample_list, Item};
    use crate::repository::{JsonListStore, ListStore, LIST_FILE_NAME};
    use tempfile::TempDir;

    fn setup_store() -> (TempDir, JsonListStore) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        // Nested path, like the per-app segments under the local data dir
        let path = dir.path().join("vendor").join("listpad").join(LIST_FILE_NAME);
        (dir, JsonListStore::new(path))
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let (_dir, store) = setup_store();

        let items = sample_list(25);
        store.save(&items).await.expect("Save failed");

        let loaded = store.load().await.expect("Load failed").expect("No file");
        assert_eq!(loaded, items);
    }

    #[tokio::test]
    async fn test_save_creates_intermediate_dirs() {
        let (_dir, store) = setup_store();

        assert!(!store.path().exists());
        store.save(&sample_list(1)).await.expect("Save failed");
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_load_without_save_returns_none() {
        let (_dir, store) = setup_store();

        let loaded = store.load().await.expect("Load failed");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_second_save_overwrites() {
        let (_dir, store) = setup_store();

        store.save(&sample_list(3)).await.expect("First save failed");
        store
            .save(&[Item::new(7, "Only survivor")])
            .await
            .expect("Second save failed");

        let loaded = store.load().await.expect("Load failed").expect("No file");
        assert_eq!(loaded, vec![Item::new(7, "Only survivor")]);
    }

    #[tokio::test]
    async fn test_file_is_pretty_printed_json() {
        let (_dir, store) = setup_store();

        let items = vec![Item::new(1, "Item 1"), Item::new(2, "Item 2")];
        store.save(&items).await.expect("Save failed");

        let raw = std::fs::read_to_string(store.path()).expect("Read failed");
        assert!(raw.contains('\n'), "expected indented output");

        let value: serde_json::Value = serde_json::from_str(&raw).expect("Parse failed");
        assert_eq!(
            value,
            serde_json::json!([
                {"id": 1, "name": "Item 1"},
                {"id": 2, "name": "Item 2"}
            ])
        );
    }
}
