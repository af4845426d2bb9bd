use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::Result;
use crate::path::CollectionRef;
use crate::store::DocumentStore;

/// In-memory document store with the same upsert semantics as the
/// SQLite-backed one. Used as a drop-in substitute in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    collections: Arc<Mutex<HashMap<String, BTreeMap<String, Value>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of documents across all collections.
    pub fn document_count(&self) -> usize {
        let collections = self.collections.lock().unwrap();
        collections.values().map(|docs| docs.len()).sum()
    }

    /// Paths of all non-empty collections, sorted.
    pub fn collection_paths(&self) -> Vec<String> {
        let collections = self.collections.lock().unwrap();
        let mut paths: Vec<String> = collections
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(path, _)| path.clone())
            .collect();
        paths.sort();
        paths
    }
}

impl DocumentStore for MemoryStore {
    fn set_document(
        &self,
        collection: &CollectionRef,
        document_id: &str,
        document: &Value,
    ) -> Result<()> {
        let mut collections = self.collections.lock().unwrap();
        collections
            .entry(collection.path().to_string())
            .or_default()
            .insert(document_id.to_string(), document.clone());
        Ok(())
    }

    fn get_document(
        &self,
        collection: &CollectionRef,
        document_id: &str,
    ) -> Result<Option<Value>> {
        let collections = self.collections.lock().unwrap();
        Ok(collections
            .get(collection.path())
            .and_then(|docs| docs.get(document_id))
            .cloned())
    }

    fn list_documents(&self, collection: &CollectionRef) -> Result<Vec<(String, Value)>> {
        let collections = self.collections.lock().unwrap();
        Ok(collections
            .get(collection.path())
            .map(|docs| {
                docs.iter()
                    .map(|(id, doc)| (id.clone(), doc.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_get_list() {
        let store = MemoryStore::new();
        let notifications = CollectionRef::new("notifications");

        store
            .set_document(&notifications, "notif_1", &json!({"type": "follow"}))
            .expect("Failed to write document");

        let read = store
            .get_document(&notifications, "notif_1")
            .expect("Failed to read document");
        assert_eq!(read, Some(json!({"type": "follow"})));

        let listed = store
            .list_documents(&notifications)
            .expect("Failed to list documents");
        assert_eq!(listed.len(), 1);
        assert_eq!(store.document_count(), 1);
    }

    #[test]
    fn test_overwrite_replaces_document() {
        let store = MemoryStore::new();
        let users = CollectionRef::new("users");

        store
            .set_document(&users, "user_1", &json!({"bio": "old", "extra": 1}))
            .expect("Failed to write document");
        store
            .set_document(&users, "user_1", &json!({"bio": "new"}))
            .expect("Failed to overwrite document");

        let read = store
            .get_document(&users, "user_1")
            .expect("Failed to read document");
        assert_eq!(read, Some(json!({"bio": "new"})));
        assert_eq!(store.document_count(), 1);
    }

    #[test]
    fn test_collection_paths_sorted() {
        let store = MemoryStore::new();
        let posts = CollectionRef::new("posts");
        let comments = posts.doc("post_1").collection("comments");

        store
            .set_document(&comments, "comment_1", &json!({}))
            .expect("Failed to write comment");
        store
            .set_document(&posts, "post_1", &json!({}))
            .expect("Failed to write post");

        assert_eq!(
            store.collection_paths(),
            vec!["posts".to_string(), "posts/post_1/comments".to_string()]
        );
    }
}
