//! Process-local document store.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::document::{Document, ID_FIELD, merge_fields, new_id};
use crate::error::StoreError;
use crate::filter::Filter;
use crate::results::{DeleteResult, InsertOneResult, UpdateResult};
use crate::store::DocumentStore;

/// Collections held in memory, each a vector kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in `collection`.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| filter.matches(doc)))
            .cloned())
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().filter(|doc| filter.matches(doc)).cloned().collect())
            .unwrap_or_default())
    }

    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<InsertOneResult, StoreError> {
        let id = new_id();
        document.insert(ID_FIELD.to_string(), Value::String(id.clone()));

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(InsertOneResult::new(id))
    }

    async fn insert_one_if_absent(
        &self,
        collection: &str,
        existing: &Filter,
        mut document: Document,
    ) -> Result<Option<InsertOneResult>, StoreError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        if docs.iter().any(|doc| existing.matches(doc)) {
            return Ok(None);
        }

        let id = new_id();
        document.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        docs.push(document);

        Ok(Some(InsertOneResult::new(id)))
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        set: Document,
    ) -> Result<UpdateResult, StoreError> {
        let mut collections = self.collections.write().await;
        let target = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| filter.matches(doc)));

        Ok(match target {
            Some(doc) => {
                let modified = merge_fields(doc, &set);
                UpdateResult::new(1, u64::from(modified))
            }
            None => UpdateResult::unmatched(),
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<DeleteResult, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(DeleteResult::new(0));
        };

        match docs.iter().position(|doc| filter.matches(doc)) {
            Some(index) => {
                docs.remove(index);
                Ok(DeleteResult::new(1))
            }
            None => Ok(DeleteResult::new(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_fresh_id() {
        let store = MemoryStore::new();
        let result = store
            .insert_one("pets", doc(json!({"_id": "caller-chosen", "name": "Rex"})))
            .await
            .unwrap();

        assert!(result.acknowledged);
        assert_ne!(result.inserted_id, "caller-chosen");

        let found = store
            .find_one("pets", &Filter::by_id(result.inserted_id.clone()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found["name"], "Rex");
    }

    #[tokio::test]
    async fn find_many_preserves_insertion_order() {
        let store = MemoryStore::new();
        for name in ["a", "b", "c"] {
            store
                .insert_one("pets", doc(json!({"name": name, "email": "o@x.com"})))
                .await
                .unwrap();
        }
        store
            .insert_one("pets", doc(json!({"name": "z", "email": "other@x.com"})))
            .await
            .unwrap();

        let names: Vec<Value> = store
            .find_many("pets", &Filter::by_email("o@x.com"))
            .await
            .unwrap()
            .into_iter()
            .map(|d| d["name"].clone())
            .collect();

        assert_eq!(names, vec![json!("a"), json!("b"), json!("c")]);
    }

    #[tokio::test]
    async fn find_in_missing_collection_is_empty() {
        let store = MemoryStore::new();
        assert!(store.find_one("nope", &Filter::all()).await.unwrap().is_none());
        assert!(store.find_many("nope", &Filter::all()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_sets_only_given_fields() {
        let store = MemoryStore::new();
        let id = store
            .insert_one("pets", doc(json!({"name": "Rex", "age": 3, "category": "dog"})))
            .await
            .unwrap()
            .inserted_id;

        let result = store
            .update_one("pets", &Filter::by_id(id.clone()), doc(json!({"age": 4})))
            .await
            .unwrap();
        assert_eq!(result, UpdateResult::new(1, 1));

        let pet = store.find_one("pets", &Filter::by_id(id)).await.unwrap().unwrap();
        assert_eq!(pet["name"], "Rex");
        assert_eq!(pet["age"], 4);
        assert_eq!(pet["category"], "dog");
    }

    #[tokio::test]
    async fn update_without_match_reports_zero() {
        let store = MemoryStore::new();
        let result = store
            .update_one("pets", &Filter::by_id("missing"), doc(json!({"age": 4})))
            .await
            .unwrap();
        assert_eq!(result, UpdateResult::unmatched());
    }

    #[tokio::test]
    async fn update_with_same_values_is_not_a_modification() {
        let store = MemoryStore::new();
        let id = store
            .insert_one("users", doc(json!({"email": "a@x.com", "role": "admin"})))
            .await
            .unwrap()
            .inserted_id;

        let result = store
            .update_one("users", &Filter::by_id(id), doc(json!({"role": "admin"})))
            .await
            .unwrap();
        assert_eq!(result, UpdateResult::new(1, 0));
    }

    #[tokio::test]
    async fn insert_if_absent_skips_existing_match() {
        let store = MemoryStore::new();
        let by_email = Filter::by_email("a@x.com");

        let first = store
            .insert_one_if_absent("users", &by_email, doc(json!({"email": "a@x.com", "name": "A"})))
            .await
            .unwrap();
        assert!(first.is_some());

        let second = store
            .insert_one_if_absent("users", &by_email, doc(json!({"email": "a@x.com", "name": "B"})))
            .await
            .unwrap();
        assert!(second.is_none());

        assert_eq!(store.count("users").await, 1);
        let stored = store.find_one("users", &by_email).await.unwrap().unwrap();
        assert_eq!(stored["name"], "A");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_if_absent_store_one_document() {
        let store = std::sync::Arc::new(MemoryStore::new());

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .insert_one_if_absent(
                            "users",
                            &Filter::by_email("a@x.com"),
                            doc(json!({"email": "a@x.com"})),
                        )
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut inserted = 0;
        for task in tasks {
            if task.await.unwrap().is_some() {
                inserted += 1;
            }
        }

        assert_eq!(inserted, 1);
        assert_eq!(store.count("users").await, 1);
    }

    #[tokio::test]
    async fn delete_removes_first_match_only() {
        let store = MemoryStore::new();
        store.insert_one("pets", doc(json!({"name": "Rex"}))).await.unwrap();
        store.insert_one("pets", doc(json!({"name": "Rex"}))).await.unwrap();

        let result = store.delete_one("pets", &Filter::eq("name", "Rex")).await.unwrap();
        assert_eq!(result.deleted_count, 1);
        assert_eq!(store.count("pets").await, 1);

        let again = store.delete_one("pets", &Filter::eq("name", "Max")).await.unwrap();
        assert_eq!(again.deleted_count, 0);
    }
}
