//! PostgreSQL document store.
//!
//! All collections share the `documents` table created by the embedded
//! migrations. Equality filters are evaluated with JSONB containment
//! (`body @> filter`), which is exact for scalar values.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use tracing::{info, instrument};

use crate::document::{Document, ID_FIELD, merge_fields, new_id};
use crate::error::StoreError;
use crate::filter::Filter;
use crate::results::{DeleteResult, InsertOneResult, UpdateResult};
use crate::store::DocumentStore;

#[derive(Clone, Debug)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Opens a connection pool. The pool lives for the whole process.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        info!(max_connections, "Connected to PostgreSQL document store");
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Applies the embedded migrations.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    async fn first_match(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<(String, Document)>, StoreError> {
        let row = sqlx::query_as::<_, (String, Json<Document>)>(
            r#"SELECT id, body FROM documents
               WHERE collection = $1 AND body @> $2
               ORDER BY seq
               LIMIT 1"#,
        )
        .bind(collection)
        .bind(Json(filter.to_document()))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(id, Json(body))| (id, body)))
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    #[instrument(skip(self))]
    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Document>, StoreError> {
        Ok(self
            .first_match(collection, filter)
            .await?
            .map(|(_, body)| body))
    }

    #[instrument(skip(self))]
    async fn find_many(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Vec<Document>, StoreError> {
        let rows = sqlx::query_scalar::<_, Json<Document>>(
            r#"SELECT body FROM documents
               WHERE collection = $1 AND body @> $2
               ORDER BY seq"#,
        )
        .bind(collection)
        .bind(Json(filter.to_document()))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|Json(body)| body).collect())
    }

    #[instrument(skip(self, document))]
    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<InsertOneResult, StoreError> {
        let id = new_id();
        document.insert(ID_FIELD.to_string(), Value::String(id.clone()));

        sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
            .bind(collection)
            .bind(&id)
            .bind(Json(&document))
            .execute(&self.pool)
            .await?;

        Ok(InsertOneResult::new(id))
    }

    /// Backed by `NOT EXISTS` plus the unique indexes of the migrations; a
    /// unique violation from a concurrent insert also reports `None`.
    #[instrument(skip(self, document))]
    async fn insert_one_if_absent(
        &self,
        collection: &str,
        existing: &Filter,
        mut document: Document,
    ) -> Result<Option<InsertOneResult>, StoreError> {
        let id = new_id();
        document.insert(ID_FIELD.to_string(), Value::String(id.clone()));

        let inserted = sqlx::query(
            r#"INSERT INTO documents (collection, id, body)
               SELECT $1, $2, $3
               WHERE NOT EXISTS (
                   SELECT 1 FROM documents
                   WHERE collection = $1 AND body @> $4
               )"#,
        )
        .bind(collection)
        .bind(&id)
        .bind(Json(&document))
        .bind(Json(existing.to_document()))
        .execute(&self.pool)
        .await;

        match inserted {
            Ok(result) if result.rows_affected() == 0 => Ok(None),
            Ok(_) => Ok(Some(InsertOneResult::new(id))),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self, set))]
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        set: Document,
    ) -> Result<UpdateResult, StoreError> {
        let Some((id, mut body)) = self.first_match(collection, filter).await? else {
            return Ok(UpdateResult::unmatched());
        };

        if !merge_fields(&mut body, &set) {
            return Ok(UpdateResult::new(1, 0));
        }

        let mut patch = set;
        patch.remove(ID_FIELD);

        // `||` replaces top-level keys only.
        let result = sqlx::query(
            r#"UPDATE documents
               SET body = body || $3, updated_at = NOW()
               WHERE collection = $1 AND id = $2"#,
        )
        .bind(collection)
        .bind(&id)
        .bind(Json(&patch))
        .execute(&self.pool)
        .await?;

        Ok(UpdateResult::new(1, result.rows_affected()))
    }

    #[instrument(skip(self))]
    async fn delete_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<DeleteResult, StoreError> {
        let result = sqlx::query(
            r#"DELETE FROM documents
               WHERE collection = $1 AND id = (
                   SELECT id FROM documents
                   WHERE collection = $1 AND body @> $2
                   ORDER BY seq
                   LIMIT 1
               )"#,
        )
        .bind(collection)
        .bind(Json(filter.to_document()))
        .execute(&self.pool)
        .await?;

        Ok(DeleteResult::new(result.rows_affected()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_insert_assigns_fresh_id(pool: PgPool) {
        let store = PgDocumentStore::from_pool(pool);
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
        assert_eq!(found["_id"], result.inserted_id.as_str());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_find_many_preserves_insertion_order(pool: PgPool) {
        let store = PgDocumentStore::from_pool(pool);
        for name in ["a", "b", "c"] {
            store
                .insert_one("pets", doc(json!({"name": name, "email": "o@x.com"})))
                .await
                .unwrap();
        }
        store
            .insert_one("pets", doc(json!({"name": "d", "email": "other@x.com"})))
            .await
            .unwrap();

        let names: Vec<_> = store
            .find_many("pets", &Filter::by_email("o@x.com"))
            .await
            .unwrap()
            .into_iter()
            .map(|d| d["name"].clone())
            .collect();
        assert_eq!(names, vec![json!("a"), json!("b"), json!("c")]);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_missing_collection_is_empty(pool: PgPool) {
        let store = PgDocumentStore::from_pool(pool);

        assert!(store.find_many("nothing", &Filter::all()).await.unwrap().is_empty());
        assert!(store.find_one("nothing", &Filter::all()).await.unwrap().is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_sets_only_given_fields(pool: PgPool) {
        let store = PgDocumentStore::from_pool(pool);
        let id = store
            .insert_one("pets", doc(json!({"name": "Rex", "adopted": false})))
            .await
            .unwrap()
            .inserted_id;

        let result = store
            .update_one("pets", &Filter::by_id(id.clone()), doc(json!({"adopted": true})))
            .await
            .unwrap();
        assert_eq!(result, UpdateResult::new(1, 1));

        let found = store.find_one("pets", &Filter::by_id(id)).await.unwrap().unwrap();
        assert_eq!(found["name"], "Rex");
        assert_eq!(found["adopted"], true);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_with_same_values_modifies_nothing(pool: PgPool) {
        let store = PgDocumentStore::from_pool(pool);
        let id = store
            .insert_one("pets", doc(json!({"name": "Rex"})))
            .await
            .unwrap()
            .inserted_id;

        let result = store
            .update_one("pets", &Filter::by_id(id), doc(json!({"name": "Rex"})))
            .await
            .unwrap();
        assert_eq!(result, UpdateResult::new(1, 0));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_without_match(pool: PgPool) {
        let store = PgDocumentStore::from_pool(pool);

        let result = store
            .update_one("pets", &Filter::by_id("missing"), doc(json!({"name": "Rex"})))
            .await
            .unwrap();
        assert_eq!(result, UpdateResult::unmatched());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_removes_first_match_only(pool: PgPool) {
        let store = PgDocumentStore::from_pool(pool);
        for name in ["a", "b"] {
            store
                .insert_one("pets", doc(json!({"name": name, "email": "o@x.com"})))
                .await
                .unwrap();
        }

        let result = store
            .delete_one("pets", &Filter::by_email("o@x.com"))
            .await
            .unwrap();
        assert_eq!(result, DeleteResult::new(1));

        let left = store.find_many("pets", &Filter::all()).await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0]["name"], "b");

        let result = store
            .delete_one("pets", &Filter::by_id("missing"))
            .await
            .unwrap();
        assert_eq!(result, DeleteResult::new(0));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_insert_if_absent_skips_existing_match(pool: PgPool) {
        let store = PgDocumentStore::from_pool(pool);
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

        let users = store.find_many("users", &Filter::all()).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["name"], "A");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_concurrent_inserts_if_absent_store_one_user(pool: PgPool) {
        let store = PgDocumentStore::from_pool(pool);

        let attempts = (0..8).map(|i| {
            let store = store.clone();
            async move {
                store
                    .insert_one_if_absent(
                        "users",
                        &Filter::by_email("a@x.com"),
                        doc(json!({"email": "a@x.com", "name": format!("User {i}")})),
                    )
                    .await
                    .unwrap()
            }
        });
        let handles: Vec<_> = attempts.map(tokio::spawn).collect();

        let mut inserted = 0;
        for handle in handles {
            if handle.await.unwrap().is_some() {
                inserted += 1;
            }
        }

        assert_eq!(inserted, 1);
        let users = store.find_many("users", &Filter::all()).await.unwrap();
        assert_eq!(users.len(), 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_plain_insert_of_duplicate_user_email_is_rejected(pool: PgPool) {
        let store = PgDocumentStore::from_pool(pool);
        store
            .insert_one("users", doc(json!({"email": "a@x.com"})))
            .await
            .unwrap();

        let duplicate = store.insert_one("users", doc(json!({"email": "a@x.com"}))).await;
        assert!(matches!(duplicate, Err(StoreError::Backend(_))));

        // Other collections may repeat an email.
        for _ in 0..2 {
            store
                .insert_one("pets", doc(json!({"email": "a@x.com"})))
                .await
                .unwrap();
        }
    }
}
