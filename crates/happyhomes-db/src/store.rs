use std::sync::Arc;

use async_trait::async_trait;

use crate::document::Document;
use crate::error::StoreError;
use crate::filter::Filter;
use crate::results::{DeleteResult, InsertOneResult, UpdateResult};

/// The narrow contract every route handler depends on.
///
/// Each call is a single operation on one collection. Operations addressing a
/// single document pick the first match in insertion order. Atomicity is per
/// document only; there are no transactions and no retries.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Document>, StoreError>;

    /// All matching documents, in insertion order. Unbounded.
    async fn find_many(&self, collection: &str, filter: &Filter)
    -> Result<Vec<Document>, StoreError>;

    /// Inserts `document` under a freshly assigned `_id`; any `_id` it carries is replaced.
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertOneResult, StoreError>;

    /// Inserts `document` unless a document matching `existing` is already stored.
    ///
    /// The check and the insert are one atomic step: concurrent calls with the
    /// same `existing` filter insert at most one document. Returns `None` when a
    /// match already existed.
    async fn insert_one_if_absent(
        &self,
        collection: &str,
        existing: &Filter,
        document: Document,
    ) -> Result<Option<InsertOneResult>, StoreError>;

    /// Sets the top-level fields of `set` on the first match, leaving other fields untouched.
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        set: Document,
    ) -> Result<UpdateResult, StoreError>;

    async fn delete_one(&self, collection: &str, filter: &Filter)
    -> Result<DeleteResult, StoreError>;
}

/// Store handle shared by every request.
pub type SharedStore = Arc<dyn DocumentStore>;
