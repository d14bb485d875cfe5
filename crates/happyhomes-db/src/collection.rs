//! Typed access to one collection.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::document::{Document, to_document};
use crate::error::StoreError;
use crate::filter::Filter;
use crate::results::{DeleteResult, InsertOneResult, UpdateResult};
use crate::store::SharedStore;

/// A collection whose documents decode into `T`.
pub struct Collection<T> {
    store: SharedStore,
    name: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            name: self.name,
            _record: PhantomData,
        }
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: SharedStore, name: &'static str) -> Self {
        Self {
            store,
            name,
            _record: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub async fn find_one(&self, filter: &Filter) -> Result<Option<T>, StoreError> {
        self.store
            .find_one(self.name, filter)
            .await?
            .map(decode)
            .transpose()
    }

    /// The first matching document, undecoded.
    pub async fn find_one_document(&self, filter: &Filter) -> Result<Option<Document>, StoreError> {
        self.store.find_one(self.name, filter).await
    }

    pub async fn find_many(&self, filter: &Filter) -> Result<Vec<T>, StoreError> {
        self.store
            .find_many(self.name, filter)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub async fn insert_one(&self, record: &T) -> Result<InsertOneResult, StoreError> {
        self.store.insert_one(self.name, to_document(record)?).await
    }

    /// Inserts `record` unless a document matching `existing` is stored; `None` if one was.
    pub async fn insert_one_if_absent(
        &self,
        existing: &Filter,
        record: &T,
    ) -> Result<Option<InsertOneResult>, StoreError> {
        self.store
            .insert_one_if_absent(self.name, existing, to_document(record)?)
            .await
    }

    /// Sets every field `set` serializes to; fields it omits are left untouched.
    pub async fn update_one<S>(&self, filter: &Filter, set: &S) -> Result<UpdateResult, StoreError>
    where
        S: Serialize + ?Sized,
    {
        self.store
            .update_one(self.name, filter, to_document(set)?)
            .await
    }

    pub async fn delete_one(&self, filter: &Filter) -> Result<DeleteResult, StoreError> {
        self.store.delete_one(self.name, filter).await
    }
}

fn decode<T: DeserializeOwned>(document: Document) -> Result<T, StoreError> {
    Ok(serde_json::from_value(Value::Object(document))?)
}
