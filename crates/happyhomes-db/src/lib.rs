//! # Happy Homes DB
//!
//! Document store abstraction for the Happy Homes API.
//!
//! Handlers never talk to a database driver directly. They receive a
//! [`SharedStore`] through application state and address documents with an
//! equality [`Filter`]. Two backends implement [`DocumentStore`]:
//!
//! - [`MemoryStore`]: process-local, used by tests and `STORE_BACKEND=memory`
//! - [`PgDocumentStore`]: PostgreSQL, one JSONB `documents` table
//!
//! [`Collection`] wraps a store and a collection name to read and write typed
//! records through `serde`.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use happyhomes_db::{Collection, Filter, MemoryStore, SharedStore};
//!
//! let store: SharedStore = Arc::new(MemoryStore::new());
//! let users: Collection<User> = Collection::new(store, "users");
//! let user = users.find_one(&Filter::by_email("a@x.com")).await?;
//! ```

pub mod collection;
pub mod document;
pub mod error;
pub mod filter;
pub mod init;
pub mod memory;
pub mod postgres;
pub mod results;
pub mod store;

// Re-export commonly used types at crate root
pub use collection::Collection;
pub use document::{Document, ID_FIELD, new_id, to_document};
pub use error::StoreError;
pub use filter::Filter;
pub use init::init_store;
pub use memory::MemoryStore;
pub use postgres::PgDocumentStore;
pub use results::{DeleteResult, InsertOneResult, UpdateResult};
pub use store::{DocumentStore, SharedStore};

/// Collection names used by the API.
pub mod collections {
    pub const USERS: &str = "users";
    pub const PETS: &str = "pets";
    pub const ADOPTIONS: &str = "adoptPets";
    pub const DONATIONS: &str = "donations";
    pub const PAYMENTS: &str = "paymentDonations";
}
