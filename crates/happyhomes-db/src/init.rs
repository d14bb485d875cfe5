use std::sync::Arc;

use happyhomes_config::{StoreBackend, StoreConfig};
use tracing::{info, warn};

use crate::error::StoreError;
use crate::memory::MemoryStore;
use crate::postgres::PgDocumentStore;
use crate::store::SharedStore;

/// Builds the store selected by `config`, running migrations for PostgreSQL.
///
/// This is called once at startup; the returned handle is shared by every request.
pub async fn init_store(config: &StoreConfig) -> Result<SharedStore, StoreError> {
    match config.backend {
        StoreBackend::Memory => {
            warn!("Using in-memory document store; data is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Postgres => {
            let url = config.database_url.as_deref().ok_or_else(|| {
                StoreError::NotConfigured("DATABASE_URL must be set".to_string())
            })?;

            let store = PgDocumentStore::connect(url, config.max_connections).await?;
            store.migrate().await?;
            info!("Document store migrations applied");

            Ok(Arc::new(store))
        }
    }
}
