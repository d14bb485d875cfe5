//! Fake data for development stores.
//!
//! Records are generated in parallel with `rayon`, then inserted one by one.
//! Every seeded document carries `seeded: true` so [`clear_seeded`] can remove
//! exactly what the seeder created.

mod generators;

use std::time::Instant;

use happyhomes_db::{Document, DocumentStore, Filter, collections, to_document};
use serde::Serialize;
use serde_json::Value;

pub use generators::{generate_campaigns, generate_pets, generate_users};

/// Marker field set on every seeded document.
pub const SEEDED_FIELD: &str = "seeded";

const SEEDED_COLLECTIONS: [&str; 3] = [collections::USERS, collections::PETS, collections::DONATIONS];

#[derive(Debug, Clone, Copy)]
pub struct SeedConfig {
    pub users: usize,
    pub pets: usize,
    pub campaigns: usize,
}

impl SeedConfig {
    pub fn new(users: usize, pets: usize, campaigns: usize) -> Self {
        Self {
            users,
            pets,
            campaigns,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub pets: usize,
    pub campaigns: usize,
}

/// Seeds users first; pets and campaigns are listed under the seeded users' emails.
pub async fn seed_all(
    store: &dyn DocumentStore,
    config: SeedConfig,
) -> Result<SeedSummary, Box<dyn std::error::Error>> {
    let start = Instant::now();
    println!("🌱 Starting seeding...");
    println!("   - Users: {}", config.users);
    println!("   - Pets: {}", config.pets);
    println!("   - Campaigns: {}", config.campaigns);

    let users = generate_users(config.users);
    let owners: Vec<String> = users.iter().map(|u| u.email.clone()).collect();
    let pets = generate_pets(config.pets, &owners);
    let campaigns = generate_campaigns(config.campaigns, &owners);

    let summary = SeedSummary {
        users: insert_seeded(store, collections::USERS, &users).await?,
        pets: insert_seeded(store, collections::PETS, &pets).await?,
        campaigns: insert_seeded(store, collections::DONATIONS, &campaigns).await?,
    };

    println!("✅ Seeding finished in {:?}", start.elapsed());
    Ok(summary)
}

async fn insert_seeded<T: Serialize>(
    store: &dyn DocumentStore,
    collection: &str,
    records: &[T],
) -> Result<usize, Box<dyn std::error::Error>> {
    let start = Instant::now();
    for record in records {
        store.insert_one(collection, seeded_document(record)?).await?;
    }
    println!(
        "   ✓ Inserted {} {} in {:?}",
        records.len(),
        collection,
        start.elapsed()
    );
    Ok(records.len())
}

fn seeded_document<T: Serialize>(record: &T) -> Result<Document, Box<dyn std::error::Error>> {
    let mut document = to_document(record)?;
    document.insert(SEEDED_FIELD.to_string(), Value::Bool(true));
    Ok(document)
}

/// Deletes every seeded document. Returns how many were removed.
pub async fn clear_seeded(store: &dyn DocumentStore) -> Result<u64, Box<dyn std::error::Error>> {
    println!("🗑️  Clearing seeded data...");
    let filter = Filter::eq(SEEDED_FIELD, true);
    let mut total = 0;

    for collection in SEEDED_COLLECTIONS {
        let mut removed = 0;
        while store.delete_one(collection, &filter).await?.deleted_count > 0 {
            removed += 1;
        }
        println!("   ✓ Removed {removed} from {collection}");
        total += removed;
    }

    println!("✅ Seeded data cleared");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use happyhomes_db::MemoryStore;
    use serde_json::json;

    #[tokio::test]
    async fn seed_then_clear_leaves_real_data() {
        let store = MemoryStore::new();
        store
            .insert_one(
                collections::USERS,
                json!({"email": "real@x.com"}).as_object().cloned().unwrap(),
            )
            .await
            .unwrap();

        let summary = seed_all(&store, SeedConfig::new(4, 6, 2)).await.unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                users: 4,
                pets: 6,
                campaigns: 2
            }
        );
        assert_eq!(store.count(collections::USERS).await, 5);
        assert_eq!(store.count(collections::PETS).await, 6);

        let removed = clear_seeded(&store).await.unwrap();
        assert_eq!(removed, 12);
        assert_eq!(store.count(collections::USERS).await, 1);
        assert_eq!(store.count(collections::PETS).await, 0);
        assert_eq!(store.count(collections::DONATIONS).await, 0);
    }

    #[tokio::test]
    async fn pets_without_users_are_skipped() {
        let store = MemoryStore::new();
        let summary = seed_all(&store, SeedConfig::new(0, 3, 3)).await.unwrap();
        assert_eq!(summary, SeedSummary::default());
    }
}
