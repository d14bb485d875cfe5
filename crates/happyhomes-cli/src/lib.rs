//! # Happy Homes CLI
//!
//! Out-of-band administration for the Happy Homes store.
//!
//! The only API route that changes a role is itself behind the role gate, so
//! the first administrator is promoted here. The seeder fills a development
//! store with fake users, pets and donation campaigns.
//!
//! ```ignore
//! use happyhomes_cli::{admin, seeder::{self, SeedConfig}};
//!
//! admin::promote_admin(store.as_ref(), "ada@example.com").await?;
//! seeder::seed_all(store.as_ref(), SeedConfig::new(10, 25, 5)).await?;
//! ```

pub mod admin;
pub mod seeder;
