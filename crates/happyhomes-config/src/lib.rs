//! # Happy Homes Config
//!
//! Configuration types for the Happy Homes API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: Identity token signing configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`store`]: Document store backend selection and connection settings
//! - [`payment`]: Payment processor credentials
//! - [`server`]: Bind address
//!
//! # Example
//!
//! ```ignore
//! use happyhomes_config::{CorsConfig, JwtConfig, PaymentConfig, ServerConfig, StoreConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let store_config = StoreConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod payment;
pub mod server;
pub mod store;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use payment::PaymentConfig;
pub use server::ServerConfig;
pub use store::{StoreBackend, StoreConfig};
