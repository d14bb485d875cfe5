//! # Happy Homes Auth
//!
//! Identity tokens for the Happy Homes API.
//!
//! - [`claims`]: the caller-supplied [`IdentityPayload`] and the [`Claims`] a token carries
//! - [`jwt`]: token issuing and verification
//!
//! A token embeds whatever identity payload the caller exchanged for it (at
//! minimum an email) and expires after [`JwtConfig::access_token_expiry`]
//! seconds. There is no refresh token and no revocation list; an expired token
//! is simply replaced by asking for a new one.
//!
//! [`JwtConfig::access_token_expiry`]: happyhomes_config::JwtConfig
//!
//! # Example
//!
//! ```ignore
//! use happyhomes_auth::{IdentityPayload, issue_token, verify_token};
//! use happyhomes_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = issue_token(&IdentityPayload::new("a@x.com"), &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.email, "a@x.com");
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{Claims, IdentityPayload};
pub use jwt::{issue_token, issue_token_at, verify_token};
