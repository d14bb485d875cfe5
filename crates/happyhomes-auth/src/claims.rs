//! Identity payloads and token claims.
//!
//! - [`IdentityPayload`]: what a client posts to obtain a token
//! - [`Claims`]: what a verified token decodes to, the payload plus timestamps

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Claim names reserved for the token itself and never copied from a payload.
pub const RESERVED_CLAIMS: [&str; 3] = ["exp", "iat", "nbf"];

/// Identity a client exchanges for a token.
///
/// Only `email` is required. Every other field the client sends (display
/// name, photo URL, ...) is carried into the token untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IdentityPayload {
    /// Account identifier, matched against stored user records by the role gate
    pub email: String,
    /// Any additional identity fields supplied by the client
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl IdentityPayload {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Decoded claims of a verified identity token, scoped to a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Identity email
    pub email: String,
    /// Remaining identity fields from the payload the token was issued for
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    pub fn from_payload(payload: &IdentityPayload, iat: usize, exp: usize) -> Self {
        let extra = payload
            .extra
            .iter()
            .filter(|(key, _)| !RESERVED_CLAIMS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            email: payload.email.clone(),
            extra,
            exp,
            iat,
        }
    }

    /// The identity payload this token was issued for.
    pub fn identity(&self) -> IdentityPayload {
        IdentityPayload {
            email: self.email.clone(),
            extra: self.extra.clone(),
        }
    }
}
