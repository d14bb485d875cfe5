//! Identity token issuing and verification.
//!
//! Tokens are HS256 JWTs signed with [`JwtConfig::secret`]. Verification is a
//! plain synchronous call: signature check plus expiry check, nothing else.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use happyhomes_config::JwtConfig;
use happyhomes_core::AppError;

use crate::claims::{Claims, IdentityPayload};

/// Issues a signed token for `payload`, valid for the configured lifetime.
///
/// The payload is not validated; any caller may obtain a token for any email.
/// The same identity can hold several live tokens at once.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn issue_token(payload: &IdentityPayload, jwt_config: &JwtConfig) -> Result<String, AppError> {
    issue_token_at(payload, Utc::now().timestamp(), jwt_config)
}

/// Issues a token as if the current time were `issued_at` (Unix seconds).
pub fn issue_token_at(
    payload: &IdentityPayload,
    issued_at: i64,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let iat = issued_at.max(0) as usize;
    let exp = (issued_at + jwt_config.access_token_expiry).max(0) as usize;

    let claims = Claims::from_payload(payload, iat, exp);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies a token and returns its decoded claims.
///
/// Expiry is checked without clock leeway: a token is rejected as soon as
/// its `exp` has passed.
///
/// # Errors
///
/// Returns an unauthorized error if the token is malformed, its signature does
/// not match the configured secret, or it has expired.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}
