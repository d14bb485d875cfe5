use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use happyhomes_auth::{Claims, verify_token};
use happyhomes_core::AppError;
use happyhomes_observability::track_auth_failure;
use tracing::debug;

use crate::state::AppState;

pub const UNAUTHORIZED_MESSAGE: &str = "unauthorized access";

/// Claims of the verified caller.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn email(&self) -> &str {
        &self.0.email
    }

    /// Verifies the `Authorization: Bearer` header of a request.
    async fn authenticate(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    let reason = if rejection.is_missing() {
                        "missing_token"
                    } else {
                        "malformed_header"
                    };
                    track_auth_failure(reason);
                    debug!(reason, "Rejected request without usable bearer token");
                    AppError::unauthorized(UNAUTHORIZED_MESSAGE)
                })?;

        let claims = verify_token(bearer.token(), &state.jwt_config).map_err(|_| {
            track_auth_failure("invalid_token");
            AppError::unauthorized(UNAUTHORIZED_MESSAGE)
        })?;

        Ok(AuthUser(claims))
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    /// Reuses the claims [`require_auth`] attached; verifies the header otherwise.
    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        Self::authenticate(parts, state).await
    }
}

/// Rejects the request with 401 unless it carries a valid bearer token, then
/// attaches the decoded claims to the request for later extractors.
pub async fn require_auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    match AuthUser::authenticate(&mut parts, &state).await {
        Ok(user) => {
            parts.extensions.insert(user);
            next.run(Request::from_parts(parts, body)).await
        }
        Err(err) => err.into_response(),
    }
}
