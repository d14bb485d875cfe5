use axum::{Json, extract::State, extract::rejection::JsonRejection};
use happyhomes_auth::IdentityPayload;
use happyhomes_core::{AppError, ErrorResponse};
use happyhomes_models::TokenResponse;
use tracing::instrument;

use crate::modules::auth::service::AuthService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/jwt",
    request_body = IdentityPayload,
    responses(
        (status = 200, description = "Signed identity token, valid for one hour", body = TokenResponse),
        (status = 400, description = "Body is not an identity payload", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn issue_jwt(
    State(state): State<AppState>,
    payload: Result<Json<IdentityPayload>, JsonRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    let response = AuthService::issue_token(&payload, &state.jwt_config)?;
    Ok(Json(response))
}
