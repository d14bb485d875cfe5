use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use happyhomes_core::{AppError, ErrorResponse};
use happyhomes_db::{InsertOneResult, UpdateResult};
use happyhomes_models::{AdoptionRequest, CreateAdoptionDto, UpdateAdoptionStatusDto};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::adoptions::service::AdoptionService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/adoptPets/{email}",
    params(
        ("email" = String, Path, description = "Email of the pet owner")
    ),
    responses(
        (status = 200, description = "Adoption requests for the owner's pets", body = Vec<AdoptionRequest>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Adoptions"
)]
#[instrument(skip(state))]
pub async fn get_adoption_requests(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<AdoptionRequest>>, AppError> {
    let requests = AdoptionService::get_requests_for_owner(&state.store, &email).await?;
    Ok(Json(requests))
}

#[utoipa::path(
    post,
    path = "/adoptPets",
    request_body = CreateAdoptionDto,
    responses(
        (status = 201, description = "Request recorded as pending", body = InsertOneResult),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Invalid fields", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Adoptions"
)]
#[instrument(skip(state, auth_user))]
pub async fn create_adoption_request(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateAdoptionDto>,
) -> Result<(StatusCode, Json<InsertOneResult>), AppError> {
    let result = AdoptionService::create_request(&state.store, auth_user.email(), dto).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    patch,
    path = "/adoptPets/{id}",
    params(
        ("id" = String, Path, description = "Adoption request ID")
    ),
    request_body = UpdateAdoptionStatusDto,
    responses(
        (status = 200, description = "Update result", body = UpdateResult),
        (status = 400, description = "Unknown status", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Adoptions"
)]
#[instrument(skip(state))]
pub async fn update_adoption_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateAdoptionStatusDto>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = AdoptionService::update_status(&state.store, &id, dto).await?;
    Ok(Json(result))
}
