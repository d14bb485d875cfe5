use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use happyhomes_core::{AppError, ErrorResponse};
use happyhomes_db::{DeleteResult, InsertOneResult, UpdateResult};
use happyhomes_models::{CreatePetDto, Pet, PetFilterParams, UpdatePetDto};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::pets::service::PetService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/pets",
    params(PetFilterParams),
    responses(
        (status = 200, description = "Pets matching the optional filters", body = Vec<Pet>)
    ),
    tag = "Pets"
)]
#[instrument(skip(state))]
pub async fn get_pets(
    State(state): State<AppState>,
    Query(params): Query<PetFilterParams>,
) -> Result<Json<Vec<Pet>>, AppError> {
    let pets = PetService::get_pets(&state.store, params).await?;
    Ok(Json(pets))
}

#[utoipa::path(
    get,
    path = "/pets/{id}",
    params(
        ("id" = String, Path, description = "Pet ID")
    ),
    responses(
        (status = 200, description = "Pet details", body = Pet),
        (status = 404, description = "Pet not found", body = ErrorResponse)
    ),
    tag = "Pets"
)]
#[instrument(skip(state))]
pub async fn get_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Pet>, AppError> {
    let pet = PetService::get_pet(&state.store, &id).await?;
    Ok(Json(pet))
}

#[utoipa::path(
    get,
    path = "/pets/email/{email}",
    params(
        ("email" = String, Path, description = "Email of the user who listed the pets")
    ),
    responses(
        (status = 200, description = "Pets listed by this user", body = Vec<Pet>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Pets"
)]
#[instrument(skip(state))]
pub async fn get_pets_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Pet>>, AppError> {
    let pets = PetService::get_pets_by_email(&state.store, &email).await?;
    Ok(Json(pets))
}

#[utoipa::path(
    post,
    path = "/pets",
    request_body = CreatePetDto,
    responses(
        (status = 201, description = "Pet listed, not yet adopted", body = InsertOneResult),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Invalid fields", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Pets"
)]
#[instrument(skip(state, auth_user))]
pub async fn create_pet(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreatePetDto>,
) -> Result<(StatusCode, Json<InsertOneResult>), AppError> {
    let result = PetService::create_pet(&state.store, auth_user.email(), dto).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    patch,
    path = "/pets/{id}",
    params(
        ("id" = String, Path, description = "Pet ID")
    ),
    request_body = UpdatePetDto,
    responses(
        (status = 200, description = "Only the supplied fields were set", body = UpdateResult),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Invalid fields", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Pets"
)]
#[instrument(skip(state))]
pub async fn update_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdatePetDto>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = PetService::update_pet(&state.store, &id, dto).await?;
    Ok(Json(result))
}

#[utoipa::path(
    patch,
    path = "/pets/adopt/{id}",
    params(
        ("id" = String, Path, description = "Pet ID")
    ),
    responses(
        (status = 200, description = "Pet marked as adopted", body = UpdateResult),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Pets"
)]
#[instrument(skip(state))]
pub async fn adopt_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = PetService::mark_adopted(&state.store, &id).await?;
    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/pets/{id}",
    params(
        ("id" = String, Path, description = "Pet ID")
    ),
    responses(
        (status = 200, description = "Delete result", body = DeleteResult),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Pets"
)]
#[instrument(skip(state))]
pub async fn delete_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = PetService::delete_pet(&state.store, &id).await?;
    Ok(Json(result))
}
