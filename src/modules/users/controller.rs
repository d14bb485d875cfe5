use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use happyhomes_core::{AppError, ErrorResponse};
use happyhomes_db::UpdateResult;
use happyhomes_models::{AdminStatusResponse, CreateUserDto, RegisterUserResponse, User};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::FORBIDDEN_MESSAGE;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Every registered user", body = Vec<User>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users(&state.store).await?;
    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User registered", body = RegisterUserResponse),
        (status = 200, description = "A user with this email already exists", body = RegisterUserResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Invalid email", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<RegisterUserResponse>), AppError> {
    let (created, response) = UserService::register_user(&state.store, dto).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(response)))
}

#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    params(
        ("email" = String, Path, description = "Email of the caller")
    ),
    responses(
        (status = 200, description = "Whether the caller is an admin", body = AdminStatusResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email does not belong to the caller", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, auth_user))]
pub async fn check_admin(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<AdminStatusResponse>, AppError> {
    if email != auth_user.email() {
        return Err(AppError::forbidden(FORBIDDEN_MESSAGE));
    }

    let admin = UserService::is_admin(&state.store, &email).await?;
    Ok(Json(AdminStatusResponse { admin }))
}

#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Update result; matchedCount is 0 for an unknown ID", body = UpdateResult),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn make_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = UserService::make_admin(&state.store, &id).await?;
    Ok(Json(result))
}
