use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use happyhomes_core::{AppError, ErrorResponse};
use happyhomes_db::{InsertOneResult, UpdateResult};
use happyhomes_models::{CreateDonationDto, DonationCampaign, UpdateDonationDto};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::donations::service::DonationService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/donations",
    responses(
        (status = 200, description = "All donation campaigns", body = Vec<DonationCampaign>)
    ),
    tag = "Donations"
)]
#[instrument(skip(state))]
pub async fn get_campaigns(
    State(state): State<AppState>,
) -> Result<Json<Vec<DonationCampaign>>, AppError> {
    let campaigns = DonationService::get_campaigns(&state.store).await?;
    Ok(Json(campaigns))
}

#[utoipa::path(
    get,
    path = "/donations/{id}",
    params(
        ("id" = String, Path, description = "Campaign ID")
    ),
    responses(
        (status = 200, description = "Campaign details", body = DonationCampaign),
        (status = 404, description = "Campaign not found", body = ErrorResponse)
    ),
    tag = "Donations"
)]
#[instrument(skip(state))]
pub async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DonationCampaign>, AppError> {
    let campaign = DonationService::get_campaign(&state.store, &id).await?;
    Ok(Json(campaign))
}

#[utoipa::path(
    patch,
    path = "/donations/{id}",
    params(
        ("id" = String, Path, description = "Campaign ID")
    ),
    request_body = UpdateDonationDto,
    responses(
        (status = 200, description = "Update result", body = UpdateResult),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Invalid fields", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Donations"
)]
#[instrument(skip(state))]
pub async fn update_campaign(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateDonationDto>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = DonationService::update_campaign(&state.store, &id, dto).await?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/createDonation",
    request_body = CreateDonationDto,
    responses(
        (status = 201, description = "Campaign created with nothing donated yet", body = InsertOneResult),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Invalid fields", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Donations"
)]
#[instrument(skip(state, auth_user))]
pub async fn create_campaign(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateDonationDto>,
) -> Result<(StatusCode, Json<InsertOneResult>), AppError> {
    let result = DonationService::create_campaign(&state.store, auth_user.email(), dto).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    get,
    path = "/createDonation/{email}",
    params(
        ("email" = String, Path, description = "Email of the campaign creator")
    ),
    responses(
        (status = 200, description = "Campaigns created by this user", body = Vec<DonationCampaign>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Donations"
)]
#[instrument(skip(state))]
pub async fn get_campaigns_by_creator(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<DonationCampaign>>, AppError> {
    let campaigns = DonationService::get_campaigns_by_creator(&state.store, &email).await?;
    Ok(Json(campaigns))
}
