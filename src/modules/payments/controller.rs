use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use happyhomes_core::{AppError, ErrorResponse};
use happyhomes_db::{DeleteResult, InsertOneResult, UpdateResult};
use happyhomes_models::{
    CreatePaymentDto, PaymentIntentRequest, PaymentIntentResponse, PaymentRecord, UpdatePaymentDto,
};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::payments::service::PaymentService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/create-payment-intent",
    request_body = PaymentIntentRequest,
    responses(
        (status = 200, description = "Client secret of the new payment intent", body = PaymentIntentResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Price must be positive", body = ErrorResponse),
        (status = 502, description = "Payment processor rejected the request", body = ErrorResponse),
        (status = 503, description = "Payment processing is not configured", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PaymentIntentRequest>,
) -> Result<Json<PaymentIntentResponse>, AppError> {
    let response = PaymentService::create_intent(state.payments.as_ref(), request).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/paymentDonations/{email}",
    params(
        ("email" = String, Path, description = "Donor email")
    ),
    responses(
        (status = 200, description = "Payments made by this donor", body = Vec<PaymentRecord>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn get_payments_by_donor(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<PaymentRecord>>, AppError> {
    let records = PaymentService::get_by_donor(&state.store, &email).await?;
    Ok(Json(records))
}

#[utoipa::path(
    get,
    path = "/paymentDonations/campaign/{id}",
    params(
        ("id" = String, Path, description = "Donation campaign ID")
    ),
    responses(
        (status = 200, description = "Payments made to this campaign", body = Vec<PaymentRecord>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn get_payments_by_campaign(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<PaymentRecord>>, AppError> {
    let records = PaymentService::get_by_campaign(&state.store, &id).await?;
    Ok(Json(records))
}

#[utoipa::path(
    post,
    path = "/paymentDonations",
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment recorded", body = InsertOneResult),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Invalid fields", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state, auth_user))]
pub async fn create_payment_record(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreatePaymentDto>,
) -> Result<(StatusCode, Json<InsertOneResult>), AppError> {
    let result = PaymentService::create_record(&state.store, auth_user.email(), dto).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    patch,
    path = "/paymentDonations/{id}",
    params(
        ("id" = String, Path, description = "Payment record ID")
    ),
    request_body = UpdatePaymentDto,
    responses(
        (status = 200, description = "Update result", body = UpdateResult),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Invalid fields", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn update_payment_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdatePaymentDto>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = PaymentService::update_record(&state.store, &id, dto).await?;
    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/donations_refund/{id}",
    params(
        ("id" = String, Path, description = "Payment record ID")
    ),
    responses(
        (status = 200, description = "Delete result; deletedCount is 0 when nothing matched", body = DeleteResult),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn refund_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = PaymentService::refund(&state.store, &id).await?;
    Ok(Json(result))
}
