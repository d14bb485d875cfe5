use axum::extract::State;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Router, middleware};
use happyhomes_observability::{logging_middleware, metrics_middleware};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::modules::adoptions::init_adoptions_router;
use crate::modules::auth::init_auth_router;
use crate::modules::donations::init_donations_router;
use crate::modules::payments::init_payments_router;
use crate::modules::pets::init_pets_router;
use crate::modules::users::init_users_router;
use crate::state::AppState;

pub const LIVENESS_TEXT: &str = "Happy homes running";

async fn liveness() -> &'static str {
    LIVENESS_TEXT
}

async fn render_metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => handle.render().into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);

    if state.cors_config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    // Credentials cannot be combined with a wildcard origin.
    layer.allow_origin(allowed_origins).allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/", get(liveness))
        .route("/metrics", get(render_metrics))
        .merge(init_auth_router())
        .merge(init_users_router(state.clone()))
        .merge(init_pets_router(state.clone()))
        .merge(init_adoptions_router(state.clone()))
        .merge(init_donations_router(state.clone()))
        .merge(init_payments_router(state.clone()))
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
