use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Answer to `POST /jwt`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}
