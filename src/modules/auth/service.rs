use happyhomes_auth::{IdentityPayload, issue_token};
use happyhomes_config::JwtConfig;
use happyhomes_core::AppError;
use happyhomes_models::TokenResponse;
use happyhomes_observability::track_token_issued;
use tracing::instrument;

pub struct AuthService;

impl AuthService {
    /// Signs a token for `payload`. The payload is trusted as sent; only an email is required.
    #[instrument(skip(jwt_config), fields(email = %payload.email))]
    pub fn issue_token(
        payload: &IdentityPayload,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        let token = issue_token(payload, jwt_config)?;
        track_token_issued();
        Ok(TokenResponse { token })
    }
}
