use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, Error},
    model::app::AppState,
};

/// Middleware rejecting requests without the configured admin bearer token
///
/// # Returns
/// - `Ok(Response)` - Token matched, response of the wrapped handler
/// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header (401)
/// - `Err(AuthError::InvalidToken)` - Token doesn't match, or no admin token is configured (403)
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, Error> {
    let token = bearer_token(&request).ok_or(AuthError::MissingToken)?;

    if state.settings.admin_token.is_empty() || token != state.settings.admin_token {
        return Err(AuthError::InvalidToken.into());
    }

    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
