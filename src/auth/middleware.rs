//! Session middleware
//!
//! Guards the admin routes: requests without a valid bearer token are
//! rejected with 401, which is the API-side equivalent of the old
//! redirect-to-login guard.

use crate::auth::decode_session_token;
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// Require a valid session token on the request
pub async fn require_session(
    State(state): State<SharedState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization format".to_string()))?;

    let claims = decode_session_token(token, &state.session_secret)?;

    // Make the session available to handlers that want the username
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
