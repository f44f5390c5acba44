//! Session gate route handlers
//!
//! Login checks the single configured credential pair and hands out a
//! session token. The session endpoint lets the back-office check whether a
//! stored token is still good before rendering gated views.

use crate::auth::{create_session_token, decode_session_token, verify_password, SESSION_TTL_HOURS};
use crate::error::AppError;
use crate::state::SharedState;
use axum::{extract::State, Json};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub success: bool,
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// POST /api/auth/login
///
/// Authenticate with the fixed admin credential pair, receive a session token.
pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let username_ok = req.username == state.admin_username;
    let password_ok = verify_password(&req.password, &state.admin_password_hash)?;

    if !username_ok || !password_ok {
        warn!(username = %req.username, "Rejected login attempt");
        return Err(AppError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }

    let token = create_session_token(&state.admin_username, &state.session_secret)?;

    Ok(Json(LoginResponse {
        success: true,
        token,
        token_type: "Bearer".to_string(),
        expires_in: SESSION_TTL_HOURS * 3600,
    }))
}

/// GET /api/auth/session
///
/// Report whether the presented token is a valid session. Missing or invalid
/// tokens are not an error here; the caller just isn't authenticated.
pub async fn session(
    State(state): State<SharedState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
) -> Json<SessionResponse> {
    let claims = bearer
        .and_then(|TypedHeader(auth)| decode_session_token(auth.token(), &state.session_secret).ok());

    match claims {
        Some(claims) => Json(SessionResponse {
            success: true,
            authenticated: true,
            username: Some(claims.sub),
        }),
        None => Json(SessionResponse {
            success: true,
            authenticated: false,
            username: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, StorageBackend};
    use crate::state::AppState;
    use crate::storage::{Datastore, MemoryStore};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn test_state() -> SharedState {
        let settings = Settings {
            server: Default::default(),
            storage_backend: StorageBackend::Memory,
            database: None,
            cors: Default::default(),
            admin: Default::default(),
            rates: Default::default(),
            session_secret: "test-secret".to_string(),
        };
        Arc::new(AppState::new(Datastore::Memory(MemoryStore::new()), &settings).unwrap())
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let state = test_state();
        let result = login(
            State(state),
            Json(LoginRequest {
                username: "admin".to_string(),
                password: "not-the-password".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_username_with_correct_password() {
        let state = test_state();
        let result = login(
            State(state),
            Json(LoginRequest {
                username: "root".to_string(),
                password: "forestcamp2025".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_login_accepts_fixed_pair_and_issues_session() {
        let state = test_state();
        let response = login(
            State(state.clone()),
            Json(LoginRequest {
                username: "admin".to_string(),
                password: "forestcamp2025".to_string(),
            }),
        )
        .await
        .unwrap();

        assert!(response.success);
        let claims = decode_session_token(&response.token, &state.session_secret).unwrap();
        assert_eq!(claims.sub, "admin");
    }
}
