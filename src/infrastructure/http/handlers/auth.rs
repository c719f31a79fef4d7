//! Auth Handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::domain::{Credentials, LoginResponse, User};
use crate::infrastructure::http::dto::Envelope;
use crate::infrastructure::http::error::MockApiError;
use crate::infrastructure::http::state::{
    mock_user, MockState, MOCK_PASSWORD, MOCK_TOKEN, MOCK_USERNAME,
};

/// POST /api/auth/login
pub async fn login(
    State(_state): State<Arc<MockState>>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<Envelope<LoginResponse>>, MockApiError> {
    if credentials.username != MOCK_USERNAME || credentials.password != MOCK_PASSWORD {
        return Err(MockApiError::InvalidCredentials);
    }

    tracing::info!(username = %credentials.username, "User logged in");

    Ok(Json(Envelope::success(LoginResponse {
        token: MOCK_TOKEN.to_string(),
        user: mock_user(),
    })))
}

/// POST /api/auth/logout
pub async fn logout() -> Json<Envelope<()>> {
    Json(Envelope::ok("退出成功"))
}

/// GET /api/auth/profile
pub async fn profile() -> Json<Envelope<User>> {
    Json(Envelope::success(mock_user()))
}
