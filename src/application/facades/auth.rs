//! Auth API
//!
//! - POST /auth/login    登录
//! - POST /auth/logout   退出
//! - GET  /auth/profile  当前用户

use std::sync::Arc;

use http::Method;

use crate::application::client::ApiClient;
use crate::application::error::ApiError;
use crate::domain::{Credentials, LoginResponse, User};

#[derive(Clone)]
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.client
            .post("/auth/login", &Credentials::new(username, password))
            .await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.send_unit(Method::POST, "/auth/logout", None).await
    }

    pub async fn get_profile(&self) -> Result<User, ApiError> {
        self.client.get("/auth/profile").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::client::testing::RecordingTransport;
    use crate::application::client::{ApiClientConfig, EnvelopeUnwrap};
    use serde_json::json;

    fn api(transport: Arc<RecordingTransport>) -> AuthApi {
        let client = ApiClient::new(ApiClientConfig::default(), transport)
            .with_response_interceptor(EnvelopeUnwrap);
        AuthApi::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_login_request_shape() {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond_ok(json!({
            "code": 200,
            "data": {
                "token": "t",
                "user": { "id": 1, "username": "admin", "role": "admin" }
            }
        }));

        let resp = api(transport.clone()).login("admin", "123456").await.unwrap();
        assert_eq!(resp.token, "t");
        assert_eq!(resp.user.username, "admin");

        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::POST);
        assert_eq!(sent[0].url, "/api/auth/login");
        assert_eq!(
            sent[0].body,
            Some(json!({ "username": "admin", "password": "123456" }))
        );
    }

    #[tokio::test]
    async fn test_logout_has_no_body() {
        let transport = Arc::new(RecordingTransport::new());
        api(transport.clone()).logout().await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::POST);
        assert_eq!(sent[0].url, "/api/auth/logout");
        assert!(sent[0].body.is_none());
    }
}
