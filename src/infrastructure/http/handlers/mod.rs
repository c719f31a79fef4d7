//! HTTP Handlers
//!
//! 每个业务域一个文件，返回统一信封

mod auth;
mod dashboard;
mod orders;
mod ping;
mod products;

pub use auth::*;
pub use dashboard::*;
pub use orders::*;
pub use ping::*;
pub use products::*;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::Router;
    use http::header::{AUTHORIZATION, CONTENT_TYPE};
    use http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::infrastructure::http::{build_router, MockApiConfig, MockState};
    use crate::infrastructure::memory::{MockDataStore, MockSeed};

    fn app() -> (Router, Arc<MockDataStore>) {
        let store = Arc::new(MockDataStore::seeded(MockSeed {
            orders: 12,
            products: 15,
        }));
        let state = Arc::new(MockState::new(MockApiConfig::instant(), store.clone()));
        (build_router(state), store)
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(AUTHORIZATION, "Bearer mock-token");
        let body = match body {
            Some(v) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&v).unwrap())
            }
            None => Body::empty(),
        };
        let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_login_envelopes() {
        let (app, _) = app();

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/auth/login",
            Some(json!({ "username": "admin", "password": "123456" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], 200);
        assert_eq!(body["data"]["token"], "mock-token");
        assert_eq!(body["data"]["user"]["role"], "admin");

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/auth/login",
            Some(json!({ "username": "admin", "password": "wrong" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "code": 401, "message": "用户名或密码错误" }));
    }

    #[tokio::test]
    async fn test_logout_message() {
        let (app, _) = app();
        let (_, body) = call(&app, Method::POST, "/api/auth/logout", None).await;
        assert_eq!(body, json!({ "code": 200, "message": "退出成功" }));
    }

    #[tokio::test]
    async fn test_order_not_found_is_business_error() {
        let (app, _) = app();
        let (status, body) = call(&app, Method::GET, "/api/orders/99999", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], 404);
    }

    #[tokio::test]
    async fn test_update_order_status() {
        let (app, store) = app();
        let (_, body) = call(
            &app,
            Method::PATCH,
            "/api/orders/1",
            Some(json!({ "status": "delivered" })),
        )
        .await;
        assert_eq!(body["code"], 200);
        assert_eq!(
            store.get_order(1).unwrap().status,
            crate::domain::OrderStatus::Delivered
        );
    }

    #[tokio::test]
    async fn test_product_lifecycle() {
        let (app, store) = app();

        let (_, body) = call(
            &app,
            Method::POST,
            "/api/products",
            Some(json!({
                "name": "会员月卡",
                "description": "30 天会员",
                "price": 30.0,
                "stock": 100,
                "type": "virtual",
                "status": "active"
            })),
        )
        .await;
        let id = body["data"]["id"].as_i64().unwrap();
        assert!((1000..=9999).contains(&id));

        let uri = format!("/api/products/{}", id);
        let (_, body) = call(&app, Method::PATCH, &uri, Some(json!({ "stock": 5 }))).await;
        assert_eq!(body["data"]["stock"], 5);
        assert_eq!(body["data"]["name"], "会员月卡");

        let (_, body) = call(&app, Method::DELETE, &uri, None).await;
        assert_eq!(body, json!({ "code": 200, "message": "删除成功" }));
        assert!(store.get_product(id).is_none());

        let (_, body) = call(&app, Method::DELETE, &uri, None).await;
        assert_eq!(body["code"], 404);
    }

    #[tokio::test]
    async fn test_negative_stock_rejected() {
        let (app, _) = app();
        let (_, body) = call(&app, Method::PATCH, "/api/products/1", Some(json!({ "stock": -1 }))).await;
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn test_dashboard_stats_match_store() {
        let (app, store) = app();
        let (_, body) = call(&app, Method::GET, "/api/dashboard/stats", None).await;
        assert_eq!(body["data"]["totalOrders"], 12);
        assert_eq!(body["data"]["totalProducts"], 15);
        assert_eq!(
            body["data"]["pendingOrders"].as_u64().unwrap() as usize,
            store
                .list_orders()
                .iter()
                .filter(|o| o.status == crate::domain::OrderStatus::Pending)
                .count()
        );
    }
}
