//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                 GET     健康检查
//! - /api/auth/login           POST    登录
//! - /api/auth/logout          POST    退出
//! - /api/auth/profile         GET     当前用户        (Bearer)
//! - /api/orders               GET     订单列表        (Bearer)
//! - /api/orders/:id           GET     订单详情        (Bearer)
//! - /api/orders/:id           PATCH   更新订单状态    (Bearer)
//! - /api/products             GET     商品列表        (Bearer)
//! - /api/products             POST    创建商品        (Bearer)
//! - /api/products/:id         GET     商品详情        (Bearer)
//! - /api/products/:id         PATCH   更新商品        (Bearer)
//! - /api/products/:id         DELETE  删除商品        (Bearer)
//! - /api/dashboard/stats      GET     仪表盘统计      (Bearer)

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::middleware::{error_logging_middleware, require_bearer, simulated_latency};
use super::state::MockState;

/// 构建完整的 Mock 后端 Router
pub fn build_router(state: Arc<MockState>) -> Router {
    Router::new()
        .nest("/api", api_routes(state.clone()))
        .layer(middleware::from_fn_with_state(state.clone(), simulated_latency))
        .layer(middleware::from_fn(error_logging_middleware))
        .with_state(state)
}

/// API 路由
fn api_routes(state: Arc<MockState>) -> Router<Arc<MockState>> {
    let protected = Router::new()
        .route("/auth/profile", get(handlers::profile))
        .nest("/orders", order_routes())
        .nest("/products", product_routes())
        .route("/dashboard/stats", get(handlers::dashboard_stats))
        .route_layer(middleware::from_fn_with_state(state, require_bearer));

    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/auth/login", post(handlers::login))
        .route("/auth/logout", post(handlers::logout))
        .merge(protected)
}

/// Order 路由
fn order_routes() -> Router<Arc<MockState>> {
    Router::new()
        .route("/", get(handlers::list_orders))
        .route(
            "/:id",
            get(handlers::get_order).patch(handlers::update_order_status),
        )
}

/// Product 路由
fn product_routes() -> Router<Arc<MockState>> {
    Router::new()
        .route("/", get(handlers::list_products).post(handlers::create_product))
        .route(
            "/:id",
            get(handlers::get_product)
                .patch(handlers::update_product)
                .delete(handlers::delete_product),
        )
}
