//! Ping Handler
//!
//! 健康检查，不需要登录

use axum::Json;
use serde::Serialize;

use crate::infrastructure::http::dto::Envelope;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Ping endpoint - 健康检查
pub async fn ping() -> Json<Envelope<PingResponse>> {
    Json(Envelope::success(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}
