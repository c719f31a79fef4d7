//! Order Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::domain::{Order, OrderStatusUpdate};
use crate::infrastructure::http::dto::Envelope;
use crate::infrastructure::http::error::MockApiError;
use crate::infrastructure::http::state::MockState;

/// GET /api/orders
pub async fn list_orders(State(state): State<Arc<MockState>>) -> Json<Envelope<Vec<Order>>> {
    Json(Envelope::success(state.store.list_orders()))
}

/// GET /api/orders/:id
pub async fn get_order(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
) -> Result<Json<Envelope<Order>>, MockApiError> {
    let order = state
        .store
        .get_order(id)
        .ok_or_else(|| MockApiError::NotFound(format!("订单不存在: {}", id)))?;

    Ok(Json(Envelope::success(order)))
}

/// PATCH /api/orders/:id
pub async fn update_order_status(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
    Json(req): Json<OrderStatusUpdate>,
) -> Result<Json<Envelope<()>>, MockApiError> {
    state
        .store
        .update_order_status(id, req.status)
        .ok_or_else(|| MockApiError::NotFound(format!("订单不存在: {}", id)))?;

    tracing::info!(order_id = id, status = %req.status, "Order status updated");

    Ok(Json(Envelope::ok("更新成功")))
}
