//! Product Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::domain::{NewProduct, Product, ProductPatch};
use crate::infrastructure::http::dto::Envelope;
use crate::infrastructure::http::error::MockApiError;
use crate::infrastructure::http::state::MockState;

fn not_found(id: i64) -> MockApiError {
    MockApiError::NotFound(format!("商品不存在: {}", id))
}

/// GET /api/products
pub async fn list_products(State(state): State<Arc<MockState>>) -> Json<Envelope<Vec<Product>>> {
    Json(Envelope::success(state.store.list_products()))
}

/// GET /api/products/:id
pub async fn get_product(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
) -> Result<Json<Envelope<Product>>, MockApiError> {
    let product = state.store.get_product(id).ok_or_else(|| not_found(id))?;
    Ok(Json(Envelope::success(product)))
}

/// POST /api/products
pub async fn create_product(
    State(state): State<Arc<MockState>>,
    Json(req): Json<NewProduct>,
) -> Result<Json<Envelope<Product>>, MockApiError> {
    if req.name.trim().is_empty() {
        return Err(MockApiError::BadRequest("商品名称不能为空".to_string()));
    }
    if req.price < 0.0 || req.stock < 0 {
        return Err(MockApiError::BadRequest("价格和库存不能为负数".to_string()));
    }

    let product = state.store.create_product(req);
    tracing::info!(product_id = product.id, name = %product.name, "Product created");

    Ok(Json(Envelope::success(product)))
}

/// PATCH /api/products/:id
pub async fn update_product(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Envelope<Product>>, MockApiError> {
    if patch.price.is_some_and(|p| p < 0.0) || patch.stock.is_some_and(|s| s < 0) {
        return Err(MockApiError::BadRequest("价格和库存不能为负数".to_string()));
    }

    let product = state
        .store
        .update_product(id, patch)
        .ok_or_else(|| not_found(id))?;

    Ok(Json(Envelope::success(product)))
}

/// DELETE /api/products/:id
pub async fn delete_product(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
) -> Result<Json<Envelope<()>>, MockApiError> {
    if !state.store.delete_product(id) {
        return Err(not_found(id));
    }

    tracing::info!(product_id = id, "Product deleted");

    Ok(Json(Envelope::ok("删除成功")))
}
