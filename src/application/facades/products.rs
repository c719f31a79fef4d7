//! Product API
//!
//! - GET    /products       商品列表
//! - GET    /products/{id}  商品详情
//! - POST   /products       创建商品
//! - PATCH  /products/{id}  部分更新
//! - DELETE /products/{id}  删除商品

use std::sync::Arc;

use http::Method;

use crate::application::client::ApiClient;
use crate::application::error::ApiError;
use crate::domain::{NewProduct, Product, ProductPatch};

#[derive(Clone)]
pub struct ProductApi {
    client: Arc<ApiClient>,
}

impl ProductApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        self.client.get("/products").await
    }

    pub async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        self.client.get(&format!("/products/{}", id)).await
    }

    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        self.client.post("/products", product).await
    }

    pub async fn update_product(&self, id: i64, patch: &ProductPatch) -> Result<Product, ApiError> {
        self.client.patch(&format!("/products/{}", id), patch).await
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .send_unit(Method::DELETE, &format!("/products/{}", id), None)
            .await
    }
}
