//! Order API
//!
//! - GET   /orders       订单列表
//! - GET   /orders/{id}  订单详情
//! - PATCH /orders/{id}  更新状态（状态迁移由后端校验）

use std::sync::Arc;

use http::Method;

use crate::application::client::{json_body, ApiClient};
use crate::application::error::ApiError;
use crate::domain::{Order, OrderStatus, OrderStatusUpdate};

#[derive(Clone)]
pub struct OrderApi {
    client: Arc<ApiClient>,
}

impl OrderApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn get_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.client.get("/orders").await
    }

    pub async fn get_order(&self, id: i64) -> Result<Order, ApiError> {
        self.client.get(&format!("/orders/{}", id)).await
    }

    pub async fn update_order_status(&self, id: i64, status: OrderStatus) -> Result<(), ApiError> {
        let body = json_body(&OrderStatusUpdate { status })?;
        self.client
            .send_unit(Method::PATCH, &format!("/orders/{}", id), Some(body))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::client::testing::RecordingTransport;
    use crate::application::client::{ApiClientConfig, EnvelopeUnwrap};
    use serde_json::json;

    fn api(transport: Arc<RecordingTransport>) -> OrderApi {
        let client = ApiClient::new(ApiClientConfig::default(), transport)
            .with_response_interceptor(EnvelopeUnwrap);
        OrderApi::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_update_order_status_single_patch() {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond_ok(json!({ "code": 200 }));

        api(transport.clone())
            .update_order_status(5, OrderStatus::Paid)
            .await
            .unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::PATCH);
        assert_eq!(sent[0].url, "/api/orders/5");
        assert_eq!(sent[0].body, Some(json!({ "status": "paid" })));
    }

    #[tokio::test]
    async fn test_backwards_transition_not_checked_client_side() {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond_ok(json!({ "code": 400, "message": "非法状态迁移" }));

        let err = api(transport.clone())
            .update_order_status(5, OrderStatus::Pending)
            .await
            .unwrap_err();

        assert_eq!(transport.requests().len(), 1);
        assert_eq!(err.message(), "非法状态迁移");
    }

    #[tokio::test]
    async fn test_get_orders() {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond_ok(json!({
            "code": 200,
            "data": [{
                "id": 1,
                "orderNo": "n-1",
                "productId": 2,
                "productName": "点卡",
                "price": 10.0,
                "status": "pending",
                "createTime": "2024-05-01 12:00:00"
            }]
        }));

        let orders = api(transport.clone()).get_orders().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].status, OrderStatus::Pending);
        assert_eq!(transport.requests()[0].url, "/api/orders");
    }
}
