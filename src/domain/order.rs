//! Order - 订单
//!
//! 订单生命周期由后端负责。状态隐含 pending → paid → delivered → completed
//! 的单向推进，但客户端与 Mock 后端都不做迁移校验。

use serde::{Deserialize, Serialize};

/// 订单状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Delivered,
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Delivered,
        OrderStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Delivered => "delivered",
            Self::Completed => "completed",
        }
    }

    /// 是否已付款（paid 及之后的状态）
    pub fn is_paid(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 发货方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    Auto,
    Manual,
}

/// 订单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    /// 不透明的唯一订单号
    pub order_no: String,
    pub product_id: i64,
    /// 下单时的商品名快照
    pub product_name: String,
    pub price: f64,
    pub status: OrderStatus,
    pub create_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<DeliveryMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_content: Option<String>,
}

/// 订单状态更新请求体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_wire_format() {
        let json = r#"{
            "id": 7,
            "orderNo": "a1b2",
            "productId": 3,
            "productName": "会员月卡",
            "price": 29.9,
            "status": "delivered",
            "createTime": "2024-01-01 10:00:00",
            "deliveryMethod": "auto"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_no, "a1b2");
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(order.delivery_method, Some(DeliveryMethod::Auto));
        assert!(order.pay_time.is_none());
    }

    #[test]
    fn test_status_update_body() {
        let body = serde_json::to_value(OrderStatusUpdate {
            status: OrderStatus::Paid,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "status": "paid" }));
    }

    #[test]
    fn test_is_paid() {
        assert!(!OrderStatus::Pending.is_paid());
        assert!(OrderStatus::Completed.is_paid());
    }
}
