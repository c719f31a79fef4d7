//! Dashboard - 仪表盘统计

use serde::{Deserialize, Serialize};

/// 仪表盘统计数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_orders: u64,
    pub pending_orders: u64,
    pub today_income: f64,
    pub total_products: u64,
}
