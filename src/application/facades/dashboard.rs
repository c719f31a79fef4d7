//! Dashboard API
//!
//! - GET /dashboard/stats

use std::sync::Arc;

use crate::application::client::ApiClient;
use crate::application::error::ApiError;
use crate::domain::DashboardStats;

#[derive(Clone)]
pub struct DashboardApi {
    client: Arc<ApiClient>,
}

impl DashboardApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn get_stats(&self) -> Result<DashboardStats, ApiError> {
        self.client.get("/dashboard/stats").await
    }
}
