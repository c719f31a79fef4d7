//! Dashboard Handler

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::domain::DashboardStats;
use crate::infrastructure::http::dto::Envelope;
use crate::infrastructure::http::state::MockState;

/// GET /api/dashboard/stats
pub async fn dashboard_stats(State(state): State<Arc<MockState>>) -> Json<Envelope<DashboardStats>> {
    Json(Envelope::success(state.store.stats()))
}
