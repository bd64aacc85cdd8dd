//! Read-only announcement board: both collections in one snapshot, with
//! upcoming products sorted chronologically and carrying a display date.

use axum::{Router, extract::State, response::Json as ResponseJson, routing::get};
use db::models::{product::Product, upcoming_product::UpcomingProduct};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utils::{date::short_date, response::ApiResponse};

use crate::{AppState, error::ApiError};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpcomingEntry {
    #[serde(flatten)]
    #[ts(flatten)]
    pub product: UpcomingProduct,
    /// e.g. "Aug 20, 2025"
    pub expected_display: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct DashboardData {
    pub available: Vec<Product>,
    pub upcoming: Vec<UpcomingEntry>,
}

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<DashboardData>>, ApiError> {
    let available = state.inventory.list_products().await?;

    // The store imposes no chronological order, so sort here.
    let mut upcoming = state.inventory.list_upcoming_products().await?;
    upcoming.sort_by_key(|p| p.expected_date);

    let upcoming = upcoming
        .into_iter()
        .map(|product| UpcomingEntry {
            expected_display: short_date(product.expected_date),
            product,
        })
        .collect();

    Ok(ResponseJson(ApiResponse::success(DashboardData {
        available,
        upcoming,
    })))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}
