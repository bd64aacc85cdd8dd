//! Public catalog view: the full product snapshot sliced into fixed-size
//! pages. Pagination is applied here over the complete list, never pushed
//! down to the store.

use axum::{
    Router,
    extract::{Query, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::product::Product;
use serde::Deserialize;
use utils::{
    pagination::{Paginated, paginate},
    response::ApiResponse,
};

use crate::{AppState, error::ApiError};

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub page: Option<usize>,
}

pub async fn get_catalog(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<ResponseJson<ApiResponse<Paginated<Product>>>, ApiError> {
    let products = state.inventory.list_products().await?;
    let page = paginate(&products, query.page.unwrap_or(1), PAGE_SIZE);
    Ok(ResponseJson(ApiResponse::success(page)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/catalog", get(get_catalog))
}
