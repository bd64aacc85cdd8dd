//! Office-view CRUD over the upcoming-product collection.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::upcoming_product::{CreateUpcomingProduct, UpcomingProduct, UpdateUpcomingProduct};
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

pub async fn list_upcoming_products(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<UpcomingProduct>>>, ApiError> {
    let products = state.inventory.list_upcoming_products().await?;
    Ok(ResponseJson(ApiResponse::success(products)))
}

pub async fn create_upcoming_product(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateUpcomingProduct>,
) -> Result<ResponseJson<ApiResponse<UpcomingProduct>>, ApiError> {
    let product = state.inventory.add_upcoming_product(payload).await?;
    Ok(ResponseJson(ApiResponse::success(product)))
}

pub async fn update_upcoming_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    axum::Json(payload): axum::Json<UpdateUpcomingProduct>,
) -> Result<ResponseJson<ApiResponse<UpcomingProduct>>, ApiError> {
    let product = state.inventory.edit_upcoming_product(id, payload).await?;
    Ok(ResponseJson(ApiResponse::success(product)))
}

pub async fn delete_upcoming_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    state.inventory.remove_upcoming_product(id).await?;
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/upcoming-products",
        Router::new()
            .route("/", get(list_upcoming_products).post(create_upcoming_product))
            .route(
                "/{id}",
                axum::routing::put(update_upcoming_product).delete(delete_upcoming_product),
            ),
    )
}
