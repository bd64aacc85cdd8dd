//! Office-view CRUD over the available-product collection.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::product::{CreateProduct, Product, UpdateProduct};
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<Product>>>, ApiError> {
    let products = state.inventory.list_products().await?;
    Ok(ResponseJson(ApiResponse::success(products)))
}

pub async fn create_product(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateProduct>,
) -> Result<ResponseJson<ApiResponse<Product>>, ApiError> {
    let product = state.inventory.add_product(payload).await?;
    Ok(ResponseJson(ApiResponse::success(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    axum::Json(payload): axum::Json<UpdateProduct>,
) -> Result<ResponseJson<ApiResponse<Product>>, ApiError> {
    let product = state.inventory.edit_product(id, payload).await?;
    Ok(ResponseJson(ApiResponse::success(product)))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    state.inventory.remove_product(id).await?;
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/products",
        Router::new()
            .route("/", get(list_products).post(create_product))
            .route("/{id}", axum::routing::put(update_product).delete(delete_product)),
    )
}
