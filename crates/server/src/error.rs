use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::services::inventory::InventoryError;
use tracing::error;
use utils::response::ApiResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Inventory(InventoryError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Inventory(InventoryError::NotFound) => {
                (StatusCode::NOT_FOUND, "Record not found".to_string())
            }
            ApiError::Inventory(InventoryError::Store(e)) => {
                error!(error = %e, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong. Please try again.".to_string(),
                )
            }
        };
        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}
