use axum::Router;
use services::services::inventory::InventoryService;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod error;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub inventory: InventoryService,
}

impl AppState {
    pub fn new(inventory: InventoryService) -> Self {
        Self { inventory }
    }
}

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
