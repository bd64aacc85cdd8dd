use axum::Router;

use crate::AppState;

pub mod catalog;
pub mod dashboard;
pub mod health;
pub mod products;
pub mod upcoming_products;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(catalog::router())
        .merge(dashboard::router())
        .merge(products::router())
        .merge(upcoming_products::router())
}
