use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{create_stock, delete_stock, get_all_stocks, get_stock, update_stock};
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/newstock", post(create_stock))
        .route("/stock", get(get_all_stocks))
        .route("/stock/:id", get(get_stock))
        .route("/stock/:id", put(update_stock))
        .route("/deletestock/:id", delete(delete_stock))
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}
