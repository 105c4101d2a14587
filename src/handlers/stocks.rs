use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppError,
    models::{Stock, StockRequest, StockResponse},
    state::AppState,
    store,
};

pub async fn create_stock(
    State(state): State<AppState>,
    Json(req): Json<StockRequest>,
) -> Result<Json<StockResponse>, AppError> {
    let id = store::insert_stock(&state.pool, &req).await?;
    tracing::info!(id, "inserted stock");

    Ok(Json(StockResponse {
        id,
        message: "stock created successfully".into(),
    }))
}

pub async fn get_stock(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Stock>, AppError> {
    let stock = store::get_stock(&state.pool, id)
        .await?
        .ok_or(AppError::StockNotFound)?;

    Ok(Json(stock))
}

pub async fn get_all_stocks(State(state): State<AppState>) -> Result<Json<Vec<Stock>>, AppError> {
    let stocks = store::get_all_stocks(&state.pool).await?;

    Ok(Json(stocks))
}

pub async fn update_stock(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<StockRequest>,
) -> Result<Json<StockResponse>, AppError> {
    let updated = store::update_stock(&state.pool, id, &req).await?;
    tracing::info!(id, rows = updated, "updated stock");

    Ok(Json(StockResponse {
        id,
        message: format!("stock updated successfully, total rows affected: {}", updated),
    }))
}

pub async fn delete_stock(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StockResponse>, AppError> {
    let deleted = store::delete_stock(&state.pool, id).await?;
    tracing::info!(id, rows = deleted, "deleted stock");

    Ok(Json(StockResponse {
        id,
        message: format!("stock deleted successfully, total rows affected: {}", deleted),
    }))
}
