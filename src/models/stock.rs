use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, FromRow, Serialize, ToSchema)]
pub struct Stock {
    #[sqlx(rename = "stockid")]
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub company: String,
}

/// Create/update payload. A client-supplied `id` is ignored; the database
/// assigns ids on insert and the path parameter selects rows on update.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StockRequest {
    pub name: String,
    pub price: Decimal,
    pub company: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StockResponse {
    pub id: i64,
    pub message: String,
}
