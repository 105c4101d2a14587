//! Data access for the `stocks` table. One statement per operation, all
//! borrowing the process-wide pool.

use sqlx::PgPool;

use crate::models::{Stock, StockRequest};

pub async fn insert_stock(pool: &PgPool, stock: &StockRequest) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO stocks (name, price, company) VALUES ($1, $2, $3) RETURNING stockid",
    )
    .bind(&stock.name)
    .bind(stock.price)
    .bind(&stock.company)
    .fetch_one(pool)
    .await
}

/// `None` when no row matches.
pub async fn get_stock(pool: &PgPool, id: i64) -> Result<Option<Stock>, sqlx::Error> {
    sqlx::query_as("SELECT stockid, name, price, company FROM stocks WHERE stockid = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Storage-defined order; callers must not rely on it.
pub async fn get_all_stocks(pool: &PgPool) -> Result<Vec<Stock>, sqlx::Error> {
    sqlx::query_as("SELECT stockid, name, price, company FROM stocks")
        .fetch_all(pool)
        .await
}

pub async fn update_stock(
    pool: &PgPool,
    id: i64,
    stock: &StockRequest,
) -> Result<u64, sqlx::Error> {
    let result =
        sqlx::query("UPDATE stocks SET name = $2, price = $3, company = $4 WHERE stockid = $1")
            .bind(id)
            .bind(&stock.name)
            .bind(stock.price)
            .bind(&stock.company)
            .execute(pool)
            .await?;

    Ok(result.rows_affected())
}

pub async fn delete_stock(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM stocks WHERE stockid = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
