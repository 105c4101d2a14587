use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

/// Built once at startup; `connect` also serves as the boot-time
/// reachability check.
pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .idle_timeout(Duration::from_secs(600))
        .connect(&config.database_url)
        .await
}
