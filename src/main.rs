use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use stocks_api::{app, db, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("stocks_api=info".parse()?))
        .init();

    let config = Config::from_env()?;
    let pool = db::create_pool(&config).await?;
    tracing::info!("connected to postgres");

    let state = AppState { pool };
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("listening on http://{}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
