pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::AppError;
pub use router::app;
pub use state::AppState;
