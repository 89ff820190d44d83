pub mod config;
pub mod data;
pub mod error;
pub mod gateway;
pub mod http;
pub mod logging;
pub mod models;
pub mod state;
pub mod utils;

pub use http::build_router;
pub use state::AppState;
