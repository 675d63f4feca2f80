mod app_state;
mod config;
pub mod models;
pub mod routes;
pub mod store;

pub use app_state::AppState;
pub use config::Config;
pub use routes::make_app;
