//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{health_check, post_analyze, service_status};
pub use routes::{create_router, run_server, serve};
pub use state::AppState;
