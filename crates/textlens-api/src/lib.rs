//! textlens-api crate
//!
//! Web server providing word and character counting as an HTTP API.
//!
//! ## Endpoints
//! - `POST /analyze` - Text Analysis
//! - `GET /health` - Health Check
//! - `GET /` - Service Status
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8000/analyze \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "I love cloud engineering!"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnalyzeRequest, AnalyzeResponse, HealthResponse, ServiceStatus};
pub use service::TextAnalyzerService;
