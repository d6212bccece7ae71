//! Axum-based HTTP server for TransLingua.
//!
//! Serves the single-page translation UI and a small JSON API on top of the
//! translation pipeline.
//!
//! # Components
//!
//! - `handlers`: Implementation of individual endpoints (translate, languages, health, metrics).
//! - `middleware`: Request ID tracking layers.
//! - `routes`: The main router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use handlers::{HealthResponse, HealthStatus};
pub use routes::{create_router, AppState};
