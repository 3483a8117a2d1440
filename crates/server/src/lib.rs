//! Vectorizer Server - HTTP API for word-vector aggregation
//!
//! Exposes the [`vectorizer`] pipeline over HTTP: a request carries one or
//! more free-text queries, every retained word is looked up in a read-only
//! embedding store, and the weighted centroid of all found vectors comes
//! back as a single vector.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `POST /vectorize` - `{"query": ["..."]}` in, `{"vector": [...]}` out
//! - `GET /` - API information
//! - `GET /health` - Liveness probe (plain `OK`)
//! - `GET /ready` - Readiness probe with store details
//! - `GET /metrics` - Prometheus metrics
//!
//! Errors use `{"error": {"code": "...", "message": "..."}}`; see
//! [`ServerError`] for the status mapping.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
