//! Web layer for the transit router.
//!
//! Provides HTTP endpoints for bus statistics, stop listings and route
//! queries over an already loaded network.

mod config;
mod dto;
mod routes;
mod state;

pub use config::{DOCUMENT_VAR, InvalidEnv, LISTEN_VAR, ServerConfig};
pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
