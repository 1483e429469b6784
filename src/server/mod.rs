//! HTTP server implementation
//!
//! This module provides the HTTP server and the health endpoint handler.

pub mod handler;
pub mod server;
pub mod state;

pub use handler::{health_endpoint, APPLICATION_HEALTH_JSON};
pub use server::{run_server, HttpServer, ServerBuilder};
pub use state::AppState;
