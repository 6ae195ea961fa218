//! # cantina-api
//!
//! HTTP layer for Cantina. Assembles two independently configured request
//! pipelines over one endpoint space: the stateless `/api` pipeline
//! (bearer tokens, JSON rejections) and the browser pipeline (session
//! cookie, redirects). Each pipeline installs its own authentication
//! resolver and authorization rule table.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
