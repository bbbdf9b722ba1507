//! # mentorhub-api
//!
//! HTTP API layer for MentorHub: the axum router, shared application
//! state, the bearer-token extractor, request/response DTOs, and handlers.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
