//! Match request lifecycle engine.

pub mod service;

pub use service::MatchService;
