//! Mentor discovery.

pub mod service;

pub use service::{MentorOrder, MentorService};
