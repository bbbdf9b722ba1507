//! Account registration, login, and profile management.

pub mod service;

pub use service::{AccountService, SignupRequest, UpdateProfileRequest};
