//! # mentorhub-auth
//!
//! Token service and credential store for MentorHub: signed, time-bounded
//! session tokens (JWT, HS256) and Argon2id password hashing with a
//! configurable cost.
//!
//! Tokens are stateless: validity is purely a function of signature and
//! expiry. There is no server-side revocation.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
