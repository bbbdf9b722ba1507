//! # mentorhub-store
//!
//! Repository traits and their in-memory implementations.
//!
//! The directories are memory-resident and reset on restart; durability is
//! an explicit non-goal. Each repository serializes its mutations through a
//! single mutex so that id assignment, uniqueness checks, and state-machine
//! check-and-set are indivisible under concurrent calls.

pub mod account;
pub mod match_request;

pub use account::{AccountRepository, MemoryAccountRepository};
pub use match_request::{MatchRequestRepository, MemoryMatchRequestRepository};
