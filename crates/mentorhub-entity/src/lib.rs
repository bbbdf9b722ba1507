//! # mentorhub-entity
//!
//! Domain entity models and enums for MentorHub: accounts with role-tagged
//! profiles, and match requests with their lifecycle status.

pub mod account;
pub mod matching;
