//! Request context carrying the authenticated principal.

use serde::{Deserialize, Serialize};

use mentorhub_core::error::AppError;
use mentorhub_entity::account::Role;

/// Context for the current authenticated request.
///
/// Built by the authorization gate after the token has been validated and
/// the account re-resolved against the directory — the role here comes from
/// the directory, never from the token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated account's id.
    pub account_id: i64,
    /// The account's email.
    pub email: String,
    /// The account's current role per the directory.
    pub role: Role,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(account_id: i64, email: String, role: Role) -> Self {
        Self {
            account_id,
            email,
            role,
        }
    }

    /// Requires the caller to be a mentor.
    pub fn require_mentor(&self) -> Result<(), AppError> {
        if self.role != Role::Mentor {
            return Err(AppError::authorization("Mentor role required"));
        }
        Ok(())
    }

    /// Requires the caller to be a mentee.
    pub fn require_mentee(&self) -> Result<(), AppError> {
        if self.role != Role::Mentee {
            return Err(AppError::authorization("Mentee role required"));
        }
        Ok(())
    }
}
