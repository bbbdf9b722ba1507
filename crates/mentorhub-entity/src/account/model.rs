//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profile::Profile;
use super::role::Role;

/// A registered account in the MentorHub system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique, monotonically assigned identifier.
    pub id: i64,
    /// Unique email address (case-sensitive as stored).
    pub email: String,
    /// Account role, immutable after creation.
    pub role: Role,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Role-shaped profile data.
    pub profile: Profile,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Check whether this account is a mentor.
    pub fn is_mentor(&self) -> bool {
        self.role == Role::Mentor
    }

    /// Check whether this account is a mentee.
    pub fn is_mentee(&self) -> bool {
        self.role == Role::Mentee
    }
}

/// Data required to create a new account.
///
/// The id, default profile, and creation timestamp are assigned by the
/// directory at insertion time.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Initial display name.
    pub name: String,
    /// Assigned role.
    pub role: Role,
}
