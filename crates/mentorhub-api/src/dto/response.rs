//! Response DTOs.
//!
//! Field names follow the original wire format consumed by the frontend:
//! camelCase for the compound names (`imageUrl`, `mentorId`, `menteeId`).

use serde::{Deserialize, Serialize};

use mentorhub_entity::account::Account;
use mentorhub_entity::matching::MatchRequest;

/// Profile payload within an account response.
///
/// `skills` is present only for mentors — absent, not empty, for mentees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Display name.
    pub name: String,
    /// Introduction text.
    pub bio: String,
    /// Avatar image reference.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Skill tags (mentors only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

/// Account payload returned by `/me`, `/profile`, and `/mentors`.
///
/// Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    /// Account id.
    pub id: i64,
    /// Email address.
    pub email: String,
    /// Role string.
    pub role: String,
    /// Role-shaped profile.
    pub profile: ProfileResponse,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            role: account.role.to_string(),
            profile: ProfileResponse {
                name: account.profile.name().to_string(),
                bio: account.profile.bio().to_string(),
                image_url: account.profile.image_ref().to_string(),
                skills: account.profile.skills().map(<[String]>::to_vec),
            },
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The signed bearer token.
    pub token: String,
}

/// Full match request payload (incoming listings and mutations).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequestResponse {
    /// Request id.
    pub id: i64,
    /// Target mentor's account id.
    pub mentor_id: i64,
    /// Requesting mentee's account id.
    pub mentee_id: i64,
    /// Message from the mentee.
    pub message: String,
    /// Lifecycle status.
    pub status: String,
}

impl From<&MatchRequest> for MatchRequestResponse {
    fn from(request: &MatchRequest) -> Self {
        Self {
            id: request.id,
            mentor_id: request.mentor_id,
            mentee_id: request.mentee_id,
            message: request.message.clone(),
            status: request.status.to_string(),
        }
    }
}

/// Match request summary for outgoing listings — no message field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequestSummaryResponse {
    /// Request id.
    pub id: i64,
    /// Target mentor's account id.
    pub mentor_id: i64,
    /// Requesting mentee's account id.
    pub mentee_id: i64,
    /// Lifecycle status.
    pub status: String,
}

impl From<&MatchRequest> for MatchRequestSummaryResponse {
    fn from(request: &MatchRequest) -> Self {
        Self {
            id: request.id,
            mentor_id: request.mentor_id,
            mentee_id: request.mentee_id,
            status: request.status.to_string(),
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Server version.
    pub version: String,
}
