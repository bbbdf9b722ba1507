//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Role: "mentor" or "mentee".
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Profile update request body.
///
/// `image` and `skills` are optional; leaving them out keeps the stored
/// values untouched. The `id` and `role` fields echo the caller's account
/// and are checked against it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// Target account id; must be the caller's own.
    pub id: i64,
    /// New display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Role echo; must match the stored role.
    pub role: String,
    /// New introduction text.
    #[serde(default)]
    pub bio: String,
    /// Optional base64-encoded avatar image.
    pub image: Option<String>,
    /// Optional replacement skills list (mentors only).
    pub skills: Option<Vec<String>>,
}

/// Match request creation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequest {
    /// Target mentor's account id.
    pub mentor_id: i64,
    /// The calling mentee's account id.
    pub mentee_id: i64,
    /// Message to the mentor.
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Query parameters for the mentor listing.
#[derive(Debug, Clone, Deserialize)]
pub struct MentorListQuery {
    /// Optional exact-token skill filter.
    pub skill: Option<String>,
    /// Optional ordering key: "id", "name", or "skill".
    pub order_by: Option<String>,
}
