//! Profile update handler.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use mentorhub_core::error::AppError;
use mentorhub_service::account::UpdateProfileRequest as UpdateProfileInput;

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::AccountResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// PUT /api/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let updated = state
        .account_service
        .update_profile(
            auth.context(),
            UpdateProfileInput {
                id: req.id,
                name: req.name,
                role: req.role,
                bio: req.bio,
                image: req.image,
                skills: req.skills,
            },
        )
        .await?;

    Ok(Json(AccountResponse::from(&updated)))
}
