//! Avatar image handler.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;

use mentorhub_core::error::AppError;
use mentorhub_entity::account::Role;

use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/images/{role}/{id}
///
/// Returns the stored avatar, lazily generating the deterministic
/// placeholder on first access. Requires authentication like every other
/// protected route; the frontend fetches these with the bearer header.
pub async fn get_image(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((role, id)): Path<(String, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let role: Role = role.parse()?;

    let bytes = state.avatar_service.fetch(role, id).await?;

    Ok(([(header::CONTENT_TYPE, "image/png")], bytes))
}
