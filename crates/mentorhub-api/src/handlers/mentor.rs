//! Mentor discovery handler.

use axum::Json;
use axum::extract::{Query, State};

use mentorhub_core::error::AppError;
use mentorhub_service::mentor::MentorOrder;

use crate::dto::request::MentorListQuery;
use crate::dto::response::AccountResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/mentors?skill=&order_by=
pub async fn list_mentors(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<MentorListQuery>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let order = match query.order_by.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => raw.parse::<MentorOrder>()?,
        None => MentorOrder::default(),
    };

    let mentors = state
        .mentor_service
        .list_mentors(auth.context(), query.skill.as_deref(), order)
        .await?;

    Ok(Json(mentors.iter().map(AccountResponse::from).collect()))
}
