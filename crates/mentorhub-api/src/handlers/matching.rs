//! Match request handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use mentorhub_core::error::AppError;

use crate::dto::request::CreateMatchRequest;
use crate::dto::response::{MatchRequestResponse, MatchRequestSummaryResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/match-requests
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateMatchRequest>,
) -> Result<Json<MatchRequestResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let request = state
        .match_service
        .create(auth.context(), req.mentor_id, req.mentee_id, &req.message)
        .await?;

    Ok(Json(MatchRequestResponse::from(&request)))
}

/// GET /api/match-requests/incoming
pub async fn incoming(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<MatchRequestResponse>>, AppError> {
    let requests = state.match_service.incoming(auth.context()).await?;
    Ok(Json(requests.iter().map(MatchRequestResponse::from).collect()))
}

/// GET /api/match-requests/outgoing
///
/// Directory-level summary only: the message field is not exposed.
pub async fn outgoing(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<MatchRequestSummaryResponse>>, AppError> {
    let requests = state.match_service.outgoing(auth.context()).await?;
    Ok(Json(
        requests
            .iter()
            .map(MatchRequestSummaryResponse::from)
            .collect(),
    ))
}

/// PUT /api/match-requests/{id}/accept
pub async fn accept(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MatchRequestResponse>, AppError> {
    let request = state.match_service.accept(auth.context(), id).await?;
    Ok(Json(MatchRequestResponse::from(&request)))
}

/// PUT /api/match-requests/{id}/reject
pub async fn reject(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MatchRequestResponse>, AppError> {
    let request = state.match_service.reject(auth.context(), id).await?;
    Ok(Json(MatchRequestResponse::from(&request)))
}

/// DELETE /api/match-requests/{id}
pub async fn cancel(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MatchRequestResponse>, AppError> {
    let request = state.match_service.cancel(auth.context(), id).await?;
    Ok(Json(MatchRequestResponse::from(&request)))
}
