//! Auth handlers — signup, login, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use mentorhub_core::error::AppError;
use mentorhub_service::account::SignupRequest as SignupInput;

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{AccountResponse, LoginResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .account_service
        .signup(SignupInput {
            email: req.email,
            password: req.password,
            name: req.name,
            role: req.role,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully".to_string(),
        }),
    ))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let issued = state.account_service.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        token: issued.token,
    }))
}

/// GET /api/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<AccountResponse>, AppError> {
    let account = state.account_service.me(auth.context()).await?;
    Ok(Json(AccountResponse::from(&account)))
}
