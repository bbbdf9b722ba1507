//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header, validates it, and resolves the principal.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use mentorhub_core::error::AppError;
use mentorhub_service::context::RequestContext;

use crate::state::AppState;

/// Extracted authenticated principal available in handlers.
///
/// The account is re-resolved against the directory on every request: the
/// token's embedded role only identifies the subject, it is never trusted
/// for live authorization decisions. A token whose account has vanished is
/// treated the same as an invalid token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract Bearer token from Authorization header
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let claims = state.jwt_decoder.decode(token)?;

        // The directory, not the token, is authoritative for the principal.
        let account = state
            .account_repo
            .find_by_id(claims.account_id)
            .await?
            .ok_or_else(|| AppError::authentication("Account no longer exists"))?;

        Ok(AuthUser(RequestContext::new(
            account.id,
            account.email,
            account.role,
        )))
    }
}
