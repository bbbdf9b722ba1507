//! Match request engine — creation and lifecycle decisions.
//!
//! Role and ownership guards live here; the status transition itself is
//! checked and applied atomically inside the repository so concurrent
//! decisions cannot both win.

use std::sync::Arc;

use tracing::info;

use mentorhub_core::error::AppError;
use mentorhub_entity::matching::{MatchRequest, NewMatchRequest, RequestStatus};
use mentorhub_store::account::AccountRepository;
use mentorhub_store::match_request::MatchRequestRepository;

use crate::context::RequestContext;

/// Owns the request/accept/reject/cancel workflow.
#[derive(Clone)]
pub struct MatchService {
    /// Account directory, for referential role checks at creation.
    accounts: Arc<dyn AccountRepository>,
    /// Match request store.
    requests: Arc<dyn MatchRequestRepository>,
}

impl MatchService {
    /// Creates a new match engine.
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        requests: Arc<dyn MatchRequestRepository>,
    ) -> Self {
        Self { accounts, requests }
    }

    /// Creates a pending request from the calling mentee to a mentor.
    ///
    /// The mentee id must be the caller's own; the mentor must exist and
    /// hold the mentor role. Repeated requests to the same mentor are
    /// permitted.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        mentor_id: i64,
        mentee_id: i64,
        message: &str,
    ) -> Result<MatchRequest, AppError> {
        ctx.require_mentee()?;

        if mentee_id != ctx.account_id {
            return Err(AppError::authorization(
                "Cannot create a request on behalf of another mentee",
            ));
        }
        if message.trim().is_empty() {
            return Err(AppError::validation("Message is required"));
        }

        let mentor = self
            .accounts
            .find_by_id(mentor_id)
            .await?
            .ok_or_else(|| AppError::not_found("Mentor not found"))?;
        if !mentor.is_mentor() {
            return Err(AppError::validation("Target account is not a mentor"));
        }

        self.requests
            .create(NewMatchRequest {
                mentor_id,
                mentee_id,
                message: message.to_string(),
            })
            .await
    }

    /// Accepts a pending request. Mentor-only, owner-only.
    pub async fn accept(&self, ctx: &RequestContext, request_id: i64) -> Result<MatchRequest, AppError> {
        self.decide(ctx, request_id, RequestStatus::Accepted).await
    }

    /// Rejects a pending request. Mentor-only, owner-only.
    pub async fn reject(&self, ctx: &RequestContext, request_id: i64) -> Result<MatchRequest, AppError> {
        self.decide(ctx, request_id, RequestStatus::Rejected).await
    }

    /// Shared guard path for mentor decisions.
    async fn decide(
        &self,
        ctx: &RequestContext,
        request_id: i64,
        to: RequestStatus,
    ) -> Result<MatchRequest, AppError> {
        ctx.require_mentor()?;

        let request = self
            .requests
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::not_found("Match request not found"))?;
        if request.mentor_id != ctx.account_id {
            return Err(AppError::authorization(
                "Request is addressed to another mentor",
            ));
        }

        let updated = self.requests.transition(request_id, to).await?;
        info!(request_id, status = %updated.status, "Match request decided");

        Ok(updated)
    }

    /// Cancels the caller's own request. Mentee-only.
    ///
    /// Accepted requests cannot be cancelled; cancelling an already
    /// rejected or cancelled request succeeds idempotently.
    pub async fn cancel(&self, ctx: &RequestContext, request_id: i64) -> Result<MatchRequest, AppError> {
        ctx.require_mentee()?;

        let request = self
            .requests
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::not_found("Match request not found"))?;
        if request.mentee_id != ctx.account_id {
            return Err(AppError::authorization("Request belongs to another mentee"));
        }

        let updated = self
            .requests
            .transition(request_id, RequestStatus::Cancelled)
            .await?;
        info!(request_id, "Match request cancelled");

        Ok(updated)
    }

    /// Requests addressed to the calling mentor, in creation order.
    pub async fn incoming(&self, ctx: &RequestContext) -> Result<Vec<MatchRequest>, AppError> {
        ctx.require_mentor()?;
        self.requests.list_by_mentor(ctx.account_id).await
    }

    /// Requests sent by the calling mentee, in creation order.
    ///
    /// Callers expose these as summaries without the message field.
    pub async fn outgoing(&self, ctx: &RequestContext) -> Result<Vec<MatchRequest>, AppError> {
        ctx.require_mentee()?;
        self.requests.list_by_mentee(ctx.account_id).await
    }
}
