//! Match request store: repository trait and in-memory implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::info;

use mentorhub_core::error::AppError;
use mentorhub_core::result::AppResult;
use mentorhub_entity::matching::{MatchRequest, NewMatchRequest, RequestStatus};

/// Storage abstraction for match requests.
///
/// `transition` performs the status check-and-set atomically so that two
/// concurrent decisions on the same request cannot both win. Requests are
/// never removed; terminal states stay in the store.
#[async_trait]
pub trait MatchRequestRepository: Send + Sync + 'static {
    /// Creates a request in the `Pending` state, assigning the next id.
    async fn create(&self, new: NewMatchRequest) -> AppResult<MatchRequest>;

    /// Looks up a request by id. Absence is not an error.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<MatchRequest>>;

    /// Moves a request to `to` if the transition table permits it.
    ///
    /// Fails with `NotFound` for unknown ids and `InvalidTransition` when
    /// the current status does not allow the move.
    async fn transition(&self, id: i64, to: RequestStatus) -> AppResult<MatchRequest>;

    /// All requests addressed to the given mentor, in creation order.
    async fn list_by_mentor(&self, mentor_id: i64) -> AppResult<Vec<MatchRequest>>;

    /// All requests sent by the given mentee, in creation order.
    async fn list_by_mentee(&self, mentee_id: i64) -> AppResult<Vec<MatchRequest>>;
}

/// Mutable store state behind the lock.
#[derive(Debug)]
struct Inner {
    /// All requests, in creation (id-ascending) order.
    requests: Vec<MatchRequest>,
    /// Next id to assign. Strictly increasing, never reused.
    next_id: i64,
}

/// In-memory match request store using a Tokio mutex for thread safety.
#[derive(Debug, Clone)]
pub struct MemoryMatchRequestRepository {
    /// Protected inner state.
    inner: Arc<Mutex<Inner>>,
}

impl MemoryMatchRequestRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                requests: Vec::new(),
                next_id: 1,
            })),
        }
    }
}

impl Default for MemoryMatchRequestRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MatchRequestRepository for MemoryMatchRequestRepository {
    async fn create(&self, new: NewMatchRequest) -> AppResult<MatchRequest> {
        let mut inner = self.inner.lock().await;

        let id = inner.next_id;
        inner.next_id += 1;

        let request = MatchRequest {
            id,
            mentor_id: new.mentor_id,
            mentee_id: new.mentee_id,
            message: new.message,
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        };

        inner.requests.push(request.clone());
        info!(
            request_id = id,
            mentor_id = request.mentor_id,
            mentee_id = request.mentee_id,
            "Match request created"
        );

        Ok(request)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<MatchRequest>> {
        let inner = self.inner.lock().await;
        Ok(inner.requests.iter().find(|r| r.id == id).cloned())
    }

    async fn transition(&self, id: i64, to: RequestStatus) -> AppResult<MatchRequest> {
        let mut inner = self.inner.lock().await;

        let request = inner
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found("Match request not found"))?;

        if !request.status.can_transition_to(to) {
            return Err(AppError::invalid_transition(format!(
                "Cannot move request from '{}' to '{}'",
                request.status, to
            )));
        }

        request.status = to;
        info!(request_id = id, status = %to, "Match request transitioned");

        Ok(request.clone())
    }

    async fn list_by_mentor(&self, mentor_id: i64) -> AppResult<Vec<MatchRequest>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .requests
            .iter()
            .filter(|r| r.mentor_id == mentor_id)
            .cloned()
            .collect())
    }

    async fn list_by_mentee(&self, mentee_id: i64) -> AppResult<Vec<MatchRequest>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .requests
            .iter()
            .filter(|r| r.mentee_id == mentee_id)
            .cloned()
            .collect())
    }
}
