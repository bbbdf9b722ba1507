//! Match request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::RequestStatus;

/// A mentee's request to be matched with a mentor.
///
/// Requests are never physically deleted; cancel and reject are terminal
/// states, not removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    /// Unique, monotonically assigned identifier.
    pub id: i64,
    /// The targeted mentor's account id.
    pub mentor_id: i64,
    /// The requesting mentee's account id.
    pub mentee_id: i64,
    /// Message from the mentee to the mentor.
    pub message: String,
    /// Current lifecycle status.
    pub status: RequestStatus,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new match request.
///
/// The id, initial `Pending` status, and creation timestamp are assigned by
/// the repository at insertion time. Referential role checks happen in the
/// match engine before this is handed to the repository.
#[derive(Debug, Clone)]
pub struct NewMatchRequest {
    /// The targeted mentor's account id.
    pub mentor_id: i64,
    /// The requesting mentee's account id.
    pub mentee_id: i64,
    /// Message from the mentee.
    pub message: String,
}
