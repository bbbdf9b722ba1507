//! Match request lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a match request.
///
/// `Pending` is the only initial state. All other states are terminal, and
/// no transition ever returns a request to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Waiting for the mentor's decision.
    Pending,
    /// Accepted by the mentor.
    Accepted,
    /// Rejected by the mentor.
    Rejected,
    /// Cancelled by the mentee.
    Cancelled,
}

impl RequestStatus {
    /// Whether this status permits no further transitions out of it
    /// (other than the idempotent re-cancel).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// The one-directional transition table.
    ///
    /// Accept and reject require `Pending`. Cancel is permitted from
    /// `Pending` and from the terminal `Rejected`/`Cancelled` states
    /// (re-cancelling is idempotent), but never from `Accepted`.
    pub fn can_transition_to(&self, to: RequestStatus) -> bool {
        matches!(
            (self, to),
            (Self::Pending, Self::Accepted)
                | (Self::Pending, Self::Rejected)
                | (Self::Pending, Self::Cancelled)
                | (Self::Rejected, Self::Cancelled)
                | (Self::Cancelled, Self::Cancelled)
        )
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = mentorhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(mentorhub_core::AppError::validation(format!(
                "Invalid request status: '{s}'"
            ))),
        }
    }
}
