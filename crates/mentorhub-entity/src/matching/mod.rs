//! Match request entity: model and lifecycle status.

pub mod model;
pub mod status;

pub use model::{MatchRequest, NewMatchRequest};
pub use status::RequestStatus;
