//! Mentor directory query — filtering and ordering for discovery.

use std::str::FromStr;
use std::sync::Arc;

use mentorhub_core::error::AppError;
use mentorhub_entity::account::{Account, Role};
use mentorhub_store::account::AccountRepository;

use crate::context::RequestContext;

/// Ordering key for the mentor listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MentorOrder {
    /// Ascending account id (the directory's natural order).
    #[default]
    Id,
    /// Case-insensitive ascending profile name.
    Name,
    /// Case-insensitive ascending first skill; empty skills sort last.
    Skill,
}

impl FromStr for MentorOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "skill" => Ok(Self::Skill),
            _ => Err(AppError::validation(format!(
                "Invalid order_by: '{s}'. Expected one of: id, name, skill"
            ))),
        }
    }
}

/// Read-only queries over the mentor side of the directory.
#[derive(Clone)]
pub struct MentorService {
    /// Account directory.
    accounts: Arc<dyn AccountRepository>,
}

impl MentorService {
    /// Creates a new mentor query service.
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    /// Lists mentors for discovery. Mentee-only.
    ///
    /// The skill filter is a case-insensitive exact token match against the
    /// mentor's skills list, not a substring search. All sorts are stable,
    /// so ties keep the directory's id-ascending order.
    pub async fn list_mentors(
        &self,
        ctx: &RequestContext,
        skill_filter: Option<&str>,
        order: MentorOrder,
    ) -> Result<Vec<Account>, AppError> {
        ctx.require_mentee()?;

        let mut mentors = self.accounts.list_by_role(Role::Mentor).await?;

        if let Some(filter) = skill_filter.filter(|f| !f.is_empty()) {
            let needle = filter.to_lowercase();
            mentors.retain(|account| {
                account
                    .profile
                    .skills()
                    .is_some_and(|skills| skills.iter().any(|s| s.to_lowercase() == needle))
            });
        }

        match order {
            MentorOrder::Id => mentors.sort_by_key(|a| a.id),
            MentorOrder::Name => mentors.sort_by_key(|a| a.profile.name().to_lowercase()),
            MentorOrder::Skill => mentors.sort_by_key(|a| {
                let first = a
                    .profile
                    .skills()
                    .and_then(|skills| skills.first())
                    .map(|s| s.to_lowercase());
                // `None` must sort after every real skill.
                (first.is_none(), first)
            }),
        }

        Ok(mentors)
    }
}
