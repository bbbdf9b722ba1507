//! Account role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two sides of the matchmaking system.
///
/// A role is fixed at registration and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Offers mentoring; owns a skills list and receives match requests.
    Mentor,
    /// Looks for mentoring; browses mentors and sends match requests.
    Mentee,
}

impl Role {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mentor => "mentor",
            Self::Mentee => "mentee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = mentorhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mentor" => Ok(Self::Mentor),
            "mentee" => Ok(Self::Mentee),
            _ => Err(mentorhub_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: mentor, mentee"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("mentor".parse::<Role>().unwrap(), Role::Mentor);
        assert_eq!("mentee".parse::<Role>().unwrap(), Role::Mentee);
        assert!("admin".parse::<Role>().is_err());
        assert!("Mentor".parse::<Role>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Role::Mentor.to_string(), "mentor");
        assert_eq!(Role::Mentee.to_string(), "mentee");
    }
}
