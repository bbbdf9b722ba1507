//! Role-tagged profile variants.
//!
//! Mentor and mentee profiles carry different field sets, so the profile is
//! a variant keyed by role rather than a single struct with nullable
//! fields. A mentee profile has no skills field at all — absent, not empty.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// A mentor's public profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorProfile {
    /// Display name.
    pub name: String,
    /// Free-form introduction.
    pub bio: String,
    /// Reference to the externally stored avatar image.
    pub image_ref: String,
    /// Ordered list of skill tags.
    pub skills: Vec<String>,
}

/// A mentee's public profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenteeProfile {
    /// Display name.
    pub name: String,
    /// Free-form introduction.
    pub bio: String,
    /// Reference to the externally stored avatar image.
    pub image_ref: String,
}

/// Profile data for an account, shaped by its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Profile {
    /// Profile for [`Role::Mentor`] accounts.
    Mentor(MentorProfile),
    /// Profile for [`Role::Mentee`] accounts.
    Mentee(MenteeProfile),
}

impl Profile {
    /// Build the default profile assigned at registration: empty bio, empty
    /// skills for mentors, and a deterministic image reference derived from
    /// role and id.
    pub fn default_for(role: Role, id: i64, name: String) -> Self {
        let image_ref = format!("/images/{}/{id}", role.as_str());
        match role {
            Role::Mentor => Self::Mentor(MentorProfile {
                name,
                bio: String::new(),
                image_ref,
                skills: Vec::new(),
            }),
            Role::Mentee => Self::Mentee(MenteeProfile {
                name,
                bio: String::new(),
                image_ref,
            }),
        }
    }

    /// The role this profile variant belongs to.
    pub fn role(&self) -> Role {
        match self {
            Self::Mentor(_) => Role::Mentor,
            Self::Mentee(_) => Role::Mentee,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Mentor(p) => &p.name,
            Self::Mentee(p) => &p.name,
        }
    }

    /// Introduction text.
    pub fn bio(&self) -> &str {
        match self {
            Self::Mentor(p) => &p.bio,
            Self::Mentee(p) => &p.bio,
        }
    }

    /// Avatar image reference.
    pub fn image_ref(&self) -> &str {
        match self {
            Self::Mentor(p) => &p.image_ref,
            Self::Mentee(p) => &p.image_ref,
        }
    }

    /// Skills, present only on mentor profiles.
    pub fn skills(&self) -> Option<&[String]> {
        match self {
            Self::Mentor(p) => Some(&p.skills),
            Self::Mentee(_) => None,
        }
    }

    /// Replace the display name.
    pub fn set_name(&mut self, name: String) {
        match self {
            Self::Mentor(p) => p.name = name,
            Self::Mentee(p) => p.name = name,
        }
    }

    /// Replace the introduction text.
    pub fn set_bio(&mut self, bio: String) {
        match self {
            Self::Mentor(p) => p.bio = bio,
            Self::Mentee(p) => p.bio = bio,
        }
    }

    /// Replace the skills list. Has no effect on mentee profiles.
    pub fn set_skills(&mut self, skills: Vec<String>) {
        if let Self::Mentor(p) = self {
            p.skills = skills;
        }
    }
}
