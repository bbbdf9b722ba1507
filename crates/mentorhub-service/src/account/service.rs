//! Account self-service operations — signup, login, profile management.

use std::sync::Arc;

use tracing::info;

use mentorhub_auth::jwt::encoder::{IssuedToken, JwtEncoder};
use mentorhub_auth::password::PasswordHasher;
use mentorhub_core::error::AppError;
use mentorhub_entity::account::{Account, NewAccount, Role};
use mentorhub_store::account::AccountRepository;

use crate::avatar::AvatarService;
use crate::context::RequestContext;

/// Handles registration, login, and profile updates.
#[derive(Clone)]
pub struct AccountService {
    /// Account directory.
    accounts: Arc<dyn AccountRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
    /// Avatar store for profile image uploads.
    avatars: Arc<AvatarService>,
}

/// Data for creating a new account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SignupRequest {
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Display name.
    pub name: String,
    /// Role string: "mentor" or "mentee".
    pub role: String,
}

/// Data for updating the caller's own profile.
///
/// `skills` and `image` are optional: absence means "leave unchanged",
/// never "clear".
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateProfileRequest {
    /// The account id being updated; must match the caller.
    pub id: i64,
    /// New display name.
    pub name: String,
    /// Role echo from the client; must match the stored role.
    pub role: String,
    /// New introduction text.
    pub bio: String,
    /// Optional base64-encoded avatar image.
    pub image: Option<String>,
    /// Optional replacement skills list (mentors only).
    pub skills: Option<Vec<String>>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        avatars: Arc<AvatarService>,
    ) -> Self {
        Self {
            accounts,
            hasher,
            encoder,
            avatars,
        }
    }

    /// Registers a new account.
    ///
    /// The repository performs the duplicate-email check atomically with id
    /// assignment; hashing happens up front so the directory lock is never
    /// held across it.
    pub async fn signup(&self, req: SignupRequest) -> Result<Account, AppError> {
        let role: Role = req.role.parse()?;

        if req.email.trim().is_empty() || !req.email.contains('@') {
            return Err(AppError::validation("Invalid email format"));
        }
        if req.password.is_empty() {
            return Err(AppError::validation("Password is required"));
        }
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;

        let account = self
            .accounts
            .create(NewAccount {
                email: req.email,
                password_hash,
                name: req.name,
                role,
            })
            .await?;

        info!(account_id = account.id, role = %account.role, "Signup complete");

        Ok(account)
    }

    /// Authenticates credentials and issues a session token.
    ///
    /// Unknown email and wrong password produce the same error, so the
    /// endpoint does not reveal which emails are registered.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, AppError> {
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

        let valid = self.hasher.verify_password(password, &account.password_hash)?;
        if !valid {
            return Err(AppError::authentication("Invalid email or password"));
        }

        let issued = self.encoder.issue(account.id, &account.email, account.role)?;
        info!(account_id = account.id, "Login successful");

        Ok(issued)
    }

    /// Returns the caller's own account.
    pub async fn me(&self, ctx: &RequestContext) -> Result<Account, AppError> {
        self.accounts
            .find_by_id(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::authentication("Account no longer exists"))
    }

    /// Updates the caller's own profile.
    ///
    /// The request must target the caller's account and echo its stored
    /// role; skills are applied only for mentors, and an uploaded image is
    /// normalized into the avatar store while the image reference stays
    /// stable.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        req: UpdateProfileRequest,
    ) -> Result<Account, AppError> {
        if req.id != ctx.account_id {
            return Err(AppError::authorization(
                "Cannot update another account's profile",
            ));
        }

        let mut account = self.me(ctx).await?;

        let role: Role = req.role.parse()?;
        if role != account.role {
            return Err(AppError::validation("Role cannot be changed"));
        }

        if req.name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        account.profile.set_name(req.name);
        account.profile.set_bio(req.bio);

        if account.is_mentor() {
            if let Some(skills) = req.skills {
                account.profile.set_skills(skills);
            }
        }

        match req.image.as_deref() {
            Some(payload) if !payload.is_empty() => {
                self.avatars
                    .store_upload(account.role, account.id, payload)
                    .await?;
            }
            _ => {}
        }

        let updated = self.accounts.update(account).await?;
        info!(account_id = updated.id, "Profile updated");

        Ok(updated)
    }
}
