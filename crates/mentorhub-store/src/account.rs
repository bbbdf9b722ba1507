//! Account directory: repository trait and in-memory implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::info;

use mentorhub_core::error::AppError;
use mentorhub_core::result::AppResult;
use mentorhub_entity::account::{Account, NewAccount, Profile, Role};

/// Storage abstraction for the account directory.
///
/// Implementations own the uniqueness invariant and id assignment: `create`
/// must perform the duplicate-email check, id allocation, and append as one
/// atomic step.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Creates an account, assigning the next id and the default profile.
    ///
    /// Fails with a validation error if the email is already registered
    /// (case-sensitive comparison).
    async fn create(&self, new: NewAccount) -> AppResult<Account>;

    /// Looks up an account by id. Absence is not an error.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Account>>;

    /// Looks up an account by email (case-sensitive). Absence is not an error.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Replaces the stored account with the same id.
    async fn update(&self, account: Account) -> AppResult<Account>;

    /// Returns all accounts with the given role, in id-ascending order.
    async fn list_by_role(&self, role: Role) -> AppResult<Vec<Account>>;
}

/// Mutable directory state behind the lock.
#[derive(Debug)]
struct Inner {
    /// All accounts, in creation (id-ascending) order.
    accounts: Vec<Account>,
    /// Next id to assign. Strictly increasing, never reused.
    next_id: i64,
}

/// In-memory account directory using a Tokio mutex for thread safety.
///
/// Suitable for single-process deployments only; contents are lost on
/// restart.
#[derive(Debug, Clone)]
pub struct MemoryAccountRepository {
    /// Protected inner state.
    inner: Arc<Mutex<Inner>>,
}

impl MemoryAccountRepository {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                accounts: Vec::new(),
                next_id: 1,
            })),
        }
    }
}

impl Default for MemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn create(&self, new: NewAccount) -> AppResult<Account> {
        let mut inner = self.inner.lock().await;

        if inner.accounts.iter().any(|a| a.email == new.email) {
            return Err(AppError::validation("Email already registered"));
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let account = Account {
            id,
            email: new.email,
            role: new.role,
            password_hash: new.password_hash,
            profile: Profile::default_for(new.role, id, new.name),
            created_at: Utc::now(),
        };

        inner.accounts.push(account.clone());
        info!(account_id = id, role = %account.role, "Account created");

        Ok(account)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Account>> {
        let inner = self.inner.lock().await;
        Ok(inner.accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let inner = self.inner.lock().await;
        Ok(inner.accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn update(&self, account: Account) -> AppResult<Account> {
        let mut inner = self.inner.lock().await;

        let slot = inner
            .accounts
            .iter_mut()
            .find(|a| a.id == account.id)
            .ok_or_else(|| AppError::not_found("Account not found"))?;

        *slot = account.clone();
        Ok(account)
    }

    async fn list_by_role(&self, role: Role) -> AppResult<Vec<Account>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .accounts
            .iter()
            .filter(|a| a.role == role)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentorhub_core::error::ErrorKind;

    fn new_account(email: &str, role: Role) -> NewAccount {
        NewAccount {
            email: email.to_string(),
            password_hash: "hash".to_string(),
            name: "Test".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_ids_are_strictly_increasing() {
        let repo = MemoryAccountRepository::new();
        let a = repo.create(new_account("a@x.com", Role::Mentor)).await.unwrap();
        let b = repo.create(new_account("b@x.com", Role::Mentee)).await.unwrap();
        let c = repo.create(new_account("c@x.com", Role::Mentor)).await.unwrap();
        assert!(a.id < b.id && b.id < c.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let repo = MemoryAccountRepository::new();
        repo.create(new_account("a@x.com", Role::Mentor)).await.unwrap();

        let err = repo
            .create(new_account("a@x.com", Role::Mentee))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_email_uniqueness_is_case_sensitive() {
        let repo = MemoryAccountRepository::new();
        repo.create(new_account("a@x.com", Role::Mentor)).await.unwrap();
        assert!(repo.create(new_account("A@x.com", Role::Mentor)).await.is_ok());
    }

    #[tokio::test]
    async fn test_default_profile_is_built() {
        let repo = MemoryAccountRepository::new();
        let mentor = repo.create(new_account("a@x.com", Role::Mentor)).await.unwrap();
        assert_eq!(mentor.profile.image_ref(), format!("/images/mentor/{}", mentor.id));
        assert_eq!(mentor.profile.skills(), Some(&[][..]));

        let mentee = repo.create(new_account("b@x.com", Role::Mentee)).await.unwrap();
        assert!(mentee.profile.skills().is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_creates_never_share_ids() {
        let repo = Arc::new(MemoryAccountRepository::new());

        let mut handles = Vec::new();
        for i in 0..32 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.create(new_account(&format!("user{i}@x.com"), Role::Mentee))
                    .await
                    .unwrap()
                    .id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 32);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_duplicate_email_race_has_one_winner() {
        let repo = Arc::new(MemoryAccountRepository::new());

        let mut handles = Vec::new();
        for _ in 0..8 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.create(new_account("same@x.com", Role::Mentee)).await
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);
    }

    #[tokio::test]
    async fn test_lookup_absence_is_none() {
        let repo = MemoryAccountRepository::new();
        assert!(repo.find_by_id(99).await.unwrap().is_none());
        assert!(repo.find_by_email("nobody@x.com").await.unwrap().is_none());
    }
}
