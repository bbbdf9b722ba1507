//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use mentorhub_auth::jwt::decoder::JwtDecoder;
use mentorhub_auth::jwt::encoder::JwtEncoder;
use mentorhub_auth::password::PasswordHasher;
use mentorhub_core::config::AppConfig;
use mentorhub_core::result::AppResult;
use mentorhub_service::account::AccountService;
use mentorhub_service::avatar::AvatarService;
use mentorhub_service::matching::MatchService;
use mentorhub_service::mentor::MentorService;
use mentorhub_store::account::{AccountRepository, MemoryAccountRepository};
use mentorhub_store::match_request::{MatchRequestRepository, MemoryMatchRequestRepository};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Repositories ─────────────────────────────────────────
    /// Account directory
    pub account_repo: Arc<dyn AccountRepository>,
    /// Match request store
    pub request_repo: Arc<dyn MatchRequestRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Account registration/login/profile service
    pub account_service: Arc<AccountService>,
    /// Mentor directory query service
    pub mentor_service: Arc<MentorService>,
    /// Match request engine
    pub match_service: Arc<MatchService>,
    /// Avatar image store
    pub avatar_service: Arc<AvatarService>,
}

impl AppState {
    /// Wires fresh in-memory repositories and services from configuration.
    pub fn build(config: AppConfig) -> AppResult<Self> {
        let config = Arc::new(config);

        let account_repo: Arc<dyn AccountRepository> = Arc::new(MemoryAccountRepository::new());
        let request_repo: Arc<dyn MatchRequestRepository> =
            Arc::new(MemoryMatchRequestRepository::new());

        let password_hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let avatar_service = Arc::new(AvatarService::new(config.avatar.clone()));
        let account_service = Arc::new(AccountService::new(
            Arc::clone(&account_repo),
            password_hasher,
            jwt_encoder,
            Arc::clone(&avatar_service),
        ));
        let mentor_service = Arc::new(MentorService::new(Arc::clone(&account_repo)));
        let match_service = Arc::new(MatchService::new(
            Arc::clone(&account_repo),
            Arc::clone(&request_repo),
        ));

        Ok(Self {
            config,
            jwt_decoder,
            account_repo,
            request_repo,
            account_service,
            mentor_service,
            match_service,
            avatar_service,
        })
    }
}
