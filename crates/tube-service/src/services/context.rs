//! Service context - dependency container for services
//!
//! Holds the storage ports and the auth/ID helpers needed by services.

use std::fmt;
use std::sync::Arc;

use tube_common::{JwtService, PasswordService};
use tube_core::{
    CommentRepository, EngagementLedger, Snowflake, SnowflakeGenerator, UserRepository,
    VideoRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// The storage ports are trait objects so the same services run over
/// PostgreSQL or the in-memory store.
#[derive(Clone)]
pub struct ServiceContext {
    // Storage ports
    user_repo: Arc<dyn UserRepository>,
    video_repo: Arc<dyn VideoRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    ledger: Arc<dyn EngagementLedger>,

    // Services
    jwt_service: Arc<JwtService>,
    password_service: Arc<PasswordService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        video_repo: Arc<dyn VideoRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        ledger: Arc<dyn EngagementLedger>,
        jwt_service: Arc<JwtService>,
        password_service: Arc<PasswordService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo,
            video_repo,
            comment_repo,
            ledger,
            jwt_service,
            password_service,
            snowflake_generator,
        }
    }

    // === Storage ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the video repository
    pub fn video_repo(&self) -> &dyn VideoRepository {
        self.video_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the engagement ledger
    pub fn ledger(&self) -> &dyn EngagementLedger {
        self.ledger.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the password hasher
    pub fn password_service(&self) -> &PasswordService {
        self.password_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("snowflake_generator", &self.snowflake_generator)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    video_repo: Option<Arc<dyn VideoRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    ledger: Option<Arc<dyn EngagementLedger>>,
    jwt_service: Option<Arc<JwtService>>,
    password_service: Option<Arc<PasswordService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn video_repo(mut self, repo: Arc<dyn VideoRepository>) -> Self {
        self.video_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn ledger(mut self, ledger: Arc<dyn EngagementLedger>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn password_service(mut self, service: Arc<PasswordService>) -> Self {
        self.password_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// The password hasher falls back to the default Argon2id parameters.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any other dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.video_repo
                .ok_or_else(|| ServiceError::validation("video_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.ledger
                .ok_or_else(|| ServiceError::validation("ledger is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.password_service.unwrap_or_default(),
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
