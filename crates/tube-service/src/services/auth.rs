//! Authentication service
//!
//! Handles user registration and login. Tokens are stateless access tokens.

use tracing::{info, instrument, warn};
use tube_common::{validate_password_strength, AppError};
use tube_core::{DomainError, User};

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Emails are matched case-insensitively
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user, which also opens their channel
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password)?;

        let email = normalize_email(&request.email);
        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = self.ctx.password_service().hash(&request.password)?;

        let user = User::new(
            self.ctx.generate_id(),
            request.username.trim().to_string(),
            email,
        );
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        let token = self.ctx.jwt_service().issue(user.id)?;
        Ok(AuthResponse::new(&user, 0, token))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let email = normalize_email(&request.email);

        let Some(user) = self.ctx.user_repo().find_by_email(&email).await? else {
            warn!("Login failed: user not found");
            return Err(AppError::InvalidCredentials.into());
        };

        let Some(password_hash) = self.ctx.user_repo().get_password_hash(user.id).await? else {
            warn!(user_id = %user.id, "Login failed: no password hash");
            return Err(AppError::InvalidCredentials.into());
        };

        if let Err(e) = self
            .ctx
            .password_service()
            .verify(&request.password, &password_hash)
        {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(e.into());
        }

        let stats = self.ctx.ledger().channel_stats(user.id).await?;
        let token = self.ctx.jwt_service().issue(user.id)?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(AuthResponse::new(&user, stats.subscriber_count, token))
    }
}
