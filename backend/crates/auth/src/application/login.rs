//! Login Use Case
//!
//! Authenticates a user and creates a session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::user_password::RawPassword;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Signed session token for the cookie
    pub session_token: String,
    /// The created session record
    pub session: Session,
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Unknown email and wrong password surface the same error
        let mut user = self
            .user_repo
            .find_by_email(input.email.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Lockout is checked before the password is even looked at
        if user.is_locked {
            return Err(AuthError::AccountLocked);
        }

        // Policy is not applied to login attempts; any typed password is
        // verified against the stored hash and counts toward lockout
        let raw_password = RawPassword::for_verification(input.password);

        let stored_hash = user.password_hash.clone();
        let pepper = self.config.password_pepper.clone();
        let password_valid = tokio::task::spawn_blocking(move || {
            stored_hash.verify(&raw_password, pepper.as_deref())
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Verification task failed: {e}")))?;

        if !password_valid {
            // Read-modify-write without transactional isolation: two
            // concurrent misses can read the same counter and under-count
            user.record_failure();
            self.user_repo.update(&user).await?;

            tracing::warn!(
                user_id = %user.user_id,
                failed_attempts = user.failed_login_attempts,
                locked = user.is_locked,
                "Failed login attempt"
            );

            return Err(AuthError::InvalidCredentials);
        }

        user.reset_failures();
        self.user_repo.update(&user).await?;

        let session = Session::new(&user, self.config.session_ttl_chrono());
        self.session_repo.create(&session).await?;

        let session_token = self.generate_session_token(&session);

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(LoginOutput {
            session_token,
            session,
        })
    }

    /// Generate signed session token: `{session_id}.{base64url(hmac)}`
    fn generate_session_token(&self, session: &Session) -> String {
        use base64::Engine;
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        let session_id = session.session_id.to_string();

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.config.session_secret)
            .expect("HMAC can take key of any size");
        mac.update(session_id.as_bytes());
        let signature = mac.finalize().into_bytes();

        format!(
            "{}.{}",
            session_id,
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(signature)
        )
    }
}
