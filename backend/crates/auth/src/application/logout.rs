//! Logout Use Case
//!
//! Destroys a session. Idempotent: an unknown or malformed token is
//! treated the same as a successful logout.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};
use uuid::Uuid;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Destroy the session behind the token, if it verifies
    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let Ok(session_id) = self.parse_session_token(session_token) else {
            // Bad token: nothing to destroy, the cookie still gets cleared
            return Ok(());
        };

        self.session_repo.delete(session_id).await?;

        tracing::info!(session_id = %session_id, "User logged out");
        Ok(())
    }

    /// Parse and verify a signed session token
    fn parse_session_token(&self, token: &str) -> AuthResult<Uuid> {
        use base64::Engine;
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 2 {
            return Err(AuthError::SessionInvalid);
        }

        let session_id_str = parts[0];
        let signature_b64 = parts[1];

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.config.session_secret)
            .expect("HMAC can take key of any size");
        mac.update(session_id_str.as_bytes());

        let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| AuthError::SessionInvalid)?;

        mac.verify_slice(&signature)
            .map_err(|_| AuthError::SessionInvalid)?;

        session_id_str
            .parse()
            .map_err(|_| AuthError::SessionInvalid)
    }
}
