//! Register Use Case
//!
//! Creates a new user account. Does not log the user in.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Public path of an uploaded profile picture, if one arrived
    pub profile_picture_path: Option<String>,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<User> {
        if input.username.trim().is_empty()
            || input.email.trim().is_empty()
            || input.password.is_empty()
            || input.confirm_password.is_empty()
        {
            return Err(AuthError::Validation(
                "Please fill in all fields.".to_string(),
            ));
        }

        if input.password != input.confirm_password {
            return Err(AuthError::Validation(
                "Passwords do not match.".to_string(),
            ));
        }

        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::Validation(format!("{}.", e.message())))?;

        let username =
            UserName::new(&input.username).map_err(|e| AuthError::Validation(format!("{e}.")))?;
        let email = Email::new(&input.email)
            .map_err(|e| AuthError::Validation(format!("{}.", e.message())))?;

        if self.user_repo.exists_by_email(email.as_str()).await? {
            return Err(AuthError::EmailTaken);
        }
        if self.user_repo.exists_by_username(username.as_str()).await? {
            return Err(AuthError::UsernameTaken);
        }

        // Argon2id is CPU-bound; hash off the async scheduler
        let pepper = self.config.password_pepper.clone();
        let password_hash = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, pepper.as_deref())
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Hashing task failed: {e}")))??;

        let user = User::new(username, email, password_hash, input.profile_picture_path);

        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User registered"
        );

        Ok(user)
    }
}
