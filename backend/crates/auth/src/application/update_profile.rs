//! Update Profile Use Case
//!
//! Updates the account record and refreshes the caller's session
//! snapshot so pages render the new values immediately.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};
use uuid::Uuid;

/// Update profile input
pub struct UpdateProfileInput {
    /// The caller's session (snapshot to refresh)
    pub session_id: Uuid,
    /// The caller's user id (from the session)
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    /// Public path of a newly uploaded picture; `None` keeps the old one
    pub new_picture_path: Option<String>,
}

/// Update profile use case
pub struct UpdateProfileUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
}

impl<U, S> UpdateProfileUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>) -> Self {
        Self {
            user_repo,
            session_repo,
        }
    }

    pub async fn execute(&self, input: UpdateProfileInput) -> AuthResult<User> {
        if input.username.trim().is_empty() || input.email.trim().is_empty() {
            return Err(AuthError::Validation(
                "All fields are required.".to_string(),
            ));
        }

        let username =
            UserName::new(&input.username).map_err(|e| AuthError::Validation(format!("{e}.")))?;
        let email = Email::new(&input.email)
            .map_err(|e| AuthError::Validation(format!("{}.", e.message())))?;

        let mut user = self
            .user_repo
            .find_by_id(&input.user_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        user.update_profile(username, email, input.new_picture_path);
        self.user_repo.update(&user).await?;

        // Refresh the caller's session snapshot to match the new record
        if let Some(mut session) = self.session_repo.find_by_id(input.session_id).await? {
            session.refresh_snapshot(&user);
            self.session_repo.update(&session).await?;
        }

        tracing::info!(user_id = %user.user_id, "Profile updated");

        Ok(user)
    }
}
