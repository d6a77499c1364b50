//! Unit tests for the auth use cases
//!
//! Use cases run against an in-memory repository so the full
//! register/login/lockout/session lifecycle is exercised without a
//! database.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
    UpdateProfileInput, UpdateProfileUseCase,
};
use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct MemRepo {
    users: Arc<Mutex<Vec<User>>>,
    sessions: Arc<Mutex<Vec<Session>>>,
}

impl MemRepo {
    fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    fn stored_user(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.as_str() == email)
            .cloned()
    }

    fn stored_session(&self, session_id: Uuid) -> Option<Session> {
        self.sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.session_id == session_id)
            .cloned()
    }
}

impl UserRepository for MemRepo {
    async fn create(&self, user: &User) -> AuthResult<()> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.user_id == user_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> AuthResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.email.as_str() == email))
    }

    async fn exists_by_username(&self, username: &str) -> AuthResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.username.as_str() == username))
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if let Some(slot) = users.iter_mut().find(|u| u.user_id == user.user_id) {
            *slot = user.clone();
        }
        Ok(())
    }
}

impl SessionRepository for MemRepo {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        self.sessions.lock().unwrap().push(session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        let now_ms = chrono::Utc::now().timestamp_millis();
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.session_id == session_id && s.expires_at_ms > now_ms)
            .cloned())
    }

    async fn update(&self, session: &Session) -> AuthResult<()> {
        let mut sessions = self.sessions.lock().unwrap();
        if let Some(slot) = sessions.iter_mut().find(|s| s.session_id == session.session_id) {
            *slot = session.clone();
        }
        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .retain(|s| s.session_id != session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = chrono::Utc::now().timestamp_millis();
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|s| s.expires_at_ms > now_ms);
        Ok((before - sessions.len()) as u64)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn test_config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::development())
}

fn register_input(username: &str, email: &str, password: &str, confirm: &str) -> RegisterInput {
    RegisterInput {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: confirm.to_string(),
        profile_picture_path: None,
    }
}

async fn register_alice(repo: &Arc<MemRepo>, config: &Arc<AuthConfig>) {
    let use_case = RegisterUseCase::new(repo.clone(), config.clone());
    use_case
        .execute(register_input("alice", "alice@x.com", "secret1", "secret1"))
        .await
        .expect("registration should succeed");
}

async fn login(
    repo: &Arc<MemRepo>,
    config: &Arc<AuthConfig>,
    email: &str,
    password: &str,
) -> AuthResult<crate::application::LoginOutput> {
    let use_case = LoginUseCase::new(repo.clone(), repo.clone(), config.clone());
    use_case
        .execute(LoginInput {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
}

// ============================================================================
// Registration
// ============================================================================

mod registration {
    use super::*;

    #[tokio::test]
    async fn succeeds_and_does_not_log_in() {
        let repo = Arc::new(MemRepo::default());
        let config = test_config();

        register_alice(&repo, &config).await;

        let user = repo.stored_user("alice@x.com").expect("user persisted");
        assert_eq!(user.username.as_str(), "alice");
        assert_eq!(user.failed_login_attempts, 0);
        assert!(!user.is_locked);
        assert!(!user.role.is_admin());

        // No auto-login
        assert_eq!(repo.session_count(), 0);
    }

    #[tokio::test]
    async fn fails_on_password_mismatch_and_persists_nothing() {
        let repo = Arc::new(MemRepo::default());
        let use_case = RegisterUseCase::new(repo.clone(), test_config());

        let result = use_case
            .execute(register_input("alice", "alice@x.com", "secret1", "secret2"))
            .await;

        assert!(matches!(result, Err(AuthError::Validation(_))));
        assert_eq!(repo.user_count(), 0);
    }

    #[tokio::test]
    async fn fails_on_short_password() {
        let repo = Arc::new(MemRepo::default());
        let use_case = RegisterUseCase::new(repo.clone(), test_config());

        // 5 characters, everything else valid
        let result = use_case
            .execute(register_input("alice", "alice@x.com", "secrt", "secrt"))
            .await;

        assert!(matches!(result, Err(AuthError::Validation(_))));
        assert_eq!(repo.user_count(), 0);
    }

    #[tokio::test]
    async fn fails_on_empty_fields() {
        let repo = Arc::new(MemRepo::default());
        let use_case = RegisterUseCase::new(repo.clone(), test_config());

        for input in [
            register_input("", "alice@x.com", "secret1", "secret1"),
            register_input("alice", "", "secret1", "secret1"),
            register_input("alice", "alice@x.com", "", ""),
        ] {
            let result = use_case.execute(input).await;
            assert!(matches!(result, Err(AuthError::Validation(_))));
        }
        assert_eq!(repo.user_count(), 0);
    }

    #[tokio::test]
    async fn rejects_duplicate_email_exact_match() {
        let repo = Arc::new(MemRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;

        let use_case = RegisterUseCase::new(repo.clone(), config.clone());

        let result = use_case
            .execute(register_input("alice2", "alice@x.com", "secret1", "secret1"))
            .await;
        assert!(matches!(result, Err(AuthError::EmailTaken)));

        // Matching is exact and case-sensitive: a different casing registers
        let result = use_case
            .execute(register_input("alice3", "Alice@x.com", "secret1", "secret1"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn rejects_duplicate_username() {
        let repo = Arc::new(MemRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;

        let use_case = RegisterUseCase::new(repo.clone(), config.clone());
        let result = use_case
            .execute(register_input("alice", "other@x.com", "secret1", "secret1"))
            .await;
        assert!(matches!(result, Err(AuthError::UsernameTaken)));
    }
}

// ============================================================================
// Login and lockout
// ============================================================================

mod login_lockout {
    use super::*;

    #[tokio::test]
    async fn success_creates_session_with_snapshot() {
        let repo = Arc::new(MemRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;

        let output = login(&repo, &config, "alice@x.com", "secret1")
            .await
            .expect("login should succeed");

        assert!(!output.session_token.is_empty());
        assert_eq!(output.session.username, "alice");
        assert_eq!(output.session.email, "alice@x.com");

        let stored = repo
            .stored_session(output.session.session_id)
            .expect("session persisted");
        assert_eq!(stored.user_id, output.session.user_id);
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_are_indistinguishable() {
        let repo = Arc::new(MemRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;

        let unknown = login(&repo, &config, "nobody@x.com", "secret1").await;
        let wrong = login(&repo, &config, "alice@x.com", "not-it").await;

        assert!(matches!(unknown, Err(AuthError::InvalidCredentials)));
        assert!(matches!(wrong, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn five_failures_lock_and_correct_password_is_then_rejected() {
        let repo = Arc::new(MemRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;

        // Five wrong attempts: each reports the generic error
        for attempt in 1..=5u16 {
            let result = login(&repo, &config, "alice@x.com", "wrong").await;
            assert!(matches!(result, Err(AuthError::InvalidCredentials)));

            let user = repo.stored_user("alice@x.com").unwrap();
            assert_eq!(user.failed_login_attempts, attempt);
            assert_eq!(user.is_locked, attempt >= 5);
        }

        // Sixth attempt with the CORRECT password fails as locked
        let result = login(&repo, &config, "alice@x.com", "secret1").await;
        assert!(matches!(result, Err(AuthError::AccountLocked)));

        // No session was ever created
        assert_eq!(repo.session_count(), 0);
    }

    #[tokio::test]
    async fn lock_is_checked_before_password_verification() {
        let repo = Arc::new(MemRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;

        let mut user = repo.stored_user("alice@x.com").unwrap();
        user.is_locked = true;
        UserRepository::update(repo.as_ref(), &user).await.unwrap();

        // Even a wrong password reports the locked message, not the
        // generic one, and the counter does not move
        let result = login(&repo, &config, "alice@x.com", "wrong").await;
        assert!(matches!(result, Err(AuthError::AccountLocked)));
        assert_eq!(
            repo.stored_user("alice@x.com").unwrap().failed_login_attempts,
            0
        );
    }

    #[tokio::test]
    async fn successful_login_resets_failure_state() {
        let repo = Arc::new(MemRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;

        for _ in 0..4 {
            let _ = login(&repo, &config, "alice@x.com", "wrong").await;
        }
        assert_eq!(
            repo.stored_user("alice@x.com").unwrap().failed_login_attempts,
            4
        );

        login(&repo, &config, "alice@x.com", "secret1")
            .await
            .expect("still unlocked at 4 failures");

        let user = repo.stored_user("alice@x.com").unwrap();
        assert_eq!(user.failed_login_attempts, 0);
        assert!(!user.is_locked);
    }
}

// ============================================================================
// Sessions
// ============================================================================

mod sessions {
    use super::*;

    #[tokio::test]
    async fn check_session_roundtrip() {
        let repo = Arc::new(MemRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;

        let output = login(&repo, &config, "alice@x.com", "secret1").await.unwrap();

        let check = CheckSessionUseCase::new(repo.clone(), config.clone());
        let session = check.execute(&output.session_token).await.unwrap();
        assert_eq!(session.session_id, output.session.session_id);
        assert_eq!(session.username, "alice");
    }

    #[tokio::test]
    async fn tampered_token_is_rejected() {
        let repo = Arc::new(MemRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;

        let output = login(&repo, &config, "alice@x.com", "secret1").await.unwrap();
        let check = CheckSessionUseCase::new(repo.clone(), config.clone());

        // Flip the signature
        let mut tampered = output.session_token.clone();
        tampered.pop();
        tampered.push('A');
        assert!(matches!(
            check.execute(&tampered).await,
            Err(AuthError::SessionInvalid)
        ));

        // Garbage tokens
        for bad in ["", "no-dot", "a.b.c", "not-a-uuid.sig"] {
            assert!(matches!(
                check.execute(bad).await,
                Err(AuthError::SessionInvalid)
            ));
        }
    }

    #[tokio::test]
    async fn expired_session_is_rejected() {
        let repo = Arc::new(MemRepo::default());
        let mut config = AuthConfig::development();
        config.session_ttl = std::time::Duration::from_secs(0);
        let config = Arc::new(config);
        register_alice(&repo, &config).await;

        let output = login(&repo, &config, "alice@x.com", "secret1").await.unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        let check = CheckSessionUseCase::new(repo.clone(), config.clone());
        assert!(matches!(
            check.execute(&output.session_token).await,
            Err(AuthError::SessionInvalid)
        ));
    }

    #[tokio::test]
    async fn logout_destroys_session_and_is_idempotent() {
        let repo = Arc::new(MemRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;

        let output = login(&repo, &config, "alice@x.com", "secret1").await.unwrap();
        assert_eq!(repo.session_count(), 1);

        let logout = LogoutUseCase::new(repo.clone(), config.clone());
        logout.execute(&output.session_token).await.unwrap();
        assert_eq!(repo.session_count(), 0);

        // Second logout with the same token is not an error
        logout.execute(&output.session_token).await.unwrap();

        // Malformed token is not an error either
        logout.execute("garbage").await.unwrap();

        let check = CheckSessionUseCase::new(repo.clone(), config.clone());
        assert!(check.execute(&output.session_token).await.is_err());
    }
}

// ============================================================================
// Profile updates
// ============================================================================

mod profile {
    use super::*;

    #[tokio::test]
    async fn update_refreshes_session_snapshot() {
        let repo = Arc::new(MemRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;

        let output = login(&repo, &config, "alice@x.com", "secret1").await.unwrap();

        let use_case = UpdateProfileUseCase::new(repo.clone(), repo.clone());
        let updated = use_case
            .execute(UpdateProfileInput {
                session_id: output.session.session_id,
                user_id: output.session.user_id,
                username: "alice-renamed".to_string(),
                email: "renamed@x.com".to_string(),
                new_picture_path: Some("/uploads/1-new.png".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(updated.username.as_str(), "alice-renamed");

        let session = repo.stored_session(output.session.session_id).unwrap();
        assert_eq!(session.username, "alice-renamed");
        assert_eq!(session.email, "renamed@x.com");
        assert_eq!(session.profile_picture_path.as_deref(), Some("/uploads/1-new.png"));
    }

    #[tokio::test]
    async fn update_without_new_picture_keeps_old_path() {
        let repo = Arc::new(MemRepo::default());
        let config = test_config();

        let register = RegisterUseCase::new(repo.clone(), config.clone());
        register
            .execute(RegisterInput {
                username: "alice".to_string(),
                email: "alice@x.com".to_string(),
                password: "secret1".to_string(),
                confirm_password: "secret1".to_string(),
                profile_picture_path: Some("/uploads/1-old.png".to_string()),
            })
            .await
            .unwrap();

        let output = login(&repo, &config, "alice@x.com", "secret1").await.unwrap();

        let use_case = UpdateProfileUseCase::new(repo.clone(), repo.clone());
        let updated = use_case
            .execute(UpdateProfileInput {
                session_id: output.session.session_id,
                user_id: output.session.user_id,
                username: "alice".to_string(),
                email: "alice@x.com".to_string(),
                new_picture_path: None,
            })
            .await
            .unwrap();

        assert_eq!(
            updated.profile_picture_path.as_deref(),
            Some("/uploads/1-old.png")
        );
    }

    #[tokio::test]
    async fn update_rejects_empty_fields() {
        let repo = Arc::new(MemRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;

        let output = login(&repo, &config, "alice@x.com", "secret1").await.unwrap();

        let use_case = UpdateProfileUseCase::new(repo.clone(), repo.clone());
        let result = use_case
            .execute(UpdateProfileInput {
                session_id: output.session.session_id,
                user_id: output.session.user_id,
                username: "".to_string(),
                email: "alice@x.com".to_string(),
                new_picture_path: None,
            })
            .await;

        assert!(matches!(result, Err(AuthError::Validation(_))));
    }
}
