//! Session Entity
//!
//! Server-side record behind the cookie token. Carries a denormalized
//! snapshot of the user so pages render without re-fetching the account.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4); the cookie token is this ID plus an HMAC
    pub session_id: Uuid,
    /// Reference to User
    pub user_id: UserId,
    /// Snapshot: username at login / last profile edit
    pub username: String,
    /// Snapshot: email
    pub email: String,
    /// Snapshot: role
    pub role: UserRole,
    /// Snapshot: profile picture path
    pub profile_picture_path: Option<String>,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp
    pub last_activity_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session for an authenticated user
    ///
    /// TTL is provided by the application layer (config), not hard-coded.
    pub fn new(user: &User, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id: user.user_id,
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            role: user.role,
            profile_picture_path: user.profile_picture_path.clone(),
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
            last_activity_at: now,
        }
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Update the last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }

    /// Re-copy the snapshot fields after a profile edit
    pub fn refresh_snapshot(&mut self, user: &User) {
        self.username = user.username.as_str().to_string();
        self.email = user.email.as_str().to_string();
        self.role = user.role;
        self.profile_picture_path = user.profile_picture_path.clone();
        self.last_activity_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        email::Email, user_name::UserName, user_password::{RawPassword, UserPassword},
    };

    fn test_user() -> User {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        User::new(
            UserName::new("alice").unwrap(),
            Email::new("alice@x.com").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
            Some("/uploads/1-a.png".to_string()),
        )
    }

    #[test]
    fn test_new_session_snapshots_user() {
        let user = test_user();
        let session = Session::new(&user, Duration::hours(1));

        assert_eq!(session.user_id, user.user_id);
        assert_eq!(session.username, "alice");
        assert_eq!(session.email, "alice@x.com");
        assert_eq!(session.role, user.role);
        assert_eq!(session.profile_picture_path.as_deref(), Some("/uploads/1-a.png"));
        assert!(!session.is_expired());
    }

    #[test]
    fn test_expiry() {
        let user = test_user();
        let session = Session::new(&user, Duration::milliseconds(-1));
        assert!(session.is_expired());
    }

    #[test]
    fn test_refresh_snapshot() {
        let mut user = test_user();
        let mut session = Session::new(&user, Duration::hours(1));

        user.update_profile(
            UserName::new("alice2").unwrap(),
            Email::new("alice2@x.com").unwrap(),
            Some("/uploads/2-b.png".to_string()),
        );
        session.refresh_snapshot(&user);

        assert_eq!(session.username, "alice2");
        assert_eq!(session.email, "alice2@x.com");
        assert_eq!(session.profile_picture_path.as_deref(), Some("/uploads/2-b.png"));
    }
}
