//! User Entity
//!
//! The account record: identity, credentials, and lockout state.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_password::UserPassword,
    user_role::UserRole,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display/login handle (unique)
    pub username: UserName,
    /// Email address (unique, login identifier)
    pub email: Email,
    /// Argon2id password hash
    pub password_hash: UserPassword,
    /// Role (User or Admin)
    pub role: UserRole,
    /// Consecutive failed login attempts
    pub failed_login_attempts: u16,
    /// Whether the account is locked (until administrative reset)
    pub is_locked: bool,
    /// Public path of the uploaded profile picture, if any
    pub profile_picture_path: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Failed attempts at which the account locks
    pub const MAX_LOGIN_FAILURES: u16 = 5;

    /// Create a new user with default role and clean lockout state
    pub fn new(
        username: UserName,
        email: Email,
        password_hash: UserPassword,
        profile_picture_path: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            username,
            email,
            password_hash,
            role: UserRole::default(),
            failed_login_attempts: 0,
            is_locked: false,
            profile_picture_path,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a failed login attempt; locks the account at the threshold
    pub fn record_failure(&mut self) {
        self.failed_login_attempts += 1;
        if self.failed_login_attempts >= Self::MAX_LOGIN_FAILURES {
            self.is_locked = true;
        }
        self.updated_at = Utc::now();
    }

    /// Reset lockout state after a successful authentication
    pub fn reset_failures(&mut self) {
        self.failed_login_attempts = 0;
        self.is_locked = false;
        self.updated_at = Utc::now();
    }

    /// Apply a profile edit
    ///
    /// The picture path is replaced only when a new upload arrived;
    /// `None` keeps the prior value.
    pub fn update_profile(
        &mut self,
        username: UserName,
        email: Email,
        new_picture_path: Option<String>,
    ) {
        self.username = username;
        self.email = email;
        if let Some(path) = new_picture_path {
            self.profile_picture_path = Some(path);
        }
        self.updated_at = Utc::now();
    }
}
