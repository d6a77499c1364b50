//! Form DTOs

use serde::Deserialize;

/// POST /login form body (urlencoded)
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// POST /register form fields (multipart; collected by the handler)
#[derive(Debug, Clone, Default)]
pub struct RegisterSubmission {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Public path of the stored upload, set when a file arrived
    pub profile_picture_path: Option<String>,
}

/// POST /edit-profile form fields (multipart; collected by the handler)
#[derive(Debug, Clone, Default)]
pub struct ProfileSubmission {
    pub username: String,
    pub email: String,
    /// Public path of the stored upload, set when a file arrived
    pub new_picture_path: Option<String>,
}
