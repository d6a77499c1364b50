//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, views, router, middleware
//!
//! ## Features
//! - Registration/login with email + password
//! - Account lockout after repeated failed logins
//! - Server-side sessions with HMAC-signed cookie tokens
//! - Profile editing with optional picture upload
//! - Role-based access (User, Admin)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, off the async scheduler
//! - Unknown email and wrong password are indistinguishable to callers
//! - Lockout is checked before password verification

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{CurrentSession, SessionLayerState, require_session};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::session::*;
    pub use crate::domain::entity::user::*;
    pub use crate::domain::value_object::email::*;
    pub use crate::domain::value_object::user_id::*;
    pub use crate::domain::value_object::user_name::*;
    pub use crate::domain::value_object::user_password::*;
    pub use crate::domain::value_object::user_role::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAuthRepository as AuthStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
