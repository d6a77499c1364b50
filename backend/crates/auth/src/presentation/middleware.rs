//! Access-Control Middleware
//!
//! Session resolution plus the capability gates that protect routes.
//! The resolved session travels through the request as a typed
//! [`CurrentSession`] extension, never as loose string fields.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
use crate::error::AuthError;

/// The authenticated caller, resolved once per request
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub session_id: Uuid,
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub profile_picture_path: Option<String>,
}

impl From<Session> for CurrentSession {
    fn from(session: Session) -> Self {
        Self {
            session_id: session.session_id,
            user_id: session.user_id,
            username: session.username,
            email: session.email,
            role: session.role,
            profile_picture_path: session.profile_picture_path,
        }
    }
}

/// Middleware state
#[derive(Clone)]
pub struct SessionLayerState<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<S>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid session on page routes
///
/// Unauthenticated requests are redirected to the login form; on
/// success a [`CurrentSession`] is inserted into request extensions.
pub async fn require_session<S>(
    State(state): State<SessionLayerState<S>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.cookie.name);

    let session = match token {
        Some(token) => {
            let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
            use_case.execute(&token).await.ok()
        }
        None => None,
    };

    match session {
        Some(session) => {
            req.extensions_mut().insert(CurrentSession::from(session));
            next.run(req).await
        }
        None => Redirect::to("/login").into_response(),
    }
}

/// Middleware that requires the resolved session to have the admin role
///
/// Layer after [`require_session`]; a missing session is a 401, a
/// non-admin session a 403.
pub async fn require_admin(req: Request<Body>, next: Next) -> Response {
    match req.extensions().get::<CurrentSession>() {
        Some(session) if session.role.is_admin() => next.run(req).await,
        Some(_) => AuthError::Forbidden.into_response(),
        None => AuthError::SessionInvalid.into_response(),
    }
}

// ============================================================================
// Pure capability gates
// ============================================================================

/// 401 unless a session is present
pub fn require_authenticated(
    session: Option<&CurrentSession>,
) -> Result<&CurrentSession, AuthError> {
    session.ok_or(AuthError::SessionInvalid)
}

/// 403 unless the session's role is admin
pub fn require_admin_session(session: &CurrentSession) -> Result<(), AuthError> {
    if session.role.is_admin() {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}

/// 403 unless the session is admin or owns the resource
pub fn require_owner_or_admin(
    session: &CurrentSession,
    resource_owner_id: &UserId,
) -> Result<(), AuthError> {
    if session.role.is_admin() || &session.user_id == resource_owner_id {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}
