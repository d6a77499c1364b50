//! Auth Router

use axum::{
    Router, middleware,
    routing::get,
};
use std::sync::Arc;

use platform::upload::UploadStore;

use crate::application::config::AuthConfig;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{SessionLayerState, require_session};

/// Create the auth page router with the PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig, uploads: UploadStore) -> Router {
    auth_router_generic(repo, config, uploads)
}

/// Create a generic auth page router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig, uploads: UploadStore) -> Router
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        uploads,
    };

    let session_state = SessionLayerState {
        repo: state.repo.clone(),
        config: state.config.clone(),
    };

    let protected = Router::new()
        .route("/dashboard", get(handlers::get_dashboard))
        .route(
            "/edit-profile",
            get(handlers::get_edit_profile).post(handlers::post_edit_profile::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            session_state,
            require_session::<R>,
        ))
        .with_state(state.clone());

    Router::new()
        .route("/", get(handlers::get_index::<R>))
        .route(
            "/register",
            get(handlers::get_register).post(handlers::post_register::<R>),
        )
        .route(
            "/login",
            get(handlers::get_login).post(handlers::post_login::<R>),
        )
        .route("/logout", get(handlers::get_logout::<R>))
        .with_state(state)
        .merge(protected)
}
