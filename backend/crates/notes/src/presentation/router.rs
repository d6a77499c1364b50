//! Notes Router
//!
//! Mounted under `/notes` by the application, behind the auth session
//! middleware.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::NoteRepository;
use crate::infra::postgres::PgNoteRepository;
use crate::presentation::handlers::{self, NotesAppState};

/// Create the notes router with the PostgreSQL repository
pub fn notes_router(repo: PgNoteRepository) -> Router {
    notes_router_generic(repo)
}

/// Create a generic notes router for any repository implementation
pub fn notes_router_generic<R>(repo: R) -> Router
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    let state = NotesAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", get(handlers::get_notes::<R>).post(handlers::post_notes::<R>))
        .route("/new", get(handlers::get_new_note))
        .route(
            "/{id}/edit",
            get(handlers::get_edit_note::<R>).post(handlers::post_edit_note::<R>),
        )
        .route("/{id}/delete", post(handlers::post_delete_note::<R>))
        .with_state(state)
}
