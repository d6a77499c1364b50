//! HTTP Handlers
//!
//! All routes sit behind the auth session middleware; the owning user
//! always comes from the [`CurrentSession`] extension, never from the
//! request body or path.

use axum::Extension;
use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::sync::Arc;
use uuid::Uuid;

use auth::middleware::CurrentSession;

use crate::application::{
    CreateNoteUseCase, DeleteNoteUseCase, ListNotesUseCase, UpdateNoteUseCase,
};
use crate::domain::entities::NoteId;
use crate::domain::repository::NoteRepository;
use crate::presentation::dto::NoteForm;
use crate::presentation::views;

/// Shared state for note handlers
#[derive(Clone)]
pub struct NotesAppState<R>
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /notes
pub async fn get_notes<R>(
    State(state): State<NotesAppState<R>>,
    Extension(session): Extension<CurrentSession>,
) -> Response
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListNotesUseCase::new(state.repo.clone());

    match use_case.execute(&session.user_id).await {
        Ok(notes) => Html(views::notes_index_page(&session.username, &notes)).into_response(),
        Err(e) => {
            e.log();
            (e.status_code(), Html(views::notes_error_page())).into_response()
        }
    }
}

/// GET /notes/new
pub async fn get_new_note() -> Html<String> {
    Html(views::note_new_page(None, "", ""))
}

/// POST /notes
pub async fn post_notes<R>(
    State(state): State<NotesAppState<R>>,
    Extension(session): Extension<CurrentSession>,
    Form(form): Form<NoteForm>,
) -> Response
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateNoteUseCase::new(state.repo.clone());

    match use_case
        .execute(session.user_id, form.title.clone(), form.content.clone())
        .await
    {
        Ok(_) => Redirect::to("/notes").into_response(),
        Err(e) => {
            e.log();
            (
                e.status_code(),
                Html(views::note_new_page(
                    Some(&e.user_message()),
                    &form.title,
                    &form.content,
                )),
            )
                .into_response()
        }
    }
}

/// GET /notes/{id}/edit
///
/// A note the caller does not own renders nothing; the caller is sent
/// back to the list as if the note did not exist.
pub async fn get_edit_note<R>(
    State(state): State<NotesAppState<R>>,
    Extension(session): Extension<CurrentSession>,
    Path(note_id): Path<Uuid>,
) -> Response
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    let note_id = NoteId::from_uuid(note_id);

    match state.repo.find_for_owner(note_id, &session.user_id).await {
        Ok(Some(note)) => Html(views::note_edit_page(
            None,
            &note.note_id,
            &note.title,
            &note.content,
        ))
        .into_response(),
        Ok(None) => Redirect::to("/notes").into_response(),
        Err(e) => {
            e.log();
            (e.status_code(), Html(views::notes_error_page())).into_response()
        }
    }
}

/// POST /notes/{id}/edit
///
/// A non-owned or missing note is a silent no-op that still redirects
/// like a success.
pub async fn post_edit_note<R>(
    State(state): State<NotesAppState<R>>,
    Extension(session): Extension<CurrentSession>,
    Path(note_id): Path<Uuid>,
    Form(form): Form<NoteForm>,
) -> Response
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    let note_id = NoteId::from_uuid(note_id);
    let use_case = UpdateNoteUseCase::new(state.repo.clone());

    match use_case
        .execute(
            session.user_id,
            note_id,
            form.title.clone(),
            form.content.clone(),
        )
        .await
    {
        Ok(_) => Redirect::to("/notes").into_response(),
        Err(e) => {
            e.log();
            (
                e.status_code(),
                Html(views::note_edit_page(
                    Some(&e.user_message()),
                    &note_id,
                    &form.title,
                    &form.content,
                )),
            )
                .into_response()
        }
    }
}

/// POST /notes/{id}/delete
///
/// Always redirects to the list; deleting a missing or non-owned note
/// is a no-op.
pub async fn post_delete_note<R>(
    State(state): State<NotesAppState<R>>,
    Extension(session): Extension<CurrentSession>,
    Path(note_id): Path<Uuid>,
) -> Response
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    let note_id = NoteId::from_uuid(note_id);
    let use_case = DeleteNoteUseCase::new(state.repo.clone());

    if let Err(e) = use_case.execute(session.user_id, note_id).await {
        e.log();
    }

    Redirect::to("/notes").into_response()
}
