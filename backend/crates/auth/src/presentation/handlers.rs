//! HTTP Handlers
//!
//! Page-flow handlers: successful POSTs redirect, failed POSTs
//! re-render the originating form with an inline error message.

use axum::Form;
use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, header};
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use axum::Extension;
use std::sync::Arc;

use platform::upload::UploadStore;

use crate::application::{
    CheckSessionUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
    UpdateProfileInput, UpdateProfileUseCase,
};
use crate::application::config::AuthConfig;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginForm, ProfileSubmission, RegisterSubmission};
use crate::presentation::middleware::CurrentSession;
use crate::presentation::views;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub uploads: UploadStore,
}

// ============================================================================
// Index
// ============================================================================

/// GET /
pub async fn get_index<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> Html<String>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let session = resolve_session(&state, &headers).await;
    Html(views::index_page(session.as_ref()))
}

// ============================================================================
// Registration
// ============================================================================

/// GET /register
pub async fn get_register() -> Html<String> {
    Html(views::register_page(None))
}

/// POST /register
pub async fn post_register<R>(
    State(state): State<AuthAppState<R>>,
    mut multipart: Multipart,
) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let submission = match collect_register(&mut multipart, &state.uploads).await {
        Ok(submission) => submission,
        Err(e) => return render_register_error(e),
    };

    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        username: submission.username,
        email: submission.email,
        password: submission.password,
        confirm_password: submission.confirm_password,
        profile_picture_path: submission.profile_picture_path,
    };

    match use_case.execute(input).await {
        Ok(_) => Redirect::to("/login").into_response(),
        Err(e) => render_register_error(e),
    }
}

fn render_register_error(e: AuthError) -> Response {
    e.log();
    (
        e.status_code(),
        Html(views::register_page(Some(&e.user_message()))),
    )
        .into_response()
}

// ============================================================================
// Login / Logout
// ============================================================================

/// GET /login
pub async fn get_login() -> Html<String> {
    Html(views::login_page(None))
}

/// POST /login
pub async fn post_login<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<LoginForm>,
) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: form.email,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(output) => {
            let cookie = state.config.cookie.build_set_cookie(&output.session_token);
            (
                AppendHeaders([(header::SET_COOKIE, cookie)]),
                Redirect::to("/dashboard"),
            )
                .into_response()
        }
        Err(e) => {
            e.log();
            (
                e.status_code(),
                Html(views::login_page(Some(&e.user_message()))),
            )
                .into_response()
        }
    }
}

/// GET /logout
pub async fn get_logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) = platform::cookie::extract_cookie(&headers, &state.config.cookie.name) {
        let use_case = LogoutUseCase::new(state.repo.clone(), state.config.clone());
        // The cookie is cleared regardless of the store outcome
        if let Err(e) = use_case.execute(&token).await {
            e.log();
        }
    }

    let cookie = state.config.cookie.build_delete_cookie();
    (
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Redirect::to("/"),
    )
        .into_response()
}

// ============================================================================
// Dashboard / Profile
// ============================================================================

/// GET /dashboard (behind require_session)
pub async fn get_dashboard(Extension(session): Extension<CurrentSession>) -> Html<String> {
    Html(views::dashboard_page(&session))
}

/// GET /edit-profile (behind require_session)
pub async fn get_edit_profile(Extension(session): Extension<CurrentSession>) -> Html<String> {
    Html(views::edit_profile_page(&session, None))
}

/// POST /edit-profile (behind require_session)
pub async fn post_edit_profile<R>(
    State(state): State<AuthAppState<R>>,
    Extension(session): Extension<CurrentSession>,
    mut multipart: Multipart,
) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let submission = match collect_profile(&mut multipart, &state.uploads).await {
        Ok(submission) => submission,
        Err(e) => return render_profile_error(&session, e),
    };

    let use_case = UpdateProfileUseCase::new(state.repo.clone(), state.repo.clone());

    let input = UpdateProfileInput {
        session_id: session.session_id,
        user_id: session.user_id,
        username: submission.username,
        email: submission.email,
        new_picture_path: submission.new_picture_path,
    };

    match use_case.execute(input).await {
        Ok(_) => Redirect::to("/dashboard").into_response(),
        Err(e) => render_profile_error(&session, e),
    }
}

fn render_profile_error(session: &CurrentSession, e: AuthError) -> Response {
    e.log();
    (
        e.status_code(),
        Html(views::edit_profile_page(session, Some(&e.user_message()))),
    )
        .into_response()
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn resolve_session<R>(
    state: &AuthAppState<R>,
    headers: &HeaderMap,
) -> Option<CurrentSession>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(headers, &state.config.cookie.name)?;
    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
    use_case
        .execute(&token)
        .await
        .ok()
        .map(CurrentSession::from)
}

async fn collect_register(
    multipart: &mut Multipart,
    uploads: &UploadStore,
) -> AuthResult<RegisterSubmission> {
    let mut form = RegisterSubmission::default();

    while let Some(field) = next_field(multipart).await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "username" => form.username = field_text(field).await?,
            "email" => form.email = field_text(field).await?,
            "password" => form.password = field_text(field).await?,
            "confirm_password" => form.confirm_password = field_text(field).await?,
            "profile_pic" => form.profile_picture_path = store_upload(field, uploads).await?,
            _ => {}
        }
    }

    Ok(form)
}

async fn collect_profile(
    multipart: &mut Multipart,
    uploads: &UploadStore,
) -> AuthResult<ProfileSubmission> {
    let mut form = ProfileSubmission::default();

    while let Some(field) = next_field(multipart).await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "username" => form.username = field_text(field).await?,
            "email" => form.email = field_text(field).await?,
            "profile_pic" => form.new_picture_path = store_upload(field, uploads).await?,
            _ => {}
        }
    }

    Ok(form)
}

async fn next_field<'a>(
    multipart: &'a mut Multipart,
) -> AuthResult<Option<axum::extract::multipart::Field<'a>>> {
    multipart
        .next_field()
        .await
        .map_err(|e| AuthError::Validation(format!("Invalid form data: {e}")))
}

async fn field_text(field: axum::extract::multipart::Field<'_>) -> AuthResult<String> {
    field
        .text()
        .await
        .map_err(|e| AuthError::Validation(format!("Invalid form data: {e}")))
}

/// Store an uploaded file field, skipping empty file inputs
async fn store_upload(
    field: axum::extract::multipart::Field<'_>,
    uploads: &UploadStore,
) -> AuthResult<Option<String>> {
    let file_name = field.file_name().unwrap_or_default().to_string();

    let bytes = field
        .bytes()
        .await
        .map_err(|e| AuthError::Validation(format!("Invalid form data: {e}")))?;

    // Browsers submit an empty part when no file was chosen
    if file_name.is_empty() || bytes.is_empty() {
        return Ok(None);
    }

    let stored = uploads
        .store(&file_name, &bytes)
        .await
        .map_err(|e| AuthError::Internal(format!("Upload failed: {e}")))?;

    Ok(Some(stored.public_path))
}
