//! Form DTOs

use serde::Deserialize;

/// POST /notes and POST /notes/{id}/edit form body (urlencoded)
#[derive(Debug, Clone, Deserialize)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
}
