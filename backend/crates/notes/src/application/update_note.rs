//! Update Note Use Case
//!
//! Editing a note the caller does not own (or that does not exist) is a
//! silent no-op: the caller still sees the success outcome. Documented
//! behavior, preserved as-is.

use std::sync::Arc;

use auth::models::UserId;

use crate::domain::entities::{Note, NoteId};
use crate::domain::repository::NoteRepository;
use crate::error::{NoteError, NoteResult};

/// Update note use case
pub struct UpdateNoteUseCase<R>
where
    R: NoteRepository,
{
    note_repo: Arc<R>,
}

impl<R> UpdateNoteUseCase<R>
where
    R: NoteRepository,
{
    pub fn new(note_repo: Arc<R>) -> Self {
        Self { note_repo }
    }

    /// Returns `None` when `(note_id, owner_id)` matched nothing
    pub async fn execute(
        &self,
        owner_id: UserId,
        note_id: NoteId,
        title: String,
        content: String,
    ) -> NoteResult<Option<Note>> {
        let title = title.trim().to_string();
        let content = content.trim().to_string();

        if title.is_empty() || content.is_empty() {
            return Err(NoteError::Validation(
                "Title and content are required.".to_string(),
            ));
        }

        let Some(mut note) = self.note_repo.find_for_owner(note_id, &owner_id).await? else {
            tracing::debug!(note_id = %note_id, user_id = %owner_id, "Update skipped, no owned match");
            return Ok(None);
        };

        note.edit(title, content);
        self.note_repo.update_for_owner(&note).await?;

        tracing::info!(note_id = %note.note_id, user_id = %owner_id, "Note updated");

        Ok(Some(note))
    }
}
