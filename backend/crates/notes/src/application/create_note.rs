//! Create Note Use Case

use std::sync::Arc;

use auth::models::UserId;

use crate::domain::entities::Note;
use crate::domain::repository::NoteRepository;
use crate::error::{NoteError, NoteResult};

/// Create note use case
pub struct CreateNoteUseCase<R>
where
    R: NoteRepository,
{
    note_repo: Arc<R>,
}

impl<R> CreateNoteUseCase<R>
where
    R: NoteRepository,
{
    pub fn new(note_repo: Arc<R>) -> Self {
        Self { note_repo }
    }

    pub async fn execute(
        &self,
        owner_id: UserId,
        title: String,
        content: String,
    ) -> NoteResult<Note> {
        let title = title.trim().to_string();
        let content = content.trim().to_string();

        if title.is_empty() || content.is_empty() {
            return Err(NoteError::Validation(
                "Title and content are required.".to_string(),
            ));
        }

        let note = Note::new(owner_id, title, content);
        self.note_repo.create(&note).await?;

        tracing::info!(
            note_id = %note.note_id,
            user_id = %note.user_id,
            "Note created"
        );

        Ok(note)
    }
}
