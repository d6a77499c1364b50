//! List Notes Use Case

use std::sync::Arc;

use auth::models::UserId;

use crate::domain::entities::Note;
use crate::domain::repository::NoteRepository;
use crate::error::NoteResult;

/// List notes use case
pub struct ListNotesUseCase<R>
where
    R: NoteRepository,
{
    note_repo: Arc<R>,
}

impl<R> ListNotesUseCase<R>
where
    R: NoteRepository,
{
    pub fn new(note_repo: Arc<R>) -> Self {
        Self { note_repo }
    }

    /// The owner's notes, newest first
    pub async fn execute(&self, owner_id: &UserId) -> NoteResult<Vec<Note>> {
        self.note_repo.list_for_owner(owner_id).await
    }
}
