//! Delete Note Use Case
//!
//! Idempotent: deleting a missing or non-owned note is a no-op.

use std::sync::Arc;

use auth::models::UserId;

use crate::domain::entities::NoteId;
use crate::domain::repository::NoteRepository;
use crate::error::NoteResult;

/// Delete note use case
pub struct DeleteNoteUseCase<R>
where
    R: NoteRepository,
{
    note_repo: Arc<R>,
}

impl<R> DeleteNoteUseCase<R>
where
    R: NoteRepository,
{
    pub fn new(note_repo: Arc<R>) -> Self {
        Self { note_repo }
    }

    /// Returns how many rows were removed (0 or 1)
    pub async fn execute(&self, owner_id: UserId, note_id: NoteId) -> NoteResult<u64> {
        let deleted = self.note_repo.delete_for_owner(note_id, &owner_id).await?;

        if deleted > 0 {
            tracing::info!(note_id = %note_id, user_id = %owner_id, "Note deleted");
        }

        Ok(deleted)
    }
}
