//! Repository Traits
//!
//! Every operation is ownership-scoped: the owner id is part of the key,
//! so a non-owner can neither see nor touch a note through this interface.

use auth::models::UserId;

use crate::domain::entities::{Note, NoteId};
use crate::error::NoteResult;

/// Note repository trait
#[trait_variant::make(NoteRepository: Send)]
pub trait LocalNoteRepository {
    /// Persist a new note
    async fn create(&self, note: &Note) -> NoteResult<()>;

    /// All notes of one owner, newest first
    async fn list_for_owner(&self, owner_id: &UserId) -> NoteResult<Vec<Note>>;

    /// Find by `(note_id, owner_id)`; a non-owned note is simply absent
    async fn find_for_owner(&self, note_id: NoteId, owner_id: &UserId) -> NoteResult<Option<Note>>;

    /// Update by `(note_id, owner_id)`; returns false when nothing matched
    async fn update_for_owner(&self, note: &Note) -> NoteResult<bool>;

    /// Delete by `(note_id, owner_id)`; returns how many rows went away
    async fn delete_for_owner(&self, note_id: NoteId, owner_id: &UserId) -> NoteResult<u64>;
}
