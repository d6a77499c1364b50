//! Unit tests for the note use cases
//!
//! Use cases run against an in-memory repository so ownership scoping,
//! idempotence, and ordering are exercised without a database.

use std::sync::{Arc, Mutex};

use auth::models::UserId;
use chrono::Utc;

use crate::application::{
    CreateNoteUseCase, DeleteNoteUseCase, ListNotesUseCase, UpdateNoteUseCase,
};
use crate::domain::entities::{Note, NoteId};
use crate::domain::repository::NoteRepository;
use crate::error::{NoteError, NoteResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct MemNoteRepo {
    notes: Arc<Mutex<Vec<Note>>>,
}

impl MemNoteRepo {
    fn raw_note(&self, note_id: NoteId) -> Option<Note> {
        self.notes
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.note_id == note_id)
            .cloned()
    }
}

impl NoteRepository for MemNoteRepo {
    async fn create(&self, note: &Note) -> NoteResult<()> {
        self.notes.lock().unwrap().push(note.clone());
        Ok(())
    }

    async fn list_for_owner(&self, owner_id: &UserId) -> NoteResult<Vec<Note>> {
        let mut notes: Vec<Note> = self
            .notes
            .lock()
            .unwrap()
            .iter()
            .filter(|n| &n.user_id == owner_id)
            .cloned()
            .collect();
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notes)
    }

    async fn find_for_owner(&self, note_id: NoteId, owner_id: &UserId) -> NoteResult<Option<Note>> {
        Ok(self
            .notes
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.note_id == note_id && &n.user_id == owner_id)
            .cloned())
    }

    async fn update_for_owner(&self, note: &Note) -> NoteResult<bool> {
        let mut notes = self.notes.lock().unwrap();
        match notes
            .iter_mut()
            .find(|n| n.note_id == note.note_id && n.user_id == note.user_id)
        {
            Some(slot) => {
                *slot = note.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_for_owner(&self, note_id: NoteId, owner_id: &UserId) -> NoteResult<u64> {
        let mut notes = self.notes.lock().unwrap();
        let before = notes.len();
        notes.retain(|n| !(n.note_id == note_id && &n.user_id == owner_id));
        Ok((before - notes.len()) as u64)
    }
}

// ============================================================================
// Tests
// ============================================================================

mod create_and_list {
    use super::*;

    #[tokio::test]
    async fn roundtrip_preserves_fields_and_stamps_time() {
        let repo = Arc::new(MemNoteRepo::default());
        let owner = UserId::new();
        let before = Utc::now();

        let created = CreateNoteUseCase::new(repo.clone())
            .execute(owner, "Groceries".to_string(), "milk, eggs".to_string())
            .await
            .unwrap();

        let notes = ListNotesUseCase::new(repo.clone())
            .execute(&owner)
            .await
            .unwrap();

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].note_id, created.note_id);
        assert_eq!(notes[0].title, "Groceries");
        assert_eq!(notes[0].content, "milk, eggs");
        assert!(notes[0].created_at >= before);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let repo = Arc::new(MemNoteRepo::default());
        let owner = UserId::new();
        let create = CreateNoteUseCase::new(repo.clone());

        create
            .execute(owner, "first".to_string(), "c".to_string())
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        create
            .execute(owner, "second".to_string(), "c".to_string())
            .await
            .unwrap();

        let notes = ListNotesUseCase::new(repo.clone())
            .execute(&owner)
            .await
            .unwrap();

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "second");
        assert_eq!(notes[1].title, "first");
    }

    #[tokio::test]
    async fn create_rejects_empty_title_or_content() {
        let repo = Arc::new(MemNoteRepo::default());
        let owner = UserId::new();
        let create = CreateNoteUseCase::new(repo.clone());

        let result = create.execute(owner, "".to_string(), "c".to_string()).await;
        assert!(matches!(result, Err(NoteError::Validation(_))));

        let result = create.execute(owner, "t".to_string(), "   ".to_string()).await;
        assert!(matches!(result, Err(NoteError::Validation(_))));

        assert!(
            ListNotesUseCase::new(repo.clone())
                .execute(&owner)
                .await
                .unwrap()
                .is_empty()
        );
    }
}

mod ownership {
    use super::*;

    #[tokio::test]
    async fn foreign_notes_are_invisible() {
        let repo = Arc::new(MemNoteRepo::default());
        let alice = UserId::new();
        let bob = UserId::new();

        CreateNoteUseCase::new(repo.clone())
            .execute(alice, "private".to_string(), "alice only".to_string())
            .await
            .unwrap();

        let bobs_view = ListNotesUseCase::new(repo.clone())
            .execute(&bob)
            .await
            .unwrap();
        assert!(bobs_view.is_empty());
    }

    #[tokio::test]
    async fn foreign_update_is_a_silent_noop() {
        let repo = Arc::new(MemNoteRepo::default());
        let alice = UserId::new();
        let bob = UserId::new();

        let note = CreateNoteUseCase::new(repo.clone())
            .execute(alice, "private".to_string(), "alice only".to_string())
            .await
            .unwrap();

        // Bob "updates" Alice's note: success-shaped outcome, no effect
        let outcome = UpdateNoteUseCase::new(repo.clone())
            .execute(bob, note.note_id, "stolen".to_string(), "hacked".to_string())
            .await
            .unwrap();
        assert!(outcome.is_none());

        let unchanged = repo.raw_note(note.note_id).unwrap();
        assert_eq!(unchanged.title, "private");
        assert_eq!(unchanged.content, "alice only");
    }

    #[tokio::test]
    async fn foreign_delete_is_a_noop() {
        let repo = Arc::new(MemNoteRepo::default());
        let alice = UserId::new();
        let bob = UserId::new();

        let note = CreateNoteUseCase::new(repo.clone())
            .execute(alice, "private".to_string(), "alice only".to_string())
            .await
            .unwrap();

        let deleted = DeleteNoteUseCase::new(repo.clone())
            .execute(bob, note.note_id)
            .await
            .unwrap();
        assert_eq!(deleted, 0);
        assert!(repo.raw_note(note.note_id).is_some());
    }
}

mod update_and_delete {
    use super::*;

    #[tokio::test]
    async fn owner_update_applies() {
        let repo = Arc::new(MemNoteRepo::default());
        let owner = UserId::new();

        let note = CreateNoteUseCase::new(repo.clone())
            .execute(owner, "t".to_string(), "c".to_string())
            .await
            .unwrap();

        let updated = UpdateNoteUseCase::new(repo.clone())
            .execute(owner, note.note_id, "t2".to_string(), "c2".to_string())
            .await
            .unwrap()
            .expect("owner update should match");

        assert_eq!(updated.title, "t2");

        let stored = repo.raw_note(note.note_id).unwrap();
        assert_eq!(stored.title, "t2");
        assert_eq!(stored.content, "c2");
    }

    #[tokio::test]
    async fn update_rejects_empty_fields() {
        let repo = Arc::new(MemNoteRepo::default());
        let owner = UserId::new();

        let note = CreateNoteUseCase::new(repo.clone())
            .execute(owner, "t".to_string(), "c".to_string())
            .await
            .unwrap();

        let result = UpdateNoteUseCase::new(repo.clone())
            .execute(owner, note.note_id, "".to_string(), "c2".to_string())
            .await;
        assert!(matches!(result, Err(NoteError::Validation(_))));
    }

    #[tokio::test]
    async fn delete_twice_is_idempotent() {
        let repo = Arc::new(MemNoteRepo::default());
        let owner = UserId::new();

        let note = CreateNoteUseCase::new(repo.clone())
            .execute(owner, "t".to_string(), "c".to_string())
            .await
            .unwrap();

        let delete = DeleteNoteUseCase::new(repo.clone());

        let first = delete.execute(owner, note.note_id).await.unwrap();
        assert_eq!(first, 1);

        // Same outcome shape both times, no error
        let second = delete.execute(owner, note.note_id).await.unwrap();
        assert_eq!(second, 0);

        // Deleting a never-existing id is also a no-op
        let missing = delete.execute(owner, NoteId::new()).await.unwrap();
        assert_eq!(missing, 0);
    }
}
