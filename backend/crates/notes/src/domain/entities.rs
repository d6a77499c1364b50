//! Domain Entities
//!
//! A note is always owned; there is no shared or unowned state.

use auth::models::UserId;
use chrono::{DateTime, Utc};
use kernel::id::Id;

pub struct NoteMarker;
pub type NoteId = Id<NoteMarker>;

/// Note entity
#[derive(Debug, Clone)]
pub struct Note {
    pub note_id: NoteId,
    /// Owning user; every read and mutation is filtered by this
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a new note stamped with the current time
    pub fn new(owner_id: UserId, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            note_id: NoteId::new(),
            user_id: owner_id,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an edit
    pub fn edit(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
        self.updated_at = Utc::now();
    }
}
