//! PostgreSQL Repository Implementation

use auth::models::UserId;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Note, NoteId};
use crate::domain::repository::NoteRepository;
use crate::error::NoteResult;

/// PostgreSQL-backed note repository
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl NoteRepository for PgNoteRepository {
    async fn create(&self, note: &Note) -> NoteResult<()> {
        sqlx::query(
            r#"
            INSERT INTO notes (
                note_id,
                user_id,
                title,
                content,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(note.note_id.as_uuid())
        .bind(note.user_id.as_uuid())
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.created_at)
        .bind(note.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_for_owner(&self, owner_id: &UserId) -> NoteResult<Vec<Note>> {
        let rows = sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT
                note_id,
                user_id,
                title,
                content,
                created_at,
                updated_at
            FROM notes
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(NoteRow::into_note).collect())
    }

    async fn find_for_owner(&self, note_id: NoteId, owner_id: &UserId) -> NoteResult<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT
                note_id,
                user_id,
                title,
                content,
                created_at,
                updated_at
            FROM notes
            WHERE note_id = $1 AND user_id = $2
            "#,
        )
        .bind(note_id.as_uuid())
        .bind(owner_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(NoteRow::into_note))
    }

    async fn update_for_owner(&self, note: &Note) -> NoteResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE notes SET
                title = $3,
                content = $4,
                updated_at = $5
            WHERE note_id = $1 AND user_id = $2
            "#,
        )
        .bind(note.note_id.as_uuid())
        .bind(note.user_id.as_uuid())
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }

    async fn delete_for_owner(&self, note_id: NoteId, owner_id: &UserId) -> NoteResult<u64> {
        let deleted = sqlx::query("DELETE FROM notes WHERE note_id = $1 AND user_id = $2")
            .bind(note_id.as_uuid())
            .bind(owner_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct NoteRow {
    note_id: Uuid,
    user_id: Uuid,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NoteRow {
    fn into_note(self) -> Note {
        Note {
            note_id: NoteId::from_uuid(self.note_id),
            user_id: UserId::from_uuid(self.user_id),
            title: self.title,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
