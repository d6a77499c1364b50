//! Notes Backend Module
//!
//! Per-user note CRUD, ownership-scoped end to end.
//!
//! Clean Architecture structure:
//! - `domain/` - Note entity and repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, views, router
//!
//! ## Access Model
//! - Every query and mutation is keyed by `(note_id, owner_id)`
//! - A non-owner cannot observe whether a note exists: updates and
//!   deletes against foreign notes are silent no-ops
//! - There is no admin bypass in the note paths

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{NoteError, NoteResult};
pub use infra::postgres::PgNoteRepository;
pub use presentation::router::notes_router;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgNoteRepository as NoteStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
