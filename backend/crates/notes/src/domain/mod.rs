//! Domain Layer

pub mod entities;
pub mod repository;

pub use entities::{Note, NoteId};
pub use repository::NoteRepository;
