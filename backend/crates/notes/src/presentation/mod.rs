//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;
pub mod views;

pub use handlers::NotesAppState;
pub use router::{notes_router, notes_router_generic};
