//! Presentation Layer
//!
//! HTTP handlers, DTOs, views, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod views;

pub use handlers::AuthAppState;
pub use middleware::{
    CurrentSession, SessionLayerState, require_admin, require_authenticated,
    require_owner_or_admin, require_session,
};
pub use router::{auth_router, auth_router_generic};
