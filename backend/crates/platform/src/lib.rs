//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, zeroized clear text)
//! - Cookie management
//! - Upload storage with scoped acquisition and cleanup

pub mod cookie;
pub mod password;
pub mod upload;
