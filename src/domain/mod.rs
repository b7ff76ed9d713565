//! Domain layer containing business entities and repository contracts.
//!
//! Nothing in here knows about HTTP, SQL, or DNS. Infrastructure implements the
//! traits declared in [`repositories`], and the application layer orchestrates them.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
