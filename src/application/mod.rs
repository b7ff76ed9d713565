//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls
//! and URL validation. Services consume repository traits and provide a clean
//! API for HTTP handlers.
//!
//! # Modules
//!
//! - [`services::mapping_service::MappingService`] - Create-or-find and resolve
//! - [`validator`] - DNS-based URL validity check

pub mod services;
pub mod validator;
