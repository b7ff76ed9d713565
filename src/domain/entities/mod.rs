//! Core domain entities.
//!
//! The service has a single entity, [`Mapping`], plus its insert payload
//! [`NewMapping`].

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
