//! HTTP middleware for request processing.
//!
//! Provides request logging and tracing.

pub mod access_log;
pub mod tracing;
