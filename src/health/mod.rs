//! Health Module
//!
//! Liveness reporting with optional echo fields for connectivity checks.

pub mod handlers;
pub mod types;
