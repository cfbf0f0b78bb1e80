//! Classroom/Desk API Library
//!
//! This library crate defines the modules that make up the demonstration
//! CRUD service. It serves as the foundation for the binary executable
//! (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of five loosely coupled subsystems:
//!
//! - **`api`**: The HTTP surface. Assembles the router and owns the boundary
//!   extractors that turn malformed input into structured `422` responses.
//! - **`classrooms`**: Classroom records, their embedded desks, and the
//!   handlers behind the `/classrooms` routes.
//! - **`desks`**: Standalone desk records and the handlers behind the
//!   `/desks` routes.
//! - **`health`**: Liveness reporting with echo fields for connectivity
//!   checks.
//! - **`storage`**: The state layer. A generic, concurrent in-memory record
//!   store (`ResourceStore`) shared by both resources.

pub mod api;
pub mod classrooms;
pub mod desks;
pub mod health;
pub mod storage;
