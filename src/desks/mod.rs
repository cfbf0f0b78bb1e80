//! Desk Resource Module
//!
//! CRUD surface for standalone desk records.
//!
//! ## Core Concepts
//! - **Records**: [`types::Desk`] carries a UUID, a label, a handedness
//!   setting and server-managed timestamps.
//! - **Embedding**: Classrooms hold [`types::EmbeddedDesk`] copies, which are
//!   independent of this module's store.
//! - **Handlers**: One `handle_*` per route, all backed by the shared
//!   [`crate::storage::memory::ResourceStore`].

pub mod handlers;
pub mod types;
