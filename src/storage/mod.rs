//! In-Memory Storage Module
//!
//! Implements the process-local record stores behind the API.
//!
//! ## Core Concepts
//! - **Records**: Anything stored implements [`memory::Resource`], which names the
//!   resource for error messages and exposes its identifier and timestamps.
//! - **Stores**: [`memory::ResourceStore`] keeps one record type in a concurrent
//!   map keyed by UUID. Each resource gets its own store instance.
//! - **Errors**: Failed operations surface as [`error::StoreError`] values that
//!   already know their HTTP status and client-facing message.
//!
//! Nothing here persists across restarts; the stores start empty on boot.

pub mod error;
pub mod memory;

#[cfg(test)]
mod tests;
