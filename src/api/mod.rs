//! HTTP API Module
//!
//! Assembles the public surface of the service.
//!
//! ## Core Concepts
//! - **Routing**: [`router::router`] wires every resource route to its
//!   handler and injects the shared stores as extensions.
//! - **Boundary**: [`extract::ApiJson`] and [`extract::ApiQuery`] reject
//!   malformed bodies and query strings with `422` and a `{"detail": ...}`
//!   payload before any handler runs.

pub mod extract;
pub mod router;
