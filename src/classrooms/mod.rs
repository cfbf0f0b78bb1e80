//! Classroom Resource Module
//!
//! CRUD surface for classroom records and the desks embedded in them.
//!
//! ## Core Concepts
//! - **Records**: [`types::Classroom`] couples room/building/university fields
//!   with a list of embedded desks and server-managed timestamps.
//! - **Ownership**: Embedded desks are copies owned by the classroom. They
//!   never reference the standalone desk store, and edits on one side leave
//!   the other side untouched.
//! - **Nullable fields**: `university` can be set, cleared with an explicit
//!   `null`, or left alone by omitting it from a patch.

pub mod handlers;
pub mod types;
