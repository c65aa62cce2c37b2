//! Document types.
//!
//! This module defines the shapes documents take on their way to and from
//! the server. The operations themselves are methods on
//! [`Database`](crate::Database).

mod auditable;
mod types;

pub use auditable::{Auditable, Revisioned};
pub use types::{DocumentPage, DocumentUpdate, parse};
