//! Schema catalog.
//!
//! The set of tables and columns the service knows about, reflected
//! once from the live database before any traffic is accepted.
//!
//! - [`Snapshot`] — Immutable table → columns mapping
//! - [`Catalog`] — Reflection of a [`Snapshot`] from PostgreSQL
pub mod reflect;
pub mod snapshot;

pub use reflect::*;
pub use snapshot::*;
