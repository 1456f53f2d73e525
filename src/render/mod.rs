//! Query-and-render pipeline for scatter plots.
//!
//! - [`GraphQuery`] — Raw `/graph` query parameters
//! - [`Plot`] — A request validated against the [`Snapshot`](crate::Snapshot)
//! - [`Source`] — Fetches the two projected columns of a table
//! - [`Axis`] — Null-to-zero substitution and numeric/categorical coordinates
//! - [`scatter`] — Draws and PNG-encodes the chart
pub mod axis;
pub mod request;
pub mod scatter;
pub mod source;

pub use axis::*;
pub use request::*;
pub use source::*;
