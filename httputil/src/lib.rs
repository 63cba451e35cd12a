//! # httputil
//!
//! Helpers for the textual parts of HTTP requests and responses:
//!
//! * [`query`] decodes a flat key/value set (the query string) into a typed
//!   record described by a field table.
//! * [`range`] parses `Content-Range` values.
//! * [`retry_after`] parses and formats `Retry-After` values.
//!
//! ## Example
//!
//! ```
//! use flatkey::decoder::DecodableFrom;
//! use httputil::query::{FromQuery, Schema, Values};
//!
//! #[derive(Debug, Default)]
//! struct ListParams {
//!     limit: u64,
//!     q: Option<String>,
//! }
//!
//! impl DecodableFrom<Values> for ListParams {}
//!
//! impl FromQuery for ListParams {
//!     fn describe(schema: &mut Schema<Self>) {
//!         schema
//!             .field("limit", |p| &mut p.limit)
//!             .field("q", |p| &mut p.q);
//!     }
//! }
//!
//! let params: ListParams = httputil::parse_query("limit=15&q=foo").unwrap();
//! assert_eq!(15, params.limit);
//! assert_eq!(Some("foo"), params.q.as_deref());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod query;
pub mod range;
mod request;
pub mod retry_after;

pub use error::{Error, Result};
pub use range::{ContentRange, parse_content_range};
pub use request::parse_query;
pub use retry_after::{format_retry_after, parse_retry_after, parse_retry_after_at};
