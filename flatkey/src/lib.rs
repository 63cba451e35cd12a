//! # flatkey
//!
//! Core traits shared by the flatkey crates.
//!
//! ## Overview
//!
//! Two conversion seams are defined here:
//!
//! ```text
//! raw query string → Values → typed record     (Decoder)
//! raw field text   → domain value, in place    (DecodeText)
//! ```
//!
//! `Decoder` converts a whole source representation into a destination type.
//! `DecodeText` is the per-field hook: a value type that knows its own textual
//! grammar (a timestamp, a language tag) implements it, and generic decoders
//! hand the raw text to it instead of coercing it as a primitive.
//!
//! ## Example
//!
//! ```ignore
//! use flatkey::decoder::Decoder;
//! use httputil::query::Values;
//!
//! let values = Values::parse("limit=15&q=foo");
//! let params: ListParams = values.decode()?;
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod text;

pub use text::DecodeText;
