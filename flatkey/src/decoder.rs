//! Whole-value conversions from a source representation into a record.
//!
//! A source type (for example a parsed query string) implements
//! [`Decoder`] once per destination it can produce. The destination opts in
//! with [`DecodableFrom`], so a decode call against a record that never
//! declared the source fails to type-check instead of failing at runtime.
//!
//! ```no_run
//! use flatkey::decoder::{DecodableFrom, Decoder};
//!
//! struct Pairs(Vec<(String, String)>);
//! struct FirstKey(String);
//!
//! #[derive(Debug)]
//! struct Empty;
//!
//! impl DecodableFrom<Pairs> for FirstKey {}
//!
//! impl Decoder<Pairs, FirstKey> for Pairs {
//!     type Error = Empty;
//!
//!     fn decode(&self) -> Result<FirstKey, Self::Error> {
//!         self.0.first().map(|(k, _)| FirstKey(k.clone())).ok_or(Empty)
//!     }
//! }
//!
//! let pairs = Pairs(vec![("limit".into(), "15".into())]);
//! let first: FirstKey = pairs.decode().unwrap();
//! assert_eq!("limit", first.0);
//! ```

/// Produces a `D` from `self`, where `self` is the source representation `T`.
///
/// The source is borrowed, so one parsed input can be decoded into several
/// records.
pub trait Decoder<T, D: DecodableFrom<T>> {
    type Error;

    /// # Errors
    ///
    /// Implementation defined; query decoding reports the first field that
    /// is missing or malformed.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Declares that `Self` may be produced from a `T`.
pub trait DecodableFrom<T> {}
