//! Custom text decoding capability.
//!
//! A type implementing [`DecodeText`] owns its textual grammar. Generic
//! decoders detect the capability statically and hand the raw field text to
//! it instead of attempting primitive coercion.

use std::error::Error as StdError;

/// Decode a value from its raw textual form, in place.
///
/// The receiver is already allocated storage (typically a default value);
/// on success it is overwritten with the decoded value. On failure the
/// receiver may be left unchanged.
///
/// ```
/// use flatkey::DecodeText;
///
/// #[derive(Default)]
/// struct Celsius(f64);
///
/// #[derive(Debug)]
/// struct BadTemperature;
///
/// impl std::fmt::Display for BadTemperature {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "expected a value like `21.5C`")
///     }
/// }
///
/// impl std::error::Error for BadTemperature {}
///
/// impl DecodeText for Celsius {
///     type Error = BadTemperature;
///
///     fn decode_text(&mut self, text: &str) -> Result<(), Self::Error> {
///         let n = text.strip_suffix('C').ok_or(BadTemperature)?;
///         self.0 = n.parse().map_err(|_| BadTemperature)?;
///         Ok(())
///     }
/// }
///
/// let mut t = Celsius::default();
/// t.decode_text("21.5C").unwrap();
/// assert_eq!(t.0, 21.5);
/// assert!(t.decode_text("21.5").is_err());
/// ```
pub trait DecodeText {
    /// The error returned when `text` does not follow the type's grammar.
    type Error: StdError + Send + Sync + 'static;

    /// Parses `text` and stores the result in `self`.
    fn decode_text(&mut self, text: &str) -> Result<(), Self::Error>;
}
