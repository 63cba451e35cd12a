//! Typed decoding of flat key/value sets such as URL query strings.
//!
//! ```text
//! "min=2027-12-20T14:00:00Z&limit=15"
//!        │ Values::parse
//!        ▼
//! Values { "limit": ["15"], "min": ["2027-12-20T14:00:00Z"] }
//!        │ decode_into / Decoder::decode, driven by T's Schema
//!        ▼
//! T { min: Utc(..), limit: 15, .. }
//! ```
//!
//! For every registered field, in order, the raw value is looked up by key.
//! Absent or empty values are skipped unless the field is `required`. Present
//! values go either to the field's own [`DecodeText`](flatkey::DecodeText)
//! implementation or to the primitive coercer. The first failure is returned
//! and fields assigned before it keep their new values.

pub mod coerce;
pub mod indirect;
pub mod schema;
pub mod tag;

use std::collections::BTreeMap;
use std::collections::btree_map;

use flatkey::decoder::Decoder;

pub use coerce::{CoerceError, Kind, Primitive, Scalar};
pub use indirect::{Indirect, Resolved};
pub use schema::{Field, FromQuery, Schema};
pub use tag::{TagOptions, parse_tag};

use crate::error::{Error, Result};

/// Flat key/value input. A key may carry several values; decoding reads the
/// first one. Keys are matched exactly, case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    inner: BTreeMap<String, Vec<String>>,
}

impl Values {
    pub fn new() -> Self {
        Values::default()
    }

    /// Parses an `application/x-www-form-urlencoded` string, such as the
    /// query component of a URL. A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn get_all(&self, key: &str) -> &[String] {
        self.inner.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Appends `value` to the values of `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.entry(key.into()).or_default().push(value.into());
    }

    /// Replaces all values of `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), vec![value.into()]);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.inner.iter()
    }

    /// Serialises back to `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.inner {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Values::new();
        for (key, value) in iter {
            values.add(key, value);
        }
        values
    }
}

/// Decodes `values` into `target` in place.
///
/// Only fields with a matching non-empty value are written; everything else
/// keeps its current value.
///
/// # Errors
///
/// * [`Error::InvalidTarget`] if `T` registered a malformed field table.
/// * [`Error::MissingField`] for the first `required` field without a value.
/// * [`Error::InvalidValue`] for the first value that fails to decode.
pub fn decode_into<T: FromQuery>(values: &Values, target: &mut T) -> Result<()> {
    let schema = Schema::<T>::of();
    schema.validate()?;

    for field in schema.fields() {
        let key = field.key();
        if key.is_empty() {
            continue;
        }

        let text = match values.get(key) {
            Some(text) if !text.is_empty() => text,
            _ if field.is_required() => {
                return Err(Error::MissingField {
                    key: key.to_string(),
                });
            }
            _ => continue,
        };

        let invalid = |source| Error::InvalidValue {
            key: key.to_string(),
            source,
        };
        match field.resolve(target) {
            Resolved::Custom(sink) => sink.decode_erased(text).map_err(invalid)?,
            Resolved::Leaf(leaf) => {
                let scalar = coerce::coerce(text, leaf.kind()).map_err(|e| invalid(e.into()))?;
                leaf.assign(scalar, text).map_err(|e| invalid(e.into()))?;
            }
        }
    }

    Ok(())
}

impl<T: FromQuery + Default> Decoder<Values, T> for Values {
    type Error = Error;

    fn decode(&self) -> Result<T> {
        let mut target = T::default();
        decode_into(self, &mut target)?;
        Ok(target)
    }
}
