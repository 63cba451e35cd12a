//! Field-descriptor tables for decodable records.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use flatkey::decoder::DecodableFrom;

use super::Values;
use super::indirect::{Indirect, Resolved};
use super::tag::{TagOptions, parse_tag};
use crate::error::{Error, Result};

const REQUIRED: &str = "required";

/// A record that can be decoded from a flat key/value set.
///
/// Implementors register their fields, in declaration order, with an
/// annotation of the form `"<key>[,<option>...]"`. The only recognised option
/// is `required`; unknown options are ignored.
///
/// ```
/// use flatkey::decoder::DecodableFrom;
/// use httputil::query::{FromQuery, Schema, Values, decode_into};
///
/// #[derive(Debug, Default)]
/// struct Page {
///     limit: u32,
///     cursor: Option<String>,
/// }
///
/// impl DecodableFrom<Values> for Page {}
///
/// impl FromQuery for Page {
///     fn describe(schema: &mut Schema<Self>) {
///         schema
///             .field("limit,required", |p| &mut p.limit)
///             .field("cursor", |p| &mut p.cursor);
///     }
/// }
///
/// let mut page = Page::default();
/// decode_into(&Values::parse("limit=20&cursor=abc"), &mut page).unwrap();
/// assert_eq!(20, page.limit);
/// assert_eq!(Some("abc".to_string()), page.cursor);
/// ```
pub trait FromQuery: DecodableFrom<Values> + Sized + 'static {
    /// Registers the decodable fields of `Self`.
    fn describe(schema: &mut Schema<Self>);
}

/// Type-erased access to one field's storage.
trait Accessor<T> {
    fn resolve<'a>(&self, target: &'a mut T) -> Resolved<'a>;
}

struct FieldAccessor<T, F, M> {
    get: fn(&mut T) -> &mut F,
    _marker: PhantomData<fn() -> M>,
}

impl<T, F, M> Accessor<T> for FieldAccessor<T, F, M>
where
    F: Indirect<M> + 'static,
{
    fn resolve<'a>(&self, target: &'a mut T) -> Resolved<'a> {
        (self.get)(target).resolve()
    }
}

/// One registered field.
pub struct Field<T> {
    key: &'static str,
    options: TagOptions<'static>,
    accessor: Box<dyn Accessor<T>>,
}

impl<T> Field<T> {
    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn options(&self) -> TagOptions<'static> {
        self.options
    }

    pub fn is_required(&self) -> bool {
        self.options.contains(REQUIRED)
    }

    pub(crate) fn resolve<'a>(&self, target: &'a mut T) -> Resolved<'a> {
        self.accessor.resolve(target)
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("key", &self.key)
            .field("options", &self.options)
            .finish()
    }
}

/// Ordered field-descriptor table of a record type.
pub struct Schema<T> {
    fields: Vec<Field<T>>,
    invalid: Option<String>,
}

impl<T: FromQuery> Schema<T> {
    /// Builds the table registered by `T::describe`.
    pub fn of() -> Self {
        let mut schema = Schema {
            fields: Vec::new(),
            invalid: None,
        };
        T::describe(&mut schema);
        schema
    }

    /// Registers a field.
    ///
    /// `get` returns the field's storage; its type may be a primitive, a
    /// [`DecodeText`](flatkey::DecodeText) type, or any chain of `Option`
    /// and `Box` around either. A field with an empty key is kept in the
    /// table but never decoded. Registering a key twice replaces the earlier
    /// field.
    pub fn field<F, M>(&mut self, annotation: &'static str, get: fn(&mut T) -> &mut F) -> &mut Self
    where
        F: Indirect<M> + 'static,
        M: 'static,
    {
        let (key, options) = parse_tag(annotation);
        if key.is_empty() && options.contains(REQUIRED) && self.invalid.is_none() {
            self.invalid = Some(format!("field annotation {annotation:?} is required but has no key"));
        }
        if !key.is_empty() {
            self.fields.retain(|field| field.key != key);
        }
        self.fields.push(Field {
            key,
            options,
            accessor: Box::new(FieldAccessor {
                get,
                _marker: PhantomData,
            }),
        });
        self
    }

    pub fn fields(&self) -> &[Field<T>] {
        &self.fields
    }

    /// Fails with [`Error::InvalidTarget`] if a registration was malformed.
    pub fn validate(&self) -> Result<()> {
        match &self.invalid {
            Some(reason) => Err(Error::InvalidTarget {
                target: type_name::<T>(),
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("fields", &self.fields)
            .field("invalid", &self.invalid)
            .finish()
    }
}
