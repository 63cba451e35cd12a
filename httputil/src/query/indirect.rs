//! Indirection resolution for field storage.
//!
//! A field's declared type is a chain of `Option`/`Box` layers around a leaf
//! that is either a [`Primitive`] or a [`DecodeText`] type. Resolving walks the
//! chain, allocating empty `Option` layers on the way, and stops at the first
//! layer that decodes its own text.
//!
//! Which impl applies is decided by the marker parameter `M`, inferred once
//! when the field is registered:
//!
//! ```text
//! u64                   Indirect<Coerced>
//! Utc                   Indirect<Custom>
//! Option<Utc>           Indirect<Optional<Custom>>
//! Option<Box<String>>   Indirect<Optional<Boxed<Coerced>>>
//! ```
//!
//! A leaf type that is neither primitive nor text-decodable has no impl and
//! is rejected at compile time.

use std::marker::PhantomData;

use flatkey::DecodeText;

use super::coerce::{CoerceError, Kind, Primitive, Scalar};
use crate::error::BoxError;

/// Marker: the leaf is coerced as a primitive.
pub struct Coerced;

/// Marker: the leaf decodes its own text.
pub struct Custom;

/// Marker: an `Option` layer around `M`.
pub struct Optional<M>(PhantomData<M>);

/// Marker: a `Box` layer around `M`.
pub struct Boxed<M>(PhantomData<M>);

/// Custom text decoding bound to resolved storage, with its error erased.
pub trait TextSink {
    fn decode_erased(&mut self, text: &str) -> Result<(), BoxError>;
}

impl<T: DecodeText> TextSink for T {
    fn decode_erased(&mut self, text: &str) -> Result<(), BoxError> {
        self.decode_text(text).map_err(Into::into)
    }
}

/// Primitive storage at the end of an indirection chain.
pub trait Leaf {
    fn kind(&self) -> Kind;

    fn assign(&mut self, scalar: Scalar, text: &str) -> Result<(), CoerceError>;
}

impl<P: Primitive> Leaf for P {
    fn kind(&self) -> Kind {
        P::KIND
    }

    fn assign(&mut self, scalar: Scalar, text: &str) -> Result<(), CoerceError> {
        *self = P::from_scalar(scalar, text)?;
        Ok(())
    }
}

/// Outcome of walking a field's indirection chain.
pub enum Resolved<'a> {
    /// A layer decodes its own text; deeper layers were not touched.
    Custom(&'a mut dyn TextSink),
    /// No layer decodes its own text; the primitive storage is returned.
    Leaf(&'a mut dyn Leaf),
}

/// Walks a storage location down to something that can take a raw value.
pub trait Indirect<M> {
    /// Allocates missing layers and returns the decodable storage.
    fn resolve(&mut self) -> Resolved<'_>;
}

impl<P: Primitive> Indirect<Coerced> for P {
    fn resolve(&mut self) -> Resolved<'_> {
        Resolved::Leaf(self)
    }
}

impl<T: DecodeText> Indirect<Custom> for T {
    fn resolve(&mut self) -> Resolved<'_> {
        Resolved::Custom(self)
    }
}

impl<M, S: Indirect<M> + Default> Indirect<Optional<M>> for Option<S> {
    fn resolve(&mut self) -> Resolved<'_> {
        self.get_or_insert_with(S::default).resolve()
    }
}

impl<M, S: Indirect<M>> Indirect<Boxed<M>> for Box<S> {
    fn resolve(&mut self) -> Resolved<'_> {
        (**self).resolve()
    }
}
