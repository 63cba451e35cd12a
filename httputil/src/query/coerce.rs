//! Primitive coercion of raw query text.

use std::fmt::{self, Display, Formatter};
use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Primitive kinds a raw value can be coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Int,
    Uint,
    Float,
    Bool,
    Str,
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Int => write!(f, "signed integer"),
            Kind::Uint => write!(f, "unsigned integer"),
            Kind::Float => write!(f, "floating point number"),
            Kind::Bool => write!(f, "boolean"),
            Kind::Str => write!(f, "string"),
        }
    }
}

/// A coerced value at its widest width.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl Scalar {
    pub fn kind(&self) -> Kind {
        match self {
            Scalar::Int(_) => Kind::Int,
            Scalar::Uint(_) => Kind::Uint,
            Scalar::Float(_) => Kind::Float,
            Scalar::Bool(_) => Kind::Bool,
            Scalar::Str(_) => Kind::Str,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoerceError {
    #[error("invalid signed integer {text:?}: {source}")]
    Int {
        text: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid unsigned integer {text:?}: {source}")]
    Uint {
        text: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid unsigned integer {text:?}: sign not allowed")]
    UintSign { text: String },
    #[error("invalid floating point number {text:?}: {source}")]
    Float {
        text: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("invalid boolean {text:?}")]
    Bool { text: String },
    #[error("{text:?} is out of range for {ty}")]
    OutOfRange { text: String, ty: &'static str },
    #[error("cannot store a {found} into a {expected} field")]
    KindMismatch { expected: Kind, found: Kind },
}

/// Coerces `text` into the primitive `kind`.
///
/// Integers are parsed in base 10 at 64-bit width. Booleans accept the
/// spellings `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn coerce(text: &str, kind: Kind) -> Result<Scalar, CoerceError> {
    match kind {
        Kind::Int => text
            .parse::<i64>()
            .map(Scalar::Int)
            .map_err(|source| CoerceError::Int {
                text: text.to_string(),
                source,
            }),
        Kind::Uint => {
            if text.starts_with('+') {
                return Err(CoerceError::UintSign {
                    text: text.to_string(),
                });
            }
            text.parse::<u64>()
                .map(Scalar::Uint)
                .map_err(|source| CoerceError::Uint {
                    text: text.to_string(),
                    source,
                })
        }
        Kind::Float => text
            .parse::<f64>()
            .map(Scalar::Float)
            .map_err(|source| CoerceError::Float {
                text: text.to_string(),
                source,
            }),
        Kind::Bool => parse_bool(text).map(Scalar::Bool),
        Kind::Str => Ok(Scalar::Str(text.to_string())),
    }
}

fn parse_bool(text: &str) -> Result<bool, CoerceError> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(CoerceError::Bool {
            text: text.to_string(),
        }),
    }
}

/// A field type the coercer can populate.
///
/// Implemented for the signed and unsigned integer types, `f32`, `f64`,
/// `bool` and `String`. Narrow types are parsed at 64-bit width and then
/// checked against their own range.
pub trait Primitive: Sized {
    const KIND: Kind;

    /// Builds the value from a scalar of kind [`Self::KIND`]. `text` is the
    /// raw input, kept for error reporting.
    fn from_scalar(scalar: Scalar, text: &str) -> Result<Self, CoerceError>;
}

fn mismatch(expected: Kind, scalar: &Scalar) -> CoerceError {
    CoerceError::KindMismatch {
        expected,
        found: scalar.kind(),
    }
}

macro_rules! impl_integer {
    ($variant:ident, $kind:expr, $($t:ty),*) => {
        $(
            impl Primitive for $t {
                const KIND: Kind = $kind;

                fn from_scalar(scalar: Scalar, text: &str) -> Result<Self, CoerceError> {
                    match scalar {
                        Scalar::$variant(n) => <$t>::try_from(n).map_err(|_| CoerceError::OutOfRange {
                            text: text.to_string(),
                            ty: stringify!($t),
                        }),
                        other => Err(mismatch(Self::KIND, &other)),
                    }
                }
            }
        )*
    };
}

impl_integer!(Int, Kind::Int, i8, i16, i32, i64, isize);
impl_integer!(Uint, Kind::Uint, u8, u16, u32, u64, usize);

impl Primitive for f64 {
    const KIND: Kind = Kind::Float;

    fn from_scalar(scalar: Scalar, _text: &str) -> Result<Self, CoerceError> {
        match scalar {
            Scalar::Float(f) => Ok(f),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

impl Primitive for f32 {
    const KIND: Kind = Kind::Float;

    fn from_scalar(scalar: Scalar, text: &str) -> Result<Self, CoerceError> {
        match scalar {
            Scalar::Float(f) if f.is_finite() && f.abs() > f32::MAX as f64 => {
                Err(CoerceError::OutOfRange {
                    text: text.to_string(),
                    ty: "f32",
                })
            }
            Scalar::Float(f) => Ok(f as f32),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

impl Primitive for bool {
    const KIND: Kind = Kind::Bool;

    fn from_scalar(scalar: Scalar, _text: &str) -> Result<Self, CoerceError> {
        match scalar {
            Scalar::Bool(b) => Ok(b),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

impl Primitive for String {
    const KIND: Kind = Kind::Str;

    fn from_scalar(scalar: Scalar, _text: &str) -> Result<Self, CoerceError> {
        match scalar {
            Scalar::Str(s) => Ok(s),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}
