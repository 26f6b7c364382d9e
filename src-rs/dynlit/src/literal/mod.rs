//! The literal value engine: construction, coercion, and memoization.

mod convert;
mod input;
mod kind;

pub use self::input::Input;
pub use self::kind::Kind;

use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::error::{InvalidKindError, SharedError};

/// The stored representation of a literal. Exactly one variant is active
/// for the lifetime of the value.
#[derive(Debug, Clone)]
enum Raw {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Error(SharedError),
}

/// An immutable, dynamically typed literal value.
///
/// A literal stores exactly one of five representations (integer, float,
/// string, boolean, error) and answers coercion probes into the other
/// kinds on demand. Successful and failed conversions alike are memoized
/// per instance, so repeated probes never re-parse; the memo cells are
/// single-assignment, which keeps a shared literal safe to probe from
/// multiple threads.
///
/// # Examples
///
/// ```rust
/// use dynlit::Literal;
///
/// let price = Literal::from("6.0");
/// assert_eq!(price.as_int(), Some(6));
/// assert_eq!(price.as_float(), Some(6.0));
/// assert_eq!(price.as_bool(), None);
/// assert_eq!(price.to_string(), "6.0");
/// ```
#[derive(Debug, Clone)]
pub struct Literal {
    raw: Raw,
    int_slot: OnceLock<Option<i64>>,
    float_slot: OnceLock<Option<f64>>,
    bool_slot: OnceLock<Option<bool>>,
}

impl Literal {
    /// Creates a literal from a classified input.
    ///
    /// Signed integers, floats, booleans, strings, and error payloads are
    /// stored verbatim (floats widened exactly to 64 bits); unsigned
    /// integers are normalized to `i64`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKindError`] when an unsigned value exceeds
    /// `i64::MAX`. The error itself converts into an error-kind literal
    /// via `Literal::from`, for callers that want the inert value instead
    /// of the failure.
    pub fn new(value: impl Into<Input>) -> Result<Self, InvalidKindError> {
        match value.into() {
            Input::Int(value) => Ok(Self::from_raw(Raw::Int(value))),
            Input::Uint(value) => i64::try_from(value)
                .map(|value| Self::from_raw(Raw::Int(value)))
                .map_err(|_| InvalidKindError::new("u64")),
            Input::Float(value) => Ok(Self::from_raw(Raw::Float(value))),
            Input::Bool(value) => Ok(Self::from_raw(Raw::Bool(value))),
            Input::String(value) => Ok(Self::from_raw(Raw::String(value))),
            Input::Error(error) => Ok(Self::from_raw(Raw::Error(error))),
        }
    }

    /// Creates a literal from a classified input, aborting on failure.
    ///
    /// Reserve this for inputs that are valid by construction; untrusted
    /// input belongs with [`Literal::new`].
    ///
    /// # Panics
    ///
    /// Panics with the construction error's display text when
    /// [`Literal::new`] would report an error.
    #[must_use]
    pub fn must_new(value: impl Into<Input>) -> Self {
        match Self::new(value) {
            Ok(literal) => literal,
            Err(error) => panic!("{error}"),
        }
    }

    /// Wraps an error value as an error-kind literal.
    ///
    /// The literal renders as the error's display text and fails every
    /// coercion probe.
    #[must_use]
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_raw(Raw::Error(Arc::new(error)))
    }

    /// Returns the variant tag fixed at construction.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match &self.raw {
            Raw::Int(_) => Kind::Int,
            Raw::Float(_) => Kind::Float,
            Raw::String(_) => Kind::String,
            Raw::Bool(_) => Kind::Bool,
            Raw::Error(_) => Kind::Error,
        }
    }

    /// Converts the literal to a 64-bit signed integer.
    ///
    /// Integer literals convert verbatim. Floats convert only when they
    /// have no fractional component and fit the signed 64-bit range.
    /// Strings convert under the strict integer grammar — `"6"`, `"6.0"`,
    /// and `"6."` succeed while `"6.6"` and `".0"` fail — and values
    /// outside the `i64` range are rejected rather than wrapped. Booleans
    /// and errors never convert.
    ///
    /// The result is memoized on first call.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        *self.int_slot.get_or_init(|| match &self.raw {
            Raw::Int(value) => Some(*value),
            Raw::Float(value) => convert::int_from_float(*value),
            Raw::String(text) => convert::int_from_str(text),
            Raw::Bool(_) | Raw::Error(_) => None,
        })
    }

    /// Converts the literal to a double-precision float.
    ///
    /// Integer literals widen (with standard rounding beyond 2^53), floats
    /// convert verbatim, and strings convert whenever they parse under
    /// `f64`'s standard grammar. Booleans and errors never convert.
    ///
    /// The result is memoized on first call.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        *self.float_slot.get_or_init(|| match &self.raw {
            #[expect(
                clippy::cast_precision_loss,
                reason = "widening with standard rounding is the conversion rule"
            )]
            Raw::Int(value) => Some(*value as f64),
            Raw::Float(value) => Some(*value),
            Raw::String(text) => convert::float_from_str(text),
            Raw::Bool(_) | Raw::Error(_) => None,
        })
    }

    /// Converts the literal to a boolean.
    ///
    /// Booleans convert verbatim. Integers and floats convert only from
    /// the unambiguous 0 and 1 (so `2` fails, distinct from `0`
    /// succeeding with `false`). Strings convert by ASCII-case-insensitive
    /// match against `true`/`t`/`1` and `false`/`f`/`0`. Errors never
    /// convert.
    ///
    /// The result is memoized on first call.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        *self.bool_slot.get_or_init(|| match &self.raw {
            Raw::Int(value) => convert::bool_from_int(*value),
            Raw::Float(value) => convert::int_from_float(*value).and_then(convert::bool_from_int),
            Raw::String(text) => convert::bool_from_str(text),
            Raw::Bool(value) => Some(*value),
            Raw::Error(_) => None,
        })
    }

    /// Returns the stored error for error-kind literals.
    ///
    /// Every other kind reports `None`; the probe never parses or coerces.
    #[must_use]
    pub fn err(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match &self.raw {
            Raw::Error(error) => Some(error.as_ref()),
            Raw::Int(_) | Raw::Float(_) | Raw::String(_) | Raw::Bool(_) => None,
        }
    }

    const fn from_raw(raw: Raw) -> Self {
        Self {
            raw,
            int_slot: OnceLock::new(),
            float_slot: OnceLock::new(),
            bool_slot: OnceLock::new(),
        }
    }
}

impl fmt::Display for Literal {
    /// Renders the canonical text of the literal: base-10 digits for
    /// integers, the shortest round-trippable decimal for floats, verbatim
    /// text for strings, `true`/`false` for booleans, and the display text
    /// of the stored error.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            Raw::Int(value) => write!(f, "{value}"),
            Raw::Float(value) => write!(f, "{value}"),
            Raw::String(text) => f.write_str(text),
            Raw::Bool(value) => write!(f, "{value}"),
            Raw::Error(error) => write!(f, "{error}"),
        }
    }
}

impl From<i8> for Literal {
    fn from(value: i8) -> Self {
        Self::from_raw(Raw::Int(i64::from(value)))
    }
}

impl From<i16> for Literal {
    fn from(value: i16) -> Self {
        Self::from_raw(Raw::Int(i64::from(value)))
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::from_raw(Raw::Int(i64::from(value)))
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::from_raw(Raw::Int(value))
    }
}

impl From<u8> for Literal {
    fn from(value: u8) -> Self {
        Self::from_raw(Raw::Int(i64::from(value)))
    }
}

impl From<u16> for Literal {
    fn from(value: u16) -> Self {
        Self::from_raw(Raw::Int(i64::from(value)))
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Self::from_raw(Raw::Int(i64::from(value)))
    }
}

impl From<f32> for Literal {
    /// Converts an `f32` by widening it exactly to 64 bits.
    fn from(value: f32) -> Self {
        Self::from_raw(Raw::Float(f64::from(value)))
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::from_raw(Raw::Float(value))
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::from_raw(Raw::Bool(value))
    }
}

impl From<&str> for Literal {
    /// Creates a string-kind literal holding the text verbatim; no
    /// validation or parsing happens until a coercion is requested.
    fn from(value: &str) -> Self {
        Self::from_raw(Raw::String(value.to_string()))
    }
}

impl From<String> for Literal {
    /// Creates a string-kind literal holding the text verbatim; no
    /// validation or parsing happens until a coercion is requested.
    fn from(value: String) -> Self {
        Self::from_raw(Raw::String(value))
    }
}

impl From<InvalidKindError> for Literal {
    /// Converts a construction failure into the inert error-kind literal
    /// that carries it.
    fn from(error: InvalidKindError) -> Self {
        Self::from_error(error)
    }
}
