use std::sync::Arc;

use crate::error::{InvalidKindError, SharedError};

/// A classified construction input for [`Literal`](crate::Literal).
///
/// `Input` is the closed set of categories the constructor accepts; the
/// `From` conversions below cover every native width so call sites can
/// pass plain values. `Uint` is the only category whose normalization can
/// fail: an unsigned value exceeding `i64::MAX` is rejected as an invalid
/// kind rather than reinterpreted.
#[derive(Debug, Clone)]
pub enum Input {
    /// A signed integer, normalized to 64 bits
    Int(i64),
    /// An unsigned integer that may exceed the signed 64-bit range
    Uint(u64),
    /// A floating point value, widened to 64 bits
    Float(f64),
    /// A boolean
    Bool(bool),
    /// A text string
    String(String),
    /// An error payload
    Error(SharedError),
}

impl From<i8> for Input {
    fn from(value: i8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i16> for Input {
    fn from(value: i16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i32> for Input {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Input {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u8> for Input {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u16> for Input {
    fn from(value: u16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Input {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for Input {
    /// Converts a `u64` without range-checking it; the constructor decides
    /// whether the value fits the signed 64-bit range.
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<f32> for Input {
    /// Converts an `f32` by widening it exactly to 64 bits.
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Input {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<InvalidKindError> for Input {
    /// Converts a construction error into an error-payload input.
    fn from(error: InvalidKindError) -> Self {
        Self::Error(Arc::new(error))
    }
}
