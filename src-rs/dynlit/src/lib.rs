//! Dynamically typed literal values.
//!
//! A [`Literal`] is an immutable value that stores exactly one of five
//! representations — 64-bit integer, double-precision float, string,
//! boolean, or error — and answers coercion probes into the other kinds on
//! demand. The coercion rules are strict (no rounding, no overflow
//! wrapping, no guessing), and every probe result is memoized so repeated
//! queries never re-parse.
//!
//! This is aimed at code that handles values of unknown origin, such as
//! rule evaluators and expression interpreters, and wants to ask "is this
//! usable as an integer?" without declaring a type up front.
//!
//! ```rust
//! use dynlit::{Kind, Literal};
//!
//! let age = Literal::must_new(29);
//! assert_eq!(age.kind(), Kind::Int);
//! assert_eq!(age.as_float(), Some(29.0));
//!
//! let flag = Literal::from("TRUE");
//! assert_eq!(flag.as_bool(), Some(true));
//! assert_eq!(flag.as_int(), None);
//! ```

mod error;
mod literal;

pub use error::{InvalidKindError, SharedError};
pub use literal::{Input, Kind, Literal};
