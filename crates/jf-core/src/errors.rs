//! Error types for the jours-feries workspace.
//!
//! A single `thiserror`-derived enum covers the two precondition failures of
//! the public API (unknown zone, negative jour-franc count) plus date
//! construction/arithmetic leaving the representable range.  "Rule does not
//! apply this year/zone" is never an error; rules return `None` instead.

use thiserror::Error;

/// The top-level error type used throughout the jours-feries workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Date-related error (construction or arithmetic out of range).
    #[error("date error: {0}")]
    Date(String),

    /// Zone name not among the 13 recognized identifiers.
    #[error("zone non valide : « {given} », les valeurs attendues sont : {expected}")]
    InvalidZone {
        /// The rejected zone name.
        given: String,
        /// Comma-separated list of the accepted names.
        expected: String,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout the jours-feries workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use jf_core::{ensure, errors::Error};
/// fn positive(x: i32) -> jf_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}
