//! # jf-core
//!
//! Error types and the `ensure!` convenience macro shared across the
//! jours-feries workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` macro.
pub mod errors;

pub use errors::{Error, Result};
