#![forbid(unsafe_code)]

//! Adapter error type.

use std::fmt;

/// Errors surfaced by the adapter control surface.
///
/// This is deliberately small: malformed replacement lists and stale indices
/// are expected occurrences (windows shift under scroll) and are swallowed
/// as no-ops. Only an index that is not an index at all is reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdapterError {
    /// The index handed to `apply_updates` is not an integral value.
    InvalidIndex(f64),
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex(value) => {
                write!(f, "apply_updates: {value} is not a valid index")
            }
        }
    }
}

impl std::error::Error for AdapterError {}
