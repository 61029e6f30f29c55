//! Error type for the hashing engine.

use core::fmt;

/// The single error kind surfaced by fallible operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The request is malformed: wrong family for the operation, an output
    /// length that does not match a fixed-digest family, an operation on a
    /// context that was never started or is already finalized, or a framing
    /// string too long to encode.
    BadInputData,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadInputData => f.write_str("bad input data"),
        }
    }
}

impl core::error::Error for Error {}
