// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the codec and its tools.
//!
//! Three failure classes, deliberately kept apart:
//!
//! - [`Error::Format`]: the *input files* are wrong. Malformed dictionary,
//!   unsupported collection extension, unknown codec name. Fatal.
//! - [`Error::CorruptStream`]: the *encoded data* is wrong. Truncated
//!   stream, out-of-range codeword, length mismatch. Fatal for a production
//!   decode; the check tool accumulates these per sequence instead.
//! - [`Error::InternalInvariant`]: the *calling code* is wrong. An encoder
//!   precondition was violated. Never a data-quality issue, always a bug in
//!   the pipeline feeding the codec.

use std::fmt;
use std::io;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for encoding, decoding, and the surrounding tools.
#[derive(Debug)]
pub enum Error {
    /// Malformed dictionary file, collection file, or codec name.
    Format(String),
    /// Encoded stream is truncated or internally inconsistent.
    CorruptStream(String),
    /// A caller-side precondition was violated; indicates a bug, not bad data.
    InternalInvariant(String),
    /// I/O error from an underlying file operation.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Format(msg) => write!(f, "format error: {}", msg),
            Error::CorruptStream(msg) => write!(f, "corrupt stream: {}", msg),
            Error::InternalInvariant(msg) => write!(f, "internal invariant violated: {}", msg),
            Error::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl Error {
    /// True for stream-level corruption (the class the check tool tallies
    /// per sequence rather than aborting on).
    pub fn is_corrupt_stream(&self) -> bool {
        matches!(self, Error::CorruptStream(_))
    }
}
