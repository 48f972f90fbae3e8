//! Error types for property value decoding.

use thiserror::Error;

/// Main error type for decoding operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying reader failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before a declared field width was satisfied
    #[error("truncated stream: expected {expected} byte(s), got {available}")]
    TruncatedStream { expected: usize, available: usize },

    /// An automation date with a negative day or time-of-day part
    #[error("invalid automation date {raw}: negative day or time part")]
    InvalidDate { raw: f64 },

    /// A variant type code with no registered decoding rule (strict mode only)
    #[error("unsupported variant type 0x{0:04X}")]
    UnsupportedVariant(u16),
}

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, Error>;
