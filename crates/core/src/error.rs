//! Error types for binconv.
//!
//! All conversions return structured errors rather than panicking.
//! Errors abort the whole call: no partial output is ever returned.

use thiserror::Error;

/// Top-level error type for all conversions.
///
/// Each variant corresponds to a specific failure domain:
/// - Parameters: byte length / group width validation
/// - Encoding: values the encoder cannot represent
/// - Delimiters: unknown names or broken removal patterns
/// - Decoding: groups that cannot be turned into values
#[derive(Debug, Error)]
pub enum Error {
    /// Byte length (or group width) is not a positive integer
    #[error("{0}")]
    InvalidParameter(String),

    /// A value handed to the encoder has no binary-digit representation
    #[error("invalid input at index {index}: {value} is negative")]
    InvalidInput { index: usize, value: i64 },

    /// Delimiter name is not in the delimiter table
    #[error("unknown delimiter: {0:?}")]
    UnknownDelimiter(String),

    /// Delimiter removal pattern failed to compile
    #[error("delimiter pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Binary digits of a group do not fit in an i64
    #[error("group {group:?} at offset {offset} overflows a 64-bit value")]
    GroupOverflow { offset: usize, group: String },

    /// Group contains no binary digits (strict decoding only)
    #[error("malformed group {group:?} at offset {offset}")]
    MalformedGroup { offset: usize, group: String },

    /// Decoded value does not fit in a byte (strict decoding only)
    #[error("value {value} at offset {offset} is outside 0..=255")]
    ValueOutOfRange { offset: usize, value: i64 },
}

impl Error {
    /// The error every byte length / width check reports.
    pub(crate) fn byte_length() -> Self {
        Error::InvalidParameter("Byte length must be a positive integer".to_string())
    }
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
