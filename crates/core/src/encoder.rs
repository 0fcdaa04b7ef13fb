//! Byte values to binary-digit text.
//!
//! Each value becomes a group of '0'/'1' characters, left-padded with '0' to
//! at least `padding` digits. Groups are joined by the delimiter literal with
//! no trailing separator.
//!
//! # Padding Rules
//! - Padding is a minimum: a value wider than `padding` is emitted in full
//! - `padding = 0` emits the natural binary representation
//! - A scalar input is padded but never delimited
//!
//! # Example
//! ```
//! use binconv_core::encoder::encode;
//!
//! let text = encode(&[10i64, 20, 30][..], "Space", 8).unwrap();
//! assert_eq!(text, "00001010 00010100 00011110");
//!
//! assert_eq!(encode(5i64, "Space", 8).unwrap(), "00000101");
//! ```

use std::borrow::Cow;
use std::fmt::Write as _;

use tracing::debug;

use crate::delimiter::Delimiter;
use crate::error::{Error, Result};

/// Default group width in digits.
pub const DEFAULT_PADDING: usize = 8;

/// What the encoder was handed.
///
/// Callers holding loosely typed data (parsed text, dynamic values) map it
/// onto one of these; anything that is neither a number nor a sequence of
/// numbers is `Unsupported` and encodes to the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    /// A single value, encoded without any delimiter
    Scalar(i64),
    /// Zero or more values, joined by the delimiter
    Sequence(Cow<'a, [i64]>),
    /// Neither numeric nor sequence-like
    Unsupported,
}

impl Input<'_> {
    /// Number of values carried (a scalar counts as one).
    pub fn len(&self) -> usize {
        match self {
            Input::Scalar(_) => 1,
            Input::Sequence(values) => values.len(),
            Input::Unsupported => 0,
        }
    }

    /// True if there is nothing to encode.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The carried values, in order.
    pub fn values(&self) -> &[i64] {
        match self {
            Input::Scalar(value) => std::slice::from_ref(value),
            Input::Sequence(values) => &values[..],
            Input::Unsupported => &[],
        }
    }
}

impl From<i64> for Input<'_> {
    fn from(value: i64) -> Self {
        Input::Scalar(value)
    }
}

impl From<u8> for Input<'_> {
    fn from(value: u8) -> Self {
        Input::Scalar(value.into())
    }
}

impl<'a> From<&'a [i64]> for Input<'a> {
    fn from(values: &'a [i64]) -> Self {
        Input::Sequence(Cow::Borrowed(values))
    }
}

impl From<Vec<i64>> for Input<'_> {
    fn from(values: Vec<i64>) -> Self {
        Input::Sequence(Cow::Owned(values))
    }
}

impl From<&[u8]> for Input<'_> {
    fn from(bytes: &[u8]) -> Self {
        Input::Sequence(Cow::Owned(bytes.iter().map(|&b| i64::from(b)).collect()))
    }
}

/// Encode `input` as binary-digit text, resolving the delimiter by name.
///
/// # Errors
/// - `Error::UnknownDelimiter` if `delimiter` is not a known name
/// - `Error::InvalidInput` if any value is negative
pub fn encode<'a>(input: impl Into<Input<'a>>, delimiter: &str, padding: usize) -> Result<String> {
    let delimiter = Delimiter::from_name(delimiter)?;
    encode_with(&input.into(), delimiter, padding)
}

/// Encode `input` with an already resolved delimiter.
pub fn encode_with(input: &Input<'_>, delimiter: Delimiter, padding: usize) -> Result<String> {
    debug!(values = input.len(), %delimiter, padding, "encoding binary string");

    match input {
        Input::Scalar(value) => {
            let mut output = String::with_capacity(padding);
            push_group(&mut output, 0, *value, padding)?;
            Ok(output)
        }
        Input::Sequence(values) => join_groups(values, delimiter.literal(), padding),
        Input::Unsupported => Ok(String::new()),
    }
}

/// Encode raw bytes. Bytes are never negative, so only the join can vary.
pub fn encode_bytes(bytes: &[u8], delimiter: Delimiter, padding: usize) -> String {
    let sep = delimiter.literal();
    let mut output = String::with_capacity(bytes.len() * (padding.max(8) + sep.len()));

    for (i, &byte) in bytes.iter().enumerate() {
        if i > 0 {
            output.push_str(sep);
        }
        // Writing into a String cannot fail
        let _ = write!(output, "{:0width$b}", byte, width = padding);
    }
    output
}

/// Number of binary digits in the natural representation of `value`.
///
/// Zero still takes one digit.
pub fn natural_width(value: u64) -> usize {
    (u64::BITS - value.leading_zeros()).max(1) as usize
}

fn join_groups(values: &[i64], sep: &str, padding: usize) -> Result<String> {
    let mut output = String::with_capacity(values.len() * (padding + sep.len()));

    for (i, &value) in values.iter().enumerate() {
        if i > 0 {
            output.push_str(sep);
        }
        push_group(&mut output, i, value, padding)?;
    }
    Ok(output)
}

fn push_group(output: &mut String, index: usize, value: i64, padding: usize) -> Result<()> {
    if value < 0 {
        return Err(Error::InvalidInput { index, value });
    }
    // Writing into a String cannot fail
    let _ = write!(output, "{:0width$b}", value, width = padding);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_space() {
        let text = encode(&[10i64, 20, 30][..], "Space", 8).unwrap();
        assert_eq!(text, "00001010 00010100 00011110");
    }

    #[test]
    fn test_sequence_colon() {
        let text = encode(vec![10i64, 20, 30], "Colon", 8).unwrap();
        assert_eq!(text, "00001010:00010100:00011110");
    }

    #[test]
    fn test_scalar_has_no_delimiter() {
        assert_eq!(encode(5i64, "Space", 8).unwrap(), "00000101");
        assert_eq!(encode(5u8, "Colon", 8).unwrap(), "00000101");
    }

    #[test]
    fn test_empty_and_unsupported() {
        assert_eq!(encode(Vec::<i64>::new(), "Space", 8).unwrap(), "");
        assert_eq!(encode(Input::Unsupported, "Space", 8).unwrap(), "");
    }

    #[test]
    fn test_empty_delimiter_concatenates() {
        let text = encode(&[1i64, 2][..], "None", 4).unwrap();
        assert_eq!(text, "00010010");
    }

    #[test]
    fn test_padding_is_a_minimum() {
        assert_eq!(encode(&[300i64, 1][..], "Space", 8).unwrap(), "100101100 00000001");
        assert_eq!(encode(&[5i64][..], "Space", 2).unwrap(), "101");
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(encode(&[0i64, 5][..], "Comma", 0).unwrap(), "0,101");
    }

    #[test]
    fn test_wide_padding() {
        assert_eq!(encode(1i64, "Space", 16).unwrap(), "0000000000000001");
    }

    #[test]
    fn test_negative_rejected() {
        let err = encode(&[1i64, -2][..], "Space", 8).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { index: 1, value: -2 }));

        let err = encode(-1i64, "Space", 8).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { index: 0, value: -1 }));
    }

    #[test]
    fn test_unknown_delimiter() {
        let err = encode(&[1i64][..], "Pipe", 8).unwrap_err();
        assert!(matches!(err, Error::UnknownDelimiter(_)));
    }

    #[test]
    fn test_multichar_delimiter_has_no_trailer() {
        let text = encode(&[1i64, 2][..], "CRLF", 8).unwrap();
        assert_eq!(text, "00000001\r\n00000010");
    }

    #[test]
    fn test_encode_bytes_matches_encode() {
        let bytes = [0u8, 1, 127, 128, 255];
        for delim in Delimiter::ALL {
            let expected = encode_with(&Input::from(&bytes[..]), delim, 8).unwrap();
            assert_eq!(encode_bytes(&bytes, delim, 8), expected, "{delim}");
        }
    }

    #[test]
    fn test_natural_width() {
        assert_eq!(natural_width(0), 1);
        assert_eq!(natural_width(1), 1);
        assert_eq!(natural_width(255), 8);
        assert_eq!(natural_width(256), 9);
        assert_eq!(natural_width(u64::MAX), 64);
    }

    #[test]
    fn test_input_values() {
        assert_eq!(Input::from(7i64).values(), &[7]);
        assert!(Input::Unsupported.is_empty());
        assert_eq!(Input::from(&b"ab"[..]).values(), &[97, 98]);
    }
}
