//! Binary-digit text to values.
//!
//! Decoding first strips every occurrence of the delimiter, then cuts the
//! remaining text into consecutive groups of `byte_len` characters starting
//! at offset 0. Each group is parsed as a base-2 integer.
//!
//! # Group Parsing
//! Groups are read the way a lenient base-2 `parseInt` reads them:
//! - leading whitespace is skipped
//! - an optional `+` or `-` sign is accepted
//! - the longest run of '0'/'1' digits is consumed, anything after it ignored
//! - a group with no digits at all becomes [`Group::NotANumber`]
//!
//! A short final group (text length not a multiple of `byte_len`) is parsed
//! from the characters it has, with no implicit padding.
//!
//! `NotANumber` groups are passed through to the caller unfiltered. Callers
//! that want bytes or nothing use [`decode_bytes`], which rejects them.
//!
//! # Example
//! ```
//! use binconv_core::decoder::decode;
//!
//! let groups = decode("00001010 00010100 00011110", "Space", 8).unwrap();
//! assert_eq!(groups, [10i64, 20, 30]);
//! ```

use std::fmt;
use std::num::NonZeroUsize;

use tracing::{debug, trace, warn};

use crate::delimiter::Delimiter;
use crate::error::{Error, Result};

/// Validated group length for decoding: always a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteLength(NonZeroUsize);

impl ByteLength {
    /// The default, one 8-bit byte per group.
    pub const DEFAULT: ByteLength = match NonZeroUsize::new(8) {
        Some(len) => ByteLength(len),
        None => unreachable!(),
    };

    /// Create a byte length, rejecting zero.
    pub fn new(len: usize) -> Result<Self> {
        NonZeroUsize::new(len).map(ByteLength).ok_or_else(Error::byte_length)
    }

    /// Number of characters per group.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for ByteLength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ByteLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for ByteLength {
    type Error = Error;

    fn try_from(len: usize) -> Result<Self> {
        Self::new(len)
    }
}

impl TryFrom<u32> for ByteLength {
    type Error = Error;

    fn try_from(len: u32) -> Result<Self> {
        usize::try_from(len).map_err(|_| Error::byte_length()).and_then(Self::new)
    }
}

impl TryFrom<i32> for ByteLength {
    type Error = Error;

    fn try_from(len: i32) -> Result<Self> {
        usize::try_from(len).map_err(|_| Error::byte_length()).and_then(Self::new)
    }
}

impl TryFrom<i64> for ByteLength {
    type Error = Error;

    fn try_from(len: i64) -> Result<Self> {
        usize::try_from(len).map_err(|_| Error::byte_length()).and_then(Self::new)
    }
}

impl TryFrom<f64> for ByteLength {
    type Error = Error;

    /// Accepts only finite, integral values of at least 1.
    fn try_from(len: f64) -> Result<Self> {
        if !len.is_finite() || len < 1.0 || len.fract() != 0.0 || len > usize::MAX as f64 {
            return Err(Error::byte_length());
        }
        Self::new(len as usize)
    }
}

/// One decoded group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// The group's digits, as a signed value
    Value(i64),
    /// The group held no binary digits
    NotANumber,
}

impl Group {
    /// The decoded value, if the group had any digits.
    pub fn value(self) -> Option<i64> {
        match self {
            Group::Value(v) => Some(v),
            Group::NotANumber => None,
        }
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Group::NotANumber)
    }
}

impl PartialEq<i64> for Group {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Group::Value(v) if v == other)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Group::Value(v) => write!(f, "{}", v),
            Group::NotANumber => f.write_str("NaN"),
        }
    }
}

/// Decode binary-digit text, resolving the delimiter by name.
///
/// The byte length is validated before anything else is looked at.
///
/// # Errors
/// - `Error::InvalidParameter` if `byte_len` is not a positive integer
/// - `Error::UnknownDelimiter` if `delimiter` is not a known name
/// - `Error::GroupOverflow` if a group's digits do not fit in an i64
pub fn decode<L>(data: &str, delimiter: &str, byte_len: L) -> Result<Vec<Group>>
where
    L: TryInto<ByteLength, Error = Error>,
{
    let byte_len = byte_len.try_into()?;
    let delimiter = Delimiter::from_name(delimiter)?;
    decode_with(data, delimiter, byte_len)
}

/// Decode with an already resolved delimiter and validated byte length.
pub fn decode_with(data: &str, delimiter: Delimiter, byte_len: ByteLength) -> Result<Vec<Group>> {
    let cleaned = delimiter.strip(data)?;

    debug!(
        input_chars = data.len(),
        cleaned_chars = cleaned.len(),
        %delimiter,
        byte_len = byte_len.get(),
        "decoding binary string"
    );

    let groups = split_groups(&cleaned, byte_len)?;

    let nan = groups.iter().filter(|g| g.is_nan()).count();
    if nan > 0 {
        warn!(nan, "groups without binary digits passed through as NaN");
    }

    Ok(groups)
}

/// Decode into bytes, failing on any group that is not a value in 0..=255.
///
/// # Errors
/// Everything [`decode`] reports, plus:
/// - `Error::MalformedGroup` for a group without binary digits
/// - `Error::ValueOutOfRange` for a value that is not a byte
pub fn decode_bytes<L>(data: &str, delimiter: &str, byte_len: L) -> Result<Vec<u8>>
where
    L: TryInto<ByteLength, Error = Error>,
{
    let byte_len = byte_len.try_into()?;
    let delimiter = Delimiter::from_name(delimiter)?;
    let cleaned = delimiter.strip(data)?;
    let len = byte_len.get();

    debug!(cleaned_chars = cleaned.len(), %delimiter, byte_len = len, "decoding bytes");

    split_groups(&cleaned, byte_len)?
        .into_iter()
        .enumerate()
        .map(|(i, group)| {
            let offset = i * len;
            match group {
                Group::Value(v) => u8::try_from(v).map_err(|_| Error::ValueOutOfRange { offset, value: v }),
                Group::NotANumber => Err(Error::MalformedGroup {
                    offset,
                    group: cleaned.chars().skip(offset).take(len).collect(),
                }),
            }
        })
        .collect()
}

/// Cut delimiter-free text into groups of `byte_len` characters and parse each.
fn split_groups(cleaned: &str, byte_len: ByteLength) -> Result<Vec<Group>> {
    let len = byte_len.get();
    let mut groups = Vec::with_capacity(cleaned.len() / len + 1);
    let mut rest = cleaned;
    let mut offset = 0;

    while !rest.is_empty() {
        let split = rest.char_indices().nth(len).map_or(rest.len(), |(i, _)| i);
        let (chunk, tail) = rest.split_at(split);

        let group = parse_group(chunk, offset)?;
        trace!(offset, chunk, %group, "parsed group");
        groups.push(group);

        rest = tail;
        offset = offset.saturating_add(len);
    }

    Ok(groups)
}

/// Parse one group. `offset` is its character offset in the cleaned text.
fn parse_group(chunk: &str, offset: usize) -> Result<Group> {
    let body = chunk.trim_start();

    let sign_len = match body.as_bytes().first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let digit_len = body[sign_len..]
        .bytes()
        .take_while(|b| matches!(b, b'0' | b'1'))
        .count();

    if digit_len == 0 {
        return Ok(Group::NotANumber);
    }

    // from_str_radix understands the sign itself
    let number = &body[..sign_len + digit_len];
    i64::from_str_radix(number, 2)
        .map(Group::Value)
        .map_err(|_| Error::GroupOverflow {
            offset,
            group: chunk.to_string(),
        })
}
