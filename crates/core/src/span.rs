//! Selection mapping between byte offsets and text offsets.
//!
//! When bytes are shown next to their binary text, a selection on one side
//! is mirrored on the other. Every group occupies a fixed stride of
//! `width + delimiter.len()` characters, so the mapping is arithmetic:
//!
//! ```text
//! bytes:  [  0  ][  1  ][  2  ]
//! text:   00001010 00010100 00011110
//!         ^0       ^9       ^18
//! ```
//!
//! Text spans never include the trailing delimiter of the last selected
//! group. Mapping text back to bytes widens partial groups to whole bytes.

use crate::delimiter::Delimiter;
use crate::error::{Error, Result};

/// Half-open range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Characters taken by one group plus its delimiter.
fn stride(delimiter: Delimiter, width: usize) -> Result<usize> {
    match width + delimiter.literal().len() {
        0 => Err(Error::byte_length()),
        stride => Ok(stride),
    }
}

/// Map a byte selection onto the encoded text.
///
/// # Errors
/// `Error::InvalidParameter` when both `width` and the delimiter are empty.
pub fn to_text_span(bytes: Span, delimiter: Delimiter, width: usize) -> Result<Span> {
    let stride = stride(delimiter, width)?;
    let sep = delimiter.literal().len();

    Ok(Span {
        start: bytes.start.saturating_mul(stride),
        end: bytes.end.saturating_mul(stride).saturating_sub(sep),
    })
}

/// Map a text selection back onto the bytes it touches.
///
/// # Errors
/// `Error::InvalidParameter` when both `width` and the delimiter are empty.
pub fn to_byte_span(text: Span, delimiter: Delimiter, width: usize) -> Result<Span> {
    let stride = stride(delimiter, width)?;

    Ok(Span {
        start: text.start / stride,
        end: text.end.div_ceil(stride),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_span_space() {
        let span = to_text_span(Span::new(1, 3), Delimiter::Space, 8).unwrap();
        assert_eq!(span, Span::new(9, 26));
    }

    #[test]
    fn test_text_span_matches_encoded_text() {
        let text = crate::encoder::encode_bytes(&[10, 20, 30], Delimiter::Colon, 8);
        let span = to_text_span(Span::new(1, 2), Delimiter::Colon, 8).unwrap();
        assert_eq!(&text[span.start..span.end], "00010100");
    }

    #[test]
    fn test_text_span_no_delimiter() {
        let span = to_text_span(Span::new(2, 4), Delimiter::None, 8).unwrap();
        assert_eq!(span, Span::new(16, 32));
    }

    #[test]
    fn test_empty_selection_at_zero() {
        let span = to_text_span(Span::new(0, 0), Delimiter::Space, 8).unwrap();
        assert_eq!(span, Span::new(0, 0));
        assert!(span.is_empty());
    }

    #[test]
    fn test_byte_span_widens_partial_groups() {
        // Characters 4..12 touch the first and second group
        let span = to_byte_span(Span::new(4, 12), Delimiter::Space, 8).unwrap();
        assert_eq!(span, Span::new(0, 2));
    }

    #[test]
    fn test_byte_span_inverts_text_span() {
        for delim in [Delimiter::Space, Delimiter::Crlf, Delimiter::None] {
            let bytes = Span::new(3, 7);
            let text = to_text_span(bytes, delim, 8).unwrap();
            assert_eq!(to_byte_span(text, delim, 8).unwrap(), bytes, "{delim}");
        }
    }

    #[test]
    fn test_zero_stride_rejected() {
        assert!(matches!(
            to_text_span(Span::new(0, 1), Delimiter::None, 0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(to_byte_span(Span::new(0, 1), Delimiter::Space, 0).is_ok());
    }
}
