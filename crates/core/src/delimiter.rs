//! Delimiter table.
//!
//! A delimiter is selected by its display name ("Space", "Colon", ...) and
//! resolves two ways:
//! - a literal, inserted between groups when encoding
//! - a removal pattern, stripped from the text before decoding
//!
//! The two sides are not symmetric. `Space` joins with a single space but
//! removes any run of whitespace, and `None` joins with nothing but still
//! removes whitespace.
//!
//! # Example
//! ```
//! use binconv_core::delimiter::Delimiter;
//!
//! let colon = Delimiter::from_name("Colon").unwrap();
//! assert_eq!(colon.literal(), ":");
//! assert_eq!(colon.strip("0101:1100").unwrap(), "01011100");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::{Error, Result};

/// Every delimiter the converters understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delimiter {
    #[default]
    Space,
    Percent,
    Comma,
    SemiColon,
    Colon,
    Tab,
    LineFeed,
    Crlf,
    ForwardSlash,
    Backslash,
    ZeroX,
    ZeroXWithComma,
    BackslashX,
    NothingSeparateChars,
    None,
}

impl Delimiter {
    /// All delimiters, in the order they are listed to users.
    pub const ALL: [Delimiter; 15] = [
        Delimiter::Space,
        Delimiter::Percent,
        Delimiter::Comma,
        Delimiter::SemiColon,
        Delimiter::Colon,
        Delimiter::Tab,
        Delimiter::LineFeed,
        Delimiter::Crlf,
        Delimiter::ForwardSlash,
        Delimiter::Backslash,
        Delimiter::ZeroX,
        Delimiter::ZeroXWithComma,
        Delimiter::BackslashX,
        Delimiter::NothingSeparateChars,
        Delimiter::None,
    ];

    /// Resolve a delimiter by its display name.
    ///
    /// # Errors
    /// `Error::UnknownDelimiter` if the name is not in the table.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name() == name)
            .ok_or_else(|| Error::UnknownDelimiter(name.to_string()))
    }

    /// Display name, as accepted by [`Delimiter::from_name`].
    pub fn name(&self) -> &'static str {
        match self {
            Delimiter::Space => "Space",
            Delimiter::Percent => "Percent",
            Delimiter::Comma => "Comma",
            Delimiter::SemiColon => "Semi-colon",
            Delimiter::Colon => "Colon",
            Delimiter::Tab => "Tab",
            Delimiter::LineFeed => "Line feed",
            Delimiter::Crlf => "CRLF",
            Delimiter::ForwardSlash => "Forward slash",
            Delimiter::Backslash => "Backslash",
            Delimiter::ZeroX => "0x",
            Delimiter::ZeroXWithComma => "0x with comma",
            Delimiter::BackslashX => "\\x",
            Delimiter::NothingSeparateChars => "Nothing (separate chars)",
            Delimiter::None => "None",
        }
    }

    /// Text inserted between encoded groups.
    pub fn literal(&self) -> &'static str {
        match self {
            Delimiter::Space => " ",
            Delimiter::Percent => "%",
            Delimiter::Comma => ",",
            Delimiter::SemiColon => ";",
            Delimiter::Colon => ":",
            Delimiter::Tab => "\t",
            Delimiter::LineFeed => "\n",
            Delimiter::Crlf => "\r\n",
            Delimiter::ForwardSlash => "/",
            Delimiter::Backslash => "\\",
            Delimiter::ZeroX => "0x",
            Delimiter::ZeroXWithComma => ",0x",
            Delimiter::BackslashX => "\\x",
            Delimiter::NothingSeparateChars | Delimiter::None => "",
        }
    }

    /// Source of the removal pattern used before decoding.
    pub fn pattern_source(&self) -> &'static str {
        match self {
            Delimiter::Space | Delimiter::NothingSeparateChars | Delimiter::None => r"\s+",
            Delimiter::Percent => "%",
            Delimiter::Comma => ",",
            Delimiter::SemiColon => ";",
            Delimiter::Colon => ":",
            Delimiter::Tab => r"\t",
            Delimiter::LineFeed => r"\n",
            Delimiter::Crlf => r"\r\n",
            Delimiter::ForwardSlash => "/",
            Delimiter::Backslash => r"\\",
            Delimiter::ZeroX => "0x",
            Delimiter::ZeroXWithComma => ",?0x",
            Delimiter::BackslashX => r"\\x",
        }
    }

    /// Compile the removal pattern.
    pub fn pattern(&self) -> Result<Regex> {
        Ok(Regex::new(self.pattern_source())?)
    }

    /// Remove every occurrence of this delimiter from `text`.
    pub fn strip<'t>(&self, text: &'t str) -> Result<Cow<'t, str>> {
        Ok(self.pattern()?.replace_all(text, ""))
    }
}

impl FromStr for Delimiter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for delim in Delimiter::ALL {
            assert_eq!(Delimiter::from_name(delim.name()).unwrap(), delim);
            assert_eq!(delim.to_string().parse::<Delimiter>().unwrap(), delim);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = Delimiter::from_name("space").unwrap_err();
        assert!(matches!(err, Error::UnknownDelimiter(name) if name == "space"));
    }

    #[test]
    fn test_all_patterns_compile() {
        for delim in Delimiter::ALL {
            assert!(delim.pattern().is_ok(), "{delim} pattern failed");
        }
    }

    #[test]
    fn test_space_strips_any_whitespace() {
        let stripped = Delimiter::Space.strip("0101 \t 1100\r\n0011").unwrap();
        assert_eq!(stripped, "010111000011");
    }

    #[test]
    fn test_none_joins_nothing_but_strips_whitespace() {
        assert_eq!(Delimiter::None.literal(), "");
        assert_eq!(Delimiter::None.strip("0101\n1100").unwrap(), "01011100");
    }

    #[test]
    fn test_zero_x_with_comma() {
        let stripped = Delimiter::ZeroXWithComma.strip("0x01,0x10").unwrap();
        assert_eq!(stripped, "0110");
    }

    #[test]
    fn test_literal_delimiters_strip_their_literal() {
        for delim in [
            Delimiter::Percent,
            Delimiter::Comma,
            Delimiter::SemiColon,
            Delimiter::Colon,
            Delimiter::Tab,
            Delimiter::LineFeed,
            Delimiter::Crlf,
            Delimiter::ForwardSlash,
            Delimiter::Backslash,
            Delimiter::ZeroX,
            Delimiter::BackslashX,
        ] {
            let text = format!("01{}10", delim.literal());
            assert_eq!(delim.strip(&text).unwrap(), "0110", "{delim}");
        }
    }

    #[test]
    fn test_strip_borrows_when_nothing_matches() {
        let stripped = Delimiter::Colon.strip("01011100").unwrap();
        assert!(matches!(stripped, Cow::Borrowed(_)));
    }
}
