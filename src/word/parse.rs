//! Hex parsing for `Word256`
//!
//! Uses a lookup table for digit values, the same shape as the base62 decode map.

use std::str::FromStr;

use once_cell::sync::Lazy;

use super::Word256;

const HEX_CHARS: &[u8; 22] = b"0123456789abcdefABCDEF";

/// Maximum number of hex digits in a 256-bit word
pub const MAX_HEX_DIGITS: usize = 64;

/// Lookup table for decoding hex characters to their values
static DECODE_MAP: Lazy<[i8; 256]> = Lazy::new(|| {
    let mut map = [-1i8; 256];
    for (i, &c) in HEX_CHARS.iter().enumerate() {
        map[c as usize] = if i < 16 { i as i8 } else { (i - 6) as i8 };
    }
    map
});

/// Errors that can occur while parsing a word from hex text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseWordError {
    /// The input holds no digits
    #[error("Cannot parse a word from an empty string")]
    EmptyString,

    /// The input contains a character outside `[0-9a-fA-F]`
    #[error("Invalid hex character: {0}")]
    InvalidCharacter(char),

    /// The value would not fit in 256 bits
    #[error("Parsed value would overflow 256 bits")]
    Overflow,
}

impl Word256 {
    /// Parse hex digits, with or without a leading `0x`
    pub fn from_hex(text: &str) -> Result<Self, ParseWordError> {
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        if digits.is_empty() {
            return Err(ParseWordError::EmptyString);
        }

        let significant = digits.trim_start_matches('0');
        if significant.len() > MAX_HEX_DIGITS {
            // Still report a bad character before the size problem
            if let Some(c) = significant.chars().find(|c| !c.is_ascii_hexdigit()) {
                return Err(ParseWordError::InvalidCharacter(c));
            }
            return Err(ParseWordError::Overflow);
        }

        let mut word = Word256::ZERO;
        for c in digits.chars() {
            let value = if c.is_ascii() { DECODE_MAP[c as usize] } else { -1 };
            if value == -1 {
                return Err(ParseWordError::InvalidCharacter(c));
            }
            word = (word << 4) | Word256::from(value as u64);
        }
        Ok(word)
    }
}

impl FromStr for Word256 {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
