//! Line codec: digit strings to yin/yang lines and back to table keys.
//!
//! Each of the six digits becomes one line by parity. Odd digits give a
//! Yang line, even digits a Yin line.

use serde::{Deserialize, Serialize};

use crate::error::{DivinationError, DivinationResult};

/// Number of lines (and digits) in a hexagram.
pub const LINE_COUNT: usize = 6;

/// A single line of a hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Broken line, encoded as `0`.
    Yin,
    /// Solid line, encoded as `1`.
    Yang,
}

/// Six lines in positional order.
pub type LineSequence = [Line; LINE_COUNT];

impl Line {
    /// The binary value of this line.
    pub fn bit(self) -> u8 {
        match self {
            Self::Yin => 0,
            Self::Yang => 1,
        }
    }

    /// The opposite line.
    pub fn flipped(self) -> Self {
        match self {
            Self::Yin => Self::Yang,
            Self::Yang => Self::Yin,
        }
    }

    /// The key character for this line.
    pub fn key_char(self) -> char {
        match self {
            Self::Yin => '0',
            Self::Yang => '1',
        }
    }

    /// A drawing of the line for terminal output.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Yin => "━━━  ━━━",
            Self::Yang => "━━━━━━━━",
        }
    }

    fn from_digit(d: u8) -> Self {
        if d % 2 == 1 { Self::Yang } else { Self::Yin }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yin => write!(f, "Yin"),
            Self::Yang => write!(f, "Yang"),
        }
    }
}

/// Check that `digits` is exactly six ASCII decimal digits.
pub fn validate_digits(digits: &str) -> DivinationResult<()> {
    if digits.len() == LINE_COUNT && digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(DivinationError::InvalidInput(format!(
            "expected exactly {LINE_COUNT} digits, got {digits:?}"
        )))
    }
}

/// Convert a six-digit string into lines, one per digit by parity.
///
/// Any ASCII digit `0`-`9` is accepted.
pub fn digits_to_lines(digits: &str) -> DivinationResult<LineSequence> {
    validate_digits(digits)?;
    let mut lines = [Line::Yin; LINE_COUNT];
    for (line, b) in lines.iter_mut().zip(digits.bytes()) {
        *line = Line::from_digit(b - b'0');
    }
    Ok(lines)
}

/// Concatenate lines into the `0`/`1` lookup key.
pub fn lines_to_key(lines: &LineSequence) -> String {
    lines.iter().map(|l| l.key_char()).collect()
}

/// Parse a `0`/`1` key back into lines. Returns `None` for malformed keys.
pub fn key_to_lines(key: &str) -> Option<LineSequence> {
    if key.len() != LINE_COUNT {
        return None;
    }
    let mut lines = [Line::Yin; LINE_COUNT];
    for (line, b) in lines.iter_mut().zip(key.bytes()) {
        *line = match b {
            b'0' => Line::Yin,
            b'1' => Line::Yang,
            _ => return None,
        };
    }
    Some(lines)
}
