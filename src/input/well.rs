use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed well label {0:?} (expected a letter followed by a well number, e.g. A1)")]
    WellLabel(String),
    #[error("probe name {0:?} carries no LHS/RHS marker")]
    UnmarkedProbe(String),
}

/// Zero-based grid position of a well: `A1` is `(0, 0)`, `H12` is `(7, 11)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WellCoord {
    pub row: usize,
    pub col: usize,
}

impl WellCoord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn label(&self) -> String {
        WellLabel::format(*self)
    }
}

impl fmt::Display for WellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

pub struct WellLabel;

impl WellLabel {
    /// Parses `<Letter><Digits>`. The letter must be uppercase ASCII and the
    /// digits must form a positive integer; anything else is a `ParseError`.
    pub fn parse(label: &str) -> Result<WellCoord, ParseError> {
        let malformed = || ParseError::WellLabel(label.to_string());
        let trimmed = label.trim();
        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(malformed)?;
        if !letter.is_ascii_uppercase() {
            return Err(malformed());
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let number: usize = digits.parse().map_err(|_| malformed())?;
        if number == 0 {
            return Err(malformed());
        }
        Ok(WellCoord {
            row: (letter as u8 - b'A') as usize,
            col: number - 1,
        })
    }

    pub fn format(coord: WellCoord) -> String {
        format!("{}{}", row_letter(coord.row), coord.col + 1)
    }
}

/// Row letter for a zero-based row index; rows past `Z` fall back to `?`.
pub fn row_letter(row: usize) -> char {
    if row < 26 { (b'A' + row as u8) as char } else { '?' }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/well.rs"]
mod tests;
