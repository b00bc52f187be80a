//! Colours and colour codes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One of the six code colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
}

impl Color {
    /// The full alphabet, in display order.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Orange,
        Color::Purple,
    ];

    /// Single-letter code used for input and display.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Purple => 'P',
        }
    }

    /// Parse a letter code, case-insensitively.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        Self::ALL.into_iter().find(|c| c.letter() == upper)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Orange => "Orange",
            Color::Purple => "Purple",
        };
        f.write_str(name)
    }
}

/// An ordered sequence of colours: a secret or a guess.
///
/// Guesses may repeat colours; secrets never do.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Code(SmallVec<[Color; 4]>);

impl Code {
    /// Build a code from colours.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self(colors.into_iter().collect())
    }

    /// Parse and check the length in one step.
    ///
    /// # Errors
    ///
    /// `CodeParseError` if a letter is not a colour or the length differs.
    pub fn parse_with_length(text: &str, length: usize) -> Result<Self, CodeParseError> {
        let code: Code = text.parse()?;
        if code.len() != length {
            return Err(CodeParseError::WrongLength {
                expected: length,
                found: code.len(),
            });
        }
        Ok(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Does any colour appear more than once?
    #[must_use]
    pub fn has_repeats(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .any(|(i, c)| self.0[i + 1..].contains(c))
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for color in &self.0 {
            write!(f, "{}", color.letter())?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .map(|ch| Color::from_letter(ch).ok_or(CodeParseError::UnknownColor(ch)))
            .collect::<Result<SmallVec<_>, _>>()
            .map(Code)
    }
}

/// Why a string is not a well-formed code.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CodeParseError {
    #[error("'{0}' is not a colour (use R, G, B, Y, O, P)")]
    UnknownColor(char),

    #[error("expected {expected} colours, got {found}")]
    WrongLength { expected: usize, found: usize },
}
