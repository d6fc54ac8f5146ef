//! Concrete peg symbols for the command-line game
//!
//! The board is generic over its symbol type; the binary plays with `Peg`, a
//! small integer code rendered as a single character. Codes 0-8 display as
//! the digits `1`-`9`, codes 9-34 as the letters `a`-`z`, which caps the
//! palette at [`MAX_PALETTE`] symbols.

use std::fmt;

/// Largest palette the single-character encoding can express
pub const MAX_PALETTE: usize = 35;

/// One peg: an opaque symbol code with a single-character rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Peg(u8);

/// Error type for invalid pegs and palettes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PegError {
    InvalidCharacter(char),
    CodeOutOfRange(u8),
    PaletteTooLarge(usize),
}

impl fmt::Display for PegError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter(c) => {
                write!(f, "'{c}' is not a peg character (use 1-9 or a-z)")
            }
            Self::CodeOutOfRange(code) => {
                write!(f, "Peg code must be < {MAX_PALETTE}, got {code}")
            }
            Self::PaletteTooLarge(count) => {
                write!(f, "Palette size must be <= {MAX_PALETTE}, got {count}")
            }
        }
    }
}

impl std::error::Error for PegError {}

impl Peg {
    /// Create a peg from a raw code
    ///
    /// # Errors
    /// Returns `PegError::CodeOutOfRange` if `code >= MAX_PALETTE`.
    pub fn new(code: u8) -> Result<Self, PegError> {
        if usize::from(code) >= MAX_PALETTE {
            return Err(PegError::CodeOutOfRange(code));
        }
        Ok(Self(code))
    }

    /// The raw symbol code
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Parse a peg from its character rendering
    ///
    /// Accepts `1`-`9` for the first nine codes and `a`-`z` (case
    /// insensitive) for the rest.
    ///
    /// # Errors
    /// Returns `PegError::InvalidCharacter` for anything else.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Peg;
    ///
    /// assert_eq!(Peg::from_char('1').unwrap().code(), 0);
    /// assert_eq!(Peg::from_char('c').unwrap().code(), 11);
    /// assert!(Peg::from_char('0').is_err());
    /// ```
    pub fn from_char(c: char) -> Result<Self, PegError> {
        let lower = c.to_ascii_lowercase();
        match lower {
            '1'..='9' => Ok(Self(lower as u8 - b'1')),
            'a'..='z' => Ok(Self(lower as u8 - b'a' + 9)),
            _ => Err(PegError::InvalidCharacter(c)),
        }
    }

    /// The single-character rendering of this peg
    #[must_use]
    pub fn as_char(self) -> char {
        if self.0 < 9 {
            char::from(b'1' + self.0)
        } else {
            char::from(b'a' + self.0 - 9)
        }
    }

    /// Parse a whole symbol sequence, one character per peg
    ///
    /// # Errors
    /// Returns the first `PegError::InvalidCharacter` encountered.
    pub fn parse_sequence(input: &str) -> Result<Vec<Self>, PegError> {
        input.chars().map(Self::from_char).collect()
    }

    /// Build the palette of the first `count` peg codes
    ///
    /// # Errors
    /// Returns `PegError::PaletteTooLarge` if `count > MAX_PALETTE`.
    pub fn palette(count: usize) -> Result<Vec<Self>, PegError> {
        if count > MAX_PALETTE {
            return Err(PegError::PaletteTooLarge(count));
        }
        // Cast is safe: count <= 35
        Ok((0..count as u8).map(Self).collect())
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peg_new_validates_code() {
        assert_eq!(Peg::new(0).unwrap().code(), 0);
        assert_eq!(Peg::new(34).unwrap().code(), 34);
        assert_eq!(Peg::new(35), Err(PegError::CodeOutOfRange(35)));
    }

    #[test]
    fn peg_from_char_digits() {
        assert_eq!(Peg::from_char('1').unwrap().code(), 0);
        assert_eq!(Peg::from_char('9').unwrap().code(), 8);
    }

    #[test]
    fn peg_from_char_letters() {
        assert_eq!(Peg::from_char('a').unwrap().code(), 9);
        assert_eq!(Peg::from_char('z').unwrap().code(), 34);
        // Case insensitive
        assert_eq!(Peg::from_char('A').unwrap(), Peg::from_char('a').unwrap());
    }

    #[test]
    fn peg_from_char_rejects_other_characters() {
        assert_eq!(Peg::from_char('0'), Err(PegError::InvalidCharacter('0')));
        assert_eq!(Peg::from_char('!'), Err(PegError::InvalidCharacter('!')));
        assert_eq!(Peg::from_char(' '), Err(PegError::InvalidCharacter(' ')));
    }

    #[test]
    fn peg_char_round_trip() {
        for code in 0..MAX_PALETTE as u8 {
            let peg = Peg::new(code).unwrap();
            assert_eq!(Peg::from_char(peg.as_char()).unwrap(), peg);
        }
    }

    #[test]
    fn parse_sequence_valid() {
        let pegs = Peg::parse_sequence("1352").unwrap();
        let codes: Vec<u8> = pegs.iter().map(|p| p.code()).collect();
        assert_eq!(codes, vec![0, 2, 4, 1]);
    }

    #[test]
    fn parse_sequence_rejects_invalid_character() {
        assert_eq!(
            Peg::parse_sequence("13x2").err(),
            None,
            "x is a valid letter peg"
        );
        assert_eq!(
            Peg::parse_sequence("13!2"),
            Err(PegError::InvalidCharacter('!'))
        );
    }

    #[test]
    fn palette_builds_consecutive_codes() {
        let palette = Peg::palette(6).unwrap();
        assert_eq!(palette.len(), 6);
        let codes: Vec<u8> = palette.iter().map(|p| p.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn palette_too_large_is_rejected() {
        assert!(Peg::palette(MAX_PALETTE).is_ok());
        assert_eq!(
            Peg::palette(MAX_PALETTE + 1),
            Err(PegError::PaletteTooLarge(36))
        );
    }

    #[test]
    fn peg_display_matches_char() {
        assert_eq!(Peg::new(0).unwrap().to_string(), "1");
        assert_eq!(Peg::new(9).unwrap().to_string(), "a");
    }
}
