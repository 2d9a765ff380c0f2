//! Resolved configuration for a single cipher invocation

use std::str::FromStr;

use crate::error::CipherError;

/// Direction of the transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Shift forward by the key
    Encrypt,
    /// Shift backward by the key
    Decrypt,
}

impl FromStr for Mode {
    type Err = CipherError;

    /// Parses a mode string case-insensitively.
    ///
    /// Accepts `encrypt`/`decrypt` as well as the short forms `enc`/`dec`.
    /// Anything else is a caller configuration error and surfaces as
    /// [`CipherError::InvalidMode`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "encrypt" | "enc" => Ok(Mode::Encrypt),
            "decrypt" | "dec" => Ok(Mode::Decrypt),
            _ => Err(CipherError::InvalidMode(s.to_string())),
        }
    }
}

/// Closed set of supported cipher algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Caesar-style alphabetic shift, non-letters pass through
    Shift,
    /// Raw code-point shift over every character
    CodePoint,
}

impl FromStr for Algorithm {
    type Err = CipherError;

    /// Parses an algorithm name case-insensitively.
    ///
    /// `unicode` selects the code-point cipher; a value outside the closed
    /// set surfaces as [`CipherError::UnknownAlgorithm`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shift" => Ok(Algorithm::Shift),
            "unicode" => Ok(Algorithm::CodePoint),
            _ => Err(CipherError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Immutable configuration for one invocation of the core.
///
/// Built once by the hosting CLI (or any other collaborator) after argument,
/// stdin, and file resolution, then handed to [`transform`](crate::transform).
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub key: i32,
    pub algorithm: Algorithm,
    pub text: String,
}

impl Config {
    pub fn new(mode: Mode, key: i32, algorithm: Algorithm, text: impl Into<String>) -> Self {
        Self {
            mode,
            key,
            algorithm,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing_case_insensitive() {
        assert_eq!("encrypt".parse::<Mode>().unwrap(), Mode::Encrypt);
        assert_eq!("ENCRYPT".parse::<Mode>().unwrap(), Mode::Encrypt);
        assert_eq!("enc".parse::<Mode>().unwrap(), Mode::Encrypt);
        assert_eq!("Decrypt".parse::<Mode>().unwrap(), Mode::Decrypt);
        assert_eq!("dec".parse::<Mode>().unwrap(), Mode::Decrypt);
    }

    #[test]
    fn test_invalid_mode_is_surfaced() {
        let result = "xyz".parse::<Mode>();
        assert_eq!(result, Err(CipherError::InvalidMode("xyz".to_string())));
    }

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("shift".parse::<Algorithm>().unwrap(), Algorithm::Shift);
        assert_eq!("Shift".parse::<Algorithm>().unwrap(), Algorithm::Shift);
        assert_eq!("unicode".parse::<Algorithm>().unwrap(), Algorithm::CodePoint);
    }

    #[test]
    fn test_unknown_algorithm_is_surfaced() {
        let result = "rot13000".parse::<Algorithm>();
        assert_eq!(
            result,
            Err(CipherError::UnknownAlgorithm("rot13000".to_string()))
        );
    }
}
