//! Raw code-point shift cipher

use crate::strategy::CipherStrategy;

/// Code-point cipher: adds the key to every character's numeric code point,
/// with no alphabet restriction.
///
/// Shifts that leave the valid `char` range (negative, past U+10FFFF, or
/// into the surrogate gap) produce U+FFFD REPLACEMENT CHARACTER. That is
/// accepted garbage for oversized keys, not a validation failure; callers
/// are responsible for choosing sane keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodePointCipher;

impl CipherStrategy for CodePointCipher {
    fn encrypt(&self, text: &str, key: i32) -> String {
        text.chars().map(|c| offset(c, key as i64)).collect()
    }

    fn decrypt(&self, text: &str, key: i32) -> String {
        text.chars().map(|c| offset(c, -(key as i64))).collect()
    }
}

/// Shifts one character's code point by `delta`.
fn offset(c: char, delta: i64) -> char {
    let shifted = c as i64 + delta;
    u32::try_from(shifted)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}
