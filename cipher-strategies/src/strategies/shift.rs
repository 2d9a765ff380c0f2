//! Caesar-style alphabetic shift cipher

use crate::strategy::CipherStrategy;

const ALPHABET_LEN: i32 = 26;

/// Shift cipher: rotates ASCII letters within their case's 26-letter
/// alphabet, leaving every other character unchanged.
///
/// Both directions normalize the key with floor-modulo, so any `i32` key
/// behaves as its non-negative residue mod 26 and the round-trip
/// `decrypt(encrypt(t, k), k) == t` holds regardless of the key's sign.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftCipher;

impl CipherStrategy for ShiftCipher {
    fn encrypt(&self, text: &str, key: i32) -> String {
        let shift = key.rem_euclid(ALPHABET_LEN) as u8;
        text.chars().map(|c| rotate(c, shift)).collect()
    }

    fn decrypt(&self, text: &str, key: i32) -> String {
        // Decryption is rotation by the additive inverse of the key.
        let shift = ((ALPHABET_LEN - key.rem_euclid(ALPHABET_LEN)) % ALPHABET_LEN) as u8;
        text.chars().map(|c| rotate(c, shift)).collect()
    }
}

/// Rotates a single ASCII letter forward by `shift` places (0..26),
/// preserving case; non-letters pass through.
fn rotate(c: char, shift: u8) -> char {
    if c.is_ascii_alphabetic() {
        let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
        (((c as u8 - base + shift) % 26) + base) as char
    } else {
        c
    }
}
