//! Generic cipher strategy trait

use crate::config::Mode;

/// Trait for a substitution cipher over a text and an integer key.
///
/// Implementations are stateless; a single instance can be reused across
/// any number of invocations, including concurrently.
pub trait CipherStrategy {
    /// Encrypts the text with the given key
    fn encrypt(&self, text: &str, key: i32) -> String;

    /// Decrypts the text with the given key
    fn decrypt(&self, text: &str, key: i32) -> String;

    /// Dispatches to [`encrypt`](Self::encrypt) or [`decrypt`](Self::decrypt)
    /// based on the mode
    fn apply(&self, text: &str, key: i32, mode: Mode) -> String {
        match mode {
            Mode::Encrypt => self.encrypt(text, key),
            Mode::Decrypt => self.decrypt(text, key),
        }
    }
}
