//! Cipher strategy implementations and the strategy selector

pub mod code_point;
pub mod shift;

pub use code_point::CodePointCipher;
pub use shift::ShiftCipher;

use crate::config::Algorithm;
use crate::strategy::CipherStrategy;

/// Maps an algorithm choice to its strategy instance.
///
/// The mapping is total over the closed [`Algorithm`] set; unknown algorithm
/// names are rejected earlier, when the configuration is parsed.
pub fn select(algorithm: Algorithm) -> Box<dyn CipherStrategy> {
    match algorithm {
        Algorithm::Shift => Box::new(ShiftCipher),
        Algorithm::CodePoint => Box::new(CodePointCipher),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mode;

    #[test]
    fn test_selector_picks_shift() {
        let strategy = select(Algorithm::Shift);
        assert_eq!(strategy.apply("abc", 1, Mode::Encrypt), "bcd");
    }

    #[test]
    fn test_selector_picks_code_point() {
        let strategy = select(Algorithm::CodePoint);
        assert_eq!(strategy.apply("123", 1, Mode::Encrypt), "234");
    }
}
