//! # Cipher Strategies Library
//!
//! This library implements the substitution cipher core used by the
//! `encrypt_decrypt` command-line tool.
//!
//! ## Supported Algorithms
//!
//! - **Shift** - Caesar-style alphabetic shift, wraps within `a-z`/`A-Z`,
//!   non-letters unchanged
//! - **CodePoint** - shifts every character's numeric code point by the key,
//!   no range restriction (selected as `unicode` on the command line)
//!
//! ## Usage
//!
//! ```rust
//! use cipher_strategies::{transform, Algorithm, Config, Mode};
//!
//! let config = Config::new(Mode::Encrypt, 3, Algorithm::Shift, "Hello, World!");
//! assert_eq!(transform(&config), "Khoor, Zruog!");
//!
//! let config = Config::new(Mode::Decrypt, 3, Algorithm::Shift, "Khoor, Zruog!");
//! assert_eq!(transform(&config), "Hello, World!");
//! ```
//!
//! ## Features
//!
//! - Generic `CipherStrategy` trait shared by both algorithms
//! - Stateless, reentrant strategy instances
//! - Typed errors for invalid modes and unknown algorithms

// Public modules
pub mod config;
pub mod error;
pub mod strategies;
pub mod strategy;

// Re-exports for easy access
pub use config::{Algorithm, Config, Mode};
pub use error::{CipherError, Result};
pub use strategies::{select, CodePointCipher, ShiftCipher};
pub use strategy::CipherStrategy;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Applies the configured algorithm and mode to the configured text.
///
/// This is the single entry point the hosting CLI calls after resolving a
/// [`Config`]. The transformation is pure and in-memory; the caller decides
/// where the result goes.
pub fn transform(config: &Config) -> String {
    select(config.algorithm).apply(&config.text, config.key, config.mode)
}
