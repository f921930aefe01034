//! Short code generation.
//!
//! Codes are fixed-length strings sampled character by character, with
//! replacement, from a configured alphabet. The random source is the thread
//! RNG; codes are identifiers, not secrets.
//!
//! Collision handling is the caller's job; see
//! [`crate::application::services::LinkService`].

use rand::Rng;
use std::collections::HashSet;

/// Base-62 alphabet used when `CODE_ALPHABET` is not set.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Code length used when `CODE_LENGTH` is not set.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Upper bound for `CODE_LENGTH`.
pub const MAX_CODE_LENGTH: usize = 64;

/// Path segments that would shadow service routes if issued as codes.
pub const RESERVED_CODES: &[&str] = &["health", "info", "delete", "url"];

/// Errors raised when a generator is configured with unusable parameters.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CodeGeneratorError {
    #[error("Code alphabet must not be empty")]
    EmptyAlphabet,

    #[error("Code alphabet contains duplicate character '{0}'")]
    DuplicateCharacter(char),

    #[error("Code alphabet character '{0}' is not URL-safe (allowed: A-Z, a-z, 0-9, '-', '_')")]
    UnsupportedCharacter(char),

    #[error("Code length must be between 1 and {MAX_CODE_LENGTH}, got {0}")]
    InvalidLength(usize),
}

/// Generates random fixed-length short codes.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    alphabet: Vec<char>,
    length: usize,
}

impl CodeGenerator {
    /// Creates a generator for `length`-character codes over `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns [`CodeGeneratorError`] if the alphabet is empty, has duplicate
    /// or non URL-safe characters, or the length is out of range.
    pub fn new(alphabet: &str, length: usize) -> Result<Self, CodeGeneratorError> {
        if length == 0 || length > MAX_CODE_LENGTH {
            return Err(CodeGeneratorError::InvalidLength(length));
        }

        if alphabet.is_empty() {
            return Err(CodeGeneratorError::EmptyAlphabet);
        }

        let mut seen = HashSet::new();
        for c in alphabet.chars() {
            if !(c.is_ascii_alphanumeric() || c == '-' || c == '_') {
                return Err(CodeGeneratorError::UnsupportedCharacter(c));
            }
            if !seen.insert(c) {
                return Err(CodeGeneratorError::DuplicateCharacter(c));
            }
        }

        Ok(Self {
            alphabet: alphabet.chars().collect(),
            length,
        })
    }

    /// Produces a new random code.
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Returns true if `code` could have been produced by this generator.
    pub fn is_valid_code(&self, code: &str) -> bool {
        code.chars().count() == self.length && code.chars().all(|c| self.alphabet.contains(&c))
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.chars().collect(),
            length: DEFAULT_CODE_LENGTH,
        }
    }
}

/// Returns true if `code` collides with a service route segment.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}
