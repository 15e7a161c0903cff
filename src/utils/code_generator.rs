//! Short code derivation from original URLs.
//!
//! A code is derived from the SHA-256 digest of the original link: the low
//! 64 bits of the digest, read big-endian, are repeatedly divided by the
//! alphabet size, emitting one symbol per step. If the value runs out before
//! [`CODE_LENGTH`] symbols have been emitted, the remaining positions are
//! filled from the injected random source, so two calls for the same input
//! are only guaranteed to agree while the value has enough digits left.
//! Callers rely on dedup-by-original rather than code reproducibility.

use std::sync::Mutex;

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Symbols a short code is made of. Order matters: a digit `d` maps to
/// `ALPHABET[d]`.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

/// Number of symbols in every generated code.
pub const CODE_LENGTH: usize = 10;

const BASE: u64 = ALPHABET.len() as u64;

/// Derives short codes for original links.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a [`CODE_LENGTH`]-symbol code for `original_link`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Generation`] if the random source is unusable.
    fn generate(&self, original_link: &str) -> Result<String, AppError>;
}

/// SHA-256 based generator with an injectable random source for the
/// underflow fallback.
pub struct Sha256CodeGenerator<R> {
    rng: Mutex<R>,
}

impl<R: Rng + Send> Sha256CodeGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Sha256CodeGenerator<rand::rngs::StdRng> {
    /// Generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        use rand::SeedableRng;
        Self::new(rand::rngs::StdRng::from_os_rng())
    }
}

impl<R: Rng + Send> CodeGenerator for Sha256CodeGenerator<R> {
    fn generate(&self, original_link: &str) -> Result<String, AppError> {
        let value = digest_value(&Sha256::digest(original_link.as_bytes()));

        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AppError::generation("random source lock poisoned"))?;

        let code = encode(value, &mut *rng);
        debug_assert!(is_valid_code(&code), "generated code out of alphabet: {code}");

        Ok(code)
    }
}

/// Low 64 bits of a digest, read big-endian.
fn digest_value(digest: &[u8]) -> u64 {
    digest
        .iter()
        .rev()
        .take(8)
        .rev()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
}

/// Encodes `value` into a [`CODE_LENGTH`]-symbol code, least significant
/// digit first.
///
/// Positions reached after the value has dropped to zero are drawn uniformly
/// from `rng`.
pub fn encode<R: Rng>(mut value: u64, rng: &mut R) -> String {
    let mut code = String::with_capacity(CODE_LENGTH);

    for _ in 0..CODE_LENGTH {
        let index = if value > 0 {
            let digit = value % BASE;
            value /= BASE;
            digit as usize
        } else {
            rng.random_range(0..ALPHABET.len())
        };
        code.push(ALPHABET[index] as char);
    }

    code
}

/// Returns true if every symbol of `code` belongs to [`ALPHABET`] and the
/// length matches [`CODE_LENGTH`].
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
}
