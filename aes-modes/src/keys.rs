//! Key length validation
//!
//! Every public operation checks its key here before any cipher object is
//! built, so a bad key never reaches the AES key schedule.

use crate::error::{CipherModeError, Result};

/// Key lengths accepted by the single-key modes (AES-128/192/256).
pub const AES_KEY_SIZES: &[usize] = &[16, 24, 32];

/// Key lengths accepted by XTS: two equal AES keys, concatenated.
pub const XTS_KEY_SIZES: &[usize] = &[32, 48, 64];

/// Fail with `InvalidKeySize` unless `key.len()` is one of `allowed`.
pub fn validate_key(key: &[u8], allowed: &'static [usize]) -> Result<()> {
    if allowed.contains(&key.len()) {
        Ok(())
    } else {
        Err(CipherModeError::InvalidKeySize {
            len: key.len(),
            allowed,
        })
    }
}

pub fn validate_aes_key(key: &[u8]) -> Result<()> {
    validate_key(key, AES_KEY_SIZES)
}

pub fn validate_xts_key(key: &[u8]) -> Result<()> {
    validate_key(key, XTS_KEY_SIZES)
}
