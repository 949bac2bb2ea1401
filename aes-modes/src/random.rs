//! Secure random values: IVs, nonces and keys
//!
//! Everything here draws from the operating system CSPRNG through `OsRng`.

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::cipher::{Block, BLOCK_SIZE};
use crate::error::{CipherModeError, Result};
use crate::keys;

/// Nonce length used by `generate_nonce(0)`; the usual GCM nonce size.
pub const DEFAULT_NONCE_SIZE: usize = 12;

/// Fill `buf` from the OS random source.
pub fn fill_random(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| CipherModeError::RandomSourceFailure(e.to_string()))
}

/// Returns `n` securely generated random bytes. `n` must be positive.
pub fn generate_random_bytes(n: usize) -> Result<Vec<u8>> {
    if n == 0 {
        return Err(CipherModeError::InvalidParameter(
            "random byte count must be positive".to_string(),
        ));
    }
    let mut buf = vec![0u8; n];
    fill_random(&mut buf)?;
    Ok(buf)
}

/// Fresh random IV, one block long.
pub fn generate_iv() -> Result<Block> {
    let mut iv = [0u8; BLOCK_SIZE];
    fill_random(&mut iv)?;
    Ok(iv)
}

/// Random nonce of `size` bytes; `0` selects [`DEFAULT_NONCE_SIZE`].
pub fn generate_nonce(size: usize) -> Result<Vec<u8>> {
    let size = if size == 0 { DEFAULT_NONCE_SIZE } else { size };
    generate_random_bytes(size)
}

/// Random AES key of `size` bytes (16, 24 or 32).
pub fn generate_key(size: usize) -> Result<Zeroizing<Vec<u8>>> {
    if !keys::AES_KEY_SIZES.contains(&size) {
        return Err(CipherModeError::InvalidKeySize {
            len: size,
            allowed: keys::AES_KEY_SIZES,
        });
    }
    generate_random_bytes(size).map(Zeroizing::new)
}

fn aes_key_bytes(bits: usize) -> Result<usize> {
    match bits {
        128 => Ok(16),
        192 => Ok(24),
        256 => Ok(32),
        _ => Err(CipherModeError::InvalidParameter(format!(
            "invalid AES key size of {bits} bits (expected 128, 192 or 256)"
        ))),
    }
}

/// Random AES key for the given bit length (128, 192 or 256).
pub fn generate_aes_key(bits: usize) -> Result<Zeroizing<Vec<u8>>> {
    generate_key(aes_key_bytes(bits)?)
}

/// Random XTS key: two AES keys of `bits` each, concatenated.
pub fn generate_xts_key(bits: usize) -> Result<Zeroizing<Vec<u8>>> {
    let per_key = aes_key_bytes(bits)?;
    generate_random_bytes(per_key * 2).map(Zeroizing::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_random_bytes() {
        let a = generate_random_bytes(32).unwrap();
        let b = generate_random_bytes(32).unwrap();
        assert_eq!(a.len(), 32);
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_random_bytes_zero() {
        assert!(matches!(
            generate_random_bytes(0),
            Err(CipherModeError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_generate_nonce_sizes() {
        assert_eq!(generate_nonce(0).unwrap().len(), 12);
        assert_eq!(generate_nonce(12).unwrap().len(), 12);
        assert_eq!(generate_nonce(16).unwrap().len(), 16);
    }

    #[test]
    fn test_generate_key() {
        for size in [16, 24, 32] {
            assert_eq!(generate_key(size).unwrap().len(), size);
        }
        assert!(matches!(
            generate_key(20),
            Err(CipherModeError::InvalidKeySize { len: 20, .. })
        ));
    }

    #[test]
    fn test_generate_aes_key() {
        for (bits, ok) in [(128, true), (192, true), (256, true), (127, false), (255, false), (0, false)] {
            match generate_aes_key(bits) {
                Ok(key) => {
                    assert!(ok, "{bits} bits should fail");
                    assert_eq!(key.len(), bits / 8);
                }
                Err(e) => {
                    assert!(!ok, "{bits} bits should succeed");
                    assert!(matches!(e, CipherModeError::InvalidParameter(_)));
                }
            }
        }
    }

    #[test]
    fn test_generate_xts_key() {
        assert_eq!(generate_xts_key(128).unwrap().len(), 32);
        assert_eq!(generate_xts_key(192).unwrap().len(), 48);
        assert_eq!(generate_xts_key(256).unwrap().len(), 64);
        assert!(generate_xts_key(512).is_err());
    }

    #[test]
    fn test_generated_keys_are_accepted() {
        let key = generate_aes_key(256).unwrap();
        assert!(keys::validate_aes_key(&key).is_ok());

        let xts_key = generate_xts_key(256).unwrap();
        assert!(keys::validate_xts_key(&xts_key).is_ok());
    }
}
