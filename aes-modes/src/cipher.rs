//! Block cipher trait and the AES cipher factory

use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};

use crate::error::{CipherModeError, Result};
use crate::keys;

/// AES block size in bytes, for every key length
pub const BLOCK_SIZE: usize = 16;

/// A single cipher block
pub type Block = [u8; BLOCK_SIZE];

/// Trait for a keyed 128-bit block cipher
///
/// Implementations hold only the expanded key, so a shared reference can be
/// used from several threads at once.
pub trait BlockCipher {
    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut Block);

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut Block);

    /// Returns the block size of the cipher
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}

/// AES with the key schedule selected by key length
#[derive(Clone)]
pub enum AesCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl AesCipher {
    /// Key length in bits
    pub fn key_bits(&self) -> usize {
        match self {
            AesCipher::Aes128(_) => 128,
            AesCipher::Aes192(_) => 192,
            AesCipher::Aes256(_) => 256,
        }
    }
}

impl std::fmt::Debug for AesCipher {
    // Never print round keys.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AesCipher(AES-{})", self.key_bits())
    }
}

impl BlockCipher for AesCipher {
    fn encrypt_block(&self, block: &mut Block) {
        let block = GenericArray::from_mut_slice(block);
        match self {
            AesCipher::Aes128(c) => c.encrypt_block(block),
            AesCipher::Aes192(c) => c.encrypt_block(block),
            AesCipher::Aes256(c) => c.encrypt_block(block),
        }
    }

    fn decrypt_block(&self, block: &mut Block) {
        let block = GenericArray::from_mut_slice(block);
        match self {
            AesCipher::Aes128(c) => c.decrypt_block(block),
            AesCipher::Aes192(c) => c.decrypt_block(block),
            AesCipher::Aes256(c) => c.decrypt_block(block),
        }
    }
}

/// Build an AES instance of the given key type from a slice.
pub(crate) fn init_aes<C: KeyInit>(key: &[u8]) -> Result<C> {
    C::new_from_slice(key)
        .map_err(|e| CipherModeError::UnderlyingCipherConstructionFailure(e.to_string()))
}

/// Validate `key` and construct the matching AES cipher
///
/// # Example
///
/// ```rust
/// use aes_modes::{new_block_cipher, BlockCipher};
///
/// let cipher = new_block_cipher(&[0u8; 32])?;
/// assert_eq!(cipher.block_size(), 16);
/// # Ok::<(), aes_modes::CipherModeError>(())
/// ```
pub fn new_block_cipher(key: &[u8]) -> Result<AesCipher> {
    keys::validate_aes_key(key)?;

    match key.len() {
        16 => Ok(AesCipher::Aes128(init_aes(key)?)),
        24 => Ok(AesCipher::Aes192(init_aes(key)?)),
        _ => Ok(AesCipher::Aes256(init_aes(key)?)),
    }
}
