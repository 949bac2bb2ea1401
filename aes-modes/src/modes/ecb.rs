//! ECB (Electronic Code Book) mode implementation
//!
//! Identical plaintext blocks give identical ciphertext blocks, so patterns
//! in the input remain visible. Kept for legacy compatibility only.

use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::cipher::{new_block_cipher, BlockCipher, BLOCK_SIZE};
use crate::error::{CipherModeError, Result};
use crate::utils;

use super::{as_block, CipherModes};

/// Encrypts block-aligned `data` in place, each block on its own.
pub(crate) fn encrypt_blocks<C: BlockCipher>(cipher: &C, data: &mut [u8]) {
    for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
        cipher.encrypt_block(as_block(chunk));
    }
}

pub(crate) fn decrypt_blocks<C: BlockCipher>(cipher: &C, data: &mut [u8]) {
    for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
        cipher.decrypt_block(as_block(chunk));
    }
}

impl CipherModes {
    /// ECB mode encryption with PKCS#7 padding
    ///
    /// Returns the bare ciphertext; ECB uses no IV.
    pub fn ecb_encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = new_block_cipher(key)?;
        trace!(mode = "ECB", len = plaintext.len(), "encrypt");

        let mut data = Zeroizing::new(utils::pkcs7_pad(plaintext, BLOCK_SIZE));
        encrypt_blocks(&cipher, &mut data);

        Ok(data.to_vec())
    }

    /// ECB mode decryption
    pub fn ecb_decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let cipher = new_block_cipher(key)?;
        trace!(mode = "ECB", len = ciphertext.len(), "decrypt");

        if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
            debug!(mode = "ECB", len = ciphertext.len(), "ciphertext not block aligned");
            return Err(CipherModeError::InvalidLength {
                len: ciphertext.len(),
                block_size: BLOCK_SIZE,
            });
        }

        let mut data = Zeroizing::new(ciphertext.to_vec());
        decrypt_blocks(&cipher, &mut data);

        let plaintext = utils::pkcs7_unpad(&data, BLOCK_SIZE).inspect_err(|_| {
            debug!(mode = "ECB", "padding check failed");
        })?;
        Ok(plaintext.to_vec())
    }
}
