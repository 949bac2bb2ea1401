//! OFB (Output Feedback) mode implementation

use crate::cipher::{Block, BlockCipher, BLOCK_SIZE};
use crate::error::Result;
use crate::utils;

use super::CipherModes;

/// Applies the OFB keystream to `data` in place
///
/// Algorithm:
/// 1. O_0 = IV
/// 2. O_i = E(K, O_{i-1}) for i = 1, 2, ..., n
/// 3. C_i = P_i ⊕ O_i
///
/// The keystream does not depend on the data, so this is its own inverse.
pub(crate) fn apply_keystream<C: BlockCipher>(cipher: &C, iv: &Block, data: &mut [u8]) {
    let mut feedback = *iv;
    for chunk in data.chunks_mut(BLOCK_SIZE) {
        cipher.encrypt_block(&mut feedback);
        utils::xor_in_place(chunk, &feedback);
    }
}

impl CipherModes {
    /// OFB mode encryption
    ///
    /// Returns `IV ‖ ciphertext`; the ciphertext is as long as the plaintext.
    pub fn ofb_encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        super::stream_encrypt("OFB", key, plaintext, apply_keystream)
    }

    /// OFB mode decryption
    ///
    /// Since OFB is a stream cipher mode, decryption applies the same keystream.
    pub fn ofb_decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        super::stream_decrypt("OFB", key, ciphertext, apply_keystream)
    }
}
