//! CTR (Counter) mode implementation

use crate::cipher::{Block, BlockCipher, BLOCK_SIZE};
use crate::error::Result;
use crate::utils;

use super::CipherModes;

/// Increments the counter block as a 128-bit big-endian integer, wrapping
/// at 2^128.
pub(crate) fn increment_counter(counter: &mut Block) {
    *counter = u128::from_be_bytes(*counter).wrapping_add(1).to_be_bytes();
}

/// Applies the CTR keystream to `data` in place
///
/// In CTR mode, a counter is used which is incremented for each block.
/// The encryption of the counter is XORed with the plaintext.
///
/// Algorithm:
/// 1. T_1 = IV, T_i = T_{i-1} + 1 mod 2^128
/// 2. C_i = P_i ⊕ E(K, T_i)
pub(crate) fn apply_keystream<C: BlockCipher>(cipher: &C, iv: &Block, data: &mut [u8]) {
    let mut counter = *iv;
    for chunk in data.chunks_mut(BLOCK_SIZE) {
        let mut keystream = counter;
        cipher.encrypt_block(&mut keystream);
        utils::xor_in_place(chunk, &keystream);
        increment_counter(&mut counter);
    }
}

impl CipherModes {
    /// CTR mode encryption
    ///
    /// The initial counter block is a fresh random IV on every call, so a
    /// (key, IV) pair is never reused by this crate. Returns `IV ‖ ciphertext`.
    pub fn ctr_encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        super::stream_encrypt("CTR", key, plaintext, apply_keystream)
    }

    /// CTR mode decryption
    ///
    /// Since CTR is a stream cipher mode, decryption is identical to encryption.
    pub fn ctr_decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        super::stream_decrypt("CTR", key, ciphertext, apply_keystream)
    }
}
