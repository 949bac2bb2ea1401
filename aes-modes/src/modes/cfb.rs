//! CFB (Cipher Feedback) mode implementation
//!
//! Full-block feedback: the register is the previous ciphertext block.
//! CFB is malleable, so flipping a ciphertext bit flips the same plaintext
//! bit (and garbles the following block).

use crate::cipher::{Block, BlockCipher, BLOCK_SIZE};
use crate::error::Result;
use crate::utils;

use super::CipherModes;

/// O_i = E(C_{i-1}), C_0 = IV, C_i = P_i ⊕ O_i
///
/// A partial final block uses only as much keystream as it needs.
pub(crate) fn encrypt_stream<C: BlockCipher>(cipher: &C, iv: &Block, data: &mut [u8]) {
    let mut register = *iv;
    for chunk in data.chunks_mut(BLOCK_SIZE) {
        cipher.encrypt_block(&mut register);
        utils::xor_in_place(chunk, &register);
        register[..chunk.len()].copy_from_slice(chunk);
    }
}

pub(crate) fn decrypt_stream<C: BlockCipher>(cipher: &C, iv: &Block, data: &mut [u8]) {
    let mut register = *iv;
    for chunk in data.chunks_mut(BLOCK_SIZE) {
        let mut keystream = register;
        cipher.encrypt_block(&mut keystream);
        register[..chunk.len()].copy_from_slice(chunk);
        utils::xor_in_place(chunk, &keystream);
    }
}

impl CipherModes {
    /// CFB mode encryption
    ///
    /// Returns `IV ‖ ciphertext`; the ciphertext is as long as the plaintext.
    pub fn cfb_encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        super::stream_encrypt("CFB", key, plaintext, encrypt_stream)
    }

    /// CFB mode decryption of `IV ‖ ciphertext`
    pub fn cfb_decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        super::stream_decrypt("CFB", key, ciphertext, decrypt_stream)
    }
}
