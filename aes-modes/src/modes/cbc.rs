//! CBC (Cipher Block Chaining) mode implementation
//!
//! CBC provides confidentiality only. Nothing authenticates the ciphertext,
//! and a decryptor that reveals whether padding was valid is a padding
//! oracle. Checking every padding byte does not change that; pair CBC with
//! a MAC or prefer GCM.

use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::cipher::{new_block_cipher, Block, BlockCipher, BLOCK_SIZE};
use crate::error::{CipherModeError, Result};
use crate::{framing, random, utils};

use super::{as_block, CipherModes};

/// C_i = E(C_{i-1} ⊕ P_i), C_0 = IV. `data` must be block-aligned.
pub(crate) fn encrypt_blocks<C: BlockCipher>(cipher: &C, iv: &Block, data: &mut [u8]) {
    let mut previous = *iv;
    for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
        let block = as_block(chunk);
        utils::xor_in_place(block, &previous);
        cipher.encrypt_block(block);
        previous = *block;
    }
}

/// P_i = D(C_i) ⊕ C_{i-1}, C_0 = IV. `data` must be block-aligned.
pub(crate) fn decrypt_blocks<C: BlockCipher>(cipher: &C, iv: &Block, data: &mut [u8]) {
    let mut previous = *iv;
    for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
        let block = as_block(chunk);
        let current = *block;
        cipher.decrypt_block(block);
        utils::xor_in_place(block, &previous);
        previous = current;
    }
}

impl CipherModes {
    /// CBC mode encryption with PKCS#7 padding
    ///
    /// Returns `IV ‖ ciphertext` with a fresh random IV.
    pub fn cbc_encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = new_block_cipher(key)?;
        trace!(mode = "CBC", len = plaintext.len(), "encrypt");

        let mut data = Zeroizing::new(utils::pkcs7_pad(plaintext, BLOCK_SIZE));
        let iv = random::generate_iv()?;
        encrypt_blocks(&cipher, &iv, &mut data);

        Ok(framing::frame(&iv, &data))
    }

    /// CBC mode decryption of `IV ‖ ciphertext`
    pub fn cbc_decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let cipher = new_block_cipher(key)?;
        trace!(mode = "CBC", len = ciphertext.len(), "decrypt");

        let (iv, body) = framing::split_frame(ciphertext, BLOCK_SIZE)?;
        if body.len() % BLOCK_SIZE != 0 {
            debug!(mode = "CBC", len = body.len(), "ciphertext not block aligned");
            return Err(CipherModeError::InvalidLength {
                len: body.len(),
                block_size: BLOCK_SIZE,
            });
        }

        let iv: Block = super::to_block(iv)?;
        let mut data = Zeroizing::new(body.to_vec());
        decrypt_blocks(&cipher, &iv, &mut data);

        let plaintext = utils::pkcs7_unpad(&data, BLOCK_SIZE).inspect_err(|_| {
            debug!(mode = "CBC", "padding check failed");
        })?;
        Ok(plaintext.to_vec())
    }
}
