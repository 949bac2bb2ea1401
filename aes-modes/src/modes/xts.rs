//! XTS tweakable sector encryption (data at rest only)
//!
//! The key is two AES keys of equal size: the first half encrypts data, the
//! second half encrypts the tweak. The tweak is the caller's sector number,
//! which is not stored in the output and must be supplied again to decrypt.
//! There is no IV and no authentication. A changed ciphertext byte garbles
//! only its own 16-byte unit of plaintext.

use aes::{Aes128, Aes192, Aes256};
use tracing::{debug, trace};
use xts_mode::{get_tweak_default, Xts128};

use crate::cipher::{init_aes, BLOCK_SIZE};
use crate::error::{CipherModeError, Result};
use crate::keys;

use super::CipherModes;

enum XtsCipher {
    Aes128(Xts128<Aes128>),
    Aes192(Xts128<Aes192>),
    Aes256(Xts128<Aes256>),
}

fn build<C>(key: &[u8]) -> Result<Xts128<C>>
where
    C: aes::cipher::KeyInit
        + aes::cipher::BlockEncrypt
        + aes::cipher::BlockDecrypt
        + aes::cipher::BlockCipher,
{
    let (data_key, tweak_key) = key.split_at(key.len() / 2);
    Ok(Xts128::new(init_aes(data_key)?, init_aes(tweak_key)?))
}

impl XtsCipher {
    fn new(key: &[u8]) -> Result<Self> {
        keys::validate_xts_key(key)?;

        match key.len() {
            32 => Ok(XtsCipher::Aes128(build(key)?)),
            48 => Ok(XtsCipher::Aes192(build(key)?)),
            _ => Ok(XtsCipher::Aes256(build(key)?)),
        }
    }

    fn encrypt_sector(&self, data: &mut [u8], sector: u64) {
        let tweak = get_tweak_default(u128::from(sector));
        match self {
            XtsCipher::Aes128(c) => c.encrypt_sector(data, tweak),
            XtsCipher::Aes192(c) => c.encrypt_sector(data, tweak),
            XtsCipher::Aes256(c) => c.encrypt_sector(data, tweak),
        }
    }

    fn decrypt_sector(&self, data: &mut [u8], sector: u64) {
        let tweak = get_tweak_default(u128::from(sector));
        match self {
            XtsCipher::Aes128(c) => c.decrypt_sector(data, tweak),
            XtsCipher::Aes192(c) => c.decrypt_sector(data, tweak),
            XtsCipher::Aes256(c) => c.decrypt_sector(data, tweak),
        }
    }
}

fn check_length(len: usize) -> Result<()> {
    if len % BLOCK_SIZE != 0 {
        debug!(mode = "XTS", len, "length not a multiple of the block size");
        return Err(CipherModeError::InvalidLength {
            len,
            block_size: BLOCK_SIZE,
        });
    }
    Ok(())
}

impl CipherModes {
    /// XTS encryption of one sector
    ///
    /// `key` is 32, 48 or 64 bytes. `plaintext` must be a multiple of 16
    /// bytes; the ciphertext has the same length.
    pub fn xts_encrypt(key: &[u8], plaintext: &[u8], sector: u64) -> Result<Vec<u8>> {
        let cipher = XtsCipher::new(key)?;
        trace!(mode = "XTS", len = plaintext.len(), sector, "encrypt");
        check_length(plaintext.len())?;

        let mut data = plaintext.to_vec();
        if !data.is_empty() {
            cipher.encrypt_sector(&mut data, sector);
        }
        Ok(data)
    }

    /// XTS decryption of one sector; `sector` must match the one used to encrypt
    pub fn xts_decrypt(key: &[u8], ciphertext: &[u8], sector: u64) -> Result<Vec<u8>> {
        let cipher = XtsCipher::new(key)?;
        trace!(mode = "XTS", len = ciphertext.len(), sector, "decrypt");
        check_length(ciphertext.len())?;

        let mut data = ciphertext.to_vec();
        if !data.is_empty() {
            cipher.decrypt_sector(&mut data, sector);
        }
        Ok(data)
    }
}
