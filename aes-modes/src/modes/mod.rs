//! Cipher modes implementation

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod gcm;
pub mod ofb;
pub mod xts;

use tracing::trace;

use crate::cipher::{new_block_cipher, AesCipher, Block, BLOCK_SIZE};
use crate::error::{CipherModeError, Result};
use crate::keys::{AES_KEY_SIZES, XTS_KEY_SIZES};
use crate::{framing, random};

/// Main struct for cipher modes
///
/// Each mode adds its `*_encrypt` / `*_decrypt` pair in its own module.
pub struct CipherModes;

/// Mode of operation, with the per-call inputs that only some modes take
///
/// Lets one piece of code drive every mode:
///
/// ```rust
/// use aes_modes::CipherMode;
///
/// let key = [7u8; 32];
/// for mode in [CipherMode::Cbc, CipherMode::Ctr, CipherMode::Gcm { aad: b"hdr" }] {
///     let sealed = mode.encrypt(&key, b"attack at dawn")?;
///     assert_eq!(mode.decrypt(&key, &sealed)?, b"attack at dawn");
/// }
/// # Ok::<(), aes_modes::CipherModeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode<'a> {
    Ecb,
    Cbc,
    Cfb,
    Ofb,
    Ctr,
    Gcm { aad: &'a [u8] },
    Xts { sector: u64 },
}

impl CipherMode<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            CipherMode::Ecb => "ECB",
            CipherMode::Cbc => "CBC",
            CipherMode::Cfb => "CFB",
            CipherMode::Ofb => "OFB",
            CipherMode::Ctr => "CTR",
            CipherMode::Gcm { .. } => "GCM",
            CipherMode::Xts { .. } => "XTS",
        }
    }

    /// Key lengths this mode accepts.
    pub fn key_sizes(&self) -> &'static [usize] {
        match self {
            CipherMode::Xts { .. } => XTS_KEY_SIZES,
            _ => AES_KEY_SIZES,
        }
    }

    /// Length of the IV or nonce framed in front of the ciphertext.
    pub fn iv_len(&self) -> usize {
        match self {
            CipherMode::Ecb | CipherMode::Xts { .. } => 0,
            CipherMode::Gcm { .. } => gcm::default_nonce_size(),
            _ => BLOCK_SIZE,
        }
    }

    /// Whether decryption detects tampering.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, CipherMode::Gcm { .. })
    }

    pub fn encrypt(&self, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        match *self {
            CipherMode::Ecb => CipherModes::ecb_encrypt(key, plaintext),
            CipherMode::Cbc => CipherModes::cbc_encrypt(key, plaintext),
            CipherMode::Cfb => CipherModes::cfb_encrypt(key, plaintext),
            CipherMode::Ofb => CipherModes::ofb_encrypt(key, plaintext),
            CipherMode::Ctr => CipherModes::ctr_encrypt(key, plaintext),
            CipherMode::Gcm { aad } => CipherModes::gcm_encrypt(key, plaintext, aad),
            CipherMode::Xts { sector } => CipherModes::xts_encrypt(key, plaintext, sector),
        }
    }

    pub fn decrypt(&self, key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        match *self {
            CipherMode::Ecb => CipherModes::ecb_decrypt(key, ciphertext),
            CipherMode::Cbc => CipherModes::cbc_decrypt(key, ciphertext),
            CipherMode::Cfb => CipherModes::cfb_decrypt(key, ciphertext),
            CipherMode::Ofb => CipherModes::ofb_decrypt(key, ciphertext),
            CipherMode::Ctr => CipherModes::ctr_decrypt(key, ciphertext),
            CipherMode::Gcm { aad } => CipherModes::gcm_decrypt(key, ciphertext, aad),
            CipherMode::Xts { sector } => CipherModes::xts_decrypt(key, ciphertext, sector),
        }
    }
}

impl std::fmt::Display for CipherMode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Views a block-sized chunk as a `Block`.
///
/// Callers get `chunk` from `chunks_exact_mut(BLOCK_SIZE)`.
pub(crate) fn as_block(chunk: &mut [u8]) -> &mut Block {
    chunk.try_into().expect("chunk is exactly one block")
}

pub(crate) fn to_block(bytes: &[u8]) -> Result<Block> {
    bytes
        .try_into()
        .map_err(|_| CipherModeError::CiphertextTooShort {
            len: bytes.len(),
            min: BLOCK_SIZE,
        })
}

/// Keystream transform over `data`, seeded by an IV.
type StreamFn = fn(&AesCipher, &Block, &mut [u8]);

/// Shared encrypt path for CFB, OFB and CTR: fresh IV, transform, frame.
fn stream_encrypt(mode: &'static str, key: &[u8], plaintext: &[u8], apply: StreamFn) -> Result<Vec<u8>> {
    let cipher = new_block_cipher(key)?;
    trace!(mode, len = plaintext.len(), "encrypt");

    let iv = random::generate_iv()?;
    let mut data = plaintext.to_vec();
    apply(&cipher, &iv, &mut data);

    Ok(framing::frame(&iv, &data))
}

/// Shared decrypt path for CFB, OFB and CTR. Any body length is accepted.
fn stream_decrypt(mode: &'static str, key: &[u8], ciphertext: &[u8], apply: StreamFn) -> Result<Vec<u8>> {
    let cipher = new_block_cipher(key)?;
    trace!(mode, len = ciphertext.len(), "decrypt");

    let (iv, body) = framing::split_frame(ciphertext, BLOCK_SIZE)?;
    let iv = to_block(iv)?;
    let mut data = body.to_vec();
    apply(&cipher, &iv, &mut data);

    Ok(data)
}
