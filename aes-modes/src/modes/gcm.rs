//! GCM (Galois/Counter Mode) authenticated encryption
//!
//! The only mode here that detects tampering. Decryption is all or nothing:
//! a bad tag, wrong AAD or truncated input yields `AuthenticationFailed`
//! and no plaintext at all.

use aes::Aes192;
use aes_gcm::aead::consts::U12;
use aes_gcm::aead::generic_array::typenum::Unsigned;
use aes_gcm::aead::{Aead, AeadCore, Nonce, Payload};
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm};
use tracing::{debug, trace};

use crate::cipher::{init_aes, BLOCK_SIZE};
use crate::error::{CipherModeError, Result};
use crate::{framing, keys, random};

use super::CipherModes;

/// AES-192 with the standard 96-bit nonce; `aes-gcm` only names the 128 and
/// 256-bit variants.
type Aes192Gcm = AesGcm<Aes192, U12>;

/// GCM construction selected by key length
enum GcmCipher {
    Aes128(Aes128Gcm),
    Aes192(Aes192Gcm),
    Aes256(Aes256Gcm),
}

impl GcmCipher {
    fn new(key: &[u8]) -> Result<Self> {
        keys::validate_aes_key(key)?;

        match key.len() {
            16 => Ok(GcmCipher::Aes128(init_aes(key)?)),
            24 => Ok(GcmCipher::Aes192(init_aes(key)?)),
            _ => Ok(GcmCipher::Aes256(init_aes(key)?)),
        }
    }

    fn nonce_size(&self) -> usize {
        match self {
            GcmCipher::Aes128(_) => nonce_size::<Aes128Gcm>(),
            GcmCipher::Aes192(_) => nonce_size::<Aes192Gcm>(),
            GcmCipher::Aes256(_) => nonce_size::<Aes256Gcm>(),
        }
    }

    fn seal(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        match self {
            GcmCipher::Aes128(c) => seal(c, plaintext, aad),
            GcmCipher::Aes192(c) => seal(c, plaintext, aad),
            GcmCipher::Aes256(c) => seal(c, plaintext, aad),
        }
    }

    fn open(&self, framed: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        match self {
            GcmCipher::Aes128(c) => open(c, framed, aad),
            GcmCipher::Aes192(c) => open(c, framed, aad),
            GcmCipher::Aes256(c) => open(c, framed, aad),
        }
    }
}

/// Nonce length reported by the AEAD construction.
fn nonce_size<A: AeadCore>() -> usize {
    A::NonceSize::USIZE
}

/// Nonce length of the GCM constructions used by this crate.
pub(crate) fn default_nonce_size() -> usize {
    nonce_size::<Aes128Gcm>()
}

fn seal<A: Aead>(aead: &A, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    let mut nonce = Nonce::<A>::default();
    random::fill_random(&mut nonce)?;

    let sealed = aead
        .encrypt(&nonce, Payload { msg: plaintext, aad })
        .map_err(|_| CipherModeError::InvalidLength {
            len: plaintext.len(),
            block_size: BLOCK_SIZE,
        })?;

    Ok(framing::frame(&nonce, &sealed))
}

fn open<A: Aead>(aead: &A, framed: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    let (nonce, body) = framing::split_frame(framed, nonce_size::<A>())?;

    aead.decrypt(Nonce::<A>::from_slice(nonce), Payload { msg: body, aad })
        .map_err(|_| {
            debug!(mode = "GCM", len = framed.len(), "authentication failed");
            CipherModeError::AuthenticationFailed
        })
}

impl CipherModes {
    /// GCM authenticated encryption
    ///
    /// `aad` is authenticated but not encrypted and must be passed again,
    /// byte for byte, to [`CipherModes::gcm_decrypt`]. Returns
    /// `nonce ‖ ciphertext ‖ tag` with a fresh random nonce.
    pub fn gcm_encrypt(key: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        let cipher = GcmCipher::new(key)?;
        trace!(
            mode = "GCM",
            len = plaintext.len(),
            aad_len = aad.len(),
            nonce_len = cipher.nonce_size(),
            "encrypt"
        );
        cipher.seal(plaintext, aad)
    }

    /// GCM authenticated decryption of `nonce ‖ ciphertext ‖ tag`
    pub fn gcm_decrypt(key: &[u8], ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        let cipher = GcmCipher::new(key)?;
        trace!(mode = "GCM", len = ciphertext.len(), aad_len = aad.len(), "decrypt");
        cipher.open(ciphertext, aad)
    }
}
