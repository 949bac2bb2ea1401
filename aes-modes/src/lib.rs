//! # AES Modes Library
//!
//! This library turns AES into a usable encryption service across the common
//! block cipher modes of operation. Every call validates the key, builds a
//! fresh cipher, generates its own random IV or nonce, and frames it in front
//! of the ciphertext.
//!
//! ## Supported Modes
//!
//! - **ECB** (Electronic Code Book) - Insecure, legacy compatibility only
//! - **CBC** (Cipher Block Chaining) - PKCS#7 padding, confidentiality only
//! - **CFB** (Cipher Feedback) - Stream cipher mode, malleable
//! - **OFB** (Output Feedback) - Stream cipher mode, malleable
//! - **CTR** (Counter Mode) - Stream cipher mode, malleable
//! - **GCM** (Galois/Counter Mode) - Authenticated encryption with associated data
//! - **XTS** - Tweakable sector encryption for data at rest
//!
//! | Mode | Output | Random prefix | Length constraint |
//! |------|--------|---------------|-------------------|
//! | ECB | `ct` | none | padded to 16 |
//! | CBC | `iv ‖ ct` | 16 | padded to 16 |
//! | CFB / OFB / CTR | `iv ‖ ct` | 16 | none |
//! | GCM | `nonce ‖ ct ‖ tag` | 12 | none |
//! | XTS | `ct` | none (caller sector number) | multiple of 16 |
//!
//! Only GCM detects tampering. Prefer it unless you need one of the others.
//!
//! ## Usage
//!
//! ```rust
//! use aes_modes::{generate_aes_key, CipherModes};
//!
//! let key = generate_aes_key(256)?;
//! let plaintext = b"Hello, World!";
//!
//! // Authenticated encryption with associated data
//! let sealed = CipherModes::gcm_encrypt(&key, plaintext, b"header")?;
//! let opened = CipherModes::gcm_decrypt(&key, &sealed, b"header")?;
//! assert_eq!(opened, plaintext);
//!
//! // CBC with a random IV in front of the ciphertext
//! let encrypted = CipherModes::cbc_encrypt(&key, plaintext)?;
//! let decrypted = CipherModes::cbc_decrypt(&key, &encrypted)?;
//! assert_eq!(decrypted, plaintext);
//! # Ok::<(), aes_modes::CipherModeError>(())
//! ```
//!
//! ## Logging
//!
//! Operations emit `tracing` events at `trace` level, and decrypt failures
//! at `debug`. Only mode names and lengths are recorded, never key or data
//! bytes.

// Public modules
pub mod cipher;
pub mod encoding;
pub mod error;
pub mod framing;
pub mod keys;
pub mod modes;
pub mod random;
pub mod utils;

// Re-exports for easy access
pub use cipher::{new_block_cipher, AesCipher, Block, BlockCipher, BLOCK_SIZE};
pub use encoding::{decode_base64, encode_base64, hex_decode, hex_encode};
pub use error::{CipherModeError, Result};
pub use keys::{validate_key, AES_KEY_SIZES, XTS_KEY_SIZES};
pub use modes::{CipherMode, CipherModes};
pub use random::{
    generate_aes_key, generate_key, generate_nonce, generate_random_bytes, generate_xts_key,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convenience functions for common operations
impl CipherModes {
    /// Get version information
    pub fn version() -> &'static str {
        VERSION
    }

    /// List all supported cipher modes
    pub fn supported_modes() -> Vec<&'static str> {
        vec!["ECB", "CBC", "CFB", "OFB", "CTR", "GCM", "XTS"]
    }
}
