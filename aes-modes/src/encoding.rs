//! Text encodings for keys and ciphertext

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{CipherModeError, Result};

/// Standard base64 (with padding).
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

pub fn decode_base64(s: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(s)
        .map_err(|e| CipherModeError::Decode(e.to_string()))
}

/// Lowercase hex.
pub fn hex_encode(data: &[u8]) -> String {
    hex::encode(data)
}

pub fn hex_decode(s: &str) -> Result<Vec<u8>> {
    hex::decode(s).map_err(|e| CipherModeError::Decode(e.to_string()))
}
