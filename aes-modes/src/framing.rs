//! Ciphertext framing: the per-message IV or nonce travels in front of the
//! ciphertext and is split off again before decryption.

use crate::error::{CipherModeError, Result};

/// Returns `prefix ‖ body`.
pub fn frame(prefix: &[u8], body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(prefix.len() + body.len());
    out.extend_from_slice(prefix);
    out.extend_from_slice(body);
    out
}

/// Splits framed bytes into `(prefix, body)`.
///
/// Fails with `CiphertextTooShort` if there are fewer than `prefix_len`
/// bytes. An empty body is not an error here; the mode decides.
pub fn split_frame(framed: &[u8], prefix_len: usize) -> Result<(&[u8], &[u8])> {
    if framed.len() < prefix_len {
        return Err(CipherModeError::CiphertextTooShort {
            len: framed.len(),
            min: prefix_len,
        });
    }
    Ok(framed.split_at(prefix_len))
}
