//! Utility functions shared by the mode engines

use crate::error::{CipherModeError, Result};

/// Add PKCS#7 padding to data
///
/// Always appends at least one byte: input that is already block-aligned
/// gets a full block of padding.
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Vec<u8> {
    let pad = block_size - (data.len() % block_size);
    let mut padded = Vec::with_capacity(data.len() + pad);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad, pad as u8);
    padded
}

/// Remove PKCS#7 padding from data
///
/// Every padding byte is checked, not only the last one. The check is not
/// constant-time.
pub fn pkcs7_unpad(data: &[u8], block_size: usize) -> Result<&[u8]> {
    if data.is_empty() || data.len() % block_size != 0 {
        return Err(CipherModeError::InvalidPadding);
    }

    let pad = usize::from(data[data.len() - 1]);
    if pad == 0 || pad > block_size {
        return Err(CipherModeError::InvalidPadding);
    }

    let (body, padding) = data.split_at(data.len() - pad);
    if padding.iter().any(|&b| usize::from(b) != pad) {
        return Err(CipherModeError::InvalidPadding);
    }

    Ok(body)
}

/// XOR `src` into the front of `dst`
///
/// Only `min(dst.len(), src.len())` bytes are touched, which is how the
/// stream modes consume a partial final keystream block.
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}
