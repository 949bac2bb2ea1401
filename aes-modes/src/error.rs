//! Error types for cipher mode operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherModeError {
    #[error("Invalid key size: {len} bytes (expected one of {allowed:?})")]
    InvalidKeySize {
        len: usize,
        allowed: &'static [usize],
    },

    #[error("Invalid length: {len} bytes is not a multiple of the {block_size}-byte block size")]
    InvalidLength { len: usize, block_size: usize },

    #[error("Ciphertext too short: {len} bytes (need at least {min})")]
    CiphertextTooShort { len: usize, min: usize },

    #[error("Invalid padding")]
    InvalidPadding,

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Random source failure: {0}")]
    RandomSourceFailure(String),

    #[error("Cipher construction failed: {0}")]
    UnderlyingCipherConstructionFailure(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, CipherModeError>;
