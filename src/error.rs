/// Error type for keygen operations.
///
/// Every variant is fatal for the invocation that produced it; nothing is
/// retried internally.
#[derive(Debug, thiserror::Error)]
pub enum KeygenError {
    /// The provider refused to export raw key material.
    #[error("key material is not extractable from the crypto provider")]
    KeyNotExtractable,

    /// The PKCS#8 export was too short to contain a 32-byte seed.
    #[error("unsupported key format: PKCS#8 buffer is {len} bytes, need at least 32")]
    UnsupportedKeyFormat { len: usize },

    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    /// The OS random source failed to supply entropy.
    #[error("secure random source unavailable")]
    EntropySourceUnavailable,
}
