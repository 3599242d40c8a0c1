//! Platform crypto capability: keypair generation and key export.

use async_trait::async_trait;
use ed25519_dalek::pkcs8::{EncodePrivateKey, KeypairBytes};
use ed25519_dalek::{SigningKey, VerifyingKey};
use rand_core::{OsRng, RngCore};
use zeroize::Zeroize;

use crate::error::KeygenError;
use crate::key::{Keypair, KEY_LENGTH};

/// The subset of the platform crypto subsystem this tool needs.
///
/// `export_pkcs8` must return the standard PKCS#8 document for the private
/// key with the 32-byte seed at the tail; `export_raw` must return the
/// 32-byte public key with no wrapper.
#[async_trait]
pub trait CryptoProvider: Send + Sync {
    async fn generate_keypair(&self) -> Result<Keypair, KeygenError>;
    async fn export_pkcs8(&self, key: &SigningKey) -> Result<Vec<u8>, KeygenError>;
    async fn export_raw(&self, key: &VerifyingKey) -> Result<Vec<u8>, KeygenError>;
}

/// Default provider: `ed25519-dalek` keyed from the OS random source.
pub struct OsCryptoProvider;

#[async_trait]
impl CryptoProvider for OsCryptoProvider {
    async fn generate_keypair(&self) -> Result<Keypair, KeygenError> {
        let mut seed = [0u8; KEY_LENGTH];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|_| KeygenError::EntropySourceUnavailable)?;
        let signing = SigningKey::from_bytes(&seed);
        seed.zeroize();
        Ok(Keypair::from_signing_key(signing))
    }

    async fn export_pkcs8(&self, key: &SigningKey) -> Result<Vec<u8>, KeygenError> {
        // v1 document (no embedded public key): the seed is the last 32
        // bytes. The v2 form dalek emits by default puts the public key at
        // the tail instead, which would break the downstream slice.
        let keypair_bytes = KeypairBytes {
            secret_key: key.to_bytes(),
            public_key: None,
        };
        let doc = keypair_bytes
            .to_pkcs8_der()
            .map_err(|_| KeygenError::KeyNotExtractable)?;
        Ok(doc.as_bytes().to_vec())
    }

    async fn export_raw(&self, key: &VerifyingKey) -> Result<Vec<u8>, KeygenError> {
        Ok(key.to_bytes().to_vec())
    }
}
