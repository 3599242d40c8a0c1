use ed25519_dalek::{SigningKey, VerifyingKey};

/// Length of a raw Ed25519 private seed or public key.
pub const KEY_LENGTH: usize = 32;

/// Length of the combined secret key (private seed followed by public key).
pub const SECRET_KEY_LENGTH: usize = 64;

pub type PrivateKeyBytes = [u8; KEY_LENGTH];
pub type PublicKeyBytes = [u8; KEY_LENGTH];

/// Combined 64-byte secret key: private seed at [0..32), public key at [32..64).
pub type SecretKeyBytes = [u8; SECRET_KEY_LENGTH];

/// Opaque handle to a generated Ed25519 keypair.
///
/// Raw bytes are only reachable through a [`CryptoProvider`] export, which
/// keeps the byte-level contract in one place.
///
/// [`CryptoProvider`]: crate::provider::CryptoProvider
pub struct Keypair {
    signing: SigningKey,
}

impl Keypair {
    pub(crate) fn from_signing_key(signing: SigningKey) -> Self {
        Self { signing }
    }

    /// Handle to the private half, for PKCS#8 export.
    pub fn private_handle(&self) -> &SigningKey {
        &self.signing
    }

    /// Handle to the public half, for raw export.
    pub fn public_handle(&self) -> VerifyingKey {
        self.signing.verifying_key()
    }
}
