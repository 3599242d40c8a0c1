//! Raw key material extraction from provider export formats.

use crate::error::KeygenError;
use crate::key::{Keypair, PrivateKeyBytes, PublicKeyBytes, KEY_LENGTH};
use crate::provider::CryptoProvider;

/// Extracts the raw 32-byte private and public key from `keypair`.
///
/// The private key is the last 32 bytes of the PKCS#8 export; the fixed
/// ASN.1 prefix in front of it is discarded, not parsed. The public key
/// comes out of the raw export as-is. The two exports have no data
/// dependency and run concurrently.
pub async fn export_key_bytes<P: CryptoProvider>(
    provider: &P,
    keypair: &Keypair,
) -> Result<(PrivateKeyBytes, PublicKeyBytes), KeygenError> {
    let verifying = keypair.public_handle();
    let (pkcs8, raw) = tokio::try_join!(
        provider.export_pkcs8(keypair.private_handle()),
        provider.export_raw(&verifying),
    )?;

    if pkcs8.len() < KEY_LENGTH {
        return Err(KeygenError::UnsupportedKeyFormat { len: pkcs8.len() });
    }
    let mut private_key = [0u8; KEY_LENGTH];
    private_key.copy_from_slice(&pkcs8[pkcs8.len() - KEY_LENGTH..]);

    let public_key: PublicKeyBytes =
        raw.as_slice()
            .try_into()
            .map_err(|_| KeygenError::InvalidKeyLength {
                expected: KEY_LENGTH,
                got: raw.len(),
            })?;

    Ok((private_key, public_key))
}
