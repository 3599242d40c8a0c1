//! End-to-end keygen: fresh keypair in, `{address, base58, byteArray}` out.

use serde::Serialize;

use crate::encoding::{to_base58, to_byte_array_json};
use crate::error::KeygenError;
use crate::export::export_key_bytes;
use crate::key::Keypair;
use crate::provider::CryptoProvider;
use crate::secret_key::assemble_secret_key;

/// A freshly generated keypair together with its public address,
/// `base58(public key bytes)`.
pub struct KeypairSigner {
    pub address: String,
    pub keypair: Keypair,
}

/// Generates an Ed25519 keypair with extractable key material and derives
/// its address.
pub async fn generate_signer<P: CryptoProvider>(
    provider: &P,
) -> Result<KeypairSigner, KeygenError> {
    let keypair = provider.generate_keypair().await?;
    let raw = provider.export_raw(&keypair.public_handle()).await?;
    let address = to_base58(&raw);
    Ok(KeypairSigner { address, keypair })
}

/// The only output this tool produces.
///
/// `byteArray` is a string holding a JSON array (double-encoded), matching
/// the format downstream tooling already consumes.
#[derive(Debug, Serialize)]
pub struct KeygenResult {
    pub address: String,
    pub base58: String,
    #[serde(rename = "byteArray")]
    pub byte_array: String,
}

/// Runs the full pipeline: generate, export raw bytes, assemble the 64-byte
/// secret key, encode. Fails as a whole on the first error; no partial
/// result is ever returned.
pub async fn run<P: CryptoProvider>(provider: &P) -> Result<KeygenResult, KeygenError> {
    let signer = generate_signer(provider).await?;
    let (private_key, public_key) = export_key_bytes(provider, &signer.keypair).await?;
    let secret_key = assemble_secret_key(&private_key, &public_key)?;

    Ok(KeygenResult {
        address: signer.address,
        base58: to_base58(&secret_key),
        byte_array: to_byte_array_json(&secret_key),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::OsCryptoProvider;
    use async_trait::async_trait;
    use ed25519_dalek::{SigningKey, VerifyingKey};

    const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

    #[tokio::test]
    async fn test_address_is_base58_of_public_key() {
        let provider = OsCryptoProvider;

        let signer = generate_signer(&provider).await.unwrap();

        let expected = to_base58(&signer.keypair.public_handle().to_bytes());
        assert_eq!(signer.address, expected);
    }

    #[tokio::test]
    async fn test_address_shape() {
        let provider = OsCryptoProvider;

        let signer = generate_signer(&provider).await.unwrap();

        assert!((32..=44).contains(&signer.address.len()));
        assert!(signer.address.chars().all(|c| BASE58_ALPHABET.contains(c)));
    }

    #[tokio::test]
    async fn test_run_fields_are_consistent() {
        let provider = OsCryptoProvider;

        let result = run(&provider).await.unwrap();

        // base58 and byteArray must describe the same 64 bytes.
        let from_base58 = bs58::decode(&result.base58).into_vec().unwrap();
        let from_json: Vec<u8> = serde_json::from_str(&result.byte_array).unwrap();
        assert_eq!(from_base58, from_json);
        assert_eq!(from_json.len(), 64);

        // The public half of the secret key is the address.
        assert_eq!(result.address, to_base58(&from_json[32..]));
    }

    #[tokio::test]
    async fn test_two_runs_yield_different_keys() {
        let provider = OsCryptoProvider;

        let first = run(&provider).await.unwrap();
        let second = run(&provider).await.unwrap();

        assert_ne!(first.address, second.address);
        assert_ne!(first.base58, second.base58);
    }

    /// Provider whose PKCS#8 export is truncated below seed length.
    struct ShortPkcs8Provider;

    #[async_trait]
    impl CryptoProvider for ShortPkcs8Provider {
        async fn generate_keypair(&self) -> Result<Keypair, KeygenError> {
            OsCryptoProvider.generate_keypair().await
        }

        async fn export_pkcs8(&self, _key: &SigningKey) -> Result<Vec<u8>, KeygenError> {
            Ok(vec![0x30, 0x2e])
        }

        async fn export_raw(&self, key: &VerifyingKey) -> Result<Vec<u8>, KeygenError> {
            Ok(key.to_bytes().to_vec())
        }
    }

    #[tokio::test]
    async fn test_run_propagates_export_failure_without_partial_result() {
        let provider = ShortPkcs8Provider;

        let err = run(&provider).await.unwrap_err();

        assert!(matches!(err, KeygenError::UnsupportedKeyFormat { len: 2 }));
    }

    #[tokio::test]
    async fn test_result_serializes_with_expected_field_names() {
        let provider = OsCryptoProvider;

        let result = run(&provider).await.unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&result).unwrap()).unwrap();

        assert!(json.get("address").is_some());
        assert!(json.get("base58").is_some());
        assert!(json.get("byteArray").is_some());
        assert!(json["byteArray"].is_string());
    }
}
