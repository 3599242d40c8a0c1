//! Text encodings for key material: base58 and the JSON byte-array string.

use crate::key::SecretKeyBytes;

/// Base58 (Bitcoin alphabet) encoding of a raw byte buffer. Leading zero
/// bytes map to leading '1' characters.
pub fn to_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Serializes the 64 secret-key bytes as a compact JSON array string,
/// e.g. `"[12,34,...]"`.
pub fn to_byte_array_json(secret_key: &SecretKeyBytes) -> String {
    // Serializing a byte slice to an in-memory string cannot fail.
    serde_json::to_string(&secret_key[..]).expect("byte slice serializes to JSON")
}
