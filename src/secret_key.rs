use crate::error::KeygenError;
use crate::key::{SecretKeyBytes, KEY_LENGTH, SECRET_KEY_LENGTH};

/// Concatenates a 32-byte private seed and 32-byte public key into the
/// canonical 64-byte secret key: private at offset 0, public at offset 32.
pub fn assemble_secret_key(
    private_key: &[u8],
    public_key: &[u8],
) -> Result<SecretKeyBytes, KeygenError> {
    if private_key.len() != KEY_LENGTH {
        return Err(KeygenError::InvalidKeyLength {
            expected: KEY_LENGTH,
            got: private_key.len(),
        });
    }
    if public_key.len() != KEY_LENGTH {
        return Err(KeygenError::InvalidKeyLength {
            expected: KEY_LENGTH,
            got: public_key.len(),
        });
    }

    let mut secret_key = [0u8; SECRET_KEY_LENGTH];
    secret_key[..KEY_LENGTH].copy_from_slice(private_key);
    secret_key[KEY_LENGTH..].copy_from_slice(public_key);
    Ok(secret_key)
}
