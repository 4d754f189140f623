//! Ed25519 detached-signature verification for `signMessage` responses.
//!
//! The extension signs the raw UTF-8 message (not its hex form) and returns
//! the 64-byte signature and 32-byte public key as hex.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use lib_core::{Result, WalletError};
use lib_utils::decode_hex;

/// Verify `signature_hex` over `message` with `public_key_hex`.
///
/// Malformed hex or wrong lengths are [`WalletError::Decoding`]; a well-formed
/// signature that does not match is [`WalletError::SignatureInvalid`].
pub fn verify_signature(message: &[u8], signature_hex: &str, public_key_hex: &str) -> Result<()> {
    let signature_bytes = decode_hex(signature_hex)
        .map_err(|e| WalletError::Decoding(format!("signature is not hex: {e}")))?;
    let key_bytes = decode_hex(public_key_hex)
        .map_err(|e| WalletError::Decoding(format!("public key is not hex: {e}")))?;

    let key_bytes: [u8; 32] = key_bytes.as_slice().try_into().map_err(|_| {
        WalletError::Decoding(format!("public key must be 32 bytes, got {}", key_bytes.len()))
    })?;
    let public_key = VerifyingKey::from_bytes(&key_bytes)
        .map_err(|e| WalletError::Decoding(format!("invalid public key: {e}")))?;
    let signature = Signature::from_slice(&signature_bytes)
        .map_err(|e| WalletError::Decoding(format!("invalid signature: {e}")))?;

    public_key
        .verify(message, &signature)
        .map_err(|_| WalletError::SignatureInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};

    fn signed(message: &str) -> (String, String) {
        let key = SigningKey::from_bytes(&[7u8; 32]);
        let signature = key.sign(message.as_bytes());
        (
            format!("0x{}", hex::encode(signature.to_bytes())),
            format!("0x{}", hex::encode(key.verifying_key().to_bytes())),
        )
    }

    #[test]
    fn test_valid_signature() {
        let (sig, key) = signed("hello supra");
        assert_eq!(verify_signature(b"hello supra", &sig, &key), Ok(()));
        // unprefixed hex is accepted too
        assert_eq!(
            verify_signature(b"hello supra", &sig[2..], &key[2..]),
            Ok(())
        );
    }

    #[test]
    fn test_wrong_message_fails() {
        let (sig, key) = signed("hello supra");
        assert_eq!(
            verify_signature(b"hello suprA", &sig, &key),
            Err(WalletError::SignatureInvalid)
        );
    }

    #[test]
    fn test_other_key_fails() {
        let (sig, _) = signed("hello supra");
        let other = SigningKey::from_bytes(&[9u8; 32]);
        let other_key = hex::encode(other.verifying_key().to_bytes());
        assert_eq!(
            verify_signature(b"hello supra", &sig, &other_key),
            Err(WalletError::SignatureInvalid)
        );
    }

    #[test]
    fn test_malformed_inputs_are_decoding_errors() {
        let (sig, key) = signed("m");
        assert!(matches!(
            verify_signature(b"m", "0xnothex", &key),
            Err(WalletError::Decoding(_))
        ));
        assert!(matches!(
            verify_signature(b"m", &sig, "0xabcd"),
            Err(WalletError::Decoding(_))
        ));
        assert!(matches!(
            verify_signature(b"m", "0xabcd", &key),
            Err(WalletError::Decoding(_))
        ));
    }
}
