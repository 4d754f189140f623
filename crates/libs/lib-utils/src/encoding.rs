//! # Hex Encoding
//!
//! The extension takes messages as `0x`-prefixed hex and returns keys and
//! signatures the same way.

use crate::address::remove_0x_prefix;

/// Hex-encode the UTF-8 bytes of `message` with a `0x` prefix.
///
/// ```rust
/// use lib_utils::encode_message_hex;
///
/// assert_eq!(encode_message_hex("hi"), "0x6869");
/// ```
pub fn encode_message_hex(message: &str) -> String {
    format!("0x{}", hex::encode(message.as_bytes()))
}

/// Decode a hex string, with or without the `0x` prefix.
pub fn decode_hex(value: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(remove_0x_prefix(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_message_hex() {
        assert_eq!(encode_message_hex(""), "0x");
        assert_eq!(encode_message_hex("Hello"), "0x48656c6c6f");
        // multi-byte UTF-8
        assert_eq!(encode_message_hex("é"), "0xc3a9");
    }

    #[test]
    fn test_decode_hex_accepts_prefix() {
        assert_eq!(decode_hex("0x48656c6c6f").unwrap(), b"Hello");
        assert_eq!(decode_hex("48656C6C6F").unwrap(), b"Hello");
        assert!(decode_hex("0xzz").is_err());
        assert!(decode_hex("0xabc").is_err());
    }

    #[test]
    fn test_decode_hex_rejects_doubled_prefix() {
        assert!(decode_hex("0x0x4865").is_err());
    }
}
