//! # Address Helpers
//!
//! Supra account addresses are 32-byte values written as `0x` followed by 64
//! lowercase hex digits. Wallets and users often hand out the short form
//! (`0x1`, `0xabc`), so callers normalise before comparing or submitting.

use thiserror::Error;

/// Number of hex digits in a full 32-byte address.
const ADDRESS_HEX_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("hex string is too long: {0} characters (max 64)")]
    TooLong(usize),
}

/// Pad an address to the full 32-byte form.
///
/// The optional `0x`/`0X` prefix is dropped, the body lowercased and
/// left-padded with zeros, then re-prefixed with `0x`.
///
/// # Examples
///
/// ```rust
/// use lib_utils::add_address_padding;
///
/// assert_eq!(
///     add_address_padding("0x123").unwrap(),
///     "0x0000000000000000000000000000000000000000000000000000000000000123"
/// );
/// ```
pub fn add_address_padding(input: &str) -> Result<String, AddressError> {
    let body = remove_0x_prefix(input.trim()).to_lowercase();

    if body.len() > ADDRESS_HEX_LEN {
        return Err(AddressError::TooLong(body.len()));
    }

    Ok(format!("0x{:0>width$}", body, width = ADDRESS_HEX_LEN))
}

/// Remove a leading `0x` or `0X`, once. Input without a prefix is returned
/// unchanged.
///
/// ```rust
/// use lib_utils::remove_0x_prefix;
///
/// assert_eq!(remove_0x_prefix("0x123abc"), "123abc");
/// assert_eq!(remove_0x_prefix("123abc"), "123abc");
/// ```
pub fn remove_0x_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_short_address() {
        let padded = add_address_padding("0x123").unwrap();
        assert_eq!(padded.len(), 66);
        assert_eq!(
            padded,
            "0x0000000000000000000000000000000000000000000000000000000000000123"
        );
    }

    #[test]
    fn test_padding_normalises_prefix_case_and_whitespace() {
        let padded = add_address_padding("  0XABCDEF ").unwrap();
        assert!(padded.starts_with("0x"));
        assert!(padded.ends_with("abcdef"));
        assert_eq!(padded.len(), 66);

        assert_eq!(add_address_padding("1").unwrap(), add_address_padding("0x1").unwrap());
    }

    #[test]
    fn test_padding_keeps_full_length_address() {
        let full = format!("0x{}", "a".repeat(64));
        assert_eq!(add_address_padding(&full).unwrap(), full);
    }

    #[test]
    fn test_padding_is_right_aligned_for_every_length() {
        for len in 0..=64 {
            let body = "f".repeat(len);
            let padded = add_address_padding(&body).unwrap();
            assert_eq!(padded.len(), 66);
            assert!(padded.ends_with(&body));
            assert!(padded[2..66 - len].chars().all(|c| c == '0'));
        }
    }

    #[test]
    fn test_padding_rejects_long_body() {
        let long = format!("0x{}", "1".repeat(65));
        assert_eq!(add_address_padding(&long), Err(AddressError::TooLong(65)));
    }

    #[test]
    fn test_remove_prefix() {
        assert_eq!(remove_0x_prefix("0xdead"), "dead");
        assert_eq!(remove_0x_prefix("0XBEEF"), "BEEF");
        assert_eq!(remove_0x_prefix("cafe"), "cafe");
        assert_eq!(remove_0x_prefix(""), "");
        assert_eq!(remove_0x_prefix("0x"), "");
    }

    #[test]
    fn test_remove_prefix_idempotent() {
        for input in ["0xab", "ab", "0XAB", "x0ab", "0"] {
            let once = remove_0x_prefix(input);
            assert_eq!(remove_0x_prefix(once), once, "input {input}");
        }
    }

    #[test]
    fn test_remove_prefix_strips_only_one() {
        assert_eq!(remove_0x_prefix("0x0xab"), "0xab");
        assert_eq!(remove_0x_prefix("0X0x"), "0x");
    }
}
