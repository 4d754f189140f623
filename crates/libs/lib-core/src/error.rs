//! # Centralized Error Handling
//!
//! This module defines [`WalletError`], the single error type used by every
//! wallet crate. It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Extension errors** - the injected wallet is missing or refused a call
//!    - [`ExtensionNotFound`](WalletError::ExtensionNotFound)
//!    - [`Extension`](WalletError::Extension)
//!    - [`SignatureRejected`](WalletError::SignatureRejected)
//!
//! 2. **Session errors** - the caller asked for something the session can't do
//!    - [`NotConnected`](WalletError::NotConnected)
//!    - [`InvalidInput`](WalletError::InvalidInput)
//!
//! 3. **RPC errors** - the view endpoint failed
//!    - [`Http`](WalletError::Http) carries the status code and body text
//!    - [`Rpc`](WalletError::Rpc) for transport failures
//!    - [`Cancelled`](WalletError::Cancelled) when the caller aborted
//!
//! 4. **Data errors**
//!    - [`Decoding`](WalletError::Decoding), [`SignatureInvalid`](WalletError::SignatureInvalid),
//!      [`Transaction`](WalletError::Transaction), [`Config`](WalletError::Config)
//!
//! ## Sentinels
//!
//! Several provider operations never return an error and degrade to a safe
//! value instead (`None`, an empty signature, the `"0.00"` balance). The error
//! is still logged before it is swallowed.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{Result, WalletError};
//!
//! fn require_account(account: Option<&str>) -> Result<String> {
//!     account.map(str::to_string).ok_or(WalletError::NotConnected)
//! }
//!
//! assert_eq!(require_account(None).unwrap_err().to_string(), "Wallet not connected");
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, WalletError>`.
pub type Result<T> = std::result::Result<T, WalletError>;

/// Wallet-wide error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No StarKey extension could be found in the page.
    #[error("Wallet not available")]
    ExtensionNotFound,

    /// An operation needing a connected account ran without one.
    #[error("Wallet not connected")]
    NotConnected,

    /// The extension threw or rejected the call (user rejection included).
    #[error("Extension error: {0}")]
    Extension(String),

    /// The view endpoint answered with a non-2xx status.
    #[error("HTTP error! status: {status}, message: {body}")]
    Http { status: u16, body: String },

    /// The request never produced an HTTP response.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// The caller aborted the request.
    #[error("Request cancelled")]
    Cancelled,

    /// A payload could not be decoded (JSON, hex, key bytes).
    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The extension answered a sign request without a signature.
    #[error("Signature rejected: {0}")]
    SignatureRejected(String),

    /// The returned signature does not verify against the returned key.
    #[error("Signature verification failed")]
    SignatureInvalid,

    /// The external client failed to build the transaction.
    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WalletError {
    /// HTTP status of an [`Http`](WalletError::Http) error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            WalletError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short message suitable for showing in a dApp UI.
    pub fn user_message(&self) -> String {
        match self {
            WalletError::ExtensionNotFound => "StarKey wallet is not installed".to_string(),
            WalletError::NotConnected => "Connect your wallet first".to_string(),
            WalletError::Extension(msg) | WalletError::SignatureRejected(msg) => msg.clone(),
            WalletError::Cancelled => "Request cancelled".to_string(),
            WalletError::InvalidInput(msg) => msg.clone(),
            WalletError::Http { .. } | WalletError::Rpc(_) => {
                "Supra RPC temporarily unavailable".to_string()
            }
            WalletError::SignatureInvalid => "Wallet returned an invalid signature".to_string(),
            WalletError::Decoding(_) | WalletError::Transaction(_) | WalletError::Config(_) => {
                "An internal error occurred".to_string()
            }
        }
    }
}

/// Convert `serde_json::Error` to `WalletError`.
impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        WalletError::Decoding(format!("JSON error: {}", err))
    }
}

impl From<lib_utils::AddressError> for WalletError {
    fn from(err: lib_utils::AddressError) -> Self {
        WalletError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_carries_status() {
        let err = WalletError::Http {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.status_code(), Some(502));
        assert_eq!(err.to_string(), "HTTP error! status: 502, message: bad gateway");
        assert_eq!(WalletError::Cancelled.status_code(), None);
    }

    #[test]
    fn test_user_message_hides_internal_details() {
        let err = WalletError::Decoding("JSON error: expected value".to_string());
        assert_eq!(err.user_message(), "An internal error occurred");

        let err = WalletError::Extension("User rejected the request".to_string());
        assert_eq!(err.user_message(), "User rejected the request");
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: WalletError = json_err.into();
        assert!(matches!(err, WalletError::Decoding(_)));
    }
}
