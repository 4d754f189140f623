//! StarKey extension DTOs.
//!
//! Requests are serialized into the JS objects the extension expects; responses
//! are decoded leniently because the extension omits fields on failure.

use serde::{Deserialize, Serialize};

/// Argument of `connect({ chainId, multiple })`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRequest {
    pub chain_id: String,
    pub multiple: bool,
}

/// Argument of `changeNetwork({ networkId })`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeNetworkRequest {
    pub network_id: String,
}

/// Argument of `signMessage({ message })`; `message` is `0x`-prefixed hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignMessageRequest {
    pub message: String,
}

/// `{ chainId }` as returned by `getChainId()` and `changeNetwork()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainIdResponse {
    pub chain_id: String,
}

/// Error object some extension calls put in their response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionErrorBody {
    #[serde(default)]
    pub message: String,
}

/// Raw `signMessage` response; every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignMessageResponse {
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub error: Option<ExtensionErrorBody>,
}

impl SignMessageResponse {
    /// Message of the embedded error, or a generic one.
    pub fn error_message(&self) -> String {
        self.error
            .as_ref()
            .map(|e| e.message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "wallet returned no signature".to_string())
    }
}

/// Public key and signature of a signed message, both hex.
///
/// The empty value (both fields empty) means signing failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureResponse {
    pub public_key: String,
    pub signature: String,
}

impl SignatureResponse {
    pub fn is_empty(&self) -> bool {
        self.signature.is_empty()
    }
}

/// Connected account as held in the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDetails {
    pub address: String,
    pub domain: String,
}

impl AccountDetails {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            domain: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_requests_are_camel_case() {
        let req = ConnectRequest {
            chain_id: "8".to_string(),
            multiple: false,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "chainId": "8", "multiple": false })
        );

        let req = ChangeNetworkRequest {
            network_id: "6".to_string(),
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "networkId": "6" }));
    }

    #[test]
    fn test_sign_response_lenient_decode() {
        let ok: SignMessageResponse =
            serde_json::from_value(json!({ "publicKey": "0xaa", "signature": "0xbb" })).unwrap();
        assert_eq!(ok.signature.as_deref(), Some("0xbb"));

        let rejected: SignMessageResponse =
            serde_json::from_value(json!({ "error": { "message": "User rejected" } })).unwrap();
        assert!(rejected.signature.is_none());
        assert_eq!(rejected.error_message(), "User rejected");

        let empty: SignMessageResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.error_message(), "wallet returned no signature");
    }

    #[test]
    fn test_empty_signature_is_failure() {
        assert!(SignatureResponse::default().is_empty());
        let sig = SignatureResponse {
            public_key: "0xaa".to_string(),
            signature: "0xbb".to_string(),
        };
        assert!(!sig.is_empty());
    }
}
