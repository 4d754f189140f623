//! Transaction submission DTOs.

use serde::{Deserialize, Serialize};

/// Payload handed to the extension's `sendTransaction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTxParams {
    /// Serialized raw transaction, hex without prefix.
    pub data: String,
    pub from: String,
    pub chain_id: String,
    pub options: TxOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxOptions {
    pub wait_for_transaction: bool,
}

impl Default for TxOptions {
    fn default() -> Self {
        Self {
            wait_for_transaction: true,
        }
    }
}

/// Account information returned by the transaction-building client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub sequence_number: u64,
    #[serde(default)]
    pub authentication_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_send_tx_wire_format() {
        let params = SendTxParams {
            data: "deadbeef".to_string(),
            from: "0x1".to_string(),
            chain_id: "6".to_string(),
            options: TxOptions::default(),
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "data": "deadbeef",
                "from": "0x1",
                "chainId": "6",
                "options": { "waitForTransaction": true },
            })
        );
    }

    #[test]
    fn test_account_info_without_auth_key() {
        let info: AccountInfo = serde_json::from_value(json!({ "sequence_number": 7 })).unwrap();
        assert_eq!(info.sequence_number, 7);
        assert!(info.authentication_key.is_empty());
    }
}
