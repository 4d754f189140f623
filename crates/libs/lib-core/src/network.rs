//! # Supra Networks
//!
//! The wallet only ever talks to two networks, identified by the chain ids the
//! StarKey extension reports: `"6"` for testnet and `"8"` for mainnet.
//!
//! ```rust
//! use lib_core::network::SupraChainId;
//!
//! let chain: SupraChainId = "8".parse().unwrap();
//! assert_eq!(chain, SupraChainId::Mainnet);
//! assert_eq!(chain.network().rpc, "https://rpc-mainnet.supra.com");
//! assert_eq!(chain.network().tx_url("0xabc"), "https://suprascan.io/tx/0xabc");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WalletError;

/// RPC and explorer endpoints of one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    pub rpc: &'static str,
    pub scan: &'static str,
}

impl NetworkConfig {
    /// Explorer page of a transaction.
    pub fn tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.scan, tx_hash)
    }

    /// View-function endpoint of this network.
    pub fn view_url(&self) -> String {
        view_url(self.rpc)
    }
}

/// View-function endpoint under an RPC base URL.
pub fn view_url(rpc_base: &str) -> String {
    format!("{}/rpc/v2/view", rpc_base.trim_end_matches('/'))
}

pub const MAINNET: NetworkConfig = NetworkConfig {
    rpc: "https://rpc-mainnet.supra.com",
    scan: "https://suprascan.io",
};

pub const TESTNET: NetworkConfig = NetworkConfig {
    rpc: "https://rpc-testnet.supra.com",
    scan: "https://testnet.suprascan.io",
};

/// Chain identifier as reported by the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupraChainId {
    #[serde(rename = "6")]
    Testnet,
    #[serde(rename = "8")]
    Mainnet,
}

impl SupraChainId {
    pub const ALL: [SupraChainId; 2] = [SupraChainId::Testnet, SupraChainId::Mainnet];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupraChainId::Testnet => "6",
            SupraChainId::Mainnet => "8",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SupraChainId::Testnet => "Testnet",
            SupraChainId::Mainnet => "Mainnet",
        }
    }

    pub fn network(&self) -> &'static NetworkConfig {
        match self {
            SupraChainId::Testnet => &TESTNET,
            SupraChainId::Mainnet => &MAINNET,
        }
    }
}

impl fmt::Display for SupraChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupraChainId {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "6" => Ok(SupraChainId::Testnet),
            "8" => Ok(SupraChainId::Mainnet),
            other => Err(WalletError::InvalidInput(format!("unknown chain id: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chain_ids() {
        assert_eq!("6".parse::<SupraChainId>().unwrap(), SupraChainId::Testnet);
        assert_eq!(" 8 ".parse::<SupraChainId>().unwrap(), SupraChainId::Mainnet);
        assert!("1".parse::<SupraChainId>().is_err());
        assert!("".parse::<SupraChainId>().is_err());
    }

    #[test]
    fn test_serde_uses_chain_id_strings() {
        assert_eq!(serde_json::to_string(&SupraChainId::Testnet).unwrap(), "\"6\"");
        let chain: SupraChainId = serde_json::from_str("\"8\"").unwrap();
        assert_eq!(chain, SupraChainId::Mainnet);
    }

    #[test]
    fn test_network_table() {
        assert_eq!(SupraChainId::Testnet.network().scan, "https://testnet.suprascan.io");
        assert_eq!(
            SupraChainId::Testnet.network().view_url(),
            "https://rpc-testnet.supra.com/rpc/v2/view"
        );
        assert_eq!(
            SupraChainId::Testnet.network().tx_url("0x01"),
            "https://testnet.suprascan.io/tx/0x01"
        );
    }

    #[test]
    fn test_view_url_trims_trailing_slash() {
        assert_eq!(view_url("http://127.0.0.1:9000/"), "http://127.0.0.1:9000/rpc/v2/view");
    }
}
