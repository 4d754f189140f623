//! # Core Library
//!
//! Error type, configuration and the network table shared by the wallet crates.

pub mod config;
pub mod error;
pub mod network;

// Re-export commonly used types
pub use config::WalletConfig;
pub use error::{Result, WalletError};
pub use network::{NetworkConfig, SupraChainId};
