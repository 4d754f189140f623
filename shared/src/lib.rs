//! # Shared Data Transfer Objects Library
//!
//! This library defines the JSON contract between the wallet kit, the StarKey
//! extension and the Supra RPC view endpoint.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::view`]**: view-function request body and result envelope
//!   - **[`dto::transaction`]**: send-transaction payload and account info
//!   - **[`dto::wallet`]**: extension requests/responses and session records
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! The extension speaks camelCase (`publicKey`, `chainId`,
//! `waitForTransaction`) while the RPC speaks snake_case (`type_arguments`).
//! Each DTO carries the `serde` attributes that match its peer, so callers
//! never rename fields by hand.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::view::ViewFunctionBody;
//! use shared::utils::truncate_address;
//!
//! let body = ViewFunctionBody::new("0x1", "coin", "balance")
//!     .with_type_arguments(vec!["0x1::supra_coin::SupraCoin".to_string()])
//!     .with_arguments(vec![serde_json::json!("0xcafe")]);
//! assert_eq!(body.function, "0x1::coin::balance");
//!
//! let display = truncate_address("0x8f2c4a1b9e7d6c5b4a3f2e1d0c9b8a7f6e5d4c3b2a1f0e9d8c7b6a5f4e3d2c1b");
//! assert_eq!(display, "0x8f2c...2c1b");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
