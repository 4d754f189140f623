//! # Data Transfer Objects (DTOs)
//!
//! ## Module Organization
//!
//! - [`view`] - Read-only RPC calls (`POST {rpc}/rpc/v2/view`)
//! - [`transaction`] - Transaction submission through the extension
//! - [`wallet`] - Extension requests, responses and session records
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST https://rpc-testnet.supra.com/rpc/v2/view
//! Content-Type: application/json
//!
//! {
//!   "function": "0x1::coin::balance",
//!   "type_arguments": ["0x1::supra_coin::SupraCoin"],
//!   "arguments": ["0x8f2c...2c1b"]
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "result": ["150000000"] }
//! ```

pub mod transaction;
pub mod view;
pub mod wallet;

pub use transaction::*;
pub use view::*;
pub use wallet::*;
