//! # Supra Wallet Provider
//!
//! Session state and glue around the StarKey browser extension
//! (`window.starkey.supra`) and the Supra RPC view endpoint.
//!
//! ## Features
//!
//! - **Discovery**: locate the injected extension, polling for a bounded time
//!   when the page loads before the extension does
//! - **Session**: account, chain id and balance kept in one [`SessionState`],
//!   driven by an explicit phase machine ([`state`])
//! - **Signing**: hex-encode messages and verify the returned Ed25519 signature
//! - **Transactions**: hand raw-transaction building to an external
//!   [`SupraClient`] and submit the bytes through the extension
//! - **View functions**: `POST {rpc}/rpc/v2/view` with cancellation
//!
//! ## Runtime Model
//!
//! Everything runs on one thread: the browser event loop in production, a
//! current-thread tokio runtime in tests. Futures are not `Send` and the
//! provider shares its state through `Rc`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lib_core::{SupraChainId, WalletConfig};
//! use lib_supra::{Extension, WalletProvider};
//!
//! # async fn example() {
//! // In the browser the locator re-reads `window.starkey.supra`.
//! let provider = WalletProvider::with_http(Extension::Absent, WalletConfig::default());
//!
//! if let Err(err) = provider.connect(SupraChainId::Testnet).await {
//!     println!("connect failed: {}", err.user_message());
//! }
//! println!("balance: {}", provider.balance());
//! # }
//! ```

pub mod extension;
pub mod inflight;
pub mod provider;
pub mod signing;
pub mod state;
pub mod transaction;
pub mod view;

mod timer;

pub use extension::{
    poll_for_extension, EventListener, Extension, ExtensionEvent, ExtensionLocator, PollOutcome,
    StarkeyProvider,
};
pub use provider::{EventStream, WalletProvider};
pub use state::{SessionState, Transition, WalletPhase, DEFAULT_BALANCE};
pub use transaction::{EntryFunctionParams, RawTxRequest, SupraClient};
pub use view::{HttpViewClient, ViewFunctionParams, ViewService};
