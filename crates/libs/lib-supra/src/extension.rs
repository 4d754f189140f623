//! # StarKey Extension Seam
//!
//! The extension is an injected capability object. [`StarkeyProvider`] is the
//! set of calls the wallet kit makes on it; the browser binding implements it
//! over `window.starkey.supra`, tests implement it in memory.
//!
//! [`Extension`] is what the provider is handed: either an installed
//! extension or [`Extension::Absent`] for environments without one. Because
//! extensions are often injected after the page script starts, the provider
//! holds an [`ExtensionLocator`] and re-asks it, polling for a bounded time
//! with [`poll_for_extension`].

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use lib_core::Result;
use shared::dto::transaction::SendTxParams;
use shared::dto::wallet::{
    ChainIdResponse, ChangeNetworkRequest, ConnectRequest, SignMessageRequest, SignMessageResponse,
};
use tracing::debug;

use crate::timer;

/// Notifications the extension pushes to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionEvent {
    /// `accountChanged`; an empty list means the user locked or revoked access.
    AccountChanged(Vec<String>),
    /// `networkChanged` with the raw chain id.
    NetworkChanged(String),
    /// `disconnect`
    Disconnected,
}

impl ExtensionEvent {
    /// JS event names, in subscription order.
    pub const NAMES: [&'static str; 3] = ["accountChanged", "networkChanged", "disconnect"];

    pub fn name(&self) -> &'static str {
        match self {
            ExtensionEvent::AccountChanged(_) => "accountChanged",
            ExtensionEvent::NetworkChanged(_) => "networkChanged",
            ExtensionEvent::Disconnected => "disconnect",
        }
    }
}

/// Callback registered with the extension.
pub type EventListener = Rc<dyn Fn(ExtensionEvent)>;

/// Calls the wallet kit makes on `window.starkey.supra`.
///
/// Errors thrown by the extension (including user rejection) surface as
/// [`WalletError::Extension`](lib_core::WalletError::Extension).
#[async_trait(?Send)]
pub trait StarkeyProvider {
    /// Accounts the page already has access to.
    async fn account(&self) -> Result<Vec<String>>;

    /// Ask the user for account access on a network.
    async fn connect(&self, request: &ConnectRequest) -> Result<Vec<String>>;

    async fn disconnect(&self) -> Result<()>;

    async fn get_chain_id(&self) -> Result<ChainIdResponse>;

    /// `None` when the extension reports nothing.
    async fn change_network(&self, request: &ChangeNetworkRequest) -> Result<Option<ChainIdResponse>>;

    async fn sign_message(&self, request: &SignMessageRequest) -> Result<SignMessageResponse>;

    /// Submit a serialized transaction, returning its hash.
    async fn send_transaction(&self, params: &SendTxParams) -> Result<Option<String>>;

    /// Register `listener` for every event in [`ExtensionEvent::NAMES`].
    fn subscribe(&self, listener: EventListener);
}

/// The injected capability object.
#[derive(Clone)]
pub enum Extension {
    Installed(Rc<dyn StarkeyProvider>),
    Absent,
}

impl Extension {
    pub fn installed(provider: impl StarkeyProvider + 'static) -> Self {
        Extension::Installed(Rc::new(provider))
    }

    pub fn is_installed(&self) -> bool {
        matches!(self, Extension::Installed(_))
    }

    pub fn provider(&self) -> Option<Rc<dyn StarkeyProvider>> {
        match self {
            Extension::Installed(provider) => Some(provider.clone()),
            Extension::Absent => None,
        }
    }
}

/// Finds the extension on demand.
pub trait ExtensionLocator {
    fn locate(&self) -> Extension;
}

/// A fixed extension always locates itself.
impl ExtensionLocator for Extension {
    fn locate(&self) -> Extension {
        self.clone()
    }
}

impl<F> ExtensionLocator for F
where
    F: Fn() -> Extension,
{
    fn locate(&self) -> Extension {
        self()
    }
}

/// Result of [`poll_for_extension`].
pub enum PollOutcome {
    Found(Rc<dyn StarkeyProvider>),
    NotFound,
}

impl PollOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, PollOutcome::Found(_))
    }
}

/// Look for the extension now, then every `interval` until `deadline` has
/// been spent waiting.
///
/// The budget counts sleeps rather than wall-clock time, so the number of
/// looks is always `deadline / interval + 1`.
pub async fn poll_for_extension(
    locator: &dyn ExtensionLocator,
    interval: Duration,
    deadline: Duration,
) -> PollOutcome {
    let mut waited = Duration::ZERO;
    loop {
        if let Some(provider) = locator.locate().provider() {
            debug!("StarKey extension found after {:?}", waited);
            return PollOutcome::Found(provider);
        }
        if waited >= deadline || interval.is_zero() {
            debug!("StarKey extension not found within {:?}", deadline);
            return PollOutcome::NotFound;
        }
        timer::sleep(interval).await;
        waited += interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Noop;

    #[async_trait(?Send)]
    impl StarkeyProvider for Noop {
        async fn account(&self) -> Result<Vec<String>> {
            Ok(vec![])
        }
        async fn connect(&self, _: &ConnectRequest) -> Result<Vec<String>> {
            Ok(vec![])
        }
        async fn disconnect(&self) -> Result<()> {
            Ok(())
        }
        async fn get_chain_id(&self) -> Result<ChainIdResponse> {
            Ok(ChainIdResponse {
                chain_id: "6".to_string(),
            })
        }
        async fn change_network(&self, _: &ChangeNetworkRequest) -> Result<Option<ChainIdResponse>> {
            Ok(None)
        }
        async fn sign_message(&self, _: &SignMessageRequest) -> Result<SignMessageResponse> {
            Ok(SignMessageResponse::default())
        }
        async fn send_transaction(&self, _: &SendTxParams) -> Result<Option<String>> {
            Ok(None)
        }
        fn subscribe(&self, _: EventListener) {}
    }

    #[tokio::test]
    async fn test_poll_finds_installed_extension_immediately() {
        let outcome = poll_for_extension(
            &Extension::installed(Noop),
            Duration::from_millis(1),
            Duration::from_millis(5),
        )
        .await;
        assert!(outcome.is_found());
    }

    #[tokio::test]
    async fn test_poll_gives_up_after_deadline() {
        let looks = Cell::new(0u32);
        let locator = || {
            looks.set(looks.get() + 1);
            Extension::Absent
        };

        let outcome =
            poll_for_extension(&locator, Duration::from_millis(2), Duration::from_millis(10)).await;

        assert!(!outcome.is_found());
        assert_eq!(looks.get(), 6);
    }

    #[tokio::test]
    async fn test_poll_sees_late_injection() {
        let looks = Cell::new(0u32);
        let locator = || {
            looks.set(looks.get() + 1);
            if looks.get() >= 3 {
                Extension::installed(Noop)
            } else {
                Extension::Absent
            }
        };

        let outcome =
            poll_for_extension(&locator, Duration::from_millis(1), Duration::from_millis(50)).await;

        assert!(outcome.is_found());
        assert_eq!(looks.get(), 3);
    }

    #[test]
    fn test_event_names() {
        assert_eq!(ExtensionEvent::Disconnected.name(), "disconnect");
        assert_eq!(ExtensionEvent::AccountChanged(vec![]).name(), ExtensionEvent::NAMES[0]);
    }
}
