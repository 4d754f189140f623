//! Wallet state management
//!
//! One [`WalletProvider`] per app, mirrored into a reactive
//! [`SessionState`] signal through `on_change`. Components reach both
//! through [`use_wallet`].

use std::cell::Cell;

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::{Result, SupraChainId, WalletConfig};
use lib_supra::{EntryFunctionParams, SessionState, ViewFunctionParams, WalletPhase, WalletProvider};
use serde::de::DeserializeOwned;
use shared::dto::wallet::SignatureResponse;

use crate::services::starkey::WindowLocator;
use crate::utils::url::wallet_connect_onload;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub state: RwSignal<SessionState>,
    provider: StoredValue<WalletProvider, LocalStorage>,
}

impl WalletContext {
    fn provider(&self) -> WalletProvider {
        self.provider.get_value()
    }

    // reactive reads

    pub fn is_connected(&self) -> bool {
        self.state.with(|s| s.is_connected())
    }

    pub fn is_installed(&self) -> bool {
        self.state.with(|s| s.is_installed)
    }

    pub fn phase(&self) -> WalletPhase {
        self.state.with(|s| s.phase)
    }

    pub fn account(&self) -> Option<String> {
        self.state.with(|s| s.address().map(str::to_string))
    }

    pub fn domain(&self) -> Option<String> {
        self.state.with(|s| s.domain().map(str::to_string))
    }

    pub fn balance(&self) -> String {
        self.state.with(|s| s.balance.clone())
    }

    pub fn chain_id(&self) -> SupraChainId {
        self.state.with(|s| s.chain_id)
    }

    // provider operations

    pub async fn connect(self, chain: SupraChainId) -> Result<Option<String>> {
        self.provider().connect(chain).await
    }

    pub async fn disconnect(self) {
        self.provider().disconnect().await
    }

    pub async fn switch_network(self, chain: SupraChainId) -> Option<SupraChainId> {
        self.provider().switch_network(chain).await
    }

    pub async fn update_balance(self, address: String) -> Option<String> {
        self.provider().update_balance(&address).await
    }

    pub async fn sign_message(self, message: String) -> SignatureResponse {
        self.provider().sign_message(&message).await
    }

    pub async fn sign_message_v2(self, message: String) -> Result<SignatureResponse> {
        self.provider().sign_message_v2(&message).await
    }

    pub fn ensure_tx_dependencies(&self) -> Result<String> {
        self.provider().ensure_tx_dependencies()
    }

    pub async fn execute_entry_function(self, params: EntryFunctionParams) -> Result<Option<String>> {
        self.provider().execute_entry_function(params).await
    }

    pub async fn execute_view_function<T: DeserializeOwned>(self, params: ViewFunctionParams) -> Result<T> {
        self.provider().execute_view_function(params).await
    }

    pub fn fetch_transaction_scan_url(&self, tx_hash: &str) -> String {
        self.provider().fetch_transaction_scan_url(tx_hash)
    }
}

/// Create the provider, start extension discovery and provide the context.
pub fn provide_wallet_context() -> WalletContext {
    let config = WalletConfig::default();
    let provider = WalletProvider::with_http(WindowLocator::default(), config);

    let state = RwSignal::new(provider.state());
    provider.on_change(move |s| state.set(s.clone()));

    let context = WalletContext {
        state,
        provider: StoredValue::new_local(provider.clone()),
    };
    provide_context(context);

    spawn_local(async move {
        provider.run().await;
    });

    if wallet_connect_onload() {
        auto_connect(context);
    }

    context
}

/// Connect once, as soon as discovery settles with the extension present.
fn auto_connect(context: WalletContext) {
    let attempted = Cell::new(false);
    Effect::new(move |_| {
        if context.phase() != WalletPhase::Disconnected || attempted.replace(true) {
            return;
        }
        let chain = context.state.with_untracked(|s| s.chain_id);
        log::info!("Auto-connecting on {}", chain.name());
        spawn_local(async move {
            if let Err(e) = context.connect(chain).await {
                log::warn!("Auto-connect failed: {}", e);
            }
        });
    });
}

pub fn use_wallet() -> WalletContext {
    expect_context::<WalletContext>()
}
