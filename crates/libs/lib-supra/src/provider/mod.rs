//! # Wallet Provider
//!
//! [`WalletProvider`] owns the [`SessionState`] and mediates every call into
//! the StarKey extension and the view RPC.
//!
//! ## Lifecycle
//!
//! 1. [`initialize`](WalletProvider::initialize) locates the extension,
//!    polling for it when the page loaded first, subscribes to its events and
//!    synchronizes the session once.
//! 2. Extension events are fed back through
//!    [`handle_event`](WalletProvider::handle_event).
//!    [`run`](WalletProvider::run) does both in one future, which is what the
//!    browser binding spawns.
//!
//! ## Failure Policy
//!
//! `connect`, `try_sign_message`, `sign_message_v2`, `execute_entry_function`
//! and `execute_view_function` return errors. Everything else degrades to a
//! sentinel (`None`, an empty signature, the `"0.00"` balance) after logging.
//! Nothing is retried.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::mpsc::{self, UnboundedReceiver};
use futures::future::{Abortable, Aborted};
use futures::StreamExt;
use lib_core::{Result, SupraChainId, WalletConfig, WalletError};
use lib_utils::{encode_message_hex, from_supra_quant};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use shared::dto::transaction::{SendTxParams, TxOptions};
use shared::dto::view::ViewResult;
use shared::dto::wallet::{
    AccountDetails, ChangeNetworkRequest, ConnectRequest, SignMessageRequest, SignatureResponse,
};
use tracing::{debug, error, info, warn};

use crate::extension::{poll_for_extension, ExtensionEvent, ExtensionLocator, PollOutcome, StarkeyProvider};
use crate::inflight::InFlightSlot;
use crate::signing::verify_signature;
use crate::state::{SessionState, Transition, DEFAULT_BALANCE};
use crate::transaction::EntryFunctionParams;
use crate::view::{HttpViewClient, ViewFunctionParams, ViewService};


/// Events forwarded from the extension's listeners.
pub type EventStream = UnboundedReceiver<ExtensionEvent>;

/// Move type of the native coin.
pub const SUPRA_COIN_TYPE: &str = "0x1::supra_coin::SupraCoin";

/// Decimals shown for the session balance.
pub const BALANCE_DECIMALS: u32 = 4;

type Observer = Rc<dyn Fn(&SessionState)>;

struct Inner {
    config: WalletConfig,
    locator: Box<dyn ExtensionLocator>,
    view: Rc<dyn ViewService>,
    extension: RefCell<Option<Rc<dyn StarkeyProvider>>>,
    state: RefCell<SessionState>,
    balance_slot: InFlightSlot,
    observers: RefCell<Vec<Observer>>,
}

/// Cheap to clone; clones share one session.
#[derive(Clone)]
pub struct WalletProvider {
    inner: Rc<Inner>,
}

impl WalletProvider {
    pub fn new(
        locator: impl ExtensionLocator + 'static,
        view: Rc<dyn ViewService>,
        config: WalletConfig,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                config,
                locator: Box::new(locator),
                view,
                extension: RefCell::new(None),
                state: RefCell::new(SessionState::default()),
                balance_slot: InFlightSlot::new(),
                observers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Provider backed by [`HttpViewClient`].
    pub fn with_http(locator: impl ExtensionLocator + 'static, config: WalletConfig) -> Self {
        Self::new(locator, Rc::new(HttpViewClient::new()), config)
    }

    pub fn config(&self) -> &WalletConfig {
        &self.inner.config
    }

    // -- state accessors --

    /// Snapshot of the session.
    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.inner.state.borrow().is_connected()
    }

    pub fn is_installed(&self) -> bool {
        self.inner.state.borrow().is_installed
    }

    pub fn account(&self) -> Option<String> {
        self.inner.state.borrow().address().map(str::to_string)
    }

    pub fn balance(&self) -> String {
        self.inner.state.borrow().balance.clone()
    }

    pub fn chain_id(&self) -> SupraChainId {
        self.inner.state.borrow().chain_id
    }

    /// Call `observer` with the new state after every mutation.
    pub fn on_change(&self, observer: impl Fn(&SessionState) + 'static) {
        self.inner.observers.borrow_mut().push(Rc::new(observer));
    }

    fn update_state(&self, mutate: impl FnOnce(&mut SessionState)) {
        let snapshot = {
            let mut state = self.inner.state.borrow_mut();
            mutate(&mut state);
            state.clone()
        };
        // observers may read the provider again
        let observers = self.inner.observers.borrow().clone();
        for observer in observers {
            observer(&snapshot);
        }
    }

    // -- extension discovery --

    /// The attached extension, locating it on first use.
    fn extension(&self) -> Option<Rc<dyn StarkeyProvider>> {
        let attached = self.inner.extension.borrow().clone();
        if attached.is_some() {
            return attached;
        }
        let provider = self.inner.locator.locate().provider()?;
        self.attach(provider.clone());
        Some(provider)
    }

    fn attach(&self, provider: Rc<dyn StarkeyProvider>) {
        *self.inner.extension.borrow_mut() = Some(provider);
        self.update_state(|s| {
            s.is_installed = true;
            s.apply(Transition::ExtensionDetected);
        });
    }

    /// Find the extension, subscribe to its events and synchronize once.
    ///
    /// Returns `None` when the extension never showed up within
    /// `config.poll_timeout`.
    pub async fn initialize(&self) -> Option<EventStream> {
        let config = &self.inner.config;
        let provider = match poll_for_extension(
            self.inner.locator.as_ref(),
            config.poll_interval,
            config.poll_timeout,
        )
        .await
        {
            PollOutcome::Found(provider) => provider,
            PollOutcome::NotFound => {
                info!("StarKey extension not installed");
                self.update_state(|s| {
                    s.apply(Transition::ExtensionTimedOut);
                });
                return None;
            }
        };

        self.attach(provider.clone());

        let (tx, rx) = mpsc::unbounded();
        provider.subscribe(Rc::new(move |event: ExtensionEvent| {
            if tx.unbounded_send(event).is_err() {
                debug!("Dropping extension event, provider gone");
            }
        }));

        self.sync_wallet().await;
        Some(rx)
    }

    /// [`initialize`](Self::initialize), then handle events until the
    /// extension drops its listeners.
    pub async fn run(&self) {
        let Some(mut events) = self.initialize().await else {
            return;
        };
        while let Some(event) = events.next().await {
            self.handle_event(event).await;
        }
    }

    pub async fn handle_event(&self, event: ExtensionEvent) {
        debug!("StarKey event: {}", event.name());
        match event {
            ExtensionEvent::AccountChanged(accounts) if accounts.is_empty() => self.disconnect().await,
            ExtensionEvent::AccountChanged(_) => self.sync_wallet().await,
            ExtensionEvent::NetworkChanged(chain_id) => match chain_id.parse::<SupraChainId>() {
                Ok(chain) => {
                    self.update_state(|s| {
                        s.chain_id = chain;
                        s.apply(Transition::NetworkChanged);
                    });
                    if let Some(address) = self.account() {
                        self.update_balance(&address).await;
                    }
                }
                Err(e) => warn!("Ignoring network change: {}", e),
            },
            ExtensionEvent::Disconnected => self.update_state(SessionState::reset),
        }
    }

    /// Pull account, chain and balance from the extension.
    ///
    /// No-op without an extension or without an authorized account.
    pub async fn sync_wallet(&self) {
        let Some(provider) = self.extension() else {
            return;
        };
        if let Err(e) = self.try_sync(provider.as_ref()).await {
            error!("Failed to update wallet: {}", e);
        }
    }

    async fn try_sync(&self, provider: &dyn StarkeyProvider) -> Result<()> {
        let accounts = provider.account().await?;
        let Some(address) = accounts.into_iter().next() else {
            return Ok(());
        };
        let chain: SupraChainId = provider.get_chain_id().await?.chain_id.parse()?;

        self.update_state(|s| {
            s.account = Some(AccountDetails::new(address.as_str()));
            s.chain_id = chain;
            s.apply(Transition::AccountSynced);
        });
        self.update_balance(&address).await;
        Ok(())
    }

    // -- session operations --

    /// Request account access on `chain`. Returns the first granted account.
    pub async fn connect(&self, chain: SupraChainId) -> Result<Option<String>> {
        let result = self.try_connect(chain).await;
        if let Err(e) = &result {
            error!("Failed to connect wallet: {}", e);
        }
        result
    }

    async fn try_connect(&self, chain: SupraChainId) -> Result<Option<String>> {
        let provider = self.extension().ok_or(WalletError::ExtensionNotFound)?;
        let request = ConnectRequest {
            chain_id: chain.as_str().to_string(),
            multiple: false,
        };
        let accounts = provider.connect(&request).await?;
        info!("Wallet connected on {}", chain.name());

        self.sync_wallet().await;
        Ok(accounts.into_iter().next())
    }

    /// Tell the extension, then reset the session whatever it answered.
    pub async fn disconnect(&self) {
        if let Some(provider) = self.extension() {
            if let Err(e) = provider.disconnect().await {
                warn!("Extension disconnect failed: {}", e);
            }
        }
        self.update_state(SessionState::reset);
    }

    /// Ask the extension to change network.
    ///
    /// The local chain id is left alone; the extension's `networkChanged`
    /// event updates it.
    pub async fn switch_network(&self, chain: SupraChainId) -> Option<SupraChainId> {
        let provider = self.extension()?;
        let request = ChangeNetworkRequest {
            network_id: chain.as_str().to_string(),
        };
        match provider.change_network(&request).await {
            Ok(Some(reply)) => match reply.chain_id.parse() {
                Ok(reported) => Some(reported),
                Err(e) => {
                    warn!("Extension reported {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to switch network: {}", e);
                None
            }
        }
    }

    /// Refresh the session balance of `address`.
    ///
    /// Only one fetch runs at a time; calls made while one is outstanding
    /// return `None` without fetching.
    pub async fn update_balance(&self, address: &str) -> Option<String> {
        if address.is_empty() {
            return None;
        }
        let Some(_slot) = self.inner.balance_slot.try_acquire() else {
            debug!("Balance fetch already running, skipping {}", address);
            return None;
        };

        let balance = self.fetch_balance(address).await;
        self.update_state(|s| s.balance = balance.clone());
        Some(balance)
    }

    async fn fetch_balance(&self, address: &str) -> String {
        let params = ViewFunctionParams::new("0x1", "coin", "balance")
            .with_type_args(vec![SUPRA_COIN_TYPE.to_string()])
            .with_args(vec![json!(address)]);

        match self.execute_view_function::<ViewResult<Vec<Value>>>(params).await {
            Ok(res) => res
                .result
                .first()
                .and_then(parse_quants)
                .filter(|quants| *quants > 0)
                .map(|quants| from_supra_quant(quants, BALANCE_DECIMALS))
                .unwrap_or_else(|| DEFAULT_BALANCE.to_string()),
            Err(e) => {
                error!("Failed to fetch balance for {}: {}", address, e);
                DEFAULT_BALANCE.to_string()
            }
        }
    }

    // -- signing --

    /// Sign `message` and verify the returned signature.
    ///
    /// Any failure yields the empty [`SignatureResponse`].
    pub async fn sign_message(&self, message: &str) -> SignatureResponse {
        match self.try_sign_message(message).await {
            Ok(signed) => signed,
            Err(e) => {
                error!("Failed to sign message: {}", e);
                SignatureResponse::default()
            }
        }
    }

    /// [`sign_message`](Self::sign_message) with the reason for failure.
    pub async fn try_sign_message(&self, message: &str) -> Result<SignatureResponse> {
        let provider = self.extension().ok_or(WalletError::ExtensionNotFound)?;
        let request = SignMessageRequest {
            message: encode_message_hex(message),
        };
        let response = provider.sign_message(&request).await?;

        let signature = response.signature.clone().filter(|s| !s.is_empty());
        let (Some(signature), Some(public_key)) = (signature, response.public_key.clone()) else {
            return Err(WalletError::SignatureRejected(response.error_message()));
        };

        verify_signature(message.as_bytes(), &signature, &public_key)?;
        Ok(SignatureResponse {
            public_key,
            signature,
        })
    }

    /// Sign without verifying. Extension errors propagate; a missing
    /// extension or signature yields the empty result.
    pub async fn sign_message_v2(&self, message: &str) -> Result<SignatureResponse> {
        let Some(provider) = self.extension() else {
            return Ok(SignatureResponse::default());
        };
        let request = SignMessageRequest {
            message: encode_message_hex(message),
        };
        let response = provider.sign_message(&request).await?;

        Ok(match response.signature.filter(|s| !s.is_empty()) {
            Some(signature) => SignatureResponse {
                public_key: response.public_key.unwrap_or_default(),
                signature,
            },
            None => SignatureResponse::default(),
        })
    }

    // -- transactions --

    /// The connected account, or [`WalletError::NotConnected`].
    pub fn ensure_tx_dependencies(&self) -> Result<String> {
        let state = self.inner.state.borrow();
        match state.address() {
            Some(address) if state.is_connected() && !address.is_empty() => Ok(address.to_string()),
            _ => Err(WalletError::NotConnected),
        }
    }

    /// Build through `params.client`, submit through the extension and
    /// refresh the balance.
    ///
    /// `Ok(None)` means the extension did not accept the transaction.
    pub async fn execute_entry_function(&self, params: EntryFunctionParams) -> Result<Option<String>> {
        let account = self.ensure_tx_dependencies()?;

        let info = params.client.get_account_info(&account).await?;
        let raw_tx = params
            .client
            .create_serialized_raw_tx_object(params.raw_tx_request(&account, info.sequence_number))
            .await?;

        let tx = SendTxParams {
            data: hex::encode(&raw_tx),
            from: account.clone(),
            chain_id: self.chain_id().as_str().to_string(),
            options: TxOptions::default(),
        };
        debug!(
            "Submitting {}::{}::{} (seq {})",
            params.contract_address, params.module_name, params.function_name, info.sequence_number
        );

        let tx_hash = self.send_tx(&tx).await;
        if tx_hash.is_some() {
            self.update_balance(&account).await;
        }
        Ok(tx_hash)
    }

    async fn send_tx(&self, params: &SendTxParams) -> Option<String> {
        let provider = self.extension()?;
        match provider.send_transaction(params).await {
            Ok(hash) => hash.filter(|h| !h.is_empty()),
            Err(e) => {
                error!("Failed to send transaction: {}", e);
                None
            }
        }
    }

    // -- view functions --

    /// Call a view function on the current network and decode the response.
    pub async fn execute_view_function<T: DeserializeOwned>(&self, params: ViewFunctionParams) -> Result<T> {
        let body = params.body();
        let rpc = self.chain_id().network().rpc;
        let call = self.inner.view.call_view(rpc, &body);

        let response = match params.abort {
            Some(registration) => Abortable::new(call, registration)
                .await
                .unwrap_or_else(|Aborted| Err(WalletError::Cancelled)),
            None => call.await,
        };

        let value = response.inspect_err(|e| error!("View function {} failed: {}", body.function, e))?;
        Ok(serde_json::from_value(value)?)
    }

    /// Explorer URL of `tx_hash` on the current network.
    pub fn fetch_transaction_scan_url(&self, tx_hash: &str) -> String {
        self.chain_id().network().tx_url(tx_hash)
    }
}

/// The view endpoint returns `u64` results as strings; accept numbers too.
fn parse_quants(value: &Value) -> Option<u128> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_u64().map(u128::from),
        _ => None,
    }
}
