//! StarKey Integration via wasm-bindgen
//!
//! Bridges `window.starkey.supra` and a `supra-l1-sdk` client object into the
//! traits `lib-supra` drives.

use std::rc::Rc;

use async_trait::async_trait;
use js_sys::{Array, Function, Reflect, Uint8Array};
use lib_core::{Result, WalletError};
use lib_supra::{
    EventListener, Extension, ExtensionEvent, ExtensionLocator, RawTxRequest, StarkeyProvider,
    SupraClient,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::dto::transaction::{AccountInfo, SendTxParams};
use shared::dto::wallet::{
    ChainIdResponse, ChangeNetworkRequest, ConnectRequest, SignMessageRequest, SignMessageResponse,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::utils::url::{mobile_handoff_url, HandoffLatch};

// ============================================================================
// JAVASCRIPT INTEROP
// ============================================================================

#[wasm_bindgen(inline_js = "
export function getStarkeySupra() {
    return (window.starkey && window.starkey.supra) || null;
}

export function hasStarkey() {
    return 'starkey' in window;
}

export function isMobileUserAgent() {
    const ua = navigator.userAgent;
    return /android/i.test(ua) || /iPad|iPhone|iPod/.test(ua);
}

export function openWindow(url) {
    window.open(url);
}

export function getInjectedSupraClient() {
    return window.supraClient || null;
}

export async function supraAccount(provider) {
    return await provider.account();
}

export async function supraConnect(provider, request) {
    return await provider.connect(request);
}

export async function supraDisconnect(provider) {
    await provider.disconnect();
}

export async function supraGetChainId(provider) {
    return await provider.getChainId();
}

export async function supraChangeNetwork(provider, request) {
    const result = await provider.changeNetwork(request);
    return result || null;
}

export async function supraSignMessage(provider, request) {
    return (await provider.signMessage(request)) || {};
}

export async function supraSendTransaction(provider, params) {
    const txHash = await provider.sendTransaction(params);
    return txHash == null ? null : String(txHash);
}

export function supraOn(provider, name, callback) {
    if (typeof provider.on === 'function') {
        provider.on(name, callback);
    }
}

export async function clientGetAccountInfo(client, address) {
    const info = await client.getAccountInfo(address);
    return {
        sequence_number: Number(info.sequence_number),
        authentication_key: String(info.authentication_key || ''),
    };
}

export async function clientCreateSerializedRawTxObject(client, sender, sequence, moduleAddress, moduleName, functionName, typeArgs, functionArgs) {
    const raw = await client.createSerializedRawTxObject(
        sender, BigInt(sequence), moduleAddress, moduleName, functionName, typeArgs, functionArgs, {}
    );
    return new Uint8Array(raw);
}
")]
extern "C" {
    fn getStarkeySupra() -> JsValue;
    fn hasStarkey() -> bool;
    fn isMobileUserAgent() -> bool;
    fn openWindow(url: &str);
    fn getInjectedSupraClient() -> JsValue;

    #[wasm_bindgen(catch)]
    async fn supraAccount(provider: &JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn supraConnect(provider: &JsValue, request: JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn supraDisconnect(provider: &JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn supraGetChainId(provider: &JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn supraChangeNetwork(provider: &JsValue, request: JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn supraSignMessage(provider: &JsValue, request: JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn supraSendTransaction(provider: &JsValue, params: JsValue) -> std::result::Result<JsValue, JsValue>;

    fn supraOn(provider: &JsValue, name: &str, callback: &Function);

    #[wasm_bindgen(catch)]
    async fn clientGetAccountInfo(client: &JsValue, address: &str) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn clientCreateSerializedRawTxObject(
        client: &JsValue,
        sender: &str,
        sequence: u64,
        module_address: &str,
        module_name: &str,
        function_name: &str,
        type_args: JsValue,
        function_args: JsValue,
    ) -> std::result::Result<JsValue, JsValue>;
}

// ============================================================================
// CONVERSIONS
// ============================================================================

/// Best-effort message of a thrown JS value.
fn js_message(err: &JsValue) -> String {
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

fn extension_error(err: JsValue) -> WalletError {
    WalletError::Extension(js_message(&err))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| WalletError::Decoding(e.to_string()))
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T> {
    serde_wasm_bindgen::from_value(value).map_err(|e| WalletError::Decoding(e.to_string()))
}

fn is_missing(value: &JsValue) -> bool {
    value.is_null() || value.is_undefined()
}

/// `networkChanged` sends either the bare chain id or `{ chainId }`.
fn network_payload(payload: &JsValue) -> Option<String> {
    payload.as_string().or_else(|| {
        Reflect::get(payload, &JsValue::from_str("chainId"))
            .ok()
            .and_then(|id| id.as_string().or_else(|| id.as_f64().map(|n| n.to_string())))
    })
}

fn decode_event(name: &str, payload: JsValue) -> Option<ExtensionEvent> {
    match name {
        "accountChanged" => Some(ExtensionEvent::AccountChanged(
            from_js::<Vec<String>>(payload).unwrap_or_default(),
        )),
        "networkChanged" => network_payload(&payload).map(ExtensionEvent::NetworkChanged),
        "disconnect" => Some(ExtensionEvent::Disconnected),
        _ => None,
    }
}

// ============================================================================
// STARKEY PROVIDER
// ============================================================================

/// `window.starkey.supra`
pub struct StarkeyBridge {
    inner: JsValue,
}

#[async_trait(?Send)]
impl StarkeyProvider for StarkeyBridge {
    async fn account(&self) -> Result<Vec<String>> {
        let accounts = supraAccount(&self.inner).await.map_err(extension_error)?;
        if is_missing(&accounts) {
            return Ok(Vec::new());
        }
        from_js(accounts)
    }

    async fn connect(&self, request: &ConnectRequest) -> Result<Vec<String>> {
        let accounts = supraConnect(&self.inner, to_js(request)?)
            .await
            .map_err(extension_error)?;
        if is_missing(&accounts) {
            return Ok(Vec::new());
        }
        from_js(accounts)
    }

    async fn disconnect(&self) -> Result<()> {
        supraDisconnect(&self.inner).await.map_err(extension_error)?;
        Ok(())
    }

    async fn get_chain_id(&self) -> Result<ChainIdResponse> {
        let res = supraGetChainId(&self.inner).await.map_err(extension_error)?;
        network_payload(&res)
            .map(|chain_id| ChainIdResponse { chain_id })
            .ok_or_else(|| WalletError::Decoding("getChainId returned no chainId".to_string()))
    }

    async fn change_network(&self, request: &ChangeNetworkRequest) -> Result<Option<ChainIdResponse>> {
        let res = supraChangeNetwork(&self.inner, to_js(request)?)
            .await
            .map_err(extension_error)?;
        Ok(network_payload(&res).map(|chain_id| ChainIdResponse { chain_id }))
    }

    async fn sign_message(&self, request: &SignMessageRequest) -> Result<SignMessageResponse> {
        let res = supraSignMessage(&self.inner, to_js(request)?)
            .await
            .map_err(extension_error)?;
        from_js(res)
    }

    async fn send_transaction(&self, params: &SendTxParams) -> Result<Option<String>> {
        let res = supraSendTransaction(&self.inner, to_js(params)?)
            .await
            .map_err(extension_error)?;
        Ok(res.as_string())
    }

    fn subscribe(&self, listener: EventListener) {
        for name in ExtensionEvent::NAMES {
            let listener = listener.clone();
            let callback = Closure::<dyn Fn(JsValue)>::new(move |payload: JsValue| {
                if let Some(event) = decode_event(name, payload) {
                    listener(event);
                }
            });
            supraOn(&self.inner, name, callback.as_ref().unchecked_ref());
            // the extension keeps the listener for the page's lifetime
            callback.forget();
        }
    }
}

/// Re-reads `window.starkey.supra` on every look.
///
/// On a phone with the StarKey app but no injected provider, opens the app's
/// dApp browser on this page with auto-connect requested. That happens on the
/// first such look only.
#[derive(Default)]
pub struct WindowLocator {
    handoff: HandoffLatch,
}

impl ExtensionLocator for WindowLocator {
    fn locate(&self) -> Extension {
        let supra = getStarkeySupra();
        if !is_missing(&supra) {
            return Extension::installed(StarkeyBridge { inner: supra });
        }

        if hasStarkey() && isMobileUserAgent() {
            self.handoff.fire(|| {
                if let Some(href) = web_sys::window().and_then(|w| w.location().href().ok()) {
                    log::info!("Handing off to the StarKey app");
                    openWindow(&mobile_handoff_url(&href));
                }
            });
        }
        Extension::Absent
    }
}

// ============================================================================
// SUPRA CLIENT
// ============================================================================

/// `supra-l1-sdk` client object.
pub struct JsSupraClient {
    inner: JsValue,
}

impl JsSupraClient {
    /// The client a dApp exposes as `window.supraClient`.
    pub fn from_window() -> Option<Rc<dyn SupraClient>> {
        let client = getInjectedSupraClient();
        if is_missing(&client) {
            return None;
        }
        Some(Rc::new(Self { inner: client }))
    }
}

#[async_trait(?Send)]
impl SupraClient for JsSupraClient {
    async fn get_account_info(&self, address: &str) -> Result<AccountInfo> {
        let info = clientGetAccountInfo(&self.inner, address)
            .await
            .map_err(|e| WalletError::Transaction(js_message(&e)))?;
        from_js(info)
    }

    async fn create_serialized_raw_tx_object(&self, request: RawTxRequest<'_>) -> Result<Vec<u8>> {
        let type_args: Array = request.type_args.iter().map(|t| JsValue::from_str(t)).collect();
        let function_args: Array = request
            .function_args
            .iter()
            .map(|arg| JsValue::from(Uint8Array::from(arg.as_slice())))
            .collect();

        let raw = clientCreateSerializedRawTxObject(
            &self.inner,
            request.sender,
            request.sequence_number,
            request.module_address,
            request.module_name,
            request.function_name,
            type_args.into(),
            function_args.into(),
        )
        .await
        .map_err(|e| WalletError::Transaction(js_message(&e)))?;

        Ok(raw.unchecked_into::<Uint8Array>().to_vec())
    }
}
