//! View Function Page - reads the SUPRA balance through the raw view call

use futures::future::AbortHandle;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::WalletError;
use lib_supra::ViewFunctionParams;
use serde_json::{json, Value};

use crate::components::ConnectFirst;
use crate::state::wallet::use_wallet;
use crate::utils::constants::SUPRA_COIN;

#[component]
pub fn ViewFunctionPage() -> impl IntoView {
    let wallet = use_wallet();
    let (data, set_data) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    let pending = StoredValue::new(None::<AbortHandle>);

    Effect::new(move |_| {
        let Some(account) = wallet.account() else {
            return;
        };

        // a newer account supersedes the request in flight
        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = pending.get_value() {
            previous.abort();
        }
        pending.set_value(Some(handle));

        set_loading.set(true);
        set_error.set(None);
        set_data.set(None);

        let params = ViewFunctionParams::new("0x1", "coin", "balance")
            .with_type_args(vec![SUPRA_COIN.to_string()])
            .with_args(vec![json!(account)])
            .with_abort(registration);

        spawn_local(async move {
            match wallet.execute_view_function::<Value>(params).await {
                Ok(value) => {
                    let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
                    set_data.set(Some(pretty));
                }
                Err(WalletError::Cancelled) => return,
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        {move || if wallet.is_connected() {
            view! {
                <div class="card">
                    <h2>"View Function Execution"</h2>
                    <div class="info">
                        <p><strong>"Function: "</strong><code>"0x1::coin::balance<0x1::supra_coin::SupraCoin>"</code></p>
                        <p><strong>"Account: "</strong><code>{move || wallet.account()}</code></p>
                    </div>

                    {move || loading.get().then(|| view! { <p class="subtitle">"Loading..."</p> })}
                    {move || error.get().map(|err| view! { <div class="error"><p>{format!("Error: {}", err)}</p></div> })}
                    {move || data.get().map(|d| view! {
                        <div>
                            <h3>"Response Data"</h3>
                            <pre style="overflow-x: auto; font-family: monospace;">{d}</pre>
                        </div>
                    })}

                    <p class="subtitle">"View functions are read-only and don't require transactions."</p>
                </div>
            }.into_any()
        } else {
            view! { <ConnectFirst action="execute view functions"/> }.into_any()
        }}
    }
}
