//! Balance Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::utils::format_address;

use crate::components::ConnectFirst;
use crate::state::wallet::use_wallet;

#[component]
pub fn BalancePage() -> impl IntoView {
    let wallet = use_wallet();

    let refresh = move || {
        if let Some(address) = wallet.account() {
            spawn_local(async move {
                wallet.update_balance(address).await;
            });
        }
    };

    // refresh whenever the account changes
    Effect::new(move |_| {
        if wallet.is_connected() {
            refresh();
        }
    });

    view! {
        {move || if wallet.is_connected() {
            view! {
                <div class="card">
                    <h2>"Your Balance"</h2>
                    <div style="font-size: 32px; font-weight: bold; margin-bottom: 10px;">
                        {move || format!("{} SUPRA", wallet.balance())}
                    </div>
                    <p class="subtitle">
                        "Account: "{move || wallet.account().map(|a| format_address(&a, 20, 0))}
                    </p>
                    <button class="btn" on:click=move |_| refresh()>"Refresh Balance"</button>
                </div>
            }.into_any()
        } else {
            view! { <ConnectFirst action="view balance"/> }.into_any()
        }}
    }
}
