//! Wallet Connection Page - connect, disconnect, install hint

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::SupraChainId;
use lib_supra::WalletPhase;
use shared::utils::format_address;

use crate::state::wallet::use_wallet;
use crate::utils::constants::STARKEY_INSTALL_URL;

#[component]
pub fn ConnectPage() -> impl IntoView {
    let wallet = use_wallet();
    let (error, set_error) = signal(None::<String>);
    let (connecting, set_connecting) = signal(false);

    let connect = move |chain: SupraChainId| {
        set_connecting.set(true);
        set_error.set(None);
        spawn_local(async move {
            if let Err(e) = wallet.connect(chain).await {
                set_error.set(Some(e.user_message()));
            }
            set_connecting.set(false);
        });
    };

    let disconnect = move |_| {
        spawn_local(async move {
            wallet.disconnect().await;
        });
    };

    view! {
        <div class="card" style="max-width: 520px; margin: 40px auto;">
            <h1 style="font-size: 32px; margin-bottom: 12px; font-weight: 700;">"Wallet Connection"</h1>

            {move || error.get().map(|err| view! {
                <div class="error"><p style="text-align: center;">{err}</p></div>
            })}

            {move || match wallet.phase() {
                WalletPhase::Uninitialized => view! {
                    <p class="subtitle">"Looking for the StarKey extension..."</p>
                }.into_any(),
                WalletPhase::ExtensionAbsent => view! {
                    <div class="error">
                        <p style="font-weight: bold;">"StarKey Wallet is not installed"</p>
                        <p>
                            "Please install the "
                            <a href=STARKEY_INSTALL_URL target="_blank" rel="noopener noreferrer">"StarKey Wallet Extension"</a>
                            " to use this dApp"
                        </p>
                    </div>
                }.into_any(),
                WalletPhase::Connected => view! {
                    <div>
                        <div class="success">
                            <p><strong>"Status: "</strong>"Connected"</p>
                            <p>
                                <strong>"Account: "</strong>
                                {wallet.account().map(|a| format_address(&a, 10, 4))}
                            </p>
                            <p><strong>"Network: "</strong>{wallet.chain_id().name()}</p>
                        </div>
                        <button class="btn" style="width: 100%; background: var(--bg-error);" on:click=disconnect>
                            "Disconnect Wallet"
                        </button>
                    </div>
                }.into_any(),
                WalletPhase::Disconnected => view! {
                    <div>
                        <p class="subtitle"><strong>"Status: "</strong>"Not Connected"</p>
                        <div style="display: flex; gap: 10px;">
                            {SupraChainId::ALL.into_iter().map(|chain| view! {
                                <button
                                    class="btn"
                                    disabled=move || connecting.get()
                                    on:click=move |_| connect(chain)
                                >
                                    {format!("Connect to {}", chain.name())}
                                </button>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
