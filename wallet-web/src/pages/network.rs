//! Network Switching Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::SupraChainId;

use crate::components::ConnectFirst;
use crate::state::wallet::use_wallet;

#[component]
pub fn NetworkPage() -> impl IntoView {
    let wallet = use_wallet();
    let (status, set_status) = signal(None::<String>);

    let switch = move |_| {
        let target = match wallet.chain_id() {
            SupraChainId::Testnet => SupraChainId::Mainnet,
            SupraChainId::Mainnet => SupraChainId::Testnet,
        };
        set_status.set(None);
        spawn_local(async move {
            // the chain badge updates from the extension's networkChanged event
            let message = match wallet.switch_network(target).await {
                Some(reported) => format!("Wallet reports {}", reported.name()),
                None => format!("Could not switch to {}", target.name()),
            };
            set_status.set(Some(message));
        });
    };

    view! {
        {move || if wallet.is_connected() {
            let chain = wallet.chain_id();
            let network = chain.network();
            view! {
                <div class="card">
                    <h2>"Network Management"</h2>
                    <h3>"Current Network"</h3>
                    <div class="info">
                        <p><strong>{chain.name()}</strong>{format!(" (chain id {})", chain)}</p>
                        <p style="font-size: 12px;">"RPC: "<code>{network.rpc}</code></p>
                        <a href=network.scan target="_blank" rel="noopener noreferrer">"View on Suprascan →"</a>
                    </div>
                    <button class="btn" on:click=switch>
                        {format!(
                            "Switch to {}",
                            match chain {
                                SupraChainId::Testnet => SupraChainId::Mainnet.name(),
                                SupraChainId::Mainnet => SupraChainId::Testnet.name(),
                            }
                        )}
                    </button>
                    {move || status.get().map(|s| view! { <p class="subtitle">{s}</p> })}
                </div>
            }.into_any()
        } else {
            view! { <ConnectFirst action="manage networks"/> }.into_any()
        }}
    }
}
