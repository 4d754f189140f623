//! Navigation bar with the wallet status badge

use leptos::prelude::*;
use leptos_router::components::A;
use shared::utils::truncate_address;

use crate::state::wallet::use_wallet;

const LINKS: &[(&str, &str)] = &[
    ("/", "Wallet"),
    ("/balance", "Balance"),
    ("/sign", "Sign"),
    ("/network", "Network"),
    ("/transfer", "Transfer"),
    ("/view", "View"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet = use_wallet();

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <div style="display: flex; gap: 16px;">
                    {LINKS.iter().map(|(href, label)| view! {
                        <A href=*href attr:class="nav-link-clean">{*label}</A>
                    }).collect::<Vec<_>>()}
                </div>
                <span class="nav-status">
                    {move || match wallet.account() {
                        Some(address) => format!("{} · {}", truncate_address(&address), wallet.chain_id().name()),
                        None => "Not connected".to_string(),
                    }}
                </span>
            </div>
        </nav>
    }
}
