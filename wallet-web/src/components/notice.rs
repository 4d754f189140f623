use leptos::prelude::*;

/// Placeholder card for pages that need a connected wallet.
#[component]
pub fn ConnectFirst(#[prop(into)] action: String) -> impl IntoView {
    view! {
        <div class="card">
            <p class="subtitle">{format!("Connect your wallet to {}", action)}</p>
        </div>
    }
}
