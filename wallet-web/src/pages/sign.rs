//! Message Signing Page
//!
//! V1 verifies the returned signature before showing it, V2 shows whatever
//! the wallet returned.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::dto::wallet::SignatureResponse;

use crate::components::ConnectFirst;
use crate::state::wallet::use_wallet;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Version {
    V1,
    V2,
}

#[component]
pub fn SignMessagePage() -> impl IntoView {
    let wallet = use_wallet();
    let (message, set_message) = signal(String::new());
    let (version, set_version) = signal(Version::V1);
    let (signature, set_signature) = signal(None::<SignatureResponse>);
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let sign = move |_| {
        let text = message.get_untracked();
        if text.trim().is_empty() {
            set_error.set(Some("Please enter a message".to_string()));
            return;
        }
        set_loading.set(true);
        set_error.set(None);
        set_signature.set(None);

        let version = version.get_untracked();
        spawn_local(async move {
            let result = match version {
                Version::V1 => Ok(wallet.sign_message(text).await),
                Version::V2 => wallet.sign_message_v2(text).await,
            };
            match result {
                Ok(signed) if !signed.is_empty() => set_signature.set(Some(signed)),
                Ok(_) => set_error.set(Some("Failed to sign message".to_string())),
                Err(e) => set_error.set(Some(format!("Error: {}", e.user_message()))),
            }
            set_loading.set(false);
        });
    };

    let version_radio = move |value: Version, label: &'static str| {
        view! {
            <label style="display: flex; align-items: center; gap: 5px;">
                <input
                    type="radio"
                    name="sign-version"
                    prop:checked=move || version.get() == value
                    on:change=move |_| set_version.set(value)
                />
                {label}
            </label>
        }
    };

    view! {
        {move || if wallet.is_connected() {
            view! {
                <div class="card">
                    <h2>"Sign Message"</h2>
                    <div style="display: flex; gap: 10px; margin-bottom: 15px;">
                        {version_radio(Version::V1, "V1 (verified)")}
                        {version_radio(Version::V2, "V2")}
                    </div>
                    <textarea
                        rows="4"
                        style="width: 100%;"
                        placeholder="Enter a message to sign"
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn" disabled=move || loading.get() on:click=sign>
                        {move || if loading.get() { "Signing..." } else { "Sign Message" }}
                    </button>

                    {move || error.get().map(|err| view! { <div class="error"><p>{err}</p></div> })}

                    {move || signature.get().map(|signed| view! {
                        <div class="success">
                            <p><strong>"Public Key: "</strong></p>
                            <div class="wallet-address">{signed.public_key}</div>
                            <p><strong>"Signature: "</strong></p>
                            <div class="wallet-address">{signed.signature}</div>
                        </div>
                    })}
                </div>
            }.into_any()
        } else {
            view! { <ConnectFirst action="sign messages"/> }.into_any()
        }}
    }
}
