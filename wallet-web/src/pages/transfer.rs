//! Token Transfer Page
//!
//! Sends `0x1::coin::transfer<SupraCoin>(recipient, amount)` through the
//! dApp's `window.supraClient`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::{Result, WalletError};
use lib_supra::EntryFunctionParams;
use lib_utils::{add_address_padding, decode_hex, to_supra_quant};
use shared::utils::format_address;

use crate::components::ConnectFirst;
use crate::services::starkey::JsSupraClient;
use crate::state::wallet::use_wallet;
use crate::utils::constants::SUPRA_COIN;

/// BCS arguments of `coin::transfer`: a 32-byte address and a little-endian `u64`.
fn transfer_args(recipient: &str, quants: u64) -> Result<Vec<Vec<u8>>> {
    let address = decode_hex(&add_address_padding(recipient)?)
        .map_err(|e| WalletError::InvalidInput(format!("recipient is not hex: {e}")))?;
    Ok(vec![address, quants.to_le_bytes().to_vec()])
}

#[component]
pub fn TransferPage() -> impl IntoView {
    let wallet = use_wallet();
    let (recipient, set_recipient) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (tx_hash, set_tx_hash) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let quants = move || amount.with(|a| a.parse::<f64>().ok().map(to_supra_quant));

    let transfer = move |_| {
        set_error.set(None);
        let to = recipient.get_untracked();
        if to.trim().is_empty() {
            set_error.set(Some("Please enter recipient address".to_string()));
            return;
        }
        let Some(quants) = quants().filter(|q| *q > 0) else {
            set_error.set(Some("Please enter valid amount".to_string()));
            return;
        };
        let Some(client) = JsSupraClient::from_window() else {
            set_error.set(Some("No Supra client found on window.supraClient".to_string()));
            return;
        };

        set_loading.set(true);
        spawn_local(async move {
            let result: Result<Option<String>> = async {
                wallet.ensure_tx_dependencies()?;
                let params = EntryFunctionParams::new(client, "0x1", "coin", "transfer")
                    .with_type_args(vec![SUPRA_COIN.to_string()])
                    .with_args(transfer_args(&to, quants)?);
                wallet.execute_entry_function(params).await
            }
            .await;

            match result {
                Ok(Some(hash)) => {
                    set_tx_hash.set(Some(hash));
                    set_recipient.set(String::new());
                    set_amount.set(String::new());
                }
                Ok(None) => set_error.set(Some("Transfer failed: transaction was not submitted".to_string())),
                Err(e) => set_error.set(Some(format!("Transfer failed: {}", e.user_message()))),
            }
            set_loading.set(false);
        });
    };

    view! {
        {move || if wallet.is_connected() {
            view! {
                <div class="card">
                    <h2>"Token Transfer"</h2>
                    <p class="subtitle">
                        <strong>"From: "</strong>{move || wallet.account().map(|a| format_address(&a, 15, 0))}
                    </p>

                    <label><strong>"Recipient Address:"</strong></label>
                    <input
                        type="text"
                        placeholder="0x..."
                        style="width: 100%;"
                        prop:value=move || recipient.get()
                        on:input=move |ev| set_recipient.set(event_target_value(&ev))
                    />

                    <label><strong>"Amount (SUPRA):"</strong></label>
                    <input
                        type="number"
                        placeholder="0.00"
                        step="0.01"
                        min="0"
                        style="width: 100%;"
                        prop:value=move || amount.get()
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                    />
                    {move || quants().map(|q| view! { <p class="subtitle">{format!("Quants: {}", q)}</p> })}

                    <button class="btn" disabled=move || loading.get() on:click=transfer>
                        {move || if loading.get() { "Sending..." } else { "Send Transfer" }}
                    </button>

                    {move || error.get().map(|err| view! { <div class="error"><p>{err}</p></div> })}

                    {move || tx_hash.get().map(|hash| {
                        let url = wallet.fetch_transaction_scan_url(&hash);
                        view! {
                            <div class="success">
                                <p>"Transaction submitted"</p>
                                <a href=url target="_blank" rel="noopener noreferrer">{format_address(&hash, 10, 6)}</a>
                            </div>
                        }
                    })}
                </div>
            }.into_any()
        } else {
            view! { <ConnectFirst action="send tokens"/> }.into_any()
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_args() {
        let args = transfer_args("0x1", 150_000_000).unwrap();
        assert_eq!(args[0].len(), 32);
        assert_eq!(args[0][31], 1);
        assert_eq!(args[1], 150_000_000u64.to_le_bytes().to_vec());

        assert!(matches!(
            transfer_args(&"a".repeat(65), 1),
            Err(WalletError::InvalidInput(_))
        ));
    }
}
