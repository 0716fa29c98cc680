//! Address display with copy-to-clipboard

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::utils::format_bech32;
use wasm_bindgen_futures::JsFuture;

use crate::services::error::js_error_message;

#[component]
pub fn ConnectedShowAddress(address: String) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let short = format_bech32(&address);
    let full = address.clone();

    let copy_address = move |_| {
        let address = full.clone();
        spawn_local(async move {
            match copy_to_clipboard(&address).await {
                Ok(()) => set_copied.set(true),
                Err(e) => log::warn!("[WALLET] copy failed: {}", e),
            }
        });
    };

    view! {
        <div class="wallet-address" title=address>
            <span class="address-text">{short}</span>
            <button class="copy-btn" on:click=copy_address>
                {move || if copied.get() { "Copied" } else { "Copy" }}
            </button>
        </div>
    }
}

async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window available")?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| js_error_message(&e))
}
