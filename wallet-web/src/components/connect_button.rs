//! Primary wallet button, one variant per connection status

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::status::{PrimaryView, WalletAction};

#[component]
pub fn ConnectButton(primary: PrimaryView, on_action: Callback<WalletAction>) -> impl IntoView {
    let action = primary.action();

    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        if let Some(action) = action {
            on_action.run(action);
        }
    };

    view! {
        <button
            class=primary.class()
            disabled=action.is_none()
            on:click=on_click
        >
            {primary.label()}
        </button>
    }
}
