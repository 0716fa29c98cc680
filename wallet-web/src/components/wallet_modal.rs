//! Wallet view: account details, recovery actions and install link

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::permit::PermitState;
use crate::services::session::{KeplrSession, SessionProvider};
use crate::state::session::ConnectionStatus;
use crate::state::wallet::use_session_context;

#[component]
pub fn WalletModal(provider: KeplrSession) -> impl IntoView {
    let ctx = use_session_context();

    let close = {
        let provider = provider.clone();
        move |_| provider.close_view()
    };

    let permit_line = move || match ctx.permit.get() {
        PermitState::Idle => "Query permit: not requested".to_string(),
        PermitState::Pending => "Query permit: waiting for signature".to_string(),
        PermitState::Signed(permit) => format!("Query permit: signed for {}", permit.params.chain_id),
        PermitState::Failed(msg) => format!("Query permit: failed ({})", msg),
    };

    let body = move || {
        let session = ctx.session.get();
        let provider = provider.clone();
        match session.status {
            ConnectionStatus::Connected => view! {
                <div>
                    <p class="modal-label">{session.username().unwrap_or_default().to_string()}</p>
                    <p class="wallet-address">{session.address().unwrap_or_default().to_string()}</p>
                    <p class="modal-note">{permit_line}</p>
                    <button class="btn" style="background: var(--bg-error);" on:click=move |_| provider.disconnect()>
                        "Disconnect"
                    </button>
                </div>
            }.into_any(),
            ConnectionStatus::Rejected | ConnectionStatus::Error => view! {
                <div>
                    <p class="modal-note">{session.message.clone().unwrap_or_default()}</p>
                    <button class="btn" on:click=move |_| {
                        let provider = provider.clone();
                        spawn_local(async move { provider.connect().await });
                    }>
                        "Reconnect"
                    </button>
                </div>
            }.into_any(),
            ConnectionStatus::NotExist => view! {
                <div>
                    <p class="modal-note">"Keplr was not found in this browser."</p>
                    <button class="btn" on:click=move |_| provider.install()>
                        "Install Keplr"
                    </button>
                </div>
            }.into_any(),
            ConnectionStatus::Disconnected | ConnectionStatus::Connecting => view! {
                <div>
                    <p class="modal-note">"No wallet connected"</p>
                </div>
            }.into_any(),
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="card modal" role="dialog">
                <h2 class="card-title">"Wallet"</h2>
                {body}
                <button class="btn btn-secondary" on:click=close>"Close"</button>
            </div>
        </div>
    }
}
