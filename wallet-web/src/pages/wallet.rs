//! Wallet Section - chain card, account, connect button and warnings
//!
//! Fixed vertical layout: chain card, user info (when known), address (when
//! connected), the status-driven button, then any warning banners.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    ChainCard, ConnectButton, ConnectedShowAddress, ConnectedUserInfo, WalletModal, WarningBanner,
};
use crate::config::use_app_config;
use crate::permit::effect::use_permit_signing;
use crate::services::session::KeplrSession;
use crate::state::chain::ChainDescriptor;
use crate::state::wallet::use_session_context;
use crate::status::{dispatch, WalletAction, WalletViewModel};

#[component]
pub fn WalletSection() -> impl IntoView {
    let ctx = use_session_context();
    let config = use_app_config();
    let provider = KeplrSession::new(ctx, config.clone());

    use_permit_signing(ctx, config.chain_id.clone());

    let session = ctx.session;
    let view_model = Memo::new(move |_| session.with(WalletViewModel::from_session));
    let primary = Memo::new(move |_| view_model.with(|vm| vm.primary));
    let chain = Memo::new(move |_| session.with(|s| ChainDescriptor::from_registry(&s.chain)));

    let on_action = {
        let provider = provider.clone();
        Callback::new(move |action: WalletAction| {
            let provider = provider.clone();
            spawn_local(async move { dispatch(action, &provider).await });
        })
    };

    let permit_warning = move || {
        ctx.permit
            .with(|permit| permit.error().map(|msg| format!("Query permit: {}", msg)))
    };

    view! {
        <div class="content-wrapper wallet-section">
            <div class="container">
                <div style="margin-bottom: 20px;">
                    {move || view! { <ChainCard chain=chain.get()/> }}
                </div>
                <div class="card wallet-card">
                    {move || view_model.get().username.map(|username| view! {
                        <ConnectedUserInfo username=username/>
                    })}
                    {move || view_model.get().address.map(|address| view! {
                        <ConnectedShowAddress address=address/>
                    })}
                    <div class="wallet-action">
                        {move || view! { <ConnectButton primary=primary.get() on_action=on_action/> }}
                    </div>
                    {move || view_model.get().warning.map(|warning| view! {
                        <WarningBanner text=warning.text/>
                    })}
                    {move || permit_warning().map(|text| view! { <WarningBanner text=text/> })}
                </div>
            </div>
            <Show when=move || ctx.view_open.get()>
                <WalletModal provider=provider.clone()/>
            </Show>
        </div>
    }
}
