//! # Session Provider
//!
//! The wallet section reads the session and triggers `connect`/`open_view`
//! through [`SessionProvider`], so the view logic never touches the wallet
//! directly. [`KeplrSession`] is the browser implementation.

use async_trait::async_trait;
use leptos::prelude::*;

use crate::config::AppConfig;
use crate::services::wallet::{connect_keplr, openExternal, wallet_client, KEPLR_PRETTY_NAME};
use crate::state::session::{ConnectionStatus, Session, WalletInfo};
use crate::state::wallet::SessionContext;

/// Read-only session plus the two wallet actions.
#[async_trait(?Send)]
pub trait SessionProvider {
    /// Current session snapshot
    fn session(&self) -> Session;

    /// Start a connection attempt; failures end up in the session status
    async fn connect(&self);

    /// Open the wallet view
    fn open_view(&self);

    fn status(&self) -> ConnectionStatus {
        self.session().status
    }
}

/// Keplr-backed session provider writing into a [`SessionContext`]
#[derive(Clone)]
pub struct KeplrSession {
    ctx: SessionContext,
    config: AppConfig,
}

impl KeplrSession {
    pub fn new(ctx: SessionContext, config: AppConfig) -> Self {
        Self { ctx, config }
    }

    pub fn disconnect(&self) {
        log::info!("[WALLET] disconnected");
        self.ctx.disconnect();
        self.ctx.view_open.set(false);
    }

    pub fn close_view(&self) {
        self.ctx.view_open.set(false);
    }

    /// Send the user to the wallet download page
    pub fn install(&self) {
        openExternal(&self.config.install_url);
    }
}

#[async_trait(?Send)]
impl SessionProvider for KeplrSession {
    fn session(&self) -> Session {
        self.ctx.session.get_untracked()
    }

    async fn connect(&self) {
        let ctx = self.ctx;
        ctx.session.update(|s| s.begin_connect(WalletInfo::new(KEPLR_PRETTY_NAME)));

        match connect_keplr(&self.config.chain_id).await {
            Ok(key) => {
                log::info!("[WALLET] connected {} ({})", key.address, key.name);
                ctx.session.update(|s| s.set_connected(key.name, key.address));
                ctx.set_client(wallet_client(&self.config.signing_wallet));
            }
            Err(e) => {
                log::warn!("[WALLET] connect failed: {}", e);
                ctx.set_client(None);
                ctx.session.update(|s| s.set_failed(e.status(), e.wallet_message().to_string()));
            }
        }
    }

    fn open_view(&self) {
        self.ctx.view_open.set(true);
    }
}
