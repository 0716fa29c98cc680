//! Secret Network Wallet Section
//!
//! Connects a Keplr wallet to Secret Network, shows the connection status and
//! address, and once connected asks the wallet to sign a query permit.
//!
//! - [`status`] - status-to-view mapping and button dispatch
//! - [`permit`] - query permit signing effect
//! - [`services`] - Keplr interop and the session provider
//! - [`state`] - session snapshot and reactive context

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod permit;
pub mod services;
pub mod state;
pub mod status;
pub mod utils;

use app::App;
use config::AppConfig;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = AppConfig::from_location();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!(
        "Secret permit wallet starting (chain {}, signer {})",
        config.chain_id,
        config.signing_wallet
    );

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
