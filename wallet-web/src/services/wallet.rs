//! Keplr Integration via wasm-bindgen
//!
//! JavaScript interop for the Keplr wallet. The browser extension and the
//! Keplr mobile in-app browser both inject `window.keplr`, so one binding
//! serves both wallet ids.

use std::rc::Rc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::dto::permit::{AminoSignResponse, SignOptions, StdSignDoc};
use wasm_bindgen::prelude::*;

use crate::permit::client::{ClientHandle, SigningClient};
use crate::services::error::{classify_js_error, js_error_message, WalletError};

pub const KEPLR_PRETTY_NAME: &str = "Keplr";

/// Wallet ids served by the Keplr binding
pub const KEPLR_WALLET_IDS: &[&str] = &["keplr-mobile", "keplr-extension"];

// ============================================================================
// KEPLR BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function isKeplrInstalled() {
    return typeof window !== 'undefined' && !!window.keplr;
}

export function keplrSupportsAmino() {
    return isKeplrInstalled() && typeof window.keplr.signAmino === 'function';
}

export async function keplrConnect(chainId) {
    if (!isKeplrInstalled()) {
        throw new Error('Keplr is not installed');
    }
    await window.keplr.enable(chainId);
    const key = await window.keplr.getKey(chainId);
    return { name: key.name, address: key.bech32Address };
}

export async function keplrSignAmino(chainId, signer, doc, options) {
    if (!keplrSupportsAmino()) {
        throw new Error('Keplr does not support signAmino');
    }
    return await window.keplr.signAmino(chainId, signer, doc, options);
}

export function openExternal(url) {
    window.open(url, '_blank', 'noopener');
}
")]
extern "C" {
    /// Whether `window.keplr` is present
    pub fn isKeplrInstalled() -> bool;

    /// Whether `window.keplr.signAmino` is callable
    pub fn keplrSupportsAmino() -> bool;

    /// Enable the chain and read the active key
    #[wasm_bindgen(catch)]
    pub async fn keplrConnect(chain_id: &str) -> Result<JsValue, JsValue>;

    /// Request an amino signature
    #[wasm_bindgen(catch)]
    pub async fn keplrSignAmino(
        chain_id: &str,
        signer: &str,
        doc: JsValue,
        options: JsValue,
    ) -> Result<JsValue, JsValue>;

    /// Open a URL in a new tab
    pub fn openExternal(url: &str);
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Active key returned by `getKey`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeplrKey {
    pub name: String,
    pub address: String,
}

/// Enable `chain_id` in Keplr and return the active key
pub async fn connect_keplr(chain_id: &str) -> Result<KeplrKey, WalletError> {
    if !isKeplrInstalled() {
        return Err(WalletError::NotInstalled(format!("{} is not installed", KEPLR_PRETTY_NAME)));
    }

    let value = keplrConnect(chain_id)
        .await
        .map_err(|e| classify_js_error(js_error_message(&e)))?;

    serde_wasm_bindgen::from_value(value)
        .map_err(|e| WalletError::Serialization(format!("Invalid key from Keplr: {}", e)))
}

/// Signing client backed by `window.keplr`
#[derive(Clone, Debug, Default)]
pub struct KeplrClient;

#[async_trait(?Send)]
impl SigningClient for KeplrClient {
    fn supports_amino(&self) -> bool {
        keplrSupportsAmino()
    }

    async fn sign_amino(
        &self,
        chain_id: &str,
        signer: &str,
        doc: &StdSignDoc,
        options: SignOptions,
    ) -> Result<AminoSignResponse, WalletError> {
        // Plain JS objects, not Maps: Keplr serializes the document itself
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let doc = doc
            .serialize(&serializer)
            .map_err(|e| WalletError::Serialization(e.to_string()))?;
        let options = options
            .serialize(&serializer)
            .map_err(|e| WalletError::Serialization(e.to_string()))?;

        let response = keplrSignAmino(chain_id, signer, doc, options)
            .await
            .map_err(|e| WalletError::Signing(js_error_message(&e)))?;

        serde_wasm_bindgen::from_value(response)
            .map_err(|e| WalletError::Serialization(format!("Invalid signAmino response: {}", e)))
    }
}

/// Signing client for a wallet id.
///
/// Returns `None` for unknown wallet ids or when the wallet is not present.
pub fn wallet_client(wallet_id: &str) -> Option<ClientHandle> {
    if !KEPLR_WALLET_IDS.contains(&wallet_id) {
        log::warn!("[WALLET] no signing client for wallet id {}", wallet_id);
        return None;
    }
    if !isKeplrInstalled() {
        return None;
    }
    Some(ClientHandle::new(Rc::new(KeplrClient)))
}
