//! # Wallet Errors
//!
//! Errors raised while talking to the browser wallet. Connection errors are
//! folded into the session status; signing errors are recorded on the permit
//! state and rendered as a banner.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::state::session::ConnectionStatus;

/// Wallet interaction error.
///
/// Each variant carries the wallet's own message, which is what the warning
/// banner shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No wallet extension or in-app provider found
    #[error("Wallet not installed: {0}")]
    NotInstalled(String),

    /// The user declined the request in the wallet
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Any other failure while enabling the chain or reading the key
    #[error("Connection error: {0}")]
    Connection(String),

    /// The client does not expose the requested capability
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// `signAmino` failed
    #[error("Signing error: {0}")]
    Signing(String),

    /// Converting documents to or from JS values failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl WalletError {
    /// Status a failed connect attempt leaves the session in
    pub fn status(&self) -> ConnectionStatus {
        match self {
            WalletError::NotInstalled(_) => ConnectionStatus::NotExist,
            WalletError::Rejected(_) => ConnectionStatus::Rejected,
            WalletError::Connection(_)
            | WalletError::Unsupported(_)
            | WalletError::Signing(_)
            | WalletError::Serialization(_) => ConnectionStatus::Error,
        }
    }

    /// The message as the wallet reported it
    pub fn wallet_message(&self) -> &str {
        match self {
            WalletError::NotInstalled(msg)
            | WalletError::Rejected(msg)
            | WalletError::Connection(msg)
            | WalletError::Unsupported(msg)
            | WalletError::Signing(msg)
            | WalletError::Serialization(msg) => msg,
        }
    }
}

/// Classify a raw wallet error message from a connect attempt.
///
/// Keplr reports user refusal as "Request rejected"; anything else is a
/// connection error.
pub fn classify_js_error(message: String) -> WalletError {
    if message.to_lowercase().contains("rejected") {
        WalletError::Rejected(message)
    } else {
        WalletError::Connection(message)
    }
}

/// Extract a readable message from a thrown JS value
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(msg) = err.as_string() {
        return msg;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|msg| msg.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
