//! # Query Permit Signing
//!
//! Once the wallet is connected and a signing client is available, the
//! wallet is asked for an amino signature over the fixed query permit
//! document. The signature proves control of the address to SNIP-20 query
//! services; nothing is broadcast and no funds move.
//!
//! - [`client`] - [`SigningClient`](client::SigningClient) seam and client handles
//! - [`gate`] - When to sign (trigger key, preconditions, overlap guard)
//! - [`flow`] - Runs the signing call for a trigger and records the outcome
//! - [`effect`] - Leptos wiring bound to the component lifetime

pub mod client;
pub mod effect;
pub mod flow;
pub mod gate;

use shared::dto::permit::{QueryPermit, SignOptions, StdSignDoc};

use crate::permit::client::SigningClient;
use crate::services::error::WalletError;

/// Outcome of the permit effect
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PermitState {
    #[default]
    Idle,
    Pending,
    Signed(QueryPermit),
    Failed(String),
}

impl PermitState {
    pub fn error(&self) -> Option<&str> {
        match self {
            PermitState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Ask `client` to sign the query permit for `address`.
///
/// The zero fee and empty memo of the document are kept: the wallet is told
/// not to substitute its own.
pub async fn sign_permit(
    client: &dyn SigningClient,
    chain_id: &str,
    address: &str,
) -> Result<QueryPermit, WalletError> {
    if !client.supports_amino() {
        return Err(WalletError::Unsupported("signAmino".to_string()));
    }

    let doc = StdSignDoc::query_permit();
    let response = client
        .sign_amino(chain_id, address, &doc, SignOptions::keep_document())
        .await?;

    log::info!("[PERMIT] signature: {}", response.signature.signature);
    match serde_json::to_string(&response.signed) {
        Ok(signed) => log::info!("[PERMIT] signed: {}", signed),
        Err(e) => log::warn!("[PERMIT] could not encode signed document: {}", e),
    }

    QueryPermit::from_response(&response)
        .ok_or_else(|| WalletError::Signing("signed document carries no query permit".to_string()))
}
