//! Signing client seam

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use shared::dto::permit::{AminoSignResponse, SignOptions, StdSignDoc};

use crate::services::error::WalletError;

/// A wallet client able to produce amino signatures.
///
/// Implemented by the Keplr interop client and by test doubles.
#[async_trait(?Send)]
pub trait SigningClient {
    /// Whether the client exposes `signAmino`
    fn supports_amino(&self) -> bool;

    async fn sign_amino(
        &self,
        chain_id: &str,
        signer: &str,
        doc: &StdSignDoc,
        options: SignOptions,
    ) -> Result<AminoSignResponse, WalletError>;
}

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// A signing client plus the generation it was obtained in.
///
/// Every newly obtained client gets a fresh generation; the permit effect
/// re-runs when the generation changes, the way it would on a new client
/// reference.
#[derive(Clone)]
pub struct ClientHandle {
    generation: u64,
    client: Rc<dyn SigningClient>,
}

impl ClientHandle {
    pub fn new(client: Rc<dyn SigningClient>) -> Self {
        Self {
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
            client,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn client(&self) -> &dyn SigningClient {
        self.client.as_ref()
    }
}

impl PartialEq for ClientHandle {
    fn eq(&self, other: &Self) -> bool {
        self.generation == other.generation
    }
}

impl fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientHandle")
            .field("generation", &self.generation)
            .finish()
    }
}
