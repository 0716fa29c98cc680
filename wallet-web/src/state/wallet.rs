//! Wallet state management

use leptos::prelude::*;

use crate::permit::client::ClientHandle;
use crate::permit::PermitState;
use crate::state::session::{ChainInfo, Session};

/// Global wallet session context
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Session>,
    /// Signing client of the connected wallet; not `Send`, kept local
    pub client: RwSignal<Option<ClientHandle>, LocalStorage>,
    pub permit: RwSignal<PermitState>,
    /// Whether the wallet view (modal) is open
    pub view_open: RwSignal<bool>,
}

impl SessionContext {
    pub fn new(chain: ChainInfo) -> Self {
        Self {
            session: RwSignal::new(Session::new(chain)),
            client: RwSignal::new_local(None),
            permit: RwSignal::new(PermitState::Idle),
            view_open: RwSignal::new(false),
        }
    }

    pub fn set_client(&self, client: Option<ClientHandle>) {
        self.client.set(client);
    }

    pub fn disconnect(&self) {
        self.session.update(|s| s.disconnect());
        self.client.set(None);
        self.permit.set(PermitState::Idle);
    }
}

pub fn provide_session_context(chain: ChainInfo) -> SessionContext {
    let context = SessionContext::new(chain);
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
