//! Permit signing flow, independent of the reactive runtime.
//!
//! The Leptos effect feeds every trigger change into [`PermitFlow::on_trigger`]
//! and spawns the returned task. A trigger change also aborts the task started
//! for the previous trigger, so a result never lands in a session it was not
//! requested for.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{abortable, AbortHandle, FutureExt, LocalBoxFuture};
use leptos::prelude::*;

use crate::permit::client::ClientHandle;
use crate::permit::gate::{GateDecision, PermitGate, Trigger};
use crate::permit::{sign_permit, PermitState};
use crate::state::session::ConnectionStatus;

/// Where the flow records its progress
pub trait PermitSink: Clone + 'static {
    fn record(&self, state: PermitState);
}

impl PermitSink for RwSignal<PermitState> {
    fn record(&self, state: PermitState) {
        self.set(state);
    }
}

/// A signing call ready to be spawned
pub struct SigningTask {
    pub handle: AbortHandle,
    pub run: LocalBoxFuture<'static, ()>,
}

pub struct PermitFlow<S> {
    chain_id: String,
    sink: S,
    gate: Rc<RefCell<PermitGate>>,
    task: RefCell<Option<AbortHandle>>,
}

impl<S: PermitSink> PermitFlow<S> {
    pub fn new(chain_id: impl Into<String>, sink: S) -> Self {
        Self {
            chain_id: chain_id.into(),
            sink,
            gate: Rc::new(RefCell::new(PermitGate::new())),
            task: RefCell::new(None),
        }
    }

    /// Evaluate a trigger change.
    ///
    /// `address` is read at the time of the change but is not part of the
    /// trigger. Returns the signing task to spawn, if the gate opened.
    pub fn on_trigger(
        &self,
        status: ConnectionStatus,
        client: Option<ClientHandle>,
        address: Option<String>,
    ) -> Option<SigningTask> {
        let trigger = Trigger::new(status, client.as_ref());
        let abandoned = self.gate.borrow().in_flight().is_some_and(|t| t != trigger);
        let decision = self
            .gate
            .borrow_mut()
            .evaluate(trigger, address.as_deref(), client.as_ref());
        log::debug!("[PERMIT] {} -> {:?}", status.name(), decision);

        if abandoned {
            log::debug!("[PERMIT] abandoning outstanding signing call");
            self.cancel();
            self.sink.record(PermitState::Idle);
        }

        let (GateDecision::Sign, Some(client), Some(address)) = (decision, client, address) else {
            return None;
        };

        self.sink.record(PermitState::Pending);
        let gate = self.gate.clone();
        let sink = self.sink.clone();
        let chain_id = self.chain_id.clone();
        let (signing, handle) = abortable(async move {
            let result = sign_permit(client.client(), &chain_id, &address).await;
            if !gate.borrow_mut().finish(trigger) {
                log::debug!("[PERMIT] dropping result for a previous session");
                return;
            }
            match result {
                Ok(permit) => {
                    log::info!("[PERMIT] query permit signed for {}", address);
                    sink.record(PermitState::Signed(permit));
                }
                Err(e) => {
                    log::warn!("[PERMIT] signing failed: {}", e);
                    sink.record(PermitState::Failed(e.to_string()));
                }
            }
        });
        *self.task.borrow_mut() = Some(handle.clone());

        let run = async move {
            if signing.await.is_err() {
                log::debug!("[PERMIT] signing task aborted");
            }
        }
        .boxed_local();
        Some(SigningTask { handle, run })
    }

    /// Abort the outstanding signing call, if any
    pub fn cancel(&self) {
        if let Some(handle) = self.task.borrow_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permit::testing::MockSigner;
    use crate::services::error::WalletError;

    const ADDR: &str = "secret1ap26qrlp8mcq2pg6r47w43l0y8zkqm8a450s03";
    const OTHER: &str = "secret1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq";

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<PermitState>>>);

    impl PermitSink for Recorder {
        fn record(&self, state: PermitState) {
            self.0.borrow_mut().push(state);
        }
    }

    impl Recorder {
        fn last(&self) -> Option<PermitState> {
            self.0.borrow().last().cloned()
        }
    }

    fn flow() -> (PermitFlow<Recorder>, Recorder) {
        let recorder = Recorder::default();
        (PermitFlow::new("secret-4", recorder.clone()), recorder)
    }

    #[tokio::test]
    async fn test_connect_flow_signs_exactly_once() {
        let (flow, recorder) = flow();
        let signer = Rc::new(MockSigner::new());
        let client = ClientHandle::new(signer.clone());

        assert!(flow.on_trigger(ConnectionStatus::Disconnected, Some(client.clone()), None).is_none());
        assert!(flow.on_trigger(ConnectionStatus::Connecting, Some(client.clone()), None).is_none());
        let task = flow
            .on_trigger(ConnectionStatus::Connected, Some(client.clone()), Some(ADDR.to_string()))
            .expect("connected session signs");
        assert_eq!(recorder.last(), Some(PermitState::Pending));
        task.run.await;

        // Same status and client with another address: no new call
        assert!(flow
            .on_trigger(ConnectionStatus::Connected, Some(client), Some(OTHER.to_string()))
            .is_none());

        assert_eq!(signer.call_count(), 1);
        let calls = signer.calls.borrow();
        assert_eq!(calls[0].signer, ADDR);
        assert_eq!(calls[0].chain_id, "secret-4");
        match recorder.last() {
            Some(PermitState::Signed(permit)) => assert_eq!(permit.signature.signature, format!("sig-{}", ADDR)),
            other => panic!("expected signed permit, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_signing_failure_is_recorded() {
        let (flow, recorder) = flow();
        let signer = MockSigner::failing(WalletError::Signing("Request rejected".to_string()));
        let client = ClientHandle::new(Rc::new(signer));

        let task = flow
            .on_trigger(ConnectionStatus::Connected, Some(client), Some(ADDR.to_string()))
            .unwrap();
        task.run.await;

        assert_eq!(
            recorder.last(),
            Some(PermitState::Failed("Signing error: Request rejected".to_string()))
        );
    }

    #[tokio::test]
    async fn test_reconnect_while_signing_gets_its_own_permit() {
        let (flow, recorder) = flow();
        let (held, release) = MockSigner::held();
        let old_signer = Rc::new(held);
        let old = ClientHandle::new(old_signer.clone());

        let mut old_task = flow
            .on_trigger(ConnectionStatus::Connected, Some(old), Some(ADDR.to_string()))
            .unwrap();
        assert!(futures::poll!(&mut old_task.run).is_pending());
        assert_eq!(old_signer.call_count(), 1);

        assert!(flow.on_trigger(ConnectionStatus::Disconnected, None, None).is_none());
        assert_eq!(recorder.last(), Some(PermitState::Idle));

        let new_signer = Rc::new(MockSigner::new());
        let new = ClientHandle::new(new_signer.clone());
        let new_task = flow
            .on_trigger(ConnectionStatus::Connected, Some(new), Some(OTHER.to_string()))
            .expect("new session signs although the old call is pending");

        let _ = release.send(());
        old_task.run.await;
        assert_eq!(recorder.last(), Some(PermitState::Pending));

        new_task.run.await;
        assert_eq!(new_signer.call_count(), 1);
        match recorder.last() {
            Some(PermitState::Signed(permit)) => assert_eq!(permit.signature.signature, format!("sig-{}", OTHER)),
            other => panic!("expected signed permit, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_disconnect_drops_pending_result() {
        let (flow, recorder) = flow();
        let (held, release) = MockSigner::held();
        let client = ClientHandle::new(Rc::new(held));

        let mut task = flow
            .on_trigger(ConnectionStatus::Connected, Some(client), Some(ADDR.to_string()))
            .unwrap();
        assert!(futures::poll!(&mut task.run).is_pending());

        assert!(flow.on_trigger(ConnectionStatus::Disconnected, None, None).is_none());
        let _ = release.send(());
        task.run.await;

        assert_eq!(recorder.last(), Some(PermitState::Idle));
        assert!(recorder.0.borrow().iter().all(|s| !matches!(s, PermitState::Signed(_))));
    }

    #[tokio::test]
    async fn test_cancel_aborts_task() {
        let (flow, recorder) = flow();
        let (held, _release) = MockSigner::held();
        let client = ClientHandle::new(Rc::new(held));

        let task = flow
            .on_trigger(ConnectionStatus::Connected, Some(client), Some(ADDR.to_string()))
            .unwrap();
        flow.cancel();
        task.run.await;

        assert_eq!(recorder.last(), Some(PermitState::Pending));
    }
}
