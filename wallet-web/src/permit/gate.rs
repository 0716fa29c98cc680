//! Decides when the permit effect signs.
//!
//! The gate re-evaluates only when its trigger (status, client generation)
//! changes. The address takes part in the readiness check but not in the
//! trigger, so an address change alone never causes a new signature.
//!
//! An outstanding signing call belongs to the trigger it was started for.
//! Any trigger change abandons it: its result is no longer recorded and the
//! new trigger is judged on its own.

use crate::permit::client::ClientHandle;
use crate::state::session::ConnectionStatus;

/// Values whose change re-runs the effect
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trigger {
    pub status: ConnectionStatus,
    pub client: Option<u64>,
}

impl Trigger {
    pub fn new(status: ConnectionStatus, client: Option<&ClientHandle>) -> Self {
        Self {
            status,
            client: client.map(ClientHandle::generation),
        }
    }
}

/// Precondition that failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotReady {
    NotConnected,
    MissingAddress,
    MissingClient,
    NoAminoSupport,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Trigger unchanged since the last evaluation
    Unchanged,
    NotReady(NotReady),
    /// Start a signing call and report back through [`PermitGate::finish`]
    Sign,
}

#[derive(Debug, Default)]
pub struct PermitGate {
    last: Option<Trigger>,
    /// Trigger of the outstanding signing call
    in_flight: Option<Trigger>,
}

impl PermitGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluate(
        &mut self,
        trigger: Trigger,
        address: Option<&str>,
        client: Option<&ClientHandle>,
    ) -> GateDecision {
        if self.last == Some(trigger) {
            return GateDecision::Unchanged;
        }
        self.last = Some(trigger);
        self.in_flight = None;

        if let Err(reason) = Self::check_ready(trigger.status, address, client) {
            return GateDecision::NotReady(reason);
        }
        self.in_flight = Some(trigger);
        GateDecision::Sign
    }

    /// Settle the call started for `trigger`.
    ///
    /// Returns `false` when the call was abandoned by a later trigger; its
    /// result must then be dropped.
    pub fn finish(&mut self, trigger: Trigger) -> bool {
        if self.in_flight == Some(trigger) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    pub fn in_flight(&self) -> Option<Trigger> {
        self.in_flight
    }

    fn check_ready(
        status: ConnectionStatus,
        address: Option<&str>,
        client: Option<&ClientHandle>,
    ) -> Result<(), NotReady> {
        if status != ConnectionStatus::Connected {
            return Err(NotReady::NotConnected);
        }
        if address.map_or(true, str::is_empty) {
            return Err(NotReady::MissingAddress);
        }
        let client = client.ok_or(NotReady::MissingClient)?;
        if !client.client().supports_amino() {
            return Err(NotReady::NoAminoSupport);
        }
        Ok(())
    }
}
