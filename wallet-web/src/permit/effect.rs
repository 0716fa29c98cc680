//! Permit signing effect bound to the wallet section's lifetime

use std::rc::Rc;

use futures::future::AbortHandle;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::permit::flow::{PermitFlow, SigningTask};
use crate::state::wallet::SessionContext;

/// Install the permit effect for the current component.
///
/// Re-runs when the status or the signing client changes; the address is read
/// untracked. An outstanding signing request is aborted when the trigger
/// changes or the component is disposed, and its result is dropped.
pub fn use_permit_signing(ctx: SessionContext, chain_id: String) {
    let flow = Rc::new(PermitFlow::new(chain_id, ctx.permit));
    let task = StoredValue::new(None::<AbortHandle>);

    on_cleanup(move || {
        task.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.abort();
            }
        });
    });

    let session = ctx.session;
    let status = Memo::new(move |_| session.with(|s| s.status));

    Effect::new(move || {
        let status = status.get();
        let client = ctx.client.get();
        let address = session.with_untracked(|s| s.address().map(str::to_string));

        if let Some(SigningTask { handle, run }) = flow.on_trigger(status, client, address) {
            task.set_value(Some(handle));
            spawn_local(run);
        }
    });
}
