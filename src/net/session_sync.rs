//! Session listener: drives the session store from identity-provider
//! events.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider's "session changed" callback is modeled as an explicit
//! channel: sign-in/sign-up/sign-out flows push `Option<Identity>` events
//! through [`SessionEventSender`], and the listener seeds itself with the
//! provider's restored session at startup. Each event with an identity
//! triggers a forced-fresh token fetch in its own task; the store's epoch
//! ticket discards any fetch that a later event superseded.
//!
//! All listener logic is gated behind `hydrate` since it needs a browser
//! environment; SSR gets an inert sender.

use leptos::prelude::RwSignal;

use crate::net::types::Identity;
use crate::state::session::SessionState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;

#[cfg(feature = "hydrate")]
thread_local! {
    // Process-wide guard: repeated initialization returns the existing
    // sender instead of subscribing twice.
    static LISTENER: RefCell<Option<SessionEventSender>> = const { RefCell::new(None) };
}

/// Handle for pushing session-changed events to the listener.
///
/// Cloneable and inert outside the browser, so it can live in Leptos
/// context unconditionally.
#[derive(Clone, Default)]
pub struct SessionEventSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<Option<Identity>>>,
}

impl SessionEventSender {
    /// Push a session-changed event. Returns `false` if no listener is
    /// running (server side, or the channel closed).
    pub fn send(&self, event: Option<Identity>) -> bool {
        #[cfg(feature = "hydrate")]
        {
            if let Some(tx) = &self.tx {
                return tx.unbounded_send(event).is_ok();
            }
            false
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = event;
            false
        }
    }
}

/// Start the session listener for `session`, idempotently.
///
/// The first call subscribes to the event stream and kicks off the initial
/// session restore; later calls return the existing sender so there is
/// never more than one subscription per process.
pub fn spawn_session_listener(session: RwSignal<SessionState>) -> SessionEventSender {
    #[cfg(feature = "hydrate")]
    {
        if let Some(existing) = LISTENER.with(|cell| cell.borrow().clone()) {
            return existing;
        }
        let (tx, rx) = futures::channel::mpsc::unbounded();
        let sender = SessionEventSender { tx: Some(tx) };
        LISTENER.with(|cell| *cell.borrow_mut() = Some(sender.clone()));
        leptos::task::spawn_local(session_event_loop(session, rx));
        sender
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        SessionEventSender::default()
    }
}

#[cfg(feature = "hydrate")]
async fn session_event_loop(
    session: RwSignal<SessionState>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<Option<Identity>>,
) {
    use futures::StreamExt;

    // The provider persists its own session; restoring it is the first
    // "session changed" event of the process and resolves `loading`.
    let restored = crate::net::identity::restore_session().await;
    handle_session_event(session, restored);

    while let Some(event) = rx.next().await {
        handle_session_event(session, event);
    }
}

/// Apply one session-changed event: reset on sign-out, or start a forced
/// claims refresh for the new identity.
#[cfg(feature = "hydrate")]
fn handle_session_event(session: RwSignal<SessionState>, event: Option<Identity>) {
    use leptos::prelude::Update;

    let ticket = session
        .try_update(|state| state.begin_session_change(event.as_ref()))
        .flatten();
    let (Some(ticket), Some(identity)) = (ticket, event) else {
        return;
    };

    // Each fetch runs in its own task so a newer event never waits on an
    // older fetch; the epoch ticket decides which result sticks.
    leptos::task::spawn_local(async move {
        // Forced refresh: claims are written server-side (e.g. by payment
        // webhooks) without the local identity object changing.
        let outcome = crate::net::identity::fresh_token(&identity, true).await;
        if let Err(err) = &outcome {
            leptos::logging::warn!("claims refresh failed, going fail-closed: {err}");
        }
        session.update(|state| state.apply_claims(&ticket, identity, outcome));
    });
}
