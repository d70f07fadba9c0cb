//! Prompt shown when a backend call reports a stale or unauthorized
//! session (401/403).
//!
//! ERROR HANDLING
//! ==============
//! A stale session is recovered by signing in again, never by crashing the
//! page: the prompt confirms the provider sign-out, resets the session
//! store, and sends the user to the public entry.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Re-authentication prompt with the triggering message.
#[component]
pub fn ReauthPrompt(message: String) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let busy = RwSignal::new(false);

    let on_reauth = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // The store resets only once the provider confirms, so the two
            // never disagree about whether a session exists.
            match crate::net::identity::sign_out().await {
                Ok(()) => {
                    session.update(SessionState::clear);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(crate::util::guard::PUBLIC_ENTRY);
                    }
                }
                Err(err) => {
                    leptos::logging::warn!("sign-out before re-auth failed: {err}");
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    };

    view! {
        <div class="reauth-prompt">
            <p class="reauth-prompt__message">{message}</p>
            <button class="btn btn--primary" disabled=move || busy.get() on:click=on_reauth>
                "Iniciar sesión de nuevo"
            </button>
        </div>
    }
}
