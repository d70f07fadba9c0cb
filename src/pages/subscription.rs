//! Subscription flow: pitch, hosted checkout hand-off, and the success and
//! cancel return routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend creates the checkout session; the browser then leaves for
//! the payment provider's hosted page and comes back through one of the two
//! return routes. The success route sets the subscription flag
//! optimistically — the authoritative claim arrives with the next forced
//! token refresh, which may still revert it if the payment never confirms.

use leptos::prelude::*;

use crate::net::api;
use crate::state::session::SessionState;

/// Subscription pitch and checkout entry at `/subscribe`.
#[component]
pub fn SubscriptionPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let on_subscribe = move |_| {
        if busy.get() {
            return;
        }
        let Some(identity) = session.get_untracked().identity else {
            error.set("Inicia sesión para contratar la membresía.".to_owned());
            return;
        };
        busy.set(true);
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::create_checkout_session(&identity).await {
                Ok(checkout) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&checkout.checkout_url);
                    }
                }
                Err(err) => {
                    error.set(format!("Error al iniciar el pago: {err}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = identity;
        }
    };

    view! {
        <div class="subscription-page">
            <Show
                when=move || !session.get().loading
                fallback=|| view! { <p>"Cargando..."</p> }
            >
                <Show
                    when=move || !session.get().has_active_subscription
                    fallback=|| view! {
                        <div class="subscription-card">
                            <h1 class="subscription-card__title">"¡Ya eres miembro Premium!"</h1>
                            <p>
                                "Gracias por tu apoyo. Ya tienes acceso a todas las funciones "
                                "de negocios."
                            </p>
                            <a class="btn btn--primary" href="/dashboard/profile">
                                "Ir a mi negocio"
                            </a>
                        </div>
                    }
                >
                    <div class="subscription-card">
                        <h1 class="subscription-card__title">"Potencia tu Negocio"</h1>
                        <p class="subscription-card__price">
                            "Paga $99.99 MXN al mes y forma parte de nuestra comunidad "
                            "digital para conectar con más clientes."
                        </p>
                        <ul class="subscription-card__benefits">
                            <li>"Forma parte del mercado digital."</li>
                            <li>"Publica ofertas ilimitadas."</li>
                            <li>"Multiplica la visibilidad de tu marca."</li>
                            <li>"Soporte prioritario."</li>
                        </ul>
                        <button
                            class="btn btn--primary subscription-card__cta"
                            disabled=move || busy.get()
                            on:click=on_subscribe
                        >
                            {move || if busy.get() { "Cargando..." } else { "Suscribirse ahora" }}
                        </button>
                        <Show when=move || !error.get().is_empty()>
                            <p class="subscription-card__error">{move || error.get()}</p>
                        </Show>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

/// Return route after a completed checkout at `/subscription/success`.
#[component]
pub fn SubscriptionSuccessPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    // Optimistic: the payment webhook updates the authoritative claim
    // asynchronously; until the next token refresh this keeps the UI
    // consistent with what the user just paid for.
    Effect::new(move || {
        session.update(|state| state.set_subscription_status(true));
    });

    view! {
        <div class="subscription-page">
            <div class="subscription-card subscription-card--success">
                <h1 class="subscription-card__title">"¡Suscripción exitosa! 🎉"</h1>
                <p>"Gracias por tu pago. Tu cuenta ha sido actualizada."</p>
                <a class="btn btn--primary" href="/dashboard/profile">
                    "Ir a mi negocio"
                </a>
            </div>
        </div>
    }
}

/// Return route after an abandoned checkout at `/subscription/canceled`.
#[component]
pub fn SubscriptionCanceledPage() -> impl IntoView {
    view! {
        <div class="subscription-page">
            <div class="subscription-card subscription-card--canceled">
                <h1 class="subscription-card__title">"Pago cancelado 😔"</h1>
                <p>"Tu suscripción no ha sido procesada. Puedes volver a intentarlo."</p>
                <a class="btn btn--danger" href="/subscribe">
                    "Volver a la suscripción"
                </a>
            </div>
        </div>
    }
}
