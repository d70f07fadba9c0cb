//! Prompt shown to accounts that have not confirmed their email yet.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Email verification prompt with a sign-out escape hatch.
#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let email = move || {
        session
            .get()
            .identity
            .map_or_else(|| "tu correo".to_owned(), |identity| identity.email)
    };

    let on_sign_out = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::identity::sign_out().await {
                    Ok(()) => {
                        session.update(SessionState::clear);
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("sign-out failed: {err}");
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, session);
        }
    };

    view! {
        <div class="verify-page">
            <div class="verify-card">
                <h2 class="verify-card__title">"¡Atención, " {email} "!"</h2>
                <p>
                    "Tu cuenta aún no ha sido verificada. Es necesario que confirmes tu "
                    "correo electrónico para poder acceder a todas las funcionalidades."
                </p>
                <p>
                    "Por favor, revisa tu bandeja de entrada (y la carpeta de spam) para "
                    "encontrar el correo de verificación."
                </p>
                <button class="btn btn--danger" disabled=move || busy.get() on:click=on_sign_out>
                    "Cerrar Sesión"
                </button>
                <p class="verify-card__hint">
                    "Una vez que hayas verificado tu email, simplemente inicia sesión de "
                    "nuevo para continuar."
                </p>
            </div>
        </div>
    }
}
