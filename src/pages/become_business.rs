//! Upsell page for authenticated users without the business-owner claim.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// "Become a business" page at `/dashboard/become-business`.
///
/// Owners have nothing to do here and are sent to their profile.
#[component]
pub fn BecomeBusinessPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.is_business_owner {
            navigate("/dashboard/profile", NavigateOptions::default());
        }
    });

    view! {
        <div class="become-page">
            <div class="become-card">
                <h1 class="become-card__title">"¡Conviértete en Dueño de Negocio!"</h1>
                <p class="become-card__subtitle">
                    "Impulsa tu comercio local con Mercado Local MX"
                </p>
                <ul class="become-card__benefits">
                    <li>"Forma parte del mercado digital de la región."</li>
                    <li>"Publica ofertas ilimitadas para tus clientes."</li>
                    <li>"Multiplica la visibilidad de tu marca."</li>
                    <li>"Acceso a futuras funcionalidades sin costo adicional."</li>
                </ul>
                <a class="btn btn--primary become-card__cta" href="/subscribe">
                    "Activar Membresía Ahora"
                </a>
                <p class="become-card__hint">
                    "Una vez completado el pago y activada tu membresía, podrás acceder "
                    "a todas las herramientas para tu negocio."
                </p>
            </div>
        </div>
    }
}
