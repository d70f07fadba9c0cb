//! Public detail route for one business.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::business_card::BusinessCard;
use crate::components::reauth_prompt::ReauthPrompt;
use crate::net::api;
use crate::net::types::Business;
use crate::state::session::SessionState;

/// Business detail page at `/businesses/:id`.
#[component]
pub fn BusinessDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    let business = RwSignal::new(None::<Business>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<api::ApiError>);

    Effect::new(move || {
        let business_id = params.get().get("id").and_then(|raw| raw.parse::<i64>().ok());
        let state = session.get();
        if state.loading {
            return;
        }
        let Some(business_id) = business_id else {
            error.set(Some(api::ApiError::NotFound));
            loading.set(false);
            return;
        };
        let Some(identity) = state.identity else {
            error.set(Some(api::ApiError::Unauthenticated));
            loading.set(false);
            return;
        };
        loading.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::get_business(&identity, business_id).await {
                Ok(found) => business.set(Some(found)),
                Err(err) => error.set(Some(err)),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identity, business_id);
        }
    });

    view! {
        <div class="detail-page">
            <Show
                when=move || error.get().is_none()
                fallback=move || {
                    let err = error.get().unwrap_or(api::ApiError::Http(0));
                    if err.needs_reauth() {
                        view! { <ReauthPrompt message=err.to_string()/> }.into_any()
                    } else {
                        view! { <p class="detail-page__error">{err.to_string()}</p> }.into_any()
                    }
                }
            >
                <Show when=move || !loading.get() fallback=|| view! { <p>"Cargando negocio..."</p> }>
                    {move || business.get().map(|b| view! { <BusinessCard business=b/> })}
                </Show>
            </Show>
            <a class="detail-page__back" href="/dashboard/home">
                "← Volver a los negocios"
            </a>
        </div>
    }
}
