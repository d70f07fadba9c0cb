//! The owner's own offers, with edit links and delete confirmation.

use leptos::prelude::*;

use crate::components::offer_card::OfferCard;
use crate::components::reauth_prompt::ReauthPrompt;
use crate::net::api;
use crate::net::types::Offer;
use crate::state::session::SessionState;

/// Owner-scoped offer management page at `/dashboard/my-offers`.
#[component]
pub fn MyOffersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let offers = RwSignal::new(Vec::<Offer>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<api::ApiError>);
    let business_exists = RwSignal::new(false);
    let offer_to_delete = RwSignal::new(None::<Offer>);
    let deleting = RwSignal::new(false);

    // Guard against the business-cache write below re-triggering the fetch.
    let loaded_for = RwSignal::new(None::<String>);

    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        if !state.is_business_owner {
            loading.set(false);
            return;
        }
        let Some(identity) = state.identity else {
            loaded_for.set(None);
            return;
        };
        if loaded_for.get_untracked().as_deref() == Some(identity.uid.as_str()) {
            return;
        }
        loaded_for.set(Some(identity.uid.clone()));
        let cached_business = state.business_info.is_some();
        loading.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Confirm the business first: offers without one cannot exist,
            // and a 404 here is guidance, not an error.
            if !cached_business {
                match api::get_my_business(&identity).await {
                    Ok(business) => {
                        session.update(|s| s.set_business_info(Some(business.summary())));
                    }
                    Err(api::ApiError::NotFound) => {
                        business_exists.set(false);
                        loading.set(false);
                        return;
                    }
                    Err(err) => {
                        error.set(Some(err));
                        loading.set(false);
                        return;
                    }
                }
            }
            business_exists.set(true);
            match api::get_my_offers(&identity).await {
                Ok(items) => offers.set(items),
                Err(api::ApiError::NotFound) => offers.set(Vec::new()),
                Err(err) => error.set(Some(err)),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identity, cached_business);
        }
    });

    let on_delete_request = Callback::new(move |offer_id: i64| {
        let found = offers.get_untracked().into_iter().find(|o| o.id == offer_id);
        offer_to_delete.set(found);
    });
    let on_delete_cancel = Callback::new(move |()| offer_to_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        if deleting.get_untracked() {
            return;
        }
        let Some(offer) = offer_to_delete.get_untracked() else {
            return;
        };
        let Some(identity) = session.get_untracked().identity else {
            return;
        };
        deleting.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_offer(&identity, offer.id).await {
                Ok(()) => {
                    offers.update(|items| items.retain(|o| o.id != offer.id));
                    offer_to_delete.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
            deleting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identity, offer);
        }
    });

    let is_owner = move || session.get().is_business_owner;

    view! {
        <div class="my-offers-page">
            <h1 class="my-offers-page__title">"Mis Ofertas"</h1>
            <Show
                when=is_owner
                fallback=|| view! {
                    <div class="my-offers-page__notice">
                        <p>"Necesitas una membresía de negocio para publicar ofertas."</p>
                        <a class="btn btn--primary" href="/dashboard/become-business">
                            "Conviértete en Negocio"
                        </a>
                    </div>
                }
            >
                <Show
                    when=move || error.get().is_none()
                    fallback=move || {
                        let err = error.get().unwrap_or(api::ApiError::Http(0));
                        if err.needs_reauth() {
                            view! { <ReauthPrompt message=err.to_string()/> }.into_any()
                        } else {
                            view! {
                                <p class="my-offers-page__error">{err.to_string()}</p>
                            }
                            .into_any()
                        }
                    }
                >
                    <Show when=move || !loading.get() fallback=|| view! { <p>"Cargando tus ofertas..."</p> }>
                        <Show
                            when=move || business_exists.get()
                            fallback=|| view! {
                                <div class="my-offers-page__notice">
                                    <p>
                                        "Aún no has registrado tu negocio. Completa tu perfil "
                                        "antes de publicar ofertas."
                                    </p>
                                    <a class="btn btn--primary" href="/dashboard/profile">
                                        "Registrar mi negocio"
                                    </a>
                                </div>
                            }
                        >
                            <div class="listing-page__grid">
                                <Show when=move || !offers.get().is_empty() fallback=|| view! {
                                    <p class="listing-page__empty">
                                        "Todavía no tienes ofertas publicadas."
                                    </p>
                                }>
                                    {move || {
                                        offers
                                            .get()
                                            .into_iter()
                                            .map(|offer| {
                                                let edit_href =
                                                    format!("/dashboard/offers/{}/edit", offer.id);
                                                view! {
                                                    <OfferCard
                                                        offer=offer
                                                        edit_href=edit_href
                                                        on_delete=on_delete_request
                                                    />
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </Show>
                            </div>
                            <a class="listing-page__create" href="/dashboard/offers/create" title="Crear oferta">
                                "+"
                            </a>
                        </Show>
                    </Show>
                </Show>
            </Show>
            <Show when=move || offer_to_delete.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| on_delete_cancel.run(())>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Eliminar Oferta"</h2>
                        <p class="dialog__danger">
                            "Esta acción eliminará la oferta \""
                            {move || offer_to_delete.get().map(|o| o.title).unwrap_or_default()}
                            "\" de forma permanente."
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| on_delete_cancel.run(())>
                                "Cancelar"
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=move || deleting.get()
                                on:click=move |_| on_delete_confirm.run(())
                            >
                                {move || if deleting.get() { "Eliminando..." } else { "Eliminar" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
