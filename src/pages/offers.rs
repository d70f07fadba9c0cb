//! Region-wide offer list with the shared filter bar.
//!
//! DESIGN
//! ======
//! Same query-string-driven filtering as the business directory. The
//! floating create button only appears for business owners that actually
//! have a registered business; the probe result is cached on the session's
//! `business_info` so sibling pages skip the round-trip.

#[cfg(test)]
#[path = "offers_test.rs"]
mod offers_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::params::ParamsMap;

use crate::components::filter_bar::FilterBar;
use crate::components::offer_card::OfferCard;
use crate::components::reauth_prompt::ReauthPrompt;
use crate::net::api;
use crate::net::types::{ListingFilters, Offer};
use crate::state::session::SessionState;

fn filters_from_query(query: &ParamsMap) -> ListingFilters {
    ListingFilters {
        search: query.get("search").unwrap_or_default(),
        business_type: query.get("business_type").unwrap_or_default(),
        municipality: query.get("municipality").unwrap_or_default(),
    }
}

/// The create-offer affordance needs both the owner claim and a registered
/// business: a fresh owner that has not filled in a profile yet has
/// nothing to attach offers to.
fn can_create_offers(state: &SessionState, business_exists: bool) -> bool {
    state.is_business_owner && business_exists
}

/// Offer list page at `/dashboard/offers`.
#[component]
pub fn OfferListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let offers = RwSignal::new(Vec::<Offer>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<api::ApiError>);
    let retry_seq = RwSignal::new(0u64);
    let business_exists = RwSignal::new(false);

    let search = RwSignal::new(String::new());
    let municipality = RwSignal::new(String::new());
    let business_type = RwSignal::new(String::new());

    Effect::new(move || {
        let filters = filters_from_query(&query.get());
        search.set(filters.search);
        municipality.set(filters.municipality);
        business_type.set(filters.business_type);
    });

    Effect::new(move || {
        retry_seq.track();
        let filters = filters_from_query(&query.get());
        let state = session.get();
        if state.loading {
            return;
        }
        let Some(identity) = state.identity else {
            return;
        };
        loading.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::get_offers(&identity, &filters).await {
                Ok(items) => offers.set(items),
                Err(err) => error.set(Some(err)),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identity, filters);
        }
    });

    // Probe for the owner's business once the claim says owner; the cached
    // summary short-circuits the request on revisit.
    Effect::new(move || {
        let state = session.get();
        if state.loading || !state.is_business_owner {
            business_exists.set(false);
            return;
        }
        if state.business_info.is_some() {
            business_exists.set(true);
            return;
        }
        let Some(identity) = state.identity else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::get_my_business(&identity).await {
                Ok(business) => {
                    session.update(|s| s.set_business_info(Some(business.summary())));
                    business_exists.set(true);
                }
                Err(api::ApiError::NotFound) => business_exists.set(false),
                Err(err) => {
                    leptos::logging::warn!("business probe failed: {err}");
                    business_exists.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = identity;
        }
    });

    let navigate_apply = navigate.clone();
    let on_apply = Callback::new(move |()| {
        let filters = ListingFilters {
            search: search.get(),
            business_type: business_type.get(),
            municipality: municipality.get(),
        };
        navigate_apply(
            &format!("/dashboard/offers{}", api::listing_query(&filters)),
            leptos_router::NavigateOptions::default(),
        );
    });
    let navigate_clear = navigate.clone();
    let on_clear = Callback::new(move |()| {
        navigate_clear("/dashboard/offers", leptos_router::NavigateOptions::default());
    });

    let on_retry = move |_| retry_seq.update(|seq| *seq += 1);
    let show_create = move || can_create_offers(&session.get(), business_exists.get());

    view! {
        <div class="listing-page">
            <h1 class="listing-page__title">"Explora Todas las Ofertas de la Región"</h1>
            <FilterBar
                search=search
                municipality=municipality
                business_type=business_type
                on_apply=on_apply
                on_clear=on_clear
            />
            <Show
                when=move || error.get().is_none()
                fallback=move || {
                    let err = error.get().unwrap_or(api::ApiError::Http(0));
                    if err.needs_reauth() {
                        view! { <ReauthPrompt message=err.to_string()/> }.into_any()
                    } else {
                        view! {
                            <div class="listing-page__error">
                                <p>
                                    <strong>"¡Error! "</strong>
                                    "No se pudieron cargar las ofertas. "
                                    {err.to_string()}
                                </p>
                                <button class="btn btn--primary" on:click=on_retry>
                                    "Reintentar"
                                </button>
                            </div>
                        }
                        .into_any()
                    }
                }
            >
                <Show when=move || !loading.get() fallback=|| view! { <p>"Cargando ofertas..."</p> }>
                    <div class="listing-page__grid">
                        <Show when=move || !offers.get().is_empty() fallback=|| view! {
                            <p class="listing-page__empty">
                                "No se encontraron ofertas que coincidan con tu búsqueda."
                            </p>
                        }>
                            {move || {
                                offers
                                    .get()
                                    .into_iter()
                                    .map(|offer| view! { <OfferCard offer=offer/> })
                                    .collect::<Vec<_>>()
                            }}
                        </Show>
                    </div>
                </Show>
            </Show>
            <Show when=show_create>
                <a class="listing-page__create" href="/dashboard/offers/create" title="Crear oferta">
                    "+"
                </a>
            </Show>
        </div>
    }
}
