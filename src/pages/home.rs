//! Business directory with search/municipality/category filters.
//!
//! DESIGN
//! ======
//! Filters live in the route query string: applying them navigates, and the
//! fetch effect re-runs off the query map. Refreshing or sharing the URL
//! reproduces the same filtered view.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::params::ParamsMap;

use crate::components::business_card::BusinessCard;
use crate::components::filter_bar::FilterBar;
use crate::components::reauth_prompt::ReauthPrompt;
use crate::net::api;
use crate::net::types::{Business, ListingFilters};
use crate::state::session::SessionState;

fn filters_from_query(query: &ParamsMap) -> ListingFilters {
    ListingFilters {
        search: query.get("search").unwrap_or_default(),
        business_type: query.get("business_type").unwrap_or_default(),
        municipality: query.get("municipality").unwrap_or_default(),
    }
}

/// Business directory page at `/dashboard/home`.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let businesses = RwSignal::new(Vec::<Business>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<api::ApiError>);
    let retry_seq = RwSignal::new(0u64);

    // Filter controls, seeded from the URL so a shared link shows its own
    // filters in the inputs.
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
            match api::get_businesses(&identity, &filters).await {
                Ok(items) => businesses.set(items),
                Err(err) => error.set(Some(err)),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identity, filters);
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
            &format!("/dashboard/home{}", api::listing_query(&filters)),
            leptos_router::NavigateOptions::default(),
        );
    });
    let navigate_clear = navigate.clone();
    let on_clear = Callback::new(move |()| {
        navigate_clear("/dashboard/home", leptos_router::NavigateOptions::default());
    });

    let on_retry = move |_| retry_seq.update(|seq| *seq += 1);

    view! {
        <div class="listing-page">
            <h1 class="listing-page__title">"Negocios Locales"</h1>
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
                                    "No se pudieron cargar los negocios. "
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
                <Show when=move || !loading.get() fallback=|| view! { <p>"Cargando negocios..."</p> }>
                    <div class="listing-page__grid">
                        <Show when=move || !businesses.get().is_empty() fallback=|| view! {
                            <p class="listing-page__empty">
                                "No se encontraron negocios que coincidan con tu búsqueda."
                            </p>
                        }>
                            {move || {
                                businesses
                                    .get()
                                    .into_iter()
                                    .map(|business| view! { <BusinessCard business=business/> })
                                    .collect::<Vec<_>>()
                            }}
                        </Show>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
