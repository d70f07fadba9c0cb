//! Public detail route for one offer.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::reauth_prompt::ReauthPrompt;
use crate::net::api;
use crate::net::types::Offer;
use crate::state::session::SessionState;
use crate::util::date::format_long_date;
use crate::util::money::{format_price, is_discounted};

/// Offer detail page at `/offers/:id`.
#[component]
pub fn OfferDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    let offer = RwSignal::new(None::<Offer>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<api::ApiError>);

    Effect::new(move || {
        let offer_id = params.get().get("id").and_then(|raw| raw.parse::<i64>().ok());
        let state = session.get();
        if state.loading {
            return;
        }
        let Some(offer_id) = offer_id else {
            error.set(Some(api::ApiError::NotFound));
            loading.set(false);
            return;
        };
        // The backend requires a session even on public detail routes; a
        // signed-out visitor gets the sign-in prompt instead of a request.
        let Some(identity) = state.identity else {
            error.set(Some(api::ApiError::Unauthenticated));
            loading.set(false);
            return;
        };
        loading.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::get_offer(&identity, offer_id).await {
                Ok(found) => offer.set(Some(found)),
                Err(err) => error.set(Some(err)),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identity, offer_id);
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
                <Show when=move || !loading.get() fallback=|| view! { <p>"Cargando oferta..."</p> }>
                    {move || {
                        offer.get().map(|offer| {
                            let discounted =
                                is_discounted(offer.original_price.as_deref(), &offer.discount_price);
                            let original = offer.original_price.clone().unwrap_or_default();
                            view! {
                                <article class="offer-detail">
                                    {offer.image.clone().map(|image| view! {
                                        <img class="offer-detail__image" src=image alt=offer.title.clone()/>
                                    })}
                                    <h1 class="offer-detail__title">{offer.title.clone()}</h1>
                                    {offer.business.as_ref().map(|b| {
                                        let href = format!("/businesses/{}", b.id);
                                        view! {
                                            <a class="offer-detail__business" href=href>
                                                {b.name.clone()}
                                            </a>
                                        }
                                    })}
                                    <p class="offer-detail__description">
                                        {offer
                                            .description
                                            .clone()
                                            .unwrap_or_else(|| "Sin descripción.".to_owned())}
                                    </p>
                                    <p class="offer-detail__price">
                                        {format_price(&offer.discount_price)}
                                        <Show when=move || discounted>
                                            <del>{format_price(&original)}</del>
                                        </Show>
                                    </p>
                                    <p class="offer-detail__validity">
                                        "Vigencia: del "
                                        {format_long_date(&offer.start_date)}
                                        " al "
                                        {format_long_date(&offer.end_date)}
                                    </p>
                                    <Show when=move || !offer.is_active>
                                        <p class="offer-detail__inactive">"Esta oferta ya no está activa."</p>
                                    </Show>
                                </article>
                            }
                        })
                    }}
                </Show>
            </Show>
        </div>
    }
}
