//! Card component for one promotional offer.
//!
//! DESIGN
//! ======
//! Used by the public offer list and the owner's "my offers" page; the
//! owner variant passes an edit link and a delete callback, which render as
//! an action row outside the detail link.

use leptos::prelude::*;

use crate::net::types::Offer;
use crate::util::date::format_long_date;
use crate::util::money::{format_price, is_discounted};

/// A clickable offer card linking to the offer detail route.
#[component]
pub fn OfferCard(
    offer: Offer,
    #[prop(optional)] edit_href: Option<String>,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let href = format!("/offers/{}", offer.id);
    let initial = offer.title.chars().next().map_or('¡', |c| c.to_ascii_uppercase());
    let discounted = is_discounted(offer.original_price.as_deref(), &offer.discount_price);
    let original_price = offer.original_price.clone().unwrap_or_default();
    let business_name = offer.business.as_ref().map(|b| b.name.clone());
    let description = offer
        .description
        .clone()
        .unwrap_or_else(|| "No hay descripción disponible para esta oferta.".to_owned());
    let offer_id = offer.id;
    let has_delete = on_delete.is_some();
    let edit_href = edit_href.unwrap_or_default();
    let has_edit = !edit_href.is_empty();
    let has_actions = has_edit || has_delete;
    let on_delete_click = Callback::new(move |()| {
        if let Some(on_delete) = on_delete.as_ref() {
            on_delete.run(offer_id);
        }
    });

    view! {
        <div class="offer-card">
            <a class="offer-card__body" href=href>
                {match offer.image.clone() {
                    Some(image) => view! {
                        <div class="offer-card__media">
                            <img src=image alt=offer.title.clone()/>
                            <span class="offer-card__badge">"Oferta Especial"</span>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <div class="offer-card__media offer-card__media--placeholder">
                            <span class="offer-card__initial">{initial.to_string()}</span>
                            <span class="offer-card__badge">"Oferta Especial"</span>
                        </div>
                    }
                    .into_any(),
                }}
                <h3 class="offer-card__title">{offer.title.clone()}</h3>
                <p class="offer-card__description">{description}</p>
                <Show when={
                    let business_name = business_name.clone();
                    move || business_name.is_some()
                }>
                    <p class="offer-card__business">{business_name.clone().unwrap_or_default()}</p>
                </Show>
                <div class="offer-card__footer">
                    <span class="offer-card__price">{format_price(&offer.discount_price)}</span>
                    <Show when=move || discounted>
                        <del class="offer-card__price--original">{format_price(&original_price)}</del>
                    </Show>
                    <span class="offer-card__validity">
                        "Válido hasta: " {format_long_date(&offer.end_date)}
                    </span>
                </div>
            </a>
            <Show when=move || has_actions>
                <div class="offer-card__actions">
                    {
                        let edit_href = edit_href.clone();
                        view! {
                            <Show when=move || has_edit>
                                <a class="btn btn--secondary" href=edit_href.clone()>
                                    "Editar"
                                </a>
                            </Show>
                        }
                    }
                    <Show when=move || has_delete>
                        <button class="btn btn--danger" on:click=move |_| on_delete_click.run(())>
                            "Eliminar"
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
