//! Create/edit form for an offer.

#[cfg(test)]
#[path = "offer_form_test.rs"]
mod offer_form_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::reauth_prompt::ReauthPrompt;
use crate::net::api;
use crate::net::types::OfferPayload;
use crate::state::session::SessionState;
use crate::util::date::end_not_before_start;
use crate::util::money::price_value;

/// Raw form field values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
struct OfferFormFields {
    title: String,
    description: String,
    original_price: String,
    discount_price: String,
    image: String,
    start_date: String,
    end_date: String,
    is_active: bool,
}

/// Validate the form into a backend payload.
///
/// Prices must parse non-negative, an original price (when given) must sit
/// strictly above the offer price, and the validity window must not end
/// before it starts.
fn validate_offer_form(fields: &OfferFormFields) -> Result<OfferPayload, &'static str> {
    let title = fields.title.trim();
    if title.is_empty() {
        return Err("El título es obligatorio.");
    }
    let discount = price_value(&fields.discount_price)
        .ok_or("Ingresa un precio de oferta válido (mayor o igual a 0).")?;
    let original_raw = fields.original_price.trim();
    let original = if original_raw.is_empty() {
        None
    } else {
        Some(price_value(original_raw).ok_or("Ingresa un precio original válido (mayor o igual a 0).")?)
    };
    if let Some(original) = original {
        if original <= discount {
            return Err("El precio de oferta debe ser menor que el precio original.");
        }
    }
    if !end_not_before_start(&fields.start_date, &fields.end_date) {
        return Err("La fecha de fin debe ser igual o posterior a la fecha de inicio.");
    }
    let image = fields.image.trim();
    Ok(OfferPayload {
        title: title.to_owned(),
        description: fields.description.trim().to_owned(),
        original_price: original.map(|_| original_raw.to_owned()),
        discount_price: fields.discount_price.trim().to_owned(),
        image: if image.is_empty() { None } else { Some(image.to_owned()) },
        start_date: fields.start_date.clone(),
        end_date: fields.end_date.clone(),
        is_active: fields.is_active,
    })
}

/// Offer create/edit page at `/dashboard/offers/create` and
/// `/dashboard/offers/:id/edit`.
#[component]
pub fn OfferFormPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let editing_id = Memo::new(move |_| {
        params.get().get("id").and_then(|raw| raw.parse::<i64>().ok())
    });

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let original_price = RwSignal::new(String::new());
    let discount_price = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let is_active = RwSignal::new(true);

    let loading = RwSignal::new(false);
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<api::ApiError>);
    let form_message = RwSignal::new(String::new());

    // Prefill when editing an existing offer.
    Effect::new(move || {
        let Some(offer_id) = editing_id.get() else {
            return;
        };
        let state = session.get();
        if state.loading {
            return;
        }
        let Some(identity) = state.identity else {
            return;
        };
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::get_offer(&identity, offer_id).await {
                Ok(offer) => {
                    title.set(offer.title);
                    description.set(offer.description.unwrap_or_default());
                    original_price.set(offer.original_price.unwrap_or_default());
                    discount_price.set(offer.discount_price);
                    image.set(offer.image.unwrap_or_default());
                    start_date.set(offer.start_date);
                    end_date.set(offer.end_date);
                    is_active.set(offer.is_active);
                }
                Err(err) => error.set(Some(err)),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identity, offer_id);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let fields = OfferFormFields {
            title: title.get(),
            description: description.get(),
            original_price: original_price.get(),
            discount_price: discount_price.get(),
            image: image.get(),
            start_date: start_date.get(),
            end_date: end_date.get(),
            is_active: is_active.get(),
        };
        let payload = match validate_offer_form(&fields) {
            Ok(payload) => payload,
            Err(message) => {
                form_message.set(message.to_owned());
                return;
            }
        };
        let Some(identity) = session.get_untracked().identity else {
            return;
        };
        submitting.set(true);
        form_message.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let offer_id = editing_id.get_untracked();
            leptos::task::spawn_local(async move {
                let result = match offer_id {
                    Some(offer_id) => api::update_offer(&identity, offer_id, &payload).await,
                    None => api::create_offer(&identity, &payload).await,
                };
                match result {
                    Ok(_) => {
                        navigate("/dashboard/my-offers", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        form_message.set(err.to_string());
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, identity, payload);
        }
    };

    let heading = move || {
        if editing_id.get().is_some() { "Editar Oferta" } else { "Nueva Oferta" }
    };

    view! {
        <div class="offer-form-page">
            <h1 class="offer-form-page__title">{heading}</h1>
            <Show
                when=move || error.get().is_none()
                fallback=move || {
                    let err = error.get().unwrap_or(api::ApiError::Http(0));
                    if err.needs_reauth() {
                        view! { <ReauthPrompt message=err.to_string()/> }.into_any()
                    } else {
                        view! {
                            <p class="offer-form-page__error">
                                "No se pudo cargar la oferta. " {err.to_string()}
                            </p>
                        }
                        .into_any()
                    }
                }
            >
                {
                    let on_submit = on_submit.clone();
                    view! {
                <Show when=move || !loading.get() fallback=|| view! { <p>"Cargando oferta..."</p> }>
                    <form class="offer-form" on:submit=on_submit.clone()>
                        <label class="offer-form__label">
                            "Título"
                            <input
                                type="text"
                                prop:value=move || title.get()
                                on:input=move |ev| title.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="offer-form__label">
                            "Descripción"
                            <textarea
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="offer-form__label">
                            "Precio original (opcional)"
                            <input
                                type="number"
                                min="0"
                                step="0.01"
                                prop:value=move || original_price.get()
                                on:input=move |ev| original_price.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="offer-form__label">
                            "Precio de oferta"
                            <input
                                type="number"
                                min="0"
                                step="0.01"
                                prop:value=move || discount_price.get()
                                on:input=move |ev| discount_price.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="offer-form__label">
                            "Imagen (URL, opcional)"
                            <input
                                type="url"
                                prop:value=move || image.get()
                                on:input=move |ev| image.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="offer-form__label">
                            "Fecha de inicio"
                            <input
                                type="date"
                                prop:value=move || start_date.get()
                                on:input=move |ev| start_date.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="offer-form__label">
                            "Fecha de fin"
                            <input
                                type="date"
                                prop:value=move || end_date.get()
                                on:input=move |ev| end_date.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="offer-form__label offer-form__label--inline">
                            <input
                                type="checkbox"
                                prop:checked=move || is_active.get()
                                on:change=move |ev| is_active.set(event_target_checked(&ev))
                            />
                            "Oferta activa"
                        </label>
                        <Show when=move || !form_message.get().is_empty()>
                            <p class="offer-form__message">{move || form_message.get()}</p>
                        </Show>
                        <div class="offer-form__actions">
                            <a class="btn" href="/dashboard/my-offers">
                                "Cancelar"
                            </a>
                            <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                                {move || if submitting.get() { "Guardando..." } else { "Guardar" }}
                            </button>
                        </div>
                    </form>
                </Show>
                    }
                }
            </Show>
        </div>
    }
}
