//! Business profile management: register the business or edit it.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::business_card::BusinessCard;
use crate::components::reauth_prompt::ReauthPrompt;
use crate::net::api;
use crate::net::types::{Business, BusinessPayload};
use crate::state::session::SessionState;
use crate::util::catalog;

/// Raw form field values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
struct BusinessFormFields {
    name: String,
    what_they_sell: String,
    hours: String,
    municipality: String,
    street_address: String,
    location_type: String,
    contact_phone: String,
    facebook: String,
    instagram: String,
    tiktok: String,
    business_type: String,
    logo: String,
}

impl BusinessFormFields {
    fn from_business(business: &Business) -> Self {
        Self {
            name: business.name.clone(),
            what_they_sell: business.what_they_sell.clone().unwrap_or_default(),
            hours: business.hours.clone().unwrap_or_default(),
            municipality: business.municipality.clone(),
            street_address: business.street_address.clone(),
            location_type: business.location_type.clone(),
            contact_phone: business.contact_phone.clone().unwrap_or_default(),
            facebook: business.social_media_facebook_username.clone().unwrap_or_default(),
            instagram: business.social_media_instagram_username.clone().unwrap_or_default(),
            tiktok: business.social_media_tiktok_username.clone().unwrap_or_default(),
            business_type: business.business_type.clone().unwrap_or_default(),
            logo: business.logo.clone().unwrap_or_default(),
        }
    }
}

/// Validate the profile form into a backend payload.
fn validate_business_form(fields: &BusinessFormFields) -> Result<BusinessPayload, &'static str> {
    let name = fields.name.trim();
    if name.is_empty() {
        return Err("El nombre del negocio es obligatorio.");
    }
    if fields.municipality.is_empty() {
        return Err("Selecciona un municipio.");
    }
    if fields.street_address.trim().is_empty() {
        return Err("La dirección es obligatoria.");
    }
    if fields.location_type.is_empty() {
        return Err("Selecciona el tipo de ubicación.");
    }
    let phone = fields.contact_phone.trim();
    if !phone.is_empty() && phone.chars().filter(char::is_ascii_digit).count() < 10 {
        return Err("Ingresa un teléfono de al menos 10 dígitos.");
    }
    let logo = fields.logo.trim();
    Ok(BusinessPayload {
        name: name.to_owned(),
        what_they_sell: fields.what_they_sell.trim().to_owned(),
        hours: fields.hours.trim().to_owned(),
        municipality: fields.municipality.clone(),
        street_address: fields.street_address.trim().to_owned(),
        location_type: fields.location_type.clone(),
        contact_phone: phone.to_owned(),
        social_media_facebook_username: fields.facebook.trim().to_owned(),
        social_media_instagram_username: fields.instagram.trim().to_owned(),
        social_media_tiktok_username: fields.tiktok.trim().to_owned(),
        business_type: fields.business_type.clone(),
        logo: if logo.is_empty() { None } else { Some(logo.to_owned()) },
    })
}

/// Business profile page at `/dashboard/profile`.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let business = RwSignal::new(None::<Business>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<api::ApiError>);
    let edit_mode = RwSignal::new(false);
    let submitting = RwSignal::new(false);
    let form_message = RwSignal::new(String::new());
    let municipality_options = RwSignal::new(catalog::municipality_options(&[]));

    let fields = RwSignal::new(BusinessFormFields {
        municipality: catalog::MUNICIPALITIES[0].value.to_owned(),
        location_type: catalog::LOCATION_TYPES[0].value.to_owned(),
        ..BusinessFormFields::default()
    });

    // Tracks which uid the page already loaded: the fetch below writes the
    // session's business cache, and without this guard that write would
    // re-trigger the effect forever.
    let loaded_for = RwSignal::new(None::<String>);

    Effect::new(move || {
        let state = session.get();
        if state.loading {
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
        loading.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // The municipality list is served by the backend; the static
            // catalog stays as fallback when that call fails.
            if let Ok(remote) = api::get_municipalities(&identity).await {
                municipality_options.set(catalog::municipality_options(&remote));
            }
            match api::get_my_business(&identity).await {
                Ok(found) => {
                    session.update(|s| s.set_business_info(Some(found.summary())));
                    fields.set(BusinessFormFields::from_business(&found));
                    business.set(Some(found));
                    edit_mode.set(false);
                }
                Err(api::ApiError::NotFound) => {
                    business.set(None);
                    edit_mode.set(true);
                }
                Err(err) => error.set(Some(err)),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = identity;
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let payload = match validate_business_form(&fields.get()) {
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
            let existing_id = business.get_untracked().map(|b| b.id);
            leptos::task::spawn_local(async move {
                let result = match existing_id {
                    Some(id) => api::update_business(&identity, id, &payload).await,
                    None => api::create_business(&identity, &payload).await,
                };
                match result {
                    Ok(saved) => {
                        session.update(|s| s.set_business_info(Some(saved.summary())));
                        fields.set(BusinessFormFields::from_business(&saved));
                        business.set(Some(saved));
                        edit_mode.set(false);
                    }
                    Err(err) => form_message.set(err.to_string()),
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identity, payload);
        }
    };

    let heading = move || {
        if business.get().is_some() { "Mi Negocio" } else { "Registra tu Negocio" }
    };

    view! {
        <div class="profile-page">
            <h1 class="profile-page__title">{heading}</h1>
            <Show
                when=move || error.get().is_none()
                fallback=move || {
                    let err = error.get().unwrap_or(api::ApiError::Http(0));
                    if err.needs_reauth() {
                        view! { <ReauthPrompt message=err.to_string()/> }.into_any()
                    } else {
                        view! {
                            <p class="profile-page__error">
                                "Error inesperado al cargar el perfil de negocio. " {err.to_string()}
                            </p>
                        }
                        .into_any()
                    }
                }
            >
                <Show when=move || !loading.get() fallback=|| view! { <p>"Cargando perfil de negocio..."</p> }>
                    <Show
                        when=move || edit_mode.get()
                        fallback=move || {
                            view! {
                                <div class="profile-page__display">
                                    {move || {
                                        business
                                            .get()
                                            .map(|b| view! { <BusinessCard business=b/> })
                                    }}
                                    <button class="btn btn--primary" on:click=move |_| edit_mode.set(true)>
                                        "Editar mi negocio"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <form class="business-form" on:submit=on_submit>
                            <label class="business-form__label">
                                "Nombre del negocio"
                                <input
                                    type="text"
                                    prop:value=move || fields.get().name
                                    on:input=move |ev| fields.update(|f| f.name = event_target_value(&ev))
                                />
                            </label>
                            <label class="business-form__label">
                                "¿Qué ofrecen?"
                                <input
                                    type="text"
                                    prop:value=move || fields.get().what_they_sell
                                    on:input=move |ev| fields.update(|f| f.what_they_sell = event_target_value(&ev))
                                />
                            </label>
                            <label class="business-form__label">
                                "Horario"
                                <input
                                    type="text"
                                    placeholder="L-S 9:00-20:00"
                                    prop:value=move || fields.get().hours
                                    on:input=move |ev| fields.update(|f| f.hours = event_target_value(&ev))
                                />
                            </label>
                            <label class="business-form__label">
                                "Municipio"
                                <select
                                    prop:value=move || fields.get().municipality
                                    on:change=move |ev| fields.update(|f| f.municipality = event_target_value(&ev))
                                >
                                    {move || {
                                        municipality_options
                                            .get()
                                            .into_iter()
                                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                                            .collect::<Vec<_>>()
                                    }}
                                </select>
                            </label>
                            <label class="business-form__label">
                                "Dirección"
                                <input
                                    type="text"
                                    prop:value=move || fields.get().street_address
                                    on:input=move |ev| fields.update(|f| f.street_address = event_target_value(&ev))
                                />
                            </label>
                            <label class="business-form__label">
                                "Tipo de ubicación"
                                <select
                                    prop:value=move || fields.get().location_type
                                    on:change=move |ev| fields.update(|f| f.location_type = event_target_value(&ev))
                                >
                                    {catalog::LOCATION_TYPES
                                        .iter()
                                        .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>
                            <label class="business-form__label">
                                "Giro"
                                <select
                                    prop:value=move || fields.get().business_type
                                    on:change=move |ev| fields.update(|f| f.business_type = event_target_value(&ev))
                                >
                                    <option value="">"Sin especificar"</option>
                                    {catalog::BUSINESS_TYPES
                                        .iter()
                                        .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>
                            <label class="business-form__label">
                                "Teléfono de contacto"
                                <input
                                    type="tel"
                                    prop:value=move || fields.get().contact_phone
                                    on:input=move |ev| fields.update(|f| f.contact_phone = event_target_value(&ev))
                                />
                            </label>
                            <label class="business-form__label">
                                "Facebook (usuario)"
                                <input
                                    type="text"
                                    prop:value=move || fields.get().facebook
                                    on:input=move |ev| fields.update(|f| f.facebook = event_target_value(&ev))
                                />
                            </label>
                            <label class="business-form__label">
                                "Instagram (usuario)"
                                <input
                                    type="text"
                                    prop:value=move || fields.get().instagram
                                    on:input=move |ev| fields.update(|f| f.instagram = event_target_value(&ev))
                                />
                            </label>
                            <label class="business-form__label">
                                "TikTok (usuario)"
                                <input
                                    type="text"
                                    prop:value=move || fields.get().tiktok
                                    on:input=move |ev| fields.update(|f| f.tiktok = event_target_value(&ev))
                                />
                            </label>
                            <label class="business-form__label">
                                "Logo (URL, opcional)"
                                <input
                                    type="url"
                                    prop:value=move || fields.get().logo
                                    on:input=move |ev| fields.update(|f| f.logo = event_target_value(&ev))
                                />
                            </label>
                            <Show when=move || !form_message.get().is_empty()>
                                <p class="business-form__message">{move || form_message.get()}</p>
                            </Show>
                            <div class="business-form__actions">
                                <Show when=move || business.get().is_some()>
                                    <button class="btn" type="button" on:click=move |_| edit_mode.set(false)>
                                        "Cancelar"
                                    </button>
                                </Show>
                                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                                    {move || if submitting.get() { "Guardando..." } else { "Guardar" }}
                                </button>
                            </div>
                        </form>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
