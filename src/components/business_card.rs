//! Card component for one business in the directory.

use leptos::prelude::*;

use crate::net::types::Business;
use crate::util::catalog;

/// Resolve a catalog value to its display label, falling back to the raw
/// value for entries the catalog does not know.
fn catalog_label(options: &[catalog::SelectOption], value: &str) -> String {
    options
        .iter()
        .find(|opt| opt.value == value)
        .map_or_else(|| value.to_owned(), |opt| opt.label.to_owned())
}

/// A business directory card with a link to the detail route.
#[component]
pub fn BusinessCard(business: Business) -> impl IntoView {
    let href = format!("/businesses/{}", business.id);
    let initial = business.name.chars().next().map_or('N', |c| c.to_ascii_uppercase());
    let is_paid = business.is_paid_member;
    let municipality = catalog_label(catalog::MUNICIPALITIES, &business.municipality);
    let business_type = business
        .business_type
        .as_deref()
        .map(|value| catalog_label(catalog::BUSINESS_TYPES, value))
        .unwrap_or_else(|| "No especificado".to_owned());
    let what_they_sell = business
        .what_they_sell
        .clone()
        .unwrap_or_else(|| "No especificado".to_owned());
    let hours = business.hours.clone().unwrap_or_else(|| "No especificado".to_owned());
    let phone = business.contact_phone.clone();
    let has_phone = phone.is_some();

    view! {
        <div class="business-card">
            {match business.logo.clone() {
                Some(logo) => view! {
                    <div class="business-card__media">
                        <img src=logo alt=format!("Logo de {}", business.name)/>
                        <Show when=move || is_paid>
                            <span class="business-card__badge">"Miembro Premium"</span>
                        </Show>
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="business-card__media business-card__media--placeholder">
                        <span class="business-card__initial">{initial.to_string()}</span>
                        <Show when=move || is_paid>
                            <span class="business-card__badge">"Miembro Premium"</span>
                        </Show>
                    </div>
                }
                .into_any(),
            }}
            <div class="business-card__body">
                <h3 class="business-card__name">{business.name.clone()}</h3>
                <p>
                    <strong>"Ofrecen: "</strong>
                    {what_they_sell}
                </p>
                <p>
                    <strong>"Horario: "</strong>
                    {hours}
                </p>
                <p>
                    <strong>"Ubicación: "</strong>
                    {format!("{}, {municipality}, Guanajuato, México", business.street_address)}
                </p>
                <p>
                    <strong>"Giro: "</strong>
                    {business_type}
                </p>
                <Show when=move || has_phone>
                    <p>
                        <strong>"Teléfono: "</strong>
                        {phone.clone().unwrap_or_default()}
                    </p>
                </Show>
                <a class="btn btn--primary business-card__detail" href=href>
                    "Ver Detalles del Negocio"
                </a>
            </div>
        </div>
    }
}
