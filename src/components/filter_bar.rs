//! Shared search/municipality/category filter bar.
//!
//! DESIGN
//! ======
//! The business directory and the offer list apply identical filters; this
//! component owns only the controls, while the page owns the signals and
//! navigates with the resulting query string on apply.

use leptos::prelude::*;

use crate::util::catalog;

/// Filter controls bound to page-owned signals.
#[component]
pub fn FilterBar(
    search: RwSignal<String>,
    municipality: RwSignal<String>,
    business_type: RwSignal<String>,
    on_apply: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <h2 class="filter-bar__title">"Filtros de Búsqueda"</h2>
            <div class="filter-bar__controls">
                <input
                    class="filter-bar__search"
                    type="text"
                    placeholder="Buscar por palabra clave..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_apply.run(());
                        }
                    }
                />
                <select
                    class="filter-bar__select"
                    prop:value=move || municipality.get()
                    on:change=move |ev| municipality.set(event_target_value(&ev))
                >
                    <option value="">"Municipio"</option>
                    {catalog::MUNICIPALITIES
                        .iter()
                        .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="filter-bar__select"
                    prop:value=move || business_type.get()
                    on:change=move |ev| business_type.set(event_target_value(&ev))
                >
                    <option value="">"Tipo de negocio"</option>
                    {catalog::BUSINESS_TYPES
                        .iter()
                        .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <div class="filter-bar__actions">
                    <button class="btn btn--primary" on:click=move |_| on_apply.run(())>
                        "Aplicar"
                    </button>
                    <button class="btn" on:click=move |_| on_clear.run(())>
                        "Limpiar"
                    </button>
                </div>
            </div>
        </div>
    }
}
