//! Authenticated layout: navbar, nested outlet, and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated route renders inside this shell. The navbar gates
//! owner-only links on the `is_business_owner` claim, and sign-out clears
//! the session store only after the identity provider confirms.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::guard::{self, GuardDecision};

/// Navbar links for the current user: `(href, label)` pairs.
fn nav_links(is_business_owner: bool) -> Vec<(&'static str, &'static str)> {
    let mut links = vec![
        ("/dashboard/home", "Todos los Negocios"),
        ("/dashboard/offers", "Todas las Ofertas"),
    ];
    if is_business_owner {
        links.push(("/dashboard/my-offers", "Mis Ofertas"));
        links.push(("/dashboard/profile", "Mi Negocio"));
    } else {
        links.push(("/dashboard/become-business", "Conviértete en Negocio"));
    }
    links
}

/// Authenticated dashboard shell with nested routing.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_guard(session, guard::authenticated_only, navigate.clone());

    let menu_open = RwSignal::new(false);
    let signing_out = RwSignal::new(false);

    let on_sign_out = move |_| {
        if signing_out.get() {
            return;
        }
        signing_out.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                // Clear local state only once the provider confirms, so the
                // store and the provider cannot disagree about the session.
                match crate::net::identity::sign_out().await {
                    Ok(()) => {
                        session.update(SessionState::clear);
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("sign-out failed: {err}");
                        signing_out.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, session);
        }
    };

    view! {
        <Show
            when=move || guard::authenticated_only(&session.get()) == GuardDecision::Allow
            fallback=move || {
                view! {
                    <div class="dashboard">
                        <p class="dashboard__pending">
                            {move || {
                                if session.get().loading {
                                    "Cargando perfil de usuario..."
                                } else {
                                    "Redirigiendo al inicio de sesión..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="dashboard">
                <nav class="navbar">
                    <a class="navbar__brand" href="/dashboard/home">
                        "Mercado Local MX"
                    </a>
                    <button
                        class="navbar__menu-toggle"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                        aria-label="Menú"
                    >
                        "☰"
                    </button>
                    <div class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                        {move || {
                            nav_links(session.get().is_business_owner)
                                .into_iter()
                                .map(|(href, label)| {
                                    view! {
                                        <a class="navbar__link" href=href>
                                            {label}
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        <button
                            class="btn btn--primary navbar__sign-out"
                            disabled=move || signing_out.get()
                            on:click=on_sign_out.clone()
                        >
                            "Cerrar Sesión"
                        </button>
                    </div>
                </nav>
                <main class="dashboard__content">
                    <Outlet/>
                </main>
                <footer class="dashboard__footer">
                    <p>"© Mercado Local MX. Todos los derechos reservados."</p>
                </footer>
            </div>
        </Show>
    }
}
