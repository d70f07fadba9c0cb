//! Public entry: sign-in and registration card.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the public-only route. Registration sends a verification email
//! and signs the fresh account straight back out so the user must verify
//! before their first real session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::session_sync::SessionEventSender;
use crate::state::session::SessionState;
use crate::util::guard::{self, GuardDecision};

/// Validate sign-in form input, trimming the email.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Ingresa tu correo y contraseña.");
    }
    if !email.contains('@') {
        return Err("Ingresa un correo electrónico válido.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Validate registration input: well-formed email, provider's minimum
/// password length, matching confirmation.
fn validate_register_input(
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Ingresa un correo electrónico válido.");
    }
    if password.chars().count() < 6 {
        return Err("La contraseña debe tener al menos 6 caracteres.");
    }
    if password != confirm {
        return Err("Las contraseñas no coinciden. Asegúrate de que ambos campos sean iguales.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Sign-in / sign-up page at the public entry route.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_guard(session, guard::public_only, navigate.clone());

    let login_mode = RwSignal::new(true);

    view! {
        <div class="auth-page">
            <Show
                when=move || guard::public_only(&session.get()) == GuardDecision::Allow
                fallback=|| view! { <p class="auth-page__pending">"Cargando..."</p> }
            >
                <div class="auth-card">
                    <h1 class="auth-card__title">"Mercado Local MX"</h1>
                    <p class="auth-card__subtitle">
                        {move || {
                            if login_mode.get() {
                                "Accede a tu cuenta de negocio"
                            } else {
                                "Registra tu nuevo negocio"
                            }
                        }}
                    </p>
                    <Show when=move || login_mode.get() fallback=|| view! { <RegisterForm/> }>
                        <LoginForm/>
                    </Show>
                    <p class="auth-card__toggle">
                        {move || {
                            if login_mode.get() { "¿No tienes una cuenta?" } else { "¿Ya tienes una cuenta?" }
                        }}
                        <button on:click=move |_| login_mode.update(|mode| *mode = !*mode)>
                            {move || {
                                if login_mode.get() { "Regístrate aquí" } else { "Inicia sesión aquí" }
                            }}
                        </button>
                    </p>
                </div>
            </Show>
        </div>
    }
}

/// Email + password sign-in form.
#[component]
fn LoginForm() -> impl IntoView {
    let session_events = expect_context::<SessionEventSender>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let session_events = session_events.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::identity::sign_in(&email_value, &password_value).await {
                    Ok(identity) => {
                        session_events.send(Some(identity));
                        navigate(
                            crate::util::guard::AUTHENTICATED_LANDING,
                            leptos_router::NavigateOptions::default(),
                        );
                    }
                    Err(err) => {
                        info.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session_events, &navigate, email_value, password_value);
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label class="auth-form__label">
                "Correo Electrónico"
                <input
                    type="email"
                    placeholder="tucorreo@gmail.com"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-form__label">
                "Contraseña"
                <input
                    type="password"
                    placeholder="••••••••"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Iniciando..." } else { "Iniciar Sesión" }}
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-form__message">{move || info.get()}</p>
            </Show>
        </form>
    }
}

/// Registration form with email verification hand-off.
#[component]
fn RegisterForm() -> impl IntoView {
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_register_input(&email.get(), &password.get(), &confirm.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = register_flow(&email_value, &password_value).await;
                match result {
                    Ok(()) => {
                        navigate("/verify-email", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        info.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, email_value, password_value);
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label class="auth-form__label">
                "Correo Electrónico"
                <input
                    type="email"
                    placeholder="tucorreo@gmail.com"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-form__label">
                "Contraseña"
                <input
                    type="password"
                    placeholder="••••••••"
                    autocomplete="new-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-form__label">
                "Confirmar Contraseña"
                <input
                    type="password"
                    placeholder="••••••••"
                    autocomplete="new-password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--secondary auth-form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Registrando..." } else { "Registrar Nuevo Negocio" }}
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-form__message">{move || info.get()}</p>
            </Show>
        </form>
    }
}

/// Create the account, send the verification email, and close the fresh
/// provider session so the first real sign-in happens after verification.
#[cfg(feature = "hydrate")]
async fn register_flow(email: &str, password: &str) -> Result<(), crate::net::identity::AuthError> {
    crate::net::identity::sign_up(email, password).await?;
    crate::net::identity::send_verification_email().await?;
    crate::net::identity::sign_out().await?;
    Ok(())
}
