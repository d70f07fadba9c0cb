//! REST wrapper over the external identity provider.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! provider's session endpoints. Server-side (SSR): stubs, since identity
//! state only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Sign-in/sign-up failures map provider error codes to user-facing Spanish
//! messages. Token-refresh failures surface as `AuthTokenError` and are
//! handled fail-closed by the session store; they never reach the user as a
//! blocking error.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::Deserialize;
use thiserror::Error;

use super::types::Identity;

/// A freshly minted bearer token with its authorization claims.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenInfo {
    /// Raw bearer token attached to backend requests.
    pub id_token: String,
    /// Provider-asserted custom claims (open-ended JSON object).
    pub claims: serde_json::Value,
    /// Email verification status at token issue time.
    #[serde(default)]
    pub email_verified: bool,
}

impl TokenInfo {
    /// Strict boolean claim lookup: anything other than a literal JSON
    /// `true` (absent, null, `"true"`, `1`) resolves to `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.claims.get(key).and_then(serde_json::Value::as_bool) == Some(true)
    }
}

/// Identity/auth operation failure, already mapped to a user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Provider rejected the operation (bad credentials, disabled account, ...).
    #[error("{0}")]
    Provider(String),
    /// Transport failure before the provider answered.
    #[error("No se pudo contactar al servicio de autenticación. Revisa tu conexión.")]
    Network,
}

/// Failure to mint a fresh token for an otherwise valid identity.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthTokenError {
    #[error("token request failed with status {0}")]
    Http(u16),
    #[error("token request transport error: {0}")]
    Network(String),
    #[error("malformed token response: {0}")]
    Decode(String),
}

/// Map a provider error code to the message shown to the user.
///
/// Unknown codes fall back to a generic message rather than leaking the
/// raw code.
pub fn auth_error_message(code: &str) -> String {
    match code {
        "invalid-credential" | "user-not-found" | "wrong-password" => {
            "Correo electrónico o contraseña incorrectos.".to_owned()
        }
        "user-disabled" => "Tu cuenta ha sido deshabilitada.".to_owned(),
        "email-already-in-use" => {
            "Este correo electrónico ya está registrado. Intenta iniciar sesión o usa otro correo."
                .to_owned()
        }
        "weak-password" => "La contraseña debe tener al menos 6 caracteres.".to_owned(),
        _ => "Ocurrió un error de autenticación. Por favor, inténtalo de nuevo.".to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    code: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn provider_error_from_body(body: &str) -> AuthError {
    let code = serde_json::from_str::<ProviderErrorBody>(body)
        .map(|b| b.error.code)
        .unwrap_or_default();
    AuthError::Provider(auth_error_message(&code))
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct SessionResponse {
    user: Identity,
}

/// Restore the provider's persisted session, if any.
///
/// Returns `None` when no session exists, on the server, or on any
/// transport failure — session restore is best-effort by design; the user
/// can always sign in again.
pub async fn restore_session() -> Option<Identity> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/auth/session").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionResponse>().await.ok().map(|body| body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email and password.
///
/// # Errors
///
/// Returns an [`AuthError`] with a user-facing message when the provider
/// rejects the credentials or the request cannot be sent.
pub async fn sign_in(email: &str, password: &str) -> Result<Identity, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        credential_request("/auth/sign-in", email, password).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(AuthError::Network)
    }
}

/// Register a new account with email and password.
///
/// # Errors
///
/// Returns an [`AuthError`] with a user-facing message on rejection
/// (duplicate email, weak password) or transport failure.
pub async fn sign_up(email: &str, password: &str) -> Result<Identity, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        credential_request("/auth/sign-up", email, password).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(AuthError::Network)
    }
}

#[cfg(feature = "hydrate")]
async fn credential_request(url: &str, email: &str, password: &str) -> Result<Identity, AuthError> {
    let payload = serde_json::json!({ "email": email, "password": password });
    let resp = gloo_net::http::Request::post(url)
        .json(&payload)
        .map_err(|_| AuthError::Network)?
        .send()
        .await
        .map_err(|_| AuthError::Network)?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(provider_error_from_body(&body));
    }
    resp.json::<SessionResponse>()
        .await
        .map(|body| body.user)
        .map_err(|_| AuthError::Network)
}

/// Ask the provider to send a verification email to the current account.
///
/// # Errors
///
/// Returns an [`AuthError`] if the provider refuses or the request fails.
pub async fn send_verification_email() -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/auth/verification-email")
            .send()
            .await
            .map_err(|_| AuthError::Network)?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(provider_error_from_body(&body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AuthError::Network)
    }
}

/// Mint a bearer token for `identity`, optionally bypassing the provider's
/// token cache.
///
/// `force_refresh` must be `true` whenever current authorization claims
/// matter: claims are written by backend/webhook processes after events like
/// payment completion, so a cached token can carry stale authorization.
///
/// # Errors
///
/// Returns an [`AuthTokenError`] on transport failure, non-success status,
/// or an undecodable body.
pub async fn fresh_token(identity: &Identity, force_refresh: bool) -> Result<TokenInfo, AuthTokenError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "uid": identity.uid, "force_refresh": force_refresh });
        let resp = gloo_net::http::Request::post("/auth/token")
            .json(&payload)
            .map_err(|e| AuthTokenError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthTokenError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(AuthTokenError::Http(resp.status()));
        }
        resp.json::<TokenInfo>()
            .await
            .map_err(|e| AuthTokenError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (identity, force_refresh);
        Err(AuthTokenError::Network("not available on server".to_owned()))
    }
}

/// Terminate the provider session.
///
/// Callers must wait for this to succeed before clearing local session
/// state, so the store and the provider cannot disagree.
///
/// # Errors
///
/// Returns an [`AuthError`] if the provider could not confirm the sign-out.
pub async fn sign_out() -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/auth/sign-out")
            .send()
            .await
            .map_err(|_| AuthError::Network)?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(provider_error_from_body(&body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AuthError::Network)
    }
}
