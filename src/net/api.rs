//! REST client for the marketplace backend.
//!
//! Every request mints a forced-fresh bearer token from the identity
//! provider and attaches it as `Authorization: Bearer ...`. Client-side
//! (hydrate): real HTTP via `gloo-net`; server-side (SSR): stubs.
//!
//! ERROR HANDLING
//! ==============
//! Responses classify into [`ApiError`] so pages can react per status:
//! 401/403 become a re-authenticate prompt, 404 is non-fatal for probe
//! calls like "does my business exist yet", validation errors carry the
//! backend's detail message. API failures never mutate session state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

#[cfg(feature = "hydrate")]
use serde::Serialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use super::types::{
    Business, BusinessPayload, CheckoutSession, Identity, ListingFilters, Municipality, Offer,
    OfferPayload,
};

/// Backend call failure, classified for per-page handling.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No signed-in identity, or the provider refused to mint a token.
    /// Callers surface a re-authenticate prompt.
    #[error("Autenticación requerida. Inicia sesión para acceder a esta función.")]
    Unauthenticated,
    /// The backend rejected the bearer token (401/403): the session is
    /// stale or lacks permission. Callers surface a re-authenticate prompt.
    #[error("Tu sesión ha expirado o no estás autorizado. Por favor, inicia sesión de nuevo.")]
    Unauthorized,
    /// Resource does not exist (404). Non-fatal for existence probes.
    #[error("El recurso solicitado no existe.")]
    NotFound,
    /// The backend rejected the payload; message comes from the response.
    #[error("{0}")]
    Validation(String),
    /// Any other non-success status.
    #[error("el servidor respondió con el estado {0}")]
    Http(u16),
    /// Transport failure before a response arrived.
    #[error("error de red: {0}")]
    Network(String),
}

impl ApiError {
    /// True when the caller should prompt the user to sign in again.
    pub fn needs_reauth(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::Unauthorized)
    }
}

#[cfg(any(test, feature = "hydrate"))]
/// Classify a non-success HTTP status, preferring the backend's `detail`
/// message for validation failures.
fn error_for_status(status: u16, detail: Option<String>) -> ApiError {
    match status {
        401 | 403 => ApiError::Unauthorized,
        404 => ApiError::NotFound,
        400 | 409 | 422 => ApiError::Validation(
            detail.unwrap_or_else(|| "El servidor rechazó la solicitud.".to_owned()),
        ),
        other => ApiError::Http(other),
    }
}

/// Percent-encode a query-string component (RFC 3986 unreserved set).
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte));
            }
            other => {
                out.push_str(&format!("%{other:02X}"));
            }
        }
    }
    out
}

/// Build the `?k=v&...` suffix for listing filters; empty filters yield an
/// empty string. Also used by pages to sync filters into the route query
/// string, so both sides encode identically.
pub fn listing_query(filters: &ListingFilters) -> String {
    let pairs = filters.pairs();
    if pairs.is_empty() {
        return String::new();
    }
    let encoded = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", encode_component(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{encoded}")
}

#[cfg(any(test, feature = "hydrate"))]
const BUSINESSES_BASE: &str = "/api/businesses/";
#[cfg(any(test, feature = "hydrate"))]
const OFFERS_BASE: &str = "/api/offers/";

#[cfg(any(test, feature = "hydrate"))]
fn businesses_url(filters: &ListingFilters) -> String {
    format!("{BUSINESSES_BASE}{}", listing_query(filters))
}

#[cfg(any(test, feature = "hydrate"))]
fn business_url(business_id: i64) -> String {
    format!("/api/businesses/{business_id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn my_business_url() -> String {
    "/api/businesses/my_business/".to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn municipalities_url() -> String {
    "/api/businesses/municipalities/".to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn offers_url(filters: &ListingFilters) -> String {
    format!("{OFFERS_BASE}{}", listing_query(filters))
}

#[cfg(any(test, feature = "hydrate"))]
fn offer_url(offer_id: i64) -> String {
    format!("/api/offers/{offer_id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn my_offers_url() -> String {
    "/api/offers/my_offers/".to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn checkout_session_url() -> String {
    "/api/create-checkout-session/".to_owned()
}

#[cfg(feature = "hydrate")]
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    error: Option<String>,
}

#[cfg(feature = "hydrate")]
async fn bearer_token(identity: &Identity) -> Result<String, ApiError> {
    // Forced refresh on every call: authorization claims can change
    // server-side between requests (see the session store contract).
    match crate::net::identity::fresh_token(identity, true).await {
        Ok(token) => Ok(token.id_token),
        Err(err) => {
            leptos::logging::warn!("bearer token mint failed: {err}");
            Err(ApiError::Unauthenticated)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn decode_or_error<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let detail = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail.or(body.error));
        return Err(error_for_status(status, detail));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(identity: &Identity, url: &str) -> Result<T, ApiError> {
    let token = bearer_token(identity).await?;
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", &format!("Bearer {token}"))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_or_error(resp).await
}

#[cfg(feature = "hydrate")]
async fn send_json<T: DeserializeOwned>(
    identity: &Identity,
    method: &str,
    url: &str,
    body: &impl Serialize,
) -> Result<T, ApiError> {
    let token = bearer_token(identity).await?;
    let builder = match method {
        "POST" => gloo_net::http::Request::post(url),
        "PATCH" => gloo_net::http::Request::patch(url),
        other => unreachable!("unsupported method {other}"),
    };
    let resp = builder
        .header("Authorization", &format!("Bearer {token}"))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_or_error(resp).await
}

#[cfg(feature = "hydrate")]
async fn delete_resource(identity: &Identity, url: &str) -> Result<(), ApiError> {
    let token = bearer_token(identity).await?;
    let resp = gloo_net::http::Request::delete(url)
        .header("Authorization", &format!("Bearer {token}"))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let detail = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail.or(body.error));
        return Err(error_for_status(status, detail));
    }
    Ok(())
}

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available on server".to_owned()))
}

macro_rules! hydrate_or_stub {
    ($body:expr, $($unused:ident),*) => {{
        #[cfg(feature = "hydrate")]
        {
            $body.await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ($($unused),*,);
            server_stub()
        }
    }};
}

/// List businesses, optionally filtered.
///
/// # Errors
///
/// Returns an [`ApiError`]; 401/403 means the caller must re-authenticate.
pub async fn get_businesses(identity: &Identity, filters: &ListingFilters) -> Result<Vec<Business>, ApiError> {
    hydrate_or_stub!(get_json(identity, &businesses_url(filters)), identity, filters)
}

/// Fetch one business by id.
///
/// # Errors
///
/// Returns an [`ApiError`]; [`ApiError::NotFound`] for an unknown id.
pub async fn get_business(identity: &Identity, business_id: i64) -> Result<Business, ApiError> {
    hydrate_or_stub!(get_json(identity, &business_url(business_id)), identity, business_id)
}

/// Fetch the caller's own business.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when no business is registered yet — an
/// expected outcome, not a failure.
pub async fn get_my_business(identity: &Identity) -> Result<Business, ApiError> {
    hydrate_or_stub!(get_json(identity, &my_business_url()), identity)
}

/// Register a business for the caller.
///
/// # Errors
///
/// Returns an [`ApiError`]; [`ApiError::Validation`] carries the backend's
/// rejection message.
pub async fn create_business(identity: &Identity, payload: &BusinessPayload) -> Result<Business, ApiError> {
    hydrate_or_stub!(
        send_json(identity, "POST", BUSINESSES_BASE, payload),
        identity,
        payload
    )
}

/// Update the caller's business.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection.
pub async fn update_business(
    identity: &Identity,
    business_id: i64,
    payload: &BusinessPayload,
) -> Result<Business, ApiError> {
    hydrate_or_stub!(
        send_json(identity, "PATCH", &business_url(business_id), payload),
        identity,
        business_id,
        payload
    )
}

/// Delete the caller's business.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection.
pub async fn delete_business(identity: &Identity, business_id: i64) -> Result<(), ApiError> {
    hydrate_or_stub!(delete_resource(identity, &business_url(business_id)), identity, business_id)
}

/// Municipality options for filter/form dropdowns.
///
/// # Errors
///
/// Returns an [`ApiError`]; callers fall back to the static catalog.
pub async fn get_municipalities(identity: &Identity) -> Result<Vec<Municipality>, ApiError> {
    hydrate_or_stub!(get_json(identity, &municipalities_url()), identity)
}

/// List offers region-wide, optionally filtered.
///
/// # Errors
///
/// Returns an [`ApiError`]; 401/403 means the caller must re-authenticate.
pub async fn get_offers(identity: &Identity, filters: &ListingFilters) -> Result<Vec<Offer>, ApiError> {
    hydrate_or_stub!(get_json(identity, &offers_url(filters)), identity, filters)
}

/// List the caller's own offers.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection.
pub async fn get_my_offers(identity: &Identity) -> Result<Vec<Offer>, ApiError> {
    hydrate_or_stub!(get_json(identity, &my_offers_url()), identity)
}

/// Fetch one offer by id.
///
/// # Errors
///
/// Returns an [`ApiError`]; [`ApiError::NotFound`] for an unknown id.
pub async fn get_offer(identity: &Identity, offer_id: i64) -> Result<Offer, ApiError> {
    hydrate_or_stub!(get_json(identity, &offer_url(offer_id)), identity, offer_id)
}

/// Create an offer for the caller's business.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection.
pub async fn create_offer(identity: &Identity, payload: &OfferPayload) -> Result<Offer, ApiError> {
    hydrate_or_stub!(
        send_json(identity, "POST", OFFERS_BASE, payload),
        identity,
        payload
    )
}

/// Update one of the caller's offers.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection.
pub async fn update_offer(identity: &Identity, offer_id: i64, payload: &OfferPayload) -> Result<Offer, ApiError> {
    hydrate_or_stub!(
        send_json(identity, "PATCH", &offer_url(offer_id), payload),
        identity,
        offer_id,
        payload
    )
}

/// Delete one of the caller's offers.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection.
pub async fn delete_offer(identity: &Identity, offer_id: i64) -> Result<(), ApiError> {
    hydrate_or_stub!(delete_resource(identity, &offer_url(offer_id)), identity, offer_id)
}

/// Ask the backend to open a hosted checkout session for the subscription.
///
/// The caller then redirects the browser to
/// [`CheckoutSession::checkout_url`]; the provider returns control via the
/// `/subscription/success` or `/subscription/canceled` routes.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection.
pub async fn create_checkout_session(identity: &Identity) -> Result<CheckoutSession, ApiError> {
    hydrate_or_stub!(
        send_json(identity, "POST", &checkout_session_url(), &serde_json::json!({})),
        identity
    )
}
