//! Shared DTOs for the backend REST boundary and the identity provider.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde round-trips stay
//! lossless. Monetary amounts travel as decimal strings (backend convention);
//! `util::money` handles display parsing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The externally authenticated principal, as reported by the identity
/// provider. Opaque to the rest of the app beyond these fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable provider-assigned user identifier.
    pub uid: String,
    /// Sign-in email address.
    pub email: String,
    /// Optional display name chosen at registration.
    pub display_name: Option<String>,
    /// Whether the provider has confirmed the email address.
    #[serde(default)]
    pub email_verified: bool,
}

/// A registered business as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: i64,
    pub name: String,
    /// Free-text description of what the business sells.
    pub what_they_sell: Option<String>,
    /// Opening hours, free text (e.g. `"L-S 9:00-20:00"`).
    pub hours: Option<String>,
    pub municipality: String,
    pub street_address: String,
    /// Kind of premises (`"local_comercial"`, `"puesto_fijo"`, ...).
    pub location_type: String,
    pub contact_phone: Option<String>,
    pub social_media_facebook_username: Option<String>,
    pub social_media_instagram_username: Option<String>,
    pub social_media_tiktok_username: Option<String>,
    /// Commercial category (`"alimentos"`, `"ropa"`, ...).
    pub business_type: Option<String>,
    /// Logo image URL, if uploaded.
    pub logo: Option<String>,
    /// Whether the owner's subscription is currently paid up.
    #[serde(default)]
    pub is_paid_member: bool,
}

impl Business {
    /// Reduce to the summary cached on the session.
    pub fn summary(&self) -> BusinessSummary {
        BusinessSummary {
            id: self.id,
            name: self.name.clone(),
            is_paid_member: self.is_paid_member,
        }
    }
}

/// Lightweight business reference cached on the session and embedded in
/// offer payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_paid_member: bool,
}

/// Payload for creating or updating a business profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BusinessPayload {
    pub name: String,
    pub what_they_sell: String,
    pub hours: String,
    pub municipality: String,
    pub street_address: String,
    pub location_type: String,
    pub contact_phone: String,
    pub social_media_facebook_username: String,
    pub social_media_instagram_username: String,
    pub social_media_tiktok_username: String,
    pub business_type: String,
    pub logo: Option<String>,
}

/// A promotional offer as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Pre-discount price, decimal string. Absent for plain promotions.
    pub original_price: Option<String>,
    /// Offer price, decimal string.
    pub discount_price: String,
    /// Promotional image URL, if any.
    pub image: Option<String>,
    /// First day of validity, `YYYY-MM-DD`.
    pub start_date: String,
    /// Last day of validity, `YYYY-MM-DD`.
    pub end_date: String,
    #[serde(default)]
    pub is_active: bool,
    /// Owning business summary, embedded by the list endpoints.
    pub business: Option<BusinessSummary>,
}

/// Payload for creating or updating an offer.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OfferPayload {
    pub title: String,
    pub description: String,
    pub original_price: Option<String>,
    pub discount_price: String,
    pub image: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
}

/// A municipality option served by the backend for filter dropdowns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipality {
    pub value: String,
    pub label: String,
}

/// Checkout session handle returned by the backend; the client redirects the
/// browser to `checkout_url` on the payment provider's domain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub session_id: String,
    pub checkout_url: String,
}

/// Optional filter parameters shared by the business and offer list
/// endpoints. Empty fields are omitted from the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingFilters {
    pub search: String,
    pub business_type: String,
    pub municipality: String,
}

impl ListingFilters {
    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.business_type.is_empty() && self.municipality.is_empty()
    }

    /// Rebuild filters from decoded query-string pairs (unknown keys are
    /// ignored, later duplicates win).
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filters = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "search" => filters.search = value.into(),
                "business_type" => filters.business_type = value.into(),
                "municipality" => filters.municipality = value.into(),
                _ => {}
            }
        }
        filters
    }

    /// Filter pairs in wire order, skipping unset fields.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search", self.search.as_str()));
        }
        if !self.business_type.is_empty() {
            pairs.push(("business_type", self.business_type.as_str()));
        }
        if !self.municipality.is_empty() {
            pairs.push(("municipality", self.municipality.as_str()));
        }
        pairs
    }
}
