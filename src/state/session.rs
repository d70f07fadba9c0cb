//! Session state: the single source of truth for "who is the current user
//! and what can they do".
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and permission-aware components read this snapshot to gate
//! navigation and rendering. Only the session listener
//! (`net::session_sync`) and the explicit sign-out/subscription flows
//! mutate it; every other module is a reader.
//!
//! DESIGN
//! ======
//! All transitions here are synchronous; the async plumbing (identity
//! events, forced token refresh) lives in the listener. Each claims fetch
//! is correlated with an epoch-tagged [`ClaimsTicket`], and a result whose
//! epoch no longer matches is discarded: of two racing session changes, the
//! later event wins regardless of which fetch completes first.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::identity::{AuthTokenError, TokenInfo};
use crate::net::types::{BusinessSummary, Identity};

/// Claim keys asserted by the identity provider's tokens.
const CLAIM_BUSINESS_OWNER: &str = "isBusinessOwner";
const CLAIM_ACTIVE_SUBSCRIPTION: &str = "hasActiveSubscription";

/// Correlation tag for one in-flight claims fetch.
///
/// Carries the epoch of the session-changed event that started the fetch
/// plus the uid it was minted for; `apply_claims` drops any result whose
/// epoch has been superseded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimsTicket {
    epoch: u64,
    uid: String,
}

/// Observable authentication/authorization snapshot for the current user.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// The authenticated principal, when signed in.
    pub identity: Option<Identity>,
    /// Whether the provider has confirmed the account's email address.
    pub email_verified: bool,
    /// `isBusinessOwner` authorization claim from the freshest token.
    pub is_business_owner: bool,
    /// `hasActiveSubscription` claim from the freshest token, possibly
    /// overridden optimistically right after a payment redirect.
    pub has_active_subscription: bool,
    /// True only between process start and the first identity resolution.
    pub loading: bool,
    /// Business profile summary cached by UI flows; not derived from the
    /// identity.
    pub business_info: Option<BusinessSummary>,
    /// Session-changed event counter used to discard superseded claim
    /// fetches.
    epoch: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            identity: None,
            email_verified: false,
            is_business_owner: false,
            has_active_subscription: false,
            loading: true,
            business_info: None,
            epoch: 0,
        }
    }
}

impl SessionState {
    /// Whether a principal is currently present. Derived, never stored, so
    /// it cannot drift from `identity`.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Record a session-changed event from the identity provider.
    ///
    /// An absent identity resets to the signed-out state atomically and
    /// finishes any pending initial load. A present identity returns a
    /// [`ClaimsTicket`] for the forced claims fetch; the previous derived
    /// state stays visible until the fetch lands (stale-but-available),
    /// except during the very first resolution where `loading` stays true.
    pub fn begin_session_change(&mut self, identity: Option<&Identity>) -> Option<ClaimsTicket> {
        self.epoch += 1;
        match identity {
            None => {
                self.reset_signed_out();
                None
            }
            Some(identity) => Some(ClaimsTicket {
                epoch: self.epoch,
                uid: identity.uid.clone(),
            }),
        }
    }

    /// Apply the outcome of the claims fetch started by
    /// [`Self::begin_session_change`].
    ///
    /// A ticket from a superseded event is ignored. On success the claim
    /// booleans come from the fresh token with strict coercion; on failure
    /// the user stays authenticated but both authorization booleans go
    /// fail-closed. Either way the initial load is finished.
    pub fn apply_claims(
        &mut self,
        ticket: &ClaimsTicket,
        identity: Identity,
        outcome: Result<TokenInfo, AuthTokenError>,
    ) {
        if ticket.epoch != self.epoch {
            leptos::logging::log!(
                "discarding superseded claims result for uid {}",
                ticket.uid
            );
            return;
        }
        match outcome {
            Ok(token) => {
                self.email_verified = token.email_verified;
                self.is_business_owner = token.flag(CLAIM_BUSINESS_OWNER);
                self.has_active_subscription = token.flag(CLAIM_ACTIVE_SUBSCRIPTION);
            }
            Err(_) => {
                // Identity is still valid; only authorization is unknown.
                self.email_verified = identity.email_verified;
                self.is_business_owner = false;
                self.has_active_subscription = false;
            }
        }
        self.identity = Some(identity);
        self.loading = false;
    }

    /// Explicit sign-out completion. Call only after the identity provider
    /// confirmed the sign-out. Also invalidates any in-flight claims fetch.
    pub fn clear(&mut self) {
        self.epoch += 1;
        self.reset_signed_out();
    }

    /// Optimistic subscription override used right after the payment
    /// redirect returns. The next claims-driven transition is authoritative
    /// and may revert it.
    pub fn set_subscription_status(&mut self, active: bool) {
        self.has_active_subscription = active;
    }

    /// Cache or drop the business profile summary shown in owner flows.
    pub fn set_business_info(&mut self, info: Option<BusinessSummary>) {
        self.business_info = info;
    }

    fn reset_signed_out(&mut self) {
        self.identity = None;
        self.email_verified = false;
        self.is_business_owner = false;
        self.has_active_subscription = false;
        self.business_info = None;
        self.loading = false;
    }
}
