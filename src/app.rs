//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::net::session_sync;
use crate::pages::become_business::BecomeBusinessPage;
use crate::pages::business_detail::BusinessDetailPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::my_offers::MyOffersPage;
use crate::pages::offer_detail::OfferDetailPage;
use crate::pages::offer_form::OfferFormPage;
use crate::pages::offers::OfferListPage;
use crate::pages::profile::ProfilePage;
use crate::pages::subscription::{SubscriptionCanceledPage, SubscriptionPage, SubscriptionSuccessPage};
use crate::pages::verify_email::VerifyEmailPage;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and its event sender, starts the session
/// listener, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Idempotent: the listener subscribes to identity events exactly once
    // per process; the sender is inert during SSR.
    let session_events = session_sync::spawn_session_listener(session);
    provide_context(session_events);

    view! {
        <Stylesheet id="leptos" href="/pkg/mercado-client.css"/>
        <Title text="Mercado Local MX"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                <Route path=(StaticSegment("offers"), ParamSegment("id")) view=OfferDetailPage/>
                <Route path=(StaticSegment("businesses"), ParamSegment("id")) view=BusinessDetailPage/>
                <Route path=StaticSegment("subscribe") view=SubscriptionPage/>
                <Route
                    path=(StaticSegment("subscription"), StaticSegment("success"))
                    view=SubscriptionSuccessPage
                />
                <Route
                    path=(StaticSegment("subscription"), StaticSegment("canceled"))
                    view=SubscriptionCanceledPage
                />
                <ParentRoute path=StaticSegment("dashboard") view=DashboardPage>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard/home"/> }/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("offers") view=OfferListPage/>
                    <Route
                        path=(StaticSegment("offers"), StaticSegment("create"))
                        view=OfferFormPage
                    />
                    <Route
                        path=(StaticSegment("offers"), ParamSegment("id"), StaticSegment("edit"))
                        view=OfferFormPage
                    />
                    <Route path=StaticSegment("my-offers") view=MyOffersPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("become-business") view=BecomeBusinessPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
