//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the single HTTP client and session store instances and provides
//! them via context. Also hosts the one observer of the transport's
//! session-expired signal, so the forced redirect to login lives at the top
//! of the tree instead of inside the transport.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::{NavigateOptions, ParamSegment, StaticSegment};

use crate::net::http::{HttpClient, api_origin};
use crate::pages::dashboard::DashboardPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::share::SharePage;
use crate::routes;
use crate::state::auth::AuthSession;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Provides the shared transport, session store and UI state, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let http = HttpClient::new(api_origin());
    let session = AuthSession::new(http);
    let ui = RwSignal::new(UiState::default());

    provide_context(http);
    provide_context(session);
    provide_context(ui);

    // Pick up the stored theme preference once the browser is available.
    Effect::new(move || {
        let enabled = dark_mode::read_preference();
        dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/medfolio.css"/>
        <Title text="Medfolio"/>

        <Router>
            <SessionExpiryRedirect/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("share"), ParamSegment("code")) view=SharePage/>
            </Routes>
        </Router>
    }
}

/// Single top-level observer of the transport's session-expired signal.
///
/// When a request hits an unexpected 401, the transport tags the error and
/// bumps the counter; this component performs the navigation side effect,
/// independent of any in-flight guard decision.
#[component]
fn SessionExpiryRedirect() -> impl IntoView {
    let http = expect_context::<HttpClient>();
    let navigate = use_navigate();
    let expired = http.session_expired();

    Effect::new(move || {
        if expired.get() > 0 {
            navigate(routes::LOGIN, NavigateOptions::default());
        }
    });
}
