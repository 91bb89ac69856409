//! Public landing page.
//!
//! Reachable regardless of session state; signed-in visitors keep access and
//! get a shortcut to their dashboard instead of a forced redirect.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes;
use crate::state::auth::AuthSession;

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let navigate = use_navigate();
    routes::install_guard(session, routes::LANDING.to_owned(), navigate);
    let auth = session.state();

    view! {
        <div class="landing-page">
            <div class="landing-hero">
                <h1>"Medfolio"</h1>
                <p class="landing-hero__subtitle">
                    "Your vaccines, medications, allergies, vitals and lab results in one place."
                </p>
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <div class="landing-hero__actions">
                                <a class="btn btn--primary" href=routes::LOGIN>
                                    "Sign in"
                                </a>
                                <a class="btn" href=routes::REGISTER>
                                    "Create account"
                                </a>
                            </div>
                        }
                    }
                >
                    <a class="btn btn--primary" href=routes::DASHBOARD>
                        "Go to your dashboard"
                    </a>
                </Show>
            </div>
        </div>
    }
}
