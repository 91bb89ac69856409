//! Top navigation bar for authenticated pages.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::http::HttpClient;
use crate::state::auth::AuthSession;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Header with the product name, dark-mode toggle, the signed-in identity
/// and a logout action.
#[component]
pub fn Navbar() -> impl IntoView {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let http = expect_context::<HttpClient>();
    let session = expect_context::<AuthSession>();
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = session.state();

    let display_name = move || {
        auth.get()
            .user
            .map_or_else(|| "...".to_owned(), |user| user.name)
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                api::logout(http).await;
                // Refresh through the store's one mutation path; the cleared
                // cookie settles it unauthenticated.
                session.check_auth().await;
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(crate::routes::LOGIN);
                }
            });
        }
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href=crate::routes::DASHBOARD>
                "Medfolio"
            </a>

            <span class="navbar__spacer"></span>

            <button
                class="btn navbar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <span class="navbar__self">{display_name}</span>

            <button class="btn navbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
