//! Login page with email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes;
use crate::state::auth::AuthSession;

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let http = expect_context::<crate::net::http::HttpClient>();
    let navigate = use_navigate();
    routes::install_guard(session, routes::LOGIN.to_owned(), navigate);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_login_input(&email.get(), &password.get()) {
            Ok((email_value, password_value)) => {
                busy.set(true);
                message.set("Signing in...".to_owned());

                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    match crate::net::api::login(http, &email_value, &password_value).await {
                        Ok(_) => {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href(routes::DASHBOARD);
                            }
                        }
                        Err(err) => {
                            message.set(format!("Sign-in failed: {err}"));
                            busy.set(false);
                        }
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (email_value, password_value);
                }
            }
            Err(err) => message.set(err.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Medfolio"</h1>
                <p class="login-card__subtitle">"Sign in to your health records"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="login-message">{move || message.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account yet? "
                    <a href=routes::REGISTER>"Register"</a>
                </p>
            </div>
        </div>
    }
}
