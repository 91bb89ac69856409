//! Shared-records page, reachable by code without a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Share links are neutral routes: the guard still refreshes the session on
//! the way in but never redirects, so recipients can open them logged in or
//! out. The backend scopes what the code exposes.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::trend_badge::TrendBadge;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::net::types::SharedRecords;
use crate::routes;
use crate::state::auth::AuthSession;
use crate::util::trends::{lab_trend, vital_trend};

#[component]
pub fn SharePage() -> impl IntoView {
    let http = expect_context::<HttpClient>();
    let session = expect_context::<AuthSession>();
    let params = use_params_map();
    let navigate = use_navigate();
    let mount_path = format!(
        "{}{}",
        routes::SHARE_PREFIX,
        params.get_untracked().get("code").unwrap_or_default()
    );
    routes::install_guard(session, mount_path, navigate);

    let records = RwSignal::new(SharedRecords::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    // Refetches when the route param changes without a remount.
    Effect::new(move || {
        let code = params.read().get("code").unwrap_or_default();
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::fetch_shared_records(http, &code).await {
                Ok(payload) => records.set(payload),
                Err(err) => error.set(Some(format!("Could not open this share link: {err}"))),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="share-page">
            <h1>"Shared health records"</h1>
            <Show when=move || loading.get()>
                <p class="records__status">"Loading..."</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="records__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() && error.get().is_none()>
                <div class="share-page__sections">
                    <Show when=move || !records.get().vaccines.is_empty()>
                        <section class="records">
                            <h2>"Vaccines"</h2>
                            <ul>
                                {move || {
                                    records
                                        .get()
                                        .vaccines
                                        .into_iter()
                                        .map(|v| {
                                            view! {
                                                <li>{v.name}" ("{v.provider}", "{v.date_received}")"</li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </section>
                    </Show>
                    <Show when=move || !records.get().medications.is_empty()>
                        <section class="records">
                            <h2>"Medications"</h2>
                            <ul>
                                {move || {
                                    records
                                        .get()
                                        .medications
                                        .into_iter()
                                        .map(|m| {
                                            view! {
                                                <li>{m.name}", "{m.dosage}", "{m.frequency}</li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </section>
                    </Show>
                    <Show when=move || !records.get().allergies.is_empty()>
                        <section class="records">
                            <h2>"Allergies"</h2>
                            <ul>
                                {move || {
                                    records
                                        .get()
                                        .allergies
                                        .into_iter()
                                        .map(|a| {
                                            view! {
                                                <li>{a.allergens.join(", ")}" ("{a.severity}")"</li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </section>
                    </Show>
                    <Show when=move || !records.get().vitals.is_empty()>
                        <section class="records">
                            <h2>"Vitals"</h2>
                            <ul>
                                {move || {
                                    records
                                        .get()
                                        .vitals
                                        .into_iter()
                                        .map(|sample| {
                                            let trend = vital_trend(&sample);
                                            view! {
                                                <li>
                                                    {sample.name}
                                                    " "
                                                    {sample.date_recorded}
                                                    " "
                                                    <TrendBadge trend=trend/>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </section>
                    </Show>
                    <Show when=move || !records.get().labresults.is_empty()>
                        <section class="records">
                            <h2>"Lab results"</h2>
                            <ul>
                                {move || {
                                    records
                                        .get()
                                        .labresults
                                        .into_iter()
                                        .map(|r| {
                                            let trend =
                                                lab_trend(&r.value, r.reference_range.as_deref(), r.is_numeric);
                                            view! {
                                                <li>
                                                    {r.name}": "{r.value}" "
                                                    {match trend {
                                                        Some(trend) => {
                                                            view! { <TrendBadge trend=trend/> }.into_any()
                                                        }
                                                        None => view! { <span></span> }.into_any(),
                                                    }}
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </section>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
