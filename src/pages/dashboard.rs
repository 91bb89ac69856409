//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard gates this route on a fresh session check; while the check is
//! pending the route is held on a loading fallback rather than partially
//! rendered. Record sections fetch on demand when their tab is selected.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::future::Future;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::trend_badge::TrendBadge;
use crate::net::api;
use crate::net::http::{ApiError, HttpClient};
use crate::net::types::{DashboardSummary, HealthData};
use crate::routes;
use crate::state::auth::AuthSession;
use crate::state::ui::{RecordTab, UiState};
use crate::util::dates::{newest_first, parse_wire_date};
use crate::util::trends::{lab_trend, latest_vital_trends, vital_trend};

/// Display label for a vital's measurement.
fn vital_value_label(sample: &HealthData) -> String {
    match (sample.value, sample.value_systolic, sample.value_diastolic) {
        (_, Some(systolic), Some(diastolic)) => format!("{systolic:.0}/{diastolic:.0}"),
        (Some(value), _, _) => format!("{value}"),
        _ => "-".to_owned(),
    }
}

/// Drive one section's fetch into its signals.
fn load<T, Fut>(
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    items: RwSignal<Vec<T>>,
    fetch: Fut,
) where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    leptos::task::spawn_local(async move {
        match fetch.await {
            Ok(records) => items.set(records),
            Err(err) => error.set(Some(err.to_string())),
        }
        loading.set(false);
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    routes::install_guard(session, routes::DASHBOARD.to_owned(), navigate);
    let auth = session.state();

    view! {
        <Show
            when=move || !auth.get().checking && auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p class="dashboard-page__pending">
                            {move || {
                                if auth.get().checking {
                                    "Checking session..."
                                } else {
                                    "Redirecting to login..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <Navbar/>
                <nav class="dashboard-page__tabs">
                    {RecordTab::ALL
                        .iter()
                        .map(|(tab, label)| {
                            let tab = *tab;
                            view! {
                                <button
                                    class="btn tab"
                                    class=("tab--active", move || ui.get().record_tab == tab)
                                    on:click=move |_| ui.update(|u| u.record_tab = tab)
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <div class="dashboard-page__content">
                    {move || match ui.get().record_tab {
                        RecordTab::Overview => view! { <OverviewSection/> }.into_any(),
                        RecordTab::Vaccines => view! { <VaccinesSection/> }.into_any(),
                        RecordTab::Medications => view! { <MedicationsSection/> }.into_any(),
                        RecordTab::Allergies => view! { <AllergiesSection/> }.into_any(),
                        RecordTab::Vitals => view! { <VitalsSection/> }.into_any(),
                        RecordTab::Labs => view! { <LabsSection/> }.into_any(),
                    }}
                </div>
            </div>
        </Show>
    }
}

/// Loading/error slot shared by all record sections.
#[component]
fn SectionStatus(loading: RwSignal<bool>, error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <p class="records__status">"Loading..."</p>
        </Show>
        <Show when=move || error.get().is_some()>
            <p class="records__error">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}

/// Newest records of every category plus latest vitals at a glance.
#[component]
fn OverviewSection() -> impl IntoView {
    let http = expect_context::<HttpClient>();
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let summary = RwSignal::new(None::<DashboardSummary>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api::fetch_dashboard(http).await {
                Ok(payload) => summary.set(Some(payload)),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    view! {
        <section class="records">
            <SectionStatus loading=loading error=error/>
            {move || {
                summary
                    .get()
                    .map(|s| {
                        let vitals = latest_vital_trends(&s.vitals);
                        view! {
                            <h1 class="overview__greeting">{format!("Hello, {}!", s.name)}</h1>
                            <div class="overview__counts">
                                <div class="stat-card">
                                    <span class="stat-card__value">{s.vaccines.len()}</span>
                                    <span class="stat-card__label">"Recent vaccines"</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-card__value">{s.medications.len()}</span>
                                    <span class="stat-card__label">"Recent medications"</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-card__value">{s.allergies.len()}</span>
                                    <span class="stat-card__label">"Recent allergies"</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-card__value">{s.labresults.len()}</span>
                                    <span class="stat-card__label">"Recent lab results"</span>
                                </div>
                            </div>
                            <h2>"Latest vitals"</h2>
                            <ul class="overview__vitals">
                                {vitals
                                    .into_iter()
                                    .map(|(sample, trend)| {
                                        let label = vital_value_label(&sample);
                                        view! {
                                            <li>
                                                <span class="overview__vital-name">{sample.name}</span>
                                                " "
                                                {label}
                                                " "
                                                {sample.unit}
                                                " "
                                                <TrendBadge trend=trend/>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn VaccinesSection() -> impl IntoView {
    let http = expect_context::<HttpClient>();
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let items = RwSignal::new(Vec::new());

    Effect::new(move || {
        load(loading, error, items, async move {
            let mut records = api::fetch_vaccines(http).await?;
            newest_first(&mut records, |v| parse_wire_date(&v.date_received));
            Ok(records)
        });
    });

    view! {
        <section class="records">
            <h2>"Vaccines"</h2>
            <SectionStatus loading=loading error=error/>
            <table class="records__table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Provider"</th>
                        <th>"Date received"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|v| {
                                view! {
                                    <tr>
                                        <td>{v.name}</td>
                                        <td>{v.provider}</td>
                                        <td>{v.date_received}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn MedicationsSection() -> impl IntoView {
    let http = expect_context::<HttpClient>();
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let items = RwSignal::new(Vec::new());

    Effect::new(move || {
        load(loading, error, items, async move {
            let mut records = api::fetch_medications(http).await?;
            newest_first(&mut records, |m| parse_wire_date(&m.date_prescribed));
            Ok(records)
        });
    });

    view! {
        <section class="records">
            <h2>"Medications"</h2>
            <SectionStatus loading=loading error=error/>
            <table class="records__table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Dosage"</th>
                        <th>"Frequency"</th>
                        <th>"Route"</th>
                        <th>"Form"</th>
                        <th>"Date prescribed"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|m| {
                                view! {
                                    <tr>
                                        <td>{m.name}</td>
                                        <td>{m.dosage}</td>
                                        <td>{m.frequency}</td>
                                        <td>{m.route}</td>
                                        <td>{m.form}</td>
                                        <td>{m.date_prescribed}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn AllergiesSection() -> impl IntoView {
    let http = expect_context::<HttpClient>();
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let items = RwSignal::new(Vec::new());

    Effect::new(move || {
        load(loading, error, items, async move {
            let mut records = api::fetch_allergies(http).await?;
            newest_first(&mut records, |a| parse_wire_date(&a.date_diagnosed));
            Ok(records)
        });
    });

    view! {
        <section class="records">
            <h2>"Allergies"</h2>
            <SectionStatus loading=loading error=error/>
            <table class="records__table">
                <thead>
                    <tr>
                        <th>"Allergens"</th>
                        <th>"Reactions"</th>
                        <th>"Severity"</th>
                        <th>"Date diagnosed"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|a| {
                                view! {
                                    <tr>
                                        <td>{a.allergens.join(", ")}</td>
                                        <td>{a.reactions.join(", ")}</td>
                                        <td>{a.severity}</td>
                                        <td>{a.date_diagnosed}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn VitalsSection() -> impl IntoView {
    let http = expect_context::<HttpClient>();
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let items = RwSignal::new(Vec::new());

    Effect::new(move || {
        load(loading, error, items, async move {
            let mut records = api::fetch_healthdata(http).await?;
            newest_first(&mut records, |s| parse_wire_date(&s.date_recorded));
            Ok(records)
        });
    });

    view! {
        <section class="records">
            <h2>"Vitals"</h2>
            <SectionStatus loading=loading error=error/>
            <table class="records__table">
                <thead>
                    <tr>
                        <th>"Vital"</th>
                        <th>"Value"</th>
                        <th>"Unit"</th>
                        <th>"Date recorded"</th>
                        <th>"Trend"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|sample| {
                                let trend = vital_trend(&sample);
                                let label = vital_value_label(&sample);
                                view! {
                                    <tr>
                                        <td>{sample.name}</td>
                                        <td>{label}</td>
                                        <td>{sample.unit}</td>
                                        <td>{sample.date_recorded}</td>
                                        <td>
                                            <TrendBadge trend=trend/>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn LabsSection() -> impl IntoView {
    let http = expect_context::<HttpClient>();
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let items = RwSignal::new(Vec::new());

    Effect::new(move || {
        load(loading, error, items, async move {
            let mut records = api::fetch_lab_results(http).await?;
            newest_first(&mut records, |r| parse_wire_date(&r.date_collection));
            Ok(records)
        });
    });

    view! {
        <section class="records">
            <h2>"Lab results"</h2>
            <SectionStatus loading=loading error=error/>
            <table class="records__table">
                <thead>
                    <tr>
                        <th>"Test"</th>
                        <th>"Value"</th>
                        <th>"Reference range"</th>
                        <th>"Date collected"</th>
                        <th>"Trend"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|r| {
                                let trend = lab_trend(&r.value, r.reference_range.as_deref(), r.is_numeric);
                                let value = match &r.unit {
                                    Some(unit) => format!("{} {unit}", r.value),
                                    None => r.value.clone(),
                                };
                                view! {
                                    <tr>
                                        <td>{r.name}</td>
                                        <td>{value}</td>
                                        <td>{r.reference_range.unwrap_or_default()}</td>
                                        <td>{r.date_collection}</td>
                                        <td>
                                            {match trend {
                                                Some(trend) => view! { <TrendBadge trend=trend/> }.into_any(),
                                                None => view! { <span class="trend-badge">"-"</span> }.into_any(),
                                            }}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </section>
    }
}
