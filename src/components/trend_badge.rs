//! Badge rendering a value's position relative to its expected range.

use leptos::prelude::*;

use crate::util::trends::Trend;

#[component]
pub fn TrendBadge(trend: Trend) -> impl IntoView {
    let (class, label) = match trend {
        Trend::Up => ("trend-badge trend-badge--up", "above range"),
        Trend::Down => ("trend-badge trend-badge--down", "below range"),
        Trend::Stable => ("trend-badge trend-badge--stable", "in range"),
    };
    view! { <span class=class>{label}</span> }
}
