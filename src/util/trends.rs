//! Trend computation for vitals and lab results.
//!
//! DESIGN
//! ======
//! Lab reference ranges arrive as free text (`"12-16"`, `">60"`, `"<5.7"`,
//! sometimes a bare number); vital ranges use a spaced `"low - high"` form
//! with an optional unit suffix, and blood pressure nests a systolic/
//! diastolic pair on each side (`"90/60 - 120/80 mmHg"`). Anything that
//! fails to parse reads as stable rather than alarming the user.

#[cfg(test)]
#[path = "trends_test.rs"]
mod trends_test;

use crate::net::types::HealthData;

/// Position of a value relative to its expected range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    /// Above the expected range.
    Up,
    /// Below the expected range.
    Down,
    /// Within the expected range (or no range to compare against).
    Stable,
}

/// First numeric token of a range bound, ignoring a trailing unit.
fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().split_whitespace().next()?.parse().ok()
}

fn compare(value: f64, min: f64, max: f64) -> Trend {
    if value < min {
        Trend::Down
    } else if value > max {
        Trend::Up
    } else {
        Trend::Stable
    }
}

/// Trend of a lab value against its reference range.
///
/// Returns `None` for non-numeric results (`"positive"`, `"normal"`, ...),
/// which have no meaningful direction.
pub fn lab_trend(value: &str, reference_range: Option<&str>, is_numeric: bool) -> Option<Trend> {
    if !is_numeric {
        return None;
    }
    let Ok(value) = value.trim().parse::<f64>() else {
        return Some(Trend::Stable);
    };
    let Some(range) = reference_range else {
        return Some(Trend::Stable);
    };
    let range = range.trim();

    let trend = if let Some(min) = range.strip_prefix('>') {
        match parse_bound(min) {
            Some(min) if value < min => Trend::Down,
            _ => Trend::Stable,
        }
    } else if let Some(max) = range.strip_prefix('<') {
        match parse_bound(max) {
            Some(max) if value > max => Trend::Up,
            _ => Trend::Stable,
        }
    } else if let Some((min, max)) = range.split_once('-') {
        match (parse_bound(min), parse_bound(max)) {
            (Some(min), Some(max)) => compare(value, min, max),
            _ => Trend::Stable,
        }
    } else {
        match parse_bound(range) {
            Some(reference) => compare(value, reference, reference),
            None => Trend::Stable,
        }
    };
    Some(trend)
}

/// Systolic bound of one side of a blood-pressure range (`"120/80 mmHg"`).
fn parse_systolic_bound(raw: &str) -> Option<f64> {
    raw.trim().split_whitespace().next()?.split('/').next()?.parse().ok()
}

fn blood_pressure_trend(systolic: f64, normal_range: Option<&str>) -> Trend {
    let Some(range) = normal_range else {
        return Trend::Stable;
    };
    let Some((low, high)) = range.split_once(" - ") else {
        return Trend::Stable;
    };
    match (parse_systolic_bound(low), parse_systolic_bound(high)) {
        (Some(min), Some(max)) => compare(systolic, min, max),
        _ => Trend::Stable,
    }
}

/// Trend for one vital sample against its expected range.
///
/// Blood-pressure samples compare their systolic component; simple vitals
/// compare their scalar value. Vitals without a range (height, weight) are
/// always stable.
pub fn vital_trend(sample: &HealthData) -> Trend {
    if let Some(systolic) = sample.value_systolic {
        return blood_pressure_trend(systolic, sample.normal_range.as_deref());
    }
    let (Some(value), Some(range)) = (sample.value, sample.normal_range.as_deref()) else {
        return Trend::Stable;
    };
    let Some((low, high)) = range.split_once(" - ") else {
        return Trend::Stable;
    };
    match (parse_bound(low), parse_bound(high)) {
        (Some(min), Some(max)) => compare(value, min, max),
        _ => Trend::Stable,
    }
}

/// Latest sample of each vital with its trend, preserving arrival order.
/// Samples arrive newest first from the backend, so the first occurrence of
/// a name is its latest measurement.
pub fn latest_vital_trends(samples: &[HealthData]) -> Vec<(HealthData, Trend)> {
    let mut seen: Vec<&str> = Vec::new();
    let mut latest = Vec::new();
    for sample in samples {
        if seen.iter().any(|name| *name == sample.name) {
            continue;
        }
        seen.push(&sample.name);
        latest.push((sample.clone(), vital_trend(sample)));
    }
    latest
}
