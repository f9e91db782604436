//! Statistic formatters for the lookup demo
//!
//! Five pure functions, one per statistic family. Each normalizes the queried
//! country name, takes the first matching row in file order, and renders a
//! fixed sentence; a missing row or an unparseable value cell yields the fixed
//! "no data" sentence for that family.

use crate::table::{ComfortTable, SingleValueTable};

pub const NO_COMFORT_DATA: &str = "No comfort speaking data available.";
pub const NO_POLICY_DATA: &str = "No policy data available.";
pub const NO_RESEARCH_DATA: &str = "No data on public research support.";
pub const NO_PREVALENCE_DATA: &str = "No prevalence data available.";
pub const NO_PSYCHIATRIST_DATA: &str = "No psychiatrist data available.";

/// Share of people very / somewhat / not at all comfortable discussing
/// mental health.
pub fn comfort_stats(country: &str, table: &ComfortTable) -> String {
    let row = match table.find(country) {
        Some(row) => row,
        None => return NO_COMFORT_DATA.to_string(),
    };
    match (row.very, row.somewhat, row.not_at_all) {
        (Some(very), Some(somewhat), Some(not_at_all)) => format!(
            "In {}, {:.1}% feel very comfortable discussing mental health, \
             {:.1}% somewhat comfortable, and {:.1}% not at all comfortable.",
            title_case(country),
            very,
            somewhat,
            not_at_all
        ),
        _ => NO_COMFORT_DATA.to_string(),
    }
}

/// Whether the country reports a stand-alone national mental health policy.
pub fn policy_status(country: &str, table: &SingleValueTable) -> String {
    match table.find(country) {
        Some(row) => {
            if row.value.to_lowercase().contains("yes") {
                format!("{} has a national mental health policy.", title_case(country))
            } else {
                format!(
                    "{} does not have a national mental health policy.",
                    title_case(country)
                )
            }
        }
        None => NO_POLICY_DATA.to_string(),
    }
}

/// Share who say government funding of mental health research is extremely
/// important.
pub fn research_support(country: &str, table: &SingleValueTable) -> String {
    match table.find(country).and_then(|row| parse_value(&row.value)) {
        Some(percent) => format!(
            "{:.1}% of people in {} think government should fund mental health research.",
            percent,
            title_case(country)
        ),
        None => NO_RESEARCH_DATA.to_string(),
    }
}

/// Share reporting lifetime anxiety or depression.
pub fn lifetime_disorder_prevalence(country: &str, table: &SingleValueTable) -> String {
    match table.find(country).and_then(|row| parse_value(&row.value)) {
        Some(rate) => format!(
            "In {}, {:.1}% of the population reports having experienced anxiety or depression.",
            title_case(country),
            rate
        ),
        None => NO_PREVALENCE_DATA.to_string(),
    }
}

/// Psychiatrists per 100,000 people.
pub fn psychiatrist_density(country: &str, table: &SingleValueTable) -> String {
    match table.find(country).and_then(|row| parse_value(&row.value)) {
        Some(rate) => format!(
            "{} has about {:.2} psychiatrists per 100,000 people.",
            title_case(country),
            rate
        ),
        None => NO_PSYCHIATRIST_DATA.to_string(),
    }
}

fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Title-case the rendered country name: a letter following any
/// non-alphabetic character starts a new capitalized word, so hyphenated
/// names like "guinea-bissau" render as "Guinea-Bissau".
fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut word_start = true;
    for ch in raw.trim().chars() {
        if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}
