//! Country statistics aggregation for the assistant
//!
//! Matches the exact user-entered country string against the prevalence and
//! coping-strategies tables, taking the most recent year. Among duplicate
//! max-year rows the first in file order wins, so repeated runs over the same
//! file give the same answer.

use crate::table::{CopingRow, PrevalenceRow};

/// Country-level fallbacks used when no prevalence row matches.
pub const DEFAULT_COUNTRY_DEPRESSION: f64 = 3.3;
pub const DEFAULT_COUNTRY_ANXIETY: f64 = 3.8;

/// Global-average fallbacks used when the table is empty or all-missing.
pub const DEFAULT_GLOBAL_DEPRESSION: f64 = 3.4;
pub const DEFAULT_GLOBAL_ANXIETY: f64 = 3.8;

/// Prevalence rates for one country. Depression and anxiety always carry a
/// value (falling back to the documented defaults); the remaining disorders
/// are only present when the source row has them.
#[derive(Debug, Clone, PartialEq)]
pub struct Prevalence {
    pub depression: f64,
    pub anxiety: f64,
    pub bipolar: Option<f64>,
    pub eating: Option<f64>,
    pub dysthymia: Option<f64>,
    pub schizophrenia: Option<f64>,
}

impl Default for Prevalence {
    fn default() -> Self {
        Self {
            depression: DEFAULT_COUNTRY_DEPRESSION,
            anxiety: DEFAULT_COUNTRY_ANXIETY,
            bipolar: None,
            eating: None,
            dysthymia: None,
            schizophrenia: None,
        }
    }
}

/// Share of respondents using each coping strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct CopingStrategies {
    pub religion: Option<f64>,
    pub lifestyle: Option<f64>,
    pub work: Option<f64>,
    pub relationships: Option<f64>,
    pub social: Option<f64>,
    pub medication: Option<f64>,
    pub outdoors: Option<f64>,
    pub professional: Option<f64>,
}

/// Aggregated per-country view handed to the dialogue.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryData {
    pub prevalence: Prevalence,
    pub coping_strategies: Option<CopingStrategies>,
}

/// Global average prevalence for the latest year in the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalAverages {
    pub depression: f64,
    pub anxiety: f64,
}

impl Default for GlobalAverages {
    fn default() -> Self {
        Self {
            depression: DEFAULT_GLOBAL_DEPRESSION,
            anxiety: DEFAULT_GLOBAL_ANXIETY,
        }
    }
}

/// Aggregate prevalence and coping data for one country (exact entity match,
/// most recent year).
pub fn get_country_data(
    prevalence: &[PrevalenceRow],
    coping: &[CopingRow],
    country: &str,
) -> CountryData {
    let prevalence = match latest_matching(prevalence, |r| &r.entity, |r| r.year, country) {
        Some(row) => Prevalence {
            depression: row.major_depression.unwrap_or(DEFAULT_COUNTRY_DEPRESSION),
            anxiety: row.anxiety_disorders.unwrap_or(DEFAULT_COUNTRY_ANXIETY),
            bipolar: row.bipolar_disorder,
            eating: row.eating_disorders,
            dysthymia: row.dysthymia,
            schizophrenia: row.schizophrenia,
        },
        None => Prevalence::default(),
    };

    let coping_strategies = latest_matching(coping, |r| &r.entity, |r| r.year, country).map(|row| {
        CopingStrategies {
            religion: row.religion,
            lifestyle: row.lifestyle,
            work: row.work,
            relationships: row.relationships,
            social: row.social,
            medication: row.medication,
            outdoors: row.outdoors,
            professional: row.professional,
        }
    });

    CountryData {
        prevalence,
        coping_strategies,
    }
}

/// Average the non-missing depression and anxiety columns across all
/// countries in the table's most recent year.
pub fn get_global_averages(prevalence: &[PrevalenceRow]) -> GlobalAverages {
    let mut averages = GlobalAverages::default();

    let latest_year = match prevalence.iter().map(|r| r.year).max() {
        Some(year) => year,
        None => return averages,
    };
    let latest: Vec<&PrevalenceRow> =
        prevalence.iter().filter(|r| r.year == latest_year).collect();

    if let Some(mean) = mean_of(latest.iter().filter_map(|r| r.major_depression)) {
        averages.depression = mean;
    }
    if let Some(mean) = mean_of(latest.iter().filter_map(|r| r.anxiety_disorders)) {
        averages.anxiety = mean;
    }

    averages
}

/// First row with the maximum year among exact entity matches. A later row
/// replaces the current best only when its year is strictly greater.
fn latest_matching<'a, R>(
    rows: &'a [R],
    entity: impl Fn(&R) -> &str,
    year: impl Fn(&R) -> i32,
    country: &str,
) -> Option<&'a R> {
    let mut best: Option<&R> = None;
    for row in rows.iter().filter(|r| entity(r) == country) {
        match best {
            Some(current) if year(row) <= year(current) => {}
            _ => best = Some(row),
        }
    }
    best
}

fn mean_of(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
