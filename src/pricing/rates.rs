//! Rate resolution from price sheet rows
//!
//! Each rate category is located by the first usable row whose description
//! mentions one of the category keywords. Anything that cannot be resolved
//! falls back to the configured default for that category alone, so the
//! result is always a complete table of finite, non-negative rates.

use crate::core::{RateCategory, RateTable};
use crate::pricing::sheet::PriceSheetRow;
use serde::Serialize;

/// Storage prices below this value on a "GB" row are treated as per-GB
const GB_PRICE_THRESHOLD: f64 = 50.0;
const GB_PER_TB: f64 = 1024.0;

/// Where a resolved rate came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", content = "description", rename_all = "snake_case")]
pub enum RateSource {
    /// Matched a price sheet row with this description
    Sheet(String),
    /// No usable row; the default rate applies
    Default,
}

/// Rate table together with the provenance of each rate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRates {
    pub rates: RateTable,
    pub sources: Vec<(RateCategory, RateSource)>,
}

impl ResolvedRates {
    /// Everything from defaults, used when no sheet could be read at all
    pub fn from_defaults(defaults: RateTable) -> Self {
        Self {
            rates: defaults,
            sources: RateCategory::ALL
                .iter()
                .map(|c| (*c, RateSource::Default))
                .collect(),
        }
    }

    /// Categories that fell back to their default rate
    pub fn fallbacks(&self) -> Vec<RateCategory> {
        self.sources
            .iter()
            .filter(|(_, source)| *source == RateSource::Default)
            .map(|(category, _)| *category)
            .collect()
    }

    pub fn source(&self, category: RateCategory) -> Option<&RateSource> {
        self.sources
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, source)| source)
    }
}

/// Resolve the three unit rates from price sheet rows
pub fn resolve_rates(rows: &[PriceSheetRow], defaults: &RateTable) -> RateTable {
    resolve_rates_detailed(rows, defaults).rates
}

/// Resolve the three unit rates and report where each one came from
pub fn resolve_rates_detailed(rows: &[PriceSheetRow], defaults: &RateTable) -> ResolvedRates {
    let valid: Vec<(&str, f64)> = rows
        .iter()
        .filter_map(|row| Some((row.description.as_deref()?, row.unit_monthly_value()?)))
        .collect();

    let mut rates = *defaults;
    let mut sources = Vec::with_capacity(RateCategory::ALL.len());

    for category in RateCategory::ALL {
        let default = defaults.get(category);
        let matched = valid
            .iter()
            .find(|(desc, _)| matches_category(desc, category));

        let Some(&(description, raw)) = matched else {
            log::warn!(
                "Could not find {} pricing in price sheet, using default rate {:.2}",
                category,
                default
            );
            sources.push((category, RateSource::Default));
            continue;
        };

        log::debug!("Matched {} row '{}' with unit monthly {}", category, description, raw);

        let coerced = coerce_rate(raw);
        if coerced.is_none() {
            log::warn!(
                "{} row '{}' has unusable rate {}, using default rate {:.2}",
                category,
                description,
                raw,
                default
            );
        }

        // The GB correction applies to the substituted default as well
        let mut rate = coerced.unwrap_or(default);
        if category == RateCategory::Storage {
            rate = coerce_rate(storage_per_tb(description, rate)).unwrap_or(default);
        }
        rates.set(category, rate);

        if coerced.is_some() {
            log::info!("Found {} rate {:.2} for '{}'", category, rate, description);
            sources.push((category, RateSource::Sheet(description.to_string())));
        } else {
            sources.push((category, RateSource::Default));
        }
    }

    ResolvedRates { rates, sources }
}

/// Case-insensitive substring match against the category keywords
pub fn matches_category(description: &str, category: RateCategory) -> bool {
    let description = description.to_lowercase();
    category
        .keywords()
        .iter()
        .any(|keyword| description.contains(&keyword.to_lowercase()))
}

/// Accept only finite, non-negative rates
pub fn coerce_rate(value: f64) -> Option<f64> {
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Convert a per-GB storage price to per-TB.
///
/// The sheet has no unit column; a "GB" row priced under the threshold is
/// taken to be per gigabyte. A genuinely small per-TB price on a row that
/// mentions GB would be inflated too.
fn storage_per_tb(description: &str, rate: f64) -> f64 {
    if description.to_uppercase().contains("GB") && rate < GB_PRICE_THRESHOLD {
        rate * GB_PER_TB
    } else {
        rate
    }
}
