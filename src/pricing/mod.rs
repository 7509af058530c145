//! Pricing engine for cloud infrastructure quotes
//!
//! - `sheet`: reads the channel partner price sheet export
//! - `rates`: turns sheet rows into the three unit rates
//! - this module: prices a usage profile against those rates
//!
//! Rates are resolved once at startup and passed by reference to every
//! quote; nothing here holds mutable state.

mod rates;
mod sheet;

pub use rates::{coerce_rate, matches_category, resolve_rates, resolve_rates_detailed, RateSource, ResolvedRates};
pub use sheet::{PriceSheet, PriceSheetRow, DESCRIPTION_COLUMN, UNIT_MONTHLY_COLUMN};

use crate::core::{PricingConfig, QuoteResult, RateTable, UsageInput};
use serde::{Deserialize, Serialize};

/// Load the configured price sheet and resolve rates, falling back to the
/// configured defaults when the sheet is missing or unreadable.
pub fn load_rates(config: &PricingConfig) -> ResolvedRates {
    let defaults = config.default_rates();

    match PriceSheet::from_path(&config.price_sheet_path, config.header_row) {
        Ok(sheet) => {
            log::debug!("Available descriptions in price sheet: {:?}", sheet.descriptions());
            let resolved = resolve_rates_detailed(sheet.rows(), &defaults);
            log::info!(
                "Final rates - VM: {:.2}, Storage: {:.2}/TB, Bandwidth: {:.2}/Mbps",
                resolved.rates.vm_rate,
                resolved.rates.storage_rate_per_tb,
                resolved.rates.bandwidth_rate_per_mbps
            );
            resolved
        }
        Err(e) => {
            log::warn!("{}. Using default pricing rates.", e);
            ResolvedRates::from_defaults(defaults)
        }
    }
}

/// Price a usage profile.
///
/// Savings and percentage keep their sign; a negative value means the
/// estimate is more expensive than what the prospect pays today.
pub fn compute_quote(usage: &UsageInput, rates: &RateTable) -> QuoteResult {
    let costs = LineCosts::new(usage, rates);
    let estimated_cost = costs.total();
    let monthly_savings = usage.current_monthly_cost - estimated_cost;
    let percentage_savings = if usage.current_monthly_cost > 0.0 {
        monthly_savings / usage.current_monthly_cost * 100.0
    } else {
        0.0
    };

    QuoteResult {
        estimated_cost,
        monthly_savings,
        percentage_savings,
    }
}

/// Estimated monthly cost per resource line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineCosts {
    pub vms: f64,
    pub storage: f64,
    pub bandwidth: f64,
}

impl LineCosts {
    pub fn new(usage: &UsageInput, rates: &RateTable) -> Self {
        Self {
            vms: f64::from(usage.vms) * rates.vm_rate,
            storage: usage.storage_tb * rates.storage_rate_per_tb,
            bandwidth: usage.bandwidth_mbps * rates.bandwidth_rate_per_mbps,
        }
    }

    pub fn total(&self) -> f64 {
        self.vms + self.storage + self.bandwidth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(vms: u32, storage_tb: f64, bandwidth_mbps: f64, current: f64) -> UsageInput {
        UsageInput {
            vms,
            storage_tb,
            bandwidth_mbps,
            current_monthly_cost: current,
        }
    }

    #[test]
    fn test_estimate_at_default_rates() {
        let result = compute_quote(&usage(10, 2.0, 100.0, 5000.0), &RateTable::default());

        let expected = 10.0 * 864.35 + 2.0 * 870.40 + 100.0 * 7.50;
        assert_eq!(result.estimated_cost, expected);
        assert!((result.estimated_cost - 11_134.30).abs() < 1e-9);
        assert!((result.monthly_savings + 6134.30).abs() < 1e-9);
        assert!((result.percentage_savings + 122.686).abs() < 1e-9);
    }

    #[test]
    fn test_zero_current_cost_has_zero_percentage() {
        let result = compute_quote(&usage(3, 1.0, 10.0, 0.0), &RateTable::default());
        assert_eq!(result.percentage_savings, 0.0);
        assert_eq!(result.monthly_savings, -result.estimated_cost);
    }

    #[test]
    fn test_savings_sign_matches_percentage() {
        let rates = RateTable::new(100.0, 50.0, 1.0);
        let cheaper = compute_quote(&usage(1, 1.0, 10.0, 1000.0), &rates);
        let dearer = compute_quote(&usage(10, 1.0, 10.0, 100.0), &rates);

        assert_eq!(cheaper.estimated_cost, 160.0);
        assert_eq!(cheaper.monthly_savings, 840.0);
        assert!((cheaper.percentage_savings - 84.0).abs() < 1e-9);
        assert!(dearer.monthly_savings < 0.0 && dearer.percentage_savings < 0.0);
    }

    #[test]
    fn test_no_usage_costs_nothing() {
        let result = compute_quote(&usage(0, 0.0, 0.0, 250.0), &RateTable::default());
        assert_eq!(result.estimated_cost, 0.0);
        assert_eq!(result.monthly_savings, 250.0);
        assert_eq!(result.percentage_savings, 100.0);
    }

    #[test]
    fn test_line_costs_sum_to_estimate() {
        let rates = RateTable::new(10.0, 20.0, 0.5);
        let u = usage(4, 2.5, 30.0, 0.0);
        let lines = LineCosts::new(&u, &rates);

        assert_eq!(lines, LineCosts { vms: 40.0, storage: 50.0, bandwidth: 15.0 });
        assert_eq!(lines.total(), compute_quote(&u, &rates).estimated_cost);
    }

    #[test]
    fn test_load_rates_missing_sheet_uses_defaults() {
        let config = PricingConfig {
            price_sheet_path: std::env::temp_dir().join("cloudcost-missing-sheet.csv"),
            vm_rate: 700.0,
            ..Default::default()
        };
        let resolved = load_rates(&config);

        assert_eq!(resolved.rates.vm_rate, 700.0);
        assert_eq!(resolved.fallbacks().len(), 3);
    }

    #[test]
    fn test_load_rates_from_sheet() {
        let path = std::env::temp_dir().join(format!("cloudcost-sheet-{}.csv", std::process::id()));
        std::fs::write(
            &path,
            "Description,Unit Monthly\nVirtual Data Centre,800\nvStorage (per GB),0.8\n",
        )
        .unwrap();
        let config = PricingConfig {
            price_sheet_path: path.clone(),
            header_row: 0,
            ..Default::default()
        };
        let resolved = load_rates(&config);

        assert_eq!(resolved.rates.vm_rate, 800.0);
        assert!((resolved.rates.storage_rate_per_tb - 819.2).abs() < 1e-9);
        assert_eq!(resolved.fallbacks(), vec![crate::core::RateCategory::Bandwidth]);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_bundled_sample_sheet() {
        let config = PricingConfig {
            price_sheet_path: std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("assets")
                .join("price_sheet.csv"),
            ..Default::default()
        };
        let resolved = load_rates(&config);

        assert!(resolved.fallbacks().is_empty());
        assert_eq!(resolved.rates.vm_rate, 864.35);
        assert!((resolved.rates.storage_rate_per_tb - 870.40).abs() < 1e-9);
        assert_eq!(resolved.rates.bandwidth_rate_per_mbps, 7.50);
    }
}
