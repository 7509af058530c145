//! Finalized quote records and their display helpers

use crate::core::{Lead, QuoteResult, RateTable};
use crate::pricing::{compute_quote, LineCosts};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Everything the PDF and email collaborators need about one submission
#[derive(Debug, Clone, Serialize)]
pub struct QuoteRecord {
    pub lead: Lead,
    pub rates: RateTable,
    pub result: QuoteResult,
    pub line_costs: LineCosts,
    pub generated_at: DateTime<Local>,
}

impl QuoteRecord {
    /// Price a validated lead and stamp the quote with the current time
    pub fn new(lead: Lead, rates: &RateTable) -> Self {
        Self::at(lead, rates, Local::now())
    }

    pub fn at(lead: Lead, rates: &RateTable, generated_at: DateTime<Local>) -> Self {
        let result = compute_quote(&lead.usage, rates);
        let line_costs = LineCosts::new(&lead.usage, rates);
        Self {
            lead,
            rates: *rates,
            result,
            line_costs,
            generated_at,
        }
    }

    pub fn outcome(&self) -> SavingsOutcome {
        SavingsOutcome::from_result(&self.result)
    }

    /// File name for the quote PDF
    pub fn file_name(&self) -> String {
        quote_file_name(&self.lead.contact.company_name)
    }
}

/// Savings relabeled for display: amounts are always non-negative
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SavingsOutcome {
    Savings { monthly: f64, percentage: f64 },
    Increase { monthly: f64, percentage: f64 },
}

impl SavingsOutcome {
    pub fn from_result(result: &QuoteResult) -> Self {
        if result.monthly_savings >= 0.0 {
            SavingsOutcome::Savings {
                monthly: result.monthly_savings,
                percentage: result.percentage_savings,
            }
        } else {
            SavingsOutcome::Increase {
                monthly: -result.monthly_savings,
                percentage: -result.percentage_savings,
            }
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, SavingsOutcome::Savings { .. })
    }

    /// Translation keys for the monthly and percentage labels
    pub fn label_keys(&self) -> (&'static str, &'static str) {
        match self {
            SavingsOutcome::Savings { .. } => ("result.monthly_savings", "result.percentage_savings"),
            SavingsOutcome::Increase { .. } => ("result.monthly_increase", "result.percentage_increase"),
        }
    }

    pub fn amounts(&self) -> (f64, f64) {
        match *self {
            SavingsOutcome::Savings { monthly, percentage }
            | SavingsOutcome::Increase { monthly, percentage } => (monthly, percentage),
        }
    }
}

/// Format an amount with thousands separators and two decimals, e.g. `R11,134.30`
pub fn format_currency(symbol: &str, amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, frac) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, grouped, frac)
}

/// `Cloud_Quote_<Company>.pdf` with spaces replaced and path characters dropped
pub fn quote_file_name(company_name: &str) -> String {
    let company: String = company_name
        .trim()
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();

    if company.is_empty() {
        "Cloud_Quote.pdf".to_string()
    } else {
        format!("Cloud_Quote_{}.pdf", company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ContactDetails, UsageInput};

    fn lead(current: f64) -> Lead {
        Lead {
            contact: ContactDetails {
                company_name: "Acme Mining".to_string(),
                ..Default::default()
            },
            usage: UsageInput {
                vms: 10,
                storage_tb: 2.0,
                bandwidth_mbps: 100.0,
                current_monthly_cost: current,
            },
        }
    }

    #[test]
    fn test_record_prices_lead() {
        let record = QuoteRecord::new(lead(20_000.0), &RateTable::default());
        assert!((record.result.estimated_cost - 11_134.30).abs() < 1e-9);
        assert_eq!(record.line_costs.total(), record.result.estimated_cost);
        assert!(record.outcome().is_saving());
        assert_eq!(record.file_name(), "Cloud_Quote_Acme_Mining.pdf");
    }

    #[test]
    fn test_increase_is_relabeled() {
        let record = QuoteRecord::new(lead(5000.0), &RateTable::default());
        let outcome = record.outcome();

        assert!(!outcome.is_saving());
        assert_eq!(outcome.label_keys().0, "result.monthly_increase");
        let (monthly, percentage) = outcome.amounts();
        assert!((monthly - 6134.30).abs() < 1e-9);
        assert!((percentage - 122.686).abs() < 1e-9);
    }

    #[test]
    fn test_zero_savings_counts_as_saving() {
        let result = QuoteResult { estimated_cost: 10.0, monthly_savings: 0.0, percentage_savings: 0.0 };
        assert!(SavingsOutcome::from_result(&result).is_saving());
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("R", 11_134.3), "R11,134.30");
        assert_eq!(format_currency("R", 0.0), "R0.00");
        assert_eq!(format_currency("R", 999.999), "R1,000.00");
        assert_eq!(format_currency("R", 1_234_567.891), "R1,234,567.89");
        assert_eq!(format_currency("$", -5133.3), "-$5,133.30");
        assert_eq!(format_currency("R", -0.001), "R0.00");
    }

    #[test]
    fn test_quote_file_name() {
        assert_eq!(quote_file_name("Acme  Mining/Ops"), "Cloud_Quote_Acme__MiningOps.pdf");
        assert_eq!(quote_file_name("   "), "Cloud_Quote.pdf");
    }
}
