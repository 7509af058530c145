//! CloudCost Quote - Demo CLI
//!
//! Runs the bundled sample price sheet through rate resolution and prices a
//! sample lead. Nothing is written or sent.

use cloudcost_quote_lib::core::{ContactDetails, Lead, PricingConfig, RateCategory, UsageInput};
use cloudcost_quote_lib::pricing::{load_rates, RateSource};
use cloudcost_quote_lib::quote::{format_currency, QuoteRecord};
use std::path::PathBuf;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("==============================================");
    println!("   CloudCost Quote - Demo CLI");
    println!("==============================================\n");

    // 1. Resolve rates from the sample sheet
    println!("[1/2] Resolving rates from sample price sheet...");
    let pricing = PricingConfig {
        price_sheet_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets").join("price_sheet.csv"),
        ..Default::default()
    };
    let resolved = load_rates(&pricing);
    let symbol = pricing.currency_symbol.as_str();

    for category in RateCategory::ALL {
        let source = match resolved.source(category) {
            Some(RateSource::Sheet(description)) => description.clone(),
            _ => "default".to_string(),
        };
        println!(
            "      {:<10} {:>12}  ({})",
            category.to_string(),
            format_currency(symbol, resolved.rates.get(category)),
            source
        );
    }
    println!();

    // 2. Price a sample lead
    println!("[2/2] Pricing sample lead...\n");
    let lead = Lead {
        contact: ContactDetails {
            company_name: "Example Holdings".to_string(),
            contact_name: "Sam Dlamini".to_string(),
            job_title: "IT Manager".to_string(),
            email: "sam@example.com".to_string(),
            phone: "010 000 0000".to_string(),
        },
        usage: UsageInput {
            vms: 10,
            storage_tb: 2.0,
            bandwidth_mbps: 100.0,
            current_monthly_cost: 15_000.0,
        },
    };
    let record = QuoteRecord::new(lead, &resolved.rates);
    let (monthly, percentage) = record.outcome().amounts();
    let label = if record.outcome().is_saving() { "Savings" } else { "Increase" };

    println!("  Virtual Machines: {}", format_currency(symbol, record.line_costs.vms));
    println!("  Storage:          {}", format_currency(symbol, record.line_costs.storage));
    println!("  Bandwidth:        {}", format_currency(symbol, record.line_costs.bandwidth));
    println!("  Estimated Total:  {}", format_currency(symbol, record.result.estimated_cost));
    println!("  Current Cost:     {}", format_currency(symbol, record.lead.usage.current_monthly_cost));
    println!("  Monthly {}: {} ({:.2}%)", label, format_currency(symbol, monthly), percentage);

    println!("\n==============================================\n");
}
