//! CloudCost Quote - Main entry point
//!
//! Terminal front end of the cloud cost calculator: collects a lead,
//! shows the estimated savings, writes the PDF quote, and notifies sales.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands, QuoteArgs};
use cloudcost_quote_lib::core::{Config, ContactDetails, Lead, RateCategory, UsageInput};
use cloudcost_quote_lib::i18n::I18n;
use cloudcost_quote_lib::lead::{accept_lead, validate_lead};
use cloudcost_quote_lib::pricing::{load_rates, RateSource, ResolvedRates};
use cloudcost_quote_lib::quote::{format_currency, QuoteRecord};
use cloudcost_quote_lib::report::{notify_sales, save_pdf, PdfRenderer, SmtpNotifier};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    log::info!("Starting CloudCost Quote v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        }),
    };
    if let Some(sheet) = &cli.sheet {
        config.pricing.price_sheet_path = sheet.clone();
    }

    let i18n = I18n::new(&config.general.language);

    // Rates are resolved once and stay fixed for the rest of the run
    let resolved = load_rates(&config.pricing);

    match cli.command.clone().unwrap_or(Commands::Quote(QuoteArgs::default())) {
        Commands::Rates => {
            print_rates(&resolved, &config, &i18n, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Quote(args) => run_quote(args, &resolved, &config, &i18n, cli.json),
    }
}

/// Result of one submission, printed in JSON mode
#[derive(Serialize)]
struct Submission<'a> {
    quote: &'a QuoteRecord,
    pdf_path: PathBuf,
    email_sent: Option<bool>,
}

fn run_quote(
    args: QuoteArgs,
    resolved: &ResolvedRates,
    config: &Config,
    i18n: &I18n,
    json: bool,
) -> anyhow::Result<ExitCode> {
    // In JSON mode stdout carries only the submission document
    let mut prompts: Box<dyn Write> = if json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    writeln!(prompts, "{}", banner(i18n))?;

    let stdin = io::stdin();
    let lead = collect_lead(&args, i18n, &mut stdin.lock(), &mut prompts)?;

    let issues = validate_lead(&lead);
    if !issues.is_empty() {
        for message in i18n.validation_messages(&issues) {
            eprintln!("  {}", message);
        }
        return Ok(ExitCode::FAILURE);
    }
    let lead = accept_lead(&lead)?;

    let record = QuoteRecord::new(lead, &resolved.rates);
    let symbol = config.pricing.currency_symbol.as_str();
    if !json {
        print_result(&record, symbol, i18n);
    }

    let pdf = PdfRenderer::new(&config.company, symbol, i18n)
        .render(&record)
        .context("rendering quote PDF")?;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.general.output_dir.clone());
    let pdf_path = save_pdf(&output_dir, &record.file_name(), &pdf).context("saving quote PDF")?;

    let email_sent = if config.email.enabled && !args.no_email {
        let notifier = SmtpNotifier::new(&config.email, symbol);
        Some(notify_sales(&notifier, &record, &pdf))
    } else {
        log::info!("Sales email disabled, skipping notification");
        None
    };

    if json {
        let submission = Submission {
            quote: &record,
            pdf_path,
            email_sent,
        };
        println!("{}", serde_json::to_string_pretty(&submission)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("\n{} {}", i18n.get("status.pdf_saved"), pdf_path.display());
    match email_sent {
        Some(true) => println!("{}", i18n.get("status.email_sent")),
        Some(false) => println!("{} {}", i18n.get("status.email_failed"), record.lead.contact.email),
        None => println!("{}", i18n.get("status.email_disabled")),
    }

    Ok(ExitCode::SUCCESS)
}

fn banner(i18n: &I18n) -> String {
    format!("{}\n{}", i18n.get("app.title"), i18n.get("app.tagline"))
}

/// Fill in every field not given on the command line by prompting on `out`
fn collect_lead(
    args: &QuoteArgs,
    i18n: &I18n,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Lead> {
    let needs_usage = args.vms.is_none()
        || args.storage_tb.is_none()
        || args.bandwidth_mbps.is_none()
        || args.current_cost.is_none();
    if needs_usage {
        writeln!(out, "\n{}", i18n.get("form.usage_heading"))?;
    }
    let usage = UsageInput {
        vms: value_or_prompt(args.vms, input, out, i18n, "form.vms")?,
        storage_tb: value_or_prompt(args.storage_tb, input, out, i18n, "form.storage_tb")?,
        bandwidth_mbps: value_or_prompt(args.bandwidth_mbps, input, out, i18n, "form.bandwidth_mbps")?,
        current_monthly_cost: value_or_prompt(args.current_cost, input, out, i18n, "form.current_cost")?,
    };

    let needs_contact = [&args.company, &args.contact, &args.job_title, &args.email, &args.phone]
        .iter()
        .any(|v| v.is_none());
    if needs_contact {
        writeln!(out, "\n{}", i18n.get("form.contact_heading"))?;
    }
    let contact = ContactDetails {
        company_name: text_or_prompt(&args.company, input, out, i18n, "form.company_name")?,
        contact_name: text_or_prompt(&args.contact, input, out, i18n, "form.contact_name")?,
        job_title: text_or_prompt(&args.job_title, input, out, i18n, "form.job_title")?,
        email: text_or_prompt(&args.email, input, out, i18n, "form.email")?,
        phone: text_or_prompt(&args.phone, input, out, i18n, "form.phone")?,
    };

    Ok(Lead { contact, usage })
}

fn read_line(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> anyhow::Result<String> {
    write!(out, "{}: ", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("input closed while waiting for '{}'", label);
    }
    Ok(line.trim().to_string())
}

fn text_or_prompt(
    value: &Option<String>,
    input: &mut impl BufRead,
    out: &mut impl Write,
    i18n: &I18n,
    key: &str,
) -> anyhow::Result<String> {
    match value {
        Some(v) => Ok(v.clone()),
        None => read_line(input, out, &i18n.get(key)),
    }
}

/// Use the given number or prompt until a finite, non-negative one is entered.
/// An empty answer means zero, like the form's initial value.
fn value_or_prompt<T>(
    value: Option<T>,
    input: &mut impl BufRead,
    out: &mut impl Write,
    i18n: &I18n,
    key: &str,
) -> anyhow::Result<T>
where
    T: FromStr + Default + Into<f64> + Copy,
{
    if let Some(v) = value {
        return Ok(v);
    }

    loop {
        let answer = read_line(input, out, &i18n.get(key))?;
        if answer.is_empty() {
            return Ok(T::default());
        }
        if let Ok(v) = answer.parse::<T>() {
            let n: f64 = v.into();
            if n.is_finite() && n >= 0.0 {
                return Ok(v);
            }
        }
        writeln!(out, "  {}", i18n.get("form.invalid_number"))?;
    }
}

fn print_result(record: &QuoteRecord, symbol: &str, i18n: &I18n) {
    let outcome = record.outcome();
    let (monthly_key, percentage_key) = outcome.label_keys();
    let (monthly, percentage) = outcome.amounts();

    println!("\n=== {} ===\n", i18n.get("result.heading"));
    println!(
        "  {}: {}",
        i18n.get("result.estimated_cost"),
        format_currency(symbol, record.result.estimated_cost)
    );
    println!("  {}: {}", i18n.get(monthly_key), format_currency(symbol, monthly));
    println!("  {}: {:.2}%", i18n.get(percentage_key), percentage);
}

fn print_rates(resolved: &ResolvedRates, config: &Config, i18n: &I18n, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(resolved)?);
        return Ok(());
    }

    let symbol = config.pricing.currency_symbol.as_str();
    println!("\n=== {} ===\n", i18n.get("rates.heading"));
    for category in RateCategory::ALL {
        let label = match category {
            RateCategory::Vm => "rates.vm",
            RateCategory::Storage => "rates.storage",
            RateCategory::Bandwidth => "rates.bandwidth",
        };
        let source = match resolved.source(category) {
            Some(RateSource::Sheet(description)) => format!("{}: {}", i18n.get("rates.from_sheet"), description),
            _ => i18n.get("rates.default"),
        };
        println!(
            "  {:<32} {:>12}  ({})",
            i18n.get(label),
            format_currency(symbol, resolved.rates.get(category)),
            source
        );
    }

    Ok(())
}
