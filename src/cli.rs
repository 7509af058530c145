use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cloudcost-quote", version, about = "Cloud cost savings calculator")]
pub struct Cli {
    /// Configuration file path (defaults to the user config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Price sheet CSV, overriding the configured path
    #[arg(long, global = true)]
    pub sheet: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Calculate a quote for a lead (default)
    Quote(QuoteArgs),

    /// Show the effective rates and where they came from
    Rates,
}

/// Lead details; anything left out is prompted for
#[derive(Args, Debug, Clone, Default)]
pub struct QuoteArgs {
    /// Number of virtual machines
    #[arg(long)]
    pub vms: Option<u32>,

    /// Storage in TB
    #[arg(long)]
    pub storage_tb: Option<f64>,

    /// Bandwidth in Mbps
    #[arg(long)]
    pub bandwidth_mbps: Option<f64>,

    /// Current monthly cloud cost
    #[arg(long)]
    pub current_cost: Option<f64>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub contact: Option<String>,

    #[arg(long)]
    pub job_title: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Directory for the generated PDF
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Do not notify the sales team
    #[arg(long)]
    pub no_email: bool,
}
