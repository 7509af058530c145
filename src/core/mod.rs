//! Core module - Configuration, errors, and common types

mod config;
mod error;
mod types;

pub use config::{Config, GeneralConfig, PricingConfig, CompanyConfig, EmailConfig, SMTP_PASSWORD_ENV};
pub use error::{Error, Result};
pub use types::{RateTable, RateCategory, UsageInput, QuoteResult, ContactDetails, Lead};
pub use types::{DEFAULT_VM_RATE, DEFAULT_STORAGE_RATE_PER_TB, DEFAULT_BANDWIDTH_RATE_PER_MBPS};
