//! Configuration management

use crate::core::{Error, RateTable, Result};
use crate::core::{DEFAULT_BANDWIDTH_RATE_PER_MBPS, DEFAULT_STORAGE_RATE_PER_TB, DEFAULT_VM_RATE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the SMTP password from the config file
pub const SMTP_PASSWORD_ENV: &str = "CLOUDCOST_SMTP_PASSWORD";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub company: CompanyConfig,
    #[serde(default)]
    pub email: EmailConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("cloudcost-quote");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from disk, writing the defaults on first run
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
            return Ok(config);
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config {}: {}", path.display(), e)))?;

        config.apply_env_overrides();

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(password) = std::env::var(SMTP_PASSWORD_ENV) {
            if !password.is_empty() {
                self.email.password = password;
            }
        }
    }

    /// Write configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "fr"
    #[serde(default = "default_language")]
    pub language: String,
    /// Directory where generated quote PDFs are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_language() -> String { "auto".to_string() }
fn default_output_dir() -> PathBuf { PathBuf::from(".") }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            output_dir: default_output_dir(),
        }
    }
}

/// Pricing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Currency symbol printed in front of amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// CSV export of the channel partner price sheet
    #[serde(default = "default_price_sheet_path")]
    pub price_sheet_path: PathBuf,
    /// Zero-based line index of the header row in the sheet
    #[serde(default = "default_header_row")]
    pub header_row: usize,
    /// Fallback VM rate
    #[serde(default = "default_vm_rate")]
    pub vm_rate: f64,
    /// Fallback storage rate per TB
    #[serde(default = "default_storage_rate")]
    pub storage_rate_per_tb: f64,
    /// Fallback bandwidth rate per Mbps
    #[serde(default = "default_bandwidth_rate")]
    pub bandwidth_rate_per_mbps: f64,
}

fn default_currency_symbol() -> String { "R".to_string() }
fn default_price_sheet_path() -> PathBuf { PathBuf::from("assets").join("price_sheet.csv") }
fn default_header_row() -> usize { 4 }
fn default_vm_rate() -> f64 { DEFAULT_VM_RATE }
fn default_storage_rate() -> f64 { DEFAULT_STORAGE_RATE_PER_TB }
fn default_bandwidth_rate() -> f64 { DEFAULT_BANDWIDTH_RATE_PER_MBPS }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            price_sheet_path: default_price_sheet_path(),
            header_row: default_header_row(),
            vm_rate: default_vm_rate(),
            storage_rate_per_tb: default_storage_rate(),
            bandwidth_rate_per_mbps: default_bandwidth_rate(),
        }
    }
}

impl PricingConfig {
    /// Fallback rates used when the sheet cannot supply a category.
    ///
    /// A configured fallback that is itself negative or non-finite is
    /// replaced by the built-in default.
    pub fn default_rates(&self) -> RateTable {
        let sane = |v: f64, builtin: f64| if v.is_finite() && v >= 0.0 { v } else { builtin };
        RateTable::new(
            sane(self.vm_rate, DEFAULT_VM_RATE),
            sane(self.storage_rate_per_tb, DEFAULT_STORAGE_RATE_PER_TB),
            sane(self.bandwidth_rate_per_mbps, DEFAULT_BANDWIDTH_RATE_PER_MBPS),
        )
    }
}

/// Provider details printed on every quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyConfig {
    #[serde(default = "default_company_name")]
    pub name: String,
    #[serde(default = "default_company_phone")]
    pub phone: String,
    #[serde(default = "default_company_email")]
    pub email: String,
    #[serde(default = "default_company_website")]
    pub website: String,
    #[serde(default = "default_company_address")]
    pub address: String,
}

fn default_company_name() -> String { "LekaLink (Pty) Ltd".to_string() }
fn default_company_phone() -> String { "+27 010 822 7259".to_string() }
fn default_company_email() -> String { "sales@lekalink.co.za".to_string() }
fn default_company_website() -> String { "www.lekalink.co.za".to_string() }
fn default_company_address() -> String { "89 Bute Rd, Sandown, Sandton, Gauteng, 2196".to_string() }

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: default_company_name(),
            phone: default_company_phone(),
            email: default_company_email(),
            website: default_company_website(),
            address: default_company_address(),
        }
    }
}

/// Outbound sales notification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Send leads to the sales inbox
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_smtp_server")]
    pub smtp_server: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP login, usually the sending mailbox
    #[serde(default)]
    pub username: String,
    /// SMTP password or app password
    #[serde(default)]
    pub password: String,
    /// Sender address; falls back to `username` when empty
    #[serde(default)]
    pub from: String,
    /// Sales inbox receiving leads
    #[serde(default = "default_sales_to")]
    pub to: String,
    /// Additional recipients copied on every lead
    #[serde(default)]
    pub cc: Vec<String>,
}

fn default_smtp_server() -> String { "smtp.gmail.com".to_string() }
fn default_smtp_port() -> u16 { 587 }
fn default_sales_to() -> String { "sales@lekalink.co.za".to_string() }

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_server: default_smtp_server(),
            smtp_port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            from: String::new(),
            to: default_sales_to(),
            cc: Vec::new(),
        }
    }
}

impl EmailConfig {
    /// Address used in the From header
    pub fn sender(&self) -> &str {
        if self.from.is_empty() {
            &self.username
        } else {
            &self.from
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.pricing.header_row, 4);
        assert_eq!(config.pricing.currency_symbol, "R");
        assert_eq!(config.pricing.default_rates(), RateTable::default());
        assert!(!config.email.enabled);
        assert_eq!(config.email.smtp_port, 587);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [pricing]
            vm_rate = 900.0

            [email]
            enabled = true
            username = "leads@example.com"
            cc = ["manager@example.com"]
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.vm_rate, 900.0);
        assert_eq!(config.pricing.storage_rate_per_tb, DEFAULT_STORAGE_RATE_PER_TB);
        assert!(config.email.enabled);
        assert_eq!(config.email.sender(), "leads@example.com");
        assert_eq!(config.email.cc, vec!["manager@example.com".to_string()]);
    }

    #[test]
    fn test_invalid_fallback_rate_uses_builtin() {
        let mut pricing = PricingConfig::default();
        pricing.bandwidth_rate_per_mbps = -1.0;
        pricing.vm_rate = f64::NAN;

        let rates = pricing.default_rates();
        assert_eq!(rates.vm_rate, DEFAULT_VM_RATE);
        assert_eq!(rates.bandwidth_rate_per_mbps, DEFAULT_BANDWIDTH_RATE_PER_MBPS);
    }

    #[test]
    fn test_save_and_load_from_file() {
        let path = std::env::temp_dir().join(format!("cloudcost-config-{}.toml", std::process::id()));
        let mut config = Config::default();
        config.general.language = "fr".to_string();
        config.pricing.header_row = 2;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.general.language, "fr");
        assert_eq!(loaded.pricing.header_row, 2);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let path = std::env::temp_dir().join(format!("cloudcost-bad-{}.toml", std::process::id()));
        fs::write(&path, "[pricing\nvm_rate = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let _ = fs::remove_file(&path);
    }
}
