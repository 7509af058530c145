//! Common types used across the application

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default monthly rate per virtual machine
pub const DEFAULT_VM_RATE: f64 = 864.35;
/// Default monthly rate per terabyte of storage
pub const DEFAULT_STORAGE_RATE_PER_TB: f64 = 870.40;
/// Default monthly rate per Mbps of bandwidth
pub const DEFAULT_BANDWIDTH_RATE_PER_MBPS: f64 = 7.50;

/// Effective unit rates used to price a quote.
///
/// Built once at startup and passed by reference afterwards. Every field is
/// finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Currency per virtual machine per month
    pub vm_rate: f64,
    /// Currency per terabyte per month
    pub storage_rate_per_tb: f64,
    /// Currency per Mbps per month
    pub bandwidth_rate_per_mbps: f64,
}

impl RateTable {
    pub fn new(vm_rate: f64, storage_rate_per_tb: f64, bandwidth_rate_per_mbps: f64) -> Self {
        Self {
            vm_rate,
            storage_rate_per_tb,
            bandwidth_rate_per_mbps,
        }
    }

    /// Rate for a single category
    pub fn get(&self, category: RateCategory) -> f64 {
        match category {
            RateCategory::Vm => self.vm_rate,
            RateCategory::Storage => self.storage_rate_per_tb,
            RateCategory::Bandwidth => self.bandwidth_rate_per_mbps,
        }
    }

    pub fn set(&mut self, category: RateCategory, rate: f64) {
        match category {
            RateCategory::Vm => self.vm_rate = rate,
            RateCategory::Storage => self.storage_rate_per_tb = rate,
            RateCategory::Bandwidth => self.bandwidth_rate_per_mbps = rate,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_VM_RATE,
            DEFAULT_STORAGE_RATE_PER_TB,
            DEFAULT_BANDWIDTH_RATE_PER_MBPS,
        )
    }
}

/// Priced resource categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateCategory {
    Vm,
    Storage,
    Bandwidth,
}

impl RateCategory {
    pub const ALL: [RateCategory; 3] = [RateCategory::Vm, RateCategory::Storage, RateCategory::Bandwidth];

    /// Description keywords that identify this category in a price sheet
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            RateCategory::Vm => &["Virtual", "Data Centre", "VDC", "VM", "Resource Pool", "Allocation"],
            RateCategory::Storage => &["Storage", "NVME", "SSD", "vStorage"],
            RateCategory::Bandwidth => &["Bandwidth", "Internet", "Connectivity", "Mbps", "Network"],
        }
    }
}

impl fmt::Display for RateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RateCategory::Vm => "VM",
            RateCategory::Storage => "Storage",
            RateCategory::Bandwidth => "Bandwidth",
        };
        f.write_str(name)
    }
}

/// Current infrastructure usage entered by the prospect
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageInput {
    /// Number of virtual machines
    pub vms: u32,
    /// Storage in terabytes
    pub storage_tb: f64,
    /// Bandwidth in Mbps
    pub bandwidth_mbps: f64,
    /// What the prospect pays today per month
    pub current_monthly_cost: f64,
}

/// Outcome of pricing a usage profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Estimated monthly cost under our rates
    pub estimated_cost: f64,
    /// Current cost minus estimate; negative means an increase
    pub monthly_savings: f64,
    /// Savings relative to current cost, in percent; 0 when current cost is 0
    pub percentage_savings: f64,
}

/// Contact details of the prospect
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub company_name: String,
    pub contact_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
}

/// A prospect's submission: who they are and what they run today
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub contact: ContactDetails,
    pub usage: UsageInput,
}
