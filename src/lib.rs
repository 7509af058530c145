//! CloudCost Quote library
//!
//! This module exposes the core functionality for use in tests
//! and as a library.

pub mod core;
pub mod i18n;
pub mod lead;
pub mod pricing;
pub mod quote;
pub mod report;
