//! Quote output: the PDF handed to the prospect and the lead sent to sales

mod email;
mod pdf;

pub use email::{lead_summary, notify_sales, SalesNotifier, SmtpNotifier};
pub use pdf::{LineStyle, PdfRenderer, QuoteLine};

use crate::core::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Write a rendered quote into `dir`, creating it if needed
pub fn save_pdf(dir: &Path, file_name: &str, pdf: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, pdf)?;
    log::info!("Quote written to {}", path.display());
    Ok(path)
}
