//! Sales lead notification
//!
//! Every accepted quote is mailed to the sales inbox with the PDF attached.
//! Delivery problems never invalidate the quote itself; callers get a
//! success flag and the failure is logged.

use crate::core::{EmailConfig, Error, Result};
use crate::quote::{format_currency, QuoteRecord};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

/// Something that can deliver a lead to the sales team
pub trait SalesNotifier {
    /// Deliver the quote and its PDF
    fn notify(&self, record: &QuoteRecord, pdf: &[u8]) -> Result<()>;
}

/// Deliver a lead, reporting success as a flag
pub fn notify_sales(notifier: &dyn SalesNotifier, record: &QuoteRecord, pdf: &[u8]) -> bool {
    match notifier.notify(record, pdf) {
        Ok(()) => {
            log::info!("Lead for {} sent to sales", record.lead.contact.company_name);
            true
        }
        Err(e) => {
            log::error!("Failed to send email notification: {}", e);
            false
        }
    }
}

/// SMTP notifier using STARTTLS and password authentication
pub struct SmtpNotifier {
    config: EmailConfig,
    currency_symbol: String,
}

impl SmtpNotifier {
    pub fn new(config: &EmailConfig, currency_symbol: &str) -> Self {
        Self {
            config: config.clone(),
            currency_symbol: currency_symbol.to_string(),
        }
    }

    /// Build the lead email with the PDF attached
    pub fn build_message(&self, record: &QuoteRecord, pdf: &[u8]) -> Result<Message> {
        let from = parse_mailbox(self.config.sender())?;
        let to = parse_mailbox(&self.config.to)?;

        let mut builder = Message::builder()
            .from(from)
            .to(to)
            .subject(format!("New Calculator Lead: {}", record.lead.contact.company_name));
        for cc in &self.config.cc {
            builder = builder.cc(parse_mailbox(cc)?);
        }

        let pdf_type = ContentType::parse("application/pdf").map_err(|e| Error::Email(e.to_string()))?;
        let body = MultiPart::mixed()
            .singlepart(SinglePart::plain(lead_summary(record, &self.currency_symbol)))
            .singlepart(Attachment::new(record.file_name()).body(pdf.to_vec(), pdf_type));

        builder
            .multipart(body)
            .map_err(|e| Error::Email(e.to_string()))
    }
}

impl SalesNotifier for SmtpNotifier {
    fn notify(&self, record: &QuoteRecord, pdf: &[u8]) -> Result<()> {
        let message = self.build_message(record, pdf)?;

        let mailer = SmtpTransport::starttls_relay(&self.config.smtp_server)
            .map_err(|e| Error::Email(e.to_string()))?
            .port(self.config.smtp_port)
            .credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ))
            .build();

        mailer
            .send(&message)
            .map_err(|e| Error::Email(e.to_string()))?;

        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox> {
    address
        .parse()
        .map_err(|e| Error::Email(format!("invalid address '{}': {}", address, e)))
}

/// Plain-text lead summary for the sales team
pub fn lead_summary(record: &QuoteRecord, currency_symbol: &str) -> String {
    let contact = &record.lead.contact;
    let usage = &record.lead.usage;
    let result = &record.result;
    let money = |amount: f64| format_currency(currency_symbol, amount);

    format!(
        "NEW CALCULATOR LEAD GENERATED
=============================

COMPANY INFORMATION:
Company: {company}
Contact: {contact}
Job Title: {job_title}
Email: {email}
Phone: {phone}

CURRENT INFRASTRUCTURE:
Virtual Machines: {vms}
Storage: {storage} TB
Bandwidth: {bandwidth} Mbps
Current Monthly Cost: {current}

ESTIMATE:
Estimated Monthly Cost: {estimate}
Monthly Savings: {savings}
Percentage Savings: {percentage:.1}%

FOLLOW-UP ACTION REQUIRED:
Contact {contact} at {email} within 24 hours.

Generated: {generated}

The customer's quote PDF is attached to this email.
",
        company = contact.company_name,
        contact = contact.contact_name,
        job_title = contact.job_title,
        email = contact.email,
        phone = contact.phone,
        vms = usage.vms,
        storage = usage.storage_tb,
        bandwidth = usage.bandwidth_mbps,
        current = money(usage.current_monthly_cost),
        estimate = money(result.estimated_cost),
        savings = money(result.monthly_savings),
        percentage = result.percentage_savings,
        generated = record.generated_at.format("%Y-%m-%d %H:%M:%S"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ContactDetails, Lead, RateTable, UsageInput};
    use chrono::{Local, TimeZone};
    use std::cell::RefCell;

    fn record() -> QuoteRecord {
        let lead = Lead {
            contact: ContactDetails {
                company_name: "Acme Mining".to_string(),
                contact_name: "Thandi Nkosi".to_string(),
                job_title: "CTO".to_string(),
                email: "thandi@acme.co.za".to_string(),
                phone: "011 555 0100".to_string(),
            },
            usage: UsageInput {
                vms: 10,
                storage_tb: 2.0,
                bandwidth_mbps: 100.0,
                current_monthly_cost: 5000.0,
            },
        };
        let at = Local.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        QuoteRecord::at(lead, &RateTable::default(), at)
    }

    fn email_config() -> EmailConfig {
        EmailConfig {
            enabled: true,
            username: "leads@example.com".to_string(),
            to: "sales@example.com".to_string(),
            cc: vec!["manager@example.com".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_lead_summary_contents() {
        let summary = lead_summary(&record(), "R");

        assert!(summary.contains("Company: Acme Mining"));
        assert!(summary.contains("Storage: 2 TB"));
        assert!(summary.contains("Current Monthly Cost: R5,000.00"));
        assert!(summary.contains("Estimated Monthly Cost: R11,134.30"));
        assert!(summary.contains("Monthly Savings: -R6,134.30"));
        assert!(summary.contains("Percentage Savings: -122.7%"));
        assert!(summary.contains("Contact Thandi Nkosi at thandi@acme.co.za within 24 hours."));
        assert!(summary.contains("Generated: 2025-03-14 09:30:00"));
    }

    #[test]
    fn test_build_message_headers() {
        let notifier = SmtpNotifier::new(&email_config(), "R");
        let message = notifier.build_message(&record(), b"%PDF-1.3").unwrap();
        let raw = String::from_utf8_lossy(&message.formatted()).to_string();

        assert!(raw.contains("Subject: New Calculator Lead: Acme Mining"));
        assert!(raw.contains("From: leads@example.com"));
        assert!(raw.contains("To: sales@example.com"));
        assert!(raw.contains("Cc: manager@example.com"));
        assert!(raw.contains("Cloud_Quote_Acme_Mining.pdf"));
    }

    #[test]
    fn test_invalid_recipient_is_error() {
        let mut config = email_config();
        config.to = "not an address".to_string();
        let notifier = SmtpNotifier::new(&config, "R");

        assert!(matches!(notifier.build_message(&record(), b""), Err(Error::Email(_))));
    }

    struct RecordingNotifier {
        fail: bool,
        sent: RefCell<Vec<(String, usize)>>,
    }

    impl SalesNotifier for RecordingNotifier {
        fn notify(&self, record: &QuoteRecord, pdf: &[u8]) -> Result<()> {
            if self.fail {
                return Err(Error::Email("connection refused".to_string()));
            }
            self.sent
                .borrow_mut()
                .push((record.lead.contact.company_name.clone(), pdf.len()));
            Ok(())
        }
    }

    #[test]
    fn test_notify_sales_reports_outcome() {
        let ok = RecordingNotifier { fail: false, sent: RefCell::new(Vec::new()) };
        assert!(notify_sales(&ok, &record(), b"pdf"));
        assert_eq!(ok.sent.borrow().as_slice(), &[("Acme Mining".to_string(), 3)]);

        let failing = RecordingNotifier { fail: true, sent: RefCell::new(Vec::new()) };
        assert!(!notify_sales(&failing, &record(), b"pdf"));
    }
}
