//! Lead validation
//!
//! A lead is only priced once every contact field is filled in and the usage
//! figures are sane. All problems are collected so the user sees them at once.

use crate::core::{ContactDetails, Error, Lead, Result, UsageInput};
use serde::Serialize;

/// Contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    CompanyName,
    ContactName,
    JobTitle,
    Email,
    Phone,
}

/// Usage form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageField {
    StorageTb,
    BandwidthMbps,
    CurrentMonthlyCost,
}

/// A single reason a lead was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "field", rename_all = "snake_case")]
pub enum ValidationIssue {
    Required(ContactField),
    InvalidEmail,
    InvalidAmount(UsageField),
}

impl ValidationIssue {
    /// Translation key describing this issue
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationIssue::Required(ContactField::CompanyName) => "validation.company_required",
            ValidationIssue::Required(ContactField::ContactName) => "validation.contact_required",
            ValidationIssue::Required(ContactField::JobTitle) => "validation.job_title_required",
            ValidationIssue::Required(ContactField::Email) => "validation.email_required",
            ValidationIssue::Required(ContactField::Phone) => "validation.phone_required",
            ValidationIssue::InvalidEmail => "validation.email_invalid",
            ValidationIssue::InvalidAmount(UsageField::StorageTb) => "validation.storage_invalid",
            ValidationIssue::InvalidAmount(UsageField::BandwidthMbps) => "validation.bandwidth_invalid",
            ValidationIssue::InvalidAmount(UsageField::CurrentMonthlyCost) => "validation.current_cost_invalid",
        }
    }
}

/// Check that every contact field is present and the email looks like one
pub fn validate_contact(contact: &ContactDetails) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let required = [
        (ContactField::CompanyName, &contact.company_name),
        (ContactField::ContactName, &contact.contact_name),
        (ContactField::JobTitle, &contact.job_title),
        (ContactField::Email, &contact.email),
        (ContactField::Phone, &contact.phone),
    ];

    for (field, value) in required {
        let value = value.trim();
        if value.is_empty() {
            issues.push(ValidationIssue::Required(field));
        } else if field == ContactField::Email && !value.contains('@') {
            issues.push(ValidationIssue::InvalidEmail);
        }
    }

    issues
}

/// Check that usage figures are finite and non-negative
pub fn validate_usage(usage: &UsageInput) -> Vec<ValidationIssue> {
    [
        (UsageField::StorageTb, usage.storage_tb),
        (UsageField::BandwidthMbps, usage.bandwidth_mbps),
        (UsageField::CurrentMonthlyCost, usage.current_monthly_cost),
    ]
    .into_iter()
    .filter(|(_, value)| !(value.is_finite() && *value >= 0.0))
    .map(|(field, _)| ValidationIssue::InvalidAmount(field))
    .collect()
}

/// Validate a whole lead
pub fn validate_lead(lead: &Lead) -> Vec<ValidationIssue> {
    let mut issues = validate_contact(&lead.contact);
    issues.extend(validate_usage(&lead.usage));
    issues
}

/// Validate a lead and return a trimmed copy ready for pricing.
///
/// Fails closed: any issue rejects the lead.
pub fn accept_lead(lead: &Lead) -> Result<Lead> {
    let issues = validate_lead(lead);
    if !issues.is_empty() {
        return Err(Error::Validation(
            issues.iter().map(|i| i.message_key().to_string()).collect(),
        ));
    }

    let c = &lead.contact;
    Ok(Lead {
        contact: ContactDetails {
            company_name: c.company_name.trim().to_string(),
            contact_name: c.contact_name.trim().to_string(),
            job_title: c.job_title.trim().to_string(),
            email: c.email.trim().to_string(),
            phone: c.phone.trim().to_string(),
        },
        usage: lead.usage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactDetails {
        ContactDetails {
            company_name: "Acme Mining".to_string(),
            contact_name: "Thandi Nkosi".to_string(),
            job_title: "CTO".to_string(),
            email: "thandi@acme.co.za".to_string(),
            phone: "+27 11 555 0100".to_string(),
        }
    }

    #[test]
    fn test_complete_contact_passes() {
        assert!(validate_contact(&contact()).is_empty());
    }

    #[test]
    fn test_email_without_at_is_rejected() {
        let mut c = contact();
        c.email = "thandi.acme.co.za".to_string();
        assert_eq!(validate_contact(&c), vec![ValidationIssue::InvalidEmail]);
    }

    #[test]
    fn test_all_missing_fields_are_reported() {
        let issues = validate_contact(&ContactDetails::default());
        assert_eq!(
            issues,
            vec![
                ValidationIssue::Required(ContactField::CompanyName),
                ValidationIssue::Required(ContactField::ContactName),
                ValidationIssue::Required(ContactField::JobTitle),
                ValidationIssue::Required(ContactField::Email),
                ValidationIssue::Required(ContactField::Phone),
            ]
        );
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let mut c = contact();
        c.phone = "   ".to_string();
        assert_eq!(
            validate_contact(&c),
            vec![ValidationIssue::Required(ContactField::Phone)]
        );
    }

    #[test]
    fn test_bad_usage_amounts() {
        let usage = UsageInput {
            vms: 2,
            storage_tb: -1.0,
            bandwidth_mbps: f64::NAN,
            current_monthly_cost: 100.0,
        };
        assert_eq!(
            validate_usage(&usage),
            vec![
                ValidationIssue::InvalidAmount(UsageField::StorageTb),
                ValidationIssue::InvalidAmount(UsageField::BandwidthMbps),
            ]
        );
    }

    #[test]
    fn test_accept_lead_trims_fields() {
        let mut lead = Lead { contact: contact(), usage: UsageInput::default() };
        lead.contact.company_name = "  Acme Mining ".to_string();

        let accepted = accept_lead(&lead).unwrap();
        assert_eq!(accepted.contact.company_name, "Acme Mining");
    }

    #[test]
    fn test_accept_lead_fails_closed() {
        let mut lead = Lead { contact: contact(), usage: UsageInput::default() };
        lead.contact.email = "nobody".to_string();

        match accept_lead(&lead) {
            Err(Error::Validation(keys)) => assert_eq!(keys, vec!["validation.email_invalid".to_string()]),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
