//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Cloud Cost Calculator".into());
    t.insert("app.tagline".into(), "Estimate your savings when you switch to our cloud services!".into());

    // Usage form
    t.insert("form.usage_heading".into(), "Your Current Cloud Usage".into());
    t.insert("form.vms".into(), "Number of Virtual Machines".into());
    t.insert("form.storage_tb".into(), "Storage (TB)".into());
    t.insert("form.bandwidth_mbps".into(), "Bandwidth (Mbps)".into());
    t.insert("form.current_cost".into(), "Current Monthly Cloud Cost".into());
    t.insert("form.invalid_number".into(), "Please enter a number of zero or more.".into());

    // Contact form
    t.insert("form.contact_heading".into(), "Your Contact Information".into());
    t.insert("form.company_name".into(), "Company Name *".into());
    t.insert("form.contact_name".into(), "Contact Name *".into());
    t.insert("form.job_title".into(), "Job Title *".into());
    t.insert("form.email".into(), "Email Address *".into());
    t.insert("form.phone".into(), "Phone Number *".into());

    // Validation
    t.insert("validation.company_required".into(), "Company Name is required.".into());
    t.insert("validation.contact_required".into(), "Contact Name is required.".into());
    t.insert("validation.job_title_required".into(), "Job Title is required.".into());
    t.insert("validation.email_required".into(), "Email is required.".into());
    t.insert("validation.email_invalid".into(), "Please enter a valid email address.".into());
    t.insert("validation.phone_required".into(), "Phone Number is required.".into());
    t.insert("validation.storage_invalid".into(), "Storage must be zero or more.".into());
    t.insert("validation.bandwidth_invalid".into(), "Bandwidth must be zero or more.".into());
    t.insert("validation.current_cost_invalid".into(), "Current monthly cost must be zero or more.".into());

    // Results
    t.insert("result.heading".into(), "Your Estimated Savings".into());
    t.insert("result.estimated_cost".into(), "Estimated Monthly Cost".into());
    t.insert("result.monthly_savings".into(), "Monthly Savings".into());
    t.insert("result.percentage_savings".into(), "Percentage Savings".into());
    t.insert("result.monthly_increase".into(), "Monthly Increase".into());
    t.insert("result.percentage_increase".into(), "Percentage Increase".into());

    // Rates
    t.insert("rates.heading".into(), "Effective Rates".into());
    t.insert("rates.vm".into(), "Per virtual machine / month".into());
    t.insert("rates.storage".into(), "Per TB storage / month".into());
    t.insert("rates.bandwidth".into(), "Per Mbps bandwidth / month".into());
    t.insert("rates.from_sheet".into(), "price sheet".into());
    t.insert("rates.default".into(), "default".into());

    // Quote document
    t.insert("pdf.title".into(), "Cloud Cost Quote".into());
    t.insert("pdf.client_info".into(), "Client Information:".into());
    t.insert("pdf.company".into(), "Company".into());
    t.insert("pdf.contact".into(), "Contact".into());
    t.insert("pdf.email".into(), "Email".into());
    t.insert("pdf.phone".into(), "Phone".into());
    t.insert("pdf.current_costs".into(), "Current Cloud Costs:".into());
    t.insert("pdf.monthly_cost".into(), "Monthly Cost".into());
    t.insert("pdf.estimated_costs".into(), "Estimated Costs:".into());
    t.insert("pdf.virtual_machines".into(), "Virtual Machines".into());
    t.insert("pdf.storage".into(), "Storage".into());
    t.insert("pdf.bandwidth".into(), "Bandwidth".into());
    t.insert("pdf.total_estimate".into(), "Total Estimated Cost".into());
    t.insert("pdf.potential_savings".into(), "Potential Savings:".into());
    t.insert("pdf.next_steps".into(), "Next Steps:".into());
    t.insert("pdf.follow_up".into(), "Our sales team will contact you within 24 hours to discuss your requirements.".into());
    t.insert("pdf.address".into(), "Address".into());
    t.insert("pdf.website".into(), "Website".into());

    // Submission status
    t.insert("status.pdf_saved".into(), "Quote saved to".into());
    t.insert("status.email_sent".into(), "Quote generated and sent to our sales team! We'll contact you within 24 hours.".into());
    t.insert("status.email_failed".into(), "Quote generated successfully! Our sales team will contact you shortly at:".into());
    t.insert("status.email_disabled".into(), "Quote generated successfully! Please keep the PDF for your records.".into());

    t
}
