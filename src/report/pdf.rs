//! PDF quote rendering
//!
//! The quote is laid out as a list of styled lines first and then drawn onto
//! a single Letter page with the built-in Helvetica fonts, so no font files
//! need to ship with the binary.

use crate::core::{CompanyConfig, Error, Result};
use crate::i18n::I18n;
use crate::quote::{format_currency, QuoteRecord};
use printpdf::{BuiltinFont, Color, Mm, PdfDocument, Rgb};

const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const INCH_MM: f32 = 25.4;

/// Heading colour, #511281
const BRAND_PURPLE: (f32, f32, f32) = (0.3176, 0.0706, 0.5059);
const SAVINGS_GREEN: (f32, f32, f32) = (0.08, 0.64, 0.29);
const INCREASE_RED: (f32, f32, f32) = (0.91, 0.30, 0.24);
const BLACK: (f32, f32, f32) = (0.0, 0.0, 0.0);

/// Visual style of a line on the quote
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineStyle {
    Title,
    Heading,
    Body,
    Emphasis,
    Savings,
    Increase,
}

impl LineStyle {
    fn font_size(&self) -> f32 {
        match self {
            LineStyle::Title => 24.0,
            LineStyle::Heading => 14.0,
            _ => 12.0,
        }
    }

    fn bold(&self) -> bool {
        matches!(self, LineStyle::Title | LineStyle::Heading | LineStyle::Emphasis)
    }

    fn color(&self) -> (f32, f32, f32) {
        match self {
            LineStyle::Title | LineStyle::Heading => BRAND_PURPLE,
            LineStyle::Savings => SAVINGS_GREEN,
            LineStyle::Increase => INCREASE_RED,
            _ => BLACK,
        }
    }
}

/// One line of the quote with the vertical gap that precedes it, in mm
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteLine {
    pub text: String,
    pub style: LineStyle,
    pub gap_mm: f32,
}

/// Renders quote records to PDF
pub struct PdfRenderer<'a> {
    company: &'a CompanyConfig,
    currency_symbol: &'a str,
    i18n: &'a I18n,
}

impl<'a> PdfRenderer<'a> {
    pub fn new(company: &'a CompanyConfig, currency_symbol: &'a str, i18n: &'a I18n) -> Self {
        Self {
            company,
            currency_symbol,
            i18n,
        }
    }

    /// Lay out the quote as styled lines, top to bottom
    pub fn layout(&self, record: &QuoteRecord) -> Vec<QuoteLine> {
        let t = |key: &str| self.i18n.get(key);
        let money = |amount: f64| format_currency(self.currency_symbol, amount);
        let contact = &record.lead.contact;
        let section_gap = 0.5 * INCH_MM;
        let heading_gap = 0.3 * INCH_MM;
        let line_gap = 0.25 * INCH_MM;
        let footer_gap = 0.2 * INCH_MM;

        let mut lines = Vec::new();
        let mut push = |text: String, style: LineStyle, gap_mm: f32| {
            lines.push(QuoteLine { text, style, gap_mm });
        };

        push(format!("{} - {}", self.company.name, t("pdf.title")), LineStyle::Title, 0.0);

        push(t("pdf.client_info"), LineStyle::Heading, section_gap);
        push(format!("{}: {}", t("pdf.company"), contact.company_name), LineStyle::Body, heading_gap);
        push(
            format!("{}: {} ({})", t("pdf.contact"), contact.contact_name, contact.job_title),
            LineStyle::Body,
            line_gap,
        );
        push(format!("{}: {}", t("pdf.email"), contact.email), LineStyle::Body, line_gap);
        push(format!("{}: {}", t("pdf.phone"), contact.phone), LineStyle::Body, line_gap);

        push(t("pdf.current_costs"), LineStyle::Heading, section_gap);
        push(
            format!("{}: {}", t("pdf.monthly_cost"), money(record.lead.usage.current_monthly_cost)),
            LineStyle::Body,
            heading_gap,
        );

        push(t("pdf.estimated_costs"), LineStyle::Heading, section_gap);
        push(
            format!("{}: {}", t("pdf.virtual_machines"), money(record.line_costs.vms)),
            LineStyle::Body,
            heading_gap,
        );
        push(format!("{}: {}", t("pdf.storage"), money(record.line_costs.storage)), LineStyle::Body, line_gap);
        push(format!("{}: {}", t("pdf.bandwidth"), money(record.line_costs.bandwidth)), LineStyle::Body, line_gap);
        push(
            format!("{}: {}", t("pdf.total_estimate"), money(record.result.estimated_cost)),
            LineStyle::Emphasis,
            line_gap,
        );

        let outcome = record.outcome();
        let (monthly_key, percentage_key) = outcome.label_keys();
        let (monthly, percentage) = outcome.amounts();
        let style = if outcome.is_saving() { LineStyle::Savings } else { LineStyle::Increase };
        push(t("pdf.potential_savings"), LineStyle::Heading, section_gap);
        push(format!("{}: {}", t(monthly_key), money(monthly)), style, heading_gap);
        push(format!("{}: {:.2}%", t(percentage_key), percentage), style, line_gap);

        push(t("pdf.next_steps"), LineStyle::Heading, section_gap);
        push(t("pdf.follow_up"), LineStyle::Body, heading_gap);
        push(self.company.name.clone(), LineStyle::Body, heading_gap);
        push(format!("{}: {}", t("pdf.phone"), self.company.phone), LineStyle::Body, footer_gap);
        push(format!("{}: {}", t("pdf.email"), self.company.email), LineStyle::Body, footer_gap);
        push(format!("{}: {}", t("pdf.website"), self.company.website), LineStyle::Body, footer_gap);
        push(format!("{}: {}", t("pdf.address"), self.company.address), LineStyle::Body, footer_gap);

        lines
    }

    /// Render the quote to PDF bytes
    pub fn render(&self, record: &QuoteRecord) -> Result<Vec<u8>> {
        let title = format!("{} - {}", self.company.name, self.i18n.get("pdf.title"));
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Quote");

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| Error::Document(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| Error::Document(e.to_string()))?;

        let canvas = doc.get_page(page).get_layer(layer);
        let mut y = PAGE_HEIGHT_MM - 1.5 * INCH_MM;

        for line in self.layout(record) {
            y -= line.gap_mm;
            let (r, g, b) = line.style.color();
            canvas.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
            let font = if line.style.bold() { &bold } else { &regular };
            canvas.use_text(line.text, line.style.font_size(), Mm(INCH_MM), Mm(y), font);
        }

        doc.save_to_bytes().map_err(|e| Error::Document(e.to_string()))
    }
}
