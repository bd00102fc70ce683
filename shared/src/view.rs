//! View-model for the client detail modal.
//!
//! Everything the modal shows is computed here as plain strings, so the
//! component only lays them out and never touches the raw payload.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::badge::BadgeStyle;
use crate::config::PanelConfig;
use crate::format::{CurrencyFormat, format_count, format_date, text_or_placeholder};
use crate::models::{ClientDetail, InvoiceLine, PaymentLine};

/// Invoice table: number, due date, description, amount, paid, remaining, status.
pub const INVOICE_COLUMNS: u32 = 7;
/// Payment table: date, invoice, method, amount, installment, status.
pub const PAYMENT_COLUMNS: u32 = 6;

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody<R> {
    Rows(Vec<R>),
    /// Single synthetic row spanning the whole table.
    Placeholder { message: String, colspan: u32 },
}

impl<R> TableBody<R> {
    fn from_rows(rows: Vec<R>, message: &str, colspan: u32) -> Self {
        if rows.is_empty() {
            TableBody::Placeholder {
                message: message.to_string(),
                colspan,
            }
        } else {
            TableBody::Rows(rows)
        }
    }

    /// Number of `<tr>` elements the body renders to.
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Rows(rows) => rows.len(),
            TableBody::Placeholder { .. } => 1,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, TableBody::Placeholder { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRow {
    pub invoice_no: String,
    pub due_date: String,
    pub description: String,
    pub amount: String,
    pub paid: String,
    pub remaining: String,
    pub status: String,
    pub badge: BadgeStyle,
    pub progress_percent: Option<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRow {
    pub date: String,
    pub invoice_no: String,
    pub method: String,
    pub amount: String,
    pub installment: String,
    pub status: String,
    pub badge: BadgeStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientDetailView {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub tax_id: String,
    pub address: String,
    pub total_invoiced: String,
    pub total_paid: String,
    pub outstanding: String,
    pub invoice_count: String,
    pub invoices: TableBody<InvoiceRow>,
    pub payments: TableBody<PaymentRow>,
}

impl ClientDetailView {
    pub fn build(detail: &ClientDetail, config: &PanelConfig) -> Self {
        let currency = config.currency();
        let dash = config.placeholder.as_str();
        let text = |value: &Option<String>| text_or_placeholder(value.as_deref(), dash);

        let invoices = detail
            .invoices()
            .iter()
            .map(|inv| invoice_row(inv, &currency, config))
            .collect();
        let payments = detail
            .payments()
            .iter()
            .map(|pay| payment_row(pay, &currency, dash))
            .collect();

        Self {
            name: text(&detail.name),
            company: text(&detail.company),
            email: text(&detail.email),
            phone: text(&detail.phone),
            tax_id: text(&detail.tax_id),
            address: text(&detail.address),
            total_invoiced: currency.format_opt(detail.total_invoiced),
            total_paid: currency.format_opt(detail.total_paid),
            outstanding: currency.format_opt(detail.outstanding),
            invoice_count: format_count(detail.invoice_count, dash),
            invoices: TableBody::from_rows(invoices, &config.no_invoices_message, INVOICE_COLUMNS),
            payments: TableBody::from_rows(payments, &config.no_payments_message, PAYMENT_COLUMNS),
        }
    }
}

fn invoice_row(inv: &InvoiceLine, currency: &CurrencyFormat, config: &PanelConfig) -> InvoiceRow {
    let dash = config.placeholder.as_str();
    let amount = inv.amount.unwrap_or(Decimal::ZERO);
    let paid = inv.paid.unwrap_or(Decimal::ZERO);
    // Derived balance is left blank when it does not fit in a Decimal.
    let remaining = inv.remaining.or_else(|| amount.checked_sub(paid));

    InvoiceRow {
        invoice_no: text_or_placeholder(inv.invoice_no.as_deref(), dash),
        due_date: format_date(inv.due_date.as_deref(), dash),
        description: text_or_placeholder(inv.description.as_deref(), &config.no_description),
        amount: amount_text(inv, amount, currency),
        paid: currency.format(paid),
        remaining: remaining
            .map(|r| currency.format(r))
            .unwrap_or_else(|| dash.to_string()),
        status: text_or_placeholder(inv.status.as_deref(), dash),
        badge: BadgeStyle::for_status(inv.status.as_deref()),
        progress_percent: installment_progress(inv),
    }
}

/// Installment plans show `base (unit × count)`; everything else the base amount.
fn amount_text(inv: &InvoiceLine, amount: Decimal, currency: &CurrencyFormat) -> String {
    let base = currency.format(amount);
    let count = match inv.installments {
        Some(n) if inv.is_installment() && n > 0 => n,
        _ => return base,
    };
    let unit = inv.installment_amount.unwrap_or_else(|| {
        (amount / Decimal::from(count))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    });
    format!("{} ({} × {})", base, currency.format(unit), count)
}

fn installment_progress(inv: &InvoiceLine) -> Option<u8> {
    if !inv.is_installment() {
        return None;
    }
    let total = inv.installments.filter(|n| *n > 0)?;
    let paid = inv.installments_paid?.min(total);
    Some(((u64::from(paid) * 100) / u64::from(total)) as u8)
}

fn payment_row(pay: &PaymentLine, currency: &CurrencyFormat, dash: &str) -> PaymentRow {
    PaymentRow {
        date: format_date(pay.date.as_deref(), dash),
        invoice_no: text_or_placeholder(pay.invoice_no.as_deref(), dash),
        method: text_or_placeholder(pay.method.as_deref(), dash),
        amount: currency.format_opt(pay.amount),
        installment: pay
            .installment_number
            .map(|n| format!("#{}", n))
            .unwrap_or_else(|| dash.to_string()),
        status: text_or_placeholder(pay.status.as_deref(), dash),
        badge: BadgeStyle::for_status(pay.status.as_deref()),
    }
}
