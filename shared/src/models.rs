use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LoadError;

/// Client identifier as handed over by the host page or the server.
///
/// The panel never interprets it; it only substitutes it into the detail URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawClientId", into = "String")]
pub struct ClientId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawClientId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawClientId> for ClientId {
    fn from(raw: RawClientId) -> Self {
        match raw {
            RawClientId::Text(s) => ClientId(s),
            RawClientId::Signed(n) => ClientId(n.to_string()),
            RawClientId::Unsigned(n) => ClientId(n.to_string()),
        }
    }
}

impl From<ClientId> for String {
    fn from(id: ClientId) -> Self {
        id.0
    }
}

impl ClientId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientId {
    fn from(s: &str) -> Self {
        ClientId(s.to_string())
    }
}

impl From<String> for ClientId {
    fn from(s: String) -> Self {
        ClientId(s)
    }
}

impl From<u64> for ClientId {
    fn from(n: u64) -> Self {
        ClientId(n.to_string())
    }
}

impl From<i64> for ClientId {
    fn from(n: i64) -> Self {
        ClientId(n.to_string())
    }
}

/// Detail payload returned by `/client/{id}/details`.
///
/// Every field is optional; the server omits or nulls whatever it does not
/// know, and the view layer substitutes placeholders. Text fields also take
/// numbers and counts also take numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientDetail {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub tax_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub address: Option<String>,
    pub total_invoiced: Option<Decimal>,
    pub total_paid: Option<Decimal>,
    pub outstanding: Option<Decimal>,
    #[serde(deserialize_with = "lenient::count")]
    pub invoice_count: Option<u64>,
    pub all_invoices: Option<Vec<InvoiceLine>>,
    pub all_payments: Option<Vec<PaymentLine>>,
    // Reduced shape served by the older endpoint: number, description, amount, status.
    pub recent_invoices: Option<Vec<InvoiceLine>>,
}

impl ClientDetail {
    /// Only a JSON object is a detail record; arrays, scalars and markup are rejected.
    pub fn from_json(body: &str) -> Result<Self, LoadError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))?;
        if !value.is_object() {
            return Err(LoadError::Parse(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| LoadError::Parse(e.to_string()))
    }

    pub fn invoices(&self) -> &[InvoiceLine] {
        self.all_invoices
            .as_deref()
            .or(self.recent_invoices.as_deref())
            .unwrap_or(&[])
    }

    pub fn payments(&self) -> &[PaymentLine] {
        self.all_payments.as_deref().unwrap_or(&[])
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceLine {
    #[serde(alias = "invoice_number", deserialize_with = "lenient::text")]
    pub invoice_no: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub due_date: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    #[serde(alias = "paid_amount")]
    pub paid: Option<Decimal>,
    #[serde(alias = "remaining_amount", alias = "balance")]
    pub remaining: Option<Decimal>,
    #[serde(deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub payment_type: Option<String>, // full, installment
    #[serde(deserialize_with = "lenient::count")]
    pub installments: Option<u32>,
    pub installment_amount: Option<Decimal>,
    #[serde(deserialize_with = "lenient::count")]
    pub installments_paid: Option<u32>,
}

impl InvoiceLine {
    pub fn is_installment(&self) -> bool {
        self.payment_type
            .as_deref()
            .map(|t| t.to_lowercase().contains("install"))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentLine {
    #[serde(alias = "payment_date", deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(alias = "invoice_number", deserialize_with = "lenient::text")]
    pub invoice_no: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub method: Option<String>,
    pub amount: Option<Decimal>,
    #[serde(deserialize_with = "lenient::count")]
    pub installment_number: Option<u32>,
    #[serde(deserialize_with = "lenient::text")]
    pub status: Option<String>,
}

/// One row of the client table, as embedded by the host page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRow {
    pub id: ClientId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tax_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: Option<String>,
    #[serde(default)]
    pub details_url: Option<String>,
}

impl ClientRow {
    /// Every displayed cell joined by spaces; the filter's fallback haystack.
    pub fn full_text(&self) -> String {
        let cells = [
            self.name.as_deref(),
            self.company.as_deref(),
            self.email.as_deref(),
            self.phone.as_deref(),
            self.tax_id.as_deref(),
            self.address.as_deref(),
        ];
        cells.iter().flatten().copied().collect::<Vec<_>>().join(" ")
    }
}

/// Field decoders that accept whatever scalar the server happened to send.
mod lenient {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawText {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Flag(bool),
    }

    /// Strings, numbers and booleans all become display text.
    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawText>::deserialize(deserializer)?;
        Ok(raw.map(|raw| match raw {
            RawText::Text(s) => s,
            RawText::Unsigned(n) => n.to_string(),
            RawText::Signed(n) => n.to_string(),
            RawText::Float(n) => n.to_string(),
            RawText::Flag(b) => b.to_string(),
        }))
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCount {
        Unsigned(u64),
        Float(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    /// Non-negative whole numbers, given as numbers or numeric strings.
    /// Anything else (negative, fractional, out of range, prose) reads as absent.
    pub fn count<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<u64>,
    {
        let raw = Option::<RawCount>::deserialize(deserializer)?;
        let value = match raw {
            Some(RawCount::Unsigned(n)) => Some(n),
            Some(RawCount::Float(f)) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
                Some(f as u64)
            }
            Some(RawCount::Text(s)) => s.trim().parse::<u64>().ok(),
            _ => None,
        };
        Ok(value.and_then(|n| T::try_from(n).ok()))
    }
}
