use crate::format::{CurrencyFormat, DEFAULT_CURRENCY_SYMBOL, DEFAULT_PLACEHOLDER};
use crate::models::ClientId;

pub const DEFAULT_DETAIL_URL_TEMPLATE: &str = "/client/{id}/details";
const ID_TOKEN: &str = "{id}";

/// Endpoint template and every user-facing string of the client panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub detail_url_template: String,
    pub currency_symbol: String,
    pub placeholder: String,
    pub loading_message: String,
    pub error_message: String,
    pub no_invoices_message: String,
    pub no_payments_message: String,
    pub no_description: String,
    pub no_results_message: String,
    /// Column count of the client table, used by the "no results" row.
    pub table_columns: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            detail_url_template: DEFAULT_DETAIL_URL_TEMPLATE.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            loading_message: "Loading client details...".to_string(),
            error_message: "Unable to load client details. Please try again.".to_string(),
            no_invoices_message: "No invoices found.".to_string(),
            no_payments_message: "No payments recorded.".to_string(),
            no_description: "No description".to_string(),
            no_results_message: "No clients found".to_string(),
            table_columns: 7,
        }
    }
}

impl PanelConfig {
    /// Builds a config from a keyed lookup (host element `data-*` attributes,
    /// environment, ...). Missing or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str, fallback: String| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(fallback)
        };

        Self {
            detail_url_template: get("detail-url", defaults.detail_url_template),
            currency_symbol: get("currency-symbol", defaults.currency_symbol),
            placeholder: get("placeholder", defaults.placeholder),
            loading_message: get("loading-message", defaults.loading_message),
            error_message: get("error-message", defaults.error_message),
            no_invoices_message: get("no-invoices-message", defaults.no_invoices_message),
            no_payments_message: get("no-payments-message", defaults.no_payments_message),
            no_description: get("no-description", defaults.no_description),
            no_results_message: get("no-results-message", defaults.no_results_message),
            table_columns: lookup("table-columns")
                .and_then(|v| v.trim().parse().ok())
                .filter(|n: &u32| *n > 0)
                .unwrap_or(defaults.table_columns),
        }
    }

    pub fn currency(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency_symbol.clone())
    }

    /// An explicitly supplied, non-blank address wins over the template.
    pub fn detail_url(&self, id: &ClientId, explicit: Option<&str>) -> String {
        match explicit.map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => self.detail_url_template.replace(ID_TOKEN, id.as_str()),
        }
    }
}
