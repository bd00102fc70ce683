// Display formatting for the detail panel: money, dates, counts, placeholders.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₱";
pub const DEFAULT_PLACEHOLDER: &str = "-";

const DATE_DISPLAY: &str = "%b %d, %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimals: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            decimals: 2,
        }
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// `₱1,234.50`, `-₱12.00`. Rounds half away from zero.
    pub fn format(&self, amount: Decimal) -> String {
        let mut rounded =
            amount.round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(self.decimals);

        let digits = rounded.abs().to_string();
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (digits.as_str(), None),
        };

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        match frac_part {
            Some(frac) => format!("{}{}{}.{}", sign, self.symbol, group_thousands(int_part), frac),
            None => format!("{}{}{}", sign, self.symbol, group_thousands(int_part)),
        }
    }

    /// Absent amounts count as zero.
    pub fn format_opt(&self, amount: Option<Decimal>) -> String {
        self.format(amount.unwrap_or(Decimal::ZERO))
    }

    /// Reads back a string produced by [`CurrencyFormat::format`].
    pub fn parse(&self, display: &str) -> Option<Decimal> {
        let trimmed = display.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix(self.symbol.as_str()).unwrap_or(rest);
        let plain: String = rest.chars().filter(|c| *c != ',').collect();
        let value = Decimal::from_str(&plain).ok()?;
        Some(if negative { -value } else { value })
    }
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn text_or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => placeholder.to_string(),
    }
}

pub fn format_count(value: Option<u64>, placeholder: &str) -> String {
    value
        .map(|n| n.to_string())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Renders ISO dates and timestamps as `May 01, 2024`; other text passes through.
pub fn format_date(value: Option<&str>, placeholder: &str) -> String {
    let raw = match value.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => return placeholder.to_string(),
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DATE_DISPLAY).to_string();
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.date_naive().format(DATE_DISPLAY).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, pattern) {
            return ts.date().format(DATE_DISPLAY).to_string();
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("100"), "100");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
