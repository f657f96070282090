//! Currency formatter adapter
//!
//! English-locale formatting: symbol prefix, comma thousands separators and
//! two decimal places. Codes without a known symbol are prefixed with the
//! code itself ("CHF 12.00").

use crate::domain::entities::Money;
use crate::domain::ports::CurrencyFormatter;

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCurrencyFormatter;

impl StandardCurrencyFormatter {
    pub fn new() -> Self {
        Self
    }

    fn symbol(currency_code: &str) -> Option<&'static str> {
        match currency_code.to_uppercase().as_str() {
            "USD" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            "CAD" => Some("CA$"),
            "AUD" => Some("A$"),
            _ => None,
        }
    }
}

impl CurrencyFormatter for StandardCurrencyFormatter {
    fn format(&self, amount: Money, currency_code: &str) -> String {
        let number = format!("{}.{:02}", group_thousands(amount.units()), amount.fraction());
        match Self::symbol(currency_code) {
            Some(symbol) => format!("{}{}", symbol, number),
            None => format!("{} {}", currency_code.to_uppercase(), number),
        }
    }
}

/// 1234567 -> "1,234,567"
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
