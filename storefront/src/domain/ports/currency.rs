//! Currency formatting port

use crate::domain::entities::Money;

/// Locale-aware conversion of an amount into a display string
///
/// `format(Money::from_units(69), "USD")` yields `"$69.00"`.
pub trait CurrencyFormatter: Send + Sync {
    fn format(&self, amount: Money, currency_code: &str) -> String;
}
