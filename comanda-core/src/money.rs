//! Minor-currency arithmetic
//!
//! All amounts in the pipeline are integer counts of the minor currency
//! unit (for COP, one peso; the currency has no fractional unit).
//! Rounding happens exactly once, at the point a derived value is stored.

/// Exact line subtotal: quantity × unit price, both in minor units.
pub fn line_subtotal(quantity: i32, unit_price: i64) -> i64 {
    i64::from(quantity) * unit_price
}

/// Percentage of an amount, rounded half-away-from-zero to a minor unit.
///
/// # Examples
///
/// ```
/// use comanda_core::money::percentage_of;
///
/// assert_eq!(percentage_of(21_000, 10.0), 2_100);
/// assert_eq!(percentage_of(1_005, 10.0), 101);
/// ```
pub fn percentage_of(amount: i64, percent: f64) -> i64 {
    (amount as f64 * percent / 100.0).round() as i64
}

/// Format a minor-unit amount as a COP display string with thousands
/// separators, e.g. `23100` -> `"$23.100"`.
pub fn format_cop(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
