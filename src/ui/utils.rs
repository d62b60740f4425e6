/// Format a price in the minor currency unit with thousands separators,
/// e.g. `format_price(8500, "₱")` -> "₱8,500". Zero renders as an explicit
/// zero amount, never an empty string.
pub fn format_price(amount: u64, currency: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + currency.len());
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}", currency, grouped)
}
