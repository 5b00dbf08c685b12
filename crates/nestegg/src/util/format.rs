//! Currency formatting helpers for table output.

/// Format a currency value with thousands separators and cents,
/// e.g. `$1,234,567.89`.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let total_cents = (value.abs() * 100.0).round() as i64;
    let dollars = group_thousands(total_cents / 100);
    let cents = total_cents % 100;
    if negative {
        format!("-${dollars}.{cents:02}")
    } else {
        format!("${dollars}.{cents:02}")
    }
}

/// Format a currency value to whole dollars, e.g. `$1,234,568`.
pub fn format_currency_short(value: f64) -> String {
    let negative = value < 0.0;
    let dollars = group_thousands(value.abs().round() as i64);
    if negative {
        format!("-${dollars}")
    } else {
        format!("${dollars}")
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}
