//! Display formatting for loan rows: Indian-rupee amounts and en-IN dates.
//!
//! Dates are shown in UTC.

use chrono::{DateTime, Utc};

/// Shown where a value is missing.
pub const MISSING: &str = "—";

/// Format an amount as Indian rupees with lakh/crore grouping and two
/// decimals, e.g. `1234567.5` → `"₹12,34,567.50"`. Amounts too large to
/// count in paise show as missing.
pub fn format_inr(amount: f64) -> String {
    let scaled = (amount.abs() * 100.0).round();
    if !scaled.is_finite() || scaled >= u64::MAX as f64 {
        return MISSING.to_string();
    }
    let paise = scaled as u64;
    let sign = if amount < 0.0 && paise > 0 { "-" } else { "" };
    format!("{sign}₹{}.{:02}", group_indian(paise / 100), paise % 100)
}

/// `format_inr` for an optional amount.
pub fn format_amount(amount: Option<f64>) -> String {
    amount.map(format_inr).unwrap_or_else(|| MISSING.to_string())
}

/// Group digits the Indian way: the last three, then pairs.
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Long en-IN date, e.g. `"16 October 2026"`.
pub fn format_date_long(at: DateTime<Utc>) -> String {
    at.format("%-d %B %Y").to_string()
}

/// Row subtitle relative to `now`: "Updated today", "Updated 1 day ago", ...
pub fn format_updated_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match (now - at).num_days() {
        d if d <= 0 => "Updated today".to_string(),
        1 => "Updated 1 day ago".to_string(),
        d => format!("Updated {d} days ago"),
    }
}
