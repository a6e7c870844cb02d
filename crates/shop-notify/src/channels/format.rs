//! Rupee amount formatting for message bodies and email templates.
//!
//! Matches the storefront's `Intl.NumberFormat('en-IN', { currency: 'INR',
//! maximumFractionDigits: 0 })`: amounts are rounded to whole rupees and
//! grouped Indian-style – the last three digits, then groups of two
//! (`₹1,20,000`).

/// Formats an amount as whole rupees with Indian digit grouping.
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::new();
    if digits.len() <= 3 {
        grouped.push_str(&digits);
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        // Head groups in twos, right to left
        let head_bytes = head.as_bytes();
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head_bytes.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        groups.push(&head[..end]);
        groups.reverse();
        grouped.push_str(&groups.join(","));
        grouped.push(',');
        grouped.push_str(tail);
    }

    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}
