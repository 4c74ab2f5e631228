// Display formatting for Indian locale figures
use chrono::{DateTime, Utc};

/// Groups digits the Indian way: last three, then pairs (`12,34,567`).
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Whole-rupee currency amount, e.g. `₹20,00,000`.
pub fn format_inr(n: u64) -> String {
    format!("₹{}", format_count(n))
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%d/%m/%Y, %H:%M:%S").to_string()
}
