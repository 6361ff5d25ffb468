//! Display formatting for dashboard figures

use std::fmt;

/// A headline figure and how to print it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    /// Plain count, printed with thousands separators
    Count(u64),
    /// Dollars; whole amounts print without cents
    Currency(f64),
    /// Percentage with one decimal place
    Percent(f64),
    /// Duration in months with one decimal place
    Months(f64),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            StatValue::Count(n) => f.write_str(&group_thousands(n)),
            StatValue::Currency(amount) => {
                let cents = (amount * 100.0).round() as u64;
                let dollars = group_thousands(cents / 100);
                if cents % 100 == 0 {
                    write!(f, "${}", dollars)
                } else {
                    write!(f, "${}.{:02}", dollars, cents % 100)
                }
            }
            StatValue::Percent(p) => write!(f, "{:.1}%", p),
            StatValue::Months(m) => write!(f, "{:.1} months", m),
        }
    }
}

/// `2847` → `"2,847"`
pub fn group_thousands(n: u64) -> String {
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

/// Signed month-over-month change, e.g. `"+12.5%"`
pub fn signed_percent(change: f64) -> String {
    format!("{:+.1}%", change)
}
