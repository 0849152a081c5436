//! Display formatting helpers
//!
//! Amounts are grouped in threes with a no-break space, the way the
//! `ru-RU` locale prints them (`100 000`).

/// Thousands separator (U+00A0 NO-BREAK SPACE)
pub const GROUP_SEPARATOR: char = '\u{a0}';

/// Format an integer with thousands separators
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }

    out
}

/// Format an amount followed by its currency label, e.g. `80 000 UZS`
pub fn money(amount: u64, currency: &str) -> String {
    format!("{} {}", group_thousands(amount), currency)
}

/// Format a guest count, e.g. `3 guests`
pub fn guests(count: u64) -> String {
    format!("{} guests", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1\u{a0}000");
        assert_eq!(group_thousands(80000), "80\u{a0}000");
        assert_eq!(group_thousands(1234567), "1\u{a0}234\u{a0}567");
    }

    #[test]
    fn test_money_and_guests() {
        assert_eq!(money(100000, "UZS"), "100\u{a0}000 UZS");
        assert_eq!(guests(11), "11 guests");
    }
}
