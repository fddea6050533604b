//! Display formatting for amounts and timers.

use rust_decimal::{Decimal, RoundingStrategy};

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats an amount as US dollars, e.g. `$1,234.50` or `-$1,000.00`.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${}.{frac}", group_thousands(whole))
}

/// Formats an amount in whole thousands, e.g. `10000` as `10k`.
pub fn format_compact_k(amount: Decimal) -> String {
    let thousands = (amount / Decimal::ONE_THOUSAND)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("{}k", thousands.normalize())
}

/// Formats a countdown as `m:ss`.
pub fn format_countdown(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(dec!(5420.5)), "$5,420.50");
        assert_eq!(format_usd(dec!(0)), "$0.00");
        assert_eq!(format_usd(dec!(999.999)), "$1,000.00");
        assert_eq!(format_usd(dec!(845620.50)), "$845,620.50");
        assert_eq!(format_usd(dec!(-1000)), "-$1,000.00");
        assert_eq!(format_usd(dec!(1234567.891)), "$1,234,567.89");
    }

    #[test]
    fn test_format_compact_k() {
        assert_eq!(format_compact_k(dec!(10000)), "10k");
        assert_eq!(format_compact_k(dec!(3000)), "3k");
        assert_eq!(format_compact_k(dec!(48000)), "48k");
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(1800), "30:00");
        assert_eq!(format_countdown(65), "1:05");
        assert_eq!(format_countdown(0), "0:00");
    }
}
