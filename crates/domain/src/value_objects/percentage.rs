use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A percentage expressed in points (12 means 12%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(pub Decimal);

impl Percentage {
    pub const ZERO: Percentage = Percentage(Decimal::ZERO);
    pub const HUNDRED: Percentage = Percentage(Decimal::ONE_HUNDRED);

    pub fn from_fraction(fraction: Decimal) -> Self {
        Self(fraction * Decimal::ONE_HUNDRED)
    }

    pub fn as_fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    /// Applies the percentage to an amount, `None` on overflow.
    pub fn checked_of(&self, amount: Decimal) -> Option<Decimal> {
        amount
            .checked_mul(self.0)?
            .checked_div(Decimal::ONE_HUNDRED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percentage_of_amount() {
        assert_eq!(Percentage(dec!(12)).checked_of(dec!(100)), Some(dec!(12)));
        assert_eq!(Percentage(dec!(18)).checked_of(dec!(250)), Some(dec!(45)));
    }

    #[test]
    fn test_percentage_of_overflow() {
        assert_eq!(Percentage(dec!(500)).checked_of(Decimal::MAX), None);
        assert_eq!(Percentage::ZERO.checked_of(Decimal::MAX), Some(Decimal::ZERO));
    }

    #[test]
    fn test_fraction_conversion() {
        let p = Percentage::from_fraction(dec!(0.1));
        assert_eq!(p.0, dec!(10));
        assert_eq!(p.as_fraction(), dec!(0.1));
    }
}
