use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balances shown on the wallet screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletBalances {
    /// Funds available for plan purchases.
    pub deposit_balance: Decimal,
    /// Withdrawable income.
    pub earnings_balance: Decimal,
    pub total_earned: Decimal,
    pub total_deposit: Decimal,
    pub total_withdraw: Decimal,
    pub total_invested: Decimal,
    /// USD per token.
    pub token_rate: Decimal,
    pub tokens: Decimal,
}

impl WalletBalances {
    /// USD value of the token holding.
    pub fn token_value(&self) -> Decimal {
        self.tokens * self.token_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_token_value() {
        let wallet = WalletBalances {
            deposit_balance: dec!(5420.50),
            earnings_balance: dec!(2340.75),
            total_earned: dec!(8650.25),
            total_deposit: dec!(10000),
            total_withdraw: dec!(3200),
            total_invested: dec!(4579.50),
            token_rate: dec!(0.85),
            tokens: dec!(6377.06),
        };
        assert_eq!(wallet.token_value(), dec!(5420.501));
    }
}
