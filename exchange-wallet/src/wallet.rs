use rand::Rng;
use std::collections::HashMap;
use std::fmt;
use std::ops::Add;

/// A currency holding: the currency code, its PLN mid rate, and a balance.
#[derive(Debug, Clone, PartialEq)]
pub struct Wallet {
    pub currency_code: String,
    pub ratio: f64,
    pub balance: f64,
}

impl Wallet {
    /// Wallet with a pseudo-random balance in `[1, 100)`.
    pub fn new(currency_code: impl Into<String>, ratio: f64) -> Self {
        let balance = rand::thread_rng().gen_range(1.0..100.0);
        Self::with_balance(currency_code, ratio, balance)
    }

    pub fn with_balance(currency_code: impl Into<String>, ratio: f64, balance: f64) -> Self {
        Self {
            currency_code: currency_code.into(),
            ratio,
            balance,
        }
    }
}

/// Combining two wallets converts both balances to PLN, sums them, and
/// re-expresses the total in the left operand's currency. The result is a
/// plain number, not a new wallet.
impl Add<&Wallet> for &Wallet {
    type Output = f64;

    fn add(self, other: &Wallet) -> f64 {
        (self.balance * self.ratio + other.balance * other.ratio) / self.ratio
    }
}

impl fmt::Display for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, rate to PLN: {}, balance: {:.2}",
            self.currency_code, self.ratio, self.balance
        )
    }
}

/// One random-balance wallet per fetched rate.
pub fn generate_wallets(rates: &HashMap<String, f64>) -> Vec<Wallet> {
    rates
        .iter()
        .map(|(code, rate)| Wallet::new(code.clone(), *rate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_wallets_into_the_left_currency() {
        let usd = Wallet::with_balance("USD", 4.0, 10.0);
        let eur = Wallet::with_balance("EUR", 4.5, 10.0);

        // 10 * 4.0 + 10 * 4.5 = 85 PLN, re-expressed in USD: 85 / 4.0.
        assert_eq!(&usd + &eur, 21.25);
    }

    #[test]
    fn combination_is_expressed_in_the_left_operand() {
        let usd = Wallet::with_balance("USD", 4.0, 10.0);
        let eur = Wallet::with_balance("EUR", 4.5, 10.0);

        assert_eq!(&eur + &usd, 85.0 / 4.5);
    }

    #[test]
    fn random_balance_stays_within_range() {
        for _ in 0..100 {
            let wallet = Wallet::new("USD", 4.0);
            assert!(wallet.balance >= 1.0);
            assert!(wallet.balance < 100.0);
        }
    }

    #[test]
    fn generates_one_wallet_per_rate() {
        let rates = HashMap::from([("USD".to_string(), 4.0), ("EUR".to_string(), 4.5)]);

        let wallets = generate_wallets(&rates);

        assert_eq!(wallets.len(), 2);
        let mut codes: Vec<&str> = wallets.iter().map(|w| w.currency_code.as_str()).collect();
        codes.sort();
        assert_eq!(codes, vec!["EUR", "USD"]);
    }

    #[test]
    fn display_shows_the_balance_to_two_decimals() {
        let wallet = Wallet::with_balance("USD", 4.0, 12.5);
        assert_eq!(wallet.to_string(), "USD, rate to PLN: 4, balance: 12.50");
    }
}
