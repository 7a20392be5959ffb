pub mod rates;
pub mod wallet;

pub use rates::{NBP_TABLE_A_URL, RatesClient, RatesError};
pub use wallet::{Wallet, generate_wallets};
