use colored::Colorize;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// NBP table A: average PLN rates for the major currencies.
pub const NBP_TABLE_A_URL: &str = "https://api.nbp.pl/api/exchangerates/tables/A/?format=json";

#[derive(Error, Debug)]
pub enum RatesError {
    #[error("exchange rate request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("exchange rate response contained no tables")]
    EmptyResponse,
}

#[derive(Debug, Deserialize)]
struct RateTable {
    rates: Vec<RateEntry>,
}

#[derive(Debug, Deserialize)]
struct RateEntry {
    code: String,
    mid: f64,
}

/// Fetches the code-to-mid-rate mapping with a single blocking GET.
#[derive(Debug, Clone)]
pub struct RatesClient {
    base_url: String,
}

impl Default for RatesClient {
    fn default() -> Self {
        Self::new(NBP_TABLE_A_URL)
    }
}

impl RatesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Current PLN mid rates keyed by currency code. Any transport or decode
    /// failure is reported on stderr and yields an empty map; callers treat
    /// an empty map as "rates unavailable".
    pub fn fetch(&self) -> HashMap<String, f64> {
        match self.try_fetch() {
            Ok(rates) => rates,
            Err(err) => {
                eprintln!("{}", format!("Error fetching exchange rates: {err}").red());
                HashMap::new()
            }
        }
    }

    fn try_fetch(&self) -> Result<HashMap<String, f64>, RatesError> {
        let tables: Vec<RateTable> = reqwest::blocking::get(self.base_url.as_str())?
            .error_for_status()?
            .json()?;
        let table = tables.into_iter().next().ok_or(RatesError::EmptyResponse)?;
        Ok(table
            .rates
            .into_iter()
            .map(|entry| (entry.code, entry.mid))
            .collect())
    }
}
