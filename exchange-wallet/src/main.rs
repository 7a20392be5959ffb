use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use exchange_wallet::rates::RatesClient;
use exchange_wallet::wallet::generate_wallets;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "exchange-wallet", about = "Currency wallet demo backed by NBP exchange rates")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate random wallets for available currencies
    Generate {
        /// Display the generated wallets
        #[arg(long)]
        show: bool,
    },
    /// Show current exchange rates
    Rates,
    /// Calculate total value in the given currency
    Calculate {
        /// Target currency code, e.g. USD
        currency: String,
        /// Amounts in CODE:AMOUNT form, e.g. USD:100 EUR:50
        #[arg(required = true)]
        values: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = RatesClient::default();

    match cli.command {
        Commands::Generate { show } => {
            let wallets = generate_wallets(&client.fetch());
            if show {
                println!("\nGenerated wallets:");
                for wallet in &wallets {
                    println!("{wallet}");
                }
            } else {
                println!("Generated {} wallets.", wallets.len());
            }
        }
        Commands::Rates => {
            let rates = client.fetch();
            if rates.is_empty() {
                println!("{}", "❌ No exchange rates available.".red());
            } else {
                println!("\nCurrent exchange rates (to PLN):");
                let mut entries: Vec<(&String, &f64)> = rates.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                for (code, rate) in entries {
                    println!("{code}: {rate:.4}");
                }
            }
        }
        Commands::Calculate { currency, values } => {
            calculate(&client.fetch(), &currency, &values);
        }
    }

    Ok(())
}

fn calculate(rates: &HashMap<String, f64>, currency: &str, values: &[String]) {
    if rates.is_empty() {
        println!("{}", "❌ No exchange rates available.".red());
        return;
    }
    let Some(target_rate) = rates.get(currency) else {
        println!(
            "{}",
            format!("Error: currency {currency} not found in exchange rates").red()
        );
        return;
    };

    let total_pln = sum_in_pln(rates, values);
    println!("\nTotal value in {}: {:.2}", currency, total_pln / target_rate);
}

/// Converts each CODE:AMOUNT token to PLN and sums. A malformed token or a
/// code absent from the rates prints a warning and is skipped.
fn sum_in_pln(rates: &HashMap<String, f64>, values: &[String]) -> f64 {
    let mut total = 0.0;
    for token in values {
        match parse_amount(token) {
            Ok((code, amount)) => match rates.get(code) {
                Some(rate) => total += amount * rate,
                None => println!(
                    "{}",
                    format!("Warning: currency {code} not found, skipping").yellow()
                ),
            },
            Err(_) => println!(
                "{}",
                format!("Warning: invalid format for '{token}', skipping").yellow()
            ),
        }
    }
    total
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("expected CODE:AMOUNT")]
struct InvalidInputFormat;

fn parse_amount(token: &str) -> Result<(&str, f64), InvalidInputFormat> {
    let (code, amount) = token.split_once(':').ok_or(InvalidInputFormat)?;
    if code.is_empty() {
        return Err(InvalidInputFormat);
    }
    let amount: f64 = amount.parse().map_err(|_| InvalidInputFormat)?;
    Ok((code, amount))
}
