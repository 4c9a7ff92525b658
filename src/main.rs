//! Acme Basket CLI

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use acme_basket::prelude::*;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rusty_money::iso::{self, Currency};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "acme-basket", about = "Acme Widget Co basket pricing", long_about = None)]
struct Cli {
    /// YAML basket configuration; the built-in Acme configuration when omitted
    #[arg(short, long, env = "ACME_BASKET_FIXTURE", global = true)]
    fixture: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Price a basket of product codes and print the receipt
    Price {
        /// Product codes, one per unit
        codes: Vec<String>,
    },

    /// Read basket commands from stdin, one per line
    ///
    /// Commands: `add CODE`, `remove CODE`, `clear`, `items`, `total`, `receipt`, `quit`.
    Session,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Compact,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_format);

    let (config, currency) = load_config(cli.fixture.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Price { codes } => price_codes(&config, currency, &codes, &mut out)?,
        Commands::Session => run_session(&config, currency, io::stdin().lock(), &mut out)?,
    }

    Ok(())
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true);

    let result = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if let Err(error) = result {
        #[expect(
            clippy::print_stderr,
            reason = "no subscriber installed, so tracing output would be dropped"
        )]
        {
            eprintln!("failed to initialise logging: {error}");
        }
    }
}

fn load_config(fixture: Option<&Path>) -> Result<(BasketConfig, &'static Currency)> {
    match fixture {
        Some(path) => {
            info!(path = %path.display(), "loading fixture");

            let fixture = Fixture::from_path(path)?;
            let currency = fixture.currency();

            Ok((fixture.config().clone(), currency))
        }
        None => Ok((BasketConfig::acme()?, iso::USD)),
    }
}

fn price_codes(
    config: &BasketConfig,
    currency: &'static Currency,
    codes: &[String],
    out: &mut impl Write,
) -> Result<()> {
    let basket = Basket::with_items(config, codes)?;

    Receipt::from_basket(&basket).write_to(out, currency)?;

    Ok(())
}

fn run_session(
    config: &BasketConfig,
    currency: &'static Currency,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let mut basket = Basket::new(config);

    for line in input.lines() {
        let line = line?;
        let mut words = line.split_whitespace();

        match (words.next(), words.next()) {
            (None, _) => {}
            (Some("add"), Some(code)) => match basket.add(code) {
                Ok(()) => writeln!(out, "added {code}")?,
                Err(error) => writeln!(out, "{error}")?,
            },
            (Some("remove"), Some(code)) => {
                if basket.remove(code) {
                    writeln!(out, "removed {code}")?;
                } else {
                    writeln!(out, "{code} is not in the basket")?;
                }
            }
            (Some("clear"), None) => {
                basket.clear();
                writeln!(out, "basket cleared")?;
            }
            (Some("items"), None) => {
                let codes: Vec<&str> = basket.items().iter().map(ProductCode::as_str).collect();

                writeln!(out, "{}", codes.join(" "))?;
            }
            (Some("total"), None) => writeln!(
                out,
                "subtotal {} delivery {} total {}",
                basket.subtotal().to_money(currency),
                basket.delivery().to_money(currency),
                basket.total().to_money(currency),
            )?,
            (Some("receipt"), None) => {
                Receipt::from_basket(&basket).write_to(&mut *out, currency)?;
            }
            (Some("quit"), None) => break,
            (Some(command), _) => writeln!(out, "unrecognised command: {command}")?,
        }
    }

    Ok(())
}
