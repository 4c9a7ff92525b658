//! Fixtures
//!
//! Basket configurations loaded from YAML files.
//!
//! ```yaml
//! products:
//!   - code: R01
//!     name: Red Widget
//!     price: 32.95 USD
//! delivery:
//!   - threshold: 90.00 USD
//!     cost: 0.00 USD
//!   - threshold: 0.00 USD
//!     cost: 4.95 USD
//! offers:
//!   - product: R01
//!     type: buy_one_get_second_half_price
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use rusty_money::iso::Currency;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    config::{BasketConfig, ConfigError},
    delivery::DeliveryRule,
    fixtures::products::{ProductFixture, parse_price},
    offers::ProductOffer,
    products::Product,
};

pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between prices
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No prices in the fixture, so the currency is unknown
    #[error("No prices in fixture; currency unknown")]
    NoCurrency,

    /// The loaded data is not a valid basket configuration
    #[error("Invalid basket configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Fixture file contents
#[derive(Debug, Deserialize)]
pub struct ConfigFixture {
    /// Products, in display order
    pub products: Vec<ProductFixture>,

    /// Delivery tiers
    pub delivery: Vec<DeliveryRuleFixture>,

    /// Product offers
    #[serde(default)]
    pub offers: Vec<ProductOffer>,
}

/// Delivery rule fixture
#[derive(Debug, Deserialize)]
pub struct DeliveryRuleFixture {
    /// Minimum subtotal (e.g., "50.00 USD")
    pub threshold: String,

    /// Delivery charge (e.g., "2.95 USD")
    pub cost: String,
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    config: BasketConfig,
    currency: &'static Currency,
}

impl Fixture {
    /// Parse a fixture from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a price is invalid, prices use
    /// more than one currency, or the configuration fails validation.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        let fixture: ConfigFixture = serde_norway::from_str(contents)?;
        let mut currency = CurrencyGuard::default();

        let products = fixture
            .products
            .into_iter()
            .map(|product_fixture| -> Result<Product, FixtureError> {
                let (product, product_currency) = product_fixture.try_into_product()?;

                currency.check(product_currency)?;

                Ok(product)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let delivery_rules = fixture
            .delivery
            .iter()
            .map(|rule| -> Result<DeliveryRule, FixtureError> {
                let (threshold, threshold_currency) = parse_price(&rule.threshold)?;
                let (cost, cost_currency) = parse_price(&rule.cost)?;

                currency.check(threshold_currency)?;
                currency.check(cost_currency)?;

                Ok(DeliveryRule::new(threshold, cost))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let currency = currency.0.ok_or(FixtureError::NoCurrency)?;
        let config = BasketConfig::new(products, delivery_rules, fixture.offers)?;

        debug!(
            products = config.catalog().len(),
            offers = config.offers().len(),
            currency = currency.iso_alpha_code,
            "loaded fixture"
        );

        Ok(Self { config, currency })
    }

    /// Load a fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or [`Fixture::from_yaml`] fails.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Load a named fixture set from `<base_path>/<name>.yml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded.
    pub fn from_set(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        Self::from_path(base_path.into().join(format!("{name}.yml")))
    }

    /// Basket configuration
    pub fn config(&self) -> &BasketConfig {
        &self.config
    }

    /// Currency shared by every price in the fixture
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

/// Tracks the first currency seen and rejects any other.
#[derive(Debug, Default)]
struct CurrencyGuard(Option<&'static Currency>);

impl CurrencyGuard {
    fn check(&mut self, currency: &'static Currency) -> Result<(), FixtureError> {
        match self.0 {
            Some(existing) if existing != currency => Err(FixtureError::CurrencyMismatch(
                existing.iso_alpha_code.to_string(),
                currency.iso_alpha_code.to_string(),
            )),
            Some(_) => Ok(()),
            None => {
                self.0 = Some(currency);

                Ok(())
            }
        }
    }
}
