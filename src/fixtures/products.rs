//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;

use crate::{fixtures::FixtureError, prices::Price, products::Product};

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product code
    pub code: String,

    /// Product name
    pub name: String,

    /// Product price (e.g., "32.95 USD")
    pub price: String,
}

impl ProductFixture {
    /// Convert to a [`Product`], returning the currency of its price.
    ///
    /// # Errors
    ///
    /// Returns an error if the price cannot be parsed.
    pub fn try_into_product(self) -> Result<(Product, &'static Currency), FixtureError> {
        let (price, currency) = parse_price(&self.price)?;

        Ok((Product::new(self.code, self.name, price), currency))
    }
}

/// Parse price string (e.g., "32.95 USD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal with at most two decimal
/// places, or if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(Price, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.normalize().scale() > 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Amounts are limited to whole minor units, got: {s}"
        )));
    }

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .as_ref()
        .and_then(ToPrimitive::to_u64)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((Price::new(minor_units), currency))
}
