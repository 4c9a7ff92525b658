//! Basket

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    config::BasketConfig,
    prices::Price,
    pricing,
    products::{Product, ProductCode},
};

/// Errors related to basket mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BasketError {
    /// The product code is not in the catalog.
    #[error("Unknown product code: {0}")]
    UnknownProduct(ProductCode),
}

/// Basket
///
/// An ordered list of product codes, one entry per unit, priced against a
/// shared [`BasketConfig`]. Subtotal, delivery and total are recomputed from
/// the current contents on every call.
#[derive(Debug, Clone)]
pub struct Basket<'a> {
    items: Vec<ProductCode>,
    config: &'a BasketConfig,
}

impl<'a> Basket<'a> {
    /// Create a new empty basket.
    #[must_use]
    pub fn new(config: &'a BasketConfig) -> Self {
        Basket {
            items: Vec::new(),
            config,
        }
    }

    /// Create a basket holding the given codes, added in order.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::UnknownProduct`] for the first code missing from the catalog.
    pub fn with_items<S: AsRef<str>>(
        config: &'a BasketConfig,
        codes: impl IntoIterator<Item = S>,
    ) -> Result<Self, BasketError> {
        let mut basket = Basket::new(config);

        codes
            .into_iter()
            .try_for_each(|code| basket.add(code.as_ref()))?;

        Ok(basket)
    }

    /// Add one unit of a product.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::UnknownProduct`] if the code is not in the
    /// catalog. The basket is left unchanged.
    pub fn add(&mut self, code: &str) -> Result<(), BasketError> {
        let Some(code) = self.config.catalog().code(code) else {
            debug!(code, "rejected unknown product code");

            return Err(BasketError::UnknownProduct(ProductCode::from(code)));
        };

        self.items.push(code.clone());

        debug!(%code, items = self.items.len(), "added item");

        Ok(())
    }

    /// Remove one unit of a product, returning whether anything was removed.
    pub fn remove(&mut self, code: &str) -> bool {
        let Some(idx) = self.items.iter().position(|item| item.as_str() == code) else {
            return false;
        };

        self.items.remove(idx);

        debug!(code, items = self.items.len(), "removed item");

        true
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();

        debug!("cleared basket");
    }

    /// Line items in the order they were added.
    pub fn items(&self) -> &[ProductCode] {
        &self.items
    }

    /// Unit count per distinct product code in the basket.
    pub fn item_counts(&self) -> FxHashMap<ProductCode, usize> {
        let mut counts = FxHashMap::default();

        for code in &self.items {
            *counts.entry(code.clone()).or_insert(0) += 1;
        }

        counts
    }

    /// Distinct products in the basket with their unit counts, in catalog order.
    pub fn lines(&self) -> impl Iterator<Item = (&'a Product, usize)> + '_ {
        let counts = self.item_counts();

        self.config.catalog().products().filter_map(move |product| {
            counts
                .get(&product.code)
                .map(|&quantity| (product, quantity))
        })
    }

    /// Number of units of a product in the basket.
    pub fn quantity(&self, code: &str) -> usize {
        self.items.iter().filter(|item| item.as_str() == code).count()
    }

    /// Sum of all line prices after offers.
    pub fn subtotal(&self) -> Price {
        let counts = self.item_counts();

        pricing::subtotal(
            counts.iter().map(|(code, &quantity)| (code.as_str(), quantity)),
            self.config,
        )
    }

    /// Delivery charge for the current subtotal.
    pub fn delivery(&self) -> Price {
        pricing::delivery(self.subtotal(), self.config)
    }

    /// Subtotal plus delivery.
    pub fn total(&self) -> Price {
        let subtotal = self.subtotal();
        let delivery = pricing::delivery(subtotal, self.config);
        let total = subtotal + delivery;

        debug!(%subtotal, %delivery, %total, "priced basket");

        total
    }

    /// Get the number of units in the basket.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the configuration the basket prices against.
    pub fn config(&self) -> &'a BasketConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::delivery::DeliveryRule;

    use super::*;

    #[test]
    fn new_basket_is_empty() -> TestResult {
        let config = BasketConfig::acme()?;
        let basket = Basket::new(&config);

        assert!(basket.is_empty());
        assert_eq!(basket.len(), 0);
        assert_eq!(basket.subtotal(), Price::ZERO);

        Ok(())
    }

    #[test]
    fn add_appends_in_order() -> TestResult {
        let config = BasketConfig::acme()?;
        let mut basket = Basket::new(&config);

        basket.add("B01")?;
        basket.add("R01")?;
        basket.add("B01")?;

        let codes: Vec<&str> = basket.items().iter().map(ProductCode::as_str).collect();

        assert_eq!(codes, ["B01", "R01", "B01"]);

        Ok(())
    }

    #[test]
    fn add_unknown_code_errors_and_leaves_basket_unchanged() -> TestResult {
        let config = BasketConfig::acme()?;
        let mut basket = Basket::with_items(&config, ["G01"])?;

        let result = basket.add("X99");

        assert_eq!(
            result,
            Err(BasketError::UnknownProduct(ProductCode::from("X99")))
        );
        assert_eq!(basket.len(), 1);
        assert_eq!(basket.quantity("G01"), 1);

        Ok(())
    }

    #[test]
    fn with_items_stops_at_first_unknown_code() -> TestResult {
        let config = BasketConfig::acme()?;

        let result = Basket::with_items(&config, ["R01", "nope", "B01"]);

        assert!(matches!(
            result,
            Err(BasketError::UnknownProduct(code)) if code.as_str() == "nope"
        ));

        Ok(())
    }

    #[test]
    fn remove_takes_first_occurrence_only() -> TestResult {
        let config = BasketConfig::acme()?;
        let mut basket = Basket::with_items(&config, ["R01", "B01", "R01"])?;

        assert!(basket.remove("R01"));

        let codes: Vec<&str> = basket.items().iter().map(ProductCode::as_str).collect();

        assert_eq!(codes, ["B01", "R01"]);

        Ok(())
    }

    #[test]
    fn remove_absent_code_is_noop() -> TestResult {
        let config = BasketConfig::acme()?;
        let mut basket = Basket::with_items(&config, ["B01"])?;

        assert!(!basket.remove("G01"));
        assert!(!basket.remove("X99"));
        assert_eq!(basket.len(), 1);

        Ok(())
    }

    #[test]
    fn clear_empties_basket() -> TestResult {
        let config = BasketConfig::acme()?;
        let mut basket = Basket::with_items(&config, ["R01", "G01", "B01"])?;

        basket.clear();

        assert!(basket.items().is_empty());
        assert_eq!(basket.subtotal(), Price::ZERO);

        Ok(())
    }

    #[test]
    fn item_counts_groups_codes() -> TestResult {
        let config = BasketConfig::acme()?;
        let basket = Basket::with_items(&config, ["B01", "R01", "B01", "R01", "R01"])?;

        let counts = basket.item_counts();

        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("R01"), Some(&3));
        assert_eq!(counts.get("B01"), Some(&2));
        assert_eq!(counts.get("G01"), None);

        Ok(())
    }

    #[test]
    fn lines_follow_catalog_order() -> TestResult {
        let config = BasketConfig::acme()?;
        let basket = Basket::with_items(&config, ["B01", "R01", "B01"])?;

        let lines: Vec<(&str, usize)> = basket
            .lines()
            .map(|(product, quantity)| (product.code.as_str(), quantity))
            .collect();

        assert_eq!(lines, [("R01", 1), ("B01", 2)]);

        Ok(())
    }

    #[test]
    fn empty_basket_pays_base_delivery() -> TestResult {
        let config = BasketConfig::acme()?;
        let basket = Basket::new(&config);

        assert_eq!(basket.delivery(), Price::new(495));
        assert_eq!(basket.total(), Price::new(495));

        Ok(())
    }

    #[test]
    fn total_is_subtotal_plus_delivery() -> TestResult {
        let config = BasketConfig::acme()?;
        let basket = Basket::with_items(&config, ["R01", "G01"])?;

        assert_eq!(basket.subtotal(), Price::new(5790));
        assert_eq!(basket.delivery(), Price::new(295));
        assert_eq!(basket.total(), basket.subtotal() + basket.delivery());

        Ok(())
    }

    #[test]
    fn huge_prices_saturate_totals() -> TestResult {
        let config = BasketConfig::new(
            [Product::new("X", "Gold Widget", Price::new(u64::MAX / 2 + 1))],
            [DeliveryRule::new(Price::ZERO, Price::new(495))],
            Vec::new(),
        )?;
        let basket = Basket::with_items(&config, ["X", "X"])?;

        assert_eq!(basket.subtotal(), Price::new(u64::MAX));
        assert_eq!(basket.total(), Price::new(u64::MAX));

        Ok(())
    }
}
