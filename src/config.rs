//! Basket configuration
//!
//! The catalog, delivery scale and offers a basket prices against. Built and
//! validated once, then shared by reference with every basket.

use thiserror::Error;

use crate::{
    catalog::Catalog,
    delivery::{DeliveryError, DeliveryRule, DeliveryScale},
    offers::{Offer, OfferError, Offers, ProductOffer},
    prices::Price,
    products::{Product, ProductCode},
};

/// Errors raised while validating a basket configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Invalid delivery scale.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    /// Invalid offer set.
    #[error(transparent)]
    Offer(#[from] OfferError),

    /// An offer refers to a product that is not in the catalog.
    #[error("offer refers to unknown product {0}")]
    UnknownOfferProduct(ProductCode),
}

/// Immutable pricing configuration.
#[derive(Debug, Clone)]
pub struct BasketConfig {
    catalog: Catalog,
    delivery: DeliveryScale,
    offers: Offers,
}

impl BasketConfig {
    /// Build a configuration from products, delivery rules and offers.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Delivery`]: the delivery rules lack a zero threshold or repeat a threshold.
    /// - [`ConfigError::Offer`]: a product has more than one offer.
    /// - [`ConfigError::UnknownOfferProduct`]: an offer targets a product missing from the catalog.
    pub fn new(
        products: impl IntoIterator<Item = Product>,
        delivery_rules: impl IntoIterator<Item = DeliveryRule>,
        offers: impl IntoIterator<Item = ProductOffer>,
    ) -> Result<Self, ConfigError> {
        let catalog = Catalog::new(products);
        let delivery = DeliveryScale::new(delivery_rules)?;
        let offers = Offers::new(offers)?;

        if let Some(code) = offers.products().find(|code| !catalog.contains(code.as_str())) {
            return Err(ConfigError::UnknownOfferProduct(code.clone()));
        }

        Ok(Self {
            catalog,
            delivery,
            offers,
        })
    }

    /// The Acme Widget Co configuration, prices in US cents.
    ///
    /// | Code | Product      | Price |
    /// |------|--------------|-------|
    /// | R01  | Red Widget   | 32.95 |
    /// | G01  | Green Widget | 24.95 |
    /// | B01  | Blue Widget  |  7.95 |
    ///
    /// Red widgets are buy one, get the second half price. Delivery is 4.95
    /// under 50.00, 2.95 under 90.00 and free from 90.00.
    ///
    /// # Errors
    ///
    /// Never in practice; the fixed data satisfies every check in [`BasketConfig::new`].
    pub fn acme() -> Result<Self, ConfigError> {
        Self::new(
            [
                Product::new("R01", "Red Widget", Price::new(3295)),
                Product::new("G01", "Green Widget", Price::new(2495)),
                Product::new("B01", "Blue Widget", Price::new(795)),
            ],
            [
                DeliveryRule::new(Price::new(9000), Price::ZERO),
                DeliveryRule::new(Price::new(5000), Price::new(295)),
                DeliveryRule::new(Price::ZERO, Price::new(495)),
            ],
            [ProductOffer::new("R01", Offer::BuyOneGetSecondHalfPrice)],
        )
    }

    /// Product catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Delivery scale
    pub fn delivery(&self) -> &DeliveryScale {
        &self.delivery
    }

    /// Offers
    pub fn offers(&self) -> &Offers {
        &self.offers
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn acme_config_is_valid() -> TestResult {
        let config = BasketConfig::acme()?;

        assert_eq!(config.catalog().len(), 3);
        assert_eq!(config.delivery().rules().len(), 3);
        assert_eq!(
            config.offers().get("R01"),
            Some(Offer::BuyOneGetSecondHalfPrice)
        );

        Ok(())
    }

    #[test]
    fn offer_for_unknown_product_is_rejected() {
        let result = BasketConfig::new(
            [Product::new("B01", "Blue Widget", Price::new(795))],
            [DeliveryRule::new(Price::ZERO, Price::new(495))],
            [ProductOffer::new("R01", Offer::BuyOneGetSecondHalfPrice)],
        );

        assert!(matches!(
            result,
            Err(ConfigError::UnknownOfferProduct(code)) if code.as_str() == "R01"
        ));
    }

    #[test]
    fn missing_base_delivery_rule_is_rejected() {
        let result = BasketConfig::new(
            [Product::new("B01", "Blue Widget", Price::new(795))],
            [DeliveryRule::new(Price::new(5000), Price::new(295))],
            Vec::new(),
        );

        assert!(matches!(
            result,
            Err(ConfigError::Delivery(DeliveryError::MissingBaseRule))
        ));
    }

    #[test]
    fn duplicate_offer_is_rejected() {
        let result = BasketConfig::new(
            [Product::new("R01", "Red Widget", Price::new(3295))],
            [DeliveryRule::new(Price::ZERO, Price::new(495))],
            [
                ProductOffer::new("R01", Offer::BuyOneGetSecondHalfPrice),
                ProductOffer::new("R01", Offer::BuyOneGetSecondHalfPrice),
            ],
        );

        assert!(matches!(
            result,
            Err(ConfigError::Offer(OfferError::DuplicateOffer(_)))
        ));
    }
}
