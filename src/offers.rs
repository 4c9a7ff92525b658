//! Offers
//!
//! Per-product promotional rules applied while pricing a basket line.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{prices::Price, products::ProductCode};

/// Errors raised while building the offer set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OfferError {
    /// More than one offer targets the same product.
    #[error("product {0} has more than one offer")]
    DuplicateOffer(ProductCode),
}

/// Offer kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Offer {
    /// Every second unit of the product costs half price (rounded down).
    BuyOneGetSecondHalfPrice,
}

impl Offer {
    /// Price `quantity` units of a product with the given unit price.
    pub fn line_price(self, unit_price: Price, quantity: u64) -> Price {
        match self {
            Offer::BuyOneGetSecondHalfPrice => {
                let pairs = quantity / 2;
                let singles = quantity % 2;
                let pair_price = unit_price + unit_price.half();

                pair_price.times(pairs) + unit_price.times(singles)
            }
        }
    }

    /// Human readable offer name.
    pub fn name(self) -> &'static str {
        match self {
            Offer::BuyOneGetSecondHalfPrice => "Buy one, get the second half price",
        }
    }
}

/// An offer attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductOffer {
    /// Product the offer applies to
    pub product: ProductCode,

    /// Offer kind
    #[serde(rename = "type")]
    pub offer: Offer,
}

impl ProductOffer {
    /// Create a new product offer.
    pub fn new(product: impl Into<ProductCode>, offer: Offer) -> Self {
        Self {
            product: product.into(),
            offer,
        }
    }
}

/// Offers keyed by product code; at most one offer per product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Offers {
    by_product: FxHashMap<ProductCode, Offer>,
}

impl Offers {
    /// Build the offer set.
    ///
    /// # Errors
    ///
    /// Returns [`OfferError::DuplicateOffer`] if two offers target the same product.
    pub fn new(offers: impl IntoIterator<Item = ProductOffer>) -> Result<Self, OfferError> {
        let mut by_product = FxHashMap::default();

        for ProductOffer { product, offer } in offers {
            if by_product.contains_key(&product) {
                return Err(OfferError::DuplicateOffer(product));
            }

            by_product.insert(product, offer);
        }

        Ok(Self { by_product })
    }

    /// The offer for a product, if any.
    pub fn get(&self, code: &str) -> Option<Offer> {
        self.by_product.get(code).copied()
    }

    /// Products that carry an offer, in no particular order.
    pub fn products(&self) -> impl Iterator<Item = &ProductCode> {
        self.by_product.keys()
    }

    /// Number of offers.
    pub fn len(&self) -> usize {
        self.by_product.len()
    }

    /// Whether there are no offers.
    pub fn is_empty(&self) -> bool {
        self.by_product.is_empty()
    }
}
