//! Acme Basket prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketError},
    catalog::Catalog,
    config::{BasketConfig, ConfigError},
    delivery::{DeliveryError, DeliveryRule, DeliveryScale},
    fixtures::{Fixture, FixtureError},
    offers::{Offer, OfferError, Offers, ProductOffer},
    prices::Price,
    products::{Product, ProductCode},
    receipt::{Receipt, ReceiptError, ReceiptLine},
};
