//! Acme Basket
//!
//! Basket pricing for Acme Widget Co: per-product offers, tiered delivery
//! charges and integer minor-unit arithmetic throughout.
//!
//! ```
//! use acme_basket::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BasketConfig::acme()?;
//! let mut basket = Basket::new(&config);
//!
//! basket.add("R01")?;
//! basket.add("R01")?;
//!
//! assert_eq!(basket.subtotal(), Price::new(4942));
//! assert_eq!(basket.delivery(), Price::new(495));
//! assert_eq!(basket.total(), Price::new(5437));
//! # Ok(())
//! # }
//! ```

pub mod basket;
pub mod catalog;
pub mod config;
pub mod delivery;
pub mod fixtures;
pub mod offers;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod receipt;
