//! Pricing

use crate::{config::BasketConfig, offers::Offer, prices::Price, products::Product};

/// Price `quantity` units of a product, applying its offer if it has one.
pub fn line_price(product: &Product, quantity: usize, offer: Option<Offer>) -> Price {
    let quantity = u64::try_from(quantity).unwrap_or(u64::MAX);

    match offer {
        Some(offer) => offer.line_price(product.price, quantity),
        None => product.price.times(quantity),
    }
}

/// Calculates the subtotal for a set of `(code, quantity)` pairs.
///
/// Codes missing from the catalog contribute nothing; baskets only hold
/// catalog codes, so this only matters for hand-built counts.
pub fn subtotal<'c>(
    counts: impl IntoIterator<Item = (&'c str, usize)>,
    config: &BasketConfig,
) -> Price {
    counts
        .into_iter()
        .filter_map(|(code, quantity)| {
            let product = config.catalog().get(code)?;

            Some(line_price(product, quantity, config.offers().get(code)))
        })
        .sum()
}

/// Delivery charge for a subtotal under the configured scale.
pub fn delivery(subtotal: Price, config: &BasketConfig) -> Price {
    config.delivery().cost_for(subtotal)
}
