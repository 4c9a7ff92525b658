//! Catalog

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::products::{Product, ProductCode};

/// Immutable product lookup, built once from a list of products.
///
/// Iteration follows the order in which codes first appeared. When the same
/// code is supplied more than once the later definition replaces the earlier
/// one in place.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: FxHashMap<ProductCode, usize>,
}

impl Catalog {
    /// Build a catalog from the given products.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::default();

        for product in products {
            if let Some(&idx) = catalog.index.get(&product.code) {
                warn!(code = %product.code, "duplicate product code in catalog, replacing");

                if let Some(slot) = catalog.products.get_mut(idx) {
                    *slot = product;
                }
            } else {
                catalog
                    .index
                    .insert(product.code.clone(), catalog.products.len());
                catalog.products.push(product);
            }
        }

        catalog
    }

    /// Look up a product by code.
    pub fn get(&self, code: &str) -> Option<&Product> {
        self.index
            .get(code)
            .and_then(|&idx| self.products.get(idx))
    }

    /// Return the canonical code stored in the catalog for `code`.
    pub fn code(&self, code: &str) -> Option<&ProductCode> {
        self.get(code).map(|product| &product.code)
    }

    /// Whether the catalog has a product with this code.
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Products in configuration order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
