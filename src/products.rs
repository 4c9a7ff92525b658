//! Products

use std::{borrow::Borrow, fmt};

use serde::Deserialize;

use crate::prices::Price;

/// Product Code
///
/// The unique identifier of a product in the catalog, e.g. `R01`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    /// Create a new product code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Return the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for ProductCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl Borrow<str> for ProductCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProductCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Product code
    pub code: ProductCode,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: Price,
}

impl Product {
    /// Create a new product.
    pub fn new(code: impl Into<ProductCode>, name: impl Into<String>, price: Price) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
        }
    }
}
