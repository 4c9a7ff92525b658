//! Prices

use std::{
    fmt,
    iter::Sum,
    ops::{Add, Deref},
};

use rusty_money::{Money, iso::Currency};

/// A monetary amount in minor currency units (pence/cents).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    value: u64,
}

impl Price {
    /// Zero minor units.
    pub const ZERO: Price = Price { value: 0 };

    /// Creates a new price from minor units.
    pub const fn new(value: u64) -> Self {
        Price { value }
    }

    /// Returns the amount in minor units.
    pub const fn minor_units(self) -> u64 {
        self.value
    }

    /// Multiplies the price by a unit quantity, saturating at `u64::MAX`.
    #[must_use]
    pub fn times(self, quantity: u64) -> Self {
        Price::new(self.value.saturating_mul(quantity))
    }

    /// Half of the price, rounded down to the nearest minor unit.
    #[must_use]
    pub fn half(self) -> Self {
        Price::new(self.value / 2)
    }

    /// Converts the price into [`Money`] in the given currency for display.
    ///
    /// Amounts beyond `i64::MAX` minor units saturate.
    pub fn to_money(self, currency: &Currency) -> Money<'_, Currency> {
        let minor = i64::try_from(self.value).unwrap_or(i64::MAX);

        Money::from_minor(minor, currency)
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Price::new(value)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Self) -> Self::Output {
        Price::new(self.value.saturating_add(rhs.value))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
