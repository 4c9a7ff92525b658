//! Receipt
//!
//! An itemised breakdown of a priced basket, for display.

use std::io;

use rusty_money::iso::Currency;
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    basket::Basket, offers::Offer, prices::Price, pricing::line_price, products::ProductCode,
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// One receipt line per distinct product in the basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    /// Product code
    pub code: ProductCode,

    /// Product name
    pub name: String,

    /// Units in the basket
    pub quantity: usize,

    /// Price of a single unit
    pub unit_price: Price,

    /// Undiscounted price of all units
    pub full_price: Price,

    /// Price charged for all units after any offer
    pub charged_price: Price,

    /// Offer applied to the line, if any
    pub offer: Option<Offer>,
}

impl ReceiptLine {
    /// Amount saved on this line by its offer.
    pub fn savings(&self) -> Price {
        Price::new(self.full_price.saturating_sub(*self.charged_price))
    }
}

/// Final receipt for a priced basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    lines: SmallVec<[ReceiptLine; 4]>,
    subtotal: Price,
    delivery: Price,
    total: Price,
}

impl Receipt {
    /// Price a basket into a receipt.
    pub fn from_basket(basket: &Basket<'_>) -> Self {
        let offers = basket.config().offers();

        let lines: SmallVec<[ReceiptLine; 4]> = basket
            .lines()
            .map(|(product, quantity)| {
                let offer = offers.get(product.code.as_str());

                ReceiptLine {
                    code: product.code.clone(),
                    name: product.name.clone(),
                    quantity,
                    unit_price: product.price,
                    full_price: line_price(product, quantity, None),
                    charged_price: line_price(product, quantity, offer),
                    offer,
                }
            })
            .collect();

        let subtotal = lines.iter().map(|line| line.charged_price).sum();
        let delivery = basket.config().delivery().cost_for(subtotal);

        Self {
            lines,
            subtotal,
            delivery,
            total: subtotal + delivery,
        }
    }

    /// Receipt lines in catalog order.
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Sum of charged line prices
    pub fn subtotal(&self) -> Price {
        self.subtotal
    }

    /// Delivery charge
    pub fn delivery(&self) -> Price {
        self.delivery
    }

    /// Subtotal plus delivery
    pub fn total(&self) -> Price {
        self.total
    }

    /// Total saved by offers.
    pub fn savings(&self) -> Price {
        self.lines.iter().map(ReceiptLine::savings).sum()
    }

    /// Writes the receipt as a table followed by a summary.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_to(
        &self,
        mut out: impl io::Write,
        currency: &'static Currency,
    ) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Code", "Item", "Qty", "Price", "Charged", "Savings", "Offer"]);

        for line in &self.lines {
            let savings = line.savings();

            builder.push_record([
                line.code.to_string(),
                line.name.clone(),
                line.quantity.to_string(),
                line.full_price.to_money(currency).to_string(),
                line.charged_price.to_money(currency).to_string(),
                if savings == Price::ZERO {
                    String::new()
                } else {
                    format!("-{}", savings.to_money(currency))
                },
                line.offer.map(Offer::name).unwrap_or_default().to_string(),
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(
            1,
            HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
        );

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..6), Alignment::right());

        writeln!(out, "\n{table}")?;

        let summary = [
            ("Subtotal:", self.subtotal),
            ("Delivery:", self.delivery),
            ("Total:", self.total),
            ("Savings:", self.savings()),
        ]
        .map(|(label, price)| (label, price.to_money(currency).to_string()));

        let value_width = summary
            .iter()
            .map(|(_, value)| value.len())
            .max()
            .unwrap_or_default();

        for (label, value) in &summary {
            writeln!(out, " {label:>9}  {value:>value_width$}")?;
        }

        writeln!(out)?;

        Ok(())
    }
}
