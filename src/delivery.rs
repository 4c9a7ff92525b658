//! Delivery
//!
//! Tiered delivery charges keyed on the basket subtotal.

use thiserror::Error;

use crate::prices::Price;

/// Errors raised while building a delivery scale.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeliveryError {
    /// No rule with a zero threshold, so some subtotals would have no tier.
    #[error("delivery scale has no rule with a zero threshold")]
    MissingBaseRule,

    /// Two rules share the same threshold.
    #[error("delivery scale has more than one rule with threshold {0}")]
    DuplicateThreshold(Price),
}

/// If the subtotal is at least `threshold`, delivery costs `cost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryRule {
    /// Minimum subtotal (inclusive) for this rule to apply
    pub threshold: Price,

    /// Delivery charge when this rule applies
    pub cost: Price,
}

impl DeliveryRule {
    /// Create a new delivery rule.
    pub const fn new(threshold: Price, cost: Price) -> Self {
        Self { threshold, cost }
    }
}

/// Delivery Scale
///
/// Rules are held in descending threshold order. Construction guarantees a
/// zero-threshold rule, so every subtotal resolves to exactly one tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryScale {
    rules: Vec<DeliveryRule>,
}

impl DeliveryScale {
    /// Build a delivery scale from the given rules, in any order.
    ///
    /// # Errors
    ///
    /// - [`DeliveryError::MissingBaseRule`]: no rule has a zero threshold (including an empty list).
    /// - [`DeliveryError::DuplicateThreshold`]: two rules share a threshold.
    pub fn new(rules: impl IntoIterator<Item = DeliveryRule>) -> Result<Self, DeliveryError> {
        let mut rules: Vec<DeliveryRule> = rules.into_iter().collect();

        rules.sort_by(|a, b| b.threshold.cmp(&a.threshold));

        if let Some([duplicate, _]) = rules
            .windows(2)
            .find(|pair| matches!(pair, [a, b] if a.threshold == b.threshold))
        {
            return Err(DeliveryError::DuplicateThreshold(duplicate.threshold));
        }

        if !rules.iter().any(|rule| rule.threshold == Price::ZERO) {
            return Err(DeliveryError::MissingBaseRule);
        }

        Ok(Self { rules })
    }

    /// Delivery charge for a basket with the given subtotal.
    ///
    /// The highest threshold not exceeding `subtotal` wins, so a subtotal
    /// exactly on a threshold lands in that tier.
    pub fn cost_for(&self, subtotal: Price) -> Price {
        self.rules
            .iter()
            .find(|rule| rule.threshold <= subtotal)
            .or_else(|| self.rules.last())
            .map_or(Price::ZERO, |rule| rule.cost)
    }

    /// Rules in descending threshold order.
    pub fn rules(&self) -> &[DeliveryRule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn rule(threshold: u64, cost: u64) -> DeliveryRule {
        DeliveryRule::new(Price::new(threshold), Price::new(cost))
    }

    fn acme_scale() -> Result<DeliveryScale, DeliveryError> {
        DeliveryScale::new([rule(0, 495), rule(9000, 0), rule(5000, 295)])
    }

    #[test]
    fn rules_are_sorted_descending() -> TestResult {
        let scale = acme_scale()?;

        let thresholds: Vec<u64> = scale.rules().iter().map(|r| *r.threshold).collect();

        assert_eq!(thresholds, [9000, 5000, 0]);

        Ok(())
    }

    #[test]
    fn cost_for_selects_highest_qualifying_tier() -> TestResult {
        let scale = acme_scale()?;

        assert_eq!(scale.cost_for(Price::ZERO), Price::new(495));
        assert_eq!(scale.cost_for(Price::new(3290)), Price::new(495));
        assert_eq!(scale.cost_for(Price::new(5790)), Price::new(295));
        assert_eq!(scale.cost_for(Price::new(9827)), Price::ZERO);

        Ok(())
    }

    #[test]
    fn threshold_is_inclusive() -> TestResult {
        let scale = acme_scale()?;

        assert_eq!(scale.cost_for(Price::new(4999)), Price::new(495));
        assert_eq!(scale.cost_for(Price::new(5000)), Price::new(295));
        assert_eq!(scale.cost_for(Price::new(8999)), Price::new(295));
        assert_eq!(scale.cost_for(Price::new(9000)), Price::ZERO);

        Ok(())
    }

    #[test]
    fn missing_zero_threshold_is_rejected() {
        let result = DeliveryScale::new([rule(9000, 0), rule(5000, 295)]);

        assert_eq!(result, Err(DeliveryError::MissingBaseRule));
    }

    #[test]
    fn empty_scale_is_rejected() {
        let result = DeliveryScale::new(Vec::new());

        assert_eq!(result, Err(DeliveryError::MissingBaseRule));
    }

    #[test]
    fn duplicate_threshold_is_rejected() {
        let result = DeliveryScale::new([rule(0, 495), rule(5000, 295), rule(5000, 195)]);

        assert_eq!(
            result,
            Err(DeliveryError::DuplicateThreshold(Price::new(5000)))
        );
    }

    #[test]
    fn single_base_rule_applies_to_everything() -> TestResult {
        let scale = DeliveryScale::new([rule(0, 250)])?;

        assert_eq!(scale.cost_for(Price::ZERO), Price::new(250));
        assert_eq!(scale.cost_for(Price::new(1_000_000)), Price::new(250));

        Ok(())
    }
}
