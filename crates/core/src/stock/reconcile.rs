//! Monthly stock reconciliation.
//!
//! `theoretical = opening + purchases - issues` and
//! `variance = physical - theoretical`. Nothing is clamped: a negative
//! theoretical closing means more fuel was issued than the books can account
//! for, and it is reported as such.
//!
//! Arithmetic saturates at `Decimal::MIN`/`Decimal::MAX`, so every input
//! yields a result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::StockCheck;

/// Direction of a stock variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarianceKind {
    /// More fuel counted than expected.
    Gain,
    /// Less fuel counted than expected (leakage, theft, measurement error).
    Loss,
    /// Count matches the books.
    Balanced,
}

/// Stock movement of one fuel type over one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    /// Stock at the start of the period.
    pub opening: Decimal,
    /// Litres bought during the period.
    pub purchases: Decimal,
    /// Litres issued to generators during the period.
    pub issues: Decimal,
}

impl StockMovement {
    /// Creates a movement.
    #[must_use]
    pub const fn new(opening: Decimal, purchases: Decimal, issues: Decimal) -> Self {
        Self {
            opening,
            purchases,
            issues,
        }
    }

    /// Closing stock the books predict. May be negative.
    #[must_use]
    pub fn theoretical(&self) -> Decimal {
        self.opening
            .saturating_add(self.purchases)
            .saturating_sub(self.issues)
    }

    /// Reconciles this movement against a physical count.
    #[must_use]
    pub fn reconcile(self, physical_closing: Decimal) -> StockReconciliation {
        let theoretical_closing = self.theoretical();
        if theoretical_closing < Decimal::ZERO {
            tracing::warn!(
                %theoretical_closing,
                opening = %self.opening,
                issues = %self.issues,
                "issues exceed opening stock plus purchases"
            );
        }

        StockReconciliation {
            movement: self,
            theoretical_closing,
            physical_closing,
            variance: physical_closing.saturating_sub(theoretical_closing),
        }
    }
}

/// Result of comparing the books with a physical count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReconciliation {
    /// Movement the books recorded.
    pub movement: StockMovement,
    /// `opening + purchases - issues`.
    pub theoretical_closing: Decimal,
    /// Litres actually counted.
    pub physical_closing: Decimal,
    /// `physical_closing - theoretical_closing`.
    pub variance: Decimal,
}

impl StockReconciliation {
    /// Classifies the variance.
    #[must_use]
    pub fn kind(&self) -> VarianceKind {
        match self.variance.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => VarianceKind::Gain,
            std::cmp::Ordering::Less => VarianceKind::Loss,
            std::cmp::Ordering::Equal => VarianceKind::Balanced,
        }
    }
}

/// Reconciles one fuel type for one period.
///
/// Total over all inputs, including negative or zero physical counts.
#[must_use]
pub fn reconcile(
    opening: Decimal,
    purchases: Decimal,
    issues: Decimal,
    physical_closing: Decimal,
) -> StockReconciliation {
    StockMovement::new(opening, purchases, issues).reconcile(physical_closing)
}

/// Opening stock for a period: the previous period's physical closing, or
/// zero when no earlier check exists.
#[must_use]
pub fn opening_stock(previous: Option<&StockCheck>) -> Decimal {
    previous.map_or(Decimal::ZERO, |check| check.physical_closing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reconcile_loss() {
        let result = reconcile(dec!(100), dec!(50), dec!(30), dec!(115));

        assert_eq!(result.theoretical_closing, dec!(120));
        assert_eq!(result.variance, dec!(-5));
        assert_eq!(result.kind(), VarianceKind::Loss);
    }

    #[test]
    fn test_reconcile_gain() {
        let result = reconcile(dec!(200), dec!(0), dec!(80.5), dec!(121));

        assert_eq!(result.theoretical_closing, dec!(119.5));
        assert_eq!(result.variance, dec!(1.5));
        assert_eq!(result.kind(), VarianceKind::Gain);
    }

    #[test]
    fn test_reconcile_balanced() {
        let result = reconcile(dec!(40), dec!(60), dec!(25), dec!(75));

        assert_eq!(result.variance, dec!(0));
        assert_eq!(result.kind(), VarianceKind::Balanced);
    }

    #[test]
    fn test_negative_theoretical_is_not_clamped() {
        let result = reconcile(dec!(10), dec!(0), dec!(25), dec!(0));

        assert_eq!(result.theoretical_closing, dec!(-15));
        assert_eq!(result.variance, dec!(15));
        assert_eq!(result.kind(), VarianceKind::Gain);
    }

    #[test]
    fn test_negative_physical_count_is_accepted() {
        let result = reconcile(dec!(10), dec!(0), dec!(0), dec!(-2));

        assert_eq!(result.variance, dec!(-12));
    }

    #[test]
    fn test_reconcile_saturates_at_decimal_bounds() {
        let result = reconcile(Decimal::MAX, Decimal::ONE, dec!(0), dec!(0));
        assert_eq!(result.theoretical_closing, Decimal::MAX);
        assert_eq!(result.variance, -Decimal::MAX);
        assert_eq!(result.kind(), VarianceKind::Loss);

        let result = reconcile(dec!(0), dec!(0), Decimal::MAX, Decimal::MAX);
        assert_eq!(result.theoretical_closing, -Decimal::MAX);
        assert_eq!(result.variance, Decimal::MAX);
        assert_eq!(result.kind(), VarianceKind::Gain);
    }

    #[test]
    fn test_opening_defaults_to_zero() {
        assert_eq!(opening_stock(None), Decimal::ZERO);
    }

    #[test]
    fn test_movement_keeps_inputs() {
        let result = reconcile(dec!(1), dec!(2), dec!(3), dec!(4));

        assert_eq!(result.movement, StockMovement::new(dec!(1), dec!(2), dec!(3)));
        assert_eq!(result.physical_closing, dec!(4));
    }
}
