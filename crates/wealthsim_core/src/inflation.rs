//! Inflation adjustment into today's money.
//!
//! Values at month `m` are divided by `(1 + annual_inflation / 12)^m`. The
//! discount compounds monthly even though fees and contribution escalation
//! compound yearly.

use crate::config::MONTHS_PER_YEAR;
use crate::model::{CapitalMatrix, InvestedCapitalPath};

/// Discount divisor for `month`
#[must_use]
pub fn discount_factor(annual_inflation: f64, month: usize) -> f64 {
    let exponent = i32::try_from(month).unwrap_or(i32::MAX);
    (1.0 + annual_inflation / MONTHS_PER_YEAR as f64).powi(exponent)
}

/// Express a nominal value observed at `month` in today's money
#[must_use]
pub fn deflate(annual_inflation: f64, month: usize, value: f64) -> f64 {
    value / discount_factor(annual_inflation, month)
}

/// Adjust the capital matrix and the invested-capital path with the same
/// discount curve so both stay in comparable units.
///
/// With zero inflation both inputs are returned unchanged.
#[must_use]
pub fn adjust_for_inflation(
    annual_inflation: f64,
    capital: &CapitalMatrix,
    invested: &InvestedCapitalPath,
) -> (CapitalMatrix, InvestedCapitalPath) {
    if annual_inflation == 0.0 {
        return (capital.clone(), invested.clone());
    }

    (
        capital.map_by_month(|m, v| deflate(annual_inflation, m, v)),
        invested.map_by_month(|m, v| deflate(annual_inflation, m, v)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_factor_month_zero_is_one() {
        assert_eq!(discount_factor(0.02, 0), 1.0);
    }

    #[test]
    fn test_discount_factor_compounds_monthly() {
        let expected = (1.0_f64 + 0.02 / 12.0).powi(12);
        assert_eq!(discount_factor(0.02, 12), expected);
        assert!(expected > 1.02);
    }

    #[test]
    fn test_zero_inflation_is_identity() {
        let capital = CapitalMatrix::from_paths(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        let invested = InvestedCapitalPath::new(vec![1.0, 1.5, 2.0]);

        let (c1, i1) = adjust_for_inflation(0.0, &capital, &invested);
        let (c2, i2) = adjust_for_inflation(0.0, &c1, &i1);

        assert_eq!(c2, capital);
        assert_eq!(i2, invested);
    }

    #[test]
    fn test_adjustment_scales_each_month() {
        let capital =
            CapitalMatrix::from_paths(vec![vec![100.0, 200.0, 300.0], vec![10.0, 20.0, 30.0]])
                .unwrap();
        let invested = InvestedCapitalPath::new(vec![100.0, 150.0, 200.0]);
        let inflation = 0.06;

        let (adj_capital, adj_invested) = adjust_for_inflation(inflation, &capital, &invested);

        for (raw, adj) in capital.paths().zip(adj_capital.paths()) {
            for m in 0..raw.len() {
                assert_eq!(adj[m], raw[m] / (1.0 + inflation / 12.0).powi(m as i32));
            }
        }
        for (m, (&raw, &adj)) in invested
            .as_slice()
            .iter()
            .zip(adj_invested.as_slice())
            .enumerate()
        {
            assert_eq!(adj, raw / (1.0 + inflation / 12.0).powi(m as i32));
        }
    }
}
