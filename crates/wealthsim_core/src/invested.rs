//! Invested-capital reference path.

use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::model::InvestedCapitalPath;
use crate::schedule::ContributionSchedule;

/// Cumulative money put in: the initial capital plus every contribution,
/// escalated on the same year boundaries as the simulated paths.
///
/// No returns and no fees are applied. The result depends only on the
/// configuration, so the orchestrator computes it once per run.
pub fn invested_capital_path(config: &SimulationConfig) -> Result<InvestedCapitalPath> {
    let len = config.path_len();
    let mut values = Vec::new();
    values
        .try_reserve_exact(len)
        .map_err(|_| SimulationError::Resource { cells: Some(len) })?;
    let mut total = config.initial_capital;
    values.push(total);

    for step in ContributionSchedule::new(config) {
        total += step.contribution;
        values.push(total);
    }

    Ok(InvestedCapitalPath::new(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_contributions() {
        let config = SimulationConfig {
            initial_capital: 10_000.0,
            monthly_contribution: 500.0,
            years: 1,
            ..Default::default()
        };
        let invested = invested_capital_path(&config).unwrap();

        assert_eq!(invested.len(), 13);
        assert_eq!(invested.as_slice()[0], 10_000.0);
        assert_eq!(invested.as_slice()[6], 13_000.0);
        assert_eq!(invested.total(), 16_000.0);
    }

    #[test]
    fn test_escalated_contributions() {
        let config = SimulationConfig {
            initial_capital: 0.0,
            monthly_contribution: 100.0,
            contribution_increase_rate: 0.10,
            years: 2,
            ..Default::default()
        };
        let invested = invested_capital_path(&config).unwrap();

        assert!((invested.as_slice()[12] - 1_200.0).abs() < 1e-9);
        assert!((invested.as_slice()[13] - 1_310.0).abs() < 1e-9);
        assert!((invested.total() - 2_520.0).abs() < 1e-9);
    }

    #[test]
    fn test_ignores_fees_and_returns() {
        let base = SimulationConfig {
            annual_fee: 0.0,
            expected_annual_return: 0.0,
            ..Default::default()
        };
        let loaded = SimulationConfig {
            annual_fee: 0.05,
            expected_annual_return: 0.20,
            annual_volatility: 0.40,
            ..base.clone()
        };
        assert_eq!(
            invested_capital_path(&base).unwrap(),
            invested_capital_path(&loaded).unwrap()
        );
    }
}
