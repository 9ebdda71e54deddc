//! Stochastic capital path generation.
//!
//! Each month the capital first grows by a normally distributed return, then
//! receives the month's contribution. At every year boundary the annual fee is
//! taken after the contribution, and the contribution escalates for the
//! following year. The order matters: swapping growth and contribution, or
//! charging the fee mid-year, changes the result.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::model::CapitalPath;
use crate::schedule::ContributionSchedule;

/// Generates capital paths for one configuration.
///
/// Holds the monthly return distribution so it is built once per run rather
/// than once per path. Performs no bounds checking of its own; feed it a
/// validated config.
#[derive(Debug, Clone)]
pub struct PathGenerator<'a> {
    config: &'a SimulationConfig,
    monthly_returns: Normal<f64>,
}

impl<'a> PathGenerator<'a> {
    pub fn new(config: &'a SimulationConfig) -> Result<Self> {
        let mean = config.monthly_return();
        let std_dev = config.monthly_volatility();
        let monthly_returns =
            Normal::new(mean, std_dev).map_err(|e| SimulationError::InvalidDistribution {
                mean,
                std_dev,
                reason: e.to_string(),
            })?;

        Ok(Self {
            config,
            monthly_returns,
        })
    }

    /// Draw one path of length `years * 12 + 1` from `rng`
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<CapitalPath> {
        let len = self.config.path_len();
        let mut path = CapitalPath::new();
        path.try_reserve_exact(len)
            .map_err(|_| SimulationError::Resource { cells: Some(len) })?;

        let mut capital = self.config.initial_capital;
        path.push(capital);

        for step in ContributionSchedule::new(self.config) {
            let r = self.monthly_returns.sample(rng);
            capital *= 1.0 + r;
            capital += step.contribution;

            if step.year_end {
                capital *= 1.0 - self.config.annual_fee;
            }

            path.push(capital);
        }

        Ok(path)
    }
}

/// Convenience wrapper: build a generator for `config` and draw a single path
pub fn simulate_path<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Result<CapitalPath> {
    PathGenerator::new(config)?.generate(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn deterministic_config() -> SimulationConfig {
        SimulationConfig {
            initial_capital: 10_000.0,
            monthly_contribution: 500.0,
            years: 2,
            expected_annual_return: 0.06,
            annual_volatility: 0.0,
            annual_fee: 0.0,
            contribution_increase_rate: 0.0,
            annual_inflation: 0.0,
            num_simulations: 100,
        }
    }

    #[test]
    fn test_path_starts_at_initial_capital_and_has_full_length() {
        let config = SimulationConfig::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let path = simulate_path(&config, &mut rng).unwrap();

        assert_eq!(path.len(), 30 * 12 + 1);
        assert_eq!(path[0], 10_000.0);
    }

    #[test]
    fn test_growth_is_applied_before_contribution() {
        let config = deterministic_config();
        let mut rng = SmallRng::seed_from_u64(0);
        let path = simulate_path(&config, &mut rng).unwrap();

        // Month 1: 10_000 * 1.005 + 500, not (10_000 + 500) * 1.005
        assert!((path[1] - 10_550.0).abs() < 1e-9);
    }

    #[test]
    fn test_fee_applied_only_at_year_end() {
        let config = SimulationConfig {
            expected_annual_return: 0.0,
            annual_fee: 0.05,
            ..deterministic_config()
        };
        let mut rng = SmallRng::seed_from_u64(0);
        let path = simulate_path(&config, &mut rng).unwrap();

        // Months 1..=11 are plain savings
        for m in 1..12 {
            assert!((path[m] - (10_000.0 + 500.0 * m as f64)).abs() < 1e-9);
        }
        let year_one = (10_000.0 + 6_000.0) * 0.95;
        assert!((path[12] - year_one).abs() < 1e-9);

        for m in 13..24 {
            let expected = year_one + 500.0 * (m - 12) as f64;
            assert!((path[m] - expected).abs() < 1e-9, "month {m}");
        }
        let year_two = (year_one + 6_000.0) * 0.95;
        assert!((path[24] - year_two).abs() < 1e-9);
    }

    #[test]
    fn test_same_seed_same_path() {
        let config = SimulationConfig::default();
        let generator = PathGenerator::new(&config).unwrap();

        let a = generator.generate(&mut SmallRng::seed_from_u64(99)).unwrap();
        let b = generator.generate(&mut SmallRng::seed_from_u64(99)).unwrap();
        let c = generator.generate(&mut SmallRng::seed_from_u64(100)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_invalid_volatility_is_reported() {
        let config = SimulationConfig {
            annual_volatility: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            PathGenerator::new(&config),
            Err(SimulationError::InvalidDistribution { .. })
        ));
    }
}
