//! Simulation configuration
//!
//! [`SimulationConfig`] holds every parameter the engine needs. It is a plain
//! value: build it once (directly, through [`SimulationBuilder`], or by
//! deserializing it), validate it, and pass it by reference to the engine.
//!
//! ```ignore
//! use wealthsim_core::config::SimulationBuilder;
//!
//! let config = SimulationBuilder::new()
//!     .initial_capital(10_000.0)
//!     .monthly_contribution(500.0)
//!     .years(30)
//!     .expected_annual_return(0.07)
//!     .annual_volatility(0.15)
//!     .build()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub mod builder;

pub use builder::SimulationBuilder;

/// Ensemble sizes the engine accepts for `num_simulations`
pub const ALLOWED_SIMULATION_COUNTS: &[usize] = &[100, 500, 1000, 5000];

pub const MIN_YEARS: u32 = 1;
pub const MAX_YEARS: u32 = 50;
pub const MAX_EXPECTED_ANNUAL_RETURN: f64 = 0.20;
pub const MAX_ANNUAL_VOLATILITY: f64 = 0.40;
pub const MAX_ANNUAL_FEE: f64 = 0.05;
pub const MAX_CONTRIBUTION_INCREASE_RATE: f64 = 0.10;
pub const MAX_ANNUAL_INFLATION: f64 = 0.075;

pub const MONTHS_PER_YEAR: usize = 12;

/// Complete simulation configuration
///
/// All rates are fractions (`0.07` is 7%). Fee drag and contribution
/// escalation are applied once per completed year; with both at zero the
/// engine reduces to a plain monthly random walk with fixed savings.
///
/// Missing fields fall back to [`SimulationConfig::default`] when deserializing,
/// so a parameter file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Capital at month 0
    pub initial_capital: f64,
    /// Contribution added at the end of each month during the first year
    pub monthly_contribution: f64,
    /// Investment horizon in whole years
    pub years: u32,
    /// Mean annual return, applied as `expected_annual_return / 12` per month
    pub expected_annual_return: f64,
    /// Annual standard deviation, applied as `annual_volatility / sqrt(12)` per month
    pub annual_volatility: f64,
    /// Fraction of capital removed at every year boundary
    pub annual_fee: f64,
    /// Growth of the monthly contribution at every year boundary
    pub contribution_increase_rate: f64,
    /// Annual inflation used to express results in today's money; zero disables it
    pub annual_inflation: f64,
    /// Number of independent paths to simulate
    pub num_simulations: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_capital: 10_000.0,
            monthly_contribution: 500.0,
            years: 30,
            expected_annual_return: 0.07,
            annual_volatility: 0.15,
            annual_fee: 0.0,
            contribution_increase_rate: 0.0,
            annual_inflation: 0.0,
            num_simulations: 1000,
        }
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

impl SimulationConfig {
    /// Check every field against its documented bound.
    ///
    /// The first offending field is reported; fields are checked in
    /// declaration order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("initial_capital", self.initial_capital, 0.0, f64::INFINITY)?;
        check_range(
            "monthly_contribution",
            self.monthly_contribution,
            0.0,
            f64::INFINITY,
        )?;

        if !(MIN_YEARS..=MAX_YEARS).contains(&self.years) {
            return Err(ConfigError::OutOfRange {
                field: "years",
                value: f64::from(self.years),
                min: f64::from(MIN_YEARS),
                max: f64::from(MAX_YEARS),
            });
        }

        check_range(
            "expected_annual_return",
            self.expected_annual_return,
            0.0,
            MAX_EXPECTED_ANNUAL_RETURN,
        )?;
        check_range(
            "annual_volatility",
            self.annual_volatility,
            0.0,
            MAX_ANNUAL_VOLATILITY,
        )?;
        check_range("annual_fee", self.annual_fee, 0.0, MAX_ANNUAL_FEE)?;
        check_range(
            "contribution_increase_rate",
            self.contribution_increase_rate,
            0.0,
            MAX_CONTRIBUTION_INCREASE_RATE,
        )?;
        check_range(
            "annual_inflation",
            self.annual_inflation,
            0.0,
            MAX_ANNUAL_INFLATION,
        )?;

        if !ALLOWED_SIMULATION_COUNTS.contains(&self.num_simulations) {
            return Err(ConfigError::UnsupportedSimulationCount {
                value: self.num_simulations,
                allowed: ALLOWED_SIMULATION_COUNTS,
            });
        }

        Ok(())
    }

    /// Validate and return the config unchanged on success
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    /// Number of simulated months (`years * 12`)
    #[must_use]
    pub fn num_months(&self) -> usize {
        self.years as usize * MONTHS_PER_YEAR
    }

    /// Length of every path in a run, month 0 included
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.num_months() + 1
    }

    #[must_use]
    pub fn monthly_return(&self) -> f64 {
        self.expected_annual_return / MONTHS_PER_YEAR as f64
    }

    #[must_use]
    pub fn monthly_volatility(&self) -> f64 {
        self.annual_volatility / (MONTHS_PER_YEAR as f64).sqrt()
    }

    /// Monthly contribution in force during the last simulated year.
    ///
    /// This is a nominal cash-flow rate and is never inflation adjusted.
    #[must_use]
    pub fn final_monthly_contribution(&self) -> f64 {
        let escalations = self.years.saturating_sub(1) as i32;
        self.monthly_contribution * (1.0 + self.contribution_increase_rate).powi(escalations)
    }
}
