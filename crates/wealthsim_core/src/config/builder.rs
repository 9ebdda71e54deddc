//! Simulation Builder
//!
//! The SimulationBuilder provides a fluent API for assembling a
//! [`SimulationConfig`]. Unset fields keep their defaults, and `build`
//! runs the validator so the result can be handed straight to the engine.
//!
//! # Example
//!
//! ```ignore
//! use wealthsim_core::config::SimulationBuilder;
//!
//! let config = SimulationBuilder::new()
//!     .initial_capital(25_000.0)
//!     .monthly_contribution(800.0)
//!     .years(25)
//!     .expected_annual_return(0.065)
//!     .annual_volatility(0.14)
//!     // Yearly drag and escalation
//!     .annual_fee(0.005)
//!     .contribution_increase_rate(0.02)
//!     // Report in today's money
//!     .annual_inflation(0.02)
//!     .num_simulations(5000)
//!     .build()?;
//! ```

use super::SimulationConfig;
use crate::error::ConfigError;

/// Builder for creating a validated [`SimulationConfig`]
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    config: SimulationConfig,
}

impl SimulationBuilder {
    /// Create a new builder seeded with [`SimulationConfig::default`]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. one loaded from a file
    #[must_use]
    pub fn from_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    // =========================================================================
    // Starting position
    // =========================================================================

    #[must_use]
    pub fn initial_capital(mut self, amount: f64) -> Self {
        self.config.initial_capital = amount;
        self
    }

    #[must_use]
    pub fn monthly_contribution(mut self, amount: f64) -> Self {
        self.config.monthly_contribution = amount;
        self
    }

    /// Set the investment horizon in years
    #[must_use]
    pub fn years(mut self, years: u32) -> Self {
        self.config.years = years;
        self
    }

    // =========================================================================
    // Market assumptions
    // =========================================================================

    #[must_use]
    pub fn expected_annual_return(mut self, rate: f64) -> Self {
        self.config.expected_annual_return = rate;
        self
    }

    #[must_use]
    pub fn annual_volatility(mut self, rate: f64) -> Self {
        self.config.annual_volatility = rate;
        self
    }

    /// Shortcut for a deterministic run (zero volatility)
    #[must_use]
    pub fn deterministic(self) -> Self {
        self.annual_volatility(0.0)
    }

    // =========================================================================
    // Yearly schedule
    // =========================================================================

    #[must_use]
    pub fn annual_fee(mut self, rate: f64) -> Self {
        self.config.annual_fee = rate;
        self
    }

    #[must_use]
    pub fn contribution_increase_rate(mut self, rate: f64) -> Self {
        self.config.contribution_increase_rate = rate;
        self
    }

    #[must_use]
    pub fn annual_inflation(mut self, rate: f64) -> Self {
        self.config.annual_inflation = rate;
        self
    }

    // =========================================================================
    // Ensemble
    // =========================================================================

    #[must_use]
    pub fn num_simulations(mut self, count: usize) -> Self {
        self.config.num_simulations = count;
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        self.config.validated()
    }
}
