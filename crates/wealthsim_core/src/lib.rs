//! Monte Carlo projection of a savings portfolio
//!
//! This crate provides the simulation engine behind `wealthsim`. It supports:
//! - Monthly compounding under normally distributed returns
//! - Fixed monthly contributions with yearly escalation
//! - A yearly proportional fee
//! - Optional inflation adjustment into today's money
//! - Median / p10 / p90 summaries and yearly percentile bands
//!
//! The engine is a pure function call: no I/O, no global state. Pass a seed
//! to get bit-identical results.
//!
//! ```ignore
//! use wealthsim_core::config::SimulationBuilder;
//! use wealthsim_core::simulation::monte_carlo_simulate;
//! use wealthsim_core::stats::build_report;
//!
//! let config = SimulationBuilder::new()
//!     .years(30)
//!     .annual_fee(0.005)
//!     .annual_inflation(0.02)
//!     .build()?;
//! let outcome = monte_carlo_simulate(&config, Some(42))?;
//! let report = build_report(&outcome);
//! println!("median: {:.0}", report.metrics.median);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod inflation;
pub mod invested;
pub mod path;
pub mod schedule;
pub mod simulation;
pub mod stats;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{SimulationBuilder, SimulationConfig};
pub use error::{ConfigError, SimulationError};
pub use simulation::{monte_carlo_simulate, monte_carlo_simulate_with_progress};
pub use stats::build_report;
