use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use super::paths::{CapitalMatrix, InvestedCapitalPath};
use crate::config::SimulationConfig;

/// Headline statistics of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Median final capital
    pub median: f64,
    /// 10th percentile of final capital ("worst case")
    pub p10: f64,
    /// 90th percentile of final capital ("better case")
    pub p90: f64,
    /// Last element of the invested-capital path
    pub total_invested: f64,
    /// Nominal monthly contribution during the final year
    pub final_monthly_contribution: f64,
}

/// p10/p50/p90 across all paths at one year boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileBand {
    pub year: u32,
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
}

/// Raw output of a Monte Carlo run, in nominal money
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub config: SimulationConfig,
    /// Seed the run was generated from; rerunning with it reproduces `capital`
    pub seed: u64,
    pub capital: CapitalMatrix,
    pub invested: InvestedCapitalPath,
}

/// Outcome after the optional inflation adjustment, with its statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub config: SimulationConfig,
    pub seed: u64,
    /// True when values are expressed in today's money
    pub inflation_adjusted: bool,
    pub capital: CapitalMatrix,
    pub invested: InvestedCapitalPath,
    pub metrics: Metrics,
    pub yearly_bands: Vec<PercentileBand>,
}

/// Progress and cancellation handle shared between a caller and a running
/// Monte Carlo simulation.
///
/// Clones share the same counters, so a UI thread can keep one copy while the
/// worker runs with another.
#[derive(Debug, Clone, Default)]
pub struct MonteCarloProgress {
    completed: Arc<AtomicUsize>,
    cancelled: Arc<AtomicBool>,
}

impl MonteCarloProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of paths finished so far
    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    pub fn increment(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.completed.store(0, Ordering::Relaxed);
        self.cancelled.store(false, Ordering::Relaxed);
    }

    /// Request cancellation; honoured before the next path starts
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
