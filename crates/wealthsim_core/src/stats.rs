//! Summary statistics over a simulated ensemble.

use serde::{Deserialize, Serialize};

use crate::config::{MONTHS_PER_YEAR, SimulationConfig};
use crate::inflation::adjust_for_inflation;
use crate::model::{
    CapitalMatrix, InvestedCapitalPath, Metrics, PercentileBand, SimulationOutcome,
    SimulationReport,
};

pub const P10: f64 = 0.10;
pub const P50: f64 = 0.50;
pub const P90: f64 = 0.90;

/// Percentile of already sorted values, `p` in `[0, 1]`.
///
/// Linear interpolation between the order statistics at rank `p * (n - 1)`.
/// Returns 0.0 for an empty slice. A NaN neighbor propagates into the result
/// instead of panicking.
#[must_use]
pub fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let rank = p.clamp(0.0, 1.0) * (n - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            let (lo, hi) = (sorted[lower], sorted[upper]);
            if lower == upper {
                lo
            } else {
                let w = rank - lower as f64;
                let value = lo + (hi - lo) * w;
                if lo <= hi { value.clamp(lo, hi) } else { value }
            }
        }
    }
}

/// Percentile of unsorted values, `p` in `[0, 1]`. Non-finite values are
/// skipped, as in [`Histogram::from_values`].
#[must_use]
pub fn percentile(values: &[f64], p: f64) -> f64 {
    let sorted = sorted_copy(values);
    percentile_of_sorted(&sorted, p)
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Reduce final-month values and the invested path to headline metrics.
///
/// `final_values` and `invested` should already be in the units being
/// reported (nominal or inflation adjusted). The final contribution rate is
/// always nominal.
#[must_use]
pub fn summarize(
    final_values: &[f64],
    invested: &InvestedCapitalPath,
    config: &SimulationConfig,
) -> Metrics {
    let sorted = sorted_copy(final_values);
    Metrics {
        median: percentile_of_sorted(&sorted, P50),
        p10: percentile_of_sorted(&sorted, P10),
        p90: percentile_of_sorted(&sorted, P90),
        total_invested: invested.total(),
        final_monthly_contribution: config.final_monthly_contribution(),
    }
}

/// p10/p50/p90 across paths at every year boundary, year 0 included
#[must_use]
pub fn yearly_percentile_bands(capital: &CapitalMatrix) -> Vec<PercentileBand> {
    (0..capital.path_len())
        .step_by(MONTHS_PER_YEAR)
        .map(|month| {
            let sorted = sorted_copy(&capital.values_at(month));
            PercentileBand {
                year: (month / MONTHS_PER_YEAR) as u32,
                p10: percentile_of_sorted(&sorted, P10),
                p50: percentile_of_sorted(&sorted, P50),
                p90: percentile_of_sorted(&sorted, P90),
            }
        })
        .collect()
}

/// Apply the configured inflation adjustment to an outcome and summarize it
#[must_use]
pub fn build_report(outcome: &SimulationOutcome) -> SimulationReport {
    let inflation = outcome.config.annual_inflation;
    let (capital, invested) = adjust_for_inflation(inflation, &outcome.capital, &outcome.invested);
    let metrics = summarize(&capital.final_values(), &invested, &outcome.config);
    let yearly_bands = yearly_percentile_bands(&capital);

    SimulationReport {
        config: outcome.config.clone(),
        seed: outcome.seed,
        inflation_adjusted: inflation > 0.0,
        capital,
        invested,
        metrics,
        yearly_bands,
    }
}

/// Equal-width histogram of a set of values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width buckets spanning `[min, max]`.
    ///
    /// The maximum lands in the last bin. When every value is equal all of
    /// them land in the first bin. Non-finite values are skipped.
    #[must_use]
    pub fn from_values(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let mut counts = vec![0; bins];
        if finite.is_empty() {
            return Self {
                min: 0.0,
                max: 0.0,
                bin_width: 0.0,
                counts,
            };
        }

        let bin_width = (max - min) / bins as f64;
        for v in finite {
            let index = if bin_width > 0.0 {
                (((v - min) / bin_width) as usize).min(bins - 1)
            } else {
                0
            };
            counts[index] += 1;
        }

        Self {
            min,
            max,
            bin_width,
            counts,
        }
    }

    /// Lower edge of bin `index`
    #[must_use]
    pub fn bin_start(&self, index: usize) -> f64 {
        self.min + self.bin_width * index as f64
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
