//! Month-by-month contribution schedule.
//!
//! Both the stochastic path generator and the invested-capital tracker walk
//! this iterator, so they agree on which contribution applies in which month
//! and on where the year boundaries fall.

use crate::config::{MONTHS_PER_YEAR, SimulationConfig};

/// One elapsed month of the schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthStep {
    /// 1-based month index; the state after this step is recorded at `month`
    pub month: usize,
    /// Contribution paid at the end of this month
    pub contribution: f64,
    /// True when this month completes a year (fees and escalation apply)
    pub year_end: bool,
}

/// Iterator over months `1..=years * 12`.
///
/// The contribution escalates only after a `year_end` step has been yielded,
/// so month 12 still pays the first-year rate and month 13 pays the
/// escalated one.
#[derive(Debug, Clone)]
pub struct ContributionSchedule {
    next_month: usize,
    num_months: usize,
    current: f64,
    increase_rate: f64,
}

impl ContributionSchedule {
    #[must_use]
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            next_month: 1,
            num_months: config.num_months(),
            current: config.monthly_contribution,
            increase_rate: config.contribution_increase_rate,
        }
    }
}

impl Iterator for ContributionSchedule {
    type Item = MonthStep;

    fn next(&mut self) -> Option<MonthStep> {
        if self.next_month > self.num_months {
            return None;
        }

        let month = self.next_month;
        let step = MonthStep {
            month,
            contribution: self.current,
            year_end: month % MONTHS_PER_YEAR == 0,
        };

        if step.year_end {
            self.current *= 1.0 + self.increase_rate;
        }
        self.next_month += 1;

        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.num_months + 1).saturating_sub(self.next_month);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ContributionSchedule {}
