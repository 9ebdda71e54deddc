use serde::{Deserialize, Serialize};

use crate::config::MONTHS_PER_YEAR;

/// One simulated trajectory; index `m` is the capital after `m` elapsed months
pub type CapitalPath = Vec<f64>;

/// All simulated paths of a run, indexed by simulation id.
///
/// Every path has the same length (`years * 12 + 1`). Path order is the
/// order the orchestrator assigned ids in and is stable across runs with the
/// same seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalMatrix {
    paths: Vec<CapitalPath>,
    path_len: usize,
}

impl CapitalMatrix {
    /// Assemble a matrix from equally long paths.
    ///
    /// Returns `None` if the paths differ in length.
    #[must_use]
    pub fn from_paths(paths: Vec<CapitalPath>) -> Option<Self> {
        let path_len = paths.first().map_or(0, Vec::len);
        if paths.iter().any(|p| p.len() != path_len) {
            return None;
        }
        Some(Self { paths, path_len })
    }

    /// Assemble a matrix from paths the caller generated at `path_len`
    pub(crate) fn from_equal_length_paths(paths: Vec<CapitalPath>, path_len: usize) -> Self {
        debug_assert!(paths.iter().all(|p| p.len() == path_len));
        Self { paths, path_len }
    }

    #[must_use]
    pub fn num_simulations(&self) -> usize {
        self.paths.len()
    }

    /// Length of each path (months + 1)
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.path_len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    #[must_use]
    pub fn path(&self, simulation: usize) -> Option<&[f64]> {
        self.paths.get(simulation).map(Vec::as_slice)
    }

    pub fn paths(&self) -> impl Iterator<Item = &[f64]> {
        self.paths.iter().map(Vec::as_slice)
    }

    /// Capital of every path at `month`, in simulation order
    #[must_use]
    pub fn values_at(&self, month: usize) -> Vec<f64> {
        self.paths
            .iter()
            .filter_map(|p| p.get(month).copied())
            .collect()
    }

    /// Final-month capital of every path
    #[must_use]
    pub fn final_values(&self) -> Vec<f64> {
        match self.path_len.checked_sub(1) {
            Some(last) => self.values_at(last),
            None => Vec::new(),
        }
    }

    /// One path sampled at year boundaries (months 0, 12, 24, ...)
    #[must_use]
    pub fn yearly_path(&self, simulation: usize) -> Option<Vec<f64>> {
        self.path(simulation)
            .map(|p| p.iter().step_by(MONTHS_PER_YEAR).copied().collect())
    }

    /// Apply `f(month, value)` to every cell, producing a new matrix
    #[must_use]
    pub fn map_by_month(&self, f: impl Fn(usize, f64) -> f64) -> Self {
        let paths = self
            .paths
            .iter()
            .map(|p| p.iter().enumerate().map(|(m, &v)| f(m, v)).collect())
            .collect();
        Self {
            paths,
            path_len: self.path_len,
        }
    }
}

/// Cumulative contributions over time, including the initial capital.
///
/// Deterministic for a given configuration; fees and returns never touch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvestedCapitalPath(Vec<f64>);

impl InvestedCapitalPath {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total invested at the end of the horizon
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.last().copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn yearly(&self) -> Vec<f64> {
        self.0.iter().step_by(MONTHS_PER_YEAR).copied().collect()
    }

    #[must_use]
    pub fn map_by_month(&self, f: impl Fn(usize, f64) -> f64) -> Self {
        Self(self.0.iter().enumerate().map(|(m, &v)| f(m, v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matrix() -> CapitalMatrix {
        let paths = (0..3)
            .map(|i| (0..=24).map(|m| (i * 100 + m) as f64).collect())
            .collect();
        CapitalMatrix::from_paths(paths).unwrap()
    }

    #[test]
    fn test_from_paths_rejects_ragged_rows() {
        assert!(CapitalMatrix::from_paths(vec![vec![1.0, 2.0], vec![1.0]]).is_none());
    }

    #[test]
    fn test_final_values_and_columns() {
        let matrix = sample_matrix();
        assert_eq!(matrix.num_simulations(), 3);
        assert_eq!(matrix.path_len(), 25);
        assert_eq!(matrix.final_values(), vec![24.0, 124.0, 224.0]);
        assert_eq!(matrix.values_at(0), vec![0.0, 100.0, 200.0]);
    }

    #[test]
    fn test_yearly_path_samples_every_twelfth_month() {
        let matrix = sample_matrix();
        assert_eq!(matrix.yearly_path(1), Some(vec![100.0, 112.0, 124.0]));
        assert_eq!(matrix.yearly_path(3), None);
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = CapitalMatrix::from_paths(Vec::new()).unwrap();
        assert!(matrix.is_empty());
        assert!(matrix.final_values().is_empty());
    }

    #[test]
    fn test_invested_path_total() {
        let invested = InvestedCapitalPath::new(vec![10.0, 20.0, 30.0]);
        assert_eq!(invested.total(), 30.0);
        assert_eq!(InvestedCapitalPath::new(Vec::new()).total(), 0.0);
    }
}
