mod paths;
mod results;

pub use paths::{CapitalMatrix, CapitalPath, InvestedCapitalPath};
pub use results::{
    Metrics, MonteCarloProgress, PercentileBand, SimulationOutcome, SimulationReport,
};
