//! Command-line front end for the wealthsim Monte Carlo engine
//!
//! Collects parameters from flags and an optional YAML file, runs the
//! simulation and renders a plain-text report, optionally writing the full
//! report as JSON.

pub mod cli;
pub mod logging;
pub mod report;
pub mod util;

pub use cli::Args;
pub use logging::init_logging;
pub use report::render_report;
