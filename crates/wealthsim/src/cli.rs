//! Command-line parameter collection.
//!
//! Parameters come from three layers, later ones winning: built-in defaults,
//! an optional YAML parameter file, then individual flags. Rates are given
//! in percent on the command line and stored as fractions.

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use wealthsim_core::SimulationConfig;

#[derive(Parser, Debug)]
#[command(name = "wealthsim")]
#[command(about = "Monte Carlo projection of a savings portfolio")]
pub struct Args {
    /// YAML file with simulation parameters; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed capital [default: 10000]
    #[arg(long)]
    pub initial_capital: Option<f64>,

    /// Monthly savings rate [default: 500]
    #[arg(long)]
    pub monthly_contribution: Option<f64>,

    /// Investment horizon in years, 1-50 [default: 30]
    #[arg(short, long)]
    pub years: Option<u32>,

    /// Expected annual return in percent, 0-20 [default: 7]
    #[arg(long)]
    pub expected_return: Option<f64>,

    /// Expected annual volatility in percent, 0-40 [default: 15]
    #[arg(long)]
    pub volatility: Option<f64>,

    /// Annual fee in percent, 0-5 [default: 0]
    #[arg(long)]
    pub fee: Option<f64>,

    /// Yearly increase of the monthly contribution in percent, 0-10 [default: 0]
    #[arg(long)]
    pub contribution_increase: Option<f64>,

    /// Annual inflation in percent, 0-7.5; 0 reports nominal values [default: 0]
    #[arg(long)]
    pub inflation: Option<f64>,

    /// Number of simulations: 100, 500, 1000 or 5000 [default: 1000]
    #[arg(short = 'n', long)]
    pub simulations: Option<usize>,

    /// Seed for reproducible results (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of histogram bins in the text report
    #[arg(long, default_value_t = 20)]
    pub bins: usize,

    /// Write the full report (paths included) as JSON to this file
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

fn percent(value: f64) -> f64 {
    value / 100.0
}

/// Parse a YAML parameter file into a config; missing keys keep defaults
pub fn load_config_file(path: &Path) -> color_eyre::Result<SimulationConfig> {
    let yaml = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read parameter file {}", path.display()))?;
    serde_saphyr::from_str(&yaml)
        .wrap_err_with(|| format!("failed to parse parameter file {}", path.display()))
}

impl Args {
    /// Merge defaults, the optional parameter file and flags, then validate
    pub fn to_config(&self) -> color_eyre::Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => load_config_file(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(v) = self.initial_capital {
            config.initial_capital = v;
        }
        if let Some(v) = self.monthly_contribution {
            config.monthly_contribution = v;
        }
        if let Some(v) = self.years {
            config.years = v;
        }
        if let Some(v) = self.expected_return {
            config.expected_annual_return = percent(v);
        }
        if let Some(v) = self.volatility {
            config.annual_volatility = percent(v);
        }
        if let Some(v) = self.fee {
            config.annual_fee = percent(v);
        }
        if let Some(v) = self.contribution_increase {
            config.contribution_increase_rate = percent(v);
        }
        if let Some(v) = self.inflation {
            config.annual_inflation = percent(v);
        }
        if let Some(v) = self.simulations {
            config.num_simulations = v;
        }

        config.validated().wrap_err("invalid simulation parameters")
    }
}
