use std::fmt;

/// Errors raised while validating a [`SimulationConfig`](crate::config::SimulationConfig)
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A numeric field fell outside its documented closed range
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// A numeric field was NaN or infinite
    NotFinite { field: &'static str },
    /// `num_simulations` was not one of the supported ensemble sizes
    UnsupportedSimulationCount {
        value: usize,
        allowed: &'static [usize],
    },
}

impl ConfigError {
    /// Name of the offending field
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::OutOfRange { field, .. } | ConfigError::NotFinite { field } => field,
            ConfigError::UnsupportedSimulationCount { .. } => "num_simulations",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OutOfRange {
                field,
                value,
                min,
                max,
            } => {
                if max.is_finite() {
                    write!(f, "{field} = {value} is outside the allowed range [{min}, {max}]")
                } else {
                    write!(f, "{field} = {value} must be at least {min}")
                }
            }
            ConfigError::NotFinite { field } => write!(f, "{field} must be a finite number"),
            ConfigError::UnsupportedSimulationCount { value, allowed } => {
                write!(f, "num_simulations = {value} must be one of {allowed:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors returned by the Monte Carlo driver
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The configuration did not pass validation
    Config(ConfigError),
    /// The capital matrix could not be allocated
    Resource { cells: Option<usize> },
    /// The return distribution could not be constructed
    InvalidDistribution {
        mean: f64,
        std_dev: f64,
        reason: String,
    },
    /// Monte Carlo simulation was cancelled by user request
    Cancelled,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Config(e) => write!(f, "invalid configuration: {e}"),
            SimulationError::Resource { cells: Some(cells) } => {
                write!(f, "cannot allocate capital matrix of {cells} cells")
            }
            SimulationError::Resource { cells: None } => {
                write!(f, "capital matrix size overflows the address space")
            }
            SimulationError::InvalidDistribution {
                mean,
                std_dev,
                reason,
            } => write!(
                f,
                "invalid monthly return distribution (mean={mean}, std_dev={std_dev}): {reason}"
            ),
            SimulationError::Cancelled => write!(f, "simulation cancelled"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        SimulationError::Config(e)
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_names_field_and_bounds() {
        let err = ConfigError::OutOfRange {
            field: "years",
            value: 0.0,
            min: 1.0,
            max: 50.0,
        };
        assert_eq!(err.field(), "years");
        assert_eq!(
            err.to_string(),
            "years = 0 is outside the allowed range [1, 50]"
        );
    }

    #[test]
    fn test_open_upper_bound_message() {
        let err = ConfigError::OutOfRange {
            field: "initial_capital",
            value: -5.0,
            min: 0.0,
            max: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "initial_capital = -5 must be at least 0");
    }

    #[test]
    fn test_config_error_is_source_of_simulation_error() {
        use std::error::Error;

        let err: SimulationError = ConfigError::NotFinite {
            field: "annual_fee",
        }
        .into();
        assert!(err.source().is_some());
        assert!(err.to_string().contains("annual_fee"));
        assert!(SimulationError::Cancelled.source().is_none());
    }
}
