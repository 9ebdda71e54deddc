//! I/O utility functions

use std::fs;
use std::io;
use std::path::Path;

/// Write content to a file atomically using write-then-rename pattern.
///
/// The content is first written to a sibling `.tmp` file, then renamed
/// onto the target path, so readers never observe a half-written report.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    fs::write(temp_path, content)?;
    fs::rename(temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use wealthsim_core::model::SimulationReport;
    use wealthsim_core::{SimulationConfig, build_report, monte_carlo_simulate};

    fn sample_report() -> SimulationReport {
        let config = SimulationConfig {
            years: 2,
            num_simulations: 100,
            ..Default::default()
        };
        build_report(&monte_carlo_simulate(&config, Some(8)).unwrap())
    }

    #[test]
    fn test_json_report_round_trips_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan-report.json");
        let report = sample_report();

        atomic_write(&path, &serde_json::to_string_pretty(&report).unwrap()).unwrap();

        let loaded: SimulationReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.seed, 8);
        assert!((loaded.metrics.median - report.metrics.median).abs() < 1e-6);
        assert_eq!(loaded.capital.num_simulations(), 100);
        assert!(!dir.path().join("plan-report.json.tmp").exists());
    }

    #[test]
    fn test_rerun_replaces_stale_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan-report.json");
        fs::write(&path, "{\"stale\": true}").unwrap();

        atomic_write(&path, "{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_directory_leaves_nothing_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports").join("plan-report.json");

        assert!(atomic_write(&path, "{}").is_err());
        assert!(!path.exists());
    }
}
