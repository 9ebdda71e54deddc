//! Monte Carlo driver: seeding, path scheduling and result assembly.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::invested::invested_capital_path;
use crate::model::{CapitalMatrix, CapitalPath, MonteCarloProgress, SimulationOutcome};
use crate::path::PathGenerator;

/// Run a full Monte Carlo simulation.
///
/// `seed` fixes every draw; `None` picks a fresh random seed, which is
/// recorded in the outcome so the run can be reproduced.
pub fn monte_carlo_simulate(
    config: &SimulationConfig,
    seed: Option<u64>,
) -> Result<SimulationOutcome> {
    monte_carlo_simulate_with_progress(config, seed, &MonteCarloProgress::new())
}

/// Run a Monte Carlo simulation, reporting progress and honouring
/// cancellation through `progress`.
///
/// Cancellation is checked before each path starts; a path that has started
/// always runs to completion. A cancelled run returns
/// [`SimulationError::Cancelled`] and discards the paths already generated.
pub fn monte_carlo_simulate_with_progress(
    config: &SimulationConfig,
    seed: Option<u64>,
    progress: &MonteCarloProgress,
) -> Result<SimulationOutcome> {
    run(config, seed, progress, cfg!(feature = "parallel"))
}

/// Single-threaded variant of [`monte_carlo_simulate`]. Produces the same
/// matrix for the same seed whether or not the `parallel` feature is on.
pub fn monte_carlo_simulate_sequential(
    config: &SimulationConfig,
    seed: Option<u64>,
) -> Result<SimulationOutcome> {
    run(config, seed, &MonteCarloProgress::new(), false)
}

fn run(
    config: &SimulationConfig,
    seed: Option<u64>,
    progress: &MonteCarloProgress,
    parallel: bool,
) -> Result<SimulationOutcome> {
    // The caller should have validated already; this guards direct construction
    config.validate()?;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let num_simulations = config.num_simulations;
    let path_len = config.path_len();
    let cells = num_simulations
        .checked_mul(path_len)
        .ok_or(SimulationError::Resource { cells: None })?;

    tracing::debug!(
        num_simulations,
        path_len,
        seed,
        parallel,
        "starting Monte Carlo simulation"
    );

    let generator = PathGenerator::new(config)?;
    let path_seeds = derive_path_seeds(seed, num_simulations);
    let mut paths = reserve_paths(num_simulations, cells)?;

    if parallel {
        fill_paths_parallel(&generator, &path_seeds, &mut paths, progress)?;
    } else {
        fill_paths_sequential(&generator, &path_seeds, &mut paths, progress)?;
    }

    let capital = CapitalMatrix::from_equal_length_paths(paths, path_len);
    let invested = invested_capital_path(config)?;

    tracing::debug!(
        completed = progress.completed(),
        "Monte Carlo simulation finished"
    );

    Ok(SimulationOutcome {
        config: config.clone(),
        seed,
        capital,
        invested,
    })
}

/// One independent seed per path, drawn sequentially from the run seed.
///
/// Seeds are fixed before any path runs, so the matrix does not depend on
/// how paths are scheduled across threads.
fn derive_path_seeds(seed: u64, count: usize) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count).map(|_| rng.next_u64()).collect()
}

/// Outer matrix storage with one empty slot per path
fn reserve_paths(num_simulations: usize, cells: usize) -> Result<Vec<CapitalPath>> {
    let mut paths = Vec::new();
    paths
        .try_reserve_exact(num_simulations)
        .map_err(|_| SimulationError::Resource { cells: Some(cells) })?;
    paths.resize_with(num_simulations, CapitalPath::new);
    Ok(paths)
}

fn run_path(
    generator: &PathGenerator<'_>,
    path_seed: u64,
    progress: &MonteCarloProgress,
) -> Result<CapitalPath> {
    if progress.is_cancelled() {
        return Err(SimulationError::Cancelled);
    }
    let mut rng = SmallRng::seed_from_u64(path_seed);
    let path = generator.generate(&mut rng)?;
    progress.increment();
    Ok(path)
}

#[cfg(feature = "parallel")]
fn fill_paths_parallel(
    generator: &PathGenerator<'_>,
    path_seeds: &[u64],
    paths: &mut [CapitalPath],
    progress: &MonteCarloProgress,
) -> Result<()> {
    paths
        .par_iter_mut()
        .zip(path_seeds.par_iter())
        .try_for_each(|(slot, &path_seed)| {
            *slot = run_path(generator, path_seed, progress)?;
            Ok(())
        })
}

#[cfg(not(feature = "parallel"))]
fn fill_paths_parallel(
    generator: &PathGenerator<'_>,
    path_seeds: &[u64],
    paths: &mut [CapitalPath],
    progress: &MonteCarloProgress,
) -> Result<()> {
    fill_paths_sequential(generator, path_seeds, paths, progress)
}

fn fill_paths_sequential(
    generator: &PathGenerator<'_>,
    path_seeds: &[u64],
    paths: &mut [CapitalPath],
    progress: &MonteCarloProgress,
) -> Result<()> {
    for (slot, &path_seed) in paths.iter_mut().zip(path_seeds) {
        *slot = run_path(generator, path_seed, progress)?;
    }
    Ok(())
}
