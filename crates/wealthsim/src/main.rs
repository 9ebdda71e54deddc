use clap::Parser;
use color_eyre::eyre::WrapErr;
use wealthsim::util::io::atomic_write;
use wealthsim::{Args, init_logging, render_report};
use wealthsim_core::{build_report, monte_carlo_simulate};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let config = args.to_config()?;
    tracing::info!(
        years = config.years,
        simulations = config.num_simulations,
        "Starting simulation"
    );

    let outcome = monte_carlo_simulate(&config, args.seed).wrap_err("simulation failed")?;
    let report = build_report(&outcome);
    tracing::info!(seed = report.seed, median = report.metrics.median, "Simulation finished");

    println!("{}", render_report(&report, args.bins));

    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(&report).wrap_err("failed to serialize report")?;
        atomic_write(path, &json)
            .wrap_err_with(|| format!("failed to write report to {}", path.display()))?;
        tracing::info!("Report written to {}", path.display());
    }

    Ok(())
}
