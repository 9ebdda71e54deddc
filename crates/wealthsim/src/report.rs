//! Plain-text rendering of a simulation report.

use std::fmt;

use wealthsim_core::model::SimulationReport;
use wealthsim_core::stats::Histogram;

use crate::util::format::{format_compact_currency, format_currency, format_percentage};

/// Width of the longest histogram bar
const BAR_WIDTH: usize = 40;

fn title_suffix(report: &SimulationReport) -> &'static str {
    if report.inflation_adjusted {
        " (inflation-adjusted, in today's money)"
    } else {
        ""
    }
}

/// Headline metrics block
pub fn write_metrics(out: &mut impl fmt::Write, report: &SimulationReport) -> fmt::Result {
    let config = &report.config;
    let metrics = &report.metrics;

    writeln!(out, "Simulation results{}", title_suffix(report))?;
    writeln!(
        out,
        "  {} simulations over {} years, seed {}",
        config.num_simulations, config.years, report.seed
    )?;
    writeln!(
        out,
        "  return {} / volatility {} / fee {} / contribution increase {} / inflation {}",
        format_percentage(config.expected_annual_return),
        format_percentage(config.annual_volatility),
        format_percentage(config.annual_fee),
        format_percentage(config.contribution_increase_rate),
        format_percentage(config.annual_inflation),
    )?;
    writeln!(out)?;

    let rows = [
        ("Most probable final value (median)", metrics.median),
        ("Worst-case scenario (10%)", metrics.p10),
        ("Better scenario (90%)", metrics.p90),
        ("Total invested", metrics.total_invested),
        (
            "Final monthly contribution",
            metrics.final_monthly_contribution,
        ),
    ];
    for (label, value) in rows {
        writeln!(out, "  {label:<36} {:>16}", format_currency(value))?;
    }

    Ok(())
}

/// p10/p50/p90 per year next to the invested capital at that year
pub fn write_yearly_table(out: &mut impl fmt::Write, report: &SimulationReport) -> fmt::Result {
    let invested = report.invested.yearly();

    writeln!(out, "Possible portfolio developments{}", title_suffix(report))?;
    writeln!(
        out,
        "  {:>4} {:>16} {:>16} {:>16} {:>16}",
        "Year", "P10", "Median", "P90", "Invested"
    )?;
    for band in &report.yearly_bands {
        let invested_at = invested.get(band.year as usize).copied().unwrap_or(0.0);
        writeln!(
            out,
            "  {:>4} {:>16} {:>16} {:>16} {:>16}",
            band.year,
            format_currency(band.p10),
            format_currency(band.p50),
            format_currency(band.p90),
            format_currency(invested_at),
        )?;
    }

    Ok(())
}

/// Horizontal bar histogram of final values
pub fn write_histogram(
    out: &mut impl fmt::Write,
    report: &SimulationReport,
    bins: usize,
) -> fmt::Result {
    let histogram = Histogram::from_values(&report.capital.final_values(), bins);
    let peak = histogram.counts.iter().copied().max().unwrap_or(0);

    writeln!(
        out,
        "Distribution of possible final values{}",
        title_suffix(report)
    )?;
    for (i, &count) in histogram.counts.iter().enumerate() {
        let bar_len = if peak == 0 {
            0
        } else {
            (count * BAR_WIDTH).div_ceil(peak)
        };
        writeln!(
            out,
            "  {:>9} | {:<width$} {count}",
            format_compact_currency(histogram.bin_start(i)),
            "#".repeat(bar_len),
            width = BAR_WIDTH,
        )?;
    }

    Ok(())
}

/// Full text report: metrics, yearly table and histogram
pub struct TextReport<'a> {
    report: &'a SimulationReport,
    bins: usize,
}

impl<'a> TextReport<'a> {
    pub fn new(report: &'a SimulationReport, bins: usize) -> Self {
        Self { report, bins }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_metrics(f, self.report)?;
        writeln!(f)?;
        write_yearly_table(f, self.report)?;
        writeln!(f)?;
        write_histogram(f, self.report, self.bins)
    }
}

/// Render the full text report into a string
pub fn render_report(report: &SimulationReport, bins: usize) -> String {
    TextReport::new(report, bins).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wealthsim_core::config::SimulationConfig;
    use wealthsim_core::simulation::monte_carlo_simulate;
    use wealthsim_core::stats::build_report;

    fn render(section: impl Fn(&mut String) -> fmt::Result) -> String {
        let mut out = String::new();
        section(&mut out).unwrap();
        out
    }

    fn fee_scenario(annual_inflation: f64) -> SimulationReport {
        let config = SimulationConfig {
            initial_capital: 10_000.0,
            monthly_contribution: 500.0,
            years: 1,
            expected_annual_return: 0.0,
            annual_volatility: 0.0,
            annual_fee: 0.05,
            contribution_increase_rate: 0.0,
            annual_inflation,
            num_simulations: 100,
        };
        build_report(&monte_carlo_simulate(&config, Some(1)).unwrap())
    }

    #[test]
    fn test_metrics_block_shows_headline_values() {
        let text = render(|out| write_metrics(out, &fee_scenario(0.0)));
        assert!(text.starts_with("Simulation results\n"));
        assert!(text.contains("€ 15,200"));
        assert!(text.contains("€ 16,000"));
        assert!(text.contains("seed 1"));
    }

    #[test]
    fn test_inflation_adjusted_titles() {
        let text = render_report(&fee_scenario(0.02), 5);
        assert!(text.contains("Simulation results (inflation-adjusted, in today's money)"));
        assert!(text.contains("Distribution of possible final values (inflation-adjusted"));
    }

    #[test]
    fn test_full_report_separates_sections() {
        let report = fee_scenario(0.0);
        let text = render_report(&report, 4);

        assert_eq!(text, format!("{}", TextReport::new(&report, 4)));
        assert_eq!(text.matches("\n\n").count(), 3);
        assert!(text.contains("\n\nPossible portfolio developments\n"));
        assert!(text.contains("\n\nDistribution of possible final values\n"));
    }

    #[test]
    fn test_yearly_table_has_row_per_year() {
        let text = render(|out| write_yearly_table(out, &fee_scenario(0.0)));
        // Title, header, year 0 and year 1
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().last().unwrap().contains("€ 16,000"));
    }

    #[test]
    fn test_histogram_has_one_line_per_bin() {
        let text = render(|out| write_histogram(out, &fee_scenario(0.0), 8));
        assert_eq!(text.lines().count(), 9);
        // Identical paths all land in the first bin
        assert!(text.lines().nth(1).unwrap().ends_with(" 100"));
    }
}
