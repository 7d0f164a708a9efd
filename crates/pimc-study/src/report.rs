//! Console report blocks, built as plain strings so they can be golden
//! tested without capturing stdout.

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use pimc_mc::ExperimentResult;

use crate::clt::DistributionSummary;
use crate::convergence::ConvergenceReport;

const BANNER_WIDTH: usize = 50;

/// Field width for `n` in the basic estimation lines.
pub const BASIC_N_WIDTH: usize = 6;
/// Field width for `n` in the convergence milestone lines.
pub const SWEEP_N_WIDTH: usize = 7;

/// Heavy separator line.
pub fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Light separator line.
pub fn rule() -> String {
    "-".repeat(BANNER_WIDTH)
}

/// Title block opening the run.
pub fn run_header() -> String {
    format!(
        "{banner}\nMonte Carlo pi estimation\n{banner}\nTrue value of pi = {pi:.10}",
        banner = banner(),
        pi = PI,
    )
}

/// Part title over a light rule.
pub fn part_header(title: &str) -> String {
    format!("{title}\n{}", rule())
}

/// One estimate row, `n` right-aligned to `width`.
pub fn estimate_line(result: &ExperimentResult, width: usize) -> String {
    format!(
        "n = {n:>width$}: pi ~ {estimate:.6}, error = {error:.6}",
        n = result.n,
        estimate = result.estimate,
        error = result.error,
    )
}

/// The basic estimation block, one line per row.
pub fn basic_block(rows: &[ExperimentResult]) -> String {
    rows.iter()
        .map(|row| estimate_line(row, BASIC_N_WIDTH))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The convergence block: a sweep intro plus one echoed line per swept size
/// that is also a milestone.
pub fn sweep_block(report: &ConvergenceReport, milestones: &[u64]) -> String {
    let min_n = report.rows.first().map(|row| row.n).unwrap_or(0);
    let max_n = report.rows.last().map(|row| row.n).unwrap_or(0);
    let mut lines = vec![format!(
        "Sweeping {count} sample sizes from {min_n} to {max_n}...",
        count = report.rows.len(),
    )];
    for row in &report.rows {
        if milestones.contains(&row.n) {
            lines.push(estimate_line(row, SWEEP_N_WIDTH));
        }
    }
    lines.join("\n")
}

/// The per-size block of the sampling-distribution study.
pub fn clt_block(summary: &DistributionSummary) -> String {
    let verdict = if summary.shapiro.p_value > 0.05 {
        "-> fail to reject normality (p > 0.05)"
    } else {
        "-> reject normality (p <= 0.05)"
    };
    format!(
        "Analyzing n = {n}:\n  \
         sample mean: {mean:.6} (theoretical: {tmean:.6})\n  \
         sample std:  {std:.6} (theoretical: {tstd:.6})\n  \
         Shapiro-Wilk: statistic = {w:.4}, p-value = {p:.4}\n  \
         {verdict}",
        n = summary.n,
        mean = summary.empirical_mean,
        tmean = summary.theoretical_mean,
        std = summary.empirical_std,
        tstd = summary.theoretical_std,
        w = summary.shapiro.statistic,
        p = summary.shapiro.p_value,
    )
}

/// Confirmation line for a written file.
pub fn saved_line(path: &Path) -> String {
    format!("Saved: {}", path.display())
}

/// Closing block listing everything the run wrote.
pub fn run_footer(files: &[PathBuf]) -> String {
    let mut lines = vec![banner(), "Analysis complete.".into(), "Generated files:".into()];
    for file in files {
        lines.push(format!("  - {}", file.display()));
    }
    lines.push(banner());
    lines.join("\n")
}
