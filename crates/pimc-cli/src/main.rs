//! Command line entry point: runs the three pi studies with one master
//! seed, prints the console report, and writes the figure/CSV/JSON
//! artifacts into the output directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use pimc_core::{ErrorInfo, PimcError};
use pimc_fig::{render_convergence_svg, render_distributions_svg};
use pimc_study::report;
use pimc_study::{
    run_basic_study, run_clt_study, run_convergence_study, write_convergence_csv, RunSummary,
    StudyConfig,
};

#[derive(Parser, Debug)]
#[command(name = "pimc", about = "Monte Carlo pi estimation and CLT study")]
struct Cli {
    /// Master seed; every random stream in the run derives from it.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Directory receiving the figures, the CSV, and the run summary.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), PimcError> {
    fs::create_dir_all(&cli.out_dir).map_err(|err| {
        PimcError::Artifact(
            ErrorInfo::new("out-dir-mkdir", err.to_string())
                .with_context("path", cli.out_dir.display().to_string()),
        )
    })?;
    let config = StudyConfig::default();

    println!("{}", report::run_header());

    println!();
    println!("{}", report::part_header("Part 1: basic estimation"));
    let basic = run_basic_study(&config, cli.seed)?;
    println!("{}", report::basic_block(&basic));

    println!();
    println!("{}", report::banner());
    println!("{}", report::part_header("Part 2: convergence with sample size"));
    let convergence = run_convergence_study(&config.sweep, cli.seed)?;
    println!("{}", report::sweep_block(&convergence, &config.sweep.milestones));
    let convergence_svg = cli.out_dir.join("pi_convergence.svg");
    write_figure(&convergence_svg, &render_convergence_svg(&convergence.rows)?)?;
    println!("{}", report::saved_line(&convergence_svg));

    println!();
    println!("{}", report::banner());
    println!("{}", report::part_header("Part 3: sampling distribution and the CLT"));
    let panels = run_clt_study(&config.clt, cli.seed)?;
    for panel in &panels {
        println!();
        println!("{}", report::clt_block(&panel.summary));
    }
    let distributions_svg = cli.out_dir.join("sampling_distributions.svg");
    write_figure(&distributions_svg, &render_distributions_svg(&panels)?)?;
    println!();
    println!("{}", report::saved_line(&distributions_svg));

    let csv_path = cli.out_dir.join("convergence.csv");
    write_convergence_csv(&csv_path, &convergence.rows)?;
    let summary_path = cli.out_dir.join("run_summary.json");
    let summaries = panels.iter().map(|panel| panel.summary.clone()).collect();
    let summary = RunSummary::new(cli.seed, config, basic, convergence, summaries)?;
    summary.write(&summary_path)?;

    println!();
    println!(
        "{}",
        report::run_footer(&[convergence_svg, distributions_svg, csv_path, summary_path])
    );
    Ok(())
}

fn write_figure(path: &Path, svg: &str) -> Result<(), PimcError> {
    fs::write(path, svg).map_err(|err| {
        PimcError::Artifact(
            ErrorInfo::new("figure-write", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}
