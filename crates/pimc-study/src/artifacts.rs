//! Numeric file artifacts of a run: the convergence CSV and the JSON run
//! summary.

use std::fs;
use std::path::Path;

use pimc_core::{ErrorInfo, PimcError};
use pimc_mc::ExperimentResult;
use serde::{Deserialize, Serialize};

use crate::clt::DistributionSummary;
use crate::config::StudyConfig;
use crate::convergence::ConvergenceReport;
use crate::hash::stable_hash_string;

/// Writes the sweep rows as `n,estimate,error` CSV, overwriting `path`.
pub fn write_convergence_csv(path: &Path, rows: &[ExperimentResult]) -> Result<(), PimcError> {
    let mut contents = String::from("n,estimate,error\n");
    for row in rows {
        contents.push_str(&format!(
            "{},{:.6},{:.6}\n",
            row.n, row.estimate, row.error
        ));
    }
    fs::write(path, contents).map_err(|err| {
        PimcError::Artifact(
            ErrorInfo::new("csv-write", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}

/// Machine-readable record of one complete run.
///
/// Contains no timestamps or host details, so two runs at the same seed
/// produce byte-identical summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Master seed every random stream in the run descends from.
    pub master_seed: u64,
    /// Effective study parameters.
    pub config: StudyConfig,
    /// Basic estimation rows.
    pub basic: Vec<ExperimentResult>,
    /// Convergence sweep rows and slope fit.
    pub convergence: ConvergenceReport,
    /// Per-size sampling-distribution summaries.
    pub distributions: Vec<DistributionSummary>,
    /// SHA-256 over the canonical JSON of the three result blocks above.
    pub results_hash: String,
}

impl RunSummary {
    /// Assembles a summary, hashing the numeric results as it does so.
    pub fn new(
        master_seed: u64,
        config: StudyConfig,
        basic: Vec<ExperimentResult>,
        convergence: ConvergenceReport,
        distributions: Vec<DistributionSummary>,
    ) -> Result<Self, PimcError> {
        let results_hash = stable_hash_string(&(&basic, &convergence, &distributions))?;
        Ok(Self {
            master_seed,
            config,
            basic,
            convergence,
            distributions,
            results_hash,
        })
    }

    /// Writes the summary to a pretty-printed JSON file.
    pub fn write(&self, path: &Path) -> Result<(), PimcError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                PimcError::Artifact(
                    ErrorInfo::new("summary-mkdir", err.to_string())
                        .with_context("path", parent.display().to_string()),
                )
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            PimcError::Artifact(
                ErrorInfo::new("summary-serialize", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        fs::write(path, json).map_err(|err| {
            PimcError::Artifact(
                ErrorInfo::new("summary-write", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Loads a summary from disk.
    pub fn load(path: &Path) -> Result<Self, PimcError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            PimcError::Artifact(
                ErrorInfo::new("summary-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            PimcError::Artifact(
                ErrorInfo::new("summary-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}
