//! Structured error types shared across the pimc crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`PimcError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (sample sizes, paths, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the pi Monte Carlo pipeline.
///
/// One variant per pipeline stage so a failing run always names the stage
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "stage", content = "detail")]
pub enum PimcError {
    /// Point sampling errors (invalid sample sizes, exhausted sources).
    #[error("sampling error: {0}")]
    Sampling(ErrorInfo),
    /// Estimator errors (degenerate inputs to the pi estimate).
    #[error("estimation error: {0}")]
    Estimation(ErrorInfo),
    /// Study orchestration errors (sweep and replication bookkeeping).
    #[error("study error: {0}")]
    Study(ErrorInfo),
    /// Statistical routine errors (normality test, summary statistics).
    #[error("stats error: {0}")]
    Stats(ErrorInfo),
    /// Figure rendering errors (degenerate data ranges, encoding).
    #[error("figure error: {0}")]
    Figure(ErrorInfo),
    /// Artifact errors (CSV/JSON/SVG file output).
    #[error("artifact error: {0}")]
    Artifact(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl PimcError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            PimcError::Sampling(info)
            | PimcError::Estimation(info)
            | PimcError::Study(info)
            | PimcError::Stats(info)
            | PimcError::Figure(info)
            | PimcError::Artifact(info) => info,
        }
    }
}
