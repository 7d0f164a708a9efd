use pimc_core::errors::{ErrorInfo, PimcError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("n", "0")
        .with_context("reason", "example")
}

#[test]
fn sampling_error_surface() {
    let err = PimcError::Sampling(sample_info("SAMP001", "sample size must be positive"));
    assert_eq!(err.info().code, "SAMP001");
    assert!(err.info().context.contains_key("n"));
    assert!(err.to_string().starts_with("sampling error:"));
}

#[test]
fn estimation_error_surface() {
    let err = PimcError::Estimation(sample_info("EST001", "zero sample size"));
    assert_eq!(err.info().code, "EST001");
    assert!(err.info().context.contains_key("reason"));
    assert!(err.to_string().starts_with("estimation error:"));
}

#[test]
fn study_error_surface() {
    let err = PimcError::Study(sample_info("STU001", "empty sweep grid"));
    assert_eq!(err.info().code, "STU001");
    assert!(err.to_string().starts_with("study error:"));
}

#[test]
fn stats_error_surface() {
    let err = PimcError::Stats(sample_info("STAT001", "sample too small"));
    assert_eq!(err.info().code, "STAT001");
    assert!(err.to_string().starts_with("stats error:"));
}

#[test]
fn figure_error_surface() {
    let err = PimcError::Figure(sample_info("FIG001", "degenerate axis range"));
    assert_eq!(err.info().code, "FIG001");
    assert!(err.to_string().starts_with("figure error:"));
}

#[test]
fn artifact_error_surface() {
    let err = PimcError::Artifact(sample_info("ART001", "cannot write file"));
    assert_eq!(err.info().code, "ART001");
    assert!(err.to_string().starts_with("artifact error:"));
}

#[test]
fn info_display_lists_context_and_hint() {
    let info = ErrorInfo::new("X001", "boom")
        .with_context("n", "12")
        .with_hint("pass a positive sample size");
    let rendered = info.to_string();
    assert!(rendered.contains("boom (code: X001)"));
    assert!(rendered.contains("context: [n=12]"));
    assert!(rendered.contains("hint: pass a positive sample size"));
}

#[test]
fn errors_round_trip_through_json() {
    let err = PimcError::Stats(sample_info("STAT002", "tied sample"));
    let encoded = serde_json::to_string(&err).expect("serialize error");
    let decoded: PimcError = serde_json::from_str(&encoded).expect("deserialize error");
    assert_eq!(err, decoded);
}
