//! Integration tests for the installation verifier
//!
//! These run against whatever GStreamer installation is present, so they
//! assert the shape and ordering of the report rather than which plugins
//! happen to be installed.

use gst_verify::{probe, render_lines, ProbeEntry, VerifyConfig};

/// Skip gracefully on machines without a usable GStreamer runtime.
fn runtime_available() -> bool {
    if probe::ensure_gst_initialized().is_err() {
        eprintln!("skipping: GStreamer runtime not available");
        return false;
    }
    true
}

#[test]
fn test_default_run_report_shape() {
    if !runtime_available() {
        return;
    }

    let config = VerifyConfig::default();
    let report = probe::run_verify(&config).unwrap();

    assert!(report.ges.is_some());
    assert_eq!(report.probes.len(), config.probes.len());

    for (outcome, entry) in report.probes.iter().zip(&config.probes) {
        assert_eq!(outcome.element, entry.element);
        assert_eq!(outcome.package, entry.package);
    }
}

#[test]
fn test_line_sequence_contract() {
    if !runtime_available() {
        return;
    }

    let config = VerifyConfig::default();
    let report = probe::run_verify(&config).unwrap();
    let lines = render_lines(&report);

    // GES line exactly once, first
    assert!(lines[0].ends_with("initializing GES."));
    assert_eq!(
        lines
            .iter()
            .filter(|l| l.contains("initializing GES"))
            .count(),
        1
    );

    // One SUCCESS/FAILURE line per configured element, in order
    for (line, entry) in lines[1..].iter().zip(&config.probes) {
        assert!(line.starts_with("SUCCESS") || line.starts_with("FAILURE"));
        assert!(line.contains(&format!("'{}'", entry.element)));
        assert!(line.contains(&entry.package));
    }

    // DONE is always the last line
    assert_eq!(lines.last().unwrap(), "DONE");
    assert_eq!(lines.len(), config.probes.len() + 2);
}

#[test]
fn test_unknown_element_reports_failure() {
    if !runtime_available() {
        return;
    }

    let entry = ProbeEntry::new("no_such_element_gst_verify_test", "gst-plugins-imaginary");
    let outcome = probe::probe_element(&entry);

    assert!(!outcome.ok);
    assert_eq!(outcome.element, "no_such_element_gst_verify_test");
    assert_eq!(outcome.package, "gst-plugins-imaginary");
}

#[test]
fn test_repeated_runs_are_identical() {
    if !runtime_available() {
        return;
    }

    let config = VerifyConfig::default();
    let first = probe::run_verify(&config).unwrap();
    let second = probe::run_verify(&config).unwrap();

    assert_eq!(render_lines(&first), render_lines(&second));
}

#[test]
fn test_ges_check_can_be_disabled() {
    if !runtime_available() {
        return;
    }

    let config = VerifyConfig {
        check_ges: false,
        ..VerifyConfig::default()
    };
    let report = probe::run_verify(&config).unwrap();

    assert!(report.ges.is_none());
    let lines = render_lines(&report);
    assert!(!lines.iter().any(|l| l.contains("GES")));
    assert_eq!(lines.last().unwrap(), "DONE");
}
