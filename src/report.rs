//! Report rendering and output
//!
//! Rendering is separated from probing so the same report can feed the
//! console contract lines and the machine-readable JSON output.

use crate::error::{VerifyError, VerifyResult};
use crate::probe::{ProbeOutcome, VerifyReport};
use std::io::Write;
use std::path::PathBuf;

/// Status line for the GES initialization step
pub fn ges_line(ok: bool) -> String {
    if ok {
        "SUCCESS initializing GES.".to_string()
    } else {
        "FAILURE initializing GES.".to_string()
    }
}

/// Status line for a single element probe
pub fn probe_line(outcome: &ProbeOutcome) -> String {
    format!(
        "{} loading the '{}' element from {}",
        if outcome.ok { "SUCCESS" } else { "FAILURE" },
        outcome.element,
        outcome.package
    )
}

/// Render the full line sequence for a report: the GES line (when the check
/// ran), one line per probe in order, and the final DONE marker.
pub fn render_lines(report: &VerifyReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.probes.len() + 2);

    if let Some(ges_ok) = report.ges {
        lines.push(ges_line(ges_ok));
    }

    for outcome in &report.probes {
        lines.push(probe_line(outcome));
    }

    lines.push("DONE".to_string());
    lines
}

/// Report output trait for different formats
pub trait Reporter {
    /// Emit the report
    fn report(&self, report: &VerifyReport) -> VerifyResult<()>;

    /// Get reporter name
    fn name(&self) -> &str;
}

/// Console reporter printing the human-readable contract lines to stdout
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, report: &VerifyReport) -> VerifyResult<()> {
        for line in render_lines(report) {
            println!("{}", line);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// JSON reporter appending one report object per run to a file
pub struct JsonReporter {
    file_path: PathBuf,
}

impl JsonReporter {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}

impl Reporter for JsonReporter {
    fn report(&self, report: &VerifyReport) -> VerifyResult<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;

        let record = serde_json::json!({
            "timestamp": timestamp,
            "ges": report.ges,
            "probes": report.probes,
            "all_ok": report.all_ok(),
        });

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)
            .map_err(|e| VerifyError::ReportWrite {
                path: self.file_path.clone(),
                source: e,
            })?;

        writeln!(file, "{}", record).map_err(|e| VerifyError::ReportWrite {
            path: self.file_path.clone(),
            source: e,
        })?;

        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}
