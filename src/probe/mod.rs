//! Runtime initialization and element probing
//!
//! Every probe is independent and best-effort: a failed lookup is captured
//! in the report, never propagated as an error. Only a failure to bring up
//! the GStreamer runtime itself aborts a verification run.

use crate::config::{ProbeEntry, VerifyConfig};
use crate::error::{VerifyError, VerifyResult};
use gstreamer as gst;
use gstreamer_editing_services as ges;
use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::debug;

/// Outcome of a single element probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeOutcome {
    pub element: String,
    pub package: String,
    pub ok: bool,
}

/// Aggregated result of one verification run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    /// GES initialization outcome, `None` when the GES check was disabled
    pub ges: Option<bool>,
    /// Element probe outcomes, in configuration order
    pub probes: Vec<ProbeOutcome>,
}

impl VerifyReport {
    /// True when GES (if checked) and every probe succeeded
    pub fn all_ok(&self) -> bool {
        self.ges.unwrap_or(true) && self.probes.iter().all(|p| p.ok)
    }
}

/// Initialize the GStreamer runtime exactly once for the process.
///
/// GStreamer keeps process-global registry state; repeated calls are safe
/// but pointless, so the result of the first call is latched.
pub fn ensure_gst_initialized() -> VerifyResult<()> {
    static INIT: OnceCell<()> = OnceCell::new();
    INIT.get_or_try_init(|| gst::init().map_err(VerifyError::from))?;
    Ok(())
}

/// Initialize GStreamer Editing Services, reporting the boolean outcome.
///
/// Requires the runtime to be initialized first.
pub fn init_editing_services() -> bool {
    match ges::init() {
        Ok(()) => true,
        Err(e) => {
            debug!("GES initialization failed: {}", e);
            false
        }
    }
}

/// Attempt to instantiate the named element, mirroring what a downstream
/// pipeline would do. Instantiation rather than a registry lookup catches
/// plugins that are present but fail to load.
pub fn probe_element(entry: &ProbeEntry) -> ProbeOutcome {
    let instance_name = format!("{}0", entry.element);
    let result = gst::ElementFactory::make(&entry.element)
        .name(instance_name.as_str())
        .build();

    let ok = match result {
        Ok(_) => true,
        Err(e) => {
            debug!("failed to instantiate '{}': {}", entry.element, e);
            false
        }
    };

    ProbeOutcome {
        element: entry.element.clone(),
        package: entry.package.clone(),
        ok,
    }
}

/// Run the full verification sequence: runtime init, GES init, then each
/// configured element probe in order.
pub fn run_verify(config: &VerifyConfig) -> VerifyResult<VerifyReport> {
    ensure_gst_initialized()?;

    let ges = config.check_ges.then(init_editing_services);

    let probes = config.probes.iter().map(probe_element).collect();

    Ok(VerifyReport { ges, probes })
}
