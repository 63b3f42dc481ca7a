use metrics_exporter_prometheus::PrometheusHandle;
use seizure_insight::assessment::IntakeGuard;
use seizure_insight::error::AppError;
use seizure_insight::AssessmentRecord;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read a questionnaire from disk and run it through the intake guard.
pub(crate) fn load_record(path: &Path) -> Result<AssessmentRecord, AppError> {
    let raw = std::fs::read(path)?;
    parse_record(&raw)
}

pub(crate) fn parse_record(raw: &[u8]) -> Result<AssessmentRecord, AppError> {
    let record: AssessmentRecord = serde_json::from_slice(raw)?;
    IntakeGuard.check(&record)?;
    Ok(record)
}
