use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use crate::assessment::domain::{ImagingResult, SleepDuration};
use crate::assessment::{assessment_router, AssessmentEngine, AssessmentRecord, ScoringConfig};

pub(super) fn baseline_record() -> AssessmentRecord {
    let mut record = AssessmentRecord::default();
    record.demographics.age = 34;
    record.lifestyle.sleep_last_24h = Some(SleepDuration::OverEightHours);
    record
}

/// Video-EEG, abnormal MRI/EEG, status epilepticus, one focal drug and
/// aphasia afterwards: 25 + 20 + 15 + 20 + 10 = 90 points.
pub(super) fn focal_presentation() -> AssessmentRecord {
    let mut record = baseline_record();
    record.diagnostics.video_eeg_diagnosis = Some(true);
    record.diagnostics.mri_eeg = Some(ImagingResult::Abnormal);
    record.history.had_status_epilepticus = true;
    record.medication.current_drugs = vec!["carbamazepine".to_string()];
    record.context.postictal_symptoms = vec!["Aphasia".to_string()];
    record
}

/// Strong history that matches no classification rule:
/// 25 + 20 + 12 + 12 + 10 = 79 points, unmedicated.
pub(super) fn unpatterned_history() -> AssessmentRecord {
    let mut record = baseline_record();
    record.diagnostics.video_eeg_diagnosis = Some(true);
    record.diagnostics.mri_eeg = Some(ImagingResult::Abnormal);
    record.history.brain_trauma = true;
    record.genetics.genetic_mutation = true;
    record.history.family_history = true;
    record
}

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::new(ScoringConfig::default())
}

pub(super) fn router() -> Router {
    assessment_router(Arc::new(engine()))
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, found {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn get(router: Router, uri: &str) -> Response {
    router
        .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("route executes")
}

pub(super) async fn post_json(router: Router, uri: &str, body: Vec<u8>) -> Response {
    router
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .expect("request"),
        )
        .await
        .expect("route executes")
}
