use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::catalog::{self, EMERGENCY_GUIDANCE, SEIZURE_TYPES};
use crate::error::AppError;

use super::domain::AssessmentRecord;
use super::intake::IntakeGuard;
use super::result::AssessmentResult;
use super::AssessmentEngine;

/// Body returned for a completed assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub assessed_at: DateTime<Utc>,
    pub result: AssessmentResult,
}

/// Router builder exposing the assessment endpoint and catalog lookups.
pub fn assessment_router(engine: Arc<AssessmentEngine>) -> Router {
    Router::new()
        .route("/api/v1/assessments", post(assess_handler))
        .route(
            "/api/v1/catalog/seizure-types",
            get(seizure_types_handler),
        )
        .route(
            "/api/v1/catalog/seizure-types/:seizure_type_id",
            get(seizure_type_handler),
        )
        .route(
            "/api/v1/catalog/seizure-types/:seizure_type_id/drugs",
            get(seizure_type_drugs_handler),
        )
        .route("/api/v1/catalog/drugs/:drug_id", get(drug_handler))
        .route("/api/v1/emergency-guidance", get(emergency_handler))
        .with_state(engine)
}

pub(crate) async fn assess_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    body: Bytes,
) -> Response {
    let record = match serde_json::from_slice::<AssessmentRecord>(&body) {
        Ok(record) => record,
        Err(error) => {
            warn!(%error, "rejected undecodable assessment record");
            return AppError::from(error).into_response();
        }
    };

    if let Err(violation) = IntakeGuard.check(&record) {
        warn!(%violation, "assessment intake rejected");
        return AppError::from(violation).into_response();
    }

    let result = engine.assess(&record);
    info!(
        diagnostic = result.is_diagnostic(),
        risk = result.seizure_risk.label(),
        confidence = result.confidence_level.label(),
        "assessment completed"
    );

    let response = AssessmentResponse {
        assessed_at: Utc::now(),
        result,
    };
    (StatusCode::OK, axum::Json(response)).into_response()
}

pub(crate) async fn seizure_types_handler() -> Response {
    (StatusCode::OK, axum::Json(SEIZURE_TYPES)).into_response()
}

pub(crate) async fn seizure_type_handler(Path(seizure_type_id): Path<String>) -> Response {
    let payload = json!({
        "id": seizure_type_id,
        "name": catalog::seizure_type_name(&seizure_type_id),
        "description": catalog::seizure_type_description(&seizure_type_id),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn seizure_type_drugs_handler(Path(seizure_type_id): Path<String>) -> Response {
    let drugs = catalog::drugs_for_seizure_type(&seizure_type_id);
    (StatusCode::OK, axum::Json(drugs)).into_response()
}

pub(crate) async fn drug_handler(Path(drug_id): Path<String>) -> Response {
    let payload = json!({
        "id": drug_id,
        "name": catalog::drug_name(&drug_id),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn emergency_handler() -> Response {
    (StatusCode::OK, axum::Json(&EMERGENCY_GUIDANCE)).into_response()
}
