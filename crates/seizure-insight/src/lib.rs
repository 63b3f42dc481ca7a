//! Seizure Insight: heuristic epilepsy risk assessment.
//!
//! The [`assessment`] module holds the scoring engine, a pure function from a
//! questionnaire record to a probability estimate, seizure classification,
//! short-term risk level, medication guidance and lifestyle suggestions.
//! The [`catalog`] module holds the static reference tables it consults.
//! Configuration, telemetry and the HTTP router wrap the engine for the
//! service binary.

pub mod assessment;
pub mod catalog;
pub mod config;
pub mod error;
pub mod telemetry;

pub use assessment::{assess, AssessmentEngine, AssessmentRecord, AssessmentResult};
