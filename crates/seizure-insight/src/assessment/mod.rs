//! Epilepsy risk assessment: the questionnaire model, the additive scoring
//! engine, the intake guard and the HTTP router.
//!
//! Scoring runs in four passes over one [`AssessmentRecord`]: the evidence
//! score behind the epilepsy probability, seizure-type classification, the
//! short-term risk score and medication guidance. The last three only run
//! once the probability clears the diagnosis threshold.

mod classification;
mod config;
pub mod domain;
pub mod intake;
mod medication;
mod probability;
pub mod result;
mod risk;
pub mod router;

#[cfg(test)]
mod tests;

pub use config::ScoringConfig;
pub use domain::{
    AdvancedDiagnostics, AssessmentRecord, CurrentContext, Demographics, DrugResistance, Gender,
    GeneticProfile, ImagingResult, LastDose, LifestyleSnapshot, Location, MedicationProfile,
    MetabolicImagingResult, OnsetAge, PhysiologyReadings, ProlactinLevel, SeizureFrequency,
    SeizureHistory, SideEffectSeverity, SleepDuration, SurgicalIntervention, TimeOfDay, Weather,
    NO_MEDICATION_SENTINEL,
};
pub use intake::{IntakeGuard, IntakeViolation};
pub use result::{
    AssessmentResult, ClinicalFactor, ConfidenceLevel, GuidanceSource, MedicationGuidance,
    ProbabilityComponent, RiskComponent, RiskFactor, RiskLevel, SeizureTypeMatch,
};
pub use router::{assessment_router, AssessmentResponse};

/// Suggestions returned when the evidence does not support a diagnosis.
pub const GENERIC_SUGGESTIONS: [&str; 3] = [
    "Consult a neurologist for a comprehensive evaluation of your symptoms.",
    "Maintain regular sleep patterns and good sleep hygiene.",
    "Keep a symptom diary to track any unusual episodes or sensations.",
];

/// Stateless engine applying a [`ScoringConfig`] to questionnaire records.
#[derive(Debug, Clone, Default)]
pub struct AssessmentEngine {
    config: ScoringConfig,
}

impl AssessmentEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn assess(&self, record: &AssessmentRecord) -> AssessmentResult {
        let estimate = probability::estimate(record, &self.config);

        if estimate.percentage < self.config.diagnosis_threshold {
            return AssessmentResult {
                epilepsy_probability: estimate.percentage,
                seizure_type: None,
                seizure_risk: RiskLevel::Low,
                risk_score: None,
                suggested_dosage: None,
                lifestyle_suggestions: GENERIC_SUGGESTIONS
                    .iter()
                    .map(|suggestion| suggestion.to_string())
                    .collect(),
                emergency_warning: None,
                confidence_level: estimate.confidence_level,
                confidence_ratio: estimate.confidence_ratio,
                probability_components: estimate.components,
                risk_components: Vec::new(),
            };
        }

        let seizure_type = classification::classify(record);
        let risk = risk::evaluate(record, &self.config);
        let suggested_dosage = medication::guidance(&record.medication, &seizure_type.id);

        AssessmentResult {
            epilepsy_probability: estimate.percentage,
            seizure_type: Some(seizure_type),
            seizure_risk: risk.level,
            risk_score: Some(risk.score),
            suggested_dosage,
            lifestyle_suggestions: risk.suggestions,
            emergency_warning: risk.emergency_warning,
            confidence_level: estimate.confidence_level,
            confidence_ratio: estimate.confidence_ratio,
            probability_components: estimate.components,
            risk_components: risk.components,
        }
    }
}

/// Assess a record with the default scoring constants.
pub fn assess(record: &AssessmentRecord) -> AssessmentResult {
    AssessmentEngine::default().assess(record)
}
