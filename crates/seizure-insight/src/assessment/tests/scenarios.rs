use super::common::*;

use crate::assessment::domain::{
    DrugResistance, ImagingResult, Location, MetabolicImagingResult, OnsetAge, ProlactinLevel,
    SeizureFrequency, SleepDuration, SurgicalIntervention, TimeOfDay,
};
use crate::assessment::risk::{
    GENERAL_WELLNESS, HIGH_RISK_WARNING, HIGH_STRESS, MEDICATION_ADHERENCE, RECENT_EPISODE,
    SEVERE_SLEEP_DEPRIVATION, STOP_DRIVING, SUBSTANCE_REDUCTION,
};
use crate::assessment::{
    assess, AssessmentEngine, ClinicalFactor, ConfidenceLevel, GuidanceSource,
    ProbabilityComponent, RiskComponent, RiskFactor, RiskLevel, ScoringConfig,
    GENERIC_SUGGESTIONS,
};

#[test]
fn record_without_findings_exits_early() {
    let result = engine().assess(&baseline_record());

    assert_close(result.epilepsy_probability, 0.0);
    assert_eq!(result.seizure_risk, RiskLevel::Low);
    assert!(result.seizure_type.is_none());
    assert!(result.suggested_dosage.is_none());
    assert!(result.emergency_warning.is_none());
    assert!(result.risk_score.is_none());
    assert!(result.risk_components.is_empty());
    assert_eq!(result.lifestyle_suggestions, GENERIC_SUGGESTIONS.to_vec());
    assert_eq!(result.confidence_level, ConfidenceLevel::Low);
    assert_close(result.confidence_ratio, 0.0);
    assert!(!result.is_diagnostic());
}

#[test]
fn focal_presentation_selects_focal_and_current_drug() {
    let result = engine().assess(&focal_presentation());

    // Postictal symptoms add 10 on top of 25 + 20 + 15 + 20.
    assert_close(result.epilepsy_probability, 75.0);
    assert_eq!(result.probability_display(), "75.0%");
    assert_eq!(
        result.probability_components,
        vec![
            ProbabilityComponent {
                factor: ClinicalFactor::StatusEpilepticus,
                points: 15,
            },
            ProbabilityComponent {
                factor: ClinicalFactor::OnMedication,
                points: 20,
            },
            ProbabilityComponent {
                factor: ClinicalFactor::PostictalSymptoms,
                points: 10,
            },
            ProbabilityComponent {
                factor: ClinicalFactor::AbnormalMriEeg,
                points: 20,
            },
            ProbabilityComponent {
                factor: ClinicalFactor::VideoEegDiagnosis,
                points: 25,
            },
        ]
    );

    // 7 of 16 weighted factors: twelve unconditional rows plus two weight-2 tests.
    assert_close(result.confidence_ratio, 7.0 / 16.0);
    assert_eq!(result.confidence_level, ConfidenceLevel::Moderate);

    let seizure_type = result.seizure_type.as_ref().expect("diagnostic result");
    assert_eq!(seizure_type.id, "focal");
    assert_eq!(seizure_type.name, "Focal (Partial)");
    assert!(!seizure_type.description.is_empty());

    let dosage = result.suggested_dosage.as_ref().expect("current drug guidance");
    assert_eq!(dosage.drug_id, "carbamazepine");
    assert_eq!(dosage.source, GuidanceSource::CurrentPrescription);
    assert!(dosage.warning.is_none());

    assert_eq!(result.risk_score, Some(0));
    assert_eq!(result.seizure_risk, RiskLevel::Low);
    assert_eq!(
        result.lifestyle_suggestions,
        vec![GENERAL_WELLNESS.to_string()]
    );
    assert!(result.emergency_warning.is_none());
}

#[test]
fn stacked_current_risks_raise_high_risk_warning() {
    let mut record = focal_presentation();
    record.medication.missed_doses = true;
    record.lifestyle.stress_level = 8;
    record.lifestyle.sleep_last_24h = Some(SleepDuration::UnderFourHours);
    record.lifestyle.caffeine_alcohol_last_24h = true;
    record.context.had_episode_last_48h = true;

    let result = engine().assess(&record);

    assert_close(result.epilepsy_probability, 110.0 / 120.0 * 100.0);
    assert_eq!(result.risk_score, Some(13));
    assert_eq!(result.seizure_risk, RiskLevel::High);
    assert_eq!(result.emergency_warning.as_deref(), Some(HIGH_RISK_WARNING));
    assert_eq!(
        result.lifestyle_suggestions,
        vec![
            MEDICATION_ADHERENCE.to_string(),
            HIGH_STRESS.to_string(),
            SEVERE_SLEEP_DEPRIVATION.to_string(),
            SUBSTANCE_REDUCTION.to_string(),
            RECENT_EPISODE.to_string(),
            GENERAL_WELLNESS.to_string(),
        ]
    );
    assert_eq!(result.risk_components.len(), 5);
}

#[test]
fn driving_without_other_risks_is_moderate_and_urgent() {
    let mut record = focal_presentation();
    record.context.location = Some(Location::Driving);

    let result = engine().assess(&record);

    assert_eq!(result.risk_score, Some(3));
    assert_eq!(result.seizure_risk, RiskLevel::Moderate);
    assert!(result
        .lifestyle_suggestions
        .iter()
        .any(|suggestion| suggestion == STOP_DRIVING));
    assert_eq!(
        result.risk_components,
        vec![RiskComponent {
            factor: RiskFactor::Driving,
            points: 3,
        }]
    );
    assert!(result.emergency_warning.is_none());
}

#[test]
fn threshold_is_inclusive_at_sixty_percent() {
    // 25 + 20 + 15 + 12 = 72 points -> exactly 60%.
    let mut record = baseline_record();
    record.diagnostics.video_eeg_diagnosis = Some(true);
    record.diagnostics.mri_eeg = Some(ImagingResult::Abnormal);
    record.history.had_status_epilepticus = true;
    record.history.brain_trauma = true;

    let result = engine().assess(&record);
    assert_close(result.epilepsy_probability, 60.0);
    assert!(result.is_diagnostic());

    // Status epilepticus alone classifies as tonic-clonic; the unmedicated
    // patient is offered the first catalog drug indicated for it.
    let dosage = result.suggested_dosage.expect("catalog suggestion");
    assert_eq!(dosage.drug_id, "lamotrigine");
    assert_eq!(dosage.source, GuidanceSource::CatalogSuggestion);

    record.history.brain_trauma = false;
    record.history.family_history = true;
    let result = engine().assess(&record);
    assert!(result.epilepsy_probability < 60.0);
    assert!(!result.is_diagnostic());
}

#[test]
fn probability_is_capped_when_every_flag_fires() {
    let mut record = focal_presentation();
    record.history.family_history = true;
    record.history.febrile_seizures = true;
    record.history.brain_trauma = true;
    record.history.surgical_intervention = SurgicalIntervention::Resection;
    record.medication.missed_doses = true;
    record.medication.drug_resistance = Some(DrugResistance::DrugResistant);
    record.genetics.genetic_mutation = true;
    record.genetics.comorbidities = vec!["depression".to_string(), "anxiety".to_string()];
    record.genetics.neurodevelopmental_condition = true;
    record.context.had_episode_last_48h = true;
    record.diagnostics.pet_spect = Some(MetabolicImagingResult::AbnormalGlucoseMetabolism);
    record.diagnostics.prolactin = Some(ProlactinLevel::Elevated);

    let result = engine().assess(&record);
    assert_close(result.epilepsy_probability, 98.0);
    assert_eq!(result.confidence_level, ConfidenceLevel::High);
    assert_close(result.confidence_ratio, 1.0);
}

#[test]
fn unpatterned_history_defaults_to_mixed() {
    let result = engine().assess(&unpatterned_history());

    let seizure_type = result.seizure_type.expect("diagnostic result");
    assert_eq!(seizure_type.id, "mixed");
    assert_eq!(seizure_type.name, "Mixed / Unknown");

    let dosage = result.suggested_dosage.expect("catalog suggestion");
    assert_eq!(dosage.drug_id, "carbamazepine");
    assert_eq!(dosage.source, GuidanceSource::CatalogSuggestion);
}

#[test]
fn adolescent_morning_pattern_selects_juvenile_myoclonic() {
    let mut record = unpatterned_history();
    record.lifestyle.time_of_day = Some(TimeOfDay::Morning);
    record.history.onset_age = Some(OnsetAge::Adolescence);

    let result = engine().assess(&record);
    assert_eq!(
        result.seizure_type.map(|matched| matched.id).as_deref(),
        Some("juvenile-myoclonic")
    );
    assert_eq!(
        result.suggested_dosage.map(|dosage| dosage.drug_id).as_deref(),
        Some("levetiracetam")
    );
}

#[test]
fn childhood_daily_absence_flags_mismatched_drug() {
    let mut record = unpatterned_history();
    record.history.frequency = Some(SeizureFrequency::Daily);
    record.history.onset_age = Some(OnsetAge::Childhood);
    record.medication.current_drugs = vec!["none".to_string(), "carbamazepine".to_string()];

    let result = engine().assess(&record);
    assert_eq!(
        result.seizure_type.as_ref().map(|matched| matched.id.as_str()),
        Some("generalized-absence")
    );
    let dosage = result.suggested_dosage.expect("current drug guidance");
    assert_eq!(dosage.drug, "Carbamazepine");
    assert!(dosage
        .warning
        .expect("mismatch warning")
        .starts_with("Note: Carbamazepine is not typically"));
}

#[test]
fn lennox_gastaut_pattern_suggests_topiramate() {
    let mut record = unpatterned_history();
    record.genetics.neurodevelopmental_condition = true;
    record.genetics.comorbidities = vec!["intellectual-disability".to_string()];

    let result = engine().assess(&record);
    assert_eq!(
        result.seizure_type.map(|matched| matched.id).as_deref(),
        Some("lennox-gastaut")
    );
    assert_eq!(
        result.suggested_dosage.map(|dosage| dosage.drug_id).as_deref(),
        Some("topiramate")
    );
}

#[test]
fn prior_classification_outranks_pattern_rules() {
    let mut record = focal_presentation();
    record.prior_seizure_type = Some("temporal-lobe".to_string());

    let result = engine().assess(&record);
    let seizure_type = result.seizure_type.expect("diagnostic result");
    assert_eq!(seizure_type.id, "temporal-lobe");
    assert_eq!(seizure_type.name, "Temporal Lobe Epilepsy");
}

#[test]
fn unknown_current_drug_yields_no_guidance() {
    let mut record = focal_presentation();
    record.medication.current_drugs = vec!["felbamate".to_string()];

    let result = engine().assess(&record);
    assert!(result.is_diagnostic());
    assert!(result.suggested_dosage.is_none());
}

#[test]
fn lowered_threshold_produces_diagnosis_for_empty_record() {
    let engine = AssessmentEngine::new(ScoringConfig {
        diagnosis_threshold: 0.0,
        ..ScoringConfig::default()
    });

    let result = engine.assess(&baseline_record());
    assert_eq!(
        result.seizure_type.map(|matched| matched.id).as_deref(),
        Some("mixed")
    );
    assert_eq!(result.risk_score, Some(0));
    assert_eq!(result.seizure_risk, RiskLevel::Low);
}

#[test]
fn free_function_matches_default_engine() {
    let record = focal_presentation();
    assert_eq!(assess(&record), AssessmentEngine::default().assess(&record));
}
