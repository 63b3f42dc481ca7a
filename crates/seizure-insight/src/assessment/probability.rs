use super::config::ScoringConfig;
use super::domain::{
    AssessmentRecord, DrugResistance, ImagingResult, MetabolicImagingResult, ProlactinLevel,
};
use super::result::{ClinicalFactor, ConfidenceLevel, ProbabilityComponent};

const COMORBIDITY_POINTS_EACH: u16 = 3;
const COMORBIDITY_POINTS_MAX: u16 = 12;

pub(crate) struct ProbabilityEstimate {
    pub percentage: f64,
    pub confidence_ratio: f64,
    pub confidence_level: ConfidenceLevel,
    pub components: Vec<ProbabilityComponent>,
}

/// Running totals for the evidence score and how much of the questionnaire
/// could have supported it.
#[derive(Default)]
struct EvidenceTally {
    score: u16,
    confidence_factors: u16,
    max_confidence_factors: u16,
    components: Vec<ProbabilityComponent>,
}

impl EvidenceTally {
    /// `applicable` gates the denominator; `present` awards points.
    fn observe(
        &mut self,
        factor: ClinicalFactor,
        applicable: bool,
        present: bool,
        points: u16,
        weight: u16,
    ) {
        if !applicable {
            return;
        }
        self.max_confidence_factors += weight;
        if present {
            self.score += points;
            self.confidence_factors += weight;
            self.components.push(ProbabilityComponent { factor, points });
        }
    }
}

pub(crate) fn estimate(record: &AssessmentRecord, config: &ScoringConfig) -> ProbabilityEstimate {
    let history = &record.history;
    let medication = &record.medication;
    let genetics = &record.genetics;
    let context = &record.context;
    let diagnostics = &record.diagnostics;

    let mut tally = EvidenceTally::default();

    tally.observe(
        ClinicalFactor::StatusEpilepticus,
        true,
        history.had_status_epilepticus,
        15,
        1,
    );
    tally.observe(
        ClinicalFactor::FamilyHistory,
        true,
        history.family_history,
        10,
        1,
    );
    tally.observe(
        ClinicalFactor::FebrileSeizures,
        true,
        history.febrile_seizures,
        8,
        1,
    );
    tally.observe(
        ClinicalFactor::BrainTrauma,
        true,
        history.brain_trauma,
        12,
        1,
    );
    tally.observe(
        ClinicalFactor::SurgicalIntervention,
        true,
        history.surgical_intervention.performed(),
        15,
        1,
    );
    tally.observe(
        ClinicalFactor::OnMedication,
        true,
        medication.is_medicated(),
        20,
        1,
    );
    tally.observe(
        ClinicalFactor::MissedDoses,
        true,
        medication.missed_doses,
        5,
        1,
    );
    tally.observe(
        ClinicalFactor::DrugResistance,
        medication
            .drug_resistance
            .is_some_and(DrugResistance::is_reported),
        medication.drug_resistance == Some(DrugResistance::DrugResistant),
        10,
        1,
    );
    tally.observe(
        ClinicalFactor::GeneticMutation,
        true,
        genetics.genetic_mutation,
        12,
        1,
    );

    let comorbidity_points = (genetics.comorbidities.len() as u16)
        .saturating_mul(COMORBIDITY_POINTS_EACH)
        .min(COMORBIDITY_POINTS_MAX);
    tally.observe(
        ClinicalFactor::Comorbidities,
        true,
        !genetics.comorbidities.is_empty(),
        comorbidity_points,
        1,
    );
    tally.observe(
        ClinicalFactor::NeurodevelopmentalCondition,
        true,
        genetics.neurodevelopmental_condition,
        8,
        1,
    );
    tally.observe(
        ClinicalFactor::RecentEpisode,
        true,
        context.had_episode_last_48h,
        15,
        1,
    );
    tally.observe(
        ClinicalFactor::PostictalSymptoms,
        true,
        !context.postictal_symptoms.is_empty(),
        10,
        1,
    );

    // Diagnostic tests only count toward confidence once a result exists.
    tally.observe(
        ClinicalFactor::AbnormalMriEeg,
        diagnostics.mri_eeg.is_some_and(ImagingResult::is_reported),
        diagnostics.mri_eeg == Some(ImagingResult::Abnormal),
        20,
        2,
    );
    tally.observe(
        ClinicalFactor::VideoEegDiagnosis,
        diagnostics.video_eeg_diagnosis.is_some(),
        diagnostics.video_eeg_diagnosis == Some(true),
        25,
        2,
    );
    tally.observe(
        ClinicalFactor::AbnormalGlucoseMetabolism,
        diagnostics
            .pet_spect
            .is_some_and(MetabolicImagingResult::is_reported),
        diagnostics.pet_spect == Some(MetabolicImagingResult::AbnormalGlucoseMetabolism),
        15,
        1,
    );
    tally.observe(
        ClinicalFactor::ElevatedProlactin,
        diagnostics.prolactin.is_some_and(ProlactinLevel::is_reported),
        diagnostics.prolactin == Some(ProlactinLevel::Elevated),
        10,
        1,
    );

    let confidence_ratio = if tally.max_confidence_factors == 0 {
        0.0
    } else {
        f64::from(tally.confidence_factors) / f64::from(tally.max_confidence_factors)
    };

    let fraction = (f64::from(tally.score) / config.score_divisor).min(config.probability_cap);

    ProbabilityEstimate {
        percentage: fraction * 100.0,
        confidence_ratio,
        confidence_level: confidence_level(confidence_ratio, config),
        components: tally.components,
    }
}

pub(crate) fn confidence_level(ratio: f64, config: &ScoringConfig) -> ConfidenceLevel {
    if ratio > config.high_confidence_ratio {
        ConfidenceLevel::High
    } else if ratio > config.moderate_confidence_ratio {
        ConfidenceLevel::Moderate
    } else {
        ConfidenceLevel::Low
    }
}
