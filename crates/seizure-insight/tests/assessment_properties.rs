//! Properties of the scoring engine exercised through the public crate API.
//!
//! Records are generated across every flag and category the engine reads so
//! that determinism, bounds and threshold contracts hold for the whole input
//! space rather than a handful of fixtures.

use proptest::prelude::*;
use proptest::sample::select;

use seizure_insight::assessment::{
    AdvancedDiagnostics, AssessmentRecord, DrugResistance, ImagingResult, Location,
    MetabolicImagingResult, OnsetAge, ProlactinLevel, RiskLevel, SeizureFrequency, SleepDuration,
    SurgicalIntervention, TimeOfDay, GENERIC_SUGGESTIONS,
};
use seizure_insight::{assess, AssessmentEngine};

const DRUG_IDS: &[&str] = &[
    "none",
    "carbamazepine",
    "lamotrigine",
    "levetiracetam",
    "valproate",
    "ethosuximide",
    "topiramate",
    "felbamate",
];

const SYMPTOMS: &[&str] = &["Aphasia", "Automatisms", "Fatigue", "Confusion", "Headache"];

const COMORBIDITIES: &[&str] = &[
    "intellectual-disability",
    "depression",
    "anxiety",
    "autism",
    "migraine",
];

fn history_flags() -> impl Strategy<Value = [bool; 4]> {
    prop::array::uniform4(any::<bool>())
}

fn surgical() -> impl Strategy<Value = SurgicalIntervention> {
    select(vec![
        SurgicalIntervention::None,
        SurgicalIntervention::Resection,
        SurgicalIntervention::VagusNerveStimulation,
        SurgicalIntervention::Unrecognized,
    ])
}

fn diagnostics() -> impl Strategy<Value = AdvancedDiagnostics> {
    (
        prop::option::of(select(vec![
            ImagingResult::Normal,
            ImagingResult::Abnormal,
            ImagingResult::NotPerformed,
        ])),
        prop::option::of(any::<bool>()),
        prop::option::of(select(vec![
            MetabolicImagingResult::Normal,
            MetabolicImagingResult::AbnormalGlucoseMetabolism,
            MetabolicImagingResult::NotPerformed,
        ])),
        prop::option::of(select(vec![
            ProlactinLevel::Normal,
            ProlactinLevel::Elevated,
            ProlactinLevel::NotTested,
        ])),
    )
        .prop_map(
            |(mri_eeg, video_eeg_diagnosis, pet_spect, prolactin)| AdvancedDiagnostics {
                mri_eeg,
                video_eeg_diagnosis,
                pet_spect,
                prolactin,
            },
        )
}

fn labels(pool: &'static [&'static str], max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(select(pool), 0..=max)
        .prop_map(|ids| ids.into_iter().map(str::to_string).collect())
}

prop_compose! {
    fn record()(
        flags in history_flags(),
        surgical_intervention in surgical(),
        (onset_age, frequency) in (
            prop::option::of(select(vec![
                OnsetAge::Neonatal,
                OnsetAge::Childhood,
                OnsetAge::Adolescence,
                OnsetAge::Adulthood,
            ])),
            prop::option::of(select(vec![
                SeizureFrequency::Daily,
                SeizureFrequency::Weekly,
                SeizureFrequency::Monthly,
            ])),
        ),
        drugs in labels(DRUG_IDS, 2),
        (missed_doses, genetic_mutation, neurodevelopmental_condition) in
            (any::<bool>(), any::<bool>(), any::<bool>()),
        drug_resistance in prop::option::of(select(vec![
            DrugResistance::Responsive,
            DrugResistance::DrugResistant,
            DrugResistance::NotApplicable,
        ])),
        comorbidities in labels(COMORBIDITIES, 5),
        (sleep, caffeine, stress) in (
            prop::option::of(select(vec![
                SleepDuration::UnderFourHours,
                SleepDuration::FourToSixHours,
                SleepDuration::SixToEightHours,
                SleepDuration::OverEightHours,
            ])),
            any::<bool>(),
            0u8..=10,
        ),
        triggers in prop::collection::vec("[a-z-]{3,12}", 0..5),
        (time_of_day, location) in (
            prop::option::of(select(vec![TimeOfDay::Morning, TimeOfDay::Night])),
            prop::option::of(select(vec![Location::Home, Location::Driving])),
        ),
        (is_alone, has_hospital_access, had_episode) in
            (any::<bool>(), any::<bool>(), any::<bool>()),
        (postictal, diagnostic_results) in (labels(SYMPTOMS, 3), diagnostics())
    ) -> AssessmentRecord {
        let mut record = AssessmentRecord::default();
        record.history.had_status_epilepticus = flags[0];
        record.history.family_history = flags[1];
        record.history.febrile_seizures = flags[2];
        record.history.brain_trauma = flags[3];
        record.history.surgical_intervention = surgical_intervention;
        record.history.onset_age = onset_age;
        record.history.frequency = frequency;
        record.medication.current_drugs = drugs;
        record.medication.missed_doses = missed_doses;
        record.medication.drug_resistance = drug_resistance;
        record.genetics.genetic_mutation = genetic_mutation;
        record.genetics.comorbidities = comorbidities;
        record.genetics.neurodevelopmental_condition = neurodevelopmental_condition;
        record.lifestyle.sleep_last_24h = sleep;
        record.lifestyle.caffeine_alcohol_last_24h = caffeine;
        record.lifestyle.stress_level = stress;
        record.lifestyle.triggers = triggers;
        record.lifestyle.time_of_day = time_of_day;
        record.context.location = location;
        record.context.is_alone = is_alone;
        record.context.has_hospital_access = has_hospital_access;
        record.context.had_episode_last_48h = had_episode;
        record.context.postictal_symptoms = postictal;
        record.diagnostics = diagnostic_results;
        record
    }
}

fn expected_risk_level(score: u8) -> RiskLevel {
    if score >= 5 {
        RiskLevel::High
    } else if score >= 2 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

proptest! {
    #[test]
    fn assessment_is_deterministic(record in record()) {
        prop_assert_eq!(assess(&record), assess(&record));
    }

    #[test]
    fn probability_stays_within_cap(record in record()) {
        let result = assess(&record);
        prop_assert!(result.epilepsy_probability >= 0.0);
        prop_assert!(result.epilepsy_probability <= 98.0);
        prop_assert!((0.0..=1.0).contains(&result.confidence_ratio));
    }

    #[test]
    fn raising_a_history_flag_never_lowers_probability(record in record(), flag in 0usize..4) {
        let before = assess(&record).epilepsy_probability;
        let mut raised = record.clone();
        match flag {
            0 => raised.history.had_status_epilepticus = true,
            1 => raised.history.family_history = true,
            2 => raised.history.febrile_seizures = true,
            _ => raised.history.brain_trauma = true,
        }
        prop_assert!(assess(&raised).epilepsy_probability >= before);
    }

    #[test]
    fn below_threshold_results_are_generic(record in record()) {
        let result = assess(&record);
        if result.epilepsy_probability < 60.0 {
            prop_assert_eq!(result.seizure_risk, RiskLevel::Low);
            prop_assert!(result.seizure_type.is_none());
            prop_assert!(result.suggested_dosage.is_none());
            prop_assert!(result.risk_score.is_none());
            prop_assert_eq!(result.lifestyle_suggestions, GENERIC_SUGGESTIONS.to_vec());
        } else {
            prop_assert!(result.seizure_type.is_some());
            prop_assert!(result.risk_score.is_some());
        }
    }

    #[test]
    fn risk_level_follows_risk_score(record in record()) {
        let result = AssessmentEngine::default().assess(&record);
        if let Some(score) = result.risk_score {
            prop_assert_eq!(result.seizure_risk, expected_risk_level(score));
            prop_assert_eq!(
                result.emergency_warning.is_some(),
                result.seizure_risk == RiskLevel::High
            );
            let component_total: u32 = result
                .risk_components
                .iter()
                .map(|component| u32::from(component.points))
                .sum();
            prop_assert_eq!(component_total, u32::from(score));
        }
    }
}
