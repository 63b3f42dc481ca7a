use crate::catalog::{seizure_type_description, seizure_type_name};

use super::domain::{AssessmentRecord, OnsetAge, SeizureFrequency, TimeOfDay};
use super::result::SeizureTypeMatch;

/// Chosen when no pattern rule matches.
pub(crate) const DEFAULT_SEIZURE_TYPE: &str = "mixed";

const PRIOR_CLASSIFICATION_SCORE: u8 = 30;

/// Candidate seizure type with its pattern score, kept in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub seizure_type: String,
    pub score: u8,
}

pub(crate) fn candidates(record: &AssessmentRecord) -> Vec<Candidate> {
    let history = &record.history;
    let context = &record.context;
    let mut candidates = Vec::new();
    let mut push = |seizure_type: &str, score: u8| {
        candidates.push(Candidate {
            seizure_type: seizure_type.to_string(),
            score,
        })
    };

    if context.has_postictal_symptom("Aphasia") || context.has_postictal_symptom("Automatisms") {
        push("focal", 20);
        push("temporal-lobe", 15);
    }

    if history.had_status_epilepticus
        || context.has_postictal_symptom("Fatigue")
        || context.has_postictal_symptom("Confusion")
    {
        push("generalized-tonic-clonic", 20);
    }

    if history.frequency == Some(SeizureFrequency::Daily)
        && history.onset_age == Some(OnsetAge::Childhood)
    {
        push("generalized-absence", 15);
    }

    if record.lifestyle.time_of_day == Some(TimeOfDay::Morning) {
        push("generalized-myoclonic", 10);
        let juvenile = if history.onset_age == Some(OnsetAge::Adolescence) {
            20
        } else {
            5
        };
        push("juvenile-myoclonic", juvenile);
    }

    if record.genetics.neurodevelopmental_condition
        && record.genetics.has_comorbidity("intellectual-disability")
    {
        push("lennox-gastaut", 15);
    }

    if let Some(prior) = record
        .prior_seizure_type
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
    {
        push(prior, PRIOR_CLASSIFICATION_SCORE);
    }

    candidates
}

/// Highest-scoring candidate; ties go to the earliest rule.
pub(crate) fn select(mut candidates: Vec<Candidate>) -> String {
    // `sort_by` is stable, so equal scores keep insertion order.
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates
        .into_iter()
        .next()
        .map(|candidate| candidate.seizure_type)
        .unwrap_or_else(|| DEFAULT_SEIZURE_TYPE.to_string())
}

pub(crate) fn classify(record: &AssessmentRecord) -> SeizureTypeMatch {
    let id = select(candidates(record));
    SeizureTypeMatch {
        name: seizure_type_name(&id).to_string(),
        description: seizure_type_description(&id).to_string(),
        id,
    }
}
