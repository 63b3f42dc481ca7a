//! Static reference tables consulted by the scoring engine and the result
//! renderers. Lookups are linear scans over short ordered lists and fail soft
//! on unknown ids.

mod conditions;
mod drugs;
mod emergency;
mod seizure_types;

pub use conditions::{
    Comorbidity, GeneticMutation, ImpactLevel, LifestyleFactor, SeizureTrigger, COMORBIDITIES,
    GENETIC_MUTATIONS, LIFESTYLE_FACTORS, SEIZURE_TRIGGERS,
};
pub use drugs::{DrugInfo, DRUGS};
pub use emergency::{EmergencyGuidance, EMERGENCY_GUIDANCE};
pub use seizure_types::{SeizureType, SEIZURE_TYPES};

/// Label returned by name lookups for ids missing from a catalog.
pub const UNKNOWN_LABEL: &str = "Unknown";

pub fn find_seizure_type(id: &str) -> Option<&'static SeizureType> {
    SEIZURE_TYPES.iter().find(|entry| entry.id == id)
}

pub fn find_drug(id: &str) -> Option<&'static DrugInfo> {
    DRUGS.iter().find(|entry| entry.id == id)
}

pub fn find_comorbidity(id: &str) -> Option<&'static Comorbidity> {
    COMORBIDITIES.iter().find(|entry| entry.id == id)
}

pub fn find_trigger(id: &str) -> Option<&'static SeizureTrigger> {
    SEIZURE_TRIGGERS.iter().find(|entry| entry.id == id)
}

pub fn find_genetic_mutation(id: &str) -> Option<&'static GeneticMutation> {
    GENETIC_MUTATIONS.iter().find(|entry| entry.id == id)
}

/// Display name for a seizure type id, or `"Unknown"`.
pub fn seizure_type_name(id: &str) -> &'static str {
    find_seizure_type(id)
        .map(|entry| entry.name)
        .unwrap_or(UNKNOWN_LABEL)
}

/// Description for a seizure type id, or an empty string.
pub fn seizure_type_description(id: &str) -> &'static str {
    find_seizure_type(id)
        .map(|entry| entry.description)
        .unwrap_or("")
}

/// Display name for a drug id, or `"Unknown"`.
pub fn drug_name(id: &str) -> &'static str {
    find_drug(id).map(|entry| entry.name).unwrap_or(UNKNOWN_LABEL)
}

/// Drugs indicated for the seizure type, in catalog order.
pub fn drugs_for_seizure_type(seizure_type_id: &str) -> Vec<&'static DrugInfo> {
    DRUGS
        .iter()
        .filter(|drug| drug.treats(seizure_type_id))
        .collect()
}
