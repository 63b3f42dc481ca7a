use serde::Serialize;

/// Clinical seizure classification offered by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeizureType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub common_drugs: &'static [&'static str],
    /// How strongly the type correlates with the questionnaire symptoms.
    pub probability_threshold: f32,
}

pub static SEIZURE_TYPES: &[SeizureType] = &[
    SeizureType {
        id: "focal",
        name: "Focal (Partial)",
        description: "Seizures that begin in one area of the brain. May or may not involve impaired awareness.",
        common_drugs: &["carbamazepine", "oxcarbazepine", "lamotrigine", "levetiracetam"],
        probability_threshold: 0.65,
    },
    SeizureType {
        id: "generalized-tonic-clonic",
        name: "Generalized (Tonic-Clonic)",
        description: "Seizures affecting the entire brain, causing muscle rigidity followed by convulsions and loss of consciousness.",
        common_drugs: &["valproate", "levetiracetam", "lamotrigine"],
        probability_threshold: 0.70,
    },
    SeizureType {
        id: "generalized-absence",
        name: "Generalized (Absence)",
        description: "Brief lapses of awareness, often with staring spells, typically lasting less than 30 seconds.",
        common_drugs: &["ethosuximide", "valproate", "lamotrigine"],
        probability_threshold: 0.60,
    },
    SeizureType {
        id: "generalized-myoclonic",
        name: "Generalized (Myoclonic)",
        description: "Brief, shock-like jerks of muscles, often in the arms or upper body.",
        common_drugs: &["valproate", "levetiracetam", "clonazepam"],
        probability_threshold: 0.65,
    },
    SeizureType {
        id: "juvenile-myoclonic",
        name: "Juvenile Myoclonic Epilepsy",
        description: "Characterized by myoclonic jerks upon awakening, often with tonic-clonic seizures. Usually begins in adolescence.",
        common_drugs: &["valproate", "levetiracetam", "topiramate"],
        probability_threshold: 0.75,
    },
    SeizureType {
        id: "lennox-gastaut",
        name: "Lennox-Gastaut Syndrome",
        description: "Severe form of epilepsy with multiple types of seizures, developmental delays, and abnormal EEG.",
        common_drugs: &["rufinamide", "clobazam", "felbamate"],
        probability_threshold: 0.80,
    },
    SeizureType {
        id: "temporal-lobe",
        name: "Temporal Lobe Epilepsy",
        description: "Focal seizures originating in the temporal lobe, often with altered awareness and automatisms.",
        common_drugs: &["carbamazepine", "lamotrigine", "levetiracetam"],
        probability_threshold: 0.70,
    },
    SeizureType {
        id: "mixed",
        name: "Mixed / Unknown",
        description: "Multiple seizure types or undetermined seizure types.",
        common_drugs: &["valproate", "lamotrigine", "levetiracetam"],
        probability_threshold: 0.55,
    },
];
