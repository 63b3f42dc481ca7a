use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Low,
    Moderate,
    High,
}

impl ImpactLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Comorbidity {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub impact: ImpactLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeizureTrigger {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeneticMutation {
    pub id: &'static str,
    pub name: &'static str,
    pub associated_seizure_types: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifestyleFactor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub impact: ImpactLevel,
}

pub static COMORBIDITIES: &[Comorbidity] = &[
    Comorbidity {
        id: "intellectual-disability",
        name: "Intellectual Disability",
        description: "Limitations in intellectual functioning and adaptive behavior",
        impact: ImpactLevel::High,
    },
    Comorbidity {
        id: "adhd",
        name: "ADHD",
        description: "Attention-deficit/hyperactivity disorder",
        impact: ImpactLevel::Moderate,
    },
    Comorbidity {
        id: "autism",
        name: "Autism Spectrum Disorder",
        description: "Neurodevelopmental disorder affecting social interaction and communication",
        impact: ImpactLevel::Moderate,
    },
    Comorbidity {
        id: "depression",
        name: "Depression",
        description: "Mood disorder characterized by persistent feelings of sadness",
        impact: ImpactLevel::Moderate,
    },
    Comorbidity {
        id: "anxiety",
        name: "Anxiety",
        description: "Excessive worry or fear that interferes with daily activities",
        impact: ImpactLevel::Moderate,
    },
    Comorbidity {
        id: "migraine",
        name: "Migraine",
        description: "Recurrent headaches that can cause throbbing pain",
        impact: ImpactLevel::Moderate,
    },
];

pub static SEIZURE_TRIGGERS: &[SeizureTrigger] = &[
    SeizureTrigger {
        id: "flashing-lights",
        name: "Flashing lights/screens",
        description: "Visual stimuli like flashing lights or patterns",
    },
    SeizureTrigger {
        id: "loud-noise",
        name: "Loud noise",
        description: "Sudden or loud auditory stimuli",
    },
    SeizureTrigger {
        id: "hot-water",
        name: "Hot water/shower",
        description: "Exposure to hot water or steam",
    },
    SeizureTrigger {
        id: "stress",
        name: "Stressful emotional events",
        description: "Periods of high emotional stress",
    },
    SeizureTrigger {
        id: "missing-meals",
        name: "Missing meals",
        description: "Skipping meals leading to low blood sugar",
    },
];

pub static GENETIC_MUTATIONS: &[GeneticMutation] = &[
    GeneticMutation {
        id: "scn1a",
        name: "SCN1A",
        associated_seizure_types: &["generalized-tonic-clonic", "lennox-gastaut"],
    },
    GeneticMutation {
        id: "kcnq2",
        name: "KCNQ2",
        associated_seizure_types: &["focal"],
    },
    GeneticMutation {
        id: "scn2a",
        name: "SCN2A",
        associated_seizure_types: &["focal", "generalized-tonic-clonic"],
    },
    GeneticMutation {
        id: "tsc1-tsc2",
        name: "TSC1/TSC2",
        associated_seizure_types: &["mixed"],
    },
];

pub static LIFESTYLE_FACTORS: &[LifestyleFactor] = &[
    LifestyleFactor {
        id: "sleep",
        name: "Sleep Deprivation",
        description: "Inadequate or poor quality sleep can trigger seizures.",
        impact: ImpactLevel::High,
    },
    LifestyleFactor {
        id: "stress",
        name: "Stress & Anxiety",
        description: "High levels of stress or anxiety can increase seizure risk.",
        impact: ImpactLevel::High,
    },
    LifestyleFactor {
        id: "alcohol",
        name: "Alcohol Consumption",
        description: "Alcohol can lower seizure threshold and interact with medications.",
        impact: ImpactLevel::High,
    },
    LifestyleFactor {
        id: "missed-medication",
        name: "Missed Medication",
        description: "Missing medication doses can lead to breakthrough seizures.",
        impact: ImpactLevel::High,
    },
    LifestyleFactor {
        id: "light-sensitivity",
        name: "Light Sensitivity",
        description: "Flashing lights or certain visual patterns can trigger seizures in photosensitive individuals.",
        impact: ImpactLevel::Moderate,
    },
    LifestyleFactor {
        id: "diet",
        name: "Diet & Nutrition",
        description: "Poor nutrition or specific dietary factors can influence seizure control.",
        impact: ImpactLevel::Moderate,
    },
    LifestyleFactor {
        id: "exercise",
        name: "Physical Exercise",
        description: "Excessive exercise or dehydration can potentially trigger seizures in some people.",
        impact: ImpactLevel::Moderate,
    },
    LifestyleFactor {
        id: "screen-time",
        name: "Screen Time",
        description: "Extended screen time may affect sleep quality and trigger seizures in some individuals.",
        impact: ImpactLevel::Low,
    },
];
