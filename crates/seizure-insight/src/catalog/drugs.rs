use serde::Serialize;

/// Anti-seizure medication reference entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrugInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub brand_names: &'static [&'static str],
    pub dosage_range: &'static str,
    pub for_seizure_types: &'static [&'static str],
    pub side_effects: &'static [&'static str],
    pub contraindications: &'static [&'static str],
}

impl DrugInfo {
    /// Whether the drug is indicated for the seizure type.
    pub fn treats(&self, seizure_type_id: &str) -> bool {
        self.for_seizure_types.contains(&seizure_type_id)
    }
}

/// Catalog order doubles as suggestion priority.
pub static DRUGS: &[DrugInfo] = &[
    DrugInfo {
        id: "carbamazepine",
        name: "Carbamazepine",
        brand_names: &["Tegretol", "Carbatrol", "Epitol"],
        dosage_range: "Adults: 400-1200 mg/day in divided doses; Children: 10-20 mg/kg/day",
        for_seizure_types: &["focal", "temporal-lobe", "mixed"],
        side_effects: &[
            "Dizziness",
            "Drowsiness",
            "Nausea",
            "Vision changes",
            "Rash",
            "Hyponatremia",
            "Bone marrow suppression (rare)",
        ],
        contraindications: &["Bone marrow depression", "MAOIs within 14 days", "Pregnancy"],
    },
    DrugInfo {
        id: "lamotrigine",
        name: "Lamotrigine",
        brand_names: &["Lamictal"],
        dosage_range: "Adults: 100-400 mg/day; Children: 1-15 mg/kg/day",
        for_seizure_types: &[
            "focal",
            "generalized-tonic-clonic",
            "generalized-absence",
            "mixed",
        ],
        side_effects: &[
            "Rash",
            "Dizziness",
            "Headache",
            "Blurred vision",
            "Nausea",
            "Stevens-Johnson syndrome (rare)",
        ],
        contraindications: &["Previous hypersensitivity to lamotrigine"],
    },
    DrugInfo {
        id: "levetiracetam",
        name: "Levetiracetam",
        brand_names: &["Keppra", "Levroxa"],
        dosage_range: "Adults: 1000-3000 mg/day in 2 doses; Children: 10-60 mg/kg/day",
        for_seizure_types: &[
            "focal",
            "generalized-tonic-clonic",
            "generalized-myoclonic",
            "juvenile-myoclonic",
        ],
        side_effects: &[
            "Somnolence",
            "Fatigue",
            "Irritability",
            "Dizziness",
            "Behavioral changes",
            "Depression",
            "Anxiety",
        ],
        contraindications: &["Severe kidney problems"],
    },
    DrugInfo {
        id: "valproate",
        name: "Valproate",
        brand_names: &["Depakote", "Depakene", "Epilim"],
        dosage_range: "Adults: 15-60 mg/kg/day; Children: 15-60 mg/kg/day",
        for_seizure_types: &[
            "generalized-tonic-clonic",
            "generalized-absence",
            "generalized-myoclonic",
            "juvenile-myoclonic",
            "mixed",
        ],
        side_effects: &[
            "Nausea",
            "Sedation",
            "Weight gain",
            "Tremor",
            "Hair loss",
            "Liver toxicity",
            "Pancreatitis (rare)",
        ],
        contraindications: &["Liver disease", "Urea cycle disorders", "Pregnancy"],
    },
    DrugInfo {
        id: "ethosuximide",
        name: "Ethosuximide",
        brand_names: &["Zarontin"],
        dosage_range: "Adults: 500-1500 mg/day; Children: 20-40 mg/kg/day",
        for_seizure_types: &["generalized-absence"],
        side_effects: &[
            "Nausea",
            "Vomiting",
            "Drowsiness",
            "Hiccups",
            "Headache",
            "Rash",
            "Blood disorders (rare)",
        ],
        contraindications: &["Hypersensitivity to succinimides"],
    },
    DrugInfo {
        id: "oxcarbazepine",
        name: "Oxcarbazepine",
        brand_names: &["Trileptal", "Oxtellar XR"],
        dosage_range: "Adults: 600-2400 mg/day; Children: 8-60 mg/kg/day",
        for_seizure_types: &["focal", "temporal-lobe"],
        side_effects: &[
            "Dizziness",
            "Drowsiness",
            "Nausea",
            "Vomiting",
            "Low sodium levels",
            "Allergic reactions",
        ],
        contraindications: &["Hypersensitivity to oxcarbazepine or carbamazepine"],
    },
    DrugInfo {
        id: "topiramate",
        name: "Topiramate",
        brand_names: &["Topamax", "Trokendi XR"],
        dosage_range: "Adults: 200-400 mg/day; Children: 5-9 mg/kg/day",
        for_seizure_types: &["focal", "generalized-tonic-clonic", "lennox-gastaut"],
        side_effects: &[
            "Cognitive slowing",
            "Word-finding difficulty",
            "Paresthesias",
            "Kidney stones",
            "Weight loss",
            "Glaucoma",
        ],
        contraindications: &["Metabolic acidosis", "Glaucoma"],
    },
    DrugInfo {
        id: "clobazam",
        name: "Clobazam",
        brand_names: &["Onfi", "Sympazan"],
        dosage_range: "Adults: 10-40 mg/day; Children: 0.1-1 mg/kg/day",
        for_seizure_types: &["lennox-gastaut", "mixed"],
        side_effects: &[
            "Drowsiness",
            "Fatigue",
            "Ataxia",
            "Dependence",
            "Respiratory depression",
            "Cognitive impairment",
        ],
        contraindications: &[
            "Severe respiratory insufficiency",
            "Sleep apnea",
            "Myasthenia gravis",
        ],
    },
    DrugInfo {
        id: "rufinamide",
        name: "Rufinamide",
        brand_names: &["Banzel"],
        dosage_range: "Adults: 1600-3200 mg/day; Children: 10-45 mg/kg/day",
        for_seizure_types: &["lennox-gastaut"],
        side_effects: &[
            "Headache",
            "Dizziness",
            "Fatigue",
            "Nausea",
            "QT shortening",
            "Coordination problems",
        ],
        contraindications: &["Familial Short QT syndrome"],
    },
];
