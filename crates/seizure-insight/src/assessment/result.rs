use serde::{Deserialize, Serialize};

/// Short-term seizure risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

/// How much of the questionnaire's evidence supported the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Moderate,
    High,
}

impl ConfidenceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

/// Evidence contributing to the epilepsy probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalFactor {
    StatusEpilepticus,
    FamilyHistory,
    FebrileSeizures,
    BrainTrauma,
    SurgicalIntervention,
    OnMedication,
    MissedDoses,
    DrugResistance,
    GeneticMutation,
    Comorbidities,
    NeurodevelopmentalCondition,
    RecentEpisode,
    PostictalSymptoms,
    AbnormalMriEeg,
    VideoEegDiagnosis,
    AbnormalGlucoseMetabolism,
    ElevatedProlactin,
}

impl ClinicalFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::StatusEpilepticus => "Prior status epilepticus",
            Self::FamilyHistory => "Family history of epilepsy",
            Self::FebrileSeizures => "Febrile seizures",
            Self::BrainTrauma => "Brain trauma",
            Self::SurgicalIntervention => "Surgical intervention",
            Self::OnMedication => "Currently on antiseizure medication",
            Self::MissedDoses => "Missed doses",
            Self::DrugResistance => "Drug-resistant epilepsy",
            Self::GeneticMutation => "Genetic mutation",
            Self::Comorbidities => "Comorbidities",
            Self::NeurodevelopmentalCondition => "Neurodevelopmental condition",
            Self::RecentEpisode => "Episode in the last 48 hours",
            Self::PostictalSymptoms => "Postictal symptoms",
            Self::AbnormalMriEeg => "Abnormal MRI/EEG",
            Self::VideoEegDiagnosis => "Video-EEG diagnosis",
            Self::AbnormalGlucoseMetabolism => "Abnormal PET/SPECT glucose metabolism",
            Self::ElevatedProlactin => "Elevated prolactin",
        }
    }
}

/// Current-state signals contributing to the short-term risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    MissedDoses,
    HighStress,
    ModerateStress,
    SevereSleepDeprivation,
    ShortSleep,
    CaffeineOrAlcohol,
    RecentEpisode,
    Triggers,
    Driving,
}

impl RiskFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::MissedDoses => "Missed doses",
            Self::HighStress => "High stress",
            Self::ModerateStress => "Moderate stress",
            Self::SevereSleepDeprivation => "Under 4 hours of sleep",
            Self::ShortSleep => "4-6 hours of sleep",
            Self::CaffeineOrAlcohol => "Caffeine or alcohol",
            Self::RecentEpisode => "Episode in the last 48 hours",
            Self::Triggers => "Known triggers",
            Self::Driving => "Driving",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbabilityComponent {
    pub factor: ClinicalFactor,
    pub points: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskComponent {
    pub factor: RiskFactor,
    pub points: u8,
}

/// Most likely seizure classification resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeizureTypeMatch {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidanceSource {
    /// The patient's own first listed drug.
    CurrentPrescription,
    /// First catalog drug indicated for the classified seizure type.
    CatalogSuggestion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationGuidance {
    pub drug_id: String,
    pub drug: String,
    pub brand_names: Vec<String>,
    pub dosage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub side_effects: Vec<String>,
    pub contraindications: Vec<String>,
    pub source: GuidanceSource,
}

/// Engine output for one questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Percentage in `0.0..=98.0`.
    pub epilepsy_probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seizure_type: Option<SeizureTypeMatch>,
    pub seizure_risk: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_dosage: Option<MedicationGuidance>,
    pub lifestyle_suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_warning: Option<String>,
    pub confidence_level: ConfidenceLevel,
    pub confidence_ratio: f64,
    #[serde(default)]
    pub probability_components: Vec<ProbabilityComponent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub risk_components: Vec<RiskComponent>,
}

impl AssessmentResult {
    /// Probability rounded to one decimal place, e.g. `75.0%`.
    pub fn probability_display(&self) -> String {
        format!("{:.1}%", self.epilepsy_probability)
    }

    /// Whether the estimate cleared the diagnosis threshold.
    pub fn is_diagnostic(&self) -> bool {
        self.seizure_type.is_some()
    }
}
