use serde::{Deserialize, Serialize};

/// Drug id the questionnaire submits when the patient takes no medication.
pub const NO_MEDICATION_SENTINEL: &str = "none";

/// Completed questionnaire submitted for a single assessment.
///
/// Omitted fields deserialize to their defaults: absent for optional inputs,
/// `false` for flags and empty for sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentRecord {
    pub demographics: Demographics,
    pub history: SeizureHistory,
    pub medication: MedicationProfile,
    pub genetics: GeneticProfile,
    pub lifestyle: LifestyleSnapshot,
    pub physiology: PhysiologyReadings,
    pub context: CurrentContext,
    pub diagnostics: AdvancedDiagnostics,
    /// Seizure type id carried over from an earlier, explicit classification.
    pub prior_seizure_type: Option<String>,
}

impl Default for AssessmentRecord {
    fn default() -> Self {
        Self {
            demographics: Demographics::default(),
            history: SeizureHistory::default(),
            medication: MedicationProfile::default(),
            genetics: GeneticProfile::default(),
            lifestyle: LifestyleSnapshot::default(),
            physiology: PhysiologyReadings::default(),
            context: CurrentContext::default(),
            diagnostics: AdvancedDiagnostics::default(),
            prior_seizure_type: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Demographics {
    pub age: u8,
    pub gender: Gender,
    pub weight_kg: f32,
    pub height_cm: Option<f32>,
}

impl Default for Demographics {
    fn default() -> Self {
        Self {
            age: 30,
            gender: Gender::Unspecified,
            weight_kg: 70.0,
            height_cm: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[default]
    #[serde(other)]
    Unspecified,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeizureHistory {
    pub onset_age: Option<OnsetAge>,
    pub frequency: Option<SeizureFrequency>,
    pub had_status_epilepticus: bool,
    pub family_history: bool,
    pub febrile_seizures: bool,
    pub brain_trauma: bool,
    pub surgical_intervention: SurgicalIntervention,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnsetAge {
    Neonatal,
    Childhood,
    Adolescence,
    Adulthood,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeizureFrequency {
    MultipleDaily,
    Daily,
    Weekly,
    Monthly,
    YearlyOrLess,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurgicalIntervention {
    #[default]
    None,
    Resection,
    VagusNerveStimulation,
    ResponsiveNeurostimulation,
    DeepBrainStimulation,
    Other,
    #[serde(other)]
    Unrecognized,
}

impl SurgicalIntervention {
    /// Whether a recognized procedure took place.
    pub fn performed(self) -> bool {
        !matches!(self, Self::None | Self::Unrecognized)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicationProfile {
    /// Catalog drug ids; may be empty or hold the `"none"` sentinel.
    pub current_drugs: Vec<String>,
    pub time_since_last_dose: Option<LastDose>,
    pub missed_doses: bool,
    pub drug_resistance: Option<DrugResistance>,
    pub side_effects: Option<SideEffectSeverity>,
}

impl MedicationProfile {
    /// Drug ids with the sentinel and blanks removed, in listed order.
    pub fn active_drugs(&self) -> impl Iterator<Item = &str> {
        self.current_drugs
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty() && *id != NO_MEDICATION_SENTINEL)
    }

    pub fn is_medicated(&self) -> bool {
        self.active_drugs().next().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LastDose {
    #[serde(rename = "<6h")]
    UnderSixHours,
    #[serde(rename = "6-12h")]
    SixToTwelveHours,
    #[serde(rename = "12-24h")]
    TwelveToTwentyFourHours,
    #[serde(rename = ">24h")]
    OverTwentyFourHours,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrugResistance {
    Responsive,
    PartiallyResponsive,
    DrugResistant,
    NotApplicable,
    #[serde(other)]
    Unrecognized,
}

impl DrugResistance {
    pub(crate) fn is_reported(self) -> bool {
        !matches!(self, Self::NotApplicable | Self::Unrecognized)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SideEffectSeverity {
    None,
    Mild,
    Moderate,
    Severe,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticProfile {
    pub genetic_mutation: bool,
    /// Catalog comorbidity ids.
    pub comorbidities: Vec<String>,
    pub neurodevelopmental_condition: bool,
}

impl GeneticProfile {
    pub fn has_comorbidity(&self, id: &str) -> bool {
        self.comorbidities.iter().any(|entry| entry == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LifestyleSnapshot {
    pub sleep_last_24h: Option<SleepDuration>,
    pub caffeine_alcohol_last_24h: bool,
    /// Self-reported on a 0-10 scale.
    pub stress_level: u8,
    /// Catalog trigger ids.
    pub triggers: Vec<String>,
    pub time_of_day: Option<TimeOfDay>,
    pub weather: Option<Weather>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepDuration {
    #[serde(rename = "<4h")]
    UnderFourHours,
    #[serde(rename = "4-6h")]
    FourToSixHours,
    #[serde(rename = "6-8h")]
    SixToEightHours,
    #[serde(rename = ">8h")]
    OverEightHours,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Weather {
    Normal,
    Hot,
    Cold,
    Humid,
    PressureChange,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysiologyReadings {
    pub heart_rate_bpm: Option<u16>,
    /// Free-form `systolic/diastolic`, e.g. `120/80`.
    pub blood_pressure: Option<String>,
    pub blood_glucose_mg_dl: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentContext {
    pub location: Option<Location>,
    pub is_alone: bool,
    pub has_hospital_access: bool,
    pub had_episode_last_48h: bool,
    /// Fixed symptom labels such as `Aphasia` or `Confusion`.
    pub postictal_symptoms: Vec<String>,
}

impl Default for CurrentContext {
    fn default() -> Self {
        Self {
            location: None,
            is_alone: false,
            has_hospital_access: true,
            had_episode_last_48h: false,
            postictal_symptoms: Vec::new(),
        }
    }
}

impl CurrentContext {
    pub fn has_postictal_symptom(&self, label: &str) -> bool {
        self.postictal_symptoms
            .iter()
            .any(|symptom| symptom.trim().eq_ignore_ascii_case(label))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    Home,
    Work,
    School,
    Driving,
    Outdoors,
    Public,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedDiagnostics {
    pub mri_eeg: Option<ImagingResult>,
    pub video_eeg_diagnosis: Option<bool>,
    pub pet_spect: Option<MetabolicImagingResult>,
    pub prolactin: Option<ProlactinLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImagingResult {
    Normal,
    Abnormal,
    NotPerformed,
    #[serde(other)]
    Unrecognized,
}

impl ImagingResult {
    pub(crate) fn is_reported(self) -> bool {
        matches!(self, Self::Normal | Self::Abnormal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetabolicImagingResult {
    Normal,
    AbnormalGlucoseMetabolism,
    NotPerformed,
    #[serde(other)]
    Unrecognized,
}

impl MetabolicImagingResult {
    pub(crate) fn is_reported(self) -> bool {
        matches!(self, Self::Normal | Self::AbnormalGlucoseMetabolism)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProlactinLevel {
    Normal,
    Elevated,
    NotTested,
    #[serde(other)]
    Unrecognized,
}

impl ProlactinLevel {
    pub(crate) fn is_reported(self) -> bool {
        matches!(self, Self::Normal | Self::Elevated)
    }
}
