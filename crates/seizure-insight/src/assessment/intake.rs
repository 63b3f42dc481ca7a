use super::domain::AssessmentRecord;

/// Validation errors raised before a record reaches the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("age must be between {min} and {max} years (found {found})")]
    AgeOutOfRange { min: u8, max: u8, found: u8 },
    #[error("weight must be above 0 and at most {max} kg (found {found})")]
    WeightOutOfRange { max: f32, found: f32 },
    #[error("height must be above 0 and at most {max} cm (found {found})")]
    HeightOutOfRange { max: f32, found: f32 },
    #[error("stress level must be between 0 and {max} (found {found})")]
    StressOutOfRange { max: u8, found: u8 },
    #[error("heart rate must be between {min} and {max} bpm (found {found})")]
    HeartRateOutOfRange { min: u16, max: u16, found: u16 },
    #[error("blood glucose must be positive (found {found})")]
    InvalidBloodGlucose { found: f32 },
    #[error("blood pressure must look like `120/80` (found {found:?})")]
    MalformedBloodPressure { found: String },
}

const MIN_AGE: u8 = 1;
const MAX_AGE: u8 = 120;
const MAX_WEIGHT_KG: f32 = 500.0;
const MAX_HEIGHT_CM: f32 = 300.0;
const MAX_STRESS: u8 = 10;
const MIN_HEART_RATE: u16 = 20;
const MAX_HEART_RATE: u16 = 300;

/// Range checks applied to questionnaire input at the service boundary.
///
/// The engine itself accepts any record; only the HTTP intake and the CLI
/// reject implausible values.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    /// Return the first violation found, walking sections in record order.
    pub fn check(&self, record: &AssessmentRecord) -> Result<(), IntakeViolation> {
        let demographics = &record.demographics;
        if !(MIN_AGE..=MAX_AGE).contains(&demographics.age) {
            return Err(IntakeViolation::AgeOutOfRange {
                min: MIN_AGE,
                max: MAX_AGE,
                found: demographics.age,
            });
        }

        if !within_positive_bound(demographics.weight_kg, MAX_WEIGHT_KG) {
            return Err(IntakeViolation::WeightOutOfRange {
                max: MAX_WEIGHT_KG,
                found: demographics.weight_kg,
            });
        }

        if let Some(height) = demographics.height_cm {
            if !within_positive_bound(height, MAX_HEIGHT_CM) {
                return Err(IntakeViolation::HeightOutOfRange {
                    max: MAX_HEIGHT_CM,
                    found: height,
                });
            }
        }

        if record.lifestyle.stress_level > MAX_STRESS {
            return Err(IntakeViolation::StressOutOfRange {
                max: MAX_STRESS,
                found: record.lifestyle.stress_level,
            });
        }

        let physiology = &record.physiology;
        if let Some(rate) = physiology.heart_rate_bpm {
            if !(MIN_HEART_RATE..=MAX_HEART_RATE).contains(&rate) {
                return Err(IntakeViolation::HeartRateOutOfRange {
                    min: MIN_HEART_RATE,
                    max: MAX_HEART_RATE,
                    found: rate,
                });
            }
        }

        if let Some(glucose) = physiology.blood_glucose_mg_dl {
            if !(glucose.is_finite() && glucose > 0.0) {
                return Err(IntakeViolation::InvalidBloodGlucose { found: glucose });
            }
        }

        if let Some(pressure) = physiology.blood_pressure.as_deref() {
            if parse_blood_pressure(pressure).is_none() {
                return Err(IntakeViolation::MalformedBloodPressure {
                    found: pressure.to_string(),
                });
            }
        }

        Ok(())
    }
}

fn within_positive_bound(value: f32, max: f32) -> bool {
    value.is_finite() && value > 0.0 && value <= max
}

/// Split a `systolic/diastolic` reading into its two numbers.
pub fn parse_blood_pressure(reading: &str) -> Option<(u16, u16)> {
    let (systolic, diastolic) = reading.trim().split_once('/')?;
    let systolic = systolic.trim().parse().ok()?;
    let diastolic = diastolic.trim().parse().ok()?;
    Some((systolic, diastolic))
}
