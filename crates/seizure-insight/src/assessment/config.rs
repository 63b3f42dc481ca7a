use serde::{Deserialize, Serialize};

/// Tunable constants of the additive point model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Probability percentage below which no diagnosis or drug is suggested.
    pub diagnosis_threshold: f64,
    /// Raw evidence score corresponding to certainty.
    pub score_divisor: f64,
    /// Upper bound on the probability fraction.
    pub probability_cap: f64,
    pub high_confidence_ratio: f64,
    pub moderate_confidence_ratio: f64,
    pub high_risk_score: u8,
    pub moderate_risk_score: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            diagnosis_threshold: 60.0,
            score_divisor: 120.0,
            probability_cap: 0.98,
            high_confidence_ratio: 0.65,
            moderate_confidence_ratio: 0.35,
            high_risk_score: 5,
            moderate_risk_score: 2,
        }
    }
}
