use super::config::ScoringConfig;
use super::domain::{AssessmentRecord, Location, SleepDuration};
use super::result::{RiskComponent, RiskFactor, RiskLevel};

pub(crate) const MEDICATION_ADHERENCE: &str =
    "Take medication as prescribed. Missing doses significantly increases seizure risk.";
pub(crate) const HIGH_STRESS: &str = "Your stress level is high. Try stress reduction techniques like deep breathing, meditation, or gentle exercise.";
pub(crate) const MODERATE_STRESS: &str =
    "Consider incorporating stress management into your daily routine.";
pub(crate) const SEVERE_SLEEP_DEPRIVATION: &str = "You slept less than 4 hours in the last day. Severe sleep deprivation is a major seizure trigger; prioritize rest as soon as possible.";
pub(crate) const SHORT_SLEEP: &str = "Try to improve your sleep by maintaining consistent sleep times and creating a restful environment.";
pub(crate) const SUBSTANCE_REDUCTION: &str = "Caffeine and alcohol can lower the seizure threshold and interact with medications. Consider reducing or avoiding them.";
pub(crate) const RECENT_EPISODE: &str = "You had an episode in the last 48 hours. Be extra cautious and avoid activities where a seizure could be dangerous.";
pub(crate) const AVOID_TRIGGERS: &str =
    "Identify and avoid your known seizure triggers wherever possible.";
pub(crate) const STOP_DRIVING: &str = "URGENT: If you are driving, pull over safely and stop now. Do not drive until your doctor confirms it is safe.";
pub(crate) const AVOID_BEING_ALONE: &str =
    "Avoid being alone right now. Let someone nearby know about your current seizure risk.";
pub(crate) const EMERGENCY_PLAN: &str = "Prepare an emergency plan, including how to reach the nearest medical facility quickly.";
pub(crate) const GENERAL_WELLNESS: &str =
    "Regular exercise, proper hydration, and balanced nutrition can help with seizure control.";
pub(crate) const HIGH_RISK_WARNING: &str = "Your current risk factors suggest a high seizure risk. Consider contacting your healthcare provider.";

const MAX_TRIGGER_POINTS: usize = 3;
const ALONE_ESCALATION_SCORE: u8 = 3;
const HOSPITAL_ESCALATION_SCORE: u8 = 4;

pub(crate) struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
    pub components: Vec<RiskComponent>,
    pub suggestions: Vec<String>,
    pub emergency_warning: Option<String>,
}

#[derive(Default)]
struct RiskTally {
    score: u8,
    components: Vec<RiskComponent>,
    suggestions: Vec<String>,
}

impl RiskTally {
    fn add(&mut self, factor: RiskFactor, points: u8, suggestion: &str) {
        self.score = self.score.saturating_add(points);
        self.components.push(RiskComponent { factor, points });
        self.suggestions.push(suggestion.to_string());
    }

    fn suggest(&mut self, suggestion: &str) {
        self.suggestions.push(suggestion.to_string());
    }
}

pub(crate) fn evaluate(record: &AssessmentRecord, config: &ScoringConfig) -> RiskAssessment {
    let lifestyle = &record.lifestyle;
    let context = &record.context;
    let mut tally = RiskTally::default();

    if record.medication.missed_doses {
        tally.add(RiskFactor::MissedDoses, 3, MEDICATION_ADHERENCE);
    }

    if lifestyle.stress_level > 7 {
        tally.add(RiskFactor::HighStress, 2, HIGH_STRESS);
    } else if lifestyle.stress_level > 4 {
        tally.add(RiskFactor::ModerateStress, 1, MODERATE_STRESS);
    }

    match lifestyle.sleep_last_24h {
        Some(SleepDuration::UnderFourHours) => {
            tally.add(RiskFactor::SevereSleepDeprivation, 3, SEVERE_SLEEP_DEPRIVATION)
        }
        Some(SleepDuration::FourToSixHours) => tally.add(RiskFactor::ShortSleep, 2, SHORT_SLEEP),
        _ => {}
    }

    if lifestyle.caffeine_alcohol_last_24h {
        tally.add(RiskFactor::CaffeineOrAlcohol, 2, SUBSTANCE_REDUCTION);
    }

    if context.had_episode_last_48h {
        tally.add(RiskFactor::RecentEpisode, 3, RECENT_EPISODE);
    }

    if !lifestyle.triggers.is_empty() {
        let points = lifestyle.triggers.len().min(MAX_TRIGGER_POINTS) as u8;
        tally.add(RiskFactor::Triggers, points, AVOID_TRIGGERS);
    }

    if context.location == Some(Location::Driving) {
        tally.add(RiskFactor::Driving, 3, STOP_DRIVING);
    }

    if context.is_alone && tally.score > ALONE_ESCALATION_SCORE {
        tally.suggest(AVOID_BEING_ALONE);
    }

    if !context.has_hospital_access && tally.score > HOSPITAL_ESCALATION_SCORE {
        tally.suggest(EMERGENCY_PLAN);
    }

    tally.suggest(GENERAL_WELLNESS);

    let level = risk_level(tally.score, config);
    let emergency_warning = (level == RiskLevel::High).then(|| HIGH_RISK_WARNING.to_string());

    RiskAssessment {
        score: tally.score,
        level,
        components: tally.components,
        suggestions: tally.suggestions,
        emergency_warning,
    }
}

pub(crate) fn risk_level(score: u8, config: &ScoringConfig) -> RiskLevel {
    if score >= config.high_risk_score {
        RiskLevel::High
    } else if score >= config.moderate_risk_score {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}
