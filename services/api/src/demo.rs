use crate::infra::load_record;
use chrono::Utc;
use clap::{Args, Subcommand};
use seizure_insight::assessment::domain::{
    ImagingResult, Location, OnsetAge, SeizureFrequency, SleepDuration, TimeOfDay,
};
use seizure_insight::assessment::{AssessmentResponse, GuidanceSource};
use seizure_insight::catalog::{self, EMERGENCY_GUIDANCE, SEIZURE_TYPES};
use seizure_insight::error::AppError;
use seizure_insight::{assess, AssessmentRecord, AssessmentResult};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Questionnaire JSON file to assess
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the JSON response body instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum CatalogCommand {
    /// List every seizure type with its common drugs
    SeizureTypes,
    /// List drugs, optionally only those indicated for one seizure type
    Drugs {
        #[arg(long)]
        seizure_type: Option<String>,
    },
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let record = load_record(&args.input)?;
    let result = assess(&record);

    if args.json {
        let response = AssessmentResponse {
            assessed_at: Utc::now(),
            result,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        render_assessment_report(&args.input.display().to_string(), &result);
    }

    Ok(())
}

pub(crate) fn run_catalog(command: CatalogCommand) {
    match command {
        CatalogCommand::SeizureTypes => {
            println!("Seizure types");
            for seizure_type in SEIZURE_TYPES {
                println!("- {} [{}]", seizure_type.name, seizure_type.id);
                println!("    {}", seizure_type.description);
                let drugs: Vec<&str> = seizure_type
                    .common_drugs
                    .iter()
                    .map(|id| catalog::drug_name(id))
                    .collect();
                println!("    Common drugs: {}", drugs.join(", "));
            }
        }
        CatalogCommand::Drugs { seizure_type } => {
            let drugs = match seizure_type.as_deref() {
                Some(id) => {
                    println!("Drugs indicated for {}", catalog::seizure_type_name(id));
                    catalog::drugs_for_seizure_type(id)
                }
                None => {
                    println!("Drug catalog");
                    catalog::DRUGS.iter().collect()
                }
            };

            if drugs.is_empty() {
                println!("  none");
            }
            for drug in drugs {
                println!("- {} ({})", drug.name, drug.brand_names.join(", "));
                println!("    Dosage: {}", drug.dosage_range);
                println!("    Side effects: {}", drug.side_effects.join(", "));
                println!(
                    "    Contraindications: {}",
                    drug.contraindications.join(", ")
                );
            }
        }
    }
}

pub(crate) fn run_emergency() {
    let guidance = &EMERGENCY_GUIDANCE;
    println!("{}", guidance.title);
    println!("{}", guidance.description);

    println!("\nSteps");
    for (index, step) in guidance.steps.iter().enumerate() {
        println!("{}. {}", index + 1, step);
    }

    println!("\nCall emergency services if");
    for condition in guidance.call_emergency_if {
        println!("- {}", condition);
    }

    println!("\nDo not");
    for warning in guidance.do_not_do {
        println!("- {}", warning);
    }
}

pub(crate) fn run_demo() {
    println!("Seizure insight demo (synthetic questionnaires)");

    let samples = [
        ("Occasional dizzy spells, no history", routine_checkup_record()),
        ("Diagnosed focal epilepsy, rough week", focal_high_risk_record()),
    ];

    for (label, record) in samples {
        println!();
        render_assessment_report(label, &assess(&record));
    }
}

fn routine_checkup_record() -> AssessmentRecord {
    let mut record = AssessmentRecord::default();
    record.demographics.age = 42;
    record.history.family_history = true;
    record.lifestyle.sleep_last_24h = Some(SleepDuration::SixToEightHours);
    record.lifestyle.stress_level = 5;
    record.context.location = Some(Location::Home);
    record
}

fn focal_high_risk_record() -> AssessmentRecord {
    let mut record = AssessmentRecord::default();
    record.demographics.age = 19;
    record.history.onset_age = Some(OnsetAge::Adolescence);
    record.history.frequency = Some(SeizureFrequency::Weekly);
    record.history.had_status_epilepticus = true;
    record.medication.current_drugs = vec!["levetiracetam".to_string()];
    record.medication.missed_doses = true;
    record.lifestyle.sleep_last_24h = Some(SleepDuration::UnderFourHours);
    record.lifestyle.stress_level = 8;
    record.lifestyle.time_of_day = Some(TimeOfDay::Morning);
    record.lifestyle.triggers = vec!["sleep-deprivation".to_string(), "stress".to_string()];
    record.context.is_alone = true;
    record.context.postictal_symptoms = vec!["Automatisms".to_string()];
    record.diagnostics.mri_eeg = Some(ImagingResult::Abnormal);
    record.diagnostics.video_eeg_diagnosis = Some(true);
    record
}

pub(crate) fn render_assessment_report(label: &str, result: &AssessmentResult) {
    println!("Assessment: {}", label);
    println!(
        "Epilepsy probability: {} (confidence {}, {:.0}% of answerable evidence present)",
        result.probability_display(),
        result.confidence_level.label(),
        result.confidence_ratio * 100.0
    );

    if !result.probability_components.is_empty() {
        println!("Evidence");
        for component in &result.probability_components {
            println!("  +{:>2} {}", component.points, component.factor.label());
        }
    }

    match &result.seizure_type {
        Some(seizure_type) => {
            println!("Likely seizure type: {} [{}]", seizure_type.name, seizure_type.id);
            if !seizure_type.description.is_empty() {
                println!("  {}", seizure_type.description);
            }
        }
        None => println!("Likely seizure type: not assessed (below diagnosis threshold)"),
    }

    match result.risk_score {
        Some(score) => println!(
            "Short-term seizure risk: {} (score {})",
            result.seizure_risk.label(),
            score
        ),
        None => println!("Short-term seizure risk: {}", result.seizure_risk.label()),
    }
    for component in &result.risk_components {
        println!("  +{} {}", component.points, component.factor.label());
    }

    if let Some(guidance) = &result.suggested_dosage {
        let source = match guidance.source {
            GuidanceSource::CurrentPrescription => "current prescription",
            GuidanceSource::CatalogSuggestion => "catalog suggestion",
        };
        println!("Medication ({}): {}", source, guidance.drug);
        println!("  Dosage: {}", guidance.dosage);
        if let Some(warning) = &guidance.warning {
            println!("  {}", warning);
        }
        println!("  Side effects: {}", guidance.side_effects.join(", "));
    }

    println!("Suggestions");
    for suggestion in &result.lifestyle_suggestions {
        println!("- {}", suggestion);
    }

    if let Some(warning) = &result.emergency_warning {
        println!("WARNING: {}", warning);
    }
}
