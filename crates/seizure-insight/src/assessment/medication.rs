use crate::catalog::{self, DrugInfo};

use super::domain::MedicationProfile;
use super::result::{GuidanceSource, MedicationGuidance};

/// Guidance for the patient's first listed drug, or a catalog suggestion
/// for the classified seizure type when the patient takes none.
///
/// An unmedicated patient gets the first drug in catalog order indicated for
/// `seizure_type`. A first listed drug missing from the catalog yields no
/// guidance.
pub(crate) fn guidance(
    medication: &MedicationProfile,
    seizure_type: &str,
) -> Option<MedicationGuidance> {
    match medication.active_drugs().next() {
        Some(current) => {
            let drug = catalog::find_drug(current)?;
            let warning = (!drug.treats(seizure_type)).then(|| mismatch_warning(drug));
            Some(describe(drug, warning, GuidanceSource::CurrentPrescription))
        }
        None => catalog::drugs_for_seizure_type(seizure_type)
            .into_iter()
            .next()
            .map(|drug| describe(drug, None, GuidanceSource::CatalogSuggestion)),
    }
}

fn mismatch_warning(drug: &DrugInfo) -> String {
    format!(
        "Note: {} is not typically a first-choice medication for your seizure type. Consult your doctor.",
        drug.name
    )
}

fn describe(
    drug: &DrugInfo,
    warning: Option<String>,
    source: GuidanceSource,
) -> MedicationGuidance {
    MedicationGuidance {
        drug_id: drug.id.to_string(),
        drug: drug.name.to_string(),
        brand_names: owned(drug.brand_names),
        dosage: drug.dosage_range.to_string(),
        warning,
        side_effects: owned(drug.side_effects),
        contraindications: owned(drug.contraindications),
        source,
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taking(drugs: &[&str]) -> MedicationProfile {
        MedicationProfile {
            current_drugs: drugs.iter().map(|id| id.to_string()).collect(),
            ..MedicationProfile::default()
        }
    }

    #[test]
    fn indicated_current_drug_has_no_warning() {
        let guidance = guidance(&taking(&["carbamazepine", "valproate"]), "focal")
            .expect("guidance for current drug");
        assert_eq!(guidance.drug, "Carbamazepine");
        assert_eq!(guidance.source, GuidanceSource::CurrentPrescription);
        assert!(guidance.warning.is_none());
        assert_eq!(guidance.side_effects.len(), 7);
    }

    #[test]
    fn mismatched_current_drug_carries_warning() {
        let guidance = guidance(&taking(&["ethosuximide"]), "focal").expect("guidance");
        let warning = guidance.warning.expect("mismatch warning");
        assert!(warning.contains("Ethosuximide"));
        assert!(warning.contains("not typically a first-choice"));
    }

    #[test]
    fn unmedicated_patient_gets_first_indicated_catalog_drug() {
        let guidance = guidance(&taking(&["none"]), "generalized-myoclonic").expect("guidance");
        assert_eq!(guidance.drug_id, "levetiracetam");
        assert_eq!(guidance.source, GuidanceSource::CatalogSuggestion);
        assert!(guidance.warning.is_none());
    }

    #[test]
    fn unknown_current_drug_yields_no_guidance() {
        assert!(guidance(&taking(&["felbamate"]), "focal").is_none());
    }

    #[test]
    fn unmedicated_with_unknown_type_yields_no_guidance() {
        assert!(guidance(&taking(&[]), "reflex-epilepsy").is_none());
    }
}
