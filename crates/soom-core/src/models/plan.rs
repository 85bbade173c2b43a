use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::intake::{ABSENT, join_or_absent};
use super::suggestion::SuggestionDraft;
use crate::vocab::{Classification, TreatmentDuration};

/// What the clinician picked on the final-plan form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StaffSelection {
    pub classification: Classification,
    pub duration: TreatmentDuration,
    #[serde(default)]
    pub covered: Vec<String>,
    #[serde(default)]
    pub uncovered: Vec<String>,
    /// Compounding duration for the custom herbal formula, e.g. `2개월`.
    pub herb_duration: Option<String>,
}

/// The clinician-confirmed plan, with the AI suggestion kept alongside for
/// reference only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FinalPlan {
    pub id: Uuid,
    pub composed_at: jiff::Timestamp,
    pub patient: String,
    pub classification: Classification,
    pub duration: TreatmentDuration,
    pub covered: Vec<String>,
    /// Display entries; the herb duration is already folded into the custom
    /// herbal formula entry.
    pub uncovered: Vec<String>,
    pub reference: Option<SuggestionDraft>,
}

/// One line of the final-plan section: the confirmed value and, when a
/// structured suggestion exists, what the model proposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlanRow {
    pub label: String,
    pub confirmed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested: Option<String>,
}

impl FinalPlan {
    pub fn rows(&self) -> Vec<PlanRow> {
        let reference = self.reference.as_ref();
        vec![
            PlanRow {
                label: "환자".to_string(),
                confirmed: self.patient.clone(),
                suggested: None,
            },
            PlanRow {
                label: "질환 분류".to_string(),
                confirmed: self.classification.label().to_string(),
                suggested: reference.map(|r| r.classification_label().to_string()),
            },
            PlanRow {
                label: "치료 기간".to_string(),
                confirmed: self.duration.label().to_string(),
                suggested: reference.map(|r| r.duration_label().to_string()),
            },
            PlanRow {
                label: "급여 항목".to_string(),
                confirmed: join_or_absent(&self.covered),
                suggested: reference.map(SuggestionDraft::covered_text),
            },
            PlanRow {
                label: "비급여 항목".to_string(),
                confirmed: join_or_absent(&self.uncovered),
                suggested: reference.map(SuggestionDraft::uncovered_text),
            },
        ]
    }
}

/// `홍길동 (35세)`, falling back to `-` for missing parts.
pub(crate) fn patient_label(name: Option<&str>, age: Option<u32>) -> String {
    match (name, age) {
        (Some(name), Some(age)) => format!("{name} ({age}세)"),
        (Some(name), None) => name.to_string(),
        (None, Some(age)) => format!("{ABSENT} ({age}세)"),
        (None, None) => ABSENT.to_string(),
    }
}
