use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::vocab::{OnsetCategory, VisitFrequency};

/// Rendered in place of any absent field.
pub const ABSENT: &str = "-";

/// What the patient filled in on the intake form.
///
/// Every field is independently optional. Blank text is treated the same as
/// a missing value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientIntake {
    pub name: Option<String>,
    pub age: Option<u32>,
    /// Blood pressure and pulse, free text (e.g. `120/80, 맥박 72회`).
    pub vitals: Option<String>,
    /// Checked items from the symptom checklist.
    #[serde(default)]
    pub symptoms: Vec<String>,
    /// Free-text symptom not on the checklist.
    pub symptom_other: Option<String>,
    pub onset: Option<OnsetCategory>,
    pub onset_date: Option<String>,
    /// Checked items from the cause checklist.
    #[serde(default)]
    pub causes: Vec<String>,
    pub cause_other: Option<String>,
    /// Past conditions, medications, ongoing treatment.
    pub history: Option<String>,
    pub visit: Option<VisitFrequency>,
    /// Detail for [`VisitFrequency::Other`].
    pub visit_detail: Option<String>,
}

impl PatientIntake {
    pub fn name(&self) -> Option<&str> {
        non_blank(&self.name)
    }

    pub fn vitals(&self) -> Option<&str> {
        non_blank(&self.vitals)
    }

    pub fn history(&self) -> Option<&str> {
        non_blank(&self.history)
    }

    /// Checked symptoms followed by the free-text entry, if any.
    pub fn symptom_list(&self) -> Vec<String> {
        merge_checklist(&self.symptoms, &self.symptom_other)
    }

    /// Checked causes followed by the free-text entry, if any.
    pub fn cause_list(&self) -> Vec<String> {
        merge_checklist(&self.causes, &self.cause_other)
    }

    /// Onset category with the optional onset date in parentheses.
    pub fn onset_text(&self) -> String {
        let category = self.onset.map(|o| o.label()).unwrap_or(ABSENT);
        match non_blank(&self.onset_date) {
            Some(date) => format!("{category} ({date})"),
            None => category.to_string(),
        }
    }

    pub fn visit_text(&self) -> String {
        match self.visit {
            Some(VisitFrequency::Other) => match non_blank(&self.visit_detail) {
                Some(detail) => format!("{} ({detail})", VisitFrequency::Other.label()),
                None => VisitFrequency::Other.label().to_string(),
            },
            Some(v) => v.label().to_string(),
            None => ABSENT.to_string(),
        }
    }

    /// Display lines shared by the prompts and the final report, one per
    /// field, with `-` for anything absent.
    pub fn display_lines(&self) -> Vec<String> {
        let age = self
            .age
            .map(|a| a.to_string())
            .unwrap_or_else(|| ABSENT.to_string());

        vec![
            format!("- 이름/나이: {} / {age}", self.name().unwrap_or(ABSENT)),
            format!("- 혈압/맥박: {}", self.vitals().unwrap_or(ABSENT)),
            format!("- 주요 증상: {}", join_or_absent(&self.symptom_list())),
            format!("- 증상 시작: {}", self.onset_text()),
            format!("- 원인: {}", join_or_absent(&self.cause_list())),
            format!("- 과거 병력/약물: {}", self.history().unwrap_or(ABSENT)),
            format!("- 내원 빈도: {}", self.visit_text()),
        ]
    }
}

/// Join with `, `, or `-` for an empty list.
pub fn join_or_absent(items: &[String]) -> String {
    if items.is_empty() {
        ABSENT.to_string()
    } else {
        items.join(", ")
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn merge_checklist(checked: &[String], other: &Option<String>) -> Vec<String> {
    let mut merged: Vec<String> = checked
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if let Some(extra) = non_blank(other) {
        merged.push(extra.to_string());
    }
    merged
}
