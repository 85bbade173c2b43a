use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::intake::{ABSENT, join_or_absent};
use crate::vocab::{Classification, TreatmentDuration};

pub const NO_RATIONALE: &str = "근거 없음";
pub const NO_COMMENT: &str = "코멘트 없음";
/// Caution shown when the model left the field blank.
pub const CAUTION_FALLBACK: &str = "특이사항 없음 (모델 출력 누락)";

/// The allow-list-filtered treatment suggestion derived from one completion.
///
/// Field names match the JSON object the model is asked to emit, so a draft
/// serialized back to JSON passes through the filter unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SuggestionDraft {
    /// `None` when the model omitted the field or used an unknown label.
    pub classification: Option<Classification>,
    pub duration: Option<TreatmentDuration>,
    /// Always a subset of [`crate::vocab::COVERED_ITEMS`].
    pub covered: Vec<String>,
    /// Always a subset of [`crate::vocab::UNCOVERED_ITEMS`].
    pub uncovered: Vec<String>,
    pub rationale: String,
    pub objective_comment: String,
    /// Never empty.
    pub caution: String,
    /// Ideas outside the fixed vocabularies. Reference only; never merged
    /// into `covered` or `uncovered`.
    #[serde(default)]
    pub extra_suggestions: Vec<String>,
}

impl SuggestionDraft {
    pub fn classification_label(&self) -> &'static str {
        self.classification.map(|c| c.label()).unwrap_or(ABSENT)
    }

    pub fn duration_label(&self) -> &'static str {
        self.duration.map(|d| d.label()).unwrap_or(ABSENT)
    }

    pub fn covered_text(&self) -> String {
        join_or_absent(&self.covered)
    }

    pub fn uncovered_text(&self) -> String {
        join_or_absent(&self.uncovered)
    }
}
