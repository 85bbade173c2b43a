//! Allow-list filtering of model output and reconciliation with the
//! clinician's final selection.
//!
//! The filter is the only place model output becomes a [`SuggestionDraft`]:
//! list fields are cut down to the fixed vocabularies, absent fields get a
//! placeholder, and the caution field is defaulted and then augmented by a
//! keyword table. Running the filter on a draft serialized back to JSON
//! returns the same draft.

use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::intake::PatientIntake;
use crate::models::plan::{FinalPlan, StaffSelection, patient_label};
use crate::models::suggestion::{CAUTION_FALLBACK, NO_COMMENT, NO_RATIONALE, SuggestionDraft};
use crate::vocab::{
    CUSTOM_HERBAL, Classification, TreatmentDuration, is_covered_item, is_uncovered_item,
};

/// A history keyword that always triggers a fixed advisory in the caution
/// field.
#[derive(Debug, Clone, Copy)]
pub struct CautionRule {
    pub keyword: &'static str,
    pub advisory: &'static str,
}

pub const CAUTION_RULES: &[CautionRule] = &[CautionRule {
    keyword: "아토피",
    advisory: "아토피 치료제 복용 중: 항히스타민제·스테로이드 성분과의 병용 여부를 확인하세요.",
}];

/// Turn a parsed model object into a [`SuggestionDraft`].
///
/// Anything that is not a JSON object is treated as an empty object, so
/// every field falls back to its placeholder.
pub fn filter_suggestion(candidate: &Value, intake: &PatientIntake) -> SuggestionDraft {
    let field = |name: &str| candidate.get(name);

    let mut extra = string_items(field("extra_suggestions"));

    let (covered, rejected_covered) = split_by_vocabulary(field("covered"), is_covered_item);
    let (uncovered, rejected_uncovered) =
        split_by_vocabulary(field("uncovered"), is_uncovered_item);

    let rejected = rejected_covered.len() + rejected_uncovered.len();
    if rejected > 0 {
        warn!(
            rejected,
            "suggestion listed items outside the fixed vocabularies; moved to extra suggestions"
        );
    }
    extra.extend(rejected_covered);
    extra.extend(rejected_uncovered);

    let base_caution = text_or(field("caution"), CAUTION_FALLBACK);

    SuggestionDraft {
        classification: field("classification")
            .and_then(Value::as_str)
            .and_then(Classification::from_label),
        duration: field("duration")
            .and_then(Value::as_str)
            .and_then(TreatmentDuration::from_label),
        covered,
        uncovered,
        rationale: text_or(field("rationale"), NO_RATIONALE),
        objective_comment: text_or(field("objective_comment"), NO_COMMENT),
        caution: augment_caution(base_caution, intake.history()),
        extra_suggestions: dedup(extra),
    }
}

/// Append the advisory of every rule whose keyword appears in the history
/// but not yet in the caution text.
pub fn augment_caution(mut caution: String, history: Option<&str>) -> String {
    let Some(history) = history else {
        return caution;
    };

    for rule in CAUTION_RULES {
        if history.contains(rule.keyword) && !caution.contains(rule.keyword) {
            info!(keyword = rule.keyword, "appending caution advisory");
            caution.push(' ');
            caution.push_str(rule.advisory);
        }
    }
    caution
}

/// Build the final plan from the clinician's selection.
///
/// The selection is authoritative: items outside the fixed vocabularies are
/// rejected rather than dropped, and the AI suggestion is only carried along
/// for comparison. A herb duration is folded into the custom herbal formula
/// entry and is rejected when the formula was not selected.
pub fn compose_final_plan(
    intake: &PatientIntake,
    reference: Option<&SuggestionDraft>,
    selection: &StaffSelection,
) -> Result<FinalPlan, CoreError> {
    let covered = validate_items("covered", &selection.covered, is_covered_item)?;
    let mut uncovered = validate_items("uncovered", &selection.uncovered, is_uncovered_item)?;

    let herb_duration = selection
        .herb_duration
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());

    if let Some(herb) = herb_duration {
        let folded = format!("{CUSTOM_HERBAL} ({herb})");
        let entry = uncovered
            .iter_mut()
            .find(|item| item.as_str() == CUSTOM_HERBAL)
            .ok_or_else(|| CoreError::HerbDurationWithoutFormula {
                duration: herb.to_string(),
            })?;
        *entry = folded;
    }

    let plan = FinalPlan {
        id: Uuid::new_v4(),
        composed_at: jiff::Timestamp::now(),
        patient: patient_label(intake.name(), intake.age),
        classification: selection.classification,
        duration: selection.duration,
        covered,
        uncovered,
        reference: reference.cloned(),
    };

    info!(
        plan_id = %plan.id,
        covered = plan.covered.len(),
        uncovered = plan.uncovered.len(),
        with_reference = plan.reference.is_some(),
        "final plan composed"
    );

    Ok(plan)
}

fn validate_items(
    field: &'static str,
    items: &[String],
    allowed: fn(&str) -> bool,
) -> Result<Vec<String>, CoreError> {
    let mut accepted: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let item = item.trim();
        if !allowed(item) {
            return Err(CoreError::NotInVocabulary {
                field,
                item: item.to_string(),
            });
        }
        if !accepted.iter().any(|a| a == item) {
            accepted.push(item.to_string());
        }
    }
    Ok(accepted)
}

/// Split a JSON list into (vocabulary items, other strings). Non-string
/// entries are discarded.
fn split_by_vocabulary(
    value: Option<&Value>,
    allowed: fn(&str) -> bool,
) -> (Vec<String>, Vec<String>) {
    let (kept, rejected): (Vec<String>, Vec<String>) =
        string_items(value).into_iter().partition(|item| allowed(item));
    (dedup(kept), rejected)
}

/// Non-empty trimmed strings from a JSON array. A bare string counts as a
/// one-item list; anything else yields nothing.
fn string_items(value: Option<&Value>) -> Vec<String> {
    let items: Vec<&str> = match value {
        Some(Value::Array(values)) => values.iter().filter_map(Value::as_str).collect(),
        Some(Value::String(s)) => vec![s.as_str()],
        _ => Vec::new(),
    };
    items
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn text_or(value: Option<&Value>, placeholder: &str) -> String {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(placeholder)
        .to_string()
}

fn dedup(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
