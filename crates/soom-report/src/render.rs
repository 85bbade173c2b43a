use serde::Serialize;
use tera::{Context, Tera};
use tracing::info;

use soom_core::models::artifact::{SuggestionOutcome, SummaryOutcome};
use soom_core::models::plan::{FinalPlan, PlanRow};
use soom_core::models::suggestion::SuggestionDraft;

use crate::error::ReportError;

pub const DISCLAIMER: &str = "※ 본 치료계획은 의료진의 임상적 판단과 환자 동의에 따라 확정되었으며, AI 제안은 참고 자료로만 활용되었습니다.";

pub const NO_SUMMARY: &str = "(요약 없음)";
pub const EMPTY_SUMMARY: &str = "(요약 출력 없음)";
pub const NO_SUGGESTION: &str = "(AI 제안 없음)";
pub const FAILED_SUGGESTION: &str = "(AI 제안 실패)";

const SUGGESTION_TEMPLATE: &str = "📌 AI 제안
- 분류: {{ classification }}
- 기간: {{ duration }}
- 급여 후보: {{ covered }}
- 비급여 후보: {{ uncovered }}
{% if extra %}- 추가 제안(목록 외, 참고): {{ extra }}
{% endif %}
근거: {{ rationale }}
📝 객관적 참고: {{ objective_comment }}
⚠️ 주의사항: {{ caution }}";

const REPORT_TEMPLATE: &str = "=== 환자 문진 요약 ===
{{ summary }}

=== AI 제안(참고) ===
{{ suggestion }}

=== 최종 치료계획(의료진 확정) ===
{% for row in rows %}- {{ row.label }}: {{ row.confirmed }}{% if row.suggested %} (AI 제안: {{ row.suggested }}){% endif %}
{% endfor %}
{{ disclaimer }}";

#[derive(Serialize)]
struct SuggestionContext<'a> {
    classification: &'a str,
    duration: &'a str,
    covered: String,
    uncovered: String,
    extra: String,
    rationale: &'a str,
    objective_comment: &'a str,
    caution: &'a str,
}

#[derive(Serialize)]
struct ReportContext<'a> {
    summary: String,
    suggestion: String,
    rows: Vec<PlanRow>,
    disclaimer: &'a str,
}

/// Holds the parsed templates; build once and share.
pub struct ReportRenderer {
    tera: Tera,
}

impl ReportRenderer {
    pub fn new() -> Result<Self, ReportError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("suggestion.txt", SUGGESTION_TEMPLATE),
            ("report.txt", REPORT_TEMPLATE),
        ])
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;
        Ok(Self { tera })
    }

    /// Text for the AI suggestion panel. Unstructured outcomes fall back to
    /// the raw completion or an inline error message.
    pub fn suggestion_text(&self, outcome: &SuggestionOutcome) -> Result<String, ReportError> {
        match outcome {
            SuggestionOutcome::Structured { draft } => self.render_draft(draft),
            SuggestionOutcome::ParseFailure { raw, .. } if !raw.trim().is_empty() => {
                Ok(raw.clone())
            }
            SuggestionOutcome::ParseFailure { .. } | SuggestionOutcome::Empty => {
                Ok(FAILED_SUGGESTION.to_string())
            }
            SuggestionOutcome::Failed { message, .. } => {
                Ok(format!("⚠️ AI 제안 생성 실패: {message}"))
            }
        }
    }

    /// The final report: summary, AI suggestion for reference, confirmed
    /// plan, disclaimer.
    pub fn report(
        &self,
        summary: Option<&SummaryOutcome>,
        suggestion: Option<&SuggestionOutcome>,
        plan: &FinalPlan,
    ) -> Result<String, ReportError> {
        let suggestion = match suggestion {
            Some(outcome) => self.suggestion_text(outcome)?,
            None => NO_SUGGESTION.to_string(),
        };

        let context = ReportContext {
            summary: summary_text(summary),
            suggestion,
            rows: plan.rows(),
            disclaimer: DISCLAIMER,
        };

        let rendered = self.render("report.txt", &context)?;
        info!(plan_id = %plan.id, report_len = rendered.len(), "final report rendered");
        Ok(rendered)
    }

    fn render_draft(&self, draft: &SuggestionDraft) -> Result<String, ReportError> {
        let context = SuggestionContext {
            classification: draft.classification_label(),
            duration: draft.duration_label(),
            covered: draft.covered_text(),
            uncovered: draft.uncovered_text(),
            extra: draft.extra_suggestions.join(", "),
            rationale: &draft.rationale,
            objective_comment: &draft.objective_comment,
            caution: &draft.caution,
        };
        self.render("suggestion.txt", &context)
    }

    fn render(&self, template_name: &str, context: &impl Serialize) -> Result<String, ReportError> {
        let value = serde_json::to_value(context)?;
        let context =
            Context::from_value(value).map_err(|e| ReportError::TemplateRender(e.to_string()))?;
        Ok(self.tera.render(template_name, &context)?)
    }
}

/// Text for the summary panel and report section.
pub fn summary_text(outcome: Option<&SummaryOutcome>) -> String {
    match outcome {
        None => NO_SUMMARY.to_string(),
        Some(SummaryOutcome::Text { text }) if !text.trim().is_empty() => text.trim().to_string(),
        Some(SummaryOutcome::Text { .. }) | Some(SummaryOutcome::Empty) => {
            EMPTY_SUMMARY.to_string()
        }
        Some(SummaryOutcome::Failed { message, .. }) => format!("⚠️ 요약 생성 실패: {message}"),
    }
}
