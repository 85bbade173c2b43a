use soom_core::models::artifact::{FailureKind, SuggestionOutcome, SummaryOutcome};
use soom_core::models::intake::PatientIntake;
use soom_core::models::plan::StaffSelection;
use soom_core::models::suggestion::SuggestionDraft;
use soom_core::reconcile::compose_final_plan;
use soom_core::vocab::{CUSTOM_HERBAL, Classification, TreatmentDuration};
use soom_report::render::{
    DISCLAIMER, FAILED_SUGGESTION, NO_SUGGESTION, NO_SUMMARY, ReportRenderer, summary_text,
};

fn draft() -> SuggestionDraft {
    SuggestionDraft {
        classification: Some(Classification::Chronic),
        duration: Some(TreatmentDuration::FourWeeks),
        covered: vec!["체질침".to_string(), "전침".to_string()],
        uncovered: vec!["약침".to_string()],
        rationale: "증상 기간 및 병력 고려".to_string(),
        objective_comment: "수면·스트레스 관리 병행 권장".to_string(),
        caution: "특이사항 없음".to_string(),
        extra_suggestions: Vec::new(),
    }
}

fn selection() -> StaffSelection {
    StaffSelection {
        classification: Classification::Acute,
        duration: TreatmentDuration::TwoWeeks,
        covered: vec!["전침".to_string(), "핫팩".to_string()],
        uncovered: vec![CUSTOM_HERBAL.to_string()],
        herb_duration: Some("2개월".to_string()),
    }
}

#[test]
fn structured_suggestion_panel_layout() {
    let renderer = ReportRenderer::new().unwrap();
    let text = renderer
        .suggestion_text(&SuggestionOutcome::Structured { draft: draft() })
        .unwrap();

    assert_eq!(
        text,
        "📌 AI 제안\n\
         - 분류: 만성\n\
         - 기간: 4주\n\
         - 급여 후보: 체질침, 전침\n\
         - 비급여 후보: 약침\n\
         \n\
         근거: 증상 기간 및 병력 고려\n\
         📝 객관적 참고: 수면·스트레스 관리 병행 권장\n\
         ⚠️ 주의사항: 특이사항 없음"
    );
}

#[test]
fn extra_suggestions_get_their_own_line() {
    let renderer = ReportRenderer::new().unwrap();
    let mut with_extra = draft();
    with_extra.extra_suggestions = vec!["추나요법".to_string(), "해독주사".to_string()];

    let text = renderer
        .suggestion_text(&SuggestionOutcome::Structured { draft: with_extra })
        .unwrap();

    assert!(text.contains(
        "- 비급여 후보: 약침\n\
         - 추가 제안(목록 외, 참고): 추나요법, 해독주사\n\n근거:"
    ));
}

#[test]
fn parse_failure_shows_raw_text() {
    let renderer = ReportRenderer::new().unwrap();
    let raw = "JSON 형식이 아닌 응답";

    let text = renderer
        .suggestion_text(&SuggestionOutcome::ParseFailure {
            raw: raw.to_string(),
            reason: "no JSON object found".to_string(),
        })
        .unwrap();

    assert_eq!(text, raw);
    assert_eq!(
        renderer.suggestion_text(&SuggestionOutcome::Empty).unwrap(),
        FAILED_SUGGESTION
    );
}

#[test]
fn failed_call_is_shown_inline() {
    let renderer = ReportRenderer::new().unwrap();
    let text = renderer
        .suggestion_text(&SuggestionOutcome::Failed {
            kind: FailureKind::Upstream,
            message: "completion service returned 429: quota".to_string(),
        })
        .unwrap();

    assert!(text.contains("429"));
}

#[test]
fn report_has_three_sections_in_order_and_ends_with_disclaimer() {
    let renderer = ReportRenderer::new().unwrap();
    let reference = draft();
    let plan =
        compose_final_plan(&PatientIntake::default(), Some(&reference), &selection()).unwrap();
    let summary = SummaryOutcome::Text {
        text: "허리 통증으로 내원.\n".to_string(),
    };
    let suggestion = SuggestionOutcome::Structured { draft: reference };

    let report = renderer
        .report(Some(&summary), Some(&suggestion), &plan)
        .unwrap();

    assert!(report.starts_with(
        "=== 환자 문진 요약 ===\n허리 통증으로 내원.\n\n\
         === AI 제안(참고) ===\n📌 AI 제안"
    ));
    let ai = report.find("=== AI 제안(참고) ===").unwrap();
    let final_section = report.find("=== 최종 치료계획(의료진 확정) ===").unwrap();
    assert!(ai < final_section);
    assert!(report.contains("⚠️ 주의사항: 특이사항 없음\n\n=== 최종 치료계획(의료진 확정) ===\n"));

    assert!(report.contains("- 질환 분류: 급성 (AI 제안: 만성)\n"));
    assert!(report.contains("- 치료 기간: 2주 (AI 제안: 4주)\n"));
    assert!(report.contains("- 급여 항목: 전침, 핫팩 (AI 제안: 체질침, 전침)\n"));
    assert!(report.contains(&format!("- 비급여 항목: {CUSTOM_HERBAL} (2개월) (AI 제안: 약침)\n")));
    assert_eq!(report.matches(CUSTOM_HERBAL).count(), 1);

    assert!(report.ends_with(&format!("\n\n{DISCLAIMER}")));
}

#[test]
fn report_without_artifacts_uses_placeholders() {
    let renderer = ReportRenderer::new().unwrap();
    let plan = compose_final_plan(&PatientIntake::default(), None, &selection()).unwrap();

    let report = renderer.report(None, None, &plan).unwrap();

    assert!(report.contains(&format!("=== 환자 문진 요약 ===\n{NO_SUMMARY}\n\n")));
    assert!(report.contains(&format!("=== AI 제안(참고) ===\n{NO_SUGGESTION}\n\n")));
    assert!(report.contains("- 질환 분류: 급성\n"));
    assert!(!report.contains("(AI 제안:"));
}

#[test]
fn blank_summary_text_is_reported_as_empty() {
    let text = summary_text(Some(&SummaryOutcome::Text {
        text: "  ".to_string(),
    }));
    assert_eq!(text, "(요약 출력 없음)");
}
