use soom_core::models::artifact::ArtifactState;
use soom_core::models::intake::PatientIntake;
use soom_core::models::session::IntakeSession;
use soom_core::vocab::{OnsetCategory, VisitFrequency, Vocabulary};

#[test]
fn empty_intake_renders_dashes() {
    let lines = PatientIntake::default().display_lines();

    assert_eq!(lines[0], "- 이름/나이: - / -");
    assert_eq!(lines[2], "- 주요 증상: -");
    assert_eq!(lines[6], "- 내원 빈도: -");
}

#[test]
fn free_text_entries_are_appended_to_checklists() {
    let intake = PatientIntake {
        symptoms: vec!["허리".to_string(), "무릎".to_string()],
        symptom_other: Some("  턱관절 통증 ".to_string()),
        causes: vec!["스트레스".to_string()],
        cause_other: Some("   ".to_string()),
        ..PatientIntake::default()
    };

    assert_eq!(intake.symptom_list(), vec!["허리", "무릎", "턱관절 통증"]);
    assert_eq!(intake.cause_list(), vec!["스트레스"]);
}

#[test]
fn onset_and_visit_detail_are_shown_in_parentheses() {
    let intake = PatientIntake {
        onset: Some(OnsetCategory::OneToThreeMonths),
        onset_date: Some("2024-03-02".to_string()),
        visit: Some(VisitFrequency::Other),
        visit_detail: Some("격주".to_string()),
        ..PatientIntake::default()
    };

    assert_eq!(intake.onset_text(), "1개월~3개월 (2024-03-02)");
    assert_eq!(intake.visit_text(), "기타 (격주)");
}

#[test]
fn intake_deserializes_from_form_labels() {
    let intake: PatientIntake = serde_json::from_str(
        r#"{ "name": "홍길동", "age": 35, "onset": "3개월 이상", "visit": "주 1~2회" }"#,
    )
    .expect("form payload parses");

    assert_eq!(intake.onset, Some(OnsetCategory::OverThreeMonths));
    assert_eq!(intake.visit, Some(VisitFrequency::OnceOrTwicePerWeek));
    assert!(intake.symptoms.is_empty());
}

#[test]
fn new_session_has_nothing_generated() {
    let session = IntakeSession::new();
    let status = session.status();

    assert_eq!(status.summary, ArtifactState::NotGenerated);
    assert_eq!(status.suggestion, ArtifactState::NotGenerated);
    assert_eq!(status.final_plan, ArtifactState::NotGenerated);
}

#[test]
fn idle_time_is_measured_from_last_touch() {
    let mut session = IntakeSession::new();
    let later = session.touched_at + jiff::SignedDuration::from_secs(90);

    assert_eq!(session.idle_for(later), jiff::SignedDuration::from_secs(90));

    session.touched_at = later;
    assert_eq!(session.idle_for(later), jiff::SignedDuration::ZERO);
}

#[test]
fn vocabulary_lists_have_fixed_sizes() {
    let vocab = Vocabulary::fixed();

    assert_eq!(vocab.covered_items.len(), 9);
    assert_eq!(vocab.uncovered_items.len(), 4);
    assert_eq!(vocab.classifications, vec!["급성", "만성", "웰니스"]);
    assert_eq!(vocab.durations.len(), 5);
    assert_eq!(vocab.symptoms.len(), 24);
    assert_eq!(vocab.causes.len(), 9);
}
